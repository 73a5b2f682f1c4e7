//! One project line of the ERD dialog.
//!
//! A row owns only the branch it currently shows. Whether its checkbox is
//! ticked is derived from the dialog's selection every time it is asked, and
//! ticking it produces a [`RowIntent`] for the dialog to apply.

use crate::{
    models::{Branch, BranchId, Project},
    selection::SelectedApps,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Label shown for a row that has no branch to show.
pub const NO_BRANCH_LABEL: &str = "(no branches)";

/// A request from a row to add or remove one branch from the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIntent {
    pub branch: BranchId,
    pub included: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectRow {
    project: Project,
    viewed_branch: Option<BranchId>,
}

impl ProjectRow {
    /// The first branch is shown initially.
    pub fn new(project: Project) -> Self {
        let viewed_branch = project.branches().first().map(|b| b.name.clone());
        Self {
            project,
            viewed_branch,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn viewed_branch(&self) -> Option<&str> {
        self.viewed_branch.as_deref()
    }

    pub fn viewed_branch_label(&self) -> &str {
        match self.viewed_branch.as_deref() {
            Some(id) => self
                .project
                .branch(id)
                .map(Branch::label)
                .unwrap_or(id),
            None => NO_BRANCH_LABEL,
        }
    }

    /// Whether the shown branch is part of `selected`.
    pub fn checked(&self, selected: &SelectedApps) -> bool {
        self.viewed_branch
            .as_deref()
            .is_some_and(|id| selected.contains(id))
    }

    /// Intent to flip the checkbox for the shown branch.
    pub fn toggle(&self, selected: &SelectedApps) -> Option<RowIntent> {
        self.set_checked(!self.checked(selected))
    }

    /// Intent to check or uncheck the shown branch.
    pub fn set_checked(&self, included: bool) -> Option<RowIntent> {
        self.viewed_branch.as_ref().map(|branch| RowIntent {
            branch: branch.clone(),
            included,
        })
    }

    /// Show branch `id`. Returns `false` if the project has no such branch.
    pub fn select_branch(&mut self, id: &str) -> bool {
        if self.project.branch(id).is_none() {
            return false;
        }
        self.viewed_branch = Some(id.to_string());
        true
    }

    /// Show the next branch, wrapping around. Returns `true` if it changed.
    pub fn next_branch(&mut self) -> bool {
        self.step_branch(true)
    }

    /// Show the previous branch, wrapping around. Returns `true` if it changed.
    pub fn previous_branch(&mut self) -> bool {
        self.step_branch(false)
    }

    fn step_branch(&mut self, forward: bool) -> bool {
        let len = self.project.branches().len();
        if len < 2 {
            return false;
        }

        let current = self.viewed_index().unwrap_or(0);
        let target = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.viewed_branch = Some(self.project.branches()[target].name.clone());
        true
    }

    fn viewed_index(&self) -> Option<usize> {
        let id = self.viewed_branch.as_deref()?;
        self.project.branches().iter().position(|b| b.name == id)
    }

    /// Picker over this row's branches with the shown branch highlighted.
    pub fn open_picker(&self, row: usize) -> Option<BranchPicker> {
        if !self.project.has_branches() {
            return None;
        }
        Some(BranchPicker::new(
            row,
            self.project.branches().len(),
            self.viewed_index().unwrap_or(0),
        ))
    }

    pub fn to_list_item(&self, selected: &SelectedApps) -> ListItem<'_> {
        let checkbox = if self.checked(selected) {
            Span::styled("[x] ", Style::default().fg(Color::Green))
        } else {
            Span::raw("[ ] ")
        };

        let branch_style = if self.viewed_branch.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        ListItem::new(Line::from(vec![
            checkbox,
            Span::styled(
                self.project.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("⎇ {}", self.viewed_branch_label()), branch_style),
        ]))
    }
}

/// Single-choice list over the branches of one row.
#[derive(Debug, Clone)]
pub struct BranchPicker {
    row: usize,
    len: usize,
    list_state: ListState,
}

impl BranchPicker {
    fn new(row: usize, len: usize, highlighted: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(highlighted));
        Self {
            row,
            len,
            list_state,
        }
    }

    /// Index of the dialog row this picker belongs to.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn highlighted(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn next(&mut self) {
        let i = (self.highlighted() + 1) % self.len;
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = (self.highlighted() + self.len - 1) % self.len;
        self.list_state.select(Some(i));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, row: &ProjectRow) {
        let height = u16::try_from(self.len)
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let popup = centered_rect(area, 40, height);

        let items: Vec<ListItem> = row
            .project()
            .branches()
            .iter()
            .map(|branch| {
                let marker = if row.viewed_branch() == Some(branch.name.as_str()) {
                    "● "
                } else {
                    "  "
                };
                ListItem::new(format!("{}{}", marker, branch.label()))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title("Select Branch"),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.list_state);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}
