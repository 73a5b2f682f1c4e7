use super::{
    ErdModeState,
    project_row::{BranchPicker, ProjectRow, RowIntent},
};
use crate::{
    models::{BranchId, OrganizationProjects},
    navigation::NavigationRequest,
    selection::SelectedApps,
    session::ERD_DOCTYPES_KEY,
    ui::ErdApp,
    ui::state::typed::{TypedAppState, TypedStateChange},
};
use async_trait::async_trait;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// The "Select Apps" dialog.
pub struct ViewErdDialogState {
    rows: Vec<ProjectRow>,
    selected_apps: SelectedApps,
    list_state: ListState,
    picker: Option<BranchPicker>,
}

impl ViewErdDialogState {
    /// One row per project that has at least one branch, in input order.
    pub fn new(data: Option<&[OrganizationProjects]>) -> Self {
        let rows: Vec<ProjectRow> = data
            .unwrap_or_default()
            .iter()
            .flat_map(OrganizationProjects::projects_with_branches)
            .cloned()
            .map(ProjectRow::new)
            .collect();

        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }

        tracing::debug!(rows = rows.len(), "ERD dialog opened");

        Self {
            rows,
            selected_apps: SelectedApps::new(),
            list_state,
            picker: None,
        }
    }

    pub fn rows(&self) -> &[ProjectRow] {
        &self.rows
    }

    pub fn selected_apps(&self) -> &SelectedApps {
        &self.selected_apps
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    pub fn on_toggle(&mut self, branch: &str, included: bool) {
        let changed = if included {
            self.selected_apps.insert(branch)
        } else {
            self.selected_apps.remove(branch)
        };
        tracing::debug!(branch, included, changed, "toggle applied");
    }

    pub fn apply(&mut self, intent: RowIntent) {
        self.on_toggle(&intent.branch, intent.included);
    }

    /// Clears the cached doctypes and hands the selection to the navigator.
    pub fn on_view_erd(&self, app: &ErdApp) -> NavigationRequest {
        if let Err(e) = app.session().remove_item(ERD_DOCTYPES_KEY) {
            tracing::warn!(key = ERD_DOCTYPES_KEY, error = %e, "failed to clear session key");
        }

        let request = NavigationRequest::project_erd(self.selected_apps.to_vec());
        app.navigate(request.clone());
        request
    }

    fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn current_row_mut(&mut self) -> Option<&mut ProjectRow> {
        let i = self.list_state.selected()?;
        self.rows.get_mut(i)
    }

    fn toggle_current(&mut self) {
        let intent = self
            .list_state
            .selected()
            .and_then(|i| self.rows.get(i))
            .and_then(|row| row.toggle(&self.selected_apps));
        if let Some(intent) = intent {
            self.apply(intent);
        }
    }

    fn cycle_branch(&mut self, forward: bool) {
        if let Some(row) = self.current_row_mut() {
            let changed = if forward {
                row.next_branch()
            } else {
                row.previous_branch()
            };
            if changed {
                tracing::debug!(
                    project = %row.project().name,
                    branch = ?row.viewed_branch(),
                    "branch changed"
                );
            }
        }
    }

    fn open_picker(&mut self) {
        if let Some(i) = self.list_state.selected() {
            self.picker = self.rows.get(i).and_then(|row| row.open_picker(i));
        }
    }

    fn pick_highlighted(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        if let Some(row) = self.rows.get_mut(picker.row()) {
            let id: Option<BranchId> = row
                .project()
                .branches()
                .get(picker.highlighted())
                .map(|b| b.name.clone());
            if let Some(id) = id {
                row.select_branch(&id);
                tracing::debug!(project = %row.project().name, branch = %id, "branch picked");
            }
        }
    }

    fn process_picker_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.previous();
                }
            }
            KeyCode::Down => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.next();
                }
            }
            KeyCode::Enter => self.pick_highlighted(),
            KeyCode::Esc => self.picker = None,
            _ => {}
        }
    }
}

#[async_trait]
impl TypedAppState for ViewErdDialogState {
    type App = ErdApp;
    type StateEnum = ErdModeState;

    fn ui(&mut self, f: &mut Frame, _app: &ErdApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        let title = Paragraph::new("Select Apps")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let description = Paragraph::new("Select the apps to view ERD")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(description, chunks[1]);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| row.to_list_item(&self.selected_apps))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Apps ({} selected)", self.selected_apps.len())),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("→ ");
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);

        let button = Paragraph::new("View ERD")
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[3]);

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑/↓", key_style),
            Span::raw(": Navigate  "),
            Span::styled("Space", key_style),
            Span::raw(": Toggle  "),
            Span::styled("←/→", key_style),
            Span::raw(": Branch  "),
            Span::styled("b", key_style),
            Span::raw(": Pick  "),
            Span::styled("Enter", key_style),
            Span::raw(": View ERD  "),
            Span::styled("q", key_style),
            Span::raw(": Exit"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[4]);

        let area = f.area();
        if let Some(picker) = self.picker.as_mut() {
            if let Some(row) = self.rows.get(picker.row()) {
                picker.render(f, area, row);
            }
        }
    }

    async fn process_key(
        &mut self,
        code: KeyCode,
        app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        if code == KeyCode::Null {
            return TypedStateChange::Keep;
        }

        if self.picker.is_some() {
            self.process_picker_key(code);
            return TypedStateChange::Keep;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => TypedStateChange::Exit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                TypedStateChange::Keep
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                TypedStateChange::Keep
            }
            KeyCode::Char(' ') => {
                self.toggle_current();
                TypedStateChange::Keep
            }
            KeyCode::Left => {
                self.cycle_branch(false);
                TypedStateChange::Keep
            }
            KeyCode::Right => {
                self.cycle_branch(true);
                TypedStateChange::Keep
            }
            KeyCode::Char('b') => {
                self.open_picker();
                TypedStateChange::Keep
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                self.on_view_erd(app);
                TypedStateChange::Exit
            }
            _ => TypedStateChange::Keep,
        }
    }

    async fn process_mouse(
        &mut self,
        event: MouseEvent,
        _app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        match event.kind {
            MouseEventKind::ScrollUp => self.move_cursor_or_picker(false),
            MouseEventKind::ScrollDown => self.move_cursor_or_picker(true),
            _ => {}
        }
        TypedStateChange::Keep
    }

    fn name(&self) -> &'static str {
        "ViewErdDialog"
    }
}

impl ViewErdDialogState {
    fn move_cursor_or_picker(&mut self, down: bool) {
        match (self.picker.as_mut(), down) {
            (Some(picker), true) => picker.next(),
            (Some(picker), false) => picker.previous(),
            (None, true) => self.next(),
            (None, false) => self.previous(),
        }
    }
}
