use super::ErdModeState;
use crate::{
    ui::ErdApp,
    ui::state::typed::{TypedAppState, TypedStateChange},
};
use async_trait::async_trait;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ErrorState;

impl Default for ErrorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorState {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TypedAppState for ErrorState {
    type App = ErdApp;
    type StateEnum = ErdModeState;

    fn ui(&mut self, f: &mut Frame, app: &ErdApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        let title = Paragraph::new("❌ Error Occurred")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let error_msg = app.error_message().unwrap_or("Unknown error");
        let error = Paragraph::new(error_msg)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(error, chunks[1]);

        let help = Paragraph::new("Press 'q' to exit")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    async fn process_key(
        &mut self,
        code: KeyCode,
        _app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => TypedStateChange::Exit,
            _ => TypedStateChange::Keep,
        }
    }

    fn name(&self) -> &'static str {
        "Error"
    }
}
