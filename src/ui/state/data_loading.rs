use super::{ErdModeState, ErrorState, ViewErdDialogState};
use crate::{
    error::DataError,
    models::{OrganizationProjects, load_project_data},
    ui::ErdApp,
    ui::state::typed::{TypedAppState, TypedStateChange},
};
use async_trait::async_trait;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

type LoadTaskHandle = tokio::task::JoinHandle<Result<Vec<OrganizationProjects>, DataError>>;

/// Reads the project data document in the background.
pub struct DataLoadingState {
    status: String,
    loading_task: Option<LoadTaskHandle>,
}

impl Default for DataLoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoadingState {
    pub fn new() -> Self {
        Self {
            status: "Loading projects...".to_string(),
            loading_task: None,
        }
    }

    fn start_loading(&mut self, app: &ErdApp) {
        if self.loading_task.is_some() {
            return;
        }

        let source = app.config.data().to_string();
        self.status = if app.config.reads_stdin() {
            "Reading projects from stdin...".to_string()
        } else {
            format!("Reading projects from {}...", source)
        };
        tracing::debug!(source = %source, "starting data load");

        self.loading_task = Some(tokio::task::spawn_blocking(move || {
            load_project_data(&source)
        }));
    }

    /// Moves to the dialog or error screen once the load task has finished.
    async fn check_loading_status(&mut self, app: &mut ErdApp) -> Option<ErdModeState> {
        let finished = self
            .loading_task
            .as_ref()
            .is_some_and(|task| task.is_finished());
        if !finished {
            return None;
        }

        let task = self.loading_task.take()?;
        let message = match task.await {
            Ok(Ok(data)) => {
                app.set_data(data);
                return Some(ErdModeState::Dialog(ViewErdDialogState::new(app.data())));
            }
            Ok(Err(e)) => e.to_string(),
            Err(e) => format!("Task error: {}", e),
        };

        tracing::error!(error = %message, "failed to load project data");
        app.set_error_message(Some(message));
        Some(ErdModeState::Error(ErrorState::new()))
    }
}

#[async_trait]
impl TypedAppState for DataLoadingState {
    type App = ErdApp;
    type StateEnum = ErdModeState;

    fn ui(&mut self, f: &mut Frame, _app: &ErdApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
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

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[1]);
    }

    async fn process_key(
        &mut self,
        code: KeyCode,
        app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        if code == KeyCode::Char('q') {
            return TypedStateChange::Exit;
        }

        self.start_loading(app);

        match self.check_loading_status(app).await {
            Some(next) => TypedStateChange::Change(next),
            None => TypedStateChange::Keep,
        }
    }

    fn name(&self) -> &'static str {
        "DataLoading"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        navigation::RecordingNavigator,
        parsed_property::ParsedProperty,
        session::InMemorySessionStorage,
        ui::testing::{TuiTestHarness, create_test_config},
    };
    use std::{sync::Arc, time::Duration};
    use tempfile::TempDir;

    fn app_for(path: &std::path::Path) -> ErdApp {
        let mut config = create_test_config();
        config.data = ParsedProperty::Cli(
            path.to_string_lossy().to_string(),
            path.to_string_lossy().to_string(),
        );
        ErdApp::new(
            Arc::new(config),
            Box::new(InMemorySessionStorage::new()),
            Box::new(RecordingNavigator::new()),
        )
    }

    async fn poll_until_change(
        state: &mut DataLoadingState,
        app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        for _ in 0..200 {
            let result = state.process_key(KeyCode::Null, app).await;
            if !result.is_keep() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("data loading did not finish");
    }

    /// # Successful Load
    ///
    /// Tests that a readable document leads to the dialog.
    ///
    /// ## Test Scenario
    /// - Writes a document with one project that has a branch
    /// - Polls the loading state with idle ticks
    ///
    /// ## Expected Outcome
    /// - Changes to the Dialog state with one row and data stored in the app
    #[tokio::test]
    async fn test_load_success_opens_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"name":"acme","projects":[{"name":"alpha","branches":[{"name":"alpha-main","branch_name":"main"}]}]}]"#,
        )
        .unwrap();

        let mut app = app_for(&path);
        let mut state = DataLoadingState::new();

        match poll_until_change(&mut state, &mut app).await {
            TypedStateChange::Change(ErdModeState::Dialog(dialog)) => {
                assert_eq!(dialog.rows().len(), 1);
            }
            other => panic!("Expected dialog, got {:?}", other),
        }
        assert_eq!(app.data().map(|d| d.len()), Some(1));
    }

    /// # Failed Load
    ///
    /// Tests that a missing document leads to the error screen.
    ///
    /// ## Test Scenario
    /// - Points the data path at a file that does not exist
    ///
    /// ## Expected Outcome
    /// - Changes to the Error state with a message naming the path
    #[tokio::test]
    async fn test_load_failure_opens_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let mut app = app_for(&path);
        let mut state = DataLoadingState::new();

        let result = poll_until_change(&mut state, &mut app).await;
        assert!(matches!(result, TypedStateChange::Change(ErdModeState::Error(_))));
        assert!(app.error_message().unwrap().contains("missing.json"));
        assert!(app.data().is_none());
    }

    #[tokio::test]
    async fn test_quit_while_loading() {
        let mut harness = TuiTestHarness::new();
        let mut state = DataLoadingState::new();

        let result = state.process_key(KeyCode::Char('q'), &mut harness.app).await;
        assert!(result.is_exit());
    }

    #[test]
    fn test_loading_rendering() {
        let mut harness = TuiTestHarness::new();
        let mut state = ErdModeState::DataLoading(DataLoadingState::new());

        harness.render(&mut state);

        assert!(harness.screen_text().contains("Loading projects..."));
    }
}
