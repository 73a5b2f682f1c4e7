use crate::{
    models::{AppConfig, Branch, OrganizationProjects, Project},
    navigation::RecordingNavigator,
    parsed_property::ParsedProperty,
    session::{ERD_DOCTYPES_KEY, InMemorySessionStorage},
    ui::{
        ErdApp,
        state::{ErdModeState, typed::TypedAppState},
    },
};
use ratatui::{Terminal, backend::TestBackend};
use std::{path::PathBuf, sync::Arc};

/// Fixed terminal dimensions for consistent rendering tests
pub const TEST_TERMINAL_WIDTH: u16 = 80;
pub const TEST_TERMINAL_HEIGHT: u16 = 30;

/// Test harness for TUI components with fixed terminal size
pub struct TuiTestHarness {
    pub terminal: Terminal<TestBackend>,
    pub app: ErdApp,
    /// Shares its record with the navigator inside `app`.
    pub navigator: RecordingNavigator,
    /// Same storage the app writes to.
    pub session: Arc<InMemorySessionStorage>,
}

impl Default for TuiTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiTestHarness {
    /// Harness with no data loaded and a cached ERDDoctypes entry.
    pub fn new() -> Self {
        let backend = TestBackend::new(TEST_TERMINAL_WIDTH, TEST_TERMINAL_HEIGHT);
        let terminal = Terminal::new(backend).unwrap();

        let navigator = RecordingNavigator::new();
        let session =
            Arc::new(InMemorySessionStorage::new().with_item(ERD_DOCTYPES_KEY, "[\"User\"]"));
        let app = ErdApp::new(
            Arc::new(create_test_config()),
            Box::new(session.clone()),
            Box::new(navigator.clone()),
        );

        Self {
            terminal,
            app,
            navigator,
            session,
        }
    }

    /// Harness with `data` already loaded into the app.
    pub fn with_data(data: Vec<OrganizationProjects>) -> Self {
        let mut harness = Self::new();
        harness.app.set_data(data);
        harness
    }

    /// Render a state to the terminal
    pub fn render(&mut self, state: &mut ErdModeState) {
        self.terminal
            .draw(|f| TypedAppState::ui(state, f, &self.app))
            .unwrap();
    }

    /// Get the terminal backend
    pub fn backend(&self) -> &TestBackend {
        self.terminal.backend()
    }

    /// The rendered screen as text, one line per terminal row.
    pub fn screen_text(&self) -> String {
        let buffer = self.backend().buffer();
        let area = buffer.area;
        let mut lines = Vec::with_capacity(area.height as usize);
        for y in 0..area.height {
            let mut line = String::new();
            for x in 0..area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

/// Configuration with every value at its default
pub fn create_test_config() -> AppConfig {
    AppConfig {
        data: ParsedProperty::Default("projects.json".to_string()),
        session_dir: ParsedProperty::Default(PathBuf::from("/tmp/erd-picker-test")),
    }
}

pub fn branch(name: &str, label: &str) -> Branch {
    Branch {
        name: name.to_string(),
        branch_name: label.to_string(),
    }
}

pub fn project(name: &str, display_name: &str, branches: Option<Vec<Branch>>) -> Project {
    Project {
        name: name.to_string(),
        display_name: display_name.to_string(),
        branches,
    }
}

pub fn organization(name: &str, projects: Option<Vec<Project>>) -> OrganizationProjects {
    OrganizationProjects {
        name: name.to_string(),
        organization_name: None,
        projects,
    }
}

/// One organization with project "Alpha" on branches main and dev.
pub fn create_alpha_data() -> Vec<OrganizationProjects> {
    vec![organization(
        "acme",
        Some(vec![project(
            "alpha",
            "Alpha",
            Some(vec![branch("main", "main"), branch("dev", "dev")]),
        )]),
    )]
}

/// Two organizations mixing projects with and without branches.
///
/// Rendered rows, in order: Alpha (main, dev), Gamma (release), Delta (trunk).
pub fn create_sample_data() -> Vec<OrganizationProjects> {
    vec![
        organization(
            "acme",
            Some(vec![
                project(
                    "alpha",
                    "Alpha",
                    Some(vec![branch("alpha-main", "main"), branch("alpha-dev", "dev")]),
                ),
                project("beta", "Beta", Some(Vec::new())),
                project("gamma", "Gamma", Some(vec![branch("gamma-release", "release")])),
            ]),
        ),
        organization("branchless", Some(vec![project("epsilon", "Epsilon", None)])),
        organization("globex", None),
        organization(
            "initech",
            Some(vec![project(
                "delta",
                "Delta",
                Some(vec![branch("delta-trunk", "trunk")]),
            )]),
        ),
    ]
}
