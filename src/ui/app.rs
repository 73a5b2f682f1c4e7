//! Application context shared by every screen.

use crate::{
    models::{AppConfig, OrganizationProjects},
    navigation::{NavigationRequest, Navigator},
    session::SessionStorage,
};
use std::sync::Arc;

/// Everything the screens need besides their own state.
///
/// The project data is owned here once the loading screen has read it; the
/// dialog only reads it. Session storage and navigation are trait objects so
/// tests can observe the side effects of confirming the dialog.
pub struct ErdApp {
    /// Resolved configuration (shared via Arc with the caller).
    pub config: Arc<AppConfig>,

    /// Loaded organizations; `None` until loading finished.
    data: Option<Vec<OrganizationProjects>>,

    /// Error message shown by the error screen.
    error_message: Option<String>,

    session: Box<dyn SessionStorage>,

    navigator: Box<dyn Navigator>,
}

impl ErdApp {
    pub fn new(
        config: Arc<AppConfig>,
        session: Box<dyn SessionStorage>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            data: None,
            error_message: None,
            session,
            navigator,
        }
    }

    pub fn data(&self) -> Option<&[OrganizationProjects]> {
        self.data.as_deref()
    }

    pub fn set_data(&mut self, data: Vec<OrganizationProjects>) {
        self.data = Some(data);
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error_message(&mut self, msg: Option<String>) {
        self.error_message = msg;
    }

    pub fn session(&self) -> &dyn SessionStorage {
        self.session.as_ref()
    }

    pub fn navigate(&self, request: NavigationRequest) {
        tracing::info!(route = %request.route, apps = ?request.state.apps, "navigating");
        self.navigator.navigate(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Branch, Project},
        navigation::RecordingNavigator,
        session::InMemorySessionStorage,
        ui::testing::create_test_config,
    };

    /// # ErdApp Initialization
    ///
    /// Tests that a fresh app has no data and no error.
    ///
    /// ## Test Scenario
    /// - Creates an ErdApp with test collaborators
    ///
    /// ## Expected Outcome
    /// - data() and error_message() are None
    #[test]
    fn test_erd_app_initialization() {
        let app = ErdApp::new(
            Arc::new(create_test_config()),
            Box::new(InMemorySessionStorage::new()),
            Box::new(RecordingNavigator::new()),
        );

        assert!(app.data().is_none());
        assert!(app.error_message().is_none());
        assert_eq!(app.config.data(), "projects.json");
    }

    #[test]
    fn test_set_data_and_error() {
        let mut app = ErdApp::new(
            Arc::new(create_test_config()),
            Box::new(InMemorySessionStorage::new()),
            Box::new(RecordingNavigator::new()),
        );

        app.set_data(vec![OrganizationProjects {
            name: "acme".to_string(),
            organization_name: None,
            projects: Some(vec![Project {
                name: "alpha".to_string(),
                display_name: "Alpha".to_string(),
                branches: Some(vec![Branch {
                    name: "alpha-main".to_string(),
                    branch_name: "main".to_string(),
                }]),
            }]),
        }]);
        app.set_error_message(Some("boom".to_string()));

        assert_eq!(app.data().map(|d| d.len()), Some(1));
        assert_eq!(app.error_message(), Some("boom"));
    }

    /// # Navigation Delegation
    ///
    /// Tests that navigate() forwards to the configured navigator.
    ///
    /// ## Test Scenario
    /// - Keeps a clone of a RecordingNavigator, navigates through the app
    ///
    /// ## Expected Outcome
    /// - The clone sees exactly one request
    #[test]
    fn test_navigate_delegates() {
        let navigator = RecordingNavigator::new();
        let app = ErdApp::new(
            Arc::new(create_test_config()),
            Box::new(InMemorySessionStorage::new()),
            Box::new(navigator.clone()),
        );

        app.navigate(NavigationRequest::project_erd(vec!["x".to_string()]));

        assert_eq!(navigator.requests().len(), 1);
    }
}
