//! Typed hand-off from the dialog to the ERD viewer.
//!
//! The selection travels as an in-memory [`NavigationRequest`], never as part
//! of a path, query string or file. The binary writes the request to stdout
//! once the terminal is restored; embedders can supply their own
//! [`Navigator`].

use crate::models::BranchId;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Screens reachable from the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/project-erd")]
    ProjectErd,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::ProjectErd => "/project-erd",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// State carried to the ERD viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErdNavigationState {
    pub apps: Vec<BranchId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub route: Route,
    pub state: ErdNavigationState,
}

impl NavigationRequest {
    pub fn project_erd(apps: Vec<BranchId>) -> Self {
        Self {
            route: Route::ProjectErd,
            state: ErdNavigationState { apps },
        }
    }
}

/// Performs a client-side transition to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, request: NavigationRequest);
}

/// Navigator that keeps every request for a later hand-off.
///
/// Clones share the same record, so the caller can keep one handle and give
/// another to the app.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    requests: Arc<Mutex<Vec<NavigationRequest>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent request, if any navigation happened.
    pub fn last(&self) -> Option<NavigationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        tracing::debug!(route = %request.route, apps = request.state.apps.len(), "navigation recorded");
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// # Hand-off Payload Shape
    ///
    /// Tests the JSON written for the ERD viewer.
    ///
    /// ## Test Scenario
    /// - Serializes a request with two apps
    ///
    /// ## Expected Outcome
    /// - Route is the path string, apps keep their order
    #[test]
    fn test_request_serialization() {
        let request =
            NavigationRequest::project_erd(vec!["alpha-main".to_string(), "beta-dev".to_string()]);

        let json = serde_json::to_string(&request).unwrap();
        assert_snapshot!(json, @r#"{"route":"/project-erd","state":{"apps":["alpha-main","beta-dev"]}}"#);

        let parsed: NavigationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_empty_selection_payload() {
        let json = serde_json::to_string(&NavigationRequest::project_erd(Vec::new())).unwrap();
        assert_snapshot!(json, @r#"{"route":"/project-erd","state":{"apps":[]}}"#);
    }

    /// # Recording Navigator
    ///
    /// Tests that clones share their record.
    ///
    /// ## Test Scenario
    /// - Navigates through a clone twice
    ///
    /// ## Expected Outcome
    /// - The original sees both requests, last() is the second one
    #[test]
    fn test_recording_navigator_shares_record() {
        let navigator = RecordingNavigator::new();
        let handle = navigator.clone();

        handle.navigate(NavigationRequest::project_erd(vec!["a".to_string()]));
        handle.navigate(NavigationRequest::project_erd(vec!["b".to_string()]));

        assert_eq!(navigator.requests().len(), 2);
        assert_eq!(navigator.last().unwrap().state.apps, vec!["b".to_string()]);
        assert_eq!(Route::ProjectErd.to_string(), "/project-erd");
    }
}
