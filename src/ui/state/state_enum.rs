//! State enum for the ERD picker's screens.
//!
//! The picker starts in `DataLoading`, moves to `Dialog` once the project
//! document is read (or `Error` if it cannot be), and exits from either.

use super::{DataLoadingState, ErrorState, ViewErdDialogState};
use crate::ui::ErdApp;
use crate::ui::state::typed::{TypedAppState, TypedStateChange};
use async_trait::async_trait;
use crossterm::event::{KeyCode, MouseEvent};
use ratatui::Frame;

#[allow(clippy::large_enum_variant)]
pub enum ErdModeState {
    /// Reading the project data document.
    DataLoading(DataLoadingState),
    /// The "Select Apps" dialog.
    Dialog(ViewErdDialogState),
    /// Error display screen.
    Error(ErrorState),
}

impl std::fmt::Debug for ErdModeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ErdModeState::{}", self.name())
    }
}

impl ErdModeState {
    /// Start by loading data.
    pub fn initial() -> Self {
        ErdModeState::DataLoading(DataLoadingState::new())
    }

    /// Get the name of the current state for logging/debugging.
    pub fn name(&self) -> &'static str {
        match self {
            ErdModeState::DataLoading(_) => "DataLoading",
            ErdModeState::Dialog(_) => "Dialog",
            ErdModeState::Error(_) => "Error",
        }
    }
}

#[async_trait]
impl TypedAppState for ErdModeState {
    type App = ErdApp;
    type StateEnum = ErdModeState;

    fn ui(&mut self, f: &mut Frame, app: &ErdApp) {
        match self {
            ErdModeState::DataLoading(state) => TypedAppState::ui(state, f, app),
            ErdModeState::Dialog(state) => TypedAppState::ui(state, f, app),
            ErdModeState::Error(state) => TypedAppState::ui(state, f, app),
        }
    }

    async fn process_key(
        &mut self,
        code: KeyCode,
        app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        match self {
            ErdModeState::DataLoading(state) => {
                TypedAppState::process_key(state, code, app).await
            }
            ErdModeState::Dialog(state) => TypedAppState::process_key(state, code, app).await,
            ErdModeState::Error(state) => TypedAppState::process_key(state, code, app).await,
        }
    }

    async fn process_mouse(
        &mut self,
        event: MouseEvent,
        app: &mut ErdApp,
    ) -> TypedStateChange<ErdModeState> {
        match self {
            ErdModeState::DataLoading(state) => {
                TypedAppState::process_mouse(state, event, app).await
            }
            ErdModeState::Dialog(state) => TypedAppState::process_mouse(state, event, app).await,
            ErdModeState::Error(state) => TypedAppState::process_mouse(state, event, app).await,
        }
    }

    fn name(&self) -> &'static str {
        ErdModeState::name(self)
    }
}
