//! Typed state machine contract for screens.
//!
//! Each screen implements [`TypedAppState`] against the app type it needs and
//! reports transitions as [`TypedStateChange`] values of one state enum, so a
//! screen can only hand control to screens of the same machine.

use async_trait::async_trait;
use crossterm::event::{KeyCode, MouseEvent};
use ratatui::Frame;

/// Result of handling an input event.
///
/// Generic over the state enum `S` so every transition stays inside a
/// single state machine.
#[derive(Debug)]
pub enum TypedStateChange<S> {
    /// Keep the current state unchanged.
    Keep,
    /// Change to a new state.
    Change(S),
    /// Exit the application.
    Exit,
}

impl<S> TypedStateChange<S> {
    pub fn is_keep(&self) -> bool {
        matches!(self, TypedStateChange::Keep)
    }

    pub fn is_change(&self) -> bool {
        matches!(self, TypedStateChange::Change(_))
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, TypedStateChange::Exit)
    }

    /// Maps the state type using a conversion function.
    pub fn map<T, F>(self, f: F) -> TypedStateChange<T>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            TypedStateChange::Keep => TypedStateChange::Keep,
            TypedStateChange::Change(s) => TypedStateChange::Change(f(s)),
            TypedStateChange::Exit => TypedStateChange::Exit,
        }
    }
}

/// A screen of the terminal UI.
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl TypedAppState for ErrorState {
///     type App = ErdApp;
///     type StateEnum = ErdModeState;
///
///     fn ui(&mut self, f: &mut Frame, app: &ErdApp) {
///         // draw app.error_message()
///     }
///
///     async fn process_key(
///         &mut self,
///         code: KeyCode,
///         _app: &mut ErdApp,
///     ) -> TypedStateChange<ErdModeState> {
///         match code {
///             KeyCode::Char('q') => TypedStateChange::Exit,
///             _ => TypedStateChange::Keep,
///         }
///     }
///
///     fn name(&self) -> &'static str { "Error" }
/// }
/// ```
#[async_trait]
pub trait TypedAppState: Send + Sync {
    /// The app context this state reads and mutates.
    type App: Send + Sync;

    /// The state enum transitions are expressed in.
    type StateEnum: Send;

    /// Render the state's UI.
    fn ui(&mut self, f: &mut Frame, app: &Self::App);

    /// Process keyboard input.
    ///
    /// The run loop also calls this with `KeyCode::Null` on idle ticks so
    /// states can poll background work.
    async fn process_key(
        &mut self,
        code: KeyCode,
        app: &mut Self::App,
    ) -> TypedStateChange<Self::StateEnum>;

    /// Process mouse input. Defaults to `Keep`.
    async fn process_mouse(
        &mut self,
        _event: MouseEvent,
        _app: &mut Self::App,
    ) -> TypedStateChange<Self::StateEnum> {
        TypedStateChange::Keep
    }

    /// Name for logging/debugging.
    fn name(&self) -> &'static str;
}
