//! Event loop driving the [`ErdModeState`] machine.

use crate::ui::EventSource;
use crate::ui::ErdApp;
use crate::ui::state::ErdModeState;
use crate::ui::state::typed::{TypedAppState, TypedStateChange};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Macro to process typed state changes and handle Keep/Change/Exit
macro_rules! handle_typed_state_change {
    ($result:expr, $current_state:expr) => {
        match $result {
            TypedStateChange::Keep => {}
            TypedStateChange::Change(new_state) => {
                tracing::debug!(
                    from = $current_state.name(),
                    to = new_state.name(),
                    "state change"
                );
                $current_state = new_state;
            }
            TypedStateChange::Exit => break,
        }
    };
}

/// Run the picker until a screen asks to exit.
///
/// Idle ticks are delivered to the current state as `KeyCode::Null`. Only key
/// presses are forwarded; repeat and release events are dropped so a single
/// keystroke never acts twice on terminals that report both.
pub async fn run_erd_mode<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ErdApp,
    event_source: &dyn EventSource,
    initial_state: ErdModeState,
) -> anyhow::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut current_state = initial_state;

    loop {
        terminal.draw(|f| TypedAppState::ui(&mut current_state, f, app))?;

        if event_source.poll(POLL_INTERVAL)? {
            match event_source.read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_typed_state_change!(
                        TypedAppState::process_key(&mut current_state, key.code, app).await,
                        current_state
                    );
                }
                Event::Mouse(mouse) => {
                    handle_typed_state_change!(
                        TypedAppState::process_mouse(&mut current_state, mouse, app).await,
                        current_state
                    );
                }
                _ => {}
            }
        } else {
            handle_typed_state_change!(
                TypedAppState::process_key(&mut current_state, KeyCode::Null, app).await,
                current_state
            );
        }
    }

    tracing::debug!(state = current_state.name(), "run loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockEventSource;
    use crate::ui::state::{ErrorState, ViewErdDialogState};
    use crate::ui::testing::{TuiTestHarness, create_alpha_data};

    /// # Run Loop Confirms Selection
    ///
    /// Tests a full dialog session driven by scripted keys.
    ///
    /// ## Test Scenario
    /// - Starts on the dialog over the Alpha data
    /// - Space, Right, Space, Enter
    ///
    /// ## Expected Outcome
    /// - Loop returns Ok and the navigator got apps [main, dev]
    #[tokio::test]
    async fn test_run_loop_confirms_selection() {
        let mut harness = TuiTestHarness::with_data(create_alpha_data());
        let initial = ErdModeState::Dialog(ViewErdDialogState::new(harness.app.data()));
        let events = MockEventSource::new()
            .with_key(KeyCode::Char(' '))
            .with_key(KeyCode::Right)
            .with_timeout()
            .with_key(KeyCode::Char(' '))
            .with_key(KeyCode::Enter);

        run_erd_mode(&mut harness.terminal, &mut harness.app, &events, initial)
            .await
            .unwrap();

        let request = harness.navigator.last().unwrap();
        assert_eq!(request.state.apps, vec!["main".to_string(), "dev".to_string()]);
        assert!(events.is_empty());
    }

    /// # Key Releases Are Ignored
    ///
    /// Tests that only presses reach the states.
    ///
    /// ## Test Scenario
    /// - Queues a release of Enter, then a press of q
    ///
    /// ## Expected Outcome
    /// - Nothing is selected or navigated; the loop exits on q
    #[tokio::test]
    async fn test_run_loop_ignores_key_release() {
        let mut harness = TuiTestHarness::with_data(create_alpha_data());
        let initial = ErdModeState::Dialog(ViewErdDialogState::new(harness.app.data()));
        let events = MockEventSource::new()
            .with_key_release(KeyCode::Enter)
            .with_key(KeyCode::Char('q'));

        run_erd_mode(&mut harness.terminal, &mut harness.app, &events, initial)
            .await
            .unwrap();

        assert!(harness.navigator.requests().is_empty());
        assert!(harness.session.removals().is_empty());
    }

    #[tokio::test]
    async fn test_run_loop_exits_from_error() {
        let mut harness = TuiTestHarness::new();
        let initial = ErdModeState::Error(ErrorState::new());
        let events = MockEventSource::new().with_key(KeyCode::Char('q'));

        let result =
            run_erd_mode(&mut harness.terminal, &mut harness.app, &events, initial).await;

        assert!(result.is_ok());
        assert!(harness.screen_text().contains("Unknown error"));
    }
}
