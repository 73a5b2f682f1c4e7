//! Terminal UI for the ERD picker.

mod app;
pub mod events;
pub mod state;
pub mod terminal;
pub mod typed_run;

#[cfg(test)]
pub mod testing;

pub use app::ErdApp;
pub use events::{CrosstermEventSource, EventSource};
pub use terminal::{init_terminal, restore_terminal};
pub use typed_run::run_erd_mode;

#[cfg(test)]
pub use events::testing::MockEventSource;
