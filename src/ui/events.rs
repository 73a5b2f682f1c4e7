//! Terminal input for the run loop.
//!
//! [`EventSource`] stands between the loop and crossterm's global event
//! queue so the loop can be driven by scripted input in tests.

use crossterm::event::Event;
use std::io;
use std::time::Duration;

/// Where the run loop gets its terminal events from.
pub trait EventSource: Send + Sync {
    /// Wait up to `timeout` for an event. `false` means the tick was idle.
    fn poll(&self, timeout: Duration) -> io::Result<bool>;

    /// Read the next event.
    fn read(&self) -> io::Result<Event>;
}

/// Reads the real terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn poll(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&self) -> io::Result<Event> {
        crossterm::event::read()
    }
}
