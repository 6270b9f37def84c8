//! Frame pacing that listens for the quit key while it waits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::should_quit;

/// Wait up to `timeout` for a quit key.
///
/// Returns `true` as soon as one is pressed. Other events are drained and the
/// wait continues, so the frame interval stays the same while keys are mashed.
pub fn wait_for_quit(timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release && should_quit(key) {
                return Ok(true);
            }
        }
    }
}
