use std::time::Duration;

use crossbeam_channel::Receiver;
use primer_core::{Frame, Role, Scheduler, View};
use web_time::Instant;

use crate::{PlatformError, Screen};

/// Headless runner for tests: compose, find controls by label, press them,
/// and read the painted text back.
///
/// ```rust
/// use primer_platform::Harness;
/// use primer_core::*;
/// use primer_ui::*;
///
/// let mut h = Harness::new(|_| {
///     let count = remember_with_key("count", || signal(0));
///     let c = count.clone();
///     Column().child((
///         Text(format!("Count: {}", count.get())),
///         Button("+", move || c.update(|v| *v += 1)),
///     ))
/// });
/// h.click("+").unwrap();
/// assert!(h.contains("Count: 1"));
/// ```
pub struct Harness {
    screen: Screen,
}

impl Harness {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self::with_width(72, root)
    }

    pub fn with_width(width: usize, root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self {
            screen: Screen::new(width, root),
        }
    }

    pub fn frame(&self) -> &Frame {
        self.screen.frame()
    }

    pub fn text(&self) -> String {
        self.screen.frame().text()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.screen.frame().lines.iter().any(|l| l.contains(needle))
    }

    pub fn refresh(&mut self) -> &Frame {
        self.screen.compose()
    }

    /// Presses the first button labelled exactly `label`, then recomposes.
    pub fn click(&mut self, label: &str) -> Result<(), PlatformError> {
        let n = self.screen.find(Role::Button, label)?;
        self.screen.activate(n)?;
        self.screen.compose();
        Ok(())
    }

    /// Replaces the text of the field hinted `hint`, then recomposes.
    pub fn type_into(&mut self, hint: &str, text: &str) -> Result<(), PlatformError> {
        let n = self.screen.find(Role::TextField, hint)?;
        self.screen.input(n, text)?;
        self.screen.compose();
        Ok(())
    }

    /// Same as the console's `b`.
    pub fn back(&mut self) -> bool {
        let moved = self.screen.back();
        self.screen.compose();
        moved
    }

    /// Feeds one console line through the command parser.
    pub fn send(&mut self, line: &str) -> Result<(), PlatformError> {
        self.screen.apply(line.parse()?)
    }

    /// Recomposes on every wake until `needle` is on screen.
    pub fn wait_for(&mut self, wakes: &Receiver<()>, needle: &str, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.contains(needle) {
                return true;
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return false;
            }
            // A missed wake only costs one poll interval.
            let _ = wakes.recv_timeout(left.min(Duration::from_millis(50)));
            self.screen.compose();
        }
    }

    pub fn shutdown(self) {
        self.screen.shutdown();
    }
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("frame", self.screen.frame())
            .finish()
    }
}
