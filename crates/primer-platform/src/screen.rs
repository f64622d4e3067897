use primer_core::{Frame, Role, Scheduler, View};
use primer_navigation::back;
use primer_ui::paint;

use crate::{Command, PlatformError};

/// A root view, its scheduler and the last painted frame. Both the console
/// runner and the test harness drive one of these.
pub struct Screen {
    sched: Scheduler,
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    frame: Frame,
}

impl Screen {
    pub fn new(width: usize, root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        let mut screen = Self {
            sched: Scheduler::new(width),
            root: Box::new(root),
            frame: Frame::default(),
        };
        screen.compose();
        screen
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frames(&self) -> u64 {
        self.sched.frames()
    }

    pub fn compose(&mut self) -> &Frame {
        // Dispatchers reinstall themselves while composing.
        back::set(None);
        let root = &mut self.root;
        self.frame = self.sched.compose(|s| root(s), paint);
        &self.frame
    }

    /// Presses button `n` of the current frame.
    pub fn activate(&self, n: usize) -> Result<(), PlatformError> {
        let region = self.frame.region(n).ok_or(PlatformError::NoSuchRegion(n))?;
        if region.role != Role::Button {
            return Err(PlatformError::NotAButton(n));
        }
        if !region.enabled {
            return Err(PlatformError::Disabled(n));
        }
        log::trace!("press [{n}] {}", region.label);
        if let Some(on_click) = region.on_click.clone() {
            on_click();
        }
        Ok(())
    }

    /// Replaces the contents of text field `n`.
    pub fn input(&self, n: usize, text: &str) -> Result<(), PlatformError> {
        let region = self.frame.region(n).ok_or(PlatformError::NoSuchRegion(n))?;
        if region.role != Role::TextField {
            return Err(PlatformError::NotATextField(n));
        }
        if let Some(on_change) = region.on_text_change.clone() {
            on_change(text.to_string());
        }
        Ok(())
    }

    /// Number of the first region with this role and label.
    pub fn find(&self, role: Role, label: &str) -> Result<usize, PlatformError> {
        self.frame
            .find(role, label)
            .map(|r| r.number)
            .ok_or_else(|| PlatformError::NotFound {
                role,
                label: label.to_string(),
            })
    }

    /// Routes to the innermost dispatcher on screen. `false` when nothing
    /// moved.
    pub fn back(&self) -> bool {
        back::handle()
    }

    /// Applies one command and recomposes. `Help` and `Quit` are left to
    /// the caller.
    pub fn apply(&mut self, cmd: Command) -> Result<(), PlatformError> {
        let result = match cmd {
            Command::Activate(n) => self.activate(n),
            Command::Input(n, text) => self.input(n, &text),
            Command::Back => {
                if !self.back() {
                    log::debug!("back: already at the top");
                }
                Ok(())
            }
            Command::Refresh | Command::Help | Command::Quit => Ok(()),
        };
        self.compose();
        result
    }

    /// Drops all remembered state, running pending cleanups.
    pub fn shutdown(self) {
        back::set(None);
        self.sched.shutdown();
    }
}
