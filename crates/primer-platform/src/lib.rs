//! Runners.
//!
//! [`run_console_app`] draws frames on the terminal and reads numbered
//! commands from stdin; [`Harness`] does the same headlessly for tests.
//! Both compose through [`Screen`], which resets the back handler before
//! every frame so `b` reaches the innermost dispatcher on screen.

pub mod command;
pub mod console;
pub mod error;
pub mod harness;
pub mod screen;

pub use command::{Command, HELP};
pub use console::{ConsoleConfig, run_console_app};
pub use error::PlatformError;
pub use harness::Harness;
pub use screen::Screen;

#[cfg(test)]
mod tests;
