use std::io::{self, BufRead, Write};

use anyhow::Context;
use crossbeam_channel::{Receiver, select, unbounded};
use primer_core::{Frame, Scheduler, View};

use crate::{Command, HELP, Screen};

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Paint width in columns.
    pub width: usize,
    /// Clear the terminal before each frame.
    pub clear: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: 72,
            clear: true,
        }
    }
}

enum Event {
    Line(Option<io::Result<String>>),
    Wake { closed: bool },
}

/// Runs `root` on the terminal until `q` or end of input. A frame is drawn
/// after every command and whenever `wakes` fires.
pub fn run_console_app(
    config: ConsoleConfig,
    wakes: Receiver<()>,
    root: impl FnMut(&mut Scheduler) -> View + 'static,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader()?;
    let mut wakes = wakes;
    let mut screen = Screen::new(config.width, root);
    let mut status = Some(HELP.to_string());
    log::info!("console runner started ({} columns)", config.width);

    loop {
        draw(&mut io::stdout().lock(), &config, screen.frame(), status.take().as_deref())
            .context("drawing frame")?;

        let event = select! {
            recv(lines) -> line => Event::Line(line.ok()),
            recv(wakes) -> msg => Event::Wake { closed: msg.is_err() },
        };

        match event {
            Event::Line(None) => {
                log::info!("input closed");
                break;
            }
            Event::Line(Some(line)) => {
                let line = line.context("reading input")?;
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => status = Some(HELP.to_string()),
                    Ok(cmd) => {
                        if let Err(e) = screen.apply(cmd) {
                            status = Some(e.to_string());
                        }
                    }
                    Err(e) => status = Some(e.to_string()),
                }
            }
            Event::Wake { closed } => {
                if closed {
                    // Every waker is gone; stop listening instead of spinning.
                    wakes = crossbeam_channel::never();
                }
                screen.compose();
            }
        }
    }

    log::info!("console runner stopped after {} frames", screen.frames());
    screen.shutdown();
    Ok(())
}

fn spawn_stdin_reader() -> anyhow::Result<Receiver<io::Result<String>>> {
    let (tx, rx) = unbounded();
    std::thread::Builder::new()
        .name("primer-stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawning input reader")?;
    Ok(rx)
}

fn draw(
    out: &mut impl Write,
    config: &ConsoleConfig,
    frame: &Frame,
    status: Option<&str>,
) -> io::Result<()> {
    if config.clear {
        write!(out, "\x1b[2J\x1b[H")?;
    } else {
        writeln!(out)?;
    }
    for line in &frame.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    if let Some(status) = status {
        writeln!(out, "{status}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_without_clearing() {
        let frame = Frame {
            lines: vec!["Demos".into(), "[1] Hooks".into()],
            hit_regions: vec![],
        };
        let config = ConsoleConfig {
            width: 40,
            clear: false,
        };
        let mut out = Vec::new();
        draw(&mut out, &config, &frame, Some("hi")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nDemos\n[1] Hooks\n\nhi\n> "
        );
    }

    #[test]
    fn test_draw_clears_first() {
        let mut out = Vec::new();
        draw(&mut out, &ConsoleConfig::default(), &Frame::default(), None).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b[2J\x1b[H"));
    }
}
