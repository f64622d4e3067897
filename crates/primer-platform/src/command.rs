use std::str::FromStr;

use crate::PlatformError;

/// One line of console input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `<n>`: press button `n`.
    Activate(usize),
    /// `<n> <text>`: replace the contents of text field `n`. `<n> ""`
    /// empties it.
    Input(usize, String),
    Back,
    /// Redraw without doing anything else. An empty line also refreshes.
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str =
    "<n> press [n]   <n> <text> type into [n]   <n> \"\" clear [n]   b back   r redraw   h help   q quit";

impl FromStr for Command {
    type Err = PlatformError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line {
            "" | "r" | "refresh" => return Ok(Command::Refresh),
            "b" | "back" => return Ok(Command::Back),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let (number, rest) = match line.split_once(char::is_whitespace) {
            Some((n, rest)) => (n, Some(rest.trim_start())),
            None => (line, None),
        };
        let n: usize = number
            .parse()
            .map_err(|_| PlatformError::UnknownCommand(line.to_string()))?;
        if n == 0 {
            return Err(PlatformError::NoSuchRegion(0));
        }
        Ok(match rest {
            Some("\"\"") => Command::Input(n, String::new()),
            Some(text) => Command::Input(n, text.to_string()),
            None => Command::Activate(n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, PlatformError> {
        s.parse()
    }

    #[test]
    fn test_letters() {
        assert_eq!(parse("b").unwrap(), Command::Back);
        assert_eq!(parse("  q ").unwrap(), Command::Quit);
        assert_eq!(parse("h").unwrap(), Command::Help);
        assert_eq!(parse("").unwrap(), Command::Refresh);
    }

    #[test]
    fn test_numbers_and_text() {
        assert_eq!(parse("3").unwrap(), Command::Activate(3));
        assert_eq!(
            parse("2 Ada Lovelace").unwrap(),
            Command::Input(2, "Ada Lovelace".into())
        );
        assert_eq!(parse("2  x").unwrap(), Command::Input(2, "x".into()));
        assert_eq!(parse("2 \"\"").unwrap(), Command::Input(2, String::new()));
        assert_eq!(parse("2 \"a\"").unwrap(), Command::Input(2, "\"a\"".into()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(parse("go"), Err(PlatformError::UnknownCommand(_))));
        assert!(matches!(parse("0"), Err(PlatformError::NoSuchRegion(0))));
        assert!(matches!(parse("-1"), Err(PlatformError::UnknownCommand(_))));
    }
}
