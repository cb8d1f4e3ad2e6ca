//! Line-based letter input

use crate::session::{GameInput, InputError, MalformedInput, parse_letter};
use std::io::{self, BufRead};
use tracing::debug;

/// Words that end the session at the letter prompt
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Reads one guess per line
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<io::StdinLock<'static>> {
    /// Read from standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInput for ConsoleInput<R> {
    fn read_letter(&mut self) -> Result<char, InputError> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }

        // The whole line is consumed, so the next read starts clean
        let text = std::str::from_utf8(&line).map_err(|_| MalformedInput::NotText)?;
        let text = text.trim_end_matches(['\r', '\n']);
        debug!(input = text, "Line read");

        if QUIT_COMMANDS.contains(&text.trim().to_lowercase().as_str()) {
            return Err(InputError::Quit);
        }

        Ok(parse_letter(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(text: &str) -> ConsoleInput<Cursor<Vec<u8>>> {
        ConsoleInput::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn reads_letters_line_by_line() {
        let mut input = input("a\nB\r\n");
        assert_eq!(input.read_letter().unwrap(), 'a');
        assert_eq!(input.read_letter().unwrap(), 'b');
        assert!(matches!(input.read_letter(), Err(InputError::Closed)));
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(input("x").read_letter().unwrap(), 'x');
    }

    #[test]
    fn malformed_lines_are_recoverable() {
        let mut input = input("ab\n\n7\n ");
        for expected in [
            MalformedInput::NotSingleLetter,
            MalformedInput::NotSingleLetter,
            MalformedInput::NotAlphabetic('7'),
            MalformedInput::NotAlphabetic(' '),
        ] {
            let err = input.read_letter().unwrap_err();
            assert!(err.is_recoverable());
            assert!(matches!(err, InputError::Malformed(m) if m == expected));
        }
    }

    #[test]
    fn invalid_utf8_line_is_recoverable() {
        // Latin-1 e-acute, then a good guess on the next line
        let mut input = ConsoleInput::new(Cursor::new(vec![0xE9, b'\n', b'a', b'\n']));

        let err = input.read_letter().unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, InputError::Malformed(MalformedInput::NotText)));
        assert_eq!(input.read_letter().unwrap(), 'a');
    }

    #[test]
    fn quit_commands() {
        assert!(matches!(input("quit\n").read_letter(), Err(InputError::Quit)));
        assert!(matches!(input("EXIT\n").read_letter(), Err(InputError::Quit)));
        // A single q is a guess, not a command
        assert_eq!(input("q\n").read_letter().unwrap(), 'q');
    }

    #[test]
    fn empty_stream_is_closed() {
        assert!(matches!(input("").read_letter(), Err(InputError::Closed)));
    }
}
