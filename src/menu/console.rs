//! Console I/O
//!
//! Line-oriented prompts over any reader/writer pair so the menus can run
//! against stdin/stdout or scripted input.

use log::warn;
use std::io::{self, BufRead, Write};

use super::commands::{Selection, parse_selection};

pub struct Console<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Prints `message` without a newline and reads one trimmed line.
    /// Lines that are not valid UTF-8 are rejected and asked for again.
    /// Closed input is reported as `UnexpectedEof`.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        loop {
            write!(self.writer, "{}", message)?;
            self.writer.flush()?;

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                ));
            }

            match std::str::from_utf8(&self.line) {
                Ok(answer) => return Ok(answer.trim().to_string()),
                Err(e) => {
                    warn!("Rejected console input: {}", e);
                    self.say("Invalid input. Please try again.")?;
                }
            }
        }
    }

    /// Prompts until the answer is a number between 1 and `len`, returning
    /// the zero-based index.
    pub fn prompt_index(&mut self, message: &str, len: usize) -> io::Result<usize> {
        loop {
            let answer = self.prompt(message)?;
            match parse_selection(&answer, len) {
                Selection::Index(index) => return Ok(index),
                Selection::NotANumber => self.say("Error: enter a valid number.")?,
                Selection::OutOfRange => self.say("Error: number out of range, try again.")?,
            }
        }
    }

    /// Prints `items` as a 1-based numbered list.
    pub fn list<T: AsRef<str>>(&mut self, items: &[T]) -> io::Result<()> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, item.as_ref())?;
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_answer() {
        let mut c = console("  anna \n");
        assert_eq!(c.prompt("Name: ").unwrap(), "anna");
        assert_eq!(String::from_utf8(c.into_writer()).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_reports_eof() {
        let mut c = console("");
        let err = c.prompt("Name: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_rejects_invalid_utf8_and_retries() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe\n anna\n".to_vec()), Vec::new());
        assert_eq!(c.prompt("Name: ").unwrap(), "anna");

        let out = String::from_utf8(c.into_writer()).unwrap();
        assert_eq!(out, "Name: Invalid input. Please try again.\nName: ");
    }

    #[test]
    fn test_prompt_index_retries() {
        let mut c = console("x\n7\n2\n");
        assert_eq!(c.prompt_index("Nr: ", 3).unwrap(), 1);

        let out = String::from_utf8(c.into_writer()).unwrap();
        assert!(out.contains("Error: enter a valid number."));
        assert!(out.contains("Error: number out of range, try again."));
        assert_eq!(out.matches("Nr: ").count(), 3);
    }

    #[test]
    fn test_list_is_one_based() {
        let mut c = console("");
        c.list(&["anna", "ben"]).unwrap();
        assert_eq!(String::from_utf8(c.into_writer()).unwrap(), "1. anna\n2. ben\n");
    }
}
