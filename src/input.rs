//! Line-oriented input of employee records.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Lazily reads the non-blank lines of an input file, in order.
///
/// # Example
///
/// ```no_run
/// use shift_payroll::input::RecordReader;
///
/// for line in RecordReader::open("employees.txt")? {
///     println!("{}", line?);
/// }
/// # Ok::<(), shift_payroll::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct RecordReader<R> {
    path: String,
    lines: Lines<R>,
}

impl RecordReader<BufReader<File>> {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InputSource`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let file = File::open(path).map_err(|e| EngineError::InputSource {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        Ok(Self::from_reader(path_str, BufReader::new(file)))
    }
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps any buffered reader; `name` identifies it in errors.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self {
            path: name.into(),
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = EngineResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok(line)),
                Err(e) => {
                    return Some(Err(EngineError::InputSource {
                        path: self.path.clone(),
                        message: e.to_string(),
                    }));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order_skipping_blank() {
        let input = "RENE=MO10:00-12:00\n\n  \nASTRID=SA14:00-18:00\n";
        let lines: Vec<String> = RecordReader::from_reader("memory", Cursor::new(input))
            .collect::<EngineResult<_>>()
            .unwrap();
        assert_eq!(lines, vec!["RENE=MO10:00-12:00", "ASTRID=SA14:00-18:00"]);
    }

    #[test]
    fn test_open_missing_file_fails() {
        match RecordReader::open("/nonexistent/employees.txt") {
            Err(EngineError::InputSource { path, .. }) => {
                assert_eq!(path, "/nonexistent/employees.txt");
            }
            _ => panic!("Expected InputSource error"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut reader = RecordReader::from_reader("memory", Cursor::new(bytes));
        assert!(matches!(reader.next(), Some(Err(EngineError::InputSource { .. }))));
    }
}
