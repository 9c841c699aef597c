//! Reader for text/pattern fixture files
//!
//! A fixture holds test cases as line pairs: the text, then the pattern.
//! Reading stops at end of file or at the first empty text line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// One text/pattern pair, without line terminators
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TestCase {
    pub text: Vec<u8>,
    pub pattern: Vec<u8>,
}

impl TestCase {
    pub fn new(text: impl Into<Vec<u8>>, pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] io::Error),
    #[error("text on line {line} has no pattern line")]
    MissingPattern { line: usize },
}

/// Streaming iterator over the test cases of a fixture
pub struct Fixture<R> {
    reader: R,
    line: usize,
    done: bool,
}

impl Fixture<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Fixture<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            done: false,
        }
    }

    /// Next line as bytes, `None` at end of file
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn read_case(&mut self) -> Result<Option<TestCase>, FixtureError> {
        let text = match self.read_line()? {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(None),
        };
        let pattern = self
            .read_line()?
            .ok_or(FixtureError::MissingPattern { line: self.line })?;
        Ok(Some(TestCase { text, pattern }))
    }
}

impl<R: BufRead> Iterator for Fixture<R> {
    type Item = Result<TestCase, FixtureError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.read_case().transpose();
        if !matches!(res, Some(Ok(_))) {
            self.done = true;
        }
        res
    }
}
