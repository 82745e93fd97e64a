//! Line-oriented reading with position tracking.
//!
//! Both text formats are a fixed sequence of whitespace-separated lines
//! whose counts are declared up front, so the readers never look ahead:
//! they consume exactly the declared number of lines and report any
//! malformed or missing one by its 1-based position.

use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::{IoError, IoResult};

/// Wraps a `BufRead` source and counts lines as they are consumed.
pub(crate) struct LineCursor<R> {
    lines:   io::Lines<R>,
    current: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { lines: reader.lines(), current: 0 }
    }

    /// The line most recently returned by [`next_line`](Self::next_line),
    /// 1-based.  Zero until the first line is read.
    pub(crate) fn line(&self) -> usize {
        self.current
    }

    /// Consume the next line, or fail if the input ends early.
    pub(crate) fn next_line(&mut self) -> IoResult<String> {
        self.current += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// A parse error pinned to the current line.
    pub(crate) fn error(&self, message: impl Into<String>) -> IoError {
        IoError::Parse { line: self.current, message: message.into() }
    }
}

/// Parse one whitespace-separated token as `T`, naming `what` on failure.
pub(crate) fn field<T: FromStr>(token: Option<&str>, what: &str, line: usize) -> IoResult<T> {
    let token = token.ok_or_else(|| IoError::Parse {
        line,
        message: format!("missing {what}"),
    })?;
    token.parse().map_err(|_| IoError::Parse {
        line,
        message: format!("invalid {what} {token:?}"),
    })
}
