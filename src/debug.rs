//! Debug facilities: error types, record diagnostics
//! and timing helpers.

use nom::error::VerboseErrorKind;
use std::{fmt, io};

use crate::parser::ParseError;

// Error types and From<...> implementations

/// Fatal conditions. Any of these ends the run with a
/// non-zero exit status.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected exactly an input and an output path")]
    Usage,
    #[error("error opening input file: {0}")]
    InputFile(io::Error),
    #[error("error creating output file: {0}")]
    OutputFile(io::Error),
    #[error("error while reading input: {0}")]
    Read(io::Error),
    #[error("structurally empty record in line {0}")]
    EmptyRecord(usize),
    #[error("error while parsing an adjacency record")]
    ParseError(Vec<VerboseErrorKind>),
}

impl From<io::Error> for Error {
    fn from(ie: io::Error) -> Self {
        Self::Read(ie)
    }
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::ParseError(verbose.errors.into_iter().map(|(_, kind)| kind).collect())
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

/// One rejected input record. Recoverable: the loader keeps
/// going and leaves the abort decision to the caller.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub line: usize,
    pub record: String,
}

impl ParseDiagnostic {
    pub fn new(line: usize, record: &str) -> Self {
        ParseDiagnostic {
            line,
            record: record.to_string(),
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing record in line {}: `{}`",
            self.line, self.record
        )
    }
}

// Custom formatter for debug printing

#[cfg(not(tarpaulin_include))]
pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

// Debug macro that allows to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}
