// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! One-shot CSV loader: the whole dataset is read before the server accepts
//! a single request, and nothing mutates it afterwards.

mod reader;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "tokenize-ingest";

pub use reader::load_components;

/// Load failures, split along the startup error taxonomy: the source file
/// being missing or unreadable versus a row the delimited format cannot
/// parse. Either way the whole load fails; no partial dataset is accepted.
#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    Io(std::io::Error),
    Parse(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "source file unreadable: {err}"),
            Self::Parse(msg) => write!(f, "malformed source row: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            _ => Self::Parse(message),
        }
    }
}
