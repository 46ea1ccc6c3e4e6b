// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;
use std::io;
use std::slice;
use thiserror::Error;

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// The caller supplied something that can't be turned into a metric: an
    /// empty or malformed key, a non-finite value, an address that doesn't
    /// resolve, etc.
    InvalidInput,
    /// An I/O error was encountered binding a socket or sending a datagram.
    IoError,
}

#[derive(Debug, Error)]
enum ErrorRepr {
    #[error("{1}")]
    WithDescription(ErrorKind, Cow<'static, str>),
    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// Error generated by this library
#[derive(Debug, Error)]
#[error(transparent)]
pub struct MetricError {
    repr: ErrorRepr,
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::IoError(_) => ErrorKind::IoError,
            ErrorRepr::WithDescription(kind, _) => kind,
        }
    }
}

impl From<io::Error> for MetricError {
    fn from(err: io::Error) -> MetricError {
        MetricError {
            repr: ErrorRepr::IoError(err),
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, Cow::Borrowed(desc)),
        }
    }
}

impl From<(ErrorKind, String)> for MetricError {
    fn from((kind, desc): (ErrorKind, String)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, Cow::Owned(desc)),
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;

/// Datagram payloads handed to a sink by a single metric call.
///
/// Each payload is a complete metric in wire format, e.g. `my.app.hits:1|c|@0.1`.
/// When a sampled call loses the draw nothing is sent and the payload list is
/// empty. Payloads are recorded whether or not the sink managed to deliver
/// them; delivery problems are reported to the error handler of the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emitted {
    payloads: Vec<String>,
}

impl Emitted {
    pub(crate) fn new(payloads: Vec<String>) -> Self {
        Emitted { payloads }
    }

    /// Payloads in the order they were sent
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.payloads.iter()
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// True if nothing was sent, typically because the call was sampled out
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl<'a> IntoIterator for &'a Emitted {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
