// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Error types for the collaborator-facing layers.
//!
//! Distance queries never produce these; they always return a number.
//! Mesh sources, batch helpers, integration and OBJ reading do.

use thiserror::Error;

/// Result type alias for fallible geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised outside the numeric core.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// An operation that needs at least one element received none.
    #[error("input is empty")]
    EmptyInput,

    /// An element index was not valid for the source it was used on.
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// A parameter was outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A geometry file contained a line that could not be understood.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeometryError {
    #[must_use]
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check `index < len`, producing `IndexOutOfRange` otherwise.
    pub fn check_index(index: usize, len: usize) -> GeometryResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::EmptyInput;
        assert!(format!("{err}").contains("empty"));

        let err = GeometryError::invalid_argument("order must be positive");
        assert!(format!("{err}").contains("order must be positive"));

        let err = GeometryError::parse(7, "expected 3 coordinates");
        assert!(format!("{err}").contains("line 7"));
    }

    #[test]
    fn test_check_index() {
        assert!(GeometryError::check_index(2, 3).is_ok());
        match GeometryError::check_index(3, 3) {
            Err(GeometryError::IndexOutOfRange { index, len }) => {
                assert_eq!((index, len), (3, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
