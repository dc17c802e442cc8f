// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by path construction, iteration and crossing queries.

/// An error from a [`Path`](crate::Path) operation, a
/// [`PathIterator`](crate::PathIterator) or a crossing computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path is in a state where the operation is not allowed, such as a
    /// drawing command before any move, or removing from an empty path.
    #[error("invalid path state: {0}")]
    InvalidState(&'static str),
    /// The iterator has no more elements.
    #[error("no more path elements")]
    NoSuchElement,
    /// An argument does not satisfy the operation's precondition, such as a
    /// path iterator that does not start with a move.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::PathError;

    #[test]
    fn messages() {
        assert_eq!(
            PathError::InvalidState("missing initial move").to_string(),
            "invalid path state: missing initial move"
        );
        assert_eq!(
            PathError::NoSuchElement.to_string(),
            "no more path elements"
        );
    }
}
