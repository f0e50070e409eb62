// This module defines the error types for tapegen using the thiserror crate. AllocError
// covers the segment allocator (zero-sized requests and releases of handles that are not
// live). ConfigError rejects machine configurations the emitter cannot honour, such as a
// cell width outside 1..=32 bits. EmitError is the main error enum raised by the emission
// context: duplicate declarations, references to undeclared variables, attempts to pop the
// root scope, and allocator failures wrapped transparently. EmitResult<T> is the convenience
// alias used throughout the emitter. All of these are caller errors: they are returned at the
// point of violation and never caught or retried inside the crate.

//! Error types for the tape code generator.
//!
//! Using thiserror for more idiomatic error handling.

use thiserror::Error;

use super::allocator::SegmentHandle;

/// Errors raised by the segment allocator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    #[error("Cannot allocate a segment of zero cells")]
    ZeroSize,

    #[error("Segment handle {handle} is not live")]
    UnknownHandle { handle: SegmentHandle },
}

/// Errors raised while building a machine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported cell width: {bits} bits (expected 1..=32)")]
    InvalidCellWidth { bits: u32 },
}

/// Main error type for instruction emission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("Variable {name} already declared")]
    DuplicateDeclaration { name: String },

    #[error("Unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("Pop on root scope")]
    PopRootScope,

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Result type alias for emission operations.
pub type EmitResult<T> = Result<T, EmitError>;
