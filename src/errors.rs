//! Error types with rich diagnostics using miette
//!
//! Vector operations fail with [`VectorError`], literal parsing with
//! [`ParseError`] (which carries the source text for labelled snippets), and
//! scene rendering with [`RenderError`].

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Coarse classification of a [`VectorError`], for callers that only need to
/// branch on which kind of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    ShapeMismatch,
    InsufficientOperands,
    DomainError,
    UnsupportedDimension,
}

// ============================================================================
// Vector Errors
// ============================================================================

/// Errors raised by the vector operations in [`crate::math`]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("invalid argument: {reason}")]
    #[diagnostic(code(vec3d::math::invalid_argument))]
    InvalidArgument { reason: String },

    #[error("shape mismatch: operand {index} has {found} components, expected {expected}")]
    #[diagnostic(
        code(vec3d::math::shape_mismatch),
        help("all vectors combined in one operation must have the same number of components")
    )]
    ShapeMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("{operation} needs at least {required} operands, got {given}")]
    #[diagnostic(code(vec3d::math::insufficient_operands))]
    InsufficientOperands {
        operation: &'static str,
        required: usize,
        given: usize,
    },

    #[error("{operation} is undefined: {reason}")]
    #[diagnostic(code(vec3d::math::domain_error))]
    DomainError {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("{operation} is only defined for {expected}-component vectors, got {found}")]
    #[diagnostic(code(vec3d::math::unsupported_dimension))]
    UnsupportedDimension {
        operation: &'static str,
        expected: usize,
        found: usize,
    },
}

impl VectorError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        VectorError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            VectorError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            VectorError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            VectorError::DomainError { .. } => ErrorKind::DomainError,
            VectorError::UnsupportedDimension { .. } => ErrorKind::UnsupportedDimension,
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing vector literals
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(vec3d::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number")]
    #[diagnostic(
        code(vec3d::parse::invalid_number),
        help("components must be finite")
    )]
    InvalidNumber {
        #[source_code]
        src: NamedSource<String>,
        #[label("not representable as a finite f64")]
        span: SourceSpan,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while composing or writing a scene
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid canvas width: {value}")]
    #[diagnostic(code(vec3d::render::invalid_width))]
    InvalidWidth { value: f64 },

    #[error("invalid {axis}-axis limits")]
    #[diagnostic(
        code(vec3d::render::invalid_limits),
        help("limits must be finite with min < max")
    )]
    InvalidLimits { axis: char },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidDimension(#[from] VectorError),

    #[error("failed to serialize SVG: {message}")]
    #[diagnostic(code(vec3d::render::svg))]
    Svg { message: String },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(vec3d::render::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
