//! Error types for diagram construction.
//!
//! Every builder validates its descriptor before emitting any primitive, so a
//! [`DiagramError`] always means "no scene was produced".

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DiagramError>;

/// The main error type for Tableau operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    #[error("unknown preset `{name}`")]
    UnknownPreset { name: String },

    #[error("{context}: index {index} is out of range for {len} entries")]
    IndexOutOfRange {
        context: String,
        index: usize,
        len: usize,
    },

    #[error("{context}: range is degenerate")]
    DegenerateRange { context: String },

    #[error("{context}: angle is undefined for a zero-length ray")]
    DegenerateAngle { context: String },

    #[error("{context}: expected {expected}, found {found}")]
    SchemaMismatch {
        context: String,
        expected: String,
        found: String,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl DiagramError {
    pub(crate) fn index_out_of_range(context: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            context: context.into(),
            index,
            len,
        }
    }

    pub(crate) fn degenerate_range(context: impl Into<String>) -> Self {
        Self::DegenerateRange {
            context: context.into(),
        }
    }

    pub(crate) fn schema_mismatch(
        context: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::SchemaMismatch {
            context: context.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub(crate) fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the variant, used as a log key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownPreset { .. } => "unknown_preset",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::DegenerateRange { .. } => "degenerate_range",
            Self::DegenerateAngle { .. } => "degenerate_angle",
            Self::SchemaMismatch { .. } => "schema_mismatch",
            Self::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

/// Checks that `index` addresses one of `len` entries.
pub(crate) fn check_index(context: &str, index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(DiagramError::index_out_of_range(context, index, len))
    }
}

/// Checks that an optional per-entity list has exactly `expected` entries.
pub(crate) fn check_len<T>(context: &str, items: Option<&[T]>, expected: usize) -> Result<()> {
    match items {
        Some(items) if items.len() != expected => Err(DiagramError::schema_mismatch(
            context,
            format!("{expected} entries"),
            items.len(),
        )),
        _ => Ok(()),
    }
}

/// Checks that a size-like parameter is finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DiagramError::invalid_parameter(
            name,
            format!("must be a positive number, got {value}"),
        ))
    }
}
