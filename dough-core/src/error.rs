use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoughError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("no flour with identifier `{identifier}` in the catalog")]
    LookupMiss { identifier: String },
}

impl DoughError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DoughError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DoughError>;

/// Rejects NaN/inf and values outside `[lo, hi]`.
pub(crate) fn ensure_in_range(field: &'static str, v: f64, lo: f64, hi: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(DoughError::invalid(field, "must be a finite number"));
    }
    if v < lo || v > hi {
        return Err(DoughError::invalid(
            field,
            format!("{v} is outside {lo}..={hi}"),
        ));
    }
    Ok(())
}
