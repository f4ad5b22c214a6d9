//! Domain error types.

/// Returned when a slug does not match any city in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown city: {slug}")]
pub struct UnknownCity {
    pub slug: String,
}
