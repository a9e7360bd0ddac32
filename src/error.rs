//! Catalog construction errors.
//!
//! All fallible paths in this crate are catalog construction and
//! ingestion: a catalog is validated once, up front, so a malformed plan
//! never reaches the view layer. Pricing and view derivation are total
//! and do not produce errors.

/// A `Result` alias where the `Err` case is [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or ingesting a plan catalog.
///
/// These errors carry the offending value so callers can report exactly
/// which plan entry is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog contains no plans at all.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// A plan name failed validation.
    #[error("invalid plan name '{name}': {reason}")]
    InvalidPlanName { name: String, reason: String },

    /// Two plans share the same name.
    #[error("duplicate plan name '{name}'")]
    DuplicatePlanName { name: String },

    /// A plan's tier label is empty.
    #[error("plan '{name}' has an empty tier label")]
    EmptyTierLabel { name: String },

    /// A plan has no features to display.
    #[error("plan '{name}' has an empty feature list")]
    EmptyFeatureList { name: String },

    /// More than one plan is marked as the free tier.
    #[error("catalog has multiple free plans ('{first}' and '{second}')")]
    MultipleFreePlans { first: String, second: String },

    /// A catalog source record is inconsistent.
    #[error("invalid plan source '{name}': {reason}")]
    InvalidPlanSource { name: String, reason: String },

    /// A catalog source record names a tier this crate does not know.
    #[error("unknown tier '{tier}' in plan source '{name}'")]
    UnknownTier { name: String, tier: String },

    /// The catalog source document could not be parsed.
    #[error("malformed catalog document: {0}")]
    MalformedDocument(String),
}
