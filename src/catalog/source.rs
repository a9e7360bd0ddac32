//! Catalog ingestion from untyped documents.
//!
//! Code-defined catalogs go through the builder; admin-managed ones
//! arrive as JSON. This module is the untyped boundary where the typed
//! invariants are established: a non-free plan must carry a numeric
//! price, a free plan must not, and tier names must be known. All of it
//! fails fast at load time, before anything reaches the view layer.
//!
//! ```rust
//! use workscout_plans::catalog::CatalogSource;
//!
//! let doc = r#"{ "plans": [
//!     { "name": "Free Plan", "tier": "free", "tier_label": "Basic Access",
//!       "free": true, "features": ["Manage your personal profile"] },
//!     { "name": "Basic Plan", "tier": "basic", "tier_label": "Bronze",
//!       "monthly_price": 5, "features": ["Basic resume review"] }
//! ]}"#;
//!
//! let catalog = CatalogSource::from_json(doc).unwrap().into_catalog().unwrap();
//! assert_eq!(catalog.len(), 2);
//! ```

use serde::Deserialize;

use crate::error::{CatalogError, Result};

use super::plan::{Plan, Price, Tier};
use super::Catalog;

/// An untyped catalog document, as deserialized from JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogSource {
    /// Plan records in display order.
    pub plans: Vec<PlanSource>,
}

/// One untyped plan record.
///
/// Unlike [`Plan`], this can express inconsistent states (a free plan
/// with a price, a priced plan without one); [`PlanSource::into_plan`]
/// rejects them.
#[derive(Clone, Debug, Deserialize)]
pub struct PlanSource {
    pub name: String,
    pub tier: String,
    pub tier_label: String,
    #[serde(default)]
    pub monthly_price: Option<u32>,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl CatalogSource {
    /// Parse a catalog document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedDocument`] when the document is
    /// not valid JSON for this shape.
    pub fn from_json(doc: &str) -> Result<Self> {
        serde_json::from_str(doc).map_err(|e| CatalogError::MalformedDocument(e.to_string()))
    }

    /// Convert into a validated [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns the first error found: an inconsistent record, an unknown
    /// tier, or a catalog-level validation failure.
    pub fn into_catalog(self) -> Result<Catalog> {
        let plans = self
            .plans
            .into_iter()
            .map(PlanSource::into_plan)
            .collect::<Result<Vec<_>>>()?;
        Catalog::from_plans(plans)
    }
}

impl PlanSource {
    /// Convert one record into a typed [`Plan`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTier`] for an unrecognized tier
    /// name and [`CatalogError::InvalidPlanSource`] when the free flag,
    /// tier, and price disagree.
    pub fn into_plan(self) -> Result<Plan> {
        let tier = Tier::parse(&self.tier).ok_or_else(|| CatalogError::UnknownTier {
            name: self.name.clone(),
            tier: self.tier.clone(),
        })?;

        let is_free = self.free || tier == Tier::Free;

        let price = if is_free {
            if tier != Tier::Free {
                return Err(CatalogError::InvalidPlanSource {
                    name: self.name,
                    reason: format!("free plan cannot have tier '{}'", tier),
                });
            }
            if let Some(amount) = self.monthly_price {
                return Err(CatalogError::InvalidPlanSource {
                    name: self.name,
                    reason: format!("free plan cannot carry a monthly price ({})", amount),
                });
            }
            Price::Free
        } else {
            match self.monthly_price {
                Some(amount) => Price::Monthly(amount),
                None => {
                    return Err(CatalogError::InvalidPlanSource {
                        name: self.name,
                        reason: "non-free plan is missing a monthly price".to_string(),
                    });
                }
            }
        };

        Ok(Plan {
            tier,
            name: self.name,
            tier_label: self.tier_label,
            price,
            popular: self.popular,
            features: self.features,
            note: self.note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, tier: &str, price: Option<u32>, free: bool) -> PlanSource {
        PlanSource {
            name: name.to_string(),
            tier: tier.to_string(),
            tier_label: "Label".to_string(),
            monthly_price: price,
            free,
            popular: false,
            features: vec!["A feature".to_string()],
            note: None,
        }
    }

    #[test]
    fn test_priced_record_converts() {
        let plan = record("Pro Plan", "pro", Some(25), false).into_plan().unwrap();
        assert_eq!(plan.tier, Tier::Pro);
        assert_eq!(plan.price, Price::Monthly(25));
    }

    #[test]
    fn test_free_record_converts() {
        let plan = record("Free Plan", "free", None, true).into_plan().unwrap();
        assert_eq!(plan.price, Price::Free);
    }

    #[test]
    fn test_free_tier_implies_free_price() {
        // The tier alone marks the plan free, even without the flag.
        let plan = record("Free Plan", "free", None, false).into_plan().unwrap();
        assert_eq!(plan.price, Price::Free);
    }

    #[test]
    fn test_non_free_without_price_rejected() {
        let err = record("Pro Plan", "pro", None, false).into_plan().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPlanSource { .. }));
    }

    #[test]
    fn test_free_with_price_rejected() {
        let err = record("Free Plan", "free", Some(5), true).into_plan().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPlanSource { .. }));
    }

    #[test]
    fn test_free_flag_on_paid_tier_rejected() {
        let err = record("Pro Plan", "pro", None, true).into_plan().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPlanSource { .. }));
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let err = record("Diamond Plan", "diamond", Some(99), false).into_plan().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownTier {
                name: "Diamond Plan".to_string(),
                tier: "diamond".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = CatalogSource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedDocument(_)));
    }

    #[test]
    fn test_document_round_trip() {
        let doc = r#"{ "plans": [
            { "name": "Free Plan", "tier": "free", "tier_label": "Basic Access",
              "free": true, "features": ["Manage your personal profile"] },
            { "name": "Standard Plan", "tier": "standard", "tier_label": "Silver",
              "monthly_price": 10, "popular": true,
              "features": ["20 tailored job applications per month"] }
        ]}"#;

        let catalog = CatalogSource::from_json(doc).unwrap().into_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Standard Plan").unwrap().popular);
    }
}
