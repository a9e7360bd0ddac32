//! Plan catalog definition and construction.
//!
//! The catalog is an ordered, read-only sequence of subscription plans,
//! defined once in code (or ingested from a JSON document) and validated
//! up front so a malformed entry never reaches the view layer.
//!
//! # Defining a catalog
//!
//! ```rust
//! use workscout_plans::catalog::{Catalog, Tier};
//!
//! let catalog = Catalog::builder()
//!     .plan(Tier::Free, "Free Plan")
//!         .tier_label("Basic Access")
//!         .free()
//!         .feature("Manage your personal profile")
//!         .done()
//!     .plan(Tier::Standard, "Standard Plan")
//!         .tier_label("Silver")
//!         .monthly_price(10)
//!         .popular()
//!         .features(["20 tailored job applications per month"])
//!         .done()
//!     .build()
//!     .expect("catalog is valid");
//!
//! assert_eq!(catalog.len(), 2);
//! ```

pub mod plan;
pub mod reference;
pub mod source;
pub mod validation;

pub use plan::{Plan, Price, Tier};
pub use reference::workscout_catalog;
pub use source::{CatalogSource, PlanSource};

use crate::error::Result;

/// An ordered, validated collection of subscription plans.
///
/// Display order is significant, so the catalog preserves insertion
/// order rather than keying plans by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
}

impl Catalog {
    /// Create a builder for constructing a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Build a catalog from already-constructed plans, validating them.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::CatalogError`] describing the first invalid
    /// entry found.
    pub fn from_plans(plans: Vec<Plan>) -> Result<Self> {
        validation::validate_catalog(&plans)?;
        Ok(Self { plans })
    }

    /// Get a plan by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// The free-tier plan, if the catalog has one.
    #[must_use]
    pub fn free_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.is_free())
    }

    /// Iterate over plans in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    /// The number of plans in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the catalog has no plans.
    ///
    /// Always false for a validated catalog; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// All plan names in display order.
    #[must_use]
    pub fn plan_names(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}

/// Builder for constructing a catalog of plans.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    plans: Vec<Plan>,
}

impl CatalogBuilder {
    /// Create a new catalog builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start defining a new plan.
    #[must_use]
    pub fn plan(self, tier: Tier, name: &str) -> PlanBuilder {
        PlanBuilder {
            parent: self,
            tier,
            name: name.to_string(),
            tier_label: None,
            price: None,
            popular: false,
            features: Vec::new(),
            note: None,
        }
    }

    /// Validate and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::CatalogError`] if any plan is malformed or the
    /// catalog-level invariants do not hold.
    pub fn build(self) -> Result<Catalog> {
        Catalog::from_plans(self.plans)
    }

    fn add_plan(mut self, plan: Plan) -> Self {
        self.plans.push(plan);
        self
    }
}

/// Builder for a single plan within a catalog.
#[derive(Debug)]
pub struct PlanBuilder {
    parent: CatalogBuilder,
    tier: Tier,
    name: String,
    tier_label: Option<String>,
    price: Option<Price>,
    popular: bool,
    features: Vec<String>,
    note: Option<String>,
}

impl PlanBuilder {
    /// Set the secondary display label (e.g. "Silver").
    #[must_use]
    pub fn tier_label(mut self, label: &str) -> Self {
        self.tier_label = Some(label.to_string());
        self
    }

    /// Mark this plan as the zero-cost tier.
    #[must_use]
    pub fn free(mut self) -> Self {
        self.price = Some(Price::Free);
        self
    }

    /// Set the monthly base price in whole currency units.
    #[must_use]
    pub fn monthly_price(mut self, amount: u32) -> Self {
        self.price = Some(Price::Monthly(amount));
        self
    }

    /// Mark this plan with the "Popular" badge.
    #[must_use]
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// Append features to this plan, in display order.
    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Append a single feature to this plan.
    #[must_use]
    pub fn feature(mut self, feature: &str) -> Self {
        self.features.push(feature.to_string());
        self
    }

    /// Set the cautionary note shown below the feature list.
    #[must_use]
    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Finish defining this plan and return to the catalog builder.
    ///
    /// # Panics
    ///
    /// Panics if neither `free()` nor `monthly_price()` was called.
    #[must_use]
    pub fn done(self) -> CatalogBuilder {
        let plan = Plan {
            tier: self.tier,
            name: self.name,
            tier_label: self.tier_label.unwrap_or_default(),
            price: self.price.expect("a price (free or monthly) is required for a plan"),
            popular: self.popular,
            features: self.features,
            note: self.note,
        };
        self.parent.add_plan(plan)
    }
}
