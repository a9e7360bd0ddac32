//! Catalog validation.
//!
//! Runs once at construction time so a partially-broken plan can never
//! reach the view layer. Structural problems are errors; cosmetic ones
//! (duplicate "Popular" badges) are logged and tolerated, since a badly
//! badged card must still render.

use tracing::warn;

use crate::error::{CatalogError, Result};

use super::plan::Plan;

/// Maximum length for plan names.
const MAX_PLAN_NAME_LENGTH: usize = 128;

/// Validate a full catalog.
///
/// Checks, in order:
/// - the catalog is non-empty
/// - every plan passes [`validate_plan`]
/// - plan names are unique
/// - at most one plan is the free tier
///
/// Duplicate `popular` flags are reported with a warning but do not fail
/// validation.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_catalog(plans: &[Plan]) -> Result<()> {
    if plans.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut free: Option<&str> = None;
    let mut popular: Option<&str> = None;

    for (i, plan) in plans.iter().enumerate() {
        validate_plan(plan)?;

        if plans[..i].iter().any(|p| p.name == plan.name) {
            return Err(CatalogError::DuplicatePlanName { name: plan.name.clone() });
        }

        if plan.is_free() {
            if let Some(first) = free {
                return Err(CatalogError::MultipleFreePlans {
                    first: first.to_string(),
                    second: plan.name.clone(),
                });
            }
            free = Some(&plan.name);
        }

        if plan.popular {
            if let Some(first) = popular {
                warn!(first, second = %plan.name, "multiple plans carry the Popular badge");
            }
            popular = Some(&plan.name);
        }
    }

    Ok(())
}

/// Validate a single plan entry.
///
/// Plan names must be non-empty and at most 128 characters; the tier
/// label and feature list must be non-empty.
///
/// # Errors
///
/// Returns a [`CatalogError`] describing the problem.
pub fn validate_plan(plan: &Plan) -> Result<()> {
    if plan.name.trim().is_empty() {
        return Err(CatalogError::InvalidPlanName {
            name: plan.name.clone(),
            reason: "name cannot be empty".to_string(),
        });
    }

    if plan.name.len() > MAX_PLAN_NAME_LENGTH {
        return Err(CatalogError::InvalidPlanName {
            name: plan.name.chars().take(MAX_PLAN_NAME_LENGTH).collect(),
            reason: format!("name exceeds maximum length of {}", MAX_PLAN_NAME_LENGTH),
        });
    }

    if plan.tier_label.trim().is_empty() {
        return Err(CatalogError::EmptyTierLabel { name: plan.name.clone() });
    }

    if plan.features.is_empty() {
        return Err(CatalogError::EmptyFeatureList { name: plan.name.clone() });
    }

    Ok(())
}
