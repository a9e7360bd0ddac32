//! Plan value types.
//!
//! A [`Plan`] is an immutable entry in the subscription catalog: display
//! copy, a [`Tier`], a [`Price`], and the ordered feature list shown on
//! its card. Plans are constructed once at startup through the catalog
//! builder and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The subscription tier a plan belongs to.
///
/// Tiers are decoupled from display copy: the card may say "Standard
/// Plan" / "Silver" while styling and lookups key off `Tier::Standard`,
/// so renaming marketing copy cannot break accent selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Basic,
    Standard,
    Pro,
    Premium,
}

impl Tier {
    /// Stable identifier for this tier (lowercase).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Pro => "pro",
            Self::Premium => "premium",
        }
    }

    /// Parse a tier identifier as found in catalog source documents.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown tiers;
    /// the caller decides whether that is fatal (it is, at the catalog
    /// ingestion boundary).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "basic" => Some(Self::Basic),
            "standard" => Some(Self::Standard),
            "pro" => Some(Self::Pro),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a plan charges per month.
///
/// Prices are whole currency units (the catalog is priced in whole
/// pounds). A non-free plan without an amount is unrepresentable here;
/// that invariant is checked at the untyped JSON boundary instead
/// (see [`crate::catalog::source`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    /// The zero-cost tier.
    Free,
    /// A monthly base price in whole currency units.
    Monthly(u32),
}

impl Price {
    /// Whether this is the free sentinel.
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// The monthly base amount, if this plan charges one.
    #[must_use]
    pub fn monthly_amount(&self) -> Option<u32> {
        match self {
            Self::Free => None,
            Self::Monthly(amount) => Some(*amount),
        }
    }
}

/// A single subscription plan.
///
/// Field order mirrors the card layout: header copy, price, badge
/// flags, then the feature list and optional cautionary note below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Structural tier, used for accent lookup and free-tier checks.
    pub tier: Tier,
    /// Unique human-readable identifier (e.g. "Standard Plan").
    pub name: String,
    /// Secondary display label (e.g. "Silver").
    pub tier_label: String,
    /// Monthly base price or the free sentinel.
    pub price: Price,
    /// At most one plan in a catalog should carry this badge.
    pub popular: bool,
    /// Ordered feature texts; display order is significant.
    pub features: Vec<String>,
    /// Optional cautionary note shown below the feature list.
    pub note: Option<String>,
}

impl Plan {
    /// Whether this is the zero-cost tier.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price.is_free()
    }

    /// The first whitespace-delimited token of the plan name.
    ///
    /// Used for the checkout button label ("Choose Pro"). When the name
    /// has no whitespace the whole name is returned; catalog validation
    /// guarantees the name is non-empty, so this is never empty.
    #[must_use]
    pub fn first_name_token(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
