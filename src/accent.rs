//! Tier accents.
//!
//! Each tier maps to a color family used for the card header, the
//! feature check marks, and the checkout button. The mapping is keyed
//! by [`Tier`], not by display name, so renaming a plan's marketing
//! copy cannot change its styling. A name-keyed lookup survives only at
//! the untyped boundary and falls back to [`Accent::Neutral`] — a
//! wrongly colored card must still render.

use serde::Serialize;
use tracing::warn;

use crate::catalog::Tier;

/// A cosmetic color family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Slate,
    Teal,
    Blue,
    Amber,
    Purple,
    /// Fallback when no tier can be determined.
    #[default]
    Neutral,
}

impl Accent {
    /// The accent for a tier. Total over [`Tier`].
    #[must_use]
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => Self::Slate,
            Tier::Basic => Self::Teal,
            Tier::Standard => Self::Blue,
            Tier::Pro => Self::Amber,
            Tier::Premium => Self::Purple,
        }
    }

    /// Legacy name-keyed lookup for untyped inputs.
    ///
    /// Matches the five reference plan names exactly; anything else
    /// degrades to [`Accent::Neutral`] with a warning rather than
    /// failing, since styling must never block rendering.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Free Plan" => Self::Slate,
            "Basic Plan" => Self::Teal,
            "Standard Plan" => Self::Blue,
            "Pro Plan" => Self::Amber,
            "Premium Plan" => Self::Purple,
            _ => {
                warn!(name, "no accent mapped for plan name, using neutral");
                Self::Neutral
            }
        }
    }

    /// Stable identifier for this accent (lowercase).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Amber => "amber",
            Self::Purple => "purple",
            Self::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_per_tier() {
        assert_eq!(Accent::for_tier(Tier::Free), Accent::Slate);
        assert_eq!(Accent::for_tier(Tier::Basic), Accent::Teal);
        assert_eq!(Accent::for_tier(Tier::Standard), Accent::Blue);
        assert_eq!(Accent::for_tier(Tier::Pro), Accent::Amber);
        assert_eq!(Accent::for_tier(Tier::Premium), Accent::Purple);
    }

    #[test]
    fn test_name_lookup_matches_tier_lookup() {
        assert_eq!(Accent::from_name("Standard Plan"), Accent::for_tier(Tier::Standard));
        assert_eq!(Accent::from_name("Premium Plan"), Accent::for_tier(Tier::Premium));
    }

    #[test]
    fn test_unknown_name_degrades_to_neutral() {
        assert_eq!(Accent::from_name("Diamond Plan"), Accent::Neutral);
        assert_eq!(Accent::from_name(""), Accent::Neutral);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(Accent::default(), Accent::Neutral);
    }
}
