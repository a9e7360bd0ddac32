//! Pricing derivation.
//!
//! Pure, deterministic projection from a plan and a billing mode to the
//! display-ready price fields. No state, no I/O: every toggle of the
//! monthly/annual switch reruns this over the catalog and gets the same
//! answers for the same inputs.
//!
//! Annual billing applies a flat 20% discount to twelve months of the
//! base price, rounded half-up to whole currency units.

use serde::Serialize;

use crate::catalog::{Plan, Price};

/// Fixed label on the free tier's checkout button.
const FREE_BUTTON_LABEL: &str = "Get Started";

/// Which price the user asked to see.
///
/// Owned by the presentation layer (it is the toggle's state) and
/// passed by value into the derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingMode {
    #[default]
    Monthly,
    Annual,
}

impl BillingMode {
    /// The other mode; what the toggle switches to.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }
}

/// The amount shown on a plan card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAmount {
    /// The free sentinel, rendered as the literal "Free".
    Free,
    /// A whole-currency-unit amount.
    Amount(u32),
}

/// Display-ready price fields for one plan under one billing mode.
///
/// Free plans show the sentinel alone; priced plans get a period suffix
/// and a billing caption matching the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceView {
    pub amount: DisplayAmount,
    /// "/month" or "/year"; absent on the free tier.
    pub period_suffix: Option<&'static str>,
    /// "Billed monthly" or "Billed annually"; absent on the free tier.
    pub billing_caption: Option<&'static str>,
}

/// Derive the price view for a plan under a billing mode.
///
/// # Example
///
/// ```rust
/// use workscout_plans::catalog::workscout_catalog;
/// use workscout_plans::pricing::{derive, BillingMode, DisplayAmount};
///
/// let catalog = workscout_catalog();
/// let standard = catalog.get("Standard Plan").unwrap();
///
/// let view = derive(standard, BillingMode::Annual);
/// assert_eq!(view.amount, DisplayAmount::Amount(96));
/// assert_eq!(view.period_suffix, Some("/year"));
/// assert_eq!(view.billing_caption, Some("Billed annually"));
/// ```
#[must_use]
pub fn derive(plan: &Plan, mode: BillingMode) -> PriceView {
    let base = match plan.price {
        Price::Free => {
            return PriceView {
                amount: DisplayAmount::Free,
                period_suffix: None,
                billing_caption: None,
            };
        }
        Price::Monthly(amount) => amount,
    };

    match mode {
        BillingMode::Monthly => PriceView {
            amount: DisplayAmount::Amount(base),
            period_suffix: Some("/month"),
            billing_caption: Some("Billed monthly"),
        },
        BillingMode::Annual => PriceView {
            amount: DisplayAmount::Amount(annual_amount(base)),
            period_suffix: Some("/year"),
            billing_caption: Some("Billed annually"),
        },
    }
}

/// Twelve months at a flat 20% discount, rounded half-up.
///
/// `monthly * 12 * 0.8` is `monthly * 96 / 10`, computed in integer
/// arithmetic. The numerator is always even, so the half-up tie can
/// never actually fire for whole-unit monthly prices; it is stated for
/// completeness.
#[must_use]
pub fn annual_amount(monthly: u32) -> u32 {
    let numerator = u64::from(monthly) * 96 + 5;
    (numerator / 10) as u32
}

/// The checkout button label for a plan.
///
/// Free tier gets a fixed "Get Started"; paid tiers get "Choose " plus
/// the first whitespace-delimited token of the plan name ("Choose Pro").
/// Never empty: catalog validation guarantees a non-empty name.
#[must_use]
pub fn button_label(plan: &Plan) -> String {
    if plan.is_free() {
        FREE_BUTTON_LABEL.to_string()
    } else {
        format!("Choose {}", plan.first_name_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tier;

    fn paid(name: &str, monthly: u32) -> Plan {
        Plan {
            tier: Tier::Standard,
            name: name.to_string(),
            tier_label: "Silver".to_string(),
            price: Price::Monthly(monthly),
            popular: false,
            features: vec!["A feature".to_string()],
            note: None,
        }
    }

    fn free() -> Plan {
        Plan {
            tier: Tier::Free,
            name: "Free Plan".to_string(),
            tier_label: "Basic Access".to_string(),
            price: Price::Free,
            popular: false,
            features: vec!["Manage your personal profile".to_string()],
            note: None,
        }
    }

    #[test]
    fn test_monthly_passthrough() {
        let view = derive(&paid("Standard Plan", 10), BillingMode::Monthly);
        assert_eq!(view.amount, DisplayAmount::Amount(10));
        assert_eq!(view.period_suffix, Some("/month"));
        assert_eq!(view.billing_caption, Some("Billed monthly"));
    }

    #[test]
    fn test_annual_discount() {
        let view = derive(&paid("Standard Plan", 10), BillingMode::Annual);
        assert_eq!(view.amount, DisplayAmount::Amount(96));
        assert_eq!(view.period_suffix, Some("/year"));
        assert_eq!(view.billing_caption, Some("Billed annually"));
    }

    #[test]
    fn test_annual_amounts_for_reference_prices() {
        assert_eq!(annual_amount(5), 48);
        assert_eq!(annual_amount(10), 96);
        assert_eq!(annual_amount(25), 240);
        assert_eq!(annual_amount(50), 480);
    }

    #[test]
    fn test_annual_amount_zero() {
        assert_eq!(annual_amount(0), 0);
    }

    #[test]
    fn test_annual_amount_no_overflow_at_max() {
        // u32::MAX * 96 overflows u32; the u64 widening keeps this exact.
        assert_eq!(annual_amount(u32::MAX), ((u64::from(u32::MAX) * 96 + 5) / 10) as u32);
    }

    #[test]
    fn test_free_invariant_under_both_modes() {
        for mode in [BillingMode::Monthly, BillingMode::Annual] {
            let view = derive(&free(), mode);
            assert_eq!(view.amount, DisplayAmount::Free);
            assert_eq!(view.period_suffix, None);
            assert_eq!(view.billing_caption, None);
        }
    }

    #[test]
    fn test_derive_is_idempotent() {
        let plan = paid("Pro Plan", 25);
        for mode in [BillingMode::Monthly, BillingMode::Annual] {
            assert_eq!(derive(&plan, mode), derive(&plan, mode));
        }
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(BillingMode::Monthly.toggle(), BillingMode::Annual);
        assert_eq!(BillingMode::Annual.toggle(), BillingMode::Monthly);
        assert_eq!(BillingMode::default(), BillingMode::Monthly);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(button_label(&free()), "Get Started");
        assert_eq!(button_label(&paid("Pro Plan", 25)), "Choose Pro");
        assert_eq!(button_label(&paid("Enterprise", 99)), "Choose Enterprise");
    }
}
