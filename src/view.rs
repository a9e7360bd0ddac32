//! Display projections.
//!
//! A [`PlanCard`] is everything the presentation layer needs to render
//! one plan under one billing mode, flattened into a serializable
//! value. Cards are recomputed from scratch on every toggle event and
//! never persisted; the catalog stays the single source of truth.

use serde::Serialize;

use crate::accent::Accent;
use crate::catalog::{Catalog, Plan};
use crate::pricing::{self, BillingMode, DisplayAmount, PriceView};

/// The catalog is priced in pounds sterling.
const CURRENCY_SYMBOL: &str = "£";

/// Hint shown under the free tier's feature list.
const FREE_UPGRADE_HINT: &str = "Upgrade anytime";

/// Display-ready projection of one plan under one billing mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanCard {
    pub name: String,
    pub tier_label: String,
    pub accent: Accent,
    /// Renders the "Popular" ribbon and highlighted border.
    pub popular: bool,
    /// Renders the dashed border treatment of the free tier.
    pub free: bool,
    pub price: PriceView,
    /// Pre-formatted amount, e.g. "£96" or "Free".
    pub formatted_price: String,
    pub button_label: String,
    pub features: Vec<String>,
    pub note: Option<String>,
    /// Present only on the free tier.
    pub upgrade_hint: Option<&'static str>,
}

impl PlanCard {
    /// Project a single plan under the given billing mode.
    #[must_use]
    pub fn project(plan: &Plan, mode: BillingMode) -> Self {
        let price = pricing::derive(plan, mode);
        Self {
            name: plan.name.clone(),
            tier_label: plan.tier_label.clone(),
            accent: Accent::for_tier(plan.tier),
            popular: plan.popular,
            free: plan.is_free(),
            formatted_price: format_amount(price.amount),
            price,
            button_label: pricing::button_label(plan),
            features: plan.features.clone(),
            note: plan.note.clone(),
            upgrade_hint: plan.is_free().then_some(FREE_UPGRADE_HINT),
        }
    }
}

/// Project the whole catalog under one billing mode, in display order.
///
/// This is the recomputation pass the toggle triggers: one call, one
/// card per plan, no state carried between calls.
///
/// # Example
///
/// ```rust
/// use workscout_plans::catalog::workscout_catalog;
/// use workscout_plans::pricing::BillingMode;
/// use workscout_plans::view::plan_cards;
///
/// let catalog = workscout_catalog();
/// let cards = plan_cards(&catalog, BillingMode::Annual);
/// assert_eq!(cards.len(), 5);
/// assert_eq!(cards[2].formatted_price, "£96");
/// ```
#[must_use]
pub fn plan_cards(catalog: &Catalog, mode: BillingMode) -> Vec<PlanCard> {
    catalog.iter().map(|plan| PlanCard::project(plan, mode)).collect()
}

fn format_amount(amount: DisplayAmount) -> String {
    match amount {
        DisplayAmount::Free => "Free".to_string(),
        DisplayAmount::Amount(n) => format!("{}{}", CURRENCY_SYMBOL, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::workscout_catalog;

    #[test]
    fn test_cards_preserve_catalog_order() {
        let catalog = workscout_catalog();
        let cards = plan_cards(&catalog, BillingMode::Monthly);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, catalog.plan_names());
    }

    #[test]
    fn test_free_card_shape() {
        let catalog = workscout_catalog();
        let cards = plan_cards(&catalog, BillingMode::Annual);
        let free = &cards[0];
        assert!(free.free);
        assert_eq!(free.formatted_price, "Free");
        assert_eq!(free.button_label, "Get Started");
        assert_eq!(free.upgrade_hint, Some("Upgrade anytime"));
        assert!(free.note.is_some());
    }

    #[test]
    fn test_paid_card_formatting_by_mode() {
        let catalog = workscout_catalog();
        let standard = catalog.get("Standard Plan").unwrap();

        let monthly = PlanCard::project(standard, BillingMode::Monthly);
        assert_eq!(monthly.formatted_price, "£10");
        assert_eq!(monthly.price.period_suffix, Some("/month"));

        let annual = PlanCard::project(standard, BillingMode::Annual);
        assert_eq!(annual.formatted_price, "£96");
        assert_eq!(annual.price.period_suffix, Some("/year"));
    }

    #[test]
    fn test_card_accents_follow_tier() {
        let catalog = workscout_catalog();
        let cards = plan_cards(&catalog, BillingMode::Monthly);
        let accents: Vec<_> = cards.iter().map(|c| c.accent).collect();
        assert_eq!(
            accents,
            vec![Accent::Slate, Accent::Teal, Accent::Blue, Accent::Amber, Accent::Purple]
        );
    }

    #[test]
    fn test_card_serializes() {
        let catalog = workscout_catalog();
        let card = PlanCard::project(catalog.get("Pro Plan").unwrap(), BillingMode::Monthly);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["formatted_price"], "£25");
        assert_eq!(json["accent"], "amber");
        assert_eq!(json["price"]["billing_caption"], "Billed monthly");
    }
}
