//! workscout-plans - Subscription plan catalog and display pricing for WorkScout
//!
//! Everything the WorkScout front end needs to render its subscription
//! packages page and sidebar: a validated plan catalog, pure pricing
//! derivation with a monthly/annual toggle, tier-keyed accent styling,
//! and serializable per-plan view-models.
//!
//! # Features
//!
//! - **Catalog**: ordered, read-only plan definitions with fail-fast
//!   validation, built in code or ingested from JSON
//! - **Pricing**: pure monthly/annual derivation (flat 20% annual
//!   discount, round-half-up)
//! - **View-models**: flattened, serializable [`view::PlanCard`]s
//!   recomputed per toggle
//! - **Accents**: tier-keyed color families with a neutral fallback
//! - **Navigation**: the static sidebar menu catalog
//!
//! # Quick Start
//!
//! ```rust
//! use workscout_plans::catalog::workscout_catalog;
//! use workscout_plans::pricing::BillingMode;
//! use workscout_plans::view::plan_cards;
//!
//! let catalog = workscout_catalog();
//!
//! // One recomputation pass per toggle event.
//! let cards = plan_cards(&catalog, BillingMode::Annual);
//! assert_eq!(cards[2].formatted_price, "£96");
//! assert_eq!(cards[2].button_label, "Choose Standard");
//! ```

pub mod accent;
pub mod catalog;
mod error;
pub mod nav;
pub mod pricing;
pub mod view;

// Re-exports for public API
pub use accent::Accent;
pub use catalog::{Catalog, CatalogBuilder, CatalogSource, Plan, PlanSource, Price, Tier, workscout_catalog};
pub use error::{CatalogError, Result};
pub use nav::{NavEntry, NavIcon, WORKSCOUT_MENU};
pub use pricing::{BillingMode, DisplayAmount, PriceView, button_label, derive};
pub use view::{PlanCard, plan_cards};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with sensible defaults.
///
/// Respects `RUST_LOG`, defaulting to `info`. Set
/// `WORKSCOUT_LOG_JSON=true` for JSON output.
///
/// # Example
///
/// ```rust,no_run
/// workscout_plans::init_tracing();
/// ```
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("WORKSCOUT_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
