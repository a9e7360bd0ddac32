//! The WorkScout reference catalog.
//!
//! Five tiers, priced in whole pounds. The free tier exists so job
//! seekers can manage a profile before subscribing; applications are
//! only submitted on a paid plan, hence the note on the free card.

use super::{Catalog, Tier};

/// Build the five-plan WorkScout catalog.
///
/// The catalog passes validation by construction, so this returns the
/// catalog directly rather than a `Result`.
#[must_use]
pub fn workscout_catalog() -> Catalog {
    Catalog::builder()
        .plan(Tier::Free, "Free Plan")
        .tier_label("Basic Access")
        .free()
        .features([
            "Manage your personal profile",
            "Upload and manage CVs/resumes",
            "View your dashboard and track your activity",
            "Secure messaging with WorkScout admin",
        ])
        .note("Job applications will only be submitted after a subscription is activated")
        .done()
        .plan(Tier::Basic, "Basic Plan")
        .tier_label("Bronze")
        .monthly_price(5)
        .features([
            "Everything in the Basic Plan",
            "10 tailored job applications per month",
            "Basic resume review",
            "Access to a limited selection of career tips & resources",
        ])
        .done()
        .plan(Tier::Standard, "Standard Plan")
        .tier_label("Silver")
        .monthly_price(10)
        .popular()
        .features([
            "Everything in the Basic Plan",
            "20 tailored job applications per month",
            "AI-assisted CV optimization",
            "LinkedIn profile optimization tips",
            "Priority email support",
        ])
        .done()
        .plan(Tier::Pro, "Pro Plan")
        .tier_label("Gold")
        .monthly_price(25)
        .features([
            "Everything in the Standard Plan",
            "30 tailored job applications per month",
            "Personalized job-matching service",
            "Access to exclusive job opportunities",
            "Interview preparation guides & resources",
            "Networking strategies & tips",
            "1-on-1 career consultation (quarterly)",
        ])
        .done()
        .plan(Tier::Premium, "Premium Plan")
        .tier_label("Platinum")
        .monthly_price(50)
        .features([
            "Everything in the Pro Plan",
            "Unlimited tailored job applications (subject to job availability)",
            "1-on-1 job search strategy call (once per month)",
            "Personalized cover letter writing",
            "Direct employer outreach assistance",
            "Exclusive career development webinars",
            "Career Assistant for ongoing support after securing a job",
            "Monthly career coaching sessions",
            "Salary negotiation assistance",
            "Work-related support (e.g., workplace conflict, career progression advice)",
        ])
        .done()
        .build()
        .expect("reference catalog is valid by construction")
}
