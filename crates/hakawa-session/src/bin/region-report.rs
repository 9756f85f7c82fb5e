//! # Region Report
//!
//! Prints the plan catalog as a visitor in the resolved region would see it.
//! Diagnostic tool for checking the pricing pipeline end to end.
//!
//! ## Usage
//! ```bash
//! # Report for the auto-detected region (persisted choice, then locale)
//! cargo run -p hakawa-session --bin region-report
//!
//! # Force a region (same override channel the resolution chain honors)
//! HAKAWA_REGION=SN cargo run -p hakawa-session --bin region-report
//!
//! # Verbose resolution logging
//! RUST_LOG=debug cargo run -p hakawa-session --bin region-report
//! ```

use hakawa_pricing::{fallback_plans, validate_registry, BillingPeriod};
use hakawa_session::{PricingSession, SystemEnvironment};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    // The region table is configuration: a malformed entry means refusing to
    // show prices at all, not showing wrong ones.
    if let Err(error) = validate_registry() {
        eprintln!("region registry is invalid: {error}");
        std::process::exit(1);
    }

    let session = PricingSession::new(SystemEnvironment::new());
    let region = session.region();

    println!(
        "Region {} ({}) - locale {}, PPP {}, rate {}",
        region.code, region.currency, region.locale, region.ppp_factor, region.exchange_rate
    );
    println!();
    println!("{:<10} {:>18} {:>18}", "plan", "monthly", "annual");

    for plan in fallback_plans() {
        let monthly = if plan.is_free() {
            "-".to_string()
        } else {
            session.display_price(plan.price_eur(BillingPeriod::Monthly))
        };
        let annual = if plan.is_free() {
            "-".to_string()
        } else {
            session.display_price(plan.price_eur(BillingPeriod::Annual))
        };
        let marker = if plan.popular { " *" } else { "" };
        println!("{:<10} {:>18} {:>18}{}", plan.id, monthly, annual, marker);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show resolution decisions
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
