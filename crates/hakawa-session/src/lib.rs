//! # hakawa-session: Region Resolution & Selection State
//!
//! Picks the active pricing region for a visitor and owns the one piece of
//! mutable state in the pricing stack: which region is currently selected.
//!
//! ## Resolution Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Region Resolution (evaluated once)                     │
//! │                                                                         │
//! │  1. Explicit override   HAKAWA_REGION=US         ──► US                 │
//! │         │ absent/invalid                                                │
//! │         ▼                                                               │
//! │  2. Persisted choice    <config dir>/hakawa/region ──► MA               │
//! │         │ absent/invalid                                                │
//! │         ▼                                                               │
//! │  3. Locale inference    LANG=fr_FR.UTF-8 ──► subtag FR ──► FR           │
//! │         │ absent/invalid                                                │
//! │         ▼                                                               │
//! │  4. Default             ──► FR                                          │
//! │                                                                         │
//! │  Storage/env failures are swallowed and treated as "absent".            │
//! │  After initialization, set_region_code is the ONLY mutation path.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`environment`] - the provider abstraction over override/persisted/locale
//!   probes, plus the real [`environment::SystemEnvironment`]
//! - [`store`] - file-backed persistence of the visitor's region choice
//! - [`resolve`] - the ordered fallback chain
//! - [`session`] - [`session::PricingSession`], the consumer-facing surface
//!
//! ## Example Usage
//!
//! ```rust
//! use hakawa_session::environment::FakeEnvironment;
//! use hakawa_session::session::PricingSession;
//!
//! let env = FakeEnvironment::default().with_locale("fr-FR");
//! let session = PricingSession::new(env);
//!
//! assert_eq!(session.region_code().as_str(), "FR");
//! assert_eq!(session.display_price(19.0), "18,99\u{00A0}€");
//! ```

pub mod environment;
pub mod resolve;
pub mod session;
pub mod store;

pub use environment::{Environment, SystemEnvironment};
pub use resolve::resolve_region_code;
pub use session::PricingSession;
pub use store::{RegionStore, StoreError};
