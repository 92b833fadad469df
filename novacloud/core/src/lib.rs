//! NovaCloud Core - Headless Landing-Page Logic
//!
//! This crate holds everything on the NovaCloud landing page that has a
//! behavioural contract, independent of any rendering surface. A surface
//! (the terminal preview, a web front end, a test harness) subscribes to the
//! effects and reads the catalogue; it never owns the logic.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Surfaces                            │
//! │   ┌─────────┐   ┌──────────────┐   ┌───────────────────┐   │
//! │   │   TUI   │   │  Web (wasm)  │   │  Headless / tests │   │
//! │   └────┬────┘   └──────┬───────┘   └─────────┬─────────┘   │
//! │        └───────────────┼─────────────────────┘             │
//! │                 onChange(displayText)                      │
//! └────────────────────────┼───────────────────────────────────┘
//!                          │
//! ┌────────────────────────┼───────────────────────────────────┐
//! │                  NOVACLOUD CORE                            │
//! │  ┌─────────────────────┴──────┐  ┌───────────┐ ┌────────┐  │
//! │  │ TypewriterEffect (task)    │  │ ThemeStore│ │Pricing │  │
//! │  │   └─ TypewriterMachine     │  │           │ │        │  │
//! │  └────────────────────────────┘  └───────────┘ └────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use novacloud_core::{TypewriterConfig, TypewriterEffect};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), novacloud_core::TypewriterError> {
//!     let effect = TypewriterEffect::start(TypewriterConfig::hero())?;
//!     effect.subscribe(|text| println!("Deploy your {text}"));
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     effect.stop();
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`typewriter`]: rotating typewriter state machine and its timer-driven runtime
//! - [`theme`]: light/dark preference with explicit init and persist-on-change
//! - [`preferences`]: tiny TOML-backed key/value store used by the theme
//! - [`pricing`]: plan catalogue and billing-cycle toggle
//! - [`features`], [`testimonials`]: static page content
//! - [`config`]: TOML + environment configuration loading

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod features;
pub mod preferences;
pub mod pricing;
pub mod testimonials;
pub mod theme;
pub mod typewriter;

// Typewriter exports
pub use typewriter::{
    EffectState, Phase, PhraseList, StepOutcome, TypewriterConfig, TypewriterEffect,
    TypewriterError, TypewriterMachine, TypewriterTiming,
};

// Theme exports
pub use preferences::{PreferenceError, PreferenceStore};
pub use theme::{system_prefers_light, Theme, ThemeStore};

// Pricing exports
pub use pricing::{catalogue, BillingCycle, Plan};

// Content exports (catalogues stay behind their module paths)
pub use features::Feature;
pub use testimonials::Testimonial;

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, LandingConfig, LandingToml,
};
