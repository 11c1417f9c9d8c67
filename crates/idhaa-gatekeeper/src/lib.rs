//! Idhaa Gatekeeper
//!
//! Validates parsed completions before they become broadcast documents.
//!
//! The Gatekeeper provides:
//! - Structural validation (the completion must be a JSON object)
//! - Required-section checking (introduction, Qur'an verses, hadiths)
//! - Per-section shape narrowing to the typed document model
//! - Missing-level reporting for leveled sections
//!
//! # Examples
//!
//! ```no_run
//! use idhaa_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let config = ValidationConfig::default();
//! let gatekeeper = Gatekeeper::new(config);
//!
//! // Validate a parsed completion before returning it
//! // let document = gatekeeper.validate(&value)?;
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, REQUIRED_SECTIONS};
