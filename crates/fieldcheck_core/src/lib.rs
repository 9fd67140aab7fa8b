//! # fieldcheck core
//!
//! Core data structures shared by the fieldcheck validation engine.
//!
//! This crate holds everything a rule chain reads but never owns:
//!
//! - **Value**: the type-erased value bound to an attribute
//! - **Rule**: the closed set of rule keys, doubling as message-catalog keys
//! - **Catalog**: localized message templates with default-language fallback
//! - **Session**: the attribute registry cross-field rules resolve against
//! - **Capabilities**: injected network/storage checks (`HostResolver`, `RecordStore`)
//! - **ValidatorConfig**: language selection, capability timeout and failure policy
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{Catalog, Language, Session, Value};
//!
//! let catalog = Catalog::builtin();
//! let session = Session::new().with("name", "mehrab");
//!
//! assert_eq!(session.get("name"), Some(&Value::from("mehrab")));
//! assert!(catalog.trans_err(Language::Fa, "required").is_ok());
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod lang;
pub mod report;
pub mod rule;
pub mod session;
pub mod value;

pub use capability::*;
pub use config::*;
pub use error::*;
pub use lang::{Catalog, CatalogOverlay, Language, Section, interpolate};
pub use report::*;
pub use rule::*;
pub use session::*;
pub use value::*;
