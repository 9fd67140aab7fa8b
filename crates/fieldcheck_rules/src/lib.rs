//! # fieldcheck rules
//!
//! Rule-chain validation engine. A [`Validator`] hands out one [`Attribute`]
//! handle per attribute; rule methods on the handle evaluate immediately, in
//! call order, and accumulate localized messages. The chain never
//! short-circuits: [`Attribute::errors`] reports every violation.
//!
//! Rule families:
//!
//! - Presence: `required`, `filled`, `present`, `prohibited`
//! - Type: `string`, `numeric`, `integer`, `boolean`, `array`, `json`
//! - Format: `email`, `url`, `ip`, `uuid`, `alpha`, `regex`, `date_format`, `timezone`, ...
//! - Files: `mimes`, `image`, `dimensions`
//! - Fixed bounds: `before`, `after`, `max_numeric`, `max_string`, `digits`, ...
//! - Set membership: `in_list`, `not_in`, `in_array`, `distinct`, ...
//! - Cross-field: `confirmed`, `same`, `different`, `required_if`, `required_unless`, ...
//! - Password policy: `password_letters`, `password_mixed`, ...
//! - Capability-backed: `active_url`, `exists`, `unique`
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{Catalog, Language, Session};
//! use fieldcheck_rules::Validator;
//!
//! let catalog = Catalog::builtin();
//! let session = Session::new().with("name", "mehrab");
//! let validator = Validator::new(&catalog, &session);
//!
//! let errors = validator
//!     .attribute("pan")
//!     .is("")
//!     .required()
//!     .numeric()
//!     .required_if("name", "mehrab")
//!     .errors()
//!     .expect("rule parameters are well-formed");
//!
//! assert_eq!(errors.messages("pan").len(), 3);
//! assert_eq!(errors.first("pan"), Some("The pan field is required."));
//! ```

mod attribute;
mod rules;
mod validator;

pub use attribute::Attribute;
pub use validator::Validator;
