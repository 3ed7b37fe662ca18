#![forbid(unsafe_code)]

//! Closed-vocabulary coded values for FHIR terminology.
//!
//! Every FHIR code-bound field draws its value from a fixed,
//! specification-defined set of string literals. This crate models that as
//! one generic mechanism instead of one type per vocabulary: a
//! [`Vocabulary`] is a fieldless enum carrying its literal table and system
//! URI as associated items, and [`Code<V>`](Code) wraps one validated value
//! together with the primitive-element metadata (`id`, `extension`) FHIR
//! allows on it.
//!
//! Construction is the only place errors can happen: parsing a string that
//! is not in the table fails with [`Error::UnrecognizedCode`]. Matching is
//! byte-exact, never case-normalized, because the literal spellings are
//! dictated by the standard. Values are immutable once built and freely
//! shareable.
//!
//! ```rust
//! use stannum_terminology::{code_system, Code, Vocabulary};
//!
//! code_system! {
//!     /// Lifecycle of a review request.
//!     pub enum ReviewState ("ReviewState", "http://example.org/fhir/review-state") {
//!         Requested / REQUESTED => "requested", "Requested";
//!         InReview / IN_REVIEW => "in-review", "In Review";
//!         Closed / CLOSED => "closed", "Closed";
//!     }
//! }
//!
//! let state: Code<ReviewState> = Code::from_code("in-review")?;
//! assert_eq!(state, ReviewState::IN_REVIEW);
//! assert_eq!(state.code(), Some("in-review"));
//! assert_eq!(state.system(), "http://example.org/fhir/review-state");
//!
//! // Unknown literals fail; absent input does not.
//! assert!(Code::<ReviewState>::from_code("IN-REVIEW").is_err());
//! assert!(Code::<ReviewState>::from_optional_code(None)?.is_none());
//! # Ok::<(), stannum_terminology::Error>(())
//! ```

mod code;
mod coding;
mod error;
mod extension;
mod macros;
mod vocabulary;

pub use code::{Code, CodeBuilder};
pub use coding::Coding;
pub use error::{Error, Result};
pub use extension::Extension;
pub use vocabulary::{Concept, Vocabulary, VocabularyInfo};

// Used by `code_system!` expansions in downstream crates.
#[doc(hidden)]
pub use serde;
