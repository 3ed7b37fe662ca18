#![forbid(unsafe_code)]

//! FHIR R5 code system catalog.
//!
//! Each vocabulary is one [`code_system!`](stannum_terminology::code_system)
//! invocation: a fieldless enum whose members map one-to-one onto the wire
//! literals of the corresponding HL7 code system. Literal spellings, display
//! labels, and system URIs are taken from the specification verbatim —
//! including the inconsistent case conventions some tables carry.
//!
//! ```rust
//! use stannum_codes::{registry, EncounterStatus};
//! use stannum_terminology::Code;
//!
//! let status: Code<EncounterStatus> = Code::from_code("in-progress")?;
//! assert_eq!(status, EncounterStatus::IN_PROGRESS);
//! assert_eq!(status.system(), "http://hl7.org/fhir/encounter-status");
//!
//! // Or resolve dynamically, when the system URI arrives at runtime.
//! let concept = registry::lookup("http://hl7.org/fhir/encounter-status", "in-progress");
//! assert_eq!(concept.map(|c| c.display), Some("In Progress"));
//! # Ok::<(), stannum_terminology::Error>(())
//! ```

mod clinical;
mod conformance;
mod datatypes;
pub mod registry;

pub use clinical::{CarePlanIntent, ClaimOutcome, DeviceDispenseStatus, EncounterStatus};
pub use conformance::{AssertionResponseTypes, FhirVersion, PublicationStatus, SearchModifierCode};
pub use datatypes::{FhirTypes, NarrativeStatus, RelatedArtifactType};
