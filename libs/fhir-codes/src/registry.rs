//! Runtime resolution of system URIs to vocabulary tables.
//!
//! The typed API in the sibling modules covers callers that know the
//! vocabulary at compile time. This registry covers the other case:
//! a `(system, code)` pair arriving at runtime, e.g. out of a `Coding`
//! in a payload.

use phf::phf_map;
use stannum_terminology::{Concept, Vocabulary, VocabularyInfo};

use crate::{
    AssertionResponseTypes, CarePlanIntent, ClaimOutcome, DeviceDispenseStatus, EncounterStatus,
    FhirTypes, FhirVersion, NarrativeStatus, PublicationStatus, RelatedArtifactType,
    SearchModifierCode,
};

/// Every vocabulary this crate ships, in catalog order.
pub static ALL: &[&VocabularyInfo] = &[
    &EncounterStatus::INFO,
    &CarePlanIntent::INFO,
    &ClaimOutcome::INFO,
    &DeviceDispenseStatus::INFO,
    &PublicationStatus::INFO,
    &FhirVersion::INFO,
    &SearchModifierCode::INFO,
    &AssertionResponseTypes::INFO,
    &NarrativeStatus::INFO,
    &RelatedArtifactType::INFO,
    &FhirTypes::INFO,
];

/// Compile-time perfect hash over system URIs.
static SYSTEMS: phf::Map<&'static str, &'static VocabularyInfo> = phf_map! {
    "http://hl7.org/fhir/encounter-status" => &EncounterStatus::INFO,
    "http://hl7.org/fhir/request-intent" => &CarePlanIntent::INFO,
    "http://hl7.org/fhir/claim-outcome" => &ClaimOutcome::INFO,
    "http://hl7.org/fhir/devicedispense-status" => &DeviceDispenseStatus::INFO,
    "http://hl7.org/fhir/publication-status" => &PublicationStatus::INFO,
    "http://hl7.org/fhir/FHIR-version" => &FhirVersion::INFO,
    "http://hl7.org/fhir/search-modifier-code" => &SearchModifierCode::INFO,
    "http://hl7.org/fhir/assert-response-code-types" => &AssertionResponseTypes::INFO,
    "http://hl7.org/fhir/narrative-status" => &NarrativeStatus::INFO,
    "http://hl7.org/fhir/related-artifact-type" => &RelatedArtifactType::INFO,
    "http://hl7.org/fhir/fhir-types" => &FhirTypes::INFO,
};

/// Verdict for a single `(system, code)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeValidation {
    /// Whether the code is a member of the system.
    pub valid: bool,
    /// Canonical display for the concept (when the code is a member).
    pub display: Option<&'static str>,
    /// Human-readable detail on failure.
    pub message: Option<String>,
}

/// Resolves a system URI to its vocabulary descriptor.
pub fn find(system: &str) -> Option<&'static VocabularyInfo> {
    SYSTEMS.get(system).copied()
}

/// Case-sensitive concept lookup across all known systems.
pub fn lookup(system: &str, code: &str) -> Option<&'static Concept> {
    find(system)?.find(code)
}

/// Validates a code against its claimed system.
///
/// Returns `None` when the system itself is unknown to this registry,
/// so callers can distinguish "not our vocabulary" from "not a member".
pub fn validate(system: &str, code: &str) -> Option<CodeValidation> {
    let info = find(system)?;
    Some(match info.find(code) {
        Some(concept) => CodeValidation {
            valid: true,
            display: Some(concept.display),
            message: None,
        },
        None => CodeValidation {
            valid: false,
            display: None,
            message: Some(format!(
                "code '{code}' is not a member of {} ({system})",
                info.name
            )),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keys_match_their_descriptors() {
        for (key, info) in SYSTEMS.entries() {
            assert_eq!(*key, info.system);
        }
        assert_eq!(SYSTEMS.len(), ALL.len());
    }

    #[test]
    fn all_is_duplicate_free() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.system, b.system);
            }
        }
    }

    #[test]
    fn finds_known_systems() {
        let info = find("http://hl7.org/fhir/encounter-status").unwrap();
        assert_eq!(info.name, "EncounterStatus");
        assert!(find("http://hl7.org/fhir/no-such-system").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("http://hl7.org/fhir/encounter-status", "in-progress").is_some());
        assert!(lookup("http://hl7.org/fhir/encounter-status", "IN-PROGRESS").is_none());
    }

    #[test]
    fn validate_distinguishes_unknown_system_from_bad_code() {
        assert!(validate("http://hl7.org/fhir/no-such-system", "x").is_none());

        let ok = validate("http://hl7.org/fhir/claim-outcome", "complete").unwrap();
        assert!(ok.valid);
        assert_eq!(ok.display, Some("Processing Complete"));
        assert!(ok.message.is_none());

        let bad = validate("http://hl7.org/fhir/claim-outcome", "done").unwrap();
        assert!(!bad.valid);
        assert!(bad.message.unwrap().contains("ClaimOutcome"));
    }
}
