use stannum_codes::{
    registry, CarePlanIntent, EncounterStatus, FhirTypes, FhirVersion, NarrativeStatus,
    PublicationStatus,
};
use stannum_terminology::{Code, Error, Vocabulary};

#[test]
fn every_catalog_member_round_trips() {
    for info in registry::ALL {
        for concept in info.concepts {
            let found = registry::lookup(info.system, concept.code);
            assert_eq!(found, Some(concept), "{}/{}", info.system, concept.code);
        }
    }
}

#[test]
fn encounter_status_matches_the_published_table() {
    let status = Code::<EncounterStatus>::from_code("in-progress").unwrap();
    assert_eq!(status.code(), Some("in-progress"));
    assert_eq!(status.system(), "http://hl7.org/fhir/encounter-status");
    assert_eq!(status, EncounterStatus::IN_PROGRESS);

    // Exact match only; case variants are different strings.
    let err = Code::<EncounterStatus>::from_code("IN-PROGRESS").unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedCode { system, .. }
            if system == "http://hl7.org/fhir/encounter-status"
    ));

    assert_eq!(EncounterStatus::values().len(), 9);
}

#[test]
fn care_plan_intent_is_exactly_the_five_member_subset() {
    let legal = ["proposal", "plan", "order", "option", "directive"];
    for code in legal {
        assert!(CarePlanIntent::from_code(code).is_ok(), "{code}");
    }
    assert_eq!(CarePlanIntent::values().len(), legal.len());

    // Members of the wider request-intent system stay illegal here.
    for code in ["original-order", "reflex-order", "filler-order", "instance-order"] {
        assert!(CarePlanIntent::from_code(code).is_err(), "{code}");
    }
    assert_eq!(CarePlanIntent::SYSTEM, "http://hl7.org/fhir/request-intent");
}

#[test]
fn fhir_types_distinguishes_siblings_by_case() {
    let primitive = FhirTypes::from_code("code").unwrap();
    let complex = FhirTypes::from_code("Coding").unwrap();
    assert_ne!(primitive, complex);
    assert_eq!(primitive.display(), "code");
    assert_eq!(complex.display(), "Coding");

    // No normalization in either direction.
    assert!(FhirTypes::from_code("CODE").is_err());
    assert!(FhirTypes::from_code("coding").is_err());
}

#[test]
fn fhir_version_keeps_dotted_and_suffixed_literals() {
    assert_eq!(
        FhirVersion::from_code("4.0.1").unwrap(),
        FhirVersion::Version4_0_1
    );
    assert_eq!(
        FhirVersion::from_code("5.0.0-snapshot3").unwrap(),
        FhirVersion::Version5_0_0Snapshot3
    );
    assert!(FhirVersion::from_code("4.0").is_err());
}

#[test]
fn narrative_status_parses_its_full_table_and_nothing_else() {
    for code in ["generated", "extensions", "additional", "empty"] {
        assert!(NarrativeStatus::from_code(code).is_ok(), "{code}");
    }
    assert!(NarrativeStatus::from_code("absent").is_err());
    assert_eq!(NarrativeStatus::values().len(), 4);
}

#[test]
fn prebuilt_constants_equal_parsed_values() {
    assert_eq!(
        Code::<PublicationStatus>::from_code("active").unwrap(),
        PublicationStatus::ACTIVE
    );
    assert_eq!(
        PublicationStatus::ACTIVE.to_coding().unwrap().system.as_deref(),
        Some("http://hl7.org/fhir/publication-status")
    );
}

#[test]
fn serde_round_trips_through_the_wire_literal() {
    let encoded = serde_json::to_string(&EncounterStatus::EnteredInError).unwrap();
    assert_eq!(encoded, "\"entered-in-error\"");

    let decoded: Code<EncounterStatus> =
        serde_json::from_str("\"entered-in-error\"").unwrap();
    assert_eq!(decoded, EncounterStatus::ENTERED_IN_ERROR);

    assert!(serde_json::from_str::<Code<EncounterStatus>>("\"admitted\"").is_err());
}

#[test]
fn coding_emission_uses_the_catalog_display() {
    let coding = EncounterStatus::ON_HOLD.to_coding().unwrap();
    assert_eq!(coding.code.as_deref(), Some("on-hold"));
    assert_eq!(coding.display.as_deref(), Some("On Hold"));
    assert_eq!(
        coding.system.as_deref(),
        Some("http://hl7.org/fhir/encounter-status")
    );
}
