use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::json;
use stannum_terminology::{code_system, Code, Error, Extension, Vocabulary};

code_system! {
    /// Test vocabulary mirroring the shape of the real tables.
    pub enum OrderState ("OrderState", "http://example.org/fhir/order-state") {
        Draft / DRAFT => "draft", "Draft";
        InProgress / IN_PROGRESS => "in-progress", "In Progress";
        Completed / COMPLETED => "completed", "Completed";
    }
}

fn hash_of(code: &Code<OrderState>) -> u64 {
    let mut hasher = DefaultHasher::new();
    code.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn every_literal_round_trips_to_its_constant() {
    for member in OrderState::values() {
        let parsed = Code::<OrderState>::from_code(member.code()).unwrap();
        assert_eq!(parsed, Code::of(*member));
    }
    assert_eq!(
        Code::<OrderState>::from_code("in-progress").unwrap(),
        OrderState::IN_PROGRESS
    );
}

#[test]
fn unknown_literals_are_rejected() {
    let err = Code::<OrderState>::from_code("cancelled").unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedCode { ref code, system }
            if code == "cancelled" && system == "http://example.org/fhir/order-state"
    ));
}

#[test]
fn matching_is_case_sensitive() {
    assert!(Code::<OrderState>::from_code("IN-PROGRESS").is_err());
    assert!(Code::<OrderState>::from_code("Draft").is_err());
}

#[test]
fn absent_input_is_not_an_error() {
    assert!(Code::<OrderState>::from_optional_code(None)
        .unwrap()
        .is_none());
    let present = Code::<OrderState>::from_optional_code(Some("draft")).unwrap();
    assert_eq!(present, Some(OrderState::DRAFT));
    assert!(Code::<OrderState>::from_optional_code(Some("nope")).is_err());
}

#[test]
fn builder_accepts_raw_or_typed_values() {
    let typed = Code::builder().value(OrderState::Completed).build().unwrap();
    let raw = Code::<OrderState>::builder()
        .code("completed")
        .build()
        .unwrap();
    assert_eq!(typed, raw);

    // Raw strings are re-validated at build time.
    let err = Code::<OrderState>::builder().code("COMPLETED").build();
    assert!(err.is_err());
}

#[test]
fn last_value_call_wins() {
    let code = Code::<OrderState>::builder()
        .code("draft")
        .value(OrderState::Completed)
        .build()
        .unwrap();
    assert_eq!(code.value(), Some(OrderState::Completed));

    let code = Code::<OrderState>::builder()
        .value(OrderState::Completed)
        .code("draft")
        .build()
        .unwrap();
    assert_eq!(code.value(), Some(OrderState::Draft));
}

#[test]
fn extension_forms_are_equivalent() {
    let a = Extension::new("http://example.org/a", json!({ "valueString": "x" }));
    let b = Extension::new("http://example.org/b", json!({ "valueInteger": 1 }));

    let one_by_one = Code::<OrderState>::builder()
        .extension(a.clone())
        .extension(b.clone())
        .value(OrderState::Draft)
        .build()
        .unwrap();
    let collection = Code::<OrderState>::builder()
        .extensions([a.clone(), b.clone()])
        .value(OrderState::Draft)
        .build()
        .unwrap();

    assert_eq!(one_by_one, collection);
    assert_eq!(one_by_one.extensions(), &[a, b]);
}

#[test]
fn builder_round_trip_is_identity() {
    let original = Code::<OrderState>::builder()
        .id("elem-1")
        .extension(Extension::new(
            "http://example.org/x",
            json!({ "valueString": "x" }),
        ))
        .code("in-progress")
        .build()
        .unwrap();

    let copy = original.to_builder().build().unwrap();
    assert_eq!(original, copy);
    assert_eq!(hash_of(&original), hash_of(&copy));
}

#[test]
fn copy_with_override_leaves_original_untouched() {
    let original = Code::of(OrderState::Draft);
    let amended = original
        .to_builder()
        .id("elem-2")
        .value(OrderState::Completed)
        .build()
        .unwrap();

    assert_eq!(original.value(), Some(OrderState::Draft));
    assert_eq!(original.id(), None);
    assert_eq!(amended.value(), Some(OrderState::Completed));
    assert_eq!(amended.id(), Some("elem-2"));
    assert_ne!(original, amended);
}

#[test]
fn equality_is_structural_over_the_triple() {
    let ext = Extension::new("http://example.org/x", json!({ "valueString": "x" }));
    let a = Code::<OrderState>::builder()
        .id("e")
        .extension(ext.clone())
        .value(OrderState::Draft)
        .build()
        .unwrap();
    let b = Code::<OrderState>::builder()
        .id("e")
        .extension(ext)
        .value(OrderState::Draft)
        .build()
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let different_id = a.to_builder().id("f").build().unwrap();
    assert_ne!(a, different_id);
}

#[test]
fn value_free_codes_are_legal() {
    let metadata_only = Code::<OrderState>::builder()
        .id("elem-3")
        .extension(Extension::new(
            "http://example.org/reason",
            json!({ "valueCode": "unsupported" }),
        ))
        .build()
        .unwrap();
    assert_eq!(metadata_only.value(), None);
    assert_eq!(metadata_only.code(), None);
    assert!(metadata_only.to_coding().is_none());
}

#[test]
fn coding_carries_system_and_display() {
    let coding = OrderState::IN_PROGRESS.to_coding().unwrap();
    assert_eq!(
        coding.system.as_deref(),
        Some("http://example.org/fhir/order-state")
    );
    assert_eq!(coding.code.as_deref(), Some("in-progress"));
    assert_eq!(coding.display.as_deref(), Some("In Progress"));
}

#[test]
fn serde_uses_the_wire_literal() {
    let encoded = serde_json::to_string(&OrderState::IN_PROGRESS).unwrap();
    assert_eq!(encoded, "\"in-progress\"");

    let decoded: Code<OrderState> = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(decoded, OrderState::COMPLETED);

    let bad: Result<Code<OrderState>, _> = serde_json::from_str("\"finished\"");
    assert!(bad.is_err());

    let member: OrderState = serde_json::from_str("\"draft\"").unwrap();
    assert_eq!(member, OrderState::Draft);
}

#[test]
fn display_and_from_str_agree() {
    assert_eq!(OrderState::InProgress.to_string(), "in-progress");
    let parsed: OrderState = "in-progress".parse().unwrap();
    assert_eq!(parsed, OrderState::InProgress);
    assert!("IN-PROGRESS".parse::<OrderState>().is_err());
}

#[test]
fn vocabulary_tables_are_consistent() {
    assert_eq!(OrderState::NAME, "OrderState");
    assert_eq!(OrderState::CONCEPTS.len(), OrderState::values().len());
    for (member, concept) in OrderState::values().iter().zip(OrderState::CONCEPTS) {
        assert_eq!(member.code(), concept.code);
        assert_eq!(member.display(), concept.display);
        assert_eq!(member.concept(), concept);
    }
}
