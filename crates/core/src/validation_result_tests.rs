use super::*;

#[test]
fn test_validation_result_valid() {
    let result = ValidationResult::valid();

    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.messages().is_empty());
}

#[test]
fn test_validation_result_from_violations() {
    let result = ValidationResult::from_violations(vec![
        Violation::ScopeEmpty,
        Violation::DescriptionFullStop,
    ]);

    assert!(!result.is_valid());
    assert_eq!(
        result.messages(),
        vec![
            "Scope cannot be empty.".to_string(),
            "Description should not end with a period.".to_string(),
        ]
    );
}

#[test]
fn test_validation_result_merge_keeps_order() {
    let mut result = ValidationResult::from_violations(vec![Violation::TypeMissing]);
    result.merge(ValidationResult::valid());
    result.merge(ValidationResult::from_violations(vec![
        Violation::IncorrectFormat,
    ]));

    assert_eq!(
        result.errors,
        vec![Violation::TypeMissing, Violation::IncorrectFormat]
    );
}

#[test]
fn test_violation_catalog_messages() {
    let expected = [
        (Violation::HeaderTooLong(72), "Header length cannot exceed 72 characters."),
        (
            Violation::IncorrectFormat,
            "Commit message does not follow conventional commits format.",
        ),
        (Violation::TypeMissing, "Type is missing."),
        (
            Violation::InvalidType("invalid".to_string()),
            "Invalid commit type 'invalid'.",
        ),
        (Violation::SpaceAfterType, "Type should not have trailing space."),
        (Violation::ScopeEmpty, "Scope cannot be empty."),
        (Violation::ScopeWhitespace, "Scope cannot contain spaces."),
        (Violation::SpaceAfterScope, "Scope should not have trailing space."),
        (Violation::DescriptionMissing, "Description is missing."),
        (
            Violation::DescriptionNoLeadingSpace,
            "Description must have a leading space.",
        ),
        (
            Violation::DescriptionMultipleSpaceStart,
            "Description must not start with multiple spaces.",
        ),
        (
            Violation::DescriptionLineBreak,
            "Description should not contain line breaks.",
        ),
        (
            Violation::DescriptionFullStop,
            "Description should not end with a period.",
        ),
    ];

    for (violation, message) in expected {
        assert_eq!(violation.to_string(), message);
    }
}

#[test]
fn test_header_too_long_uses_configured_limit() {
    assert_eq!(
        Violation::HeaderTooLong(20).to_string(),
        "Header length cannot exceed 20 characters."
    );
}

#[test]
fn test_validation_result_serialization() {
    let result = ValidationResult::from_violations(vec![Violation::InvalidType(
        "feature".to_string(),
    )]);

    let json = serde_json::to_string(&result).expect("Should serialize to JSON");
    assert!(json.contains("InvalidType"));
    assert!(json.contains("feature"));

    let deserialized: ValidationResult =
        serde_json::from_str(&json).expect("Should deserialize from JSON");
    assert_eq!(result, deserialized);
}
