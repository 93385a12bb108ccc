use super::*;

fn fields(message: &str) -> CommitFields<'_> {
    CommitFields::extract(message).expect("message should have a colon")
}

#[test]
fn test_commit_type_valid() {
    for commit_type in COMMIT_TYPES {
        let message = format!("{}: add something", commit_type);
        assert_eq!(
            FieldCheck::CommitType.check(&fields(&message)),
            None,
            "type '{}' should be valid",
            commit_type
        );
    }
}

#[test]
fn test_commit_type_missing() {
    assert_eq!(
        FieldCheck::CommitType.check(&fields(": add new feature")),
        Some(Violation::TypeMissing)
    );
    assert_eq!(
        FieldCheck::CommitType.check(&fields("(invalid): add new feature")),
        Some(Violation::TypeMissing)
    );
}

#[test]
fn test_commit_type_invalid_reports_trimmed_token() {
    assert_eq!(
        FieldCheck::CommitType.check(&fields("invalid (test): add new feature")),
        Some(Violation::InvalidType("invalid".to_string()))
    );
    assert_eq!(
        FieldCheck::CommitType.check(&fields("Feat: add new feature")),
        Some(Violation::InvalidType("Feat".to_string()))
    );
}

#[test]
fn test_commit_type_no_space_after() {
    assert_eq!(
        FieldCheck::CommitTypeNoSpaceAfter.check(&fields("feat (test): add")),
        Some(Violation::SpaceAfterType)
    );
    assert_eq!(
        FieldCheck::CommitTypeNoSpaceAfter.check(&fields("feat : add")),
        Some(Violation::SpaceAfterType)
    );
    assert_eq!(
        FieldCheck::CommitTypeNoSpaceAfter.check(&fields("feat(test): add")),
        None
    );
    assert_eq!(
        FieldCheck::CommitTypeNoSpaceAfter.check(&fields(": add")),
        None
    );
}

#[test]
fn test_scope_checks() {
    assert_eq!(FieldCheck::Scope.check(&fields("feat: add")), None);
    assert_eq!(FieldCheck::Scope.check(&fields("feat(api): add")), None);
    assert_eq!(
        FieldCheck::Scope.check(&fields("feat(): add")),
        Some(Violation::ScopeEmpty)
    );
    assert_eq!(
        FieldCheck::Scope.check(&fields("feat( ): add")),
        Some(Violation::ScopeWhitespace)
    );
    assert_eq!(
        FieldCheck::Scope.check(&fields("feat(hello world): add")),
        Some(Violation::ScopeWhitespace)
    );
    assert_eq!(
        FieldCheck::Scope.check(&fields("feat(hello\tworld): add")),
        Some(Violation::ScopeWhitespace)
    );
}

#[test]
fn test_scope_no_space_after() {
    assert_eq!(
        FieldCheck::ScopeNoSpaceAfter.check(&fields("feat(test) : add")),
        Some(Violation::SpaceAfterScope)
    );
    assert_eq!(
        FieldCheck::ScopeNoSpaceAfter.check(&fields("feat(test): add")),
        None
    );
    assert_eq!(
        FieldCheck::ScopeNoSpaceAfter.check(&fields("feat: add")),
        None
    );
}

#[test]
fn test_description_missing_takes_precedence_over_leading_space() {
    assert_eq!(
        FieldCheck::Description.check(&fields("feat(test):")),
        Some(Violation::DescriptionMissing)
    );
    assert_eq!(
        FieldCheck::Description.check(&fields("feat(test): ")),
        Some(Violation::DescriptionMissing)
    );
}

#[test]
fn test_description_leading_space() {
    assert_eq!(
        FieldCheck::Description.check(&fields("feat:add new feature")),
        Some(Violation::DescriptionNoLeadingSpace)
    );
    assert_eq!(
        FieldCheck::Description.check(&fields("feat: add new feature")),
        None
    );
}

#[test]
fn test_description_multiple_whitespace() {
    assert_eq!(
        FieldCheck::DescriptionNoMultipleWhitespace.check(&fields("feat:  add new feature")),
        Some(Violation::DescriptionMultipleSpaceStart)
    );
    assert_eq!(
        FieldCheck::DescriptionNoMultipleWhitespace.check(&fields("feat: add new feature")),
        None
    );
}

#[test]
fn test_description_line_break() {
    assert_eq!(
        FieldCheck::DescriptionNoLineBreak.check(&fields("feat: add new feature\nhello baby")),
        Some(Violation::DescriptionLineBreak)
    );
    assert_eq!(
        FieldCheck::DescriptionNoLineBreak.check(&fields("feat: add new feature\n")),
        None
    );
    assert_eq!(
        FieldCheck::DescriptionNoLineBreak.check(&fields("feat: add new feature\n\nbody")),
        None
    );
}

#[test]
fn test_description_line_break_with_crlf() {
    assert_eq!(
        FieldCheck::DescriptionNoLineBreak.check(&fields("feat: add\r\nbody")),
        Some(Violation::DescriptionLineBreak)
    );
    assert_eq!(
        FieldCheck::DescriptionNoLineBreak.check(&fields("feat: add\r\n\r\nbody")),
        None
    );
}

#[test]
fn test_description_full_stop() {
    assert_eq!(
        FieldCheck::DescriptionNoFullStop.check(&fields("feat(test): add new feature.")),
        Some(Violation::DescriptionFullStop)
    );
    assert_eq!(
        FieldCheck::DescriptionNoFullStop.check(&fields("feat(test): add new feature. ")),
        Some(Violation::DescriptionFullStop)
    );
    assert_eq!(
        FieldCheck::DescriptionNoFullStop.check(&fields("feat(test): bump to v1.2.3 now")),
        None
    );
}

#[test]
fn test_check_fields_runs_in_fixed_order() {
    let violations = check_fields(&fields("invalid (hello world) :add it."));

    assert_eq!(
        violations,
        vec![
            Violation::InvalidType("invalid".to_string()),
            Violation::SpaceAfterType,
            Violation::ScopeWhitespace,
            Violation::SpaceAfterScope,
            Violation::DescriptionNoLeadingSpace,
            Violation::DescriptionFullStop,
        ]
    );
}

#[test]
fn test_check_fields_valid_message() {
    assert!(check_fields(&fields("feat(api)!: add endpoint\n\nbody")).is_empty());
}
