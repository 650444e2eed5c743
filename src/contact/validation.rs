//! Pure validation rules shared by the bulk submit check and the per-field
//! blur/input handlers, so both paths always agree.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
}

/// One required field as seen at validation time.
pub struct RequiredField<'a> {
    pub label: &'a str,
    pub kind: FieldKind,
    pub value: &'a str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks required fields in the order given: an empty value yields
/// "<label> is required"; a present but malformed email yields one fixed
/// message. Error strings come back in field order.
pub fn validate(fields: &[RequiredField]) -> ValidationResult {
    let mut errors = Vec::new();

    for field in fields {
        if field.value.trim().is_empty() {
            errors.push(format!("{} is required", field.label));
            continue;
        }

        if field.kind == FieldKind::Email && !is_valid_email(field.value) {
            errors.push("Please enter a valid email address".to_string());
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Single-field check used by the live blur/input handlers.
pub fn field_is_valid(kind: FieldKind, value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    kind != FieldKind::Email || is_valid_email(value)
}

/// Accepts `local@domain` where neither part contains whitespace or an
/// extra `@` and the domain has at least one dot with a character on each
/// side. Matches the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$` shape, dots in
/// the surrounding segments included.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required<'a>(label: &'a str, kind: FieldKind, value: &'a str) -> RequiredField<'a> {
        RequiredField { label, kind, value }
    }

    #[test]
    fn accepts_well_formed_addresses() {
        for email in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "odd+tag@host.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn edge_dots_only_disqualify_without_an_interior_dot() {
        // A stray leading or trailing dot is still a valid non-space,
        // non-@ character as long as some dot has text on both sides.
        assert!(is_valid_email("user@example.com."));
        assert!(is_valid_email("user@.example.com"));
        // No interior dot anywhere: the only dots sit at an edge.
        assert!(!is_valid_email("user@com."));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@.x."));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plainaddress",
            "no-domain@",
            "@no-local.com",
            "user@nodot",
            "user@.com",
            "user@com.",
            "two@ats@example.com",
            "spaced user@example.com",
            "user@exa mple.com",
            " user@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn empty_field_and_bad_email_give_two_errors_in_order() {
        let result = validate(&[
            required("Name", FieldKind::Text, "   "),
            required("Email", FieldKind::Email, "not-an-email"),
            required("Message", FieldKind::Text, "hello"),
        ]);

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Name is required".to_string(),
                "Please enter a valid email address".to_string(),
            ]
        );
    }

    #[test]
    fn empty_email_reports_required_not_format() {
        let result = validate(&[required("Email", FieldKind::Email, "")]);
        assert_eq!(result.errors, vec!["Email is required".to_string()]);
    }

    #[test]
    fn fully_valid_form_has_no_errors() {
        let result = validate(&[
            required("Name", FieldKind::Text, "Grace"),
            required("Email", FieldKind::Email, "grace@example.com"),
            required("Message", FieldKind::Text, "Need a security audit."),
        ]);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn live_check_matches_bulk_rules() {
        assert!(!field_is_valid(FieldKind::Text, "  "));
        assert!(field_is_valid(FieldKind::Text, "hi"));
        assert!(!field_is_valid(FieldKind::Email, "nope"));
        assert!(field_is_valid(FieldKind::Email, "yes@example.com"));
    }
}
