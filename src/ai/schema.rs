use serde_json::Value;

use crate::domain::{Campus, Category, Classification, Priority};

use super::ClassifyError;

/// Validates the model's raw text against the seven-field contract.
///
/// The service is untrusted: the text is parsed as untyped JSON first,
/// then every field is checked for presence, type, and enum membership
/// before anything is handed downstream. JSON `null` on an optional
/// field is a meaningful "absent" value and survives as `None`.
pub fn parse_classification(content: &str) -> Result<Classification, ClassifyError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|err| ClassifyError::Schema(format!("content is not valid JSON: {err}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| ClassifyError::Schema("content is not a JSON object".into()))?;

    let category_raw = required_str(object, "category")?;
    let category = Category::parse(category_raw).ok_or_else(|| {
        ClassifyError::Schema(format!("category {category_raw:?} is outside the allowed set"))
    })?;

    let priority_raw = required_str(object, "priority")?;
    let priority = Priority::parse(priority_raw).ok_or_else(|| {
        ClassifyError::Schema(format!("priority {priority_raw:?} is outside the allowed set"))
    })?;

    let campus = match optional_str(object, "campus")? {
        Some(raw) => Some(Campus::parse(raw).ok_or_else(|| {
            ClassifyError::Schema(format!("campus {raw:?} is outside the allowed set"))
        })?),
        None => None,
    };

    Ok(Classification {
        category,
        priority,
        student_name: optional_str(object, "student_name")?.map(str::to_owned),
        grade_applying_for: optional_str(object, "grade_applying_for")?.map(str::to_owned),
        campus,
        contact_details: optional_str(object, "contact_details")?.map(str::to_owned),
        summary: required_str(object, "summary")?.to_owned(),
    })
}

fn required_str<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a str, ClassifyError> {
    object
        .get(field)
        .ok_or_else(|| ClassifyError::Schema(format!("missing required field {field:?}")))?
        .as_str()
        .ok_or_else(|| ClassifyError::Schema(format!("field {field:?} must be a string")))
}

fn optional_str<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>, ClassifyError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(ClassifyError::Schema(format!(
            "field {field:?} must be a string or null"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEES_RESPONSE: &str = r#"{
        "category": "Fees",
        "priority": "High",
        "student_name": null,
        "grade_applying_for": null,
        "campus": null,
        "contact_details": null,
        "summary": "Parent reports a bounced tuition payment."
    }"#;

    #[test]
    fn accepts_valid_response_with_explicit_nulls() {
        let classification = parse_classification(FEES_RESPONSE).unwrap();
        assert_eq!(classification.category, Category::Fees);
        assert_eq!(classification.priority, Priority::High);
        assert_eq!(classification.student_name, None);
        assert_eq!(classification.campus, None);
        assert_eq!(
            classification.summary,
            "Parent reports a bounced tuition payment."
        );
    }

    #[test]
    fn null_student_name_is_absent_not_empty() {
        let classification = parse_classification(FEES_RESPONSE).unwrap();
        assert_ne!(classification.student_name, Some(String::new()));
        assert!(classification.student_name.is_none());
    }

    #[test]
    fn rejects_category_outside_domain() {
        let content = FEES_RESPONSE.replace("\"Fees\"", "\"Enrollment\"");
        let err = parse_classification(&content).unwrap_err();
        assert!(matches!(err, ClassifyError::Schema(_)));
        assert!(err.to_string().contains("Enrollment"));
    }

    #[test]
    fn rejects_priority_outside_domain() {
        let content = FEES_RESPONSE.replace("\"High\"", "\"Urgent\"");
        assert!(matches!(
            parse_classification(&content),
            Err(ClassifyError::Schema(_))
        ));
    }

    #[test]
    fn rejects_campus_outside_domain() {
        let content = FEES_RESPONSE.replace("\"campus\": null", "\"campus\": \"Riyadh\"");
        assert!(matches!(
            parse_classification(&content),
            Err(ClassifyError::Schema(_))
        ));
    }

    #[test]
    fn rejects_truncated_json() {
        let truncated = &FEES_RESPONSE[..FEES_RESPONSE.len() - 20];
        assert!(matches!(
            parse_classification(truncated),
            Err(ClassifyError::Schema(_))
        ));
    }

    #[test]
    fn rejects_missing_required_field() {
        let content = r#"{"category": "Fees", "priority": "High"}"#;
        let err = parse_classification(content).unwrap_err();
        assert!(err.to_string().contains("summary"));
    }

    #[test]
    fn rejects_non_object_content() {
        assert!(matches!(
            parse_classification("[1, 2, 3]"),
            Err(ClassifyError::Schema(_))
        ));
    }

    #[test]
    fn fees_scenario_produces_expected_lead() {
        use crate::domain::{EmailInput, Lead};

        let email = EmailInput {
            id: "1".into(),
            subject: "Fee overdue notice".into(),
            body: "My child's tuition payment bounced, please advise.".into(),
        };
        let classification = parse_classification(FEES_RESPONSE).unwrap();
        let lead = Lead::from_classification(&email, classification);

        assert_eq!(lead.id, "1");
        assert_eq!(lead.subject, "Fee overdue notice");
        assert_eq!(lead.category, Category::Fees);
        assert_eq!(lead.priority, Priority::High);
        assert_eq!(lead.summary, "Parent reports a bounced tuition payment.");
        assert!(lead.student_name.is_none());
        assert!(lead.grade_applying_for.is_none());
        assert!(lead.campus.is_none());
        assert!(lead.contact_details.is_none());
    }

    #[test]
    fn validation_is_idempotent() {
        let first = parse_classification(FEES_RESPONSE).unwrap();
        let second = parse_classification(FEES_RESPONSE).unwrap();
        assert_eq!(first, second);
    }
}
