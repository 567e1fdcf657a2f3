//! Request validation
//!
//! Field-level validation of payment and transfer bodies. Runs before any
//! network call; every violated rule is reported, not just the first one.

use crate::utils::error::ValidationError;
use serde_json::{Map, Value};

/// Party id types accepted by the API
pub const ALLOWED_PARTY_ID_TYPES: [&str; 3] = ["MSISDN", "EMAIL", "PARTY_CODE"];

/// Maximum byte length of `payerMessage` / `payeeNote`
pub const MAX_NOTE_LENGTH: usize = 160;

/// Wire name of the counterpart field
///
/// Collections pulls from a `payer`, Disbursements pushes to a `payee`;
/// the remaining rules are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    /// Collections counterpart
    Payer,
    /// Disbursements counterpart
    Payee,
}

impl PartyField {
    /// Field name as it appears in request bodies
    pub fn name(&self) -> &'static str {
        match self {
            PartyField::Payer => "payer",
            PartyField::Payee => "payee",
        }
    }
}

/// Validate a request body against the field rules
///
/// Pure function: no I/O, never panics, and the body is handed back to the
/// pipeline untouched on success. Errors accumulate in rule order, so the
/// output is deterministic for a given input.
pub fn validate(body: &Value, party: PartyField) -> Result<(), Vec<ValidationError>> {
    let map = match body.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => {
            return Err(vec![ValidationError::new(
                "body",
                "cannot be empty",
                body.clone(),
            )])
        }
    };

    let mut errors = Vec::new();

    check_presence(map, party, &mut errors);
    check_amount(map, &mut errors);
    check_currency(map, &mut errors);
    check_external_id(map, &mut errors);
    check_party(map, party, &mut errors);
    check_note(map, "payerMessage", &mut errors);
    check_note(map, "payeeNote", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Required top-level fields: missing or empty-string values are reported here,
/// format rules below only fire for present non-empty values.
fn check_presence(map: &Map<String, Value>, party: PartyField, errors: &mut Vec<ValidationError>) {
    for field in ["amount", "currency", "externalId", party.name()] {
        match map.get(field) {
            None => errors.push(ValidationError::new(field, "is required", Value::Null)),
            Some(Value::String(s)) if s.is_empty() => {
                errors.push(ValidationError::new(field, "cannot be empty", Value::String(String::new())))
            }
            Some(_) => {}
        }
    }
}

fn check_amount(map: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let value = match map.get("amount") {
        Some(v) => v,
        None => return,
    };

    match value {
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => match parse_amount(s) {
            Some(n) if n > 0.0 => {}
            Some(_) => errors.push(ValidationError::new("amount", "must be positive", value.clone())),
            None => errors.push(ValidationError::new(
                "amount",
                "must be a valid number",
                value.clone(),
            )),
        },
        _ => errors.push(ValidationError::new("amount", "must be a string", value.clone())),
    }
}

/// Decimal parse with integer fallback; non-finite values are rejected
fn parse_amount(s: &str) -> Option<f64> {
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => s.parse::<i64>().ok().map(|n| n as f64),
    }
}

fn check_currency(map: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let value = match map.get("currency") {
        Some(v) => v,
        None => return,
    };

    match value {
        Value::String(s) if s.is_empty() => {}
        Value::String(s) if is_currency_code(s) => {}
        _ => errors.push(ValidationError::new(
            "currency",
            "must be a 3-letter ISO code",
            value.clone(),
        )),
    }
}

fn is_currency_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn check_external_id(map: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    if let Some(value) = map.get("externalId") {
        if !value.is_string() {
            errors.push(ValidationError::new(
                "externalId",
                "must be a string",
                value.clone(),
            ));
        }
    }
}

fn check_party(map: &Map<String, Value>, party: PartyField, errors: &mut Vec<ValidationError>) {
    let field = party.name();
    let value = match map.get(field) {
        Some(v) => v,
        None => return,
    };

    let obj = match value {
        Value::Object(obj) => obj,
        // Empty strings were already reported by the presence check
        Value::String(s) if s.is_empty() => return,
        _ => {
            errors.push(ValidationError::new(field, "must be an object", value.clone()));
            return;
        }
    };

    let type_field = format!("{field}.partyIdType");
    let party_id_type = match obj.get("partyIdType") {
        None => {
            errors.push(ValidationError::new(type_field, "is required", Value::Null));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(ValidationError::new(
                type_field,
                "cannot be empty",
                Value::String(String::new()),
            ));
            None
        }
        Some(Value::String(s)) => {
            if ALLOWED_PARTY_ID_TYPES.contains(&s.as_str()) {
                Some(s.as_str())
            } else {
                // Unrecognized schemes are rejected outright, never treated as PARTY_CODE
                errors.push(ValidationError::new(
                    type_field,
                    "must be one of MSISDN, EMAIL, PARTY_CODE",
                    Value::String(s.clone()),
                ));
                None
            }
        }
        Some(other) => {
            errors.push(ValidationError::new(type_field, "must be a string", other.clone()));
            None
        }
    };

    let id_field = format!("{field}.partyId");
    match obj.get("partyId") {
        None => errors.push(ValidationError::new(id_field, "is required", Value::Null)),
        Some(Value::String(s)) if s.is_empty() => errors.push(ValidationError::new(
            id_field,
            "cannot be empty",
            Value::String(String::new()),
        )),
        Some(Value::String(s)) => match party_id_type {
            Some("MSISDN") if !is_msisdn(s) => errors.push(ValidationError::new(
                id_field,
                "must be a valid phone number",
                Value::String(s.clone()),
            )),
            Some("EMAIL") if !is_email(s) => errors.push(ValidationError::new(
                id_field,
                "must be a valid email address",
                Value::String(s.clone()),
            )),
            _ => {}
        },
        Some(other) => errors.push(ValidationError::new(id_field, "must be a string", other.clone())),
    }
}

/// `^\+?[0-9]{10,15}$`
fn is_msisdn(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    (10..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Simple `local@domain.tld` shape
fn is_email(s: &str) -> bool {
    let (local, domain) = match s.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') || s.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn check_note(map: &Map<String, Value>, field: &str, errors: &mut Vec<ValidationError>) {
    let value = match map.get(field) {
        Some(v) => v,
        None => return,
    };

    match value {
        Value::String(s) if s.len() <= MAX_NOTE_LENGTH => {}
        Value::String(s) => errors.push(ValidationError::new(
            field,
            "must be at most 160 characters",
            Value::String(s.clone()),
        )),
        _ => errors.push(ValidationError::new(field, "must be a string", value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payment() -> Value {
        json!({
            "amount": "100",
            "currency": "UGX",
            "externalId": "123",
            "payer": {
                "partyIdType": "MSISDN",
                "partyId": "256784123456"
            }
        })
    }

    fn fields(errors: &[crate::utils::error::ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_payment_passes() {
        assert!(validate(&valid_payment(), PartyField::Payer).is_ok());
    }

    #[test]
    fn test_body_is_unchanged_by_validation() {
        let body = valid_payment();
        let snapshot = body.clone();
        validate(&body, PartyField::Payer).unwrap();
        assert_eq!(body, snapshot);
    }

    #[test]
    fn test_empty_body_single_error() {
        let errors = validate(&json!({}), PartyField::Payer).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "body");
        assert_eq!(errors[0].message, "cannot be empty");
    }

    #[test]
    fn test_non_object_body_single_error() {
        let errors = validate(&json!("not a map"), PartyField::Payer).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn test_all_missing_fields_reported_together() {
        let errors = validate(&json!({"amount": "", "currency": "UGX"}), PartyField::Payer)
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["amount", "externalId", "payer"]);
        assert_eq!(errors[0].message, "cannot be empty");
        assert_eq!(errors[1].message, "is required");
        assert_eq!(errors[2].message, "is required");
    }

    #[test]
    fn test_payee_field_for_disbursements() {
        let body = json!({
            "amount": "100",
            "currency": "EUR",
            "externalId": "123",
            "payee": {
                "partyIdType": "MSISDN",
                "partyId": "256784123456"
            }
        });
        assert!(validate(&body, PartyField::Payee).is_ok());

        // The same body validated as a payment is missing its payer
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(fields(&errors), vec!["payer"]);
    }

    #[test]
    fn test_amount_rules() {
        let mut body = valid_payment();

        body["amount"] = json!("abc");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "amount");
        assert_eq!(errors[0].message, "must be a valid number");

        body["amount"] = json!("0");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].message, "must be positive");

        body["amount"] = json!("-12.5");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].message, "must be positive");

        body["amount"] = json!(100);
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].message, "must be a string");
        assert_eq!(errors[0].value, json!(100));

        body["amount"] = json!("99.99");
        assert!(validate(&body, PartyField::Payer).is_ok());
    }

    #[test]
    fn test_currency_rules() {
        let mut body = valid_payment();

        for bad in ["ugx", "UG", "UGXX", "U1X", "123"] {
            body["currency"] = json!(bad);
            let errors = validate(&body, PartyField::Payer).unwrap_err();
            assert_eq!(errors[0].field, "currency", "currency {bad:?} should fail");
            assert_eq!(errors[0].message, "must be a 3-letter ISO code");
        }

        for good in ["UGX", "EUR", "USD"] {
            body["currency"] = json!(good);
            assert!(validate(&body, PartyField::Payer).is_ok(), "currency {good:?} should pass");
        }
    }

    #[test]
    fn test_external_id_type_rule() {
        let mut body = valid_payment();
        body["externalId"] = json!(42);
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "externalId");
        assert_eq!(errors[0].message, "must be a string");
    }

    #[test]
    fn test_party_must_be_object() {
        let mut body = valid_payment();
        body["payer"] = json!("256784123456");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "payer");
        assert_eq!(errors[0].message, "must be an object");
    }

    #[test]
    fn test_party_id_type_membership() {
        let mut body = valid_payment();

        body["payer"]["partyIdType"] = json!("ALIAS");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "payer.partyIdType");
        assert_eq!(errors[0].message, "must be one of MSISDN, EMAIL, PARTY_CODE");

        body["payer"]["partyIdType"] = json!("");
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].message, "cannot be empty");

        body["payer"] = json!({"partyId": "256784123456"});
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "payer.partyIdType");
        assert_eq!(errors[0].message, "is required");
    }

    #[test]
    fn test_msisdn_format() {
        let mut body = valid_payment();

        for good in ["256784123456", "+256784123456", "0123456789", "123456789012345"] {
            body["payer"]["partyId"] = json!(good);
            assert!(validate(&body, PartyField::Payer).is_ok(), "msisdn {good:?} should pass");
        }

        for bad in ["12345", "+12345", "abcdefghijk", "25678412345678901", "2567841234a6"] {
            body["payer"]["partyId"] = json!(bad);
            let errors = validate(&body, PartyField::Payer).unwrap_err();
            assert_eq!(errors[0].field, "payer.partyId", "msisdn {bad:?} should fail");
            assert_eq!(errors[0].message, "must be a valid phone number");
        }
    }

    #[test]
    fn test_email_format() {
        let mut body = valid_payment();
        body["payer"]["partyIdType"] = json!("EMAIL");

        for good in ["a@b.c", "someone@example.com", "first.last@sub.example.org"] {
            body["payer"]["partyId"] = json!(good);
            assert!(validate(&body, PartyField::Payer).is_ok(), "email {good:?} should pass");
        }

        for bad in ["invalid-email", "@example.com", "a@b", "a@.com", "a b@c.d"] {
            body["payer"]["partyId"] = json!(bad);
            let errors = validate(&body, PartyField::Payer).unwrap_err();
            assert_eq!(errors[0].message, "must be a valid email address", "email {bad:?} should fail");
        }
    }

    #[test]
    fn test_party_code_skips_format_check() {
        let mut body = valid_payment();
        body["payer"] = json!({"partyIdType": "PARTY_CODE", "partyId": "any-code-at-all"});
        assert!(validate(&body, PartyField::Payer).is_ok());
    }

    #[test]
    fn test_note_length_rules() {
        let mut body = valid_payment();

        body["payerMessage"] = json!("x".repeat(160));
        assert!(validate(&body, PartyField::Payer).is_ok());

        body["payerMessage"] = json!("x".repeat(161));
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "payerMessage");
        assert_eq!(errors[0].message, "must be at most 160 characters");

        body["payerMessage"] = json!("thanks");
        body["payeeNote"] = json!(77);
        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(errors[0].field, "payeeNote");
        assert_eq!(errors[0].message, "must be a string");
    }

    #[test]
    fn test_errors_accumulate_across_rules() {
        let body = json!({
            "amount": "-5",
            "currency": "ugx",
            "externalId": 9,
            "payer": {
                "partyIdType": "MSISDN",
                "partyId": "123"
            },
            "payeeNote": "y".repeat(200)
        });

        let errors = validate(&body, PartyField::Payer).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["amount", "currency", "externalId", "payer.partyId", "payeeNote"]
        );
    }
}
