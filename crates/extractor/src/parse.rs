//! Tolerant extraction of a JSON object from raw model text.
//!
//! Models reliably wrap valid JSON in prose or markdown, so parsing runs in
//! two stages: strip code fences and try a direct parse, then fall back to
//! the substring between the first `{` and the last `}`. Failure is a tagged
//! outcome the loop handles locally, never an error that crosses the loop
//! boundary.

use serde_json::Value;
use thiserror::Error;

use soapbox_core::{Checkability, ClaimType, RawClaim};

/// Why a model response could not be read as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("top-level JSON value is not an object")]
    NotAnObject,
}

/// Extract a top-level JSON object from arbitrary model text.
pub fn extract_json_object(raw: &str) -> Result<Value, ParseFailure> {
    let stripped = strip_fences(raw);

    match serde_json::from_str::<Value>(stripped) {
        Ok(Value::Object(map)) => return Ok(Value::Object(map)),
        Ok(_) => return Err(ParseFailure::NotAnObject),
        Err(_) => {}
    }

    // Second stage: first `{` to last `}`.
    let start = stripped.find('{');
    let end = stripped.rfind('}');
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if e > s => (s, e),
        _ => return Err(ParseFailure::NoJsonObject),
    };

    match serde_json::from_str::<Value>(&stripped[start..=end]) {
        Ok(Value::Object(map)) => Ok(Value::Object(map)),
        Ok(_) => Err(ParseFailure::NotAnObject),
        Err(e) => Err(ParseFailure::InvalidJson(e.to_string())),
    }
}

/// Strip a leading ```` ``` ````/```` ```json ```` marker and a trailing
/// ```` ``` ```` marker.
fn strip_fences(raw: &str) -> &str {
    let mut t = raw.trim();

    if let Some(rest) = t.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        t = rest.trim_start();
    }

    if let Some(rest) = t.strip_suffix("```") {
        t = rest.trim_end();
    }

    t
}

/// Read the `claims` field of a parsed response into raw claims.
///
/// Lenient by design: a missing or non-array `claims` field reads as empty;
/// non-object entries are skipped; unknown type/checkability labels fall back
/// rather than dropping the claim.
pub fn claims_from_object(obj: &Value) -> Vec<RawClaim> {
    let Some(entries) = obj.get("claims").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let map = entry.as_object()?;
            let claim_text = map
                .get("claim_text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let claim_type = map
                .get("claim_type")
                .and_then(Value::as_str)
                .map(ClaimType::parse_lenient)
                .unwrap_or(ClaimType::Other);
            let checkability = map
                .get("checkability")
                .and_then(Value::as_str)
                .map(Checkability::parse_lenient)
                .unwrap_or(Checkability::Med);
            let evidence_hints = map
                .get("evidence_hints")
                .and_then(Value::as_array)
                .map(|hints| {
                    hints
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            Some(RawClaim {
                claim_text,
                claim_type,
                checkability,
                evidence_hints,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_parse_of_clean_json() {
        let obj = extract_json_object(r#"{"claims": []}"#).unwrap();
        assert!(obj.get("claims").is_some());
    }

    #[test]
    fn strips_json_tagged_fence() {
        let raw = "```json\n{\"claims\": []}\n```";
        assert!(extract_json_object(raw).is_ok());
    }

    #[test]
    fn strips_untagged_fence() {
        let raw = "```\n{\"claims\": []}\n```";
        assert!(extract_json_object(raw).is_ok());
    }

    #[test]
    fn fence_tag_is_case_insensitive() {
        let raw = "```JSON\n{\"claims\": []}\n```";
        assert!(extract_json_object(raw).is_ok());
    }

    #[test]
    fn brace_scan_recovers_object_wrapped_in_prose() {
        let raw = "Sure! Here is the JSON you asked for:\n{\"claims\": []}\nHope that helps.";
        let obj = extract_json_object(raw).unwrap();
        assert!(obj.get("claims").is_some());
    }

    #[test]
    fn no_braces_is_a_failure() {
        assert_eq!(
            extract_json_object("I could not find any claims."),
            Err(ParseFailure::NoJsonObject)
        );
    }

    #[test]
    fn garbage_between_braces_is_a_failure() {
        let raw = "prefix {not json at all} suffix";
        assert!(matches!(
            extract_json_object(raw),
            Err(ParseFailure::InvalidJson(_))
        ));
    }

    #[test]
    fn bare_array_is_not_an_object() {
        assert_eq!(
            extract_json_object(r#"[{"claim_text": "x"}]"#),
            Err(ParseFailure::NotAnObject)
        );
    }

    #[test]
    fn empty_input_is_a_failure() {
        assert_eq!(extract_json_object(""), Err(ParseFailure::NoJsonObject));
    }

    #[test]
    fn claims_field_read_leniently() {
        let obj = extract_json_object(
            r#"{"claims": [
                {"claim_text": "GDP grew 2.5% in 2023", "claim_type": "number", "checkability": "HIGH", "evidence_hints": ["gdp", 7, "bea.gov"]},
                {"claim_text": "Something happened"},
                "not an object",
                {"claim_type": "DATE"}
            ]}"#,
        )
        .unwrap();

        let claims = claims_from_object(&obj);
        assert_eq!(claims.len(), 3);

        assert_eq!(claims[0].claim_type, ClaimType::Number);
        assert_eq!(claims[0].checkability, Checkability::High);
        // Non-string hints are skipped, not fatal
        assert_eq!(claims[0].evidence_hints, vec!["gdp", "bea.gov"]);

        assert_eq!(claims[1].claim_type, ClaimType::Other);
        assert_eq!(claims[1].checkability, Checkability::Med);

        // Missing claim_text reads as empty; the filter drops it later
        assert!(claims[2].claim_text.is_empty());
        assert_eq!(claims[2].claim_type, ClaimType::Date);
    }

    #[test]
    fn missing_or_non_array_claims_reads_empty() {
        let obj = extract_json_object(r#"{"other": 1}"#).unwrap();
        assert!(claims_from_object(&obj).is_empty());

        let obj = extract_json_object(r#"{"claims": "oops"}"#).unwrap();
        assert!(claims_from_object(&obj).is_empty());
    }
}
