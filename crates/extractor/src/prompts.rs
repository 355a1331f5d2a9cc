//! Prompt rendering for the extraction loop.
//!
//! Two templates: the full extraction instructions for the first attempt,
//! and a follow-up that lists what was already accepted and asks for only
//! the missing count. Parse failures append [`JSON_ONLY_REMINDER`] to
//! whichever prompt produced them.

use soapbox_core::AcceptedClaim;

/// Appended to the carried prompt after a parse failure.
pub const JSON_ONLY_REMINDER: &str = "\nREMINDER: Output JSON only. No markdown. No commentary.";

const JSON_SCHEMA_BLOCK: &str = r#"JSON schema:
{
  "claims": [
    {
      "claim_text": "...",
      "claim_type": "DATE|NUMBER|LAW|EVENT|ORG|OTHER",
      "checkability": "HIGH|MED|LOW",
      "evidence_hints": ["keyword1","keyword2"]
    }
  ]
}"#;

/// Render the first-attempt extraction prompt.
pub fn extraction_prompt(statement: &str, target: usize, max_words: usize) -> String {
    format!(
        "You are an information extraction system.\n\
         \n\
         Task:\n\
         Extract EXACTLY {target} factual, checkable claims from the text below.\n\
         \n\
         Rules:\n\
         - ONLY extract claims explicitly stated in the text. Do NOT add background knowledge.\n\
         - Each claim must be atomic (one verifiable fact per claim). Split compound claims.\n\
         - Each claim MUST be <= {max_words} words. If longer, split into multiple shorter atomic claims.\n\
         - Prefer specific, verifiable claims with dates, numbers, named institutions, laws, or concrete events.\n\
         - Ignore opinions, predictions, moral judgments, and vague claims.\n\
         \n\
         Output MUST be valid JSON only. No extra text.\n\
         \n\
         {JSON_SCHEMA_BLOCK}\n\
         \n\
         Text:\n\
         <<<\n\
         {statement}\n\
         >>>\n"
    )
}

/// Render the follow-up prompt for a still-short accepted list.
pub fn followup_prompt(
    statement: &str,
    accepted: &[AcceptedClaim],
    missing: usize,
    max_words: usize,
) -> String {
    let already = if accepted.is_empty() {
        "(none)".to_string()
    } else {
        accepted
            .iter()
            .map(|c| format!("- {}", c.claim_text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are an information extraction system.\n\
         \n\
         We already extracted these claims:\n\
         {already}\n\
         \n\
         Now extract {missing} ADDITIONAL claims from the same text.\n\
         \n\
         Rules:\n\
         - ONLY claims explicitly stated in the text.\n\
         - Atomic: one verifiable fact per claim.\n\
         - Each claim <= {max_words} words.\n\
         - Do NOT repeat claims already listed above.\n\
         - Output JSON only.\n\
         \n\
         {JSON_SCHEMA_BLOCK}\n\
         \n\
         Text:\n\
         <<<\n\
         {statement}\n\
         >>>\n"
    )
}
