//! Block-delimited statement input.
//!
//! Blocks open with an ID line like `D-S1` or `R-S12 | rep | taxes`; the
//! statement text is everything until the next ID line. The optional trailer
//! after the ID is pipe- or tab-delimited and heuristically split into a
//! party label and a topic hint.

use regex_lite::Regex;
use soapbox_core::Statement;

const HEADER_PATTERN: &str = r"(?i)^\s*([DR]-S\d+)\s*(?:[\t|]\s*(.*))?$";

/// Party tokens recognized in an ID-line trailer.
const PARTY_TOKENS: &[&str] = &["dem", "democrat", "republican", "rep", "d", "r"];

pub(crate) fn detect(content: &str) -> Option<Vec<Statement>> {
    let header = Regex::new(HEADER_PATTERN).ok()?;

    let mut out: Vec<Statement> = Vec::new();
    let mut open: Option<BlockHeader> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut saw_header = false;

    for line in content.lines() {
        if let Some(caps) = header.captures(line) {
            saw_header = true;
            flush(&mut out, open.take(), &body);
            body.clear();

            let id = caps[1].to_uppercase();
            let (politician, topic) = caps
                .get(2)
                .map(|m| split_trailer(m.as_str()))
                .unwrap_or_default();
            open = Some(BlockHeader {
                id,
                politician,
                topic,
            });
        } else if open.is_some() {
            body.push(line);
        }
        // Lines before the first ID line are discarded.
    }
    flush(&mut out, open.take(), &body);

    if !saw_header || out.is_empty() {
        None
    } else {
        Some(out)
    }
}

struct BlockHeader {
    id: String,
    politician: String,
    topic: String,
}

fn flush(out: &mut Vec<Statement>, open: Option<BlockHeader>, body: &[&str]) {
    let Some(header) = open else { return };

    let text = body
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return;
    }

    out.push(
        Statement::new(header.id, text)
            .with_politician(header.politician)
            .with_topic(header.topic),
    );
}

/// Split an ID-line trailer into `(politician, topic)`.
///
/// A recognized party token at either end claims the politician slot;
/// otherwise a lone segment is a topic and a pair reads as topic-then-name.
fn split_trailer(trailer: &str) -> (String, String) {
    let parts: Vec<&str> = trailer
        .split(['|', '\t'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.len() {
        0 => (String::new(), String::new()),
        1 => {
            if is_party_token(parts[0]) {
                (parts[0].to_string(), String::new())
            } else {
                (String::new(), parts[0].to_string())
            }
        }
        n => {
            if is_party_token(parts[0]) {
                (parts[0].to_string(), parts[1..].join(" "))
            } else if is_party_token(parts[n - 1]) {
                (parts[n - 1].to_string(), parts[..n - 1].join(" "))
            } else {
                (parts[1].to_string(), parts[0].to_string())
            }
        }
    }
}

fn is_party_token(part: &str) -> bool {
    PARTY_TOKENS.contains(&part.to_lowercase().as_str())
}
