//! Tabular (CSV/TSV) statement input.
//!
//! A file is treated as tabular when its first line contains a delimiter
//! and the word "statement". Column names are matched case-insensitively;
//! rows without statement text are skipped, and missing IDs are synthesized.

use soapbox_core::Statement;
use tracing::warn;

const ID_COLUMNS: &[&str] = &["statement_id", "id"];
const POLITICIAN_COLUMNS: &[&str] = &["politician", "party", "speaker"];
const TOPIC_COLUMNS: &[&str] = &["topic"];
const STATEMENT_COLUMNS: &[&str] = &["statement", "text"];

pub(crate) fn detect(content: &str) -> Option<Vec<Statement>> {
    let first_line = content.lines().next()?;
    let has_delimiter = first_line.contains(',') || first_line.contains('\t');
    if !has_delimiter || !first_line.to_lowercase().contains("statement") {
        return None;
    }

    let delimiter = if first_line.contains('\t') { b'\t' } else { b',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .ok()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let statement_col = find_column(&headers, STATEMENT_COLUMNS)?;
    let id_col = find_column(&headers, ID_COLUMNS);
    let politician_col = find_column(&headers, POLITICIAN_COLUMNS);
    let topic_col = find_column(&headers, TOPIC_COLUMNS);

    let mut out = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable row");
                continue;
            }
        };

        let text = record.get(statement_col).unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let id = cell(&record, id_col);
        let id = if id.is_empty() {
            format!("S{}", out.len() + 1)
        } else {
            id
        };

        out.push(
            Statement::new(id, text)
                .with_politician(cell(&record, politician_col))
                .with_topic(cell(&record, topic_col)),
        );
    }

    // A header with no surviving rows is not a usable table; let the next
    // detector have a go.
    if out.is_empty() { None } else { Some(out) }
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

fn cell(record: &csv::StringRecord, col: Option<usize>) -> String {
    col.and_then(|i| record.get(i))
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_with_all_columns() {
        let content = "statement_id,politician,topic,statement\n\
                       D-S1,dem,economy,Unemployment fell to 3.4% in 2023.\n\
                       R-S2,rep,taxes,We cut taxes in 2017.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].id, "D-S1");
        assert_eq!(statements[0].politician, "dem");
        assert_eq!(statements[0].topic, "economy");
        assert_eq!(statements[1].text, "We cut taxes in 2017.");
    }

    #[test]
    fn tsv_detected_by_tab_in_header() {
        let content = "id\tstatement\nS1\tThe bill passed, with votes to spare, in 2010.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements.len(), 1);
        // Commas inside the field survive because the delimiter is tab
        assert!(statements[0].text.contains("passed, with votes"));
    }

    #[test]
    fn alternate_column_names() {
        let content = "id,speaker,text\nS9,alice,Inflation was 9% in June 2022.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements[0].id, "S9");
        assert_eq!(statements[0].politician, "alice");
        assert_eq!(statements[0].text, "Inflation was 9% in June 2022.");
    }

    #[test]
    fn missing_ids_are_synthesized() {
        let content = "statement_id,statement\n\
                       ,First claim text here.\n\
                       X7,Second claim text here.\n\
                       ,Third claim text here.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements[0].id, "S1");
        assert_eq!(statements[1].id, "X7");
        assert_eq!(statements[2].id, "S3");
    }

    #[test]
    fn rows_without_statement_text_are_skipped() {
        let content = "statement_id,statement\nS1,\nS2,Real text.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].id, "S2");
    }

    #[test]
    fn header_word_required() {
        assert!(detect("id,text\nS1,hello\n").is_none());
    }

    #[test]
    fn delimiter_required() {
        assert!(detect("statement\njust prose here\n").is_none());
    }

    #[test]
    fn no_statement_column_is_no_match() {
        assert!(detect("notes,statement_maker\nfoo,bar\n").is_none());
    }

    #[test]
    fn header_only_is_no_match() {
        assert!(detect("statement_id,statement\n").is_none());
    }

    #[test]
    fn header_columns_match_case_insensitively() {
        let content = "Statement_ID,Statement\nS1,Some factual text.\n";
        let statements = detect(content).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].id, "S1");
    }
}
