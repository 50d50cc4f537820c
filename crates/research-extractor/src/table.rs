//! Pipe-delimited table detection

use crate::types::{Row, Table, TableMetadata};
use tracing::debug;

/// Confidence for a table with more than one data row
pub const MULTI_ROW_CONFIDENCE: f64 = 0.9;

/// Confidence for a table with a single data row
pub const SINGLE_ROW_CONFIDENCE: f64 = 0.7;

const DELIMITER: char = '|';

/// Scan `text` line by line and parse every run of `|`-bearing lines as a table
pub(crate) fn extract_tables(text: &str, source_url: &str, extracted_at: u64) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.contains(DELIMITER) {
            block.push(line);
        } else if !block.is_empty() {
            tables.extend(parse_block(&block, source_url, extracted_at));
            block.clear();
        }
    }
    if !block.is_empty() {
        tables.extend(parse_block(&block, source_url, extracted_at));
    }

    tables
}

/// Non-empty trimmed cells of one line
fn split_cells(line: &str) -> Vec<&str> {
    line.split(DELIMITER)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn parse_block(lines: &[&str], source_url: &str, extracted_at: u64) -> Option<Table> {
    if lines.len() < 2 {
        debug!("Skipping single-line table block");
        return None;
    }

    let headers: Vec<String> = split_cells(lines[0])
        .into_iter()
        .map(str::to_string)
        .collect();

    let rows: Vec<Row> = lines[1..]
        .iter()
        .map(|line| split_cells(line))
        .filter(|cells| !cells.is_empty() && cells.len() >= headers.len())
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .map(|(header, cell)| (header.clone(), cell.to_string()))
                .collect::<Row>()
        })
        .collect();

    if rows.is_empty() {
        debug!("Skipping table block with no valid rows");
        return None;
    }

    let confidence = if rows.len() > 1 {
        MULTI_ROW_CONFIDENCE
    } else {
        SINGLE_ROW_CONFIDENCE
    };

    Some(Table {
        raw_content: lines.join("\n"),
        metadata: TableMetadata {
            row_count: rows.len(),
            headers,
        },
        rows,
        confidence,
        source_url: source_url.to_string(),
        extracted_at,
    })
}
