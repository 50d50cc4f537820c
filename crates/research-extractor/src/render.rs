//! Markdown rendering of row mappings

use crate::types::Row;

/// Render rows as a Markdown pipe table.
///
/// Columns default to the key order of the first row. Missing cells render
/// empty. An empty row list renders as an empty string.
pub fn render_markdown_table<C: AsRef<str>>(rows: &[Row], columns: Option<&[C]>) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let columns: Vec<&str> = match columns {
        Some(cols) => cols.iter().map(|c| c.as_ref()).collect(),
        None => first.keys().map(String::as_str).collect(),
    };

    let mut out = String::new();
    out.push_str(&format!("| {} |\n", columns.join(" | ")));
    out.push_str(&format!("| {} |\n", vec!["---"; columns.len()].join(" | ")));

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<&str> = columns
                .iter()
                .map(|col| row.get(*col).map(String::as_str).unwrap_or(""))
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect();
    out.push_str(&lines.join("\n"));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(render_markdown_table::<&str>(&[], None), "");
        assert_eq!(render_markdown_table(&[], Some(&["a", "b"][..])), "");
    }

    #[test]
    fn test_default_column_order() {
        let rows = vec![
            row(&[("指标", "销量"), ("数值", "120")]),
            row(&[("指标", "渗透率"), ("数值", "35.2%")]),
        ];
        let table = render_markdown_table::<&str>(&rows, None);
        assert_eq!(
            table,
            "| 指标 | 数值 |\n| --- | --- |\n| 销量 | 120 |\n| 渗透率 | 35.2% |"
        );
    }

    #[test]
    fn test_explicit_columns_and_missing_keys() {
        let rows = vec![row(&[("a", "1"), ("b", "2")]), row(&[("b", "3")])];
        let table = render_markdown_table(&rows, Some(&["b", "a", "c"][..]));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| b | a | c |");
        assert_eq!(lines[1], "| --- | --- | --- |");
        assert_eq!(lines[2], "| 2 | 1 |  |");
        assert_eq!(lines[3], "| 3 |  |  |");
    }
}
