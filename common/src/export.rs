//! CSV text generation for the "export sample" action.
//!
//! Pure functions; the browser side only adds the final Blob download.
//! The first row's key set defines both the column order and the column
//! set for every row; there is no schema reconciliation across rows.

use serde_json::Value;

use crate::model::Row;

/// Renders rows as CSV text. Returns `None` for an empty input, in which
/// case the caller must not produce a file.
pub fn csv_text(rows: &[Row]) -> Option<String> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let line: Vec<String> = headers.iter().map(|h| csv_field(row.get(*h))).collect();
        lines.push(line.join(","));
    }
    Some(lines.join("\n"))
}

/// Standard CSV quoting: string values containing a comma or a double
/// quote are wrapped in double quotes with inner quotes doubled. Other
/// values use their default string form; null and missing cells are empty.
fn csv_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            if s.contains(',') || s.contains('"') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Derives the sample export filename: the original name minus its final
/// extension (falling back to `dataset` when no name is available), plus a
/// `_sample_` marker and the calendar date.
pub fn sample_filename(original: Option<&str>, date_ymd: &str) -> String {
    let base = match original {
        Some(name) => strip_extension(name),
        None => "dataset",
    };
    format!("{base}_sample_{date_ymd}.csv")
}

/// Removes a trailing `.<ext>` where the extension contains neither a dot
/// nor a slash, leaving names like `archive.tar` intact for
/// `archive.tar.gz`.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => {
            let ext = &name[idx + 1..];
            if ext.contains('/') {
                name
            } else {
                &name[..idx]
            }
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<Row> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_input_produces_nothing() {
        assert_eq!(csv_text(&[]), None);
    }

    #[test]
    fn quotes_commas_and_doubles_inner_quotes() {
        let rows = rows(r#"[{"a": 1, "b": "x,y"}, {"a": 2, "b": "say \"hi\""}]"#);
        let csv = csv_text(&rows).unwrap();
        assert_eq!(csv, "a,b\n1,\"x,y\"\n2,\"say \"\"hi\"\"\"");
    }

    #[test]
    fn header_order_comes_from_first_row() {
        let rows = rows(
            r#"[
                {"id": 1, "age": 25, "income": 50000.5, "target": "Yes"},
                {"id": 2, "age": 32, "income": 75000, "target": "No"}
            ]"#,
        );
        let csv = csv_text(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,age,income,target"));
        assert_eq!(lines.next(), Some("1,25,50000.5,Yes"));
        assert_eq!(lines.next(), Some("2,32,75000,No"));
    }

    #[test]
    fn null_and_missing_cells_are_empty() {
        let rows = rows(r#"[{"a": 1, "b": null}, {"a": 2}]"#);
        let csv = csv_text(&rows).unwrap();
        assert_eq!(csv, "a,b\n1,\n2,");
    }

    #[test]
    fn plain_strings_are_not_quoted() {
        let rows = rows(r#"[{"name": "Bachelor", "flag": true}]"#);
        assert_eq!(csv_text(&rows).unwrap(), "name,flag\nBachelor,true");
    }

    #[test]
    fn sample_filename_strips_extension_and_appends_date() {
        assert_eq!(
            sample_filename(Some("data.csv"), "2024-01-01"),
            "data_sample_2024-01-01.csv"
        );
        assert_eq!(
            sample_filename(Some("archive.tar.gz"), "2024-01-01"),
            "archive.tar_sample_2024-01-01.csv"
        );
        assert_eq!(
            sample_filename(Some("noext"), "2024-01-01"),
            "noext_sample_2024-01-01.csv"
        );
        assert_eq!(
            sample_filename(Some("trailing."), "2024-01-01"),
            "trailing._sample_2024-01-01.csv"
        );
    }

    #[test]
    fn sample_filename_defaults_to_dataset() {
        assert_eq!(
            sample_filename(None, "2024-01-01"),
            "dataset_sample_2024-01-01.csv"
        );
    }
}
