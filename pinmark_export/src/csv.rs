// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal RFC 4180 writer for export records.

use core::fmt::Write as _;

use crate::ExportRecord;

/// Header row, matching the field order of every data row.
pub const CSV_HEADER: &str = "id,name,x,y";

/// Serialize records as CSV with a header row. Every line ends in `\n`.
#[must_use]
pub fn to_csv(records: &[ExportRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{}",
            record.id,
            escape_field(&record.name),
            record.x,
            record.y
        );
    }
    out
}

fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ExportRecord {
        ExportRecord {
            id: 1,
            name: name.into(),
            x: 2.0,
            y: 0.25,
        }
    }

    #[test]
    fn header_and_rows_have_the_same_columns() {
        let csv = to_csv(&[record("POINT_1")]);
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert_eq!(header, "id,name,x,y");
        assert_eq!(row, "1,POINT_1,2,0.25");
        assert_eq!(header.split(',').count(), row.split(',').count());
    }

    #[test]
    fn empty_export_is_just_the_header() {
        assert_eq!(to_csv(&[]), "id,name,x,y\n");
    }

    #[test]
    fn special_characters_are_quoted() {
        let csv = to_csv(&[record("a,b"), record("say \"hi\""), record("two\nlines")]);
        assert!(csv.contains("1,\"a,b\",2,0.25\n"));
        assert!(csv.contains("1,\"say \"\"hi\"\"\",2,0.25\n"));
        assert!(csv.contains("1,\"two\nlines\",2,0.25\n"));
    }
}
