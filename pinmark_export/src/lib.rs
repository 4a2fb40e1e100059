// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Export: serialize point annotations to CSV or JSON.
//!
//! Every format writes the same four fields per point: `id`, `name`, `x` and
//! `y`. Coordinates are either absolute image pixels or relative to the image
//! size (`x / width`, `y / height`), which needs a loaded image.
//!
//! ```
//! use pinmark_annotations::{AnnotationStore, FileInfo};
//! use pinmark_export::{CoordinateMode, ExportFormat, ExportOptions, export};
//!
//! let mut store = AnnotationStore::new();
//! store.add(100.0, 50.0);
//!
//! let options = ExportOptions {
//!     format: ExportFormat::Csv,
//!     coordinates: CoordinateMode::Relative,
//! };
//! let file = export(store.list(), FileInfo::new(200, 100), options).unwrap();
//! assert_eq!(file.file_name, "point-data.csv");
//! assert_eq!(file.contents, "id,name,x,y\n0,POINT_0,0.5,0.5\n");
//! ```

mod csv;
mod error;
mod file;
mod record;

pub use csv::{CSV_HEADER, to_csv};
pub use error::ExportError;
pub use file::{ExportFile, FILE_STEM, default_file_name};
pub use record::{ExportRecord, records, to_json};

use log::info;
use pinmark_annotations::{FileInfo, PointAnnotation};
use serde::{Deserialize, Serialize};

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// A JSON array of objects.
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// MIME type of the serialized output.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// Coordinate system of exported positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Fractions of the image width and height.
    #[default]
    Relative,
    /// Image pixels.
    Absolute,
}

/// Format and coordinate choice for one export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output format.
    pub format: ExportFormat,
    /// Coordinate system.
    pub coordinates: CoordinateMode,
}

/// Serialize `points` according to `options`.
///
/// Relative coordinates need `info` to describe a non-empty image.
pub fn export(
    points: &[PointAnnotation],
    info: FileInfo,
    options: ExportOptions,
) -> Result<ExportFile, ExportError> {
    let records = records(points, info, options.coordinates)?;
    let contents = match options.format {
        ExportFormat::Csv => to_csv(&records),
        ExportFormat::Json => to_json(&records)?,
    };
    info!(
        "exported {} points as {:?} ({:?} coordinates)",
        records.len(),
        options.format,
        options.coordinates
    );
    Ok(ExportFile::new(options.format, contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_export_dialog() {
        let options = ExportOptions::default();
        assert_eq!(options.format, ExportFormat::Csv);
        assert_eq!(options.coordinates, CoordinateMode::Relative);
    }

    #[test]
    fn options_deserialize_lowercase() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"format":"json","coordinates":"absolute"}"#).unwrap();
        assert_eq!(options.format, ExportFormat::Json);
        assert_eq!(options.coordinates, CoordinateMode::Absolute);

        let partial: ExportOptions = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(partial.coordinates, CoordinateMode::Relative);
    }

    #[test]
    fn extensions_and_mime_types() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }
}
