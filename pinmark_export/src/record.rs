// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use pinmark_annotations::{FileInfo, PointAnnotation};
use serde::{Deserialize, Serialize};

use crate::{CoordinateMode, ExportError};

/// One exported point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Point id.
    pub id: u64,
    /// Point name.
    pub name: String,
    /// X in the requested coordinate system.
    pub x: f64,
    /// Y in the requested coordinate system.
    pub y: f64,
}

/// Project `points` into export records.
pub fn records(
    points: &[PointAnnotation],
    info: FileInfo,
    mode: CoordinateMode,
) -> Result<Vec<ExportRecord>, ExportError> {
    let (sx, sy) = match mode {
        CoordinateMode::Absolute => (1.0, 1.0),
        CoordinateMode::Relative => {
            if info.is_empty() {
                return Err(ExportError::MissingImageSize {
                    width: info.width,
                    height: info.height,
                });
            }
            (1.0 / f64::from(info.width), 1.0 / f64::from(info.height))
        }
    };
    Ok(points
        .iter()
        .map(|p| ExportRecord {
            id: p.id.get(),
            name: p.name.clone(),
            x: p.x * sx,
            y: p.y * sy,
        })
        .collect())
}

/// Serialize records as a compact JSON array.
pub fn to_json(records: &[ExportRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmark_annotations::AnnotationStore;

    #[test]
    fn relative_divides_by_image_size() {
        let mut store = AnnotationStore::new();
        store.add(50.0, 30.0);
        let out = records(store.list(), FileInfo::new(100, 60), CoordinateMode::Relative).unwrap();
        assert_eq!(out[0].x, 0.5);
        assert_eq!(out[0].y, 0.5);
    }

    #[test]
    fn absolute_keeps_pixels_without_image() {
        let mut store = AnnotationStore::new();
        store.add(50.0, 30.0);
        let out = records(store.list(), FileInfo::default(), CoordinateMode::Absolute).unwrap();
        assert_eq!((out[0].x, out[0].y), (50.0, 30.0));
    }

    #[test]
    fn relative_without_image_is_rejected() {
        let mut store = AnnotationStore::new();
        store.add(1.0, 1.0);
        let err = records(store.list(), FileInfo::new(10, 0), CoordinateMode::Relative);
        assert!(matches!(
            err,
            Err(ExportError::MissingImageSize {
                width: 10,
                height: 0
            })
        ));
    }

    #[test]
    fn json_is_an_array_of_four_field_objects() {
        let records = vec![ExportRecord {
            id: 3,
            name: "a".into(),
            x: 1.5,
            y: 2.0,
        }];
        assert_eq!(
            to_json(&records).unwrap(),
            r#"[{"id":3,"name":"a","x":1.5,"y":2.0}]"#
        );
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
