// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::info;

use crate::{ExportError, ExportFormat};

/// Stem of every export file name.
pub const FILE_STEM: &str = "point-data";

/// Default file name for `format`, e.g. `point-data.csv`.
#[must_use]
pub fn default_file_name(format: ExportFormat) -> String {
    format!("{FILE_STEM}.{}", format.extension())
}

/// A serialized export, ready to save or hand to a download link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// Format of `contents`.
    pub format: ExportFormat,
    /// Serialized text.
    pub contents: String,
}

impl ExportFile {
    /// Wrap serialized `contents` with the default file name for `format`.
    #[must_use]
    pub fn new(format: ExportFormat, contents: String) -> Self {
        Self {
            file_name: default_file_name(format),
            format,
            contents,
        }
    }

    /// Base64 `data:` URL carrying the contents.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.format.mime_type(),
            STANDARD.encode(self.contents.as_bytes())
        )
    }

    /// Write the contents into `dir` under [`file_name`](Self::file_name).
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes())?;
        info!("wrote {} bytes to {}", self.contents.len(), path.display());
        Ok(path)
    }
}
