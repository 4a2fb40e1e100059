// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors produced while exporting annotations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Relative coordinates were requested but no image size is known.
    #[error("relative coordinates need the image size, but it is {width}x{height}")]
    MissingImageSize {
        /// Known image width.
        width: u32,
        /// Known image height.
        height: u32,
    },

    /// JSON serialization failed.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the export file failed.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}
