// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors produced while reading an image.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input contained no bytes.
    #[error("image data is empty")]
    Empty,

    /// The string is not a `data:` URL.
    #[error("not a data URL")]
    NotADataUrl,

    /// A `%` escape in a non-base64 data URL was malformed.
    #[error("malformed percent escape in data URL")]
    PercentEncoding,

    /// The base64 payload of a data URL could not be decoded.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An SVG document was not valid UTF-8.
    #[error("SVG document is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document looked like SVG but has no `<svg>` root element.
    #[error("no <svg> root element found")]
    MissingSvgRoot,

    /// The bytes are not a recognized raster format.
    #[error("unrecognized image format")]
    UnknownFormat,

    /// The raster decoder rejected the header.
    #[error("failed to read image header: {0}")]
    Image(#[from] image::ImageError),

    /// Reading from disk failed.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}
