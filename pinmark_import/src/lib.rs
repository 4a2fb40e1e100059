// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Import: turn user-supplied image data into an [`ImageSource`].
//!
//! Accepts raw file bytes, files on disk, or `data:` URLs. Raster formats are
//! recognized from their magic bytes and their size is read from the header
//! with the `image` crate. SVG documents are passed through
//! [`repair_svg_dimensions`] so that they always declare an absolute size.
//!
//! ```
//! use pinmark_import::{ImageKind, ImageSource};
//!
//! let url = "data:image/svg+xml;base64,PHN2ZyB2aWV3Qm94PSIwIDAgNDAwIDMwMCIvPg==";
//! let source = ImageSource::from_data_url(url).unwrap();
//! assert_eq!(source.kind, ImageKind::Svg);
//! assert_eq!((source.width, source.height), (400, 300));
//! ```

mod data_url;
mod error;
mod raster;
mod svg;

pub use data_url::DataUrl;
pub use error::ImportError;
pub use image::ImageFormat;
pub use raster::probe_raster;
pub use svg::{FALLBACK_SIZE, SvgDocument, looks_like_svg, repair_svg_dimensions};

use std::path::Path;

use log::{info, warn};

/// What kind of data an [`ImageSource`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// An encoded raster image.
    Raster(ImageFormat),
    /// An SVG document with a declared size.
    Svg,
    /// No pixel data; only dimensions. Useful for headless sessions.
    Blank,
}

impl ImageKind {
    /// MIME type for the encoded bytes.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Raster(format) => format.to_mime_type(),
            Self::Svg => "image/svg+xml",
            Self::Blank => "application/octet-stream",
        }
    }
}

/// An image ready to be shown on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Encoding of `bytes`.
    pub kind: ImageKind,
    /// Encoded image data. For SVG this is the repaired document.
    pub bytes: Vec<u8>,
}

impl ImageSource {
    /// A dimensions-only image.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            kind: ImageKind::Blank,
            bytes: Vec::new(),
        }
    }

    /// Recognize and measure encoded image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ImportError> {
        if bytes.is_empty() {
            return Err(ImportError::Empty);
        }
        if looks_like_svg(&bytes) {
            return Self::from_svg(core::str::from_utf8(&bytes)?);
        }
        let (format, width, height) = probe_raster(&bytes)?;
        info!("loaded {format:?} image, {width}x{height}");
        Ok(Self {
            width,
            height,
            kind: ImageKind::Raster(format),
            bytes,
        })
    }

    /// Measure an SVG document, repairing its size attributes if needed.
    pub fn from_svg(text: &str) -> Result<Self, ImportError> {
        let doc = repair_svg_dimensions(text)?;
        if doc.repaired {
            warn!(
                "SVG has no usable width/height, using {}x{}",
                doc.width, doc.height
            );
        }
        info!("loaded SVG image, {}x{}", doc.width, doc.height);
        Ok(Self {
            width: doc.width,
            height: doc.height,
            kind: ImageKind::Svg,
            bytes: doc.text.into_bytes(),
        })
    }

    /// Decode a `data:` URL, as produced by a browser file reader.
    pub fn from_data_url(url: &str) -> Result<Self, ImportError> {
        let url = DataUrl::parse(url)?;
        if url.is_svg() {
            return Self::from_svg(core::str::from_utf8(&url.data)?);
        }
        Self::from_bytes(url.data)
    }

    /// Read and measure an image file.
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Re-encode as a base64 `data:` URL.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        DataUrl::encode(self.kind.mime_type(), &self.bytes)
    }
}
