// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster header probing.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::ImportError;

/// Guess the format of `bytes` and read the image dimensions from its header,
/// without decoding pixels.
pub fn probe_raster(bytes: &[u8]) -> Result<(ImageFormat, u32, u32), ImportError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(ImportError::UnknownFormat)?;
    let (width, height) = reader.into_dimensions()?;
    Ok((format, width, height))
}
