// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `data:` URLs (RFC 2397).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::ImportError;

/// A decoded `data:` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    /// Media type without parameters, lowercased. Defaults to `text/plain`.
    pub mime_type: String,
    /// Decoded payload.
    pub data: Vec<u8>,
}

impl DataUrl {
    /// Parse and decode `url`.
    pub fn parse(url: &str) -> Result<Self, ImportError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or(ImportError::NotADataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(ImportError::NotADataUrl)?;

        let mut params = header.split(';');
        let mime_type = params
            .next()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("text/plain")
            .to_ascii_lowercase();
        let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        let data = if is_base64 {
            let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            STANDARD.decode(compact)?
        } else {
            percent_decode(payload)?
        };
        Ok(Self { mime_type, data })
    }

    /// Encode `data` as a base64 `data:` URL.
    #[must_use]
    pub fn encode(mime_type: &str, data: &[u8]) -> String {
        format!("data:{mime_type};base64,{}", STANDARD.encode(data))
    }

    /// Returns `true` if the media type is SVG.
    #[must_use]
    pub fn is_svg(&self) -> bool {
        self.mime_type.starts_with("image/svg")
    }
}

fn percent_decode(input: &str) -> Result<Vec<u8>, ImportError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3).ok_or(ImportError::PercentEncoding)?;
            let hex = core::str::from_utf8(hex).map_err(|_| ImportError::PercentEncoding)?;
            out.push(u8::from_str_radix(hex, 16).map_err(|_| ImportError::PercentEncoding)?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}
