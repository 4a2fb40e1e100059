// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG intrinsic-size repair.
//!
//! A raster surface can only draw an SVG document that declares an absolute
//! `width` and `height` on its root element. Many exported SVGs only carry a
//! `viewBox`, or declare `100%`. For those, both attributes are replaced with
//! the integer parts of the `viewBox` width and height, or with 800×600 when
//! there is no usable `viewBox` either.
//!
//! Only the root start tag is touched; the rest of the document is copied
//! through byte for byte.

use core::ops::Range;

use log::debug;

use crate::ImportError;

/// Size used when neither the size attributes nor the `viewBox` are usable.
pub const FALLBACK_SIZE: (u32, u32) = (800, 600);

/// An SVG document with a known intrinsic size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    /// Document text, rewritten if `repaired` is set.
    pub text: String,
    /// Intrinsic width in CSS pixels.
    pub width: u32,
    /// Intrinsic height in CSS pixels.
    pub height: u32,
    /// Whether `width`/`height` had to be injected.
    pub repaired: bool,
}

/// Returns `true` if `bytes` look like an SVG document.
#[must_use]
pub fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head);
    let trimmed = head.trim_start_matches('\u{feff}').trim_start();
    (trimmed.starts_with("<?xml") || trimmed.starts_with("<svg") || trimmed.starts_with("<!"))
        && head.contains("<svg")
}

/// Make sure the root element of `svg` declares an absolute size.
pub fn repair_svg_dimensions(svg: &str) -> Result<SvgDocument, ImportError> {
    let tag = find_root_tag(svg).ok_or(ImportError::MissingSvgRoot)?;
    let attrs = parse_attributes(&svg[tag.attrs.clone()], tag.attrs.start);
    let find = |name: &str| attrs.iter().find(|a| a.name == name);

    let width = find("width").and_then(|a| parse_length(&a.value));
    let height = find("height").and_then(|a| parse_length(&a.value));
    if let (Some(width), Some(height)) = (width, height) {
        return Ok(SvgDocument {
            text: svg.to_owned(),
            width: to_pixels(width),
            height: to_pixels(height),
            repaired: false,
        });
    }

    let (width, height) = find("viewBox")
        .and_then(|a| view_box_size(&a.value))
        .unwrap_or(FALLBACK_SIZE);
    debug!("injecting SVG size {width}x{height}");

    let mut text = String::with_capacity(svg.len() + 32);
    text.push_str(&svg[..tag.attrs.start]);
    text.push_str(&format!(" width=\"{width}\" height=\"{height}\""));
    let mut cursor = tag.attrs.start;
    for attr in attrs
        .iter()
        .filter(|a| a.name == "width" || a.name == "height")
    {
        text.push_str(&svg[cursor..attr.span.start]);
        cursor = attr.span.end;
    }
    text.push_str(&svg[cursor..]);

    Ok(SvgDocument {
        text,
        width,
        height,
        repaired: true,
    })
}

struct RootTag {
    /// Byte range of the attribute list, from just after `<svg` up to the
    /// closing `>` or `/>`.
    attrs: Range<usize>,
}

fn find_root_tag(doc: &str) -> Option<RootTag> {
    let bytes = doc.as_bytes();
    let mut i = 0;
    while let Some(offset) = doc[i..].find('<') {
        i += offset;
        let rest = &doc[i..];
        if rest.starts_with("<!--") {
            i += rest.find("-->")? + 3;
        } else if rest.starts_with("<?") {
            i += rest.find("?>")? + 2;
        } else if rest.starts_with("<!") {
            i += rest.find('>')? + 1;
        } else if rest.starts_with("<svg")
            && matches!(
                bytes.get(i + 4),
                Some(b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/')
            )
        {
            let start = i + 4;
            let end = start + tag_end(&doc[start..])?;
            return Some(RootTag { attrs: start..end });
        } else {
            return None;
        }
    }
    None
}

/// Offset of the `>` (or `/>`) closing the start tag, skipping quoted values.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => {
                return Some(if s[..i].ends_with('/') { i - 1 } else { i });
            }
            (None, _) => {}
        }
    }
    None
}

struct Attribute {
    name: String,
    value: String,
    /// Byte span in the document, including leading whitespace.
    span: Range<usize>,
}

fn parse_attributes(s: &str, base: usize) -> Vec<Attribute> {
    let bytes = s.as_bytes();
    let mut attrs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let span_start = i;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'/')
        {
            i += 1;
        }
        if i == name_start {
            i += 1;
            continue;
        }
        let name = s[name_start..i].to_owned();

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        let mut value = String::new();
        if bytes.get(j) == Some(&b'=') {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            match bytes.get(j) {
                Some(&q @ (b'"' | b'\'')) => {
                    let value_start = j + 1;
                    let value_end = s[value_start..]
                        .find(char::from(q))
                        .map_or(bytes.len(), |o| value_start + o);
                    value = s[value_start..value_end].to_owned();
                    j = (value_end + 1).min(bytes.len());
                }
                _ => {
                    let value_start = j;
                    while j < bytes.len() && !bytes[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    value = s[value_start..j].to_owned();
                }
            }
            i = j;
        }
        attrs.push(Attribute {
            name,
            value,
            span: base + span_start..base + i,
        });
    }
    attrs
}

/// Parse an absolute CSS length into CSS pixels. Percentages, font-relative
/// units and non-positive values are not usable.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f64 = number.parse().ok()?;
    let factor = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "px" => 1.0,
        "pt" => 4.0 / 3.0,
        "pc" => 16.0,
        "in" => 96.0,
        "cm" => 96.0 / 2.54,
        "mm" => 96.0 / 25.4,
        _ => return None,
    };
    let px = number * factor;
    (px.is_finite() && px > 0.0).then_some(px)
}

/// Integer parts of the `viewBox` width and height.
fn view_box_size(value: &str) -> Option<(u32, u32)> {
    let mut parts = value
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let _min_x: f64 = parts.next()?.parse().ok()?;
    let _min_y: f64 = parts.next()?.parse().ok()?;
    let width: f64 = parts.next()?.parse().ok()?;
    let height: f64 = parts.next()?.parse().ok()?;
    let (width, height) = (integer_part(width)?, integer_part(height)?);
    (width > 0 && height > 0).then_some((width, height))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is checked to be in the u32 range"
)]
fn integer_part(v: f64) -> Option<u32> {
    (v.is_finite() && v >= 0.0 && v < f64::from(u32::MAX)).then(|| v.trunc() as u32)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the u32 range first"
)]
fn to_pixels(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_size_is_kept() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300px"/>"#;
        let doc = repair_svg_dimensions(svg).unwrap();
        assert!(!doc.repaired);
        assert_eq!((doc.width, doc.height), (400, 300));
        assert_eq!(doc.text, svg);
    }

    #[test]
    fn missing_size_comes_from_view_box_integer_parts() {
        let svg = r#"<svg viewBox="0 0 640.75 480.2"><rect/></svg>"#;
        let doc = repair_svg_dimensions(svg).unwrap();
        assert!(doc.repaired);
        assert_eq!((doc.width, doc.height), (640, 480));
        assert_eq!(
            doc.text,
            r#"<svg width="640" height="480" viewBox="0 0 640.75 480.2"><rect/></svg>"#
        );
    }

    #[test]
    fn percentage_size_is_replaced() {
        let svg = r#"<svg width="100%" height='100%' viewBox="10,10,200,100"></svg>"#;
        let doc = repair_svg_dimensions(svg).unwrap();
        assert_eq!((doc.width, doc.height), (200, 100));
        assert_eq!(
            doc.text,
            r#"<svg width="200" height="100" viewBox="10,10,200,100"></svg>"#
        );
    }

    #[test]
    fn one_usable_dimension_is_not_enough() {
        let svg = r#"<svg width="50" viewBox="0 0 20 10"/>"#;
        let doc = repair_svg_dimensions(svg).unwrap();
        assert_eq!((doc.width, doc.height), (20, 10));
        assert_eq!(doc.text, r#"<svg width="20" height="10" viewBox="0 0 20 10"/>"#);
    }

    #[test]
    fn no_view_box_falls_back() {
        let doc = repair_svg_dimensions("<svg></svg>").unwrap();
        assert_eq!((doc.width, doc.height), FALLBACK_SIZE);
        assert_eq!(doc.text, r#"<svg width="800" height="600"></svg>"#);

        let doc = repair_svg_dimensions(r#"<svg viewBox="garbage"/>"#).unwrap();
        assert_eq!((doc.width, doc.height), FALLBACK_SIZE);
    }

    #[test]
    fn prolog_and_comments_are_skipped() {
        let svg = "<?xml version=\"1.0\"?>\n<!DOCTYPE svg>\n<!-- <svg width=\"1\"> -->\n<svg viewBox=\"0 0 30 40\"/>";
        let doc = repair_svg_dimensions(svg).unwrap();
        assert_eq!((doc.width, doc.height), (30, 40));
        assert!(doc.text.starts_with("<?xml version=\"1.0\"?>\n<!DOCTYPE svg>\n<!-- <svg width=\"1\"> -->\n"));
    }

    #[test]
    fn physical_units_convert_to_pixels() {
        let doc = repair_svg_dimensions(r#"<svg width="1in" height="72pt"/>"#).unwrap();
        assert_eq!((doc.width, doc.height), (96, 96));
    }

    #[test]
    fn non_svg_root_is_rejected() {
        assert!(matches!(
            repair_svg_dimensions("<html><svg/></html>"),
            Err(ImportError::MissingSvgRoot)
        ));
        assert!(matches!(
            repair_svg_dimensions("plain text"),
            Err(ImportError::MissingSvgRoot)
        ));
    }

    #[test]
    fn sniffing() {
        assert!(looks_like_svg(b"<?xml version='1.0'?><svg/>"));
        assert!(looks_like_svg(b"  <svg xmlns='x'/>"));
        assert!(!looks_like_svg(b"\x89PNG\r\n\x1a\n"));
    }
}
