//! SVG normalization ahead of rasterization.
//!
//! On-chain editions declare their artwork at the project's native icon
//! size, so the markup is rewritten before rendering: the root `width` and
//! `height` are forced to the target canvas size, and a `viewBox` is
//! synthesized from the original dimensions when absent so the resize does
//! not distort proportions.

use roxmltree::Document;
use std::ops::Range;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// ViewBox synthesized when the original markup declares no usable
/// dimensions. 72x72 is the native base-canvas size of edition artwork,
/// kept as an explicit policy constant rather than a hidden default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackViewBox {
  pub width: f32,
  pub height: f32,
}

impl Default for FallbackViewBox {
  fn default() -> Self {
    DEFAULT_FALLBACK_VIEW_BOX
  }
}

/// The `0 0 72 72` base-canvas convention.
pub const DEFAULT_FALLBACK_VIEW_BOX: FallbackViewBox = FallbackViewBox {
  width: 72.0,
  height: 72.0,
};

/// Parses an SVG length attribute as CSS pixels.
///
/// Accepts bare numbers and `px` suffixes; percentages and other units
/// carry no usable absolute size here and yield `None`.
pub(crate) fn parse_svg_length_px(value: &str) -> Option<f32> {
  let trimmed = value.trim();
  if trimmed.is_empty() || trimmed.ends_with('%') {
    return None;
  }

  let mut end = 0;
  for (idx, ch) in trimmed.char_indices() {
    if matches!(ch, '0'..='9' | '+' | '-' | '.' | 'e' | 'E') {
      end = idx + ch.len_utf8();
    } else {
      break;
    }
  }

  if end == 0 {
    return None;
  }

  let number = trimmed[..end].parse::<f32>().ok()?;
  let unit = trimmed[end..].trim();
  if !(unit.is_empty() || unit.eq_ignore_ascii_case("px")) {
    return None;
  }

  number.is_finite().then_some(number)
}

/// Rewrites SVG markup for a fixed-size square render.
///
/// - forces the root `width`/`height` to `target_size` (first occurrence
///   only; nested elements are untouched), injecting them when absent;
/// - ensures a root `viewBox`, synthesized from the original declared
///   dimensions, or from `fallback` when those do not parse;
/// - ensures an `xmlns` declaration so the rasterizer accepts markup
///   minted without one.
///
/// An existing `viewBox` is never altered or duplicated. Markup without a
/// recognizable `<svg` root is returned unchanged and left for the
/// rasterizer to reject.
pub fn normalize_svg(markup: &str, target_size: u32, fallback: FallbackViewBox) -> String {
  if root_tag_span(markup).is_none() {
    return markup.to_string();
  }

  let root = RootInfo::inspect(markup);
  let size = target_size.to_string();

  let mut out = markup.to_string();
  set_root_attr(&mut out, "width", &size);
  set_root_attr(&mut out, "height", &size);

  if !root.has_view_box {
    let (w, h) = match (root.width, root.height) {
      (Some(w), Some(h)) => (w, h),
      _ => (fallback.width, fallback.height),
    };
    insert_root_attr(&mut out, &format!("viewBox=\"0 0 {} {}\"", fmt_len(w), fmt_len(h)));
  }

  if !root.has_xmlns {
    insert_root_attr(&mut out, &format!("xmlns=\"{SVG_NAMESPACE}\""));
  }

  out
}

/// Original root-element facts, gathered before any rewriting.
struct RootInfo {
  width: Option<f32>,
  height: Option<f32>,
  has_view_box: bool,
  has_xmlns: bool,
}

impl RootInfo {
  fn inspect(markup: &str) -> Self {
    let tag = root_tag_span(markup)
      .map(|span| &markup[span])
      .unwrap_or("");
    // A prefixed declaration like `xmlns:xlink` is not a default namespace;
    // attr_span only matches the bare attribute.
    let has_xmlns = attr_span(tag, "xmlns").is_some();

    if let Ok(doc) = Document::parse(markup) {
      let root = doc.root_element();
      if root.tag_name().name().eq_ignore_ascii_case("svg") {
        return Self {
          width: root.attribute("width").and_then(parse_svg_length_px),
          height: root.attribute("height").and_then(parse_svg_length_px),
          has_view_box: root.attribute("viewBox").is_some(),
          has_xmlns,
        };
      }
    }

    // Markup the XML parser rejects may still rasterize; fall back to a
    // textual scan of the root tag.
    Self {
      width: attr_value(tag, "width").and_then(|v| parse_svg_length_px(v)),
      height: attr_value(tag, "height").and_then(|v| parse_svg_length_px(v)),
      has_view_box: tag.contains("viewBox"),
      has_xmlns,
    }
  }
}

/// Span of the root `<svg ...` start tag, up to (excluding) its `>`.
fn root_tag_span(markup: &str) -> Option<Range<usize>> {
  for (idx, _) in markup.match_indices("<svg") {
    let boundary = match markup.as_bytes().get(idx + 4) {
      Some(b) => b.is_ascii_whitespace() || *b == b'>' || *b == b'/',
      None => false,
    };
    if !boundary {
      continue;
    }
    let end = markup[idx..].find('>')? + idx;
    return Some(idx..end);
  }
  None
}

/// Locates `name="..."` (or single-quoted) within a start tag. Requires the
/// attribute name to follow whitespace, so `width` never matches inside
/// `stroke-width`.
fn attr_span(tag: &str, name: &str) -> Option<Range<usize>> {
  let bytes = tag.as_bytes();
  let mut search = 0;

  while let Some(pos) = tag[search..].find(name) {
    let start = search + pos;
    search = start + name.len();

    if start == 0 || !bytes[start - 1].is_ascii_whitespace() {
      continue;
    }

    let mut i = start + name.len();
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'=' {
      continue;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    if i >= bytes.len() {
      continue;
    }
    if bytes[i] == b'"' || bytes[i] == b'\'' {
      let quote = bytes[i] as char;
      let close = tag[i + 1..].find(quote)?;
      return Some(start..i + 1 + close + 1);
    }
    // Unquoted value, invalid XML but seen in minted markup; span it so the
    // rewrite replaces it instead of adding a duplicate attribute.
    let mut end = i;
    while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'/' {
      end += 1;
    }
    return Some(start..end);
  }

  None
}

fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
  let span = attr_span(tag, name)?;
  let attr = &tag[span];
  match attr.find(['"', '\'']) {
    Some(open) => Some(&attr[open + 1..attr.len() - 1]),
    None => Some(attr[attr.find('=')? + 1..].trim()),
  }
}

/// Replaces the root attribute in place, or injects it when absent.
fn set_root_attr(markup: &mut String, name: &str, value: &str) {
  let Some(span) = root_tag_span(markup) else {
    return;
  };
  match attr_span(&markup[span.clone()], name) {
    Some(attr) => {
      let start = span.start + attr.start;
      let end = span.start + attr.end;
      markup.replace_range(start..end, &format!("{name}=\"{value}\""));
    }
    None => insert_root_attr(markup, &format!("{name}=\"{value}\"")),
  }
}

fn insert_root_attr(markup: &mut String, attr: &str) {
  if let Some(span) = root_tag_span(markup) {
    markup.insert_str(span.start + "<svg".len(), &format!(" {attr}"));
  }
}

/// Formats a length for a viewBox, dropping the fraction when whole so
/// `50.0` prints as `50`.
fn fmt_len(value: f32) -> String {
  if value.fract() == 0.0 && value.abs() < 1e7 {
    format!("{}", value as i64)
  } else {
    format!("{value}")
  }
}
