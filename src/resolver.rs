//! Token-image resolver
//!
//! A single linear pipeline with early-exit failure branches: token URI →
//! JSON metadata → embedded SVG data URI → normalized SVG → fixed-size PNG.
//! Each invocation is a pure function of its input string; there is no
//! shared state, no internal retry, and identical inputs produce
//! byte-identical output.

use crate::data_uri::{decode_base64_payload, SVG_IMAGE_PREFIX, TOKEN_URI_PREFIX};
use crate::error::{Error, RenderError, ResolveError, Result};
use crate::image_output::encode_png;
use crate::metadata::TokenMetadata;
use crate::raster::rasterize_svg;
use crate::svg::{normalize_svg, FallbackViewBox};

/// Content type of the rasterized output.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Default square canvas size for social-card renders.
pub const DEFAULT_TARGET_SIZE: u32 = 1200;

/// Configuration for [`TokenImageResolver`].
///
/// Passed in explicitly rather than read from process-wide state, so the
/// resolver and its callers stay independently testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
  /// Square output size in pixels used when the caller does not pass one.
  pub target_size: u32,
  /// ViewBox synthesized for markup with no usable declared dimensions.
  pub fallback_view_box: FallbackViewBox,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      target_size: DEFAULT_TARGET_SIZE,
      fallback_view_box: FallbackViewBox::default(),
    }
  }
}

impl ResolverConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_target_size(mut self, target_size: u32) -> Self {
    self.target_size = target_size;
    self
  }

  pub fn with_fallback_view_box(mut self, fallback: FallbackViewBox) -> Self {
    self.fallback_view_box = fallback;
    self
  }
}

/// Rasterized output: encoded bitmap bytes plus a content-type label.
#[derive(Debug, Clone)]
pub struct RasterImage {
  pub bytes: Vec<u8>,
  pub content_type: &'static str,
  pub width: u32,
  pub height: u32,
}

/// Decodes token URIs into artwork, in two variants: a lightweight
/// passthrough of the embedded SVG data URI, and a full rasterization to
/// PNG bytes.
///
/// # Example
///
/// ```no_run
/// use tokencard::TokenImageResolver;
///
/// # fn main() -> tokencard::Result<()> {
/// let resolver = TokenImageResolver::new();
/// let image = resolver.rasterize_to_png("data:application/json;base64,...", 1200)?;
/// assert_eq!(image.content_type, "image/png");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenImageResolver {
  config: ResolverConfig,
}

impl TokenImageResolver {
  /// Create a resolver with the default configuration.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a resolver with an explicit configuration.
  pub fn with_config(config: ResolverConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  /// Resolve a token URI to the embedded SVG data URI without rasterizing.
  ///
  /// This is the lightweight variant for callers that rasterize themselves
  /// (e.g. a browser-side canvas). The returned data URI is the metadata's
  /// `image` field, unchanged.
  pub fn resolve_to_data_image(&self, token_uri: &str) -> Result<String> {
    let payload = token_uri.strip_prefix(TOKEN_URI_PREFIX).ok_or_else(|| {
      Error::Resolve(ResolveError::InvalidTokenUri {
        reason: format!("expected '{TOKEN_URI_PREFIX}' prefix"),
      })
    })?;

    let bytes = decode_base64_payload(payload).map_err(|e| {
      Error::Resolve(ResolveError::MalformedMetadata {
        reason: format!("invalid base64 payload: {e}"),
      })
    })?;

    let metadata = TokenMetadata::from_json_bytes(&bytes).map_err(|e| {
      Error::Resolve(ResolveError::MalformedMetadata {
        reason: format!("invalid JSON metadata: {e}"),
      })
    })?;

    let image = metadata.image.ok_or_else(|| {
      Error::Resolve(ResolveError::MissingOrInvalidImage {
        reason: "metadata has no image field".to_string(),
      })
    })?;

    if !image.starts_with(SVG_IMAGE_PREFIX) {
      return Err(Error::Resolve(ResolveError::MissingOrInvalidImage {
        reason: format!("expected '{SVG_IMAGE_PREFIX}' prefix on image field"),
      }));
    }

    Ok(image)
  }

  /// Resolve a token URI and rasterize the embedded SVG into a
  /// `target_size` x `target_size` PNG.
  pub fn rasterize_to_png(&self, token_uri: &str, target_size: u32) -> Result<RasterImage> {
    let image_uri = self.resolve_to_data_image(token_uri)?;

    let svg_bytes = decode_base64_payload(&image_uri[SVG_IMAGE_PREFIX.len()..]).map_err(|e| {
      Error::Render(RenderError::RasterizationFailed {
        reason: format!("invalid base64 SVG payload: {e}"),
      })
    })?;
    let markup = String::from_utf8(svg_bytes).map_err(|e| {
      Error::Render(RenderError::RasterizationFailed {
        reason: format!("SVG payload is not valid UTF-8: {e}"),
      })
    })?;

    let normalized = normalize_svg(&markup, target_size, self.config.fallback_view_box);
    let pixmap = rasterize_svg(&normalized, target_size, target_size)?;
    let bytes = encode_png(&pixmap)?;

    Ok(RasterImage {
      bytes,
      content_type: PNG_CONTENT_TYPE,
      width: target_size,
      height: target_size,
    })
  }

  /// Rasterize at the configured target size, for callers that leave the
  /// output size to configuration.
  pub fn rasterize_to_png_default(&self, token_uri: &str) -> Result<RasterImage> {
    self.rasterize_to_png(token_uri, self.config.target_size)
  }
}
