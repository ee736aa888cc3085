use base64::Engine;
use tokencard::{
  Error, FallbackViewBox, ResolveError, ResolverConfig, TokenImageResolver, PNG_CONTENT_TYPE,
};

const TOKEN_URI_PREFIX: &str = "data:application/json;base64,";
const SVG_IMAGE_PREFIX: &str = "data:image/svg+xml;base64,";

fn b64(data: &str) -> String {
  base64::engine::general_purpose::STANDARD.encode(data)
}

fn image_data_uri(svg: &str) -> String {
  format!("{SVG_IMAGE_PREFIX}{}", b64(svg))
}

fn token_uri(svg: &str) -> String {
  let metadata = format!(r#"{{"image":"{}"}}"#, image_data_uri(svg));
  format!("{TOKEN_URI_PREFIX}{}", b64(&metadata))
}

const MINIMAL_SVG: &str = r#"<svg width="72" height="72"><rect width="72" height="72"/></svg>"#;

#[test]
fn non_data_uri_input_fails_with_invalid_token_uri() {
  let resolver = TokenImageResolver::new();
  for input in [
    "https://example.com/metadata.json",
    "data:image/svg+xml;base64,AAAA",
    "data:application/json,plain",
    "",
  ] {
    let err = resolver.resolve_to_data_image(input).unwrap_err();
    assert!(
      matches!(err, Error::Resolve(ResolveError::InvalidTokenUri { .. })),
      "input {input:?} produced {err}"
    );
  }
}

#[test]
fn undecodable_payload_fails_with_malformed_metadata() {
  let resolver = TokenImageResolver::new();

  let bad_base64 = format!("{TOKEN_URI_PREFIX}!!!not-base64!!!");
  let err = resolver.resolve_to_data_image(&bad_base64).unwrap_err();
  assert!(matches!(
    err,
    Error::Resolve(ResolveError::MalformedMetadata { .. })
  ));

  let bad_json = format!("{TOKEN_URI_PREFIX}{}", b64("{not json"));
  let err = resolver.resolve_to_data_image(&bad_json).unwrap_err();
  assert!(matches!(
    err,
    Error::Resolve(ResolveError::MalformedMetadata { .. })
  ));
}

#[test]
fn missing_or_non_svg_image_fails_with_missing_or_invalid_image() {
  let resolver = TokenImageResolver::new();

  let no_image = format!("{TOKEN_URI_PREFIX}{}", b64(r#"{"name":"Edition #1"}"#));
  let err = resolver.resolve_to_data_image(&no_image).unwrap_err();
  assert!(matches!(
    err,
    Error::Resolve(ResolveError::MissingOrInvalidImage { .. })
  ));

  let png_image = format!(
    "{TOKEN_URI_PREFIX}{}",
    b64(r#"{"image":"data:image/png;base64,AAAA"}"#)
  );
  let err = resolver.resolve_to_data_image(&png_image).unwrap_err();
  assert!(matches!(
    err,
    Error::Resolve(ResolveError::MissingOrInvalidImage { .. })
  ));
}

#[test]
fn lightweight_variant_passes_the_image_uri_through() {
  let resolver = TokenImageResolver::new();
  let expected = image_data_uri(MINIMAL_SVG);
  let resolved = resolver
    .resolve_to_data_image(&token_uri(MINIMAL_SVG))
    .expect("resolves");
  assert_eq!(resolved, expected);
}

#[test]
fn end_to_end_rasterizes_minimal_svg_to_1200_square_png() {
  let resolver = TokenImageResolver::new();
  let image = resolver
    .rasterize_to_png(&token_uri(MINIMAL_SVG), 1200)
    .expect("rasterizes");

  assert_eq!(image.content_type, PNG_CONTENT_TYPE);
  assert_eq!((image.width, image.height), (1200, 1200));

  let decoded = image::load_from_memory_with_format(&image.bytes, image::ImageFormat::Png)
    .expect("decodable PNG");
  assert_eq!(decoded.width(), 1200);
  assert_eq!(decoded.height(), 1200);
}

#[test]
fn rasterization_is_idempotent() {
  let resolver = TokenImageResolver::new();
  let uri = token_uri(MINIMAL_SVG);
  let first = resolver.rasterize_to_png(&uri, 1200).expect("first render");
  let second = resolver.rasterize_to_png(&uri, 1200).expect("second render");
  assert_eq!(first.bytes, second.bytes);
}

#[test]
fn non_square_artwork_keeps_its_view_box_proportions() {
  let svg = r##"<svg width="50" height="100"><rect width="50" height="100" fill="#123456"/></svg>"##;
  let resolver = TokenImageResolver::new();
  let image = resolver
    .rasterize_to_png(&token_uri(svg), 400)
    .expect("rasterizes");

  let decoded = image::load_from_memory_with_format(&image.bytes, image::ImageFormat::Png)
    .expect("decodable PNG");
  assert_eq!((decoded.width(), decoded.height()), (400, 400));
}

#[test]
fn malformed_svg_payload_fails_with_rasterization_failed() {
  let resolver = TokenImageResolver::new();

  let unclosed = token_uri("<svg width=\"72\" height=\"72\"><rect");
  let err = resolver.rasterize_to_png(&unclosed, 1200).unwrap_err();
  assert!(matches!(
    err,
    Error::Render(tokencard::RenderError::RasterizationFailed { .. })
  ));

  // Bad base64 inside a correctly-prefixed image URI is an SVG decode
  // failure, not a metadata failure.
  let metadata = format!(r#"{{"image":"{SVG_IMAGE_PREFIX}!!!bad!!!"}}"#);
  let bad_payload = format!("{TOKEN_URI_PREFIX}{}", b64(&metadata));
  let err = resolver.rasterize_to_png(&bad_payload, 1200).unwrap_err();
  assert!(matches!(
    err,
    Error::Render(tokencard::RenderError::RasterizationFailed { .. })
  ));
}

#[test]
fn configured_target_size_applies_when_no_size_is_passed() {
  let config = ResolverConfig::new().with_target_size(600);
  let resolver = TokenImageResolver::with_config(config);
  let image = resolver
    .rasterize_to_png_default(&token_uri(MINIMAL_SVG))
    .expect("rasterizes");

  assert_eq!((image.width, image.height), (600, 600));
  let decoded = image::load_from_memory_with_format(&image.bytes, image::ImageFormat::Png)
    .expect("decodable PNG");
  assert_eq!((decoded.width(), decoded.height()), (600, 600));
}

#[test]
fn custom_fallback_view_box_is_used_for_dimensionless_markup() {
  let config = ResolverConfig::new().with_fallback_view_box(FallbackViewBox {
    width: 24.0,
    height: 24.0,
  });
  let resolver = TokenImageResolver::with_config(config);

  let svg = r##"<svg><circle cx="12" cy="12" r="12" fill="#000"/></svg>"##;
  let image = resolver
    .rasterize_to_png(&token_uri(svg), 240)
    .expect("rasterizes");
  assert_eq!((image.width, image.height), (240, 240));
}

#[test]
fn whitespace_wrapped_base64_payloads_decode() {
  let resolver = TokenImageResolver::new();
  let metadata = format!(r#"{{"image":"{}"}}"#, image_data_uri(MINIMAL_SVG));
  let encoded = b64(&metadata);
  let wrapped = format!(
    "{TOKEN_URI_PREFIX}{}\n{}",
    &encoded[..16],
    &encoded[16..]
  );
  resolver
    .resolve_to_data_image(&wrapped)
    .expect("whitespace-tolerant decode");
}
