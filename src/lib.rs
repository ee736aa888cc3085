//! tokencard: on-chain token-URI decoding and social-card rasterization.
//!
//! # Pipeline
//!
//! 1. **Validate**: token URI → base64 JSON data URI
//! 2. **Decode**: payload → token metadata
//! 3. **Extract**: metadata `image` → base64 SVG data URI
//! 4. **Normalize**: SVG markup → fixed-size markup with a viewBox
//! 5. **Rasterize**: normalized SVG → pixmap
//! 6. **Encode**: pixmap → PNG bytes
//!
//! The lightweight variant ([`TokenImageResolver::resolve_to_data_image`])
//! stops after step 3 and hands the SVG data URI back for client-side
//! rendering. The [`mint`] module additionally assembles wallet-ready mint
//! transaction payloads for edition contracts.

pub mod data_uri;
pub mod error;
pub mod image_output;
pub mod metadata;
pub mod mint;
pub mod raster;
pub mod resolver;
pub mod svg;

pub use error::{Error, MintError, RenderError, ResolveError, Result};
pub use metadata::TokenMetadata;
pub use mint::{build_mint_transaction, EditionPricing, MintTransaction};
pub use resolver::{
  RasterImage, ResolverConfig, TokenImageResolver, DEFAULT_TARGET_SIZE, PNG_CONTENT_TYPE,
};
pub use svg::FallbackViewBox;
