//! Error types for tokencard
//!
//! Each pipeline stage gets its own error enum:
//! - Resolve errors (token-URI validation, metadata decoding)
//! - Render errors (SVG rasterization, PNG encoding)
//! - Mint errors (transaction payload assembly)
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations. Every kind maps to a distinct
//! caller-visible outcome; the library never retries internally and never
//! logs on behalf of the caller.

use thiserror::Error;

/// Result type alias for tokencard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for tokencard.
///
/// Each variant wraps a more specific error type for that stage of the
/// pipeline, so callers can match on the failure class and fall back to a
/// placeholder asset where appropriate.
#[derive(Error, Debug)]
pub enum Error {
  /// Token-URI validation or metadata decoding error
  #[error("Resolve error: {0}")]
  Resolve(#[from] ResolveError),

  /// Rasterization or image encoding error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),

  /// Mint transaction payload error
  #[error("Mint error: {0}")]
  Mint(#[from] MintError),

  /// I/O error (file reading, stdout, etc.)
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Generic error for miscellaneous issues
  #[error("{0}")]
  Other(String),
}

/// Errors produced while resolving a token URI down to its embedded image.
///
/// These are early-exit failures from the linear decode pipeline: each one
/// identifies the first validation step that rejected the input.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
  /// The outer URI is not a base64 JSON data URI
  #[error("Invalid token URI: {reason}")]
  InvalidTokenUri { reason: String },

  /// The outer payload failed base64 or JSON decoding
  #[error("Malformed metadata: {reason}")]
  MalformedMetadata { reason: String },

  /// The metadata `image` field is absent or not a base64 SVG data URI
  #[error("Missing or invalid image: {reason}")]
  MissingOrInvalidImage { reason: String },
}

/// Errors produced while rasterizing the normalized SVG and encoding the
/// output bitmap.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
  /// The rasterizer rejected the SVG payload
  #[error("Rasterization failed: {reason}")]
  RasterizationFailed { reason: String },

  /// Canvas allocation failed
  #[error("Failed to create canvas: {width}x{height}")]
  CanvasCreationFailed { width: u32, height: u32 },

  /// Bitmap encoding failed
  #[error("Failed to encode image as {format}: {reason}")]
  EncodeFailed { format: String, reason: String },
}

/// Errors produced while assembling a mint transaction payload.
#[derive(Error, Debug, Clone)]
pub enum MintError {
  /// The contract address is not a valid EVM address
  #[error("Invalid contract address: {address}")]
  InvalidAddress { address: String },

  /// A price or fee string could not be parsed as an ether amount
  #[error("Invalid amount '{value}': {reason}")]
  InvalidAmount { value: String, reason: String },
}
