use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded token metadata.
///
/// The resolver consumes only the `image` field; every other field is
/// carried through untouched so callers can re-serialize the metadata
/// without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
  /// Data URI of the token's artwork, when present.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,

  /// All remaining metadata fields, preserved verbatim.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl TokenMetadata {
  /// Parse metadata from decoded JSON bytes.
  pub fn from_json_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
    serde_json::from_slice(bytes)
  }
}
