use base64::Engine;

/// Prefix required on the outer token URI: base64-encoded JSON metadata.
pub const TOKEN_URI_PREFIX: &str = "data:application/json;base64,";

/// Prefix required on the embedded artwork: base64-encoded SVG markup.
pub const SVG_IMAGE_PREFIX: &str = "data:image/svg+xml;base64,";

/// Decode a base64 data-URI payload, tolerating ASCII whitespace for
/// robustness against line-wrapped on-chain output.
pub(crate) fn decode_base64_payload(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
  let mut cleaned = Vec::with_capacity(data.len());
  let mut saw_whitespace = false;

  for byte in data.bytes() {
    if byte.is_ascii_whitespace() {
      saw_whitespace = true;
      continue;
    }
    cleaned.push(byte);
  }

  let input = if saw_whitespace {
    cleaned.as_slice()
  } else {
    data.as_bytes()
  };

  base64::engine::general_purpose::STANDARD.decode(input)
}

#[cfg(test)]
mod tests {
  use super::*;
  use base64::Engine;

  #[test]
  fn decodes_plain_payload() {
    let encoded = base64::engine::general_purpose::STANDARD.encode("hello");
    assert_eq!(decode_base64_payload(&encoded).unwrap(), b"hello");
  }

  #[test]
  fn tolerates_embedded_whitespace() {
    let encoded = base64::engine::general_purpose::STANDARD.encode("hello world");
    let wrapped = format!("{}\n{}", &encoded[..4], &encoded[4..]);
    assert_eq!(decode_base64_payload(&wrapped).unwrap(), b"hello world");
  }

  #[test]
  fn rejects_invalid_base64() {
    assert!(decode_base64_payload("!!!not-base64!!!").is_err());
  }
}
