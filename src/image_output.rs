use crate::error::{Error, RenderError, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Encodes a pixmap as PNG bytes.
///
/// The encoder is pinned to its fastest compression setting with a fixed
/// (non-adaptive) filter: a deliberate throughput-over-size tradeoff that
/// also keeps the output byte-identical across calls for the same input.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
  // Pixmap stores premultiplied RGBA; PNG wants straight alpha.
  let mut rgba_data = Vec::with_capacity(pixmap.data().len());
  for pixel in pixmap.pixels() {
    let c = pixel.demultiply();
    rgba_data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
  }

  let img = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba_data).ok_or_else(|| {
    Error::Render(RenderError::EncodeFailed {
      format: "PNG".to_string(),
      reason: "failed to assemble RGBA buffer".to_string(),
    })
  })?;

  let mut buffer = Vec::new();
  let encoder = PngEncoder::new_with_quality(
    Cursor::new(&mut buffer),
    CompressionType::Fast,
    FilterType::NoFilter,
  );
  img.write_with_encoder(encoder).map_err(|e| {
    Error::Render(RenderError::EncodeFailed {
      format: "PNG".to_string(),
      reason: e.to_string(),
    })
  })?;

  Ok(buffer)
}
