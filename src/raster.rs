//! SVG rasterization onto a fixed-size canvas.

use crate::error::{Error, RenderError, Result};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Rasterizes SVG markup into a `width` x `height` pixmap, anchored at the
/// origin and scaled to fill the canvas. Rendering is anti-aliased.
pub fn rasterize_svg(svg_content: &str, width: u32, height: u32) -> Result<Pixmap> {
  if width == 0 || height == 0 {
    return Err(Error::Render(RenderError::CanvasCreationFailed {
      width,
      height,
    }));
  }

  let options = usvg::Options::default();
  let tree = usvg::Tree::from_str(svg_content, &options).map_err(|e| {
    Error::Render(RenderError::RasterizationFailed {
      reason: format!("failed to parse SVG: {e}"),
    })
  })?;

  let mut pixmap = Pixmap::new(width, height).ok_or(Error::Render(
    RenderError::CanvasCreationFailed { width, height },
  ))?;

  let size = tree.size();
  let transform = tiny_skia::Transform::from_scale(
    width as f32 / size.width(),
    height as f32 / size.height(),
  );
  resvg::render(&tree, transform, &mut pixmap.as_mut());

  Ok(pixmap)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{Error, RenderError};

  const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

  #[test]
  fn renders_at_requested_size() {
    let pixmap = rasterize_svg(RED_SQUARE, 40, 40).expect("rasterizes");
    assert_eq!(pixmap.width(), 40);
    assert_eq!(pixmap.height(), 40);

    let center = pixmap.pixel(20, 20).expect("in bounds").demultiply();
    assert_eq!((center.red(), center.green(), center.blue()), (255, 0, 0));
  }

  #[test]
  fn rejects_malformed_markup() {
    let err = rasterize_svg("<svg unclosed", 10, 10).unwrap_err();
    assert!(matches!(
      err,
      Error::Render(RenderError::RasterizationFailed { .. })
    ));
  }

  #[test]
  fn rejects_zero_canvas() {
    let err = rasterize_svg(RED_SQUARE, 0, 10).unwrap_err();
    assert!(matches!(
      err,
      Error::Render(RenderError::CanvasCreationFailed { .. })
    ));
  }
}
