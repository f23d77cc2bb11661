//! Pixel canvas primitives for section rendering and compositing.
//!
//! `Canvas` is a thin layer over `image::RgbaImage` with the handful of
//! drawing operations the sections need: solid and rounded-rectangle fills,
//! horizontal rules, alpha-blended glyph blits, and canvas-onto-canvas
//! stacking. Sections draw on transparent canvases; the compositor flattens
//! the stack onto an opaque page at the end.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lingo_card_config::Color;
use lingo_card_fonts::{GlyphBitmap, Typeface};

/// Which horizontal edges of a rectangle get rounded corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corners {
    pub top: bool,
    pub bottom: bool,
}

impl Corners {
    pub const ALL: Corners = Corners {
        top: true,
        bottom: true,
    };
    pub const NONE: Corners = Corners {
        top: false,
        bottom: false,
    };
    pub const TOP: Corners = Corners {
        top: true,
        bottom: false,
    };
    pub const BOTTOM: Corners = Corners {
        top: false,
        bottom: true,
    };
}

fn rgba(color: Color, alpha: u8) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, alpha])
}

/// A width-fixed RGBA pixel buffer, transparent until drawn on.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            img: RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([0, 0, 0, 0])),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Opaque rectangle fill. Out-of-bounds parts are clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let px = rgba(color, 255);
        for yy in y.max(0)..(y + h as i32).min(self.img.height() as i32) {
            for xx in x.max(0)..(x + w as i32).min(self.img.width() as i32) {
                self.img.put_pixel(xx as u32, yy as u32, px);
            }
        }
    }

    /// Opaque rectangle fill with selected corners rounded by `radius`.
    pub fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u32,
        corners: Corners,
        color: Color,
    ) {
        let px = rgba(color, 255);
        let r = radius.min(w / 2).min(h / 2) as i32;
        let (x1, y1) = (x + w as i32 - 1, y + h as i32 - 1);

        for yy in y.max(0)..(y1 + 1).min(self.img.height() as i32) {
            for xx in x.max(0)..(x1 + 1).min(self.img.width() as i32) {
                // Corner circle centers sit r pixels inside each corner.
                let cx = if xx < x + r {
                    Some(x + r)
                } else if xx > x1 - r {
                    Some(x1 - r)
                } else {
                    None
                };
                let cy = if yy < y + r && corners.top {
                    Some(y + r)
                } else if yy > y1 - r && corners.bottom {
                    Some(y1 - r)
                } else {
                    None
                };
                if let (Some(cx), Some(cy)) = (cx, cy) {
                    let (dx, dy) = (xx - cx, yy - cy);
                    if dx * dx + dy * dy > r * r {
                        continue;
                    }
                }
                self.img.put_pixel(xx as u32, yy as u32, px);
            }
        }
    }

    /// One-pixel horizontal rule from `x0` to `x1` inclusive.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.img.height() as i32 {
            return;
        }
        let px = rgba(color, 255);
        for xx in x0.max(0)..=x1.min(self.img.width() as i32 - 1) {
            self.img.put_pixel(xx as u32, y as u32, px);
        }
    }

    /// Alpha-blend a glyph mask at `(x, y)` (top-left of the mask).
    pub fn blit_glyph(&mut self, bitmap: &GlyphBitmap, x: i32, y: i32, color: Color) {
        for row in 0..bitmap.height {
            let yy = y + row as i32;
            if yy < 0 || yy >= self.img.height() as i32 {
                continue;
            }
            for col in 0..bitmap.width {
                let xx = x + col as i32;
                if xx < 0 || xx >= self.img.width() as i32 {
                    continue;
                }
                let alpha = bitmap.alpha[(row * bitmap.width + col) as usize];
                if alpha == 0 {
                    continue;
                }
                let dst = self.img.get_pixel_mut(xx as u32, yy as u32);
                *dst = blend_over(rgba(color, alpha), *dst);
            }
        }
    }

    /// Draw `text` with its baseline at `baseline`, pen starting at `x`.
    pub fn draw_text<F: Typeface>(
        &mut self,
        face: &F,
        text: &str,
        x: f32,
        baseline: f32,
        color: Color,
    ) {
        let mut pen = x;
        let baseline_px = baseline.round() as i32;
        for ch in text.chars() {
            if let Some(bitmap) = face.rasterize(ch) {
                self.blit_glyph(
                    &bitmap,
                    pen.round() as i32 + bitmap.left,
                    baseline_px - bitmap.top,
                    color,
                );
            }
            pen += face.advance(ch);
        }
    }

    /// Alpha-blend `other` onto this canvas with its top edge at `y`.
    pub fn overlay(&mut self, other: &Canvas, y: u32) {
        for (px_x, px_y, src) in other.img.enumerate_pixels() {
            let yy = y + px_y;
            if yy >= self.img.height() || px_x >= self.img.width() || src[3] == 0 {
                continue;
            }
            let dst = self.img.get_pixel_mut(px_x, yy);
            *dst = blend_over(*src, *dst);
        }
    }

    /// Flatten onto an opaque background, discarding alpha.
    pub fn flatten(&self, background: Color) -> RgbImage {
        RgbImage::from_fn(self.img.width(), self.img.height(), |x, y| {
            let src = self.img.get_pixel(x, y);
            let a = src[3] as u32;
            let na = 255 - a;
            Rgb([
                ((src[0] as u32 * a + background.r as u32 * na) / 255) as u8,
                ((src[1] as u32 * a + background.g as u32 * na) / 255) as u8,
                ((src[2] as u32 * a + background.b as u32 * na) / 255) as u8,
            ])
        })
    }
}

/// Source-over compositing of two straight-alpha pixels.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    let da = dst[3] as u32;
    let na = 255 - sa;
    let out_a = sa + da * na / 255;
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| -> u8 {
        ((s as u32 * sa + d as u32 * da * na / 255) / out_a) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        out_a as u8,
    ])
}

/// Encode a flattened card as PNG bytes.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(-2, -2, 10, 10, RED);
        assert_eq!(canvas.img.get_pixel(3, 3)[0], 255);
    }

    #[test]
    fn test_rounded_corners_stay_transparent() {
        let mut canvas = Canvas::new(40, 40);
        canvas.fill_rounded_rect(0, 0, 40, 40, 10, Corners::ALL, RED);
        // The extreme corner pixel lies outside the corner circle.
        assert_eq!(canvas.img.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.img.get_pixel(39, 39)[3], 0);
        // Center and edge midpoints are filled.
        assert_eq!(canvas.img.get_pixel(20, 20)[3], 255);
        assert_eq!(canvas.img.get_pixel(20, 0)[3], 255);
    }

    #[test]
    fn test_rounded_bottom_only_keeps_square_top() {
        let mut canvas = Canvas::new(40, 40);
        canvas.fill_rounded_rect(0, 0, 40, 40, 10, Corners::BOTTOM, RED);
        assert_eq!(canvas.img.get_pixel(0, 0)[3], 255);
        assert_eq!(canvas.img.get_pixel(0, 39)[3], 0);
    }

    #[test]
    fn test_overlay_stacks_at_offset() {
        let mut base = Canvas::new(4, 8);
        let mut top = Canvas::new(4, 4);
        top.fill_rect(0, 0, 4, 4, RED);
        base.overlay(&top, 4);
        assert_eq!(base.img.get_pixel(0, 3)[3], 0);
        assert_eq!(base.img.get_pixel(0, 4)[0], 255);
    }

    #[test]
    fn test_flatten_blends_transparency() {
        let canvas = Canvas::new(2, 2);
        let flat = canvas.flatten(WHITE);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_encode_png_magic_bytes() {
        let canvas = Canvas::new(2, 2);
        let bytes = encode_png(&canvas.flatten(WHITE)).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_blit_glyph_blends_alpha() {
        let mut canvas = Canvas::new(2, 1);
        let bitmap = GlyphBitmap {
            left: 0,
            top: 0,
            width: 2,
            height: 1,
            alpha: vec![255, 0],
        };
        canvas.blit_glyph(&bitmap, 0, 0, RED);
        assert_eq!(canvas.img.get_pixel(0, 0)[3], 255);
        assert_eq!(canvas.img.get_pixel(1, 0)[3], 0);
    }
}
