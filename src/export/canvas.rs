/// Off-screen RGBA canvas with rectangle fills and 8x8 bitmap text
use ::image::{Rgba, RgbaImage};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use super::grid::Rect;

/// Glyph cell size of the bitmap font
pub const GLYPH_SIZE: u32 = 8;

pub const BLACK: [u8; 3] = [0, 0, 0];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const GREY: [u8; 3] = [96, 96, 96];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    /// Right aligned with the given padding in pixels
    Right(u32),
    /// Left aligned with the given padding in pixels
    Left(u32),
}

pub struct Canvas {
    image: RgbaImage,
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width of `text` in pixels
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        let [r, g, b] = background;
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill(&mut self, rect: Rect, color: [u8; 3]) {
        let [r, g, b] = color;
        let right = (rect.x + rect.width).min(self.width());
        let bottom = rect.bottom().min(self.height());
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.image.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, c: char, color: [u8; 3], clip: Rect) {
        let [r, g, b] = color;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = x + col;
                let py = y + row as u32;
                if px < clip.x + clip.width && py < clip.bottom() && px < self.width() && py < self.height() {
                    self.image.put_pixel(px, py, Rgba([r, g, b, 255]));
                }
            }
        }
    }

    /// Draw text inside `rect`, vertically centered and cut to the glyphs that fit.
    /// Bold text is drawn twice with a one pixel offset.
    pub fn draw_text(&mut self, rect: Rect, text: &str, color: [u8; 3], align: Align, bold: bool) {
        let extra = u32::from(bold);
        let fits = (rect.width.saturating_sub(extra) / GLYPH_SIZE) as usize;
        let text: String = text.chars().take(fits).collect();
        let width = text_width(&text) + extra;

        let x = match align {
            Align::Center => rect.x + (rect.width - width) / 2,
            Align::Right(pad) => rect.x + rect.width.saturating_sub(width + pad),
            Align::Left(pad) => rect.x + pad.min(rect.width - width),
        };
        let y = rect.y + rect.height.saturating_sub(GLYPH_SIZE) / 2;

        for (i, c) in text.chars().enumerate() {
            let gx = x + i as u32 * GLYPH_SIZE;
            self.draw_glyph(gx, y, c, color, rect);
            if bold {
                self.draw_glyph(gx + 1, y, c, color, rect);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        [r, g, b]
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u32, y: u32, width: u32, height: u32) -> Rect {
        Rect { x, y, width, height }
    }

    fn count_color(canvas: &Canvas, area: Rect, color: [u8; 3]) -> usize {
        let mut n = 0;
        for y in area.y..area.bottom() {
            for x in area.x..area.x + area.width {
                if canvas.pixel(x, y) == color {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_fill_is_clipped() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill(rect(8, 8, 5, 5), BLACK);
        assert_eq!(canvas.pixel(9, 9), BLACK);
        assert_eq!(canvas.pixel(7, 7), WHITE);
    }

    #[test]
    fn test_text_stays_inside_rect() {
        let mut canvas = Canvas::new(64, 20, WHITE);
        canvas.draw_text(rect(10, 2, 20, 16), "WWWWWWWW", BLACK, Align::Center, false);

        let inside = count_color(&canvas, rect(10, 2, 20, 16), BLACK);
        assert!(inside > 0);
        assert_eq!(count_color(&canvas, rect(0, 0, 64, 20), BLACK), inside);
    }

    #[test]
    fn test_right_alignment_hugs_right_edge() {
        let mut canvas = Canvas::new(40, 10, WHITE);
        canvas.draw_text(rect(0, 0, 40, 10), "1", BLACK, Align::Right(2), false);
        assert_eq!(count_color(&canvas, rect(0, 0, 30, 10), BLACK), 0);
        assert!(count_color(&canvas, rect(30, 0, 10, 10), BLACK) > 0);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut canvas = Canvas::new(16, 16, WHITE);
        canvas.draw_text(rect(0, 0, 16, 16), "  ", BLACK, Align::Left(0), true);
        assert_eq!(count_color(&canvas, rect(0, 0, 16, 16), BLACK), 0);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("abc"), 24);
        assert_eq!(text_width("★"), 8);
    }
}
