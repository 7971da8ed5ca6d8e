use crate::common::{Display, Point2D};
use crate::lcd::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

use super::{render, Colors, GraphicElement, Shape};

/// 8x8 点阵字符, pos 为左上角
#[derive(Debug, Clone)]
pub struct Glyph {
    pub pos: Point2D,
    bitmap: &'static [u8; 8],
    colors: Colors,
}

impl Glyph {
    /// 字符必须在字库中, 否则返回 Err
    pub fn new(pos: Point2D, character: char, colors: Colors) -> Result<Self, String> {
        let bitmap = font::glyph(character)
            .ok_or_else(|| format!("Character {:?} is not in the 8x8 font table", character))?;
        Ok(Glyph { pos, bitmap, colors })
    }
}

impl GraphicElement for Glyph {
    fn colors(&self) -> &Colors {
        &self.colors
    }

    fn colors_mut(&mut self) -> &mut Colors {
        &mut self.colors
    }

    fn draw(&self, display: &mut dyn Display) {
        for i in 0..GLYPH_HEIGHT { // row
            let row = self.bitmap[i as usize];
            for j in 0..GLYPH_WIDTH { // column
                if row & (1u8 << j) != 0 {
                    self.draw_pixel(display, self.pos.x + j, self.pos.y + i);
                }
            }
        }
    }
}

/// 从 pos 起横向画一串字符, 每个字符前进 8 像素
pub fn draw_text(display: &mut dyn Display, pos: Point2D, text: &str, colors: Colors) -> Result<(), String> {
    for (i, ch) in text.chars().enumerate() {
        let glyph = Glyph::new(pos.offset(GLYPH_WIDTH * i as i32, 0), ch, colors)?;
        render(&Shape::from(glyph), display);
    }
    Ok(())
}
