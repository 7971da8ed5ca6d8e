//! 图形元素: 点, 线, 圆, 字符
//!
//! 所有图形只通过 [`GraphicElement::draw_pixel`] 向显示设备写像素. 图形每帧重新创建,
//! 不跨帧保存; 擦除靠 [`GraphicElement::hide`] 用背景色重画.

mod circle;
mod glyph;
mod line;
mod pixel;

pub use self::{
    circle::Circle,
    glyph::{draw_text, Glyph},
    line::{Line, LinePlotter},
    pixel::Pixel,
};

use crate::common::{Display, Rgb};
use crate::lcd::color::Rgb565;

/// 前景色与背景色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Colors {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Colors { fg, bg }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.fg, &mut self.bg);
    }
}

pub trait GraphicElement {
    fn colors(&self) -> &Colors;
    fn colors_mut(&mut self) -> &mut Colors;

    fn draw(&self, display: &mut dyn Display);

    /// 用背景色重画一遍.
    /// 只有当背景色与该位置实际的屏幕颜色一致时才能真正擦除, 由调用者保证
    fn hide(&mut self, display: &mut dyn Display) {
        self.colors_mut().swap();
        self.draw(display);
        self.colors_mut().swap();
    }

    /// 与显示设备的唯一接口
    fn draw_pixel(&self, display: &mut dyn Display, x: i32, y: i32) {
        display.put_pixel(x, y, Rgb565::encode(self.colors().fg));
    }
}

/// 封闭的图形集合, 统一通过 [`render`] 分派
#[derive(Debug, Clone)]
pub enum Shape {
    Pixel(Pixel),
    Line(Line),
    Circle(Circle),
    Glyph(Glyph),
}

pub fn render(shape: &Shape, display: &mut dyn Display) {
    shape.draw(display);
}

impl GraphicElement for Shape {
    fn colors(&self) -> &Colors {
        match self {
            Shape::Pixel(s) => s.colors(),
            Shape::Line(s) => s.colors(),
            Shape::Circle(s) => s.colors(),
            Shape::Glyph(s) => s.colors(),
        }
    }

    fn colors_mut(&mut self) -> &mut Colors {
        match self {
            Shape::Pixel(s) => s.colors_mut(),
            Shape::Line(s) => s.colors_mut(),
            Shape::Circle(s) => s.colors_mut(),
            Shape::Glyph(s) => s.colors_mut(),
        }
    }

    fn draw(&self, display: &mut dyn Display) {
        match self {
            Shape::Pixel(s) => s.draw(display),
            Shape::Line(s) => s.draw(display),
            Shape::Circle(s) => s.draw(display),
            Shape::Glyph(s) => s.draw(display),
        }
    }

    fn hide(&mut self, display: &mut dyn Display) {
        match self {
            Shape::Pixel(s) => s.hide(display),
            Shape::Line(s) => s.hide(display),
            Shape::Circle(s) => s.hide(display),
            Shape::Glyph(s) => s.hide(display),
        }
    }
}

impl From<Pixel> for Shape {
    fn from(shape: Pixel) -> Self {
        Shape::Pixel(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Glyph> for Shape {
    fn from(shape: Glyph) -> Self {
        Shape::Glyph(shape)
    }
}
