use crate::common::{Display, Point2D};

use super::{Colors, GraphicElement};

#[derive(Debug, Clone)]
pub struct Pixel {
    pub pos: Point2D,
    colors: Colors,
}

impl Pixel {
    pub fn new(pos: Point2D, colors: Colors) -> Self {
        Pixel { pos, colors }
    }
}

impl GraphicElement for Pixel {
    fn colors(&self) -> &Colors {
        &self.colors
    }

    fn colors_mut(&mut self) -> &mut Colors {
        &mut self.colors
    }

    fn draw(&self, display: &mut dyn Display) {
        self.draw_pixel(display, self.pos.x, self.pos.y);
    }
}
