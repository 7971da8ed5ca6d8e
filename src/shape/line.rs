use crate::common::{Display, Point2D};

use super::{Colors, GraphicElement};

/// 画线所用的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePlotter {
    /// [`Line::draw`], 按斜率逐列计算 y
    #[default]
    Slope,
    /// [`Line::draw_line`], Bresenham
    Bresenham,
}

/// 从 pos1 到 pos2 的线段
#[derive(Debug, Clone)]
pub struct Line {
    pub pos1: Point2D,
    pub pos2: Point2D,
    colors: Colors,
}

impl Line {
    pub fn new(pos1: Point2D, pos2: Point2D, colors: Colors) -> Self {
        Line { pos1, pos2, colors }
    }

    /// Bresenham 画线, 包含两个端点, 任意方向均可, 起点终点相同时只画一个点
    pub fn draw_line(&self, display: &mut dyn Display) {
        let (mut x0, mut y0) = (self.pos1.x, self.pos1.y);
        let (x1, y1) = (self.pos2.x, self.pos2.y);

        // 误差项用 i64, 长线段的 2 * err 不会溢出
        let dx = (x1 as i64 - x0 as i64).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 as i64 - y0 as i64).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // e_xy

        loop {
            self.draw_pixel(display, x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy { // e_xy + e_x > 0
                err += dy;
                x0 += sx;
            }
            if e2 <= dx { // e_xy + e_y < 0
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl GraphicElement for Line {
    fn colors(&self) -> &Colors {
        &self.colors
    }

    fn colors_mut(&mut self) -> &mut Colors {
        &mut self.colors
    }

    /// 对 x in [pos1.x, pos2.x) 逐列画点, y 用截断除法按斜率求得.
    ///
    /// 保留了旧绘制器的缺陷: pos2.x <= pos1.x 时 (包括竖线) 什么也不画,
    /// 并且永远不画 x = pos2.x 这一列. 因为区间为空时不会进入循环, 竖线不会除零.
    fn draw(&self, display: &mut dyn Display) {
        let dx = self.pos2.x as i64 - self.pos1.x as i64;
        let dy = self.pos2.y as i64 - self.pos1.y as i64;
        if dx <= 0 {
            log::trace!("slope plotter skips line {:?} -> {:?}", self.pos1, self.pos2);
            return;
        }
        for x in self.pos1.x..self.pos2.x {
            let y = self.pos1.y as i64 + dy * (x as i64 - self.pos1.x as i64) / dx;
            self.draw_pixel(display, x, y as i32);
        }
    }
}
