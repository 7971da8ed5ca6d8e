mod hands;
mod layout;

pub use self::{hands::HandIndices, layout::{ClockLayout, LAYOUT}};

use crate::common::{Display, Point2D, Rgb};
use crate::shape::{draw_text, render, Circle, Colors, Line, LinePlotter, Shape};

// 数字的顺序与位置表一致, 下标 0 在 3 点钟方向
const NUMERALS: [&str; 12] = ["3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "1", "2"];
const TWO_DIGIT_SHIFT: i32 = -2;

const BRAND: &str = "HODINYCASIO";
const BRAND_FIRST_ROW_LEN: usize = 6;
const BRAND_FIRST_ROW: Point2D = Point2D::new(135, 150);
const BRAND_SECOND_ROW: Point2D = Point2D::new(140, 160);

const BEZEL_RINGS: i32 = 5;

const BACKGROUND: Rgb = Rgb::BLACK;
const NUMERAL_COLORS: Colors = Colors::new(Rgb::YELLOW, BACKGROUND);
const BRAND_COLORS: Colors = Colors::new(Rgb::ORANGE, BACKGROUND);
const BEZEL_COLORS: Colors = Colors::new(Rgb::WHITE, BACKGROUND);
const SECOND_HAND_COLORS: Colors = Colors::new(Rgb::RED, BACKGROUND);
const MINUTE_HAND_COLORS: Colors = Colors::new(Rgb::GREEN, BACKGROUND);
const HOUR_HAND_COLORS: Colors = Colors::new(Rgb::BLUE, BACKGROUND);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// present 时的等待时间
    pub frame_delay_ms: u32,
    pub start: HandIndices,
    /// 画指针所用的算法. Slope 在指针朝左或竖直时画不出来
    pub hand_plotter: LinePlotter,
    /// 窗口放大倍数, 只有窗口前端使用
    pub scale: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            frame_delay_ms: 1000,
            start: HandIndices::default(),
            hand_plotter: LinePlotter::Slope,
            scale: 2,
        }
    }
}

/// 每帧重画整个表盘. 唯一跨帧保存的状态是指针下标
pub struct ClockRenderer<'a> {
    layout: &'a ClockLayout,
    config: ClockConfig,
    hands: HandIndices,
    frame_cnt: u64,
}

impl ClockRenderer<'static> {
    pub fn new(config: ClockConfig) -> Self {
        ClockRenderer::with_layout(&LAYOUT, config)
    }
}

impl<'a> ClockRenderer<'a> {
    pub fn with_layout(layout: &'a ClockLayout, config: ClockConfig) -> Self {
        ClockRenderer {
            layout,
            config,
            hands: config.start,
            frame_cnt: 0,
        }
    }

    pub fn hands(&self) -> HandIndices {
        self.hands
    }

    pub fn frame_cnt(&self) -> u64 {
        self.frame_cnt
    }

    /// 画一帧: 清屏, 数字, 商标, 表圈, 指针, 推进指针, 输出
    pub fn render_frame(&mut self, display: &mut dyn Display) -> Result<(), String> {
        log::debug!("Frame {} start, hands {:?}", self.frame_cnt, self.hands);

        display.clear();
        self.draw_numerals(display)?;
        self.draw_brand(display)?;
        self.draw_bezel(display);
        self.draw_hands(display);
        self.hands.advance();
        display.present(self.config.frame_delay_ms);

        self.frame_cnt += 1;
        Ok(())
    }

    /// 逐帧渲染直到 `stop(已渲染帧数)` 返回 true, 返回本次渲染的帧数
    pub fn run<F>(&mut self, display: &mut dyn Display, mut stop: F) -> Result<u64, String>
    where
        F: FnMut(u64) -> bool,
    {
        log::info!("clock starts at {:?}", self.hands);
        let mut rendered = 0;
        while !stop(rendered) {
            self.render_frame(display)?;
            rendered += 1;
        }
        log::info!("clock stops after {} frames", rendered);
        Ok(rendered)
    }

    fn draw_numerals(&self, display: &mut dyn Display) -> Result<(), String> {
        for (label, pos) in NUMERALS.iter().zip(self.layout.numerals.iter()) {
            let pos = if label.len() > 1 { pos.offset(TWO_DIGIT_SHIFT, 0) } else { *pos };
            draw_text(display, pos, label, NUMERAL_COLORS)?;
        }
        Ok(())
    }

    fn draw_brand(&self, display: &mut dyn Display) -> Result<(), String> {
        let (first, second) = BRAND.split_at(BRAND_FIRST_ROW_LEN);
        draw_text(display, BRAND_FIRST_ROW, first, BRAND_COLORS)?;
        draw_text(display, BRAND_SECOND_ROW, second, BRAND_COLORS)
    }

    fn draw_bezel(&self, display: &mut dyn Display) {
        for i in 0..BEZEL_RINGS {
            let ring = Circle::new(ClockLayout::CENTER, ClockLayout::TICK_RADIUS + i, BEZEL_COLORS);
            render(&Shape::from(ring), display);
        }
    }

    fn draw_hands(&self, display: &mut dyn Display) {
        let center = ClockLayout::CENTER;
        let hands = [
            (self.layout.second_hand(self.hands.second), SECOND_HAND_COLORS),
            (self.layout.minute_hand(self.hands.minute), MINUTE_HAND_COLORS),
            (self.layout.hour_hand(self.hands.hour), HOUR_HAND_COLORS),
        ];
        for (end, colors) in hands {
            let hand = Line::new(center, end, colors);
            match self.config.hand_plotter {
                LinePlotter::Slope => render(&Shape::from(hand), display),
                LinePlotter::Bresenham => hand.draw_line(display),
            }
        }
    }
}
