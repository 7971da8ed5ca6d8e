use crate::lcd::color::Rgb565;

/// 屏幕坐标, 不做边界检查
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Point2D { x, y }
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Point2D { x: self.x + dx, y: self.y + dy }
    }
}

/// 每通道 8 bit 的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 100, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// 显示设备, 图形元素只通过它输出像素
pub trait Display {
    /// 用背景色填满整个缓冲区
    fn clear(&mut self);

    /// 写一个像素, 超出范围的坐标由实现方处理
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// 将缓冲区输出, 并阻塞 wait_ms 毫秒
    fn present(&mut self, wait_ms: u32);
}
