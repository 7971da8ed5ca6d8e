pub mod color;
pub mod font;

use crate::common::{Display, Rgb};

use self::color::Rgb565;

/// 内存中的 LCD 缓冲区, 每像素一个 RGB565
pub struct Lcd {
    data: Vec<Rgb565>,
    background: Rgb565,
}

impl Lcd {
    pub const WIDTH: usize = 320;
    pub const HEIGHT: usize = 240;

    pub fn new() -> Self {
        Lcd::with_background(Rgb::BLACK)
    }

    pub fn with_background(background: Rgb) -> Self {
        let background = Rgb565::encode(background);
        Lcd {
            data: vec![background; Lcd::WIDTH * Lcd::HEIGHT],
            background,
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= Lcd::WIDTH || y as usize >= Lcd::HEIGHT {
            return None;
        }
        Some(y as usize * Lcd::WIDTH + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        Lcd::index(x, y).map(|idx| self.data[idx])
    }

    pub fn data(&self) -> &[Rgb565] {
        &self.data
    }

    /// 展开为 RGB24, 供纹理上传; `out` 至少要有 WIDTH * HEIGHT * 3 字节
    pub fn write_rgb24(&self, out: &mut [u8]) {
        for (pixel, rgb) in self.data.iter().zip(out.chunks_exact_mut(3)) {
            let color = pixel.decode();
            rgb[0] = color.r;
            rgb[1] = color.g;
            rgb[2] = color.b;
        }
    }
}

impl Default for Lcd {
    fn default() -> Self {
        Lcd::new()
    }
}

impl Display for Lcd {
    fn clear(&mut self) {
        self.data.fill(self.background);
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        match Lcd::index(x, y) {
            Some(idx) => self.data[idx] = color,
            None => log::warn!("Attempt to set pixel at ({}, {}) which is out of screen", x, y),
        }
    }

    fn present(&mut self, wait_ms: u32) {
        log::trace!("present without output device, skip waiting {} ms", wait_ms);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;

    /// 记录所有写像素调用的显示设备
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub writes: Vec<(i32, i32, Rgb565)>,
        pub clears: usize,
        pub presents: Vec<u32>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Recorder::default()
        }

        pub fn points(&self) -> Vec<(i32, i32)> {
            self.writes.iter().map(|(x, y, _)| (*x, *y)).collect()
        }

        pub fn point_set(&self) -> HashSet<(i32, i32)> {
            self.writes.iter().map(|(x, y, _)| (*x, *y)).collect()
        }

        pub fn points_with(&self, color: Rgb) -> HashSet<(i32, i32)> {
            let color = Rgb565::encode(color);
            self.writes
                .iter()
                .filter(|(_, _, c)| *c == color)
                .map(|(x, y, _)| (*x, *y))
                .collect()
        }
    }

    impl Display for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.writes.clear();
        }

        fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
            self.writes.push((x, y, color));
        }

        fn present(&mut self, wait_ms: u32) {
            self.presents.push(wait_ms);
        }
    }

    #[test]
    fn test_put_and_read_pixel() {
        let mut lcd = Lcd::new();
        lcd.put_pixel(10, 20, Rgb565::encode(Rgb::RED));
        assert_eq!(lcd.pixel(10, 20), Some(Rgb565::encode(Rgb::RED)));
        assert_eq!(lcd.pixel(11, 20), Some(Rgb565::encode(Rgb::BLACK)));
    }

    #[test]
    fn test_out_of_screen_is_ignored() {
        let mut lcd = Lcd::new();
        lcd.put_pixel(-1, 0, Rgb565::encode(Rgb::WHITE));
        lcd.put_pixel(Lcd::WIDTH as i32, 0, Rgb565::encode(Rgb::WHITE));
        lcd.put_pixel(0, Lcd::HEIGHT as i32, Rgb565::encode(Rgb::WHITE));
        assert!(lcd.data().iter().all(|p| *p == Rgb565::encode(Rgb::BLACK)));
        assert_eq!(lcd.pixel(-1, 0), None);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut lcd = Lcd::with_background(Rgb::BLUE);
        lcd.put_pixel(0, 0, Rgb565::encode(Rgb::WHITE));
        lcd.clear();
        assert_eq!(lcd.pixel(0, 0), Some(Rgb565::encode(Rgb::BLUE)));
    }

    #[test]
    fn test_write_rgb24() {
        let mut lcd = Lcd::new();
        lcd.put_pixel(1, 0, Rgb565::encode(Rgb::ORANGE));
        let mut out = vec![0u8; Lcd::WIDTH * Lcd::HEIGHT * 3];
        lcd.write_rgb24(&mut out);
        assert_eq!(&out[0..3], &[0, 0, 0]);
        assert_eq!(&out[3..6], &[248, 100, 0]);
    }
}
