use crate::common::Point2D;
use crate::lcd::Lcd;

lazy_static! {
    /// 启动后第一次使用时计算一次, 之后只读
    pub static ref LAYOUT: ClockLayout = ClockLayout::new();
}

/// 表盘上各元素的极坐标位置表.
///
/// 角度 0 指向 3 点钟方向, 屏幕 y 轴向下, 所以下标增大时顺时针旋转.
/// 坐标直接截断为整数.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockLayout {
    /// 秒刻度, 同时是秒针的端点
    pub ticks: [Point2D; 60],
    /// 12 个数字的左上角
    pub numerals: [Point2D; 12],
    /// 分针端点
    pub minutes: [Point2D; 60],
    /// 时针端点
    pub hours: [Point2D; 12],
}

impl ClockLayout {
    pub const CENTER: Point2D = Point2D::new(Lcd::WIDTH as i32 / 2, Lcd::HEIGHT as i32 / 2);

    pub const TICK_RADIUS: i32 = 90;
    pub const NUMERAL_RADIUS: i32 = 80;
    pub const MINUTE_RADIUS: i32 = 75;
    pub const HOUR_RADIUS: i32 = 40;

    const FINE_STEP_DEG: f64 = 6.0; // 360 / 60
    const COARSE_STEP_DEG: f64 = 30.0; // 360 / 12

    pub fn new() -> Self {
        let layout = ClockLayout {
            ticks: Self::polar_table(Self::TICK_RADIUS, Self::FINE_STEP_DEG),
            numerals: Self::polar_table(Self::NUMERAL_RADIUS, Self::COARSE_STEP_DEG),
            minutes: Self::polar_table(Self::MINUTE_RADIUS, Self::FINE_STEP_DEG),
            hours: Self::polar_table(Self::HOUR_RADIUS, Self::COARSE_STEP_DEG),
        };
        log::debug!("clock layout computed around {:?}", Self::CENTER);
        layout
    }

    fn polar_table<const N: usize>(radius: i32, step_deg: f64) -> [Point2D; N] {
        std::array::from_fn(|i| {
            let angle = (step_deg * i as f64).to_radians();
            Point2D {
                x: (Self::CENTER.x as f64 + radius as f64 * angle.cos()) as i32,
                y: (Self::CENTER.y as f64 + radius as f64 * angle.sin()) as i32,
            }
        })
    }

    pub fn second_hand(&self, second: usize) -> Point2D {
        self.ticks[second % 60]
    }

    pub fn minute_hand(&self, minute: usize) -> Point2D {
        self.minutes[minute % 60]
    }

    pub fn hour_hand(&self, hour: usize) -> Point2D {
        self.hours[hour % 12]
    }
}

impl Default for ClockLayout {
    fn default() -> Self {
        ClockLayout::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within(points: &[Point2D], radius: i32) {
        let c = ClockLayout::CENTER;
        for p in points {
            assert!((p.x - c.x).abs() <= radius && (p.y - c.y).abs() <= radius, "{:?} outside radius {}", p, radius);
            assert!(p.x >= 0 && p.x < Lcd::WIDTH as i32 && p.y >= 0 && p.y < Lcd::HEIGHT as i32);
        }
    }

    #[test]
    fn test_table_sizes_and_bounds() {
        let layout = ClockLayout::new();
        assert_eq!(layout.ticks.len(), 60);
        assert_eq!(layout.numerals.len(), 12);
        assert_eq!(layout.minutes.len(), 60);
        assert_eq!(layout.hours.len(), 12);
        assert_within(&layout.ticks, 90);
        assert_within(&layout.numerals, 80);
        assert_within(&layout.minutes, 75);
        assert_within(&layout.hours, 40);
    }

    #[test]
    fn test_cardinal_points() {
        let layout = ClockLayout::new();
        assert_eq!(ClockLayout::CENTER, Point2D::new(160, 120));
        assert_eq!(layout.ticks[0], Point2D::new(250, 120)); // 3 o'clock
        assert_eq!(layout.ticks[15], Point2D::new(160, 210)); // 6 o'clock
        assert_eq!(layout.ticks[30], Point2D::new(70, 120)); // 9 o'clock
        assert_eq!(layout.ticks[45].y, 30); // 12 o'clock
        assert!((159..=160).contains(&layout.ticks[45].x));
        assert_eq!(layout.numerals[0], Point2D::new(240, 120));
        assert_eq!(layout.minutes[0], Point2D::new(235, 120));
        assert_eq!(layout.hours[0], Point2D::new(200, 120));
        assert_eq!(layout.hours[3], Point2D::new(160, 160));
    }

    #[test]
    fn test_coarse_tables_follow_fine_angles() {
        let layout = ClockLayout::new();
        let fine: [Point2D; 60] = ClockLayout::polar_table(ClockLayout::HOUR_RADIUS, ClockLayout::FINE_STEP_DEG);
        for i in 0..12 {
            assert_eq!(layout.hours[i], fine[i * 5]);
        }
    }

    #[test]
    fn test_shared_layout_is_built_once() {
        let a: &ClockLayout = &LAYOUT;
        let b: &ClockLayout = &LAYOUT;
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, ClockLayout::new());
    }
}
