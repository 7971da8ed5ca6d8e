use crate::common::{Display, Point2D};

use super::{Colors, GraphicElement};

#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point2D,
    pub radius: i32,
    colors: Colors,
}

impl Circle {
    pub fn new(center: Point2D, radius: i32, colors: Colors) -> Self {
        Circle { center, radius, colors }
    }

    fn draw_octants(&self, display: &mut dyn Display, x: i32, y: i32) {
        let Point2D { x: cx, y: cy } = self.center;
        self.draw_pixel(display, cx + x, cy + y);
        self.draw_pixel(display, cx + y, cy + x);
        self.draw_pixel(display, cx - y, cy + x);
        self.draw_pixel(display, cx - x, cy + y);
        self.draw_pixel(display, cx - x, cy - y);
        self.draw_pixel(display, cx - y, cy - x);
        self.draw_pixel(display, cx + y, cy - x);
        self.draw_pixel(display, cx + x, cy - y);
    }
}

impl GraphicElement for Circle {
    fn colors(&self) -> &Colors {
        &self.colors
    }

    fn colors_mut(&mut self) -> &mut Colors {
        &mut self.colors
    }

    /// 中点画圆, 每步计算 1/8 圆弧并对称画出其余 7 份
    fn draw(&self, display: &mut dyn Display) {
        let diameter = 2 * self.radius as i64;
        let mut x = self.radius.saturating_sub(1);
        let mut y = 0;
        let mut dx: i64 = 1;
        let mut dy: i64 = 1;
        let mut err = dx - diameter;

        while x >= y {
            self.draw_octants(display, x, y);

            if err <= 0 {
                y += 1;
                err += dy;
                dy += 2;
            }
            if err > 0 {
                x -= 1;
                dx += 2;
                err += dx - diameter;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::common::Rgb;
    use crate::lcd::tests::Recorder;

    fn ring(cx: i32, cy: i32, radius: i32) -> HashSet<(i32, i32)> {
        let mut recorder = Recorder::new();
        Circle::new(Point2D::new(cx, cy), radius, Colors::new(Rgb::WHITE, Rgb::BLACK)).draw(&mut recorder);
        recorder.point_set()
    }

    #[test]
    fn test_points_lie_on_radius() {
        for radius in 1..=100 {
            for (x, y) in ring(160, 120, radius) {
                let (a, b) = ((x - 160) as f64, (y - 120) as f64);
                let dist = (a * a + b * b).sqrt();
                assert!((dist - radius as f64).abs() <= 1.0, "({}, {}) is {} away, radius {}", x, y, dist, radius);
            }
        }
    }

    #[test]
    fn test_eight_way_symmetry() {
        for radius in [1, 2, 5, 17, 90, 94] {
            let points = ring(0, 0, radius);
            for &(a, b) in points.iter() {
                for mirrored in [(b, a), (-a, b), (a, -b), (-a, -b), (-b, a), (b, -a), (-b, -a)] {
                    assert!(points.contains(&mirrored), "radius {}: {:?} without {:?}", radius, (a, b), mirrored);
                }
            }
        }
    }

    #[test]
    fn test_axis_points() {
        let points = ring(10, 10, 5);
        // 起点 x = radius - 1
        assert!(points.contains(&(14, 10)));
        assert!(points.contains(&(10, 14)));
        assert!(points.contains(&(6, 10)));
        assert!(points.contains(&(10, 6)));
    }

    #[test]
    fn test_point_count() {
        for radius in [1, 2, 5, 17, 90, 94] {
            let mut recorder = Recorder::new();
            Circle::new(Point2D::new(160, 120), radius, Colors::new(Rgb::WHITE, Rgb::BLACK)).draw(&mut recorder);
            let expected = 8 * (radius as f64 / std::f64::consts::SQRT_2).ceil() as usize;
            assert_eq!(recorder.writes.len(), expected, "radius {}", radius);
        }
    }

    #[test]
    fn test_non_positive_radius_draws_nothing() {
        assert!(ring(0, 0, 0).is_empty());
        assert!(ring(0, 0, -3).is_empty());
        assert!(ring(0, 0, i32::MIN).is_empty());
    }

    #[test]
    fn test_concentric_rings_are_distinct() {
        let inner = ring(160, 120, 90);
        let outer = ring(160, 120, 91);
        assert!(inner.iter().any(|p| !outer.contains(p)));
    }
}
