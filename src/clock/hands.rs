/// 三根指针在各自位置表中的下标.
///
/// 这是模拟的时间推进, 与真实时钟无关: 每帧秒针前进一格, 秒针走到 45 时分针前进一格,
/// 分针回到 0 时时针前进一格 (没有分针带动时针的细分).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandIndices {
    pub second: usize,
    pub minute: usize,
    pub hour: usize,
}

impl HandIndices {
    pub const SECONDS: usize = 60;
    pub const MINUTES: usize = 60;
    pub const HOURS: usize = 12;
    /// 秒针到达此下标时分针进位
    pub const MINUTE_CARRY_AT: usize = 45;

    /// 演示程序的起始位置
    pub const DEMO_START: HandIndices = HandIndices { second: 46, minute: 55, hour: 5 };

    pub fn new(second: usize, minute: usize, hour: usize) -> Self {
        HandIndices {
            second: second % Self::SECONDS,
            minute: minute % Self::MINUTES,
            hour: hour % Self::HOURS,
        }
    }

    pub fn advance(&mut self) {
        self.second = (self.second + 1) % Self::SECONDS;
        if self.second != Self::MINUTE_CARRY_AT {
            return;
        }
        self.minute = (self.minute + 1) % Self::MINUTES;
        if self.minute == 0 {
            self.hour = (self.hour + 1) % Self::HOURS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(start: HandIndices, frames: usize) -> HandIndices {
        let mut hands = start;
        for _ in 0..frames {
            hands.advance();
        }
        hands
    }

    #[test]
    fn test_literal_trace_from_zero() {
        let zero = HandIndices::default();
        let checkpoints = [
            (1, (1, 0, 0)),
            (44, (44, 0, 0)),
            (45, (45, 1, 0)),
            (46, (46, 1, 0)),
            (59, (59, 1, 0)),
            (60, (0, 1, 0)),
            (61, (1, 1, 0)),
            (104, (44, 1, 0)),
            (105, (45, 2, 0)),
            (119, (59, 2, 0)),
            (120, (0, 2, 0)),
        ];
        for (frames, (second, minute, hour)) in checkpoints {
            assert_eq!(after(zero, frames), HandIndices { second, minute, hour }, "after {} frames", frames);
        }
    }

    #[test]
    fn test_every_frame_of_first_120() {
        let mut hands = HandIndices::default();
        for frame in 1..=120usize {
            hands.advance();
            let minute = (1..=frame).filter(|n| n % 60 == 45).count();
            assert_eq!(hands, HandIndices::new(frame % 60, minute, 0), "frame {}", frame);
        }
    }

    #[test]
    fn test_minute_carry_into_hour() {
        let mut hands = HandIndices::new(44, 59, 3);
        hands.advance();
        assert_eq!(hands, HandIndices::new(45, 0, 4));

        let mut hands = HandIndices::new(44, 59, 11);
        hands.advance();
        assert_eq!(hands, HandIndices::new(45, 0, 0));
    }

    #[test]
    fn test_demo_start() {
        let hands = after(HandIndices::DEMO_START, 58);
        assert_eq!(hands, HandIndices::new(44, 55, 5));
        let hands = after(hands, 1);
        assert_eq!(hands, HandIndices::new(45, 56, 5));
    }

    #[test]
    fn test_new_wraps_out_of_range() {
        assert_eq!(HandIndices::new(60, 61, 13), HandIndices::new(0, 1, 1));
    }
}
