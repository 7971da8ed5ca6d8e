use bitflags::bitflags;

use crate::common::Rgb;

bitflags! {
    /// RGB565 中各通道所占的位
    pub struct Channel: u16 {
        const BLUE = 0b0000_0000_0001_1111;
        const GREEN = 0b0000_0111_1110_0000;
        const RED = 0b1111_1000_0000_0000;
    }
}

/// LCD 使用的 16 bit 颜色: RRRRRGGG GGGBBBBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(u16);

impl Rgb565 {
    const GREEN_SHIFT: u16 = 5;
    const RED_SHIFT: u16 = 11;

    /// 8 bit 通道截断为 5-6-5
    pub const fn encode(color: Rgb) -> Self {
        let r = (color.r >> 3) as u16;
        let g = (color.g >> 2) as u16;
        let b = (color.b >> 3) as u16;
        Rgb565(b | (g << Self::GREEN_SHIFT) | (r << Self::RED_SHIFT))
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// 还原为 8 bit 通道, 低位补 0
    pub fn decode(&self) -> Rgb {
        let r = (self.channel(Channel::RED) >> Self::RED_SHIFT) << 3;
        let g = (self.channel(Channel::GREEN) >> Self::GREEN_SHIFT) << 2;
        let b = self.channel(Channel::BLUE) << 3;
        Rgb::new(r as u8, g as u8, b as u8)
    }

    fn channel(&self, channel: Channel) -> u16 {
        self.0 & channel.bits()
    }
}
