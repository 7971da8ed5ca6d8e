pub mod common;
pub mod lcd;
pub mod shape;
pub mod clock;
#[cfg(feature = "simple_run")]
pub mod simple_run;

#[macro_use]
extern crate lazy_static;

pub use common::{Display, Point2D, Rgb};
pub use lcd::{color::Rgb565, Lcd};
pub use shape::LinePlotter;
pub use clock::{ClockConfig, ClockLayout, ClockRenderer, HandIndices};
