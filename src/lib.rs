pub mod cli;
pub mod codec;
pub mod format;
pub mod fry;
pub mod noise;
mod pixel;

pub use format::ImageKind;
pub use fry::{Coin, FryOptions, Overflow, PixelFryer};
pub use noise::{NoiseSource, RngNoise};
pub use pixel::Pixel;
