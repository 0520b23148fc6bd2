use image::{DynamicImage, RgbaImage};
use log::{debug, trace};

use crate::{noise::NoiseSource, pixel::Pixel};

/// How the add-or-subtract decision is made for each channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    /// Heads and tails are equally likely.
    #[default]
    Fair,
    /// Always heads, so channels only ever increase. Matches the classic imagefry output.
    AlwaysHeads,
}

/// What happens when a step would leave `0..=255`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Clamp,
    Wrap,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FryOptions {
    pub coin: Coin,
    pub overflow: Overflow,
}
impl FryOptions {
    pub const CLASSIC: Self = Self {
        coin: Coin::AlwaysHeads,
        overflow: Overflow::Wrap,
    };

    fn perturb<N: NoiseSource>(&self, value: u8, noise: &mut N) -> u8 {
        let heads = match self.coin {
            Coin::Fair => noise.flip(),
            Coin::AlwaysHeads => true,
        };
        let step = noise.step();
        match (self.overflow, heads) {
            (Overflow::Clamp, true) => value.saturating_add(step),
            (Overflow::Clamp, false) => value.saturating_sub(step),
            (Overflow::Wrap, true) => value.wrapping_add(step),
            (Overflow::Wrap, false) => value.wrapping_sub(step),
        }
    }
}

/// Repeatedly nudges every color channel of an image by a small random amount.
pub struct PixelFryer<N> {
    options: FryOptions,
    noise: N,
}

impl<N: NoiseSource> PixelFryer<N> {
    pub fn new(noise: N) -> Self {
        Self {
            options: FryOptions::default(),
            noise,
        }
    }

    pub fn with_options(mut self, options: FryOptions) -> Self {
        self.options = options;
        self
    }

    /// Copies `source` into a fresh RGBA buffer and runs `iterations` passes over it.
    pub fn fry(&mut self, source: &DynamicImage, iterations: u32) -> RgbaImage {
        let mut image = source.to_rgba8();
        debug!(
            "frying {}x{} image, {} passes, {:?}",
            image.width(),
            image.height(),
            iterations,
            self.options
        );
        for pass in 0..iterations {
            trace!("pass {}", pass + 1);
            self.fry_pass(&mut image);
        }
        image
    }

    /// One row-major pass over every pixel of `image`.
    pub fn fry_pass(&mut self, image: &mut RgbaImage) {
        let Self { options, noise } = self;
        for pixel in image.pixels_mut() {
            let fried = Pixel::from(*pixel).map_colors(|c| options.perturb(c, &mut *noise));
            *pixel = fried.into();
        }
    }
}
