use image::Rgba;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}
impl Pixel {
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Applies `f` to the three color channels, leaving alpha untouched.
    pub fn map_colors(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
            alpha: self.alpha,
        }
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(Rgba([red, green, blue, alpha]): Rgba<u8>) -> Self {
        Self::new(red, green, blue, alpha)
    }
}
impl From<Pixel> for Rgba<u8> {
    fn from(pixel: Pixel) -> Self {
        Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
    }
}
