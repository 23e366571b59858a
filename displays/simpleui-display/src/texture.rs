//! Image descriptors and nearest-neighbour scaling
//!
//! A `Texture` borrows pixel data (usually from flash); `TextureBuf` owns
//! it, which is what `scale` produces.

use alloc::vec;
use alloc::vec::Vec;

/// Pixel encoding of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 1 bit per pixel, MSB first, rows padded to whole bytes
    Mono,
    /// 16-bit RGB565, row-major
    Rgb565,
}

/// Borrowed pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixels<'a> {
    Mono(&'a [u8]),
    Rgb565(&'a [u16]),
}

/// Borrowed image: dimensions plus pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture<'a> {
    pub width: u32,
    pub height: u32,
    pixels: Pixels<'a>,
}

impl<'a> Texture<'a> {
    /// Monochrome texture over a packed bit buffer
    pub const fn mono(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels: Pixels::Mono(data),
        }
    }

    /// Colour texture over RGB565 words
    pub const fn rgb565(width: u32, height: u32, data: &'a [u16]) -> Self {
        Self {
            width,
            height,
            pixels: Pixels::Rgb565(data),
        }
    }

    pub const fn pixels(&self) -> Pixels<'a> {
        self.pixels
    }

    pub const fn format(&self) -> PixelFormat {
        match self.pixels {
            Pixels::Mono(_) => PixelFormat::Mono,
            Pixels::Rgb565(_) => PixelFormat::Rgb565,
        }
    }

    /// Whether the backing slice covers the declared dimensions
    pub fn is_complete(&self) -> bool {
        match self.pixels {
            Pixels::Mono(data) => data.len() >= mono_len(self.width, self.height),
            Pixels::Rgb565(data) => data.len() >= rgb_len(self.width, self.height),
        }
    }
}

/// Bytes needed for a packed monochrome image
pub const fn mono_len(width: u32, height: u32) -> usize {
    width.div_ceil(8) as usize * height as usize
}

/// Words needed for an RGB565 image
pub const fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OwnedPixels {
    Mono(Vec<u8>),
    Rgb565(Vec<u16>),
}

/// Owned image, the output of `scale`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuf {
    pub width: u32,
    pub height: u32,
    pixels: OwnedPixels,
}

impl TextureBuf {
    pub fn as_texture(&self) -> Texture<'_> {
        match &self.pixels {
            OwnedPixels::Mono(data) => Texture::mono(self.width, self.height, data),
            OwnedPixels::Rgb565(data) => Texture::rgb565(self.width, self.height, data),
        }
    }

    fn empty(format: PixelFormat) -> Self {
        let pixels = match format {
            PixelFormat::Mono => OwnedPixels::Mono(Vec::new()),
            PixelFormat::Rgb565 => OwnedPixels::Rgb565(Vec::new()),
        };
        Self {
            width: 0,
            height: 0,
            pixels,
        }
    }
}

/// Dimension after scaling, truncated
pub fn scaled_dim(dim: u32, factor: f32) -> u32 {
    if factor <= 0.0 {
        return 0;
    }
    (dim as f32 * factor) as u32
}

/// Nearest-neighbour rescale
///
/// Output size is `(w * factor, h * factor)` truncated. Each destination
/// pixel samples source `(x / factor, y / factor)`, clamped to the source
/// bounds. A non-positive factor yields an empty image.
pub fn scale(texture: &Texture<'_>, factor: f32) -> TextureBuf {
    let width = scaled_dim(texture.width, factor);
    let height = scaled_dim(texture.height, factor);
    if width == 0 || height == 0 || !texture.is_complete() {
        return TextureBuf::empty(texture.format());
    }

    let inv = 1.0 / factor;
    let src_x = |x: u32| ((x as f32 * inv) as u32).min(texture.width - 1) as usize;
    let src_y = |y: u32| ((y as f32 * inv) as u32).min(texture.height - 1) as usize;

    let pixels = match texture.pixels() {
        Pixels::Mono(data) => {
            let src_stride = texture.width.div_ceil(8) as usize;
            let dst_stride = width.div_ceil(8) as usize;
            let mut out = vec![0u8; mono_len(width, height)];
            for y in 0..height {
                let sy = src_y(y);
                for x in 0..width {
                    let sx = src_x(x);
                    let bit = data[sy * src_stride + sx / 8] & (0x80 >> (sx % 8));
                    if bit != 0 {
                        let xi = x as usize;
                        out[y as usize * dst_stride + xi / 8] |= 0x80 >> (xi % 8);
                    }
                }
            }
            OwnedPixels::Mono(out)
        }
        Pixels::Rgb565(data) => {
            let src_stride = texture.width as usize;
            let mut out = Vec::with_capacity(rgb_len(width, height));
            for y in 0..height {
                let sy = src_y(y);
                for x in 0..width {
                    out.push(data[sy * src_stride + src_x(x)]);
                }
            }
            OwnedPixels::Rgb565(out)
        }
    };

    TextureBuf {
        width,
        height,
        pixels,
    }
}
