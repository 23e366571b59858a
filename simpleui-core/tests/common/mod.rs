//! Shared fixtures for the scenario tests

#![allow(dead_code)]

use simpleui_display::{Color, PixelSurface, SurfaceError, Texture};

/// One texture draw seen by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Surface that records texture draws and counts everything else
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub blits: Vec<Blit>,
    pub pixels: usize,
    /// Make every draw call fail
    pub fail: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_blit(&self) -> Option<Blit> {
        self.blits.last().copied()
    }

    pub fn clear(&mut self) {
        self.blits.clear();
        self.pixels = 0;
    }
}

impl PixelSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (128, 64)
    }

    fn draw_pixel(&mut self, _x: i32, _y: i32, _color: Color) -> Result<(), SurfaceError> {
        if self.fail {
            return Err(SurfaceError::Backend);
        }
        self.pixels += 1;
        Ok(())
    }

    fn draw_texture(
        &mut self,
        x: i32,
        y: i32,
        texture: &Texture<'_>,
        _mono_color: Color,
    ) -> Result<(), SurfaceError> {
        if self.fail {
            return Err(SurfaceError::Backend);
        }
        self.blits.push(Blit {
            x,
            y,
            width: texture.width,
            height: texture.height,
        });
        Ok(())
    }
}

pub const MS: u64 = 1_000;

/// 16x16 all-set monochrome icon
pub static SMALL_ICON: [u8; 32] = [0xFF; 32];

/// 32x32 all-set monochrome icon
pub static BIG_ICON: [u8; 128] = [0xFF; 128];

pub fn small_icon() -> Texture<'static> {
    Texture::mono(16, 16, &SMALL_ICON)
}

pub fn big_icon() -> Texture<'static> {
    Texture::mono(32, 32, &BIG_ICON)
}
