//! Display abstraction traits and shared drawing types for SimpleUI
//!
//! This crate provides:
//! - `PixelSurface` trait, the raster sink every widget draws into
//! - `Color`, a packed RGB565 value
//! - `Texture` / `TextureBuf` image descriptors and nearest-neighbour `scale`
//! - `Canvas`, an in-memory RGB565 framebuffer
//!
//! # Architecture
//!
//! The UI core never inspects pixels. It only issues bitmap and shape draw
//! calls against a `PixelSurface`. The application owns the surface and
//! blits it to the panel after each frame.
//!
//! ## Surfaces
//!
//! - **Framebuffer** (`Canvas`): off-screen buffer sized to the panel,
//!   transferred to the display by the board's driver.
//! - **Direct targets** (feature `embedded-graphics`): any
//!   `DrawTarget<Color = Rgb565>` wrapped in `GraphicsSurface`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod canvas;
pub mod color;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod surface;
pub mod texture;

// Re-export key types
pub use canvas::Canvas;
pub use color::Color;
#[cfg(feature = "embedded-graphics")]
pub use graphics::GraphicsSurface;
pub use surface::{Corners, PixelSurface, SurfaceError};
pub use texture::{scale, PixelFormat, Pixels, Texture, TextureBuf};
