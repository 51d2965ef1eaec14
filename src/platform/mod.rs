//! Host collaborator surfaces.
//!
//! The simulation never talks to a concrete windowing or graphics stack.
//! The host hands it a [`Surface`] to draw on and a pre-populated
//! [`SpriteStore`] of opaque image handles; both are fixed interfaces the
//! core calls into.

use std::collections::HashMap;

use glam::Vec2;
use thiserror::Error;

use crate::sim::Rect;

/// Solid RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0x8c, 0x00, 0x1a);
    pub const GREEN: Color = Color::rgb(0x7f, 0xb8, 0x00);
    pub const BLUE: Color = Color::rgb(0x0d, 0x2c, 0x54);
    pub const LIGHT_BLUE: Color = Color::rgb(0x00, 0xa6, 0xed);
    pub const DARK_BLUE: Color = Color::rgb(0x00, 0x1d, 0x4a);
    pub const CYAN: Color = Color::rgb(0x1d, 0xd3, 0xb0);
    pub const ORANGE: Color = Color::rgb(0xec, 0xa4, 0x00);
    pub const PURPLE: Color = Color::rgb(0x34, 0x00, 0x68);
    pub const PINK: Color = Color::rgb(0xed, 0x25, 0x4e);
    pub const GREY: Color = Color::rgb(0x46, 0x53, 0x62);
    pub const BROWN: Color = Color::rgb(0x5c, 0x40, 0x33);
}

/// Opaque handle to a host-owned image. The host decides what it maps to;
/// the simulation only stores and passes it back when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

/// A missing sprite is a content/config bug, not a runtime condition to
/// recover from; lookups fail explicitly so startup can fail fast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("sprite not registered: {key}")]
    NotFound { key: String },
}

/// Key-value registry of sprite handles, populated by the host before the
/// core starts. Lookups for known keys are infallible after population.
#[derive(Debug, Default)]
pub struct SpriteStore {
    sprites: HashMap<String, SpriteHandle>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single sprite under `key`.
    pub fn register(&mut self, key: impl Into<String>, handle: SpriteHandle) {
        let _ = self.sprites.insert(key.into(), handle);
    }

    /// Register a family of sprites under `class0..classN`, in order.
    pub fn register_class(&mut self, class: &str, handles: &[SpriteHandle]) {
        for (i, handle) in handles.iter().enumerate() {
            self.register(format!("{class}{i}"), *handle);
        }
    }

    pub fn get(&self, key: &str) -> Result<SpriteHandle, AssetError> {
        self.sprites
            .get(key)
            .copied()
            .ok_or_else(|| AssetError::NotFound {
                key: key.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Drawing operations the host must provide. One instance per window; the
/// screen size is fixed for the session once read.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Clear the whole screen to a solid color.
    fn fill_background(&mut self, color: Color);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn draw_rect_outline(&mut self, rect: Rect, color: Color, stroke: f32);

    /// Blit a sprite scaled into `rect`.
    fn draw_image(&mut self, sprite: SpriteHandle, rect: Rect);

    /// Draw a line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color);
}

/// Surface that swallows every draw call. Used by the headless demo bin and
/// by tests that exercise render paths without a window.
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    pub width: f32,
    pub height: f32,
}

impl NullSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Surface for NullSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_background(&mut self, _color: Color) {}

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}

    fn draw_rect_outline(&mut self, _rect: Rect, _color: Color, _stroke: f32) {}

    fn draw_image(&mut self, _sprite: SpriteHandle, _rect: Rect) {}

    fn draw_text(&mut self, _pos: Vec2, _text: &str, _color: Color) {}
}
