//! Parallax cloud layer.

use glam::Vec2;

use crate::consts::CLOUD_MARGIN;
use crate::platform::{AssetError, SpriteHandle, SpriteStore, Surface};
use crate::sim::entity::EntityKind;
use crate::sim::{Loopable, Rect, TickInput};

/// Number of cloud sprite slots in the ring.
const SLOTS: usize = 5;

/// Background decoration, not gameplay-colliding. A fixed ring of sprites
/// drifts left at a fraction of the world speed; when the lead sprite
/// scrolls fully off the left edge the slot assignment rotates by one and
/// the offset resets, giving infinite scroll from a finite sprite set.
#[derive(Debug)]
pub struct Clouds {
    imgs: [SpriteHandle; SLOTS],
    bounds: Rect,
    direction: Vec2,
    margin: f32,
    /// Fraction of the world scroll speed the layer moves at.
    tween: f32,
}

impl Clouds {
    pub fn new(tween: f32, sprites: &SpriteStore) -> Result<Self, AssetError> {
        // Four distinct cloud sprites, with one repeated to fill the ring.
        let imgs = [
            sprites.get("clouds0")?,
            sprites.get("clouds1")?,
            sprites.get("clouds2")?,
            sprites.get("clouds3")?,
            sprites.get("clouds2")?,
        ];

        Ok(Self {
            imgs,
            // Sized to preserve the cloud images' aspect ratio.
            bounds: Rect::new(30.0, 15.0, 200.0, 98.0),
            direction: Vec2::ZERO,
            margin: CLOUD_MARGIN,
            tween,
        })
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::Clouds
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Match the layer's drift to the current world scroll speed.
    pub fn set_relative_speed_x(&mut self, speed: f32) {
        self.direction.x = -speed * self.tween;
    }
}

impl Loopable for Clouds {
    fn update(&mut self, _input: &TickInput) {
        // Lead sprite fully off screen: rotate the ring and reset the
        // offset so the strip appears continuous.
        if self.bounds.right() < 0.0 {
            self.imgs.rotate_left(1);
            self.bounds.pos.x = self.margin;
        }

        self.bounds.pos += self.direction;
    }

    fn render(&self, gfx: &mut dyn Surface) {
        let Rect { pos, size } = self.bounds;
        for (i, img) in self.imgs.iter().enumerate() {
            let x = pos.x + i as f32 * (size.x + self.margin);
            gfx.draw_image(*img, Rect::new(x, pos.y, size.x, size.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sprites() -> SpriteStore {
        let mut store = SpriteStore::new();
        let handles: Vec<SpriteHandle> = (10..14).map(SpriteHandle).collect();
        store.register_class("clouds", &handles);
        store
    }

    #[test]
    fn test_scrolls_left_at_tween_speed() {
        let mut clouds = Clouds::new(0.1, &test_sprites()).unwrap();
        clouds.set_relative_speed_x(5.0);

        let x0 = clouds.bounds().pos.x;
        clouds.update(&TickInput::default());
        assert_eq!(clouds.bounds().pos.x, x0 - 0.5);
    }

    #[test]
    fn test_rotates_when_lead_sprite_exits() {
        let mut clouds = Clouds::new(0.1, &test_sprites()).unwrap();
        clouds.set_relative_speed_x(5.0);
        let lead = clouds.imgs[0];

        // Push the lead sprite fully past the left edge.
        clouds.bounds.pos.x = -clouds.bounds.size.x - 1.0;
        clouds.update(&TickInput::default());

        assert_eq!(clouds.imgs[SLOTS - 1], lead);
        // Offset reset to the margin (plus one tick of drift).
        assert_eq!(clouds.bounds().pos.x, CLOUD_MARGIN - 0.5);
    }

    #[test]
    fn test_speed_tracks_difficulty() {
        let mut clouds = Clouds::new(0.1, &test_sprites()).unwrap();
        clouds.set_relative_speed_x(10.0);
        assert_eq!(clouds.direction.x, -1.0);
        clouds.set_relative_speed_x(15.0);
        assert_eq!(clouds.direction.x, -1.5);
    }
}
