//! Recursive path tracing.
//!
//! A path bounces until it escapes to the background, lands on a surface
//! that absorbs it, or runs past [`MAX_DEPTH`] bounces.

use crate::ray::Ray;
use crate::surface::T_MIN;
use crate::util::Color;
use crate::world::World;
use rand::Rng;

/// Bounces after which a path is treated as fully absorbed.
pub const MAX_DEPTH: u32 = 50;

/// Vertical gradient lighting every ray that escapes the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub top: Color,
    pub bottom: Color,
}

impl Background {
    pub const fn new(top: Color, bottom: Color) -> Background {
        Background { top, bottom }
    }

    /// Blends by the raw vertical direction component, `t = 0.5 * (y + 1)`.
    /// Directions are not normalized, so `t` leaves [0, 1] for steep rays.
    pub fn color(&self, r: &Ray) -> Color {
        let t = 0.5 * (r.direction.y + 1.0);

        return Color::lerp(self.bottom, self.top, t);
    }
}

impl Default for Background {
    fn default() -> Background {
        Background::new(Color::new(0.5, 0.7, 1.0), Color::new(1.0, 1.0, 1.0))
    }
}

/// Radiance arriving along `r`, with `depth` bounces already taken.
///
/// Each bounce contributes `emitted + attenuation * ray_color(scattered, depth + 1)`.
pub fn ray_color<R: Rng + ?Sized>(
    r: &Ray,
    world: &World,
    depth: u32,
    background: &Background,
    rng: &mut R,
) -> Color {
    if depth > MAX_DEPTH {
        return Color::ZERO;
    }

    let intersection = match world.hit_all(r, T_MIN, f64::INFINITY) {
        Some(intersection) => intersection,
        None => return background.color(r),
    };

    let emitted = intersection.material.emitted();

    return match intersection.material.scatter(r, &intersection, rng) {
        Some(s) => emitted + s.attenuation * ray_color(&s.scattered, world, depth + 1, background, rng),
        None => emitted,
    };
}
