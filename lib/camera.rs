use glam::*;

use crate::ray::Ray;
use crate::util::Point3;

/// Viewport height in world units; the plane sits one unit in front of the origin.
const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

/// Fixed pinhole at the world origin looking down -Z.
pub struct Camera {
    pub origin: Point3,
    llc: Point3,
    horizontal: DVec3,
    vertical: DVec3,
}

impl Camera {
    pub fn new(aspect_ratio: f64) -> Camera {
        let viewport_w = VIEWPORT_HEIGHT * aspect_ratio;

        let origin = Point3::ZERO;
        let horizontal = DVec3::new(viewport_w, 0.0, 0.0);
        let vertical = DVec3::new(0.0, VIEWPORT_HEIGHT, 0.0);

        let llc = origin - (horizontal * 0.5) - (vertical * 0.5) - DVec3::new(0.0, 0.0, FOCAL_LENGTH);

        return Camera { origin, llc, horizontal, vertical };
    }

    /// Ray through viewport coordinates `(s, t)`, `(0, 0)` being the lower-left corner.
    pub fn create_ray(&self, s: f64, t: f64) -> Ray {
        return Ray::new(self.origin, self.llc + s * self.horizontal + t * self.vertical - self.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_is_two_units_tall_one_unit_away() {
        let aspect: f64 = 16.0 / 9.0;
        let camera = Camera::new(aspect);

        let center = camera.create_ray(0.5, 0.5);
        assert_eq!(center.origin, Point3::ZERO);
        assert!(center.direction.abs_diff_eq(DVec3::new(0.0, 0.0, -1.0), 1e-12));

        let upper_left = camera.create_ray(0.0, 1.0);
        assert!(upper_left.direction.abs_diff_eq(DVec3::new(-aspect, 1.0, -1.0), 1e-12));

        let lower_right = camera.create_ray(1.0, 0.0);
        assert!(lower_right.direction.abs_diff_eq(DVec3::new(aspect, -1.0, -1.0), 1e-12));
    }

    #[test]
    fn top_row_rays_have_unit_vertical_component() {
        let camera = Camera::new(2.0);
        for s in [0.0, 0.3, 1.0] {
            assert_eq!(camera.create_ray(s, 1.0).direction.y, 1.0);
            assert_eq!(camera.create_ray(s, 0.0).direction.y, -1.0);
        }
    }
}
