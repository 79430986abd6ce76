use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{is_near_zero, rand_in_hemisphere, Color};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertianMaterial {
    albedo: Color,
}

impl LambertianMaterial {
    pub fn new(albedo: Color) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Never absorbs; the incoming direction is irrelevant.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        _r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<Scatter> {
        let mut scattered_direction = intersection.normal + rand_in_hemisphere(intersection.normal, rng);

        if is_near_zero(scattered_direction) {
            scattered_direction = intersection.normal
        }

        let scattered = Ray::new(intersection.p, scattered_direction);

        return Some(Scatter { attenuation: self.albedo, scattered });
    }
}
