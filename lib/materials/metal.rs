use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{rand_in_unit_sphere, reflect, Color};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalMaterial {
    albedo: Color,
    fuzz: f64,
}

impl MetalMaterial {
    pub fn new(albedo: Color, fuzz: f64) -> MetalMaterial {
        MetalMaterial { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }

    /// Mirror reflection perturbed by `fuzz`. Absorbs when the perturbed
    /// direction ends up on or below the surface (`dot <= 0`).
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<Scatter> {
        let reflected_direction = reflect(r.direction.normalize(), intersection.normal);
        let scattered_direction = reflected_direction + rand_in_unit_sphere(rng) * self.fuzz;
        let scattered = Ray::new(intersection.p, scattered_direction);

        return if scattered.direction.dot(intersection.normal) > 0.0 {
            Some(Scatter { attenuation: self.albedo, scattered })
        } else {
            None
        };
    }
}
