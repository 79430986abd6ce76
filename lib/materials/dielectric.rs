use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{rand_unit, reflect, refract, Color};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricMaterial {
    index_of_refraction: f64,
}

impl DielectricMaterial {
    pub fn new(index_of_refraction: f64) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction }
    }

    pub fn index_of_refraction(&self) -> f64 {
        self.index_of_refraction
    }

    /// η_incident / η_transmitted for a ray crossing this surface.
    pub fn refraction_ratio(&self, facing: bool) -> f64 {
        if facing { 1.0 / self.index_of_refraction } else { self.index_of_refraction }
    }

    /// Reflects on total internal reflection or when a uniform draw falls
    /// under the Schlick reflectance; refracts otherwise. Never absorbs.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<Scatter> {
        let refraction_ratio = self.refraction_ratio(intersection.facing);

        let r_direction_norm = r.direction.normalize();

        let cos_theta = intersection.normal.dot(-r_direction_norm).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let schlick_approx = reflectance(cos_theta, refraction_ratio);

        let scattered_direction = if cannot_refract || rand_unit(rng) < schlick_approx {
            reflect(r_direction_norm, intersection.normal)
        } else {
            refract(r_direction_norm, intersection.normal, refraction_ratio)
        };

        let scattered = Ray::new(intersection.p, scattered_direction);

        Some(Scatter { attenuation: Color::ONE, scattered })
    }
}

/// Schlick's approximation of the reflected fraction at a dielectric boundary.
pub fn reflectance(cos_theta: f64, refraction_ratio: f64) -> f64 {
    let r = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    return r + (1.0 - r) * (1.0 - cos_theta).powi(5);
}
