//! Surface scattering models.
//!
//! The set of materials is closed; [`Material`] dispatches by `match`.
//! Spheres share a material through `Arc<Material>`, so one instance can
//! back any number of surfaces for the lifetime of a scene.

mod dielectric;
mod diffuse_light;
mod lambertian;
mod metal;

pub use dielectric::DielectricMaterial;
pub use diffuse_light::DiffuseLightMaterial;
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;

use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::Color;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian(LambertianMaterial),
    Metal(MetalMaterial),
    Dielectric(DielectricMaterial),
    DiffuseLight(DiffuseLightMaterial),
}

impl Material {
    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian(LambertianMaterial::new(albedo))
    }

    /// `fuzz` is clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Material {
        Material::Metal(MetalMaterial::new(albedo, fuzz))
    }

    pub fn dielectric(index_of_refraction: f64) -> Material {
        Material::Dielectric(DielectricMaterial::new(index_of_refraction))
    }

    pub fn diffuse_light(emit: Color) -> Material {
        Material::DiffuseLight(DiffuseLightMaterial::new(emit))
    }

    /// `None` means the path is absorbed at this surface.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => m.scatter(r, intersection, rng),
            Material::Metal(m) => m.scatter(r, intersection, rng),
            Material::Dielectric(m) => m.scatter(r, intersection, rng),
            Material::DiffuseLight(m) => m.scatter(r, intersection),
        }
    }

    /// Light radiated by the surface itself; black for everything but lights.
    pub fn emitted(&self) -> Color {
        match self {
            Material::DiffuseLight(m) => m.emitted(),
            _ => Color::ZERO,
        }
    }
}

impl From<LambertianMaterial> for Material {
    fn from(m: LambertianMaterial) -> Material {
        Material::Lambertian(m)
    }
}

impl From<MetalMaterial> for Material {
    fn from(m: MetalMaterial) -> Material {
        Material::Metal(m)
    }
}

impl From<DielectricMaterial> for Material {
    fn from(m: DielectricMaterial) -> Material {
        Material::Dielectric(m)
    }
}

impl From<DiffuseLightMaterial> for Material {
    fn from(m: DiffuseLightMaterial) -> Material {
        Material::DiffuseLight(m)
    }
}
