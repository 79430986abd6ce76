use std::sync::Arc;

use crate::materials::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::util::Point3;
use glam::*;

/// Lower bound for accepted hits; keeps bounced rays from re-hitting the surface they left.
pub const T_MIN: f64 = 0.001;

/// Nearest hit of a ray against a surface.
///
/// `normal` always points against the incoming ray. `facing` records the true
/// geometric side: true when the ray arrived from outside the surface.
#[derive(Debug, Clone)]
pub struct SurfaceIntersection {
    pub p: Point3,
    pub normal: DVec3,
    pub facing: bool,
    pub material: Arc<Material>,
    pub t: f64,
}

impl SurfaceIntersection {
    /// Builds a record from the outward normal, flipping it when the ray is inside.
    pub fn new(r: &Ray, t: f64, outward_normal: DVec3, material: Arc<Material>) -> SurfaceIntersection {
        let facing = r.direction.dot(outward_normal) < 0.0;
        let normal = if facing { outward_normal } else { -outward_normal };

        SurfaceIntersection { p: r.at(t), normal, facing, material, t }
    }
}

/// Every geometry kind a scene can hold.
#[derive(Debug, Clone)]
pub enum Surface {
    Sphere(Sphere),
}

impl Surface {
    /// Closest intersection with `t` strictly inside `(t_min, t_max)`.
    pub fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(r, t_min, t_max),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Surface {
        Surface::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Color;

    #[test]
    fn normal_flips_when_ray_comes_from_inside() {
        let material = Arc::new(Material::lambertian(Color::splat(0.5)));
        let outward = DVec3::Z;

        let outside = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, -1.0));
        let hit = SurfaceIntersection::new(&outside, 4.0, outward, material.clone());
        assert!(hit.facing);
        assert_eq!(hit.normal, outward);
        assert_eq!(hit.p, DVec3::new(0.0, 0.0, 1.0));

        let inside = Ray::new(DVec3::ZERO, DVec3::Z);
        let hit = SurfaceIntersection::new(&inside, 1.0, outward, material);
        assert!(!hit.facing);
        assert_eq!(hit.normal, -outward);
    }
}
