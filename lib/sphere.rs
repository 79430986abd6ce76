use std::sync::Arc;

use crate::materials::Material;
use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use crate::util::Point3;

#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    radius_squared: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Radius is not validated here; a non-positive radius yields NaN-laden hits, not a panic.
    pub fn new(center: Point3, radius: f64, material: Arc<Material>) -> Sphere {
        return Sphere { center, radius, radius_squared: radius * radius, material };
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Solves `t²(b·b) + 2t b·(A−C) + (A−C)·(A−C) − r² = 0` and keeps the
    /// smaller root strictly inside `(t_min, t_max)`.
    pub fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius_squared;

        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = (-half_b - discriminant_sqrt) / a;
        let root_upper = (-half_b + discriminant_sqrt) / a;

        let surrounds = |t: f64| t_min < t && t < t_max;

        let t = if surrounds(root_lower) {
            root_lower
        } else if surrounds(root_upper) {
            root_upper
        } else {
            return None;
        };

        let outward_normal = (r.at(t) - self.center).normalize();

        return Some(SurfaceIntersection::new(r, t, outward_normal, self.material.clone()));
    }
}
