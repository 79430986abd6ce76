use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};

/// Flat list of surfaces; nearest-hit queries are a linear scan.
#[derive(Debug, Clone, Default)]
pub struct World {
    surfaces: Vec<Surface>,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new() }
    }

    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Nearest hit over all surfaces. `t_max` shrinks to the best hit so far,
    /// so a later surface only wins when it is strictly closer.
    pub fn hit_all(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.hit(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}
