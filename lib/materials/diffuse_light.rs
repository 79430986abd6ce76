use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::Color;

/// Emitter. Channels above 1.0 are kept as-is; clamping happens at output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuseLightMaterial {
    emit: Color,
}

impl DiffuseLightMaterial {
    pub fn new(emit: Color) -> DiffuseLightMaterial {
        DiffuseLightMaterial { emit }
    }

    pub fn scatter(&self, _r: &Ray, _intersection: &SurfaceIntersection) -> Option<Scatter> {
        None
    }

    pub fn emitted(&self) -> Color {
        self.emit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;
    use glam::DVec3;
    use std::sync::Arc;

    #[test]
    fn light_never_scatters_and_keeps_overbright_emission() {
        let emit = Color::new(7.5, 1.25, 0.0);
        let light = DiffuseLightMaterial::new(emit);
        let r = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let hit = SurfaceIntersection::new(&r, 1.0, DVec3::Z, Arc::new(Material::from(light)));

        assert!(light.scatter(&r, &hit).is_none());
        assert_eq!(light.emitted(), emit);
        assert_eq!(hit.material.emitted(), emit);
    }
}
