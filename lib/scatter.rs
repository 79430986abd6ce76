use crate::ray::Ray;
use crate::util::Color;

/// A surface's decision to continue a path: the continuation ray and the
/// per-channel factor applied to whatever light it gathers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}
