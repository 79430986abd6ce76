use glam::*;
use rand::Rng;
use rand_distr::*;

/// Positions and free vectors share one representation.
pub type Point3 = DVec3;

/// Linear RGB. Channels may exceed 1.0 until output clamping.
pub type Color = DVec3;

pub fn is_near_zero(v: DVec3) -> bool {
    return v.abs_diff_eq(DVec3::ZERO, 1e-8);
}

/// Uniform real in [0, 1).
pub fn rand_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    return rng.gen::<f64>();
}

/// Uniform point strictly inside the unit ball.
///
/// `UnitBall` rejection-samples [-1, 1]^3 until `length² < 1`, so this only
/// loops forever if `rng` never leaves the cube corners.
pub fn rand_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    return DVec3::from(UnitBall.sample(rng));
}

/// Sample of the unit ball flipped, if needed, into the hemisphere around `normal`.
pub fn rand_in_hemisphere<R: Rng + ?Sized>(normal: DVec3, rng: &mut R) -> DVec3 {
    let v = rand_in_unit_sphere(rng);
    return if v.dot(normal) > 0.0 { v } else { -v };
}

pub fn reflect(v: DVec3, normal: DVec3) -> DVec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// Snell refraction of unit vector `v` through a surface with unit `normal`
/// facing against `v`; `ratio` is η_incident / η_transmitted.
pub fn refract(v: DVec3, normal: DVec3, ratio: f64) -> DVec3 {
    let cos_theta = (-v).dot(normal).min(1.0);
    let r_perp = (v + cos_theta * normal) * ratio;
    let r_para = -(1.0 - r_perp.length_squared()).abs().sqrt() * normal;
    return r_perp + r_para;
}
