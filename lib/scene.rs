//! Text scene descriptions.
//!
//! One record per line, whitespace separated. The first token of every
//! line is a free-form label and is ignored.
//!
//! ```text
//! image    <samples_per_pixel> <image_width>
//! sky      <top r g b> <bottom r g b>
//! <label>  <cx> <cy> <cz> <radius> LAMBERTIAN <r g b>
//! <label>  <cx> <cy> <cz> <radius> METAL      <r g b> <fuzz>
//! <label>  <cx> <cy> <cz> <radius> DIELECTRIC <index_of_refraction>
//! <label>  <cx> <cy> <cz> <radius> LIGHT      <r g b>
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Material names
//! are case-insensitive.

use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use glam::DVec3;
use log::{debug, warn};
use thiserror::Error;

use crate::integrator::Background;
use crate::materials::Material;
use crate::sphere::Sphere;
use crate::util::Color;
use crate::world::World;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing {0} line")]
    MissingHeader(&'static str),

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingField { line: usize, expected: usize, found: usize },

    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: unknown material `{name}`")]
    UnknownMaterial { line: usize, name: String },

    #[error("line {line}: {message}")]
    Invalid { line: usize, message: String },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Everything a render needs from a scene file.
#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub samples_per_pixel: u32,
    pub image_width: u32,
    pub background: Background,
    pub world: World,
}

impl FromStr for SceneDescription {
    type Err = SceneError;

    fn from_str(s: &str) -> SceneResult<SceneDescription> {
        parse_scene(s)
    }
}

pub fn read_scene<R: Read>(mut reader: R) -> SceneResult<SceneDescription> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_scene(&text)
}

pub fn parse_scene(text: &str) -> SceneResult<SceneDescription> {
    let mut records = text
        .lines()
        .enumerate()
        .map(|(i, l)| Record::new(i + 1, l))
        .filter(|r| !r.tokens.is_empty() && !r.tokens[0].starts_with('#'));

    let image = records.next().ok_or(SceneError::MissingHeader("image settings"))?;
    image.require(3)?;
    let samples_per_pixel = image.positive_int(1)?;
    let image_width = image.positive_int(2)?;
    image.warn_trailing(3);

    let sky = records.next().ok_or(SceneError::MissingHeader("background"))?;
    sky.require(7)?;
    let background = Background::new(sky.color(1)?, sky.color(4)?);
    sky.warn_trailing(7);

    let mut world = World::new();
    for record in records {
        world.add(record.sphere()?);
    }

    debug!(
        "parsed scene: {} spheres, {} spp, width {}",
        world.len(),
        samples_per_pixel,
        image_width
    );

    Ok(SceneDescription { samples_per_pixel, image_width, background, world })
}

struct Record<'a> {
    line: usize,
    tokens: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn new(line: usize, text: &'a str) -> Record<'a> {
        Record { line, tokens: text.split_whitespace().collect() }
    }

    fn require(&self, expected: usize) -> SceneResult<()> {
        if self.tokens.len() < expected {
            return Err(SceneError::MissingField { line: self.line, expected, found: self.tokens.len() });
        }
        Ok(())
    }

    fn warn_trailing(&self, used: usize) {
        if self.tokens.len() > used {
            warn!("line {}: ignoring trailing fields {:?}", self.line, &self.tokens[used..]);
        }
    }

    fn number(&self, index: usize) -> SceneResult<f64> {
        let token = self.tokens[index];
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SceneError::InvalidNumber { line: self.line, token: token.to_string() }),
        }
    }

    fn positive_int(&self, index: usize) -> SceneResult<u32> {
        let token = self.tokens[index];
        let value = token
            .parse::<u32>()
            .map_err(|_| SceneError::InvalidNumber { line: self.line, token: token.to_string() })?;
        if value == 0 {
            return Err(self.invalid(format!("`{}` must be greater than zero", token)));
        }
        Ok(value)
    }

    fn color(&self, start: usize) -> SceneResult<Color> {
        Ok(Color::new(self.number(start)?, self.number(start + 1)?, self.number(start + 2)?))
    }

    fn invalid(&self, message: String) -> SceneError {
        SceneError::Invalid { line: self.line, message }
    }

    fn sphere(&self) -> SceneResult<Sphere> {
        self.require(6)?;

        let center = DVec3::new(self.number(1)?, self.number(2)?, self.number(3)?);
        let radius = self.number(4)?;
        if radius <= 0.0 {
            return Err(self.invalid(format!("sphere radius must be positive, got {}", radius)));
        }

        let material = self.material(5)?;

        Ok(Sphere::new(center, radius, Arc::new(material)))
    }

    fn material(&self, kind: usize) -> SceneResult<Material> {
        let name = self.tokens[kind];
        let params = kind + 1;

        let (material, used) = match name.to_ascii_uppercase().as_str() {
            "LAMBERTIAN" => {
                self.require(params + 3)?;
                (Material::lambertian(self.color(params)?), params + 3)
            }
            "METAL" => {
                self.require(params + 4)?;
                let fuzz = self.number(params + 3)?;
                if !(0.0..=1.0).contains(&fuzz) {
                    warn!("line {}: metal fuzz {} clamped to [0, 1]", self.line, fuzz);
                }
                (Material::metal(self.color(params)?, fuzz), params + 4)
            }
            "DIELECTRIC" => {
                self.require(params + 1)?;
                let index_of_refraction = self.number(params)?;
                if index_of_refraction <= 0.0 {
                    return Err(self.invalid(format!(
                        "refractive index must be positive, got {}",
                        index_of_refraction
                    )));
                }
                (Material::dielectric(index_of_refraction), params + 1)
            }
            "LIGHT" => {
                self.require(params + 3)?;
                (Material::diffuse_light(self.color(params)?), params + 3)
            }
            _ => {
                return Err(SceneError::UnknownMaterial { line: self.line, name: name.to_string() });
            }
        };

        self.warn_trailing(used);
        Ok(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{DielectricMaterial, MetalMaterial};
    use crate::surface::Surface;

    const SCENE: &str = "\
image 10 400
sky 0.5 0.7 1.0 1.0 1.0 1.0

# ground and a lamp
ground 0 -100.5 -1 100 LAMBERTIAN 0.8 0.8 0.0
ball   0 0 -1 0.5 metal 0.7 0.6 0.5 0.3
glass  -1 0 -1 0.5 Dielectric 1.5
lamp   1 2 -1 0.25 LIGHT 4 4 4
";

    fn spheres(scene: &SceneDescription) -> Vec<&Sphere> {
        scene.world.surfaces().iter().map(|s| match s {
            Surface::Sphere(sphere) => sphere,
        }).collect()
    }

    #[test]
    fn parses_headers_and_every_material_kind() {
        let scene: SceneDescription = SCENE.parse().unwrap();

        assert_eq!(scene.samples_per_pixel, 10);
        assert_eq!(scene.image_width, 400);
        assert_eq!(scene.background.top, Color::new(0.5, 0.7, 1.0));
        assert_eq!(scene.background.bottom, Color::ONE);

        let spheres = spheres(&scene);
        assert_eq!(spheres.len(), 4);

        assert_eq!(spheres[0].center(), DVec3::new(0.0, -100.5, -1.0));
        assert_eq!(spheres[0].radius(), 100.0);
        assert_eq!(**spheres[0].material(), Material::lambertian(Color::new(0.8, 0.8, 0.0)));
        assert_eq!(
            **spheres[1].material(),
            Material::Metal(MetalMaterial::new(Color::new(0.7, 0.6, 0.5), 0.3))
        );
        assert_eq!(**spheres[2].material(), Material::Dielectric(DielectricMaterial::new(1.5)));
        assert_eq!(spheres[3].material().emitted(), Color::splat(4.0));
    }

    #[test]
    fn bundled_scene_parses() {
        let scene = parse_scene(include_str!("../scenes/lit_spheres.txt")).unwrap();
        assert_eq!(scene.samples_per_pixel, 50);
        assert_eq!(scene.world.len(), 5);
    }

    #[test]
    fn reads_from_any_reader() {
        let scene = read_scene(SCENE.as_bytes()).unwrap();
        assert_eq!(scene.world.len(), 4);
    }

    #[test]
    fn header_only_scene_is_empty() {
        let scene = parse_scene("image 1 16\nsky 1 1 1 0 0 0\n").unwrap();
        assert!(scene.world.is_empty());
    }

    #[test]
    fn unknown_material_is_rejected() {
        let err = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 0.5 VELVET 1 1 1\n").unwrap_err();
        match err {
            SceneError::UnknownMaterial { line, name } => {
                assert_eq!(line, 3);
                assert_eq!(name, "VELVET");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_headers_are_reported() {
        assert!(matches!(parse_scene(""), Err(SceneError::MissingHeader(_))));
        assert!(matches!(parse_scene("# nothing\n\nimage 1 16\n"), Err(SceneError::MissingHeader("background"))));
    }

    #[test]
    fn short_lines_are_reported_with_line_number() {
        let err = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 0.5 METAL 1 1 1\n").unwrap_err();
        assert!(matches!(err, SceneError::MissingField { line: 3, expected: 10, found: 9 }));

        let err = parse_scene("image 1\n").unwrap_err();
        assert!(matches!(err, SceneError::MissingField { line: 1, .. }));
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = parse_scene("image 1 16\nsky 1 1 one 0 0 0\n").unwrap_err();
        assert!(matches!(err, SceneError::InvalidNumber { line: 2, ref token } if token == "one"));

        let err = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 NaN LIGHT 1 1 1\n").unwrap_err();
        assert!(matches!(err, SceneError::InvalidNumber { line: 3, .. }));

        let err = parse_scene("image -4 16\nsky 1 1 1 0 0 0\n").unwrap_err();
        assert!(matches!(err, SceneError::InvalidNumber { line: 1, .. }));
    }

    #[test]
    fn degenerate_values_are_rejected() {
        let zero_radius = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 0 LIGHT 1 1 1\n");
        assert!(matches!(zero_radius, Err(SceneError::Invalid { line: 3, .. })));

        let zero_samples = parse_scene("image 0 16\nsky 1 1 1 0 0 0\n");
        assert!(matches!(zero_samples, Err(SceneError::Invalid { line: 1, .. })));

        let vacuum = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 1 DIELECTRIC 0\n");
        assert!(matches!(vacuum, Err(SceneError::Invalid { line: 3, .. })));
    }

    #[test]
    fn excess_fuzz_is_clamped() {
        let scene = parse_scene("image 1 16\nsky 1 1 1 0 0 0\nx 0 0 -1 1 METAL 1 1 1 2.5\n").unwrap();
        match **spheres(&scene)[0].material() {
            Material::Metal(m) => assert_eq!(m.fuzz(), 1.0),
            other => panic!("unexpected material: {other:?}"),
        }
    }
}
