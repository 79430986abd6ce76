//! Pixel loop: jittered camera rays, sample averaging and gamma correction.
//!
//! Rows are traced in parallel. Every pixel draws from its own ChaCha stream
//! keyed by `(seed, pixel index)`, so an image is bit-identical for a given
//! seed no matter how many threads render it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::integrator::{ray_color, Background};
use crate::util::{rand_unit, Color};
use crate::world::World;

pub const ASPECT_RATIO: f64 = 16.0 / 9.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub samples_per_pixel: u32,
    pub image_width: u32,
    pub aspect_ratio: f64,
    pub seed: u64,
}

impl RenderSettings {
    pub fn new(samples_per_pixel: u32, image_width: u32) -> RenderSettings {
        RenderSettings { samples_per_pixel, image_width, aspect_ratio: ASPECT_RATIO, seed: 0 }
    }

    pub fn with_seed(self, seed: u64) -> RenderSettings {
        RenderSettings { seed, ..self }
    }

    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }
}

/// Gamma-corrected pixels, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Image {
        assert_eq!(pixels.len(), width as usize * height as usize, "pixel count must match dimensions");
        Image { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Gamma 2: square root per channel, negatives to zero.
pub fn linear_to_gamma(c: Color) -> Color {
    Color::new(c.x.max(0.0).sqrt(), c.y.max(0.0).sqrt(), c.z.max(0.0).sqrt())
}

pub fn pixel_rng(seed: u64, pixel_index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(pixel_index);
    rng
}

/// Averages `samples_per_pixel` paths through pixel `(x, y)`, `y` counted from the top.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    background: &Background,
    settings: &RenderSettings,
    x: u32,
    y: u32,
) -> Color {
    let image_w = settings.image_width;
    let image_h = settings.image_height();
    let mut rng = pixel_rng(settings.seed, y as u64 * image_w as u64 + x as u64);

    let u_span = image_w.saturating_sub(1).max(1) as f64;
    let v_span = image_h.saturating_sub(1).max(1) as f64;

    let mut c = Color::ZERO;

    // random multisampling
    for _ in 0..settings.samples_per_pixel {
        let u = (x as f64 + rand_unit(&mut rng)) / u_span;
        let v = (y as f64 + rand_unit(&mut rng)) / v_span;
        let ray = camera.create_ray(u, 1.0 - v);

        c += ray_color(&ray, world, 0, background, &mut rng);
    }

    return linear_to_gamma(c / settings.samples_per_pixel.max(1) as f64);
}

pub fn render(world: &World, background: &Background, settings: &RenderSettings) -> Image {
    let image_w = settings.image_width;
    let image_h = settings.image_height();
    let camera = Camera::new(settings.aspect_ratio);

    info!(
        "rendering {}x{} at {} samples per pixel, {} spheres",
        image_w,
        image_h,
        settings.samples_per_pixel,
        world.len()
    );
    let start = Instant::now();
    let rows_done = AtomicUsize::new(0);

    let mut pixels = vec![Color::ZERO; image_w as usize * image_h as usize];

    pixels.par_chunks_mut(image_w as usize).enumerate().for_each(|(y, row)| {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(&camera, world, background, settings, x as u32, y as u32);
        }

        let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("scanline {} of {} done", done, image_h);
    });

    info!("rendered in {:.2?}", start.elapsed());

    Image::new(image_w, image_h, pixels)
}
