//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - An iterative bounce loop with configurable depth
//! - Deterministic hash-driven sampling (no RNG state)
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction on output

use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use glint_math::{Interval, Ray, Vec2};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::error::RenderError;
use crate::material::Color;
use crate::sampler::hash;
use crate::scene::Scene;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce count
    pub max_bounce: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            samples_per_pixel: 50,
            max_bounce: 5,
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// The core bounce loop. The ray is intersected against the scene over
/// `[0.001, inf)` (the lower bound keeps a scattered ray from re-hitting
/// the surface it just left); on a hit the material replaces the ray and
/// multiplies the running attenuation. The loop runs until a miss or until
/// `max_bounce` bounces, then the sky gradient of the *final* ray, scaled
/// by the accumulated attenuation, is returned. Iteration bounds the work
/// structurally; there is no recursion to run away.
pub fn ray_color(ray: &Ray, scene: &Scene, st: Vec2, sample: u32, max_bounce: u32) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;
    let mut bounce = 0;

    while bounce < max_bounce {
        let Some(rec) = scene.hit(&ray, Interval::new(0.001, f32::INFINITY)) else {
            break;
        };
        let (factor, scattered) = rec.material.scatter(&ray, &rec, st, sample);
        attenuation *= factor;
        ray = scattered;
        bounce += 1;
    }

    attenuation * sky_gradient(&ray)
}

/// Sky gradient background, a function of the ray's vertical direction.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    (unit_direction.y + 1.0) * Color::new(0.6, 0.8, 1.0)
}

/// Render a single pixel with jittered multi-sampling.
///
/// Each sample draws one scalar jitter from the hash of the pixel's
/// normalized coordinate plus the sample index, applied to both axes, and
/// averages the traced results.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let resolution = Vec2::new(config.width as f32, config.height as f32);
    let st = Vec2::new(x as f32, y as f32) / resolution;

    let mut pixel_color = Color::ZERO;
    for sample in 0..config.samples_per_pixel {
        let jitter = Vec2::splat(hash(st + Vec2::splat(sample as f32))) / resolution;
        let ray = camera.get_ray(st.x + jitter.x, st.y + jitter.y);
        pixel_color += ray_color(&ray, scene, st, sample, config.max_bounce);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Output gamma exponent (approximately 1/2.2).
const GAMMA: f32 = 0.4545;

/// Gamma-correct and quantize one linear channel.
///
/// Negative inputs are clamped to zero *before* the power; a fractional
/// exponent of a negative value would yield NaN.
fn to_gamma_byte(linear: f32) -> u8 {
    let graded = linear.max(0.0).powf(GAMMA);
    (255.0 * graded).min(255.0) as u8
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        to_gamma_byte(color.x),
        to_gamma_byte(color.y),
        to_gamma_byte(color.z),
    ]
}

/// Image buffer for storing render output, row-major.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into its region of the image.
    pub fn blit(&mut self, result: &BucketResult) {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    /// Convert to row-major RGB byte triples, gamma corrected.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let mut img = image::RgbImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb(color_to_rgb(self.get(x, y)));
        }
        img.save(path)?;
        Ok(())
    }
}

/// Render the scene across all CPU cores.
///
/// The image is tiled into buckets rendered in parallel with rayon. The
/// scene and camera are shared immutable, each bucket owns a disjoint
/// output region, and the hash sampler is stateless, so the result is
/// bit-identical to [`render_single_threaded`].
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let buckets = generate_buckets(config.width, config.height, DEFAULT_BUCKET_SIZE);
    info!(
        "rendering {}x{} @ {} spp, {} spheres, {} buckets",
        config.width,
        config.height,
        config.samples_per_pixel,
        scene.len(),
        buckets.len()
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene, config)))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.blit(result);
    }

    info!("render finished in {:?}", start.elapsed());
    Ok(image)
}

/// Render the scene on the calling thread, pixel by pixel.
pub fn render_single_threaded(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(camera, scene, x, y, config));
        }
    }

    Ok(image)
}
