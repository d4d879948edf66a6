//! glint - CPU path tracing
//!
//! A Monte Carlo path tracer for sphere scenes, ported from a GLSL-style
//! shader prototype. All sampling is driven by a deterministic screen-space
//! hash rather than a stateful RNG, so renders are reproducible
//! bit-for-bit and image tiles can be traced in parallel without any
//! shared sampler state.

mod bucket;
mod camera;
mod error;
mod material;
mod renderer;
mod sampler;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::RenderError;
pub use material::{Color, Material};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, render_single_threaded, ImageBuffer,
    RenderConfig,
};
pub use sampler::{hash, unit_sphere_direction};
pub use scene::{HitRecord, Scene};
pub use sphere::Sphere;

/// Re-export common math types from glint_math
pub use glint_math::{Interval, Ray, Vec2, Vec3};
