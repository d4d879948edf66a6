//! Camera for ray generation.

use glint_math::{Ray, Vec3};

/// An axis-aligned view frustum, fixed for the duration of a render.
///
/// Normalized screen coordinates `(u, v)` in `[0, 1]^2` map onto the
/// viewport rectangle spanned by `horizontal` and `vertical` from
/// `lower_left_corner`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub lower_left_corner: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    /// Create a new camera from its frustum vectors.
    pub fn new(origin: Vec3, lower_left_corner: Vec3, horizontal: Vec3, vertical: Vec3) -> Self {
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Generate the ray through normalized screen coordinate `(u, v)`.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    /// The demo camera: a 2:1ish frustum one unit in front of the origin,
    /// matched to the demo scene.
    pub fn demo() -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::new(-2.0, -1.0, -1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.25, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_rays_span_the_frustum() {
        let camera = Camera::demo();

        assert_eq!(camera.get_ray(0.0, 0.0).direction, Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(camera.get_ray(1.0, 1.0).direction, Vec3::new(2.0, 1.25, -1.0));
    }

    #[test]
    fn center_ray_points_down_the_axis() {
        let camera = Camera::demo();
        let ray = camera.get_ray(0.5, 0.5);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::new(0.0, 0.125, -1.0));
    }

    #[test]
    fn offset_origin_still_aims_at_the_viewport() {
        let origin = Vec3::new(0.0, 0.0, 1.0);
        let camera = Camera::new(
            origin,
            Vec3::new(-2.0, -1.0, -1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );

        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin, origin);
        // Direction reaches from the origin to the viewport center
        assert_eq!(ray.at(1.0), Vec3::new(0.0, 0.0, -1.0));
    }
}
