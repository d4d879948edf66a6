//! Sphere primitive and ray-sphere intersection.

use glint_math::{Interval, Ray, Vec3};

use crate::material::Material;
use crate::scene::HitRecord;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Test the ray against this sphere over the parametric window `ray_t`.
    ///
    /// Solves `a*t^2 + 2b*t + c = 0` and returns the nearest root strictly
    /// inside the window. The near root is tried first, so when both roots
    /// are in range the closer surface wins.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            // Unit length by construction; always the outward normal.
            // Materials decide for themselves whether the ray is inside.
            normal: (point - self.center) / self.radius,
            material: self.material,
        })
    }
}
