//! Scene container and hit records.

use glint_math::{Interval, Ray, Vec3};

use crate::material::{Color, Material};
use crate::sphere::Sphere;

/// Record of a ray-sphere intersection.
///
/// A plain value produced per intersection query and discarded with it;
/// nothing holds one across a bounce.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection, unit length
    pub normal: Vec3,
    /// Material of the sphere that was hit
    pub material: Material,
}

/// An ordered list of spheres. Immutable for the duration of a render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Find the nearest intersection across all spheres in the window.
    ///
    /// Linear scan: each sphere is tested against a window capped by the
    /// closest hit so far, so a later sphere can only win by being
    /// strictly closer.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    /// The five-sphere demo scene: three material showcases in front of
    /// the camera, a large diffuse ground sphere, and a distant metal
    /// sphere.
    pub fn demo() -> Self {
        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -1.5),
            0.5,
            Material::Diffuse {
                albedo: Color::new(0.8, 0.3, 0.3),
            },
        ));
        scene.add(Sphere::new(
            Vec3::new(-1.0, 0.0, -1.5),
            0.5,
            Material::Dielectric { ior: 1.9 },
        ));
        scene.add(Sphere::new(
            Vec3::new(1.0, 0.0, -1.5),
            0.5,
            Material::Metal {
                albedo: Color::new(0.8, 0.6, 0.2),
                fuzz: 0.0,
            },
        ));
        scene.add(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Material::Diffuse {
                albedo: Color::new(0.8, 0.8, 0.0),
            },
        ));
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.5, -10.0),
            5.0,
            Material::Metal {
                albedo: Color::new(0.8, 0.6, 0.2),
                fuzz: 0.0,
            },
        ));
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diffuse_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(
            center,
            radius,
            Material::Diffuse {
                albedo: Color::new(0.5, 0.5, 0.5),
            },
        )
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn nearest_of_overlapping_spheres_wins() {
        let near = diffuse_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0);
        let far = diffuse_sphere(Vec3::new(0.0, 0.0, -5.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let window = Interval::new(0.001, f32::INFINITY);

        let t_near = near.hit(&ray, window).expect("near sphere hit").t;
        let t_far = far.hit(&ray, window).expect("far sphere hit").t;

        // Both orderings return the global minimum
        let mut scene = Scene::new();
        scene.add(near);
        scene.add(far);
        assert_eq!(scene.hit(&ray, window).expect("hit").t, t_near.min(t_far));

        let mut scene = Scene::new();
        scene.add(far);
        scene.add(near);
        assert_eq!(scene.hit(&ray, window).expect("hit").t, t_near.min(t_far));
    }

    #[test]
    fn occluded_sphere_is_skipped() {
        let mut scene = Scene::new();
        scene.add(diffuse_sphere(Vec3::new(0.0, 0.0, -2.0), 0.5));
        scene.add(diffuse_sphere(Vec3::new(0.0, 0.0, -10.0), 0.5));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = scene
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("hit");
        assert_eq!(rec.t, 1.5);
    }

    #[test]
    fn demo_scene_has_five_spheres() {
        let scene = Scene::demo();
        assert_eq!(scene.len(), 5);
        assert!(!scene.is_empty());
    }
}
