//! Material model for surface scattering.

use glint_math::{Ray, Vec2, Vec3};

use crate::sampler::{hash, unit_sphere_direction};
use crate::scene::HitRecord;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// How a surface scatters an incoming ray.
///
/// The material set is closed: a sphere carries exactly one of these
/// variants, so there is no out-of-range material tag to defend against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface: bounces toward a random point on the unit sphere
    /// around the surface normal.
    Diffuse { albedo: Color },
    /// Reflective surface: mirror reflection, optionally perturbed by
    /// `fuzz` (0.0 = perfect mirror).
    Metal { albedo: Color, fuzz: f32 },
    /// Glass-like surface: stochastically reflects or refracts based on
    /// Fresnel reflectance.
    Dielectric { ior: f32 },
}

impl Material {
    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns the attenuation to fold into the running color and the
    /// outgoing ray. Every variant scatters; nothing absorbs in this
    /// model. `st` and `sample` seed the hash sampler so the same hit in
    /// the same sample always scatters the same way.
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, st: Vec2, sample: u32) -> (Color, Ray) {
        let unit_direction = ray.direction.normalize();

        match *self {
            Material::Diffuse { albedo } => {
                let target = rec.point + rec.normal + unit_sphere_direction(st, sample);
                (albedo, Ray::new(rec.point, target - rec.point))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(unit_direction, rec.normal);
                let direction = reflected + fuzz * unit_sphere_direction(st, sample);
                (albedo, Ray::new(rec.point, direction))
            }
            Material::Dielectric { ior } => {
                // Reflection is taken about the stored (outward) normal
                // even when exiting the medium; the ported shader did the
                // same and the look depends on it.
                let reflected = reflect(unit_direction, rec.normal);

                let (outward_normal, ni_over_nt, cosine) =
                    if unit_direction.dot(rec.normal) > 0.0 {
                        // Exiting the medium
                        let cosine =
                            ior * ray.direction.dot(rec.normal) / ray.direction.length();
                        (-rec.normal, ior, cosine)
                    } else {
                        // Entering the medium
                        let cosine = -ray.direction.dot(rec.normal) / ray.direction.length();
                        (rec.normal, 1.0 / ior, cosine)
                    };

                let reflect_prob = if can_refract(unit_direction, outward_normal, ni_over_nt) {
                    schlick(cosine, ior)
                } else {
                    // Total internal reflection
                    1.0
                };

                let direction = if hash(st + Vec2::splat(sample as f32)) > reflect_prob {
                    refract(unit_direction, outward_normal, ni_over_nt)
                } else {
                    reflected
                };

                // Glass carries no per-bounce albedo; attenuating it as
                // well blows out nested reflections.
                (Color::ONE, Ray::new(rec.point, direction))
            }
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// GLSL-style refraction of `i` through a surface with normal `n`.
///
/// Returns the zero vector when the refraction discriminant is negative
/// (total internal reflection). Callers treat that zero vector as a valid
/// degenerate direction, not an error.
#[inline]
pub(crate) fn refract(i: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let k = 1.0 - eta * eta * (1.0 - n.dot(i) * n.dot(i));
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * i - (eta * n.dot(i) + k.sqrt()) * n
    }
}

/// Whether refraction is possible, i.e. the refraction discriminant is
/// positive.
#[inline]
fn can_refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> bool {
    let dt = v.dot(n);
    1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt) > 0.0
}

/// Schlick's approximation for Fresnel reflectance.
#[inline]
pub(crate) fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_at_origin(normal: Vec3, material: Material) -> HitRecord {
        HitRecord {
            t: 1.0,
            point: Vec3::ZERO,
            normal,
            material,
        }
    }

    #[test]
    fn reflect_mirrors_about_normal() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        assert_eq!(reflect(v, n), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_bends_toward_normal_entering_dense_medium() {
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::Y;
        let refracted = refract(i, n, 1.0 / 1.9);

        // Refraction into a denser medium bends toward the (negated) normal
        assert!(refracted.y < 0.0);
        assert!(refracted.x.abs() < i.x.abs());
    }

    #[test]
    fn refract_returns_zero_vector_on_total_internal_reflection() {
        // Grazing incidence leaving a dense medium: discriminant < 0
        let i = Vec3::X;
        let n = Vec3::Y;
        assert_eq!(refract(i, n, 1.9), Vec3::ZERO);
    }

    #[test]
    fn schlick_at_normal_incidence_is_r0() {
        let ior = 1.9f32;
        let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
        assert!((schlick(1.0, ior) - r0).abs() < 1e-6);
    }

    #[test]
    fn schlick_rises_toward_grazing_incidence() {
        assert!(schlick(0.0, 1.9) > schlick(0.5, 1.9));
        assert!(schlick(0.5, 1.9) > schlick(1.0, 1.9));
    }

    #[test]
    fn diffuse_scatter_attenuates_by_albedo() {
        let albedo = Color::new(0.8, 0.3, 0.3);
        let rec = hit_at_origin(Vec3::Y, Material::Diffuse { albedo });
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));

        let (attenuation, scattered) = rec.material.scatter(&ray, &rec, Vec2::splat(0.5), 0);
        assert_eq!(attenuation, albedo);
        assert_eq!(scattered.origin, rec.point);
        // Scatter target is normal + unit sphere direction, so the
        // direction can never be longer than 2
        assert!(scattered.direction.length() <= 2.0 + 1e-5);
    }

    #[test]
    fn perfect_mirror_reflects_exactly() {
        let albedo = Color::new(0.8, 0.6, 0.2);
        let rec = hit_at_origin(Vec3::Y, Material::Metal { albedo, fuzz: 0.0 });
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));

        let (attenuation, scattered) = rec.material.scatter(&ray, &rec, Vec2::splat(0.5), 0);
        assert_eq!(attenuation, albedo);

        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((scattered.direction - expected).length() < 1e-6);
    }

    #[test]
    fn dielectric_applies_no_attenuation() {
        let rec = hit_at_origin(Vec3::Y, Material::Dielectric { ior: 1.9 });
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));

        let (attenuation, _) = rec.material.scatter(&ray, &rec, Vec2::splat(0.25), 3);
        assert_eq!(attenuation, Color::ONE);
    }

    #[test]
    fn dielectric_scatter_is_deterministic() {
        let rec = hit_at_origin(Vec3::Y, Material::Dielectric { ior: 1.9 });
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let st = Vec2::new(0.3, 0.6);

        let (_, a) = rec.material.scatter(&ray, &rec, st, 11);
        let (_, b) = rec.material.scatter(&ray, &rec, st, 11);
        assert_eq!(a.direction, b.direction);
    }
}
