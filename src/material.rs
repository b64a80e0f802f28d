//! Surface materials referenced by hit records.
//!
//! Intersection code never looks inside a material; it only hands a shared
//! borrow of it to whoever shades the hit. Scene files name materials and
//! primitives refer to them by name.

use glam::Vec3A;
use serde::Deserialize;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Material types attached to primitives.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        #[serde(default)]
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
    },
}

impl Material {
    /// Short kind name, used in logs and probe output.
    pub fn kind(&self) -> &'static str {
        match self {
            Material::Lambertian { .. } => "lambertian",
            Material::Metal { .. } => "metal",
            Material::Dielectric { .. } => "dielectric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_tagged_materials() {
        let m: Material =
            serde_json::from_str(r#"{"type": "Lambertian", "albedo": [0.1, 0.2, 0.3]}"#).unwrap();
        assert_eq!(m, Material::Lambertian { albedo: Color::new(0.1, 0.2, 0.3) });
        assert_eq!(m.kind(), "lambertian");

        let m: Material = serde_json::from_str(r#"{"type": "Metal", "albedo": [1, 1, 1]}"#).unwrap();
        assert_eq!(m, Material::Metal { albedo: Color::ONE, fuzz: 0.0 });

        let m: Material =
            serde_json::from_str(r#"{"type": "Dielectric", "refraction_index": 1.5}"#).unwrap();
        assert_eq!(m.kind(), "dielectric");
    }

    #[test]
    fn unknown_material_type_is_rejected() {
        let res = serde_json::from_str::<Material>(r#"{"type": "Plastic"}"#);
        assert!(res.is_err());
    }
}
