//! Scene description loading.
//!
//! Scenes are JSON documents holding a table of named materials and a list of
//! primitives that refer to those materials by name:
//!
//! ```json
//! {
//!   "materials": { "ground": { "type": "Lambertian", "albedo": [0.8, 0.8, 0.0] } },
//!   "objects": [
//!     { "type": "Sphere", "center": [0, -100.5, -1], "radius": 100, "material": "ground" }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::Vec3A;
use log::{debug, info};
use serde::Deserialize;

use crate::hittable::HittableList;
use crate::material::Material;
use crate::sphere::Sphere;

/// Primitive entries of a scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    /// Sphere referring to a named material.
    Sphere {
        /// Center in world coordinates
        center: Vec3A,
        /// Radius, clamped to be non-negative when built
        radius: f32,
        /// Name of an entry in the material table
        material: String,
    },
}

/// Parsed but not yet built scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneData {
    /// Named materials, shared by every primitive that refers to them
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    /// Primitives in file order
    #[serde(default)]
    pub objects: Vec<PrimitiveData>,
}

impl SceneData {
    /// Parse a scene description from JSON text.
    pub fn from_json(input: &str) -> Result<Self, Box<dyn Error>> {
        let data: SceneData = serde_json::from_str(input)?;
        Ok(data)
    }

    /// Resolve material names and build the list of hittable objects.
    pub fn build(self) -> Result<HittableList, Box<dyn Error>> {
        let materials: HashMap<String, Arc<Material>> = self
            .materials
            .into_iter()
            .map(|(name, material)| {
                debug!("material '{}': {}", name, material.kind());
                (name, Arc::new(material))
            })
            .collect();

        let mut world = HittableList::new();
        for object in self.objects {
            match object {
                PrimitiveData::Sphere {
                    center,
                    radius,
                    material,
                } => {
                    let shared = materials
                        .get(&material)
                        .ok_or_else(|| format!("material '{}' not present in material table", material))?;
                    debug!("sphere at {} radius {} with '{}'", center, radius, material);
                    world.add(Box::new(Sphere::new(center, radius, Arc::clone(shared))));
                }
            }
        }

        Ok(world)
    }
}

/// Read, parse and build the scene stored at `path`.
pub fn load_scene(path: &Path) -> Result<HittableList, Box<dyn Error>> {
    let input = fs::read_to_string(path)
        .map_err(|e| format!("failed to read scene {}: {}", path.display(), e))?;
    let data = SceneData::from_json(&input)?;
    let material_count = data.materials.len();
    let world = data.build()?;
    info!(
        "Loaded {} objects and {} materials from {}",
        world.len(),
        material_count,
        path.display()
    );
    Ok(world)
}
