//! hitcore ray intersection
//!
//! Ray-sphere intersection behind a `Hittable` trait, with nearest-hit
//! selection over a list of objects and JSON scene loading.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod interval;
pub mod material;
pub mod hittable;
pub mod sphere;
pub mod scene;
