//! Geometry of 2D airfoil sections stored as closed polylines: edge detection, surface splitting,
//! area and centroid, camber and thickness, affine transforms, and interpolation of airfoil
//! families along a span.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod geometry;
pub mod interpolate;
pub mod io;
pub mod serialize;

pub use airfoil::Airfoil;
pub use errors::{AirfoilError, Result};
