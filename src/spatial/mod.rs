//! Lattice geometry for the 3D battle map
//!
//! Vectors and metrics, line rasterization and ring formations. Everything
//! here is pure and integer-exact.

pub mod formation;
pub mod metric;
pub mod raster;
pub mod vector;

pub use formation::{formation, FormationPoints, RING_OFFSETS};
pub use metric::{chebyshev, distance, distance_chebyshev, distance_manhattan, euclidean, manhattan};
pub use raster::{line_of_fire_clear, rasterize, rasterize_capped, LengthCap};
pub use vector::Vector;
