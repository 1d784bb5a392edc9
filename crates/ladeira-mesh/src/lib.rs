//! CPU-side geometry for the rendering layer: terrain mesh vertices, the
//! grayscale elevation texture, and descent polyline buffers. Everything
//! here is plain buffer building; GPU upload belongs to the embedding
//! application.

pub mod grid_mesh;
pub mod polyline;
pub mod texture;

pub use grid_mesh::{build_terrain_vertices, MeshMode, TerrainVertex};
pub use polyline::{build_polylines, DescentPolyline};
pub use texture::elevation_texture;
