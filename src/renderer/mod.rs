//! Rendering module
//!
//! Turns simulation state into geometry. Pixel output belongs to whatever
//! implements [`Canvas`].

pub mod canvas;
pub mod draw;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Label, VertexBatch};
pub use draw::draw;
pub use vertex::Vertex;
