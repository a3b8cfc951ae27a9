//! WebGPU rendering module
//!
//! Draws the widget's derived circle view into its pane. The simulation never
//! touches anything in here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
