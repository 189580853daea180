//! Geometry, band layout and the paint vocabulary shared by the engine and the backends.

pub mod geom;
pub mod layout;
pub mod painter;
pub mod style;
