//! Backend interfacing.
//!
//! Traits in this module are the only place where prism talks to a graphics driver. A backend
//! type implements them and the public API in the crate root drives it. Representations
//! (`StageRepr`, `ProgramRepr`, `TessRepr`) own their driver objects and release them when
//! dropped.

pub mod pipeline;
pub mod query;
pub mod shader;
pub mod tess;
