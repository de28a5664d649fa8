//! Tessellation backend interface.

use crate::tess::{Mode, TessError};

/// Tessellation support on the backend.
pub unsafe trait Tess {
  /// Backend representation of the tessellation (vertex storage and its layout).
  type TessRepr;

  /// Upload `vertices`, a flat sequence of `components`-wide float vectors, and describe them as
  /// vertex attribute `0`.
  ///
  /// `components` is already checked to be in `1..=4` and `vertices.len()` to be a non-zero
  /// multiple of it.
  unsafe fn build(
    &mut self,
    vertices: &[f32],
    components: usize,
  ) -> Result<Self::TessRepr, TessError>;

  /// Draw `vert_nb` vertices of `tess`, starting at the first one, connected with `mode`.
  unsafe fn render(&mut self, tess: &Self::TessRepr, mode: Mode, vert_nb: usize);
}
