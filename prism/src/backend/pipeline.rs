//! Pipeline backend interface.

use crate::backend::shader::Shader;

/// Frame-level operations.
pub unsafe trait Pipeline: Shader {
  /// Clear the color buffer of the back buffer.
  unsafe fn clear(&mut self, color: [f32; 4]);

  /// Make `program` the current program for subsequent draw calls.
  unsafe fn use_program(&mut self, program: &Self::ProgramRepr);
}
