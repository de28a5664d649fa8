//! Shader backend interface.

use crate::shader::{ProgramError, StageError, StageType};

/// Shader support on the backend.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Create and compile a shader stage.
  ///
  /// On failure, the backend must release whatever it allocated for the stage and return the
  /// driver diagnostic in the error.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Attach both stages to a new program and link it.
  ///
  /// The stages are borrowed; they stay owned by the caller and can be released as soon as this
  /// function returns, whatever the outcome.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Check that a linked program can execute in the current state.
  unsafe fn validate_program(&mut self, program: &Self::ProgramRepr) -> Result<(), ProgramError>;
}
