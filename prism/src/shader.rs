//! Shader stages and programs.
//!
//! A [`Program`] is built from a vertex and a fragment [`Stage`]. Building goes through the
//! following sequence:
//!
//! 1. Both stages are compiled. Each failure carries the driver diagnostic.
//! 2. If any stage failed, the build stops with [`ProgramError::CompilationFailed`], which holds
//!    every stage error collected in the first step.
//! 3. The stages are attached and linked.
//! 4. The linked program is validated.
//!
//! Stage objects are released once the build is over, whether it succeeded or not. A [`Program`]
//! is only ever handed out once all four steps succeeded.

use std::{error, fmt};

use crate::{backend::shader::Shader, context::GraphicsContext, source::ShaderProgramSource};

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// Occurs when a shader fails to compile.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Shader stage failed to compile.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }

  /// Type of the stage that failed.
  pub fn stage_type(&self) -> StageType {
    match *self {
      StageError::CompilationFailed(ty, _) => ty,
    }
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProgramError {
  /// One or more shader stages failed to compile. Never empty.
  CompilationFailed(Vec<StageError>),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
  /// Program validation failed. You can inspect the reason by looking at the contained `String`.
  ValidationFailed(String),
}

impl ProgramError {
  /// Shader program failed to link.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }

  /// Shader program failed to validate.
  pub fn validation_failed(reason: impl Into<String>) -> Self {
    ProgramError::ValidationFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::CompilationFailed(ref errors) => {
        f.write_str("shader program has stage errors")?;

        for e in errors {
          write!(f, "\n  {}", e)?;
        }

        Ok(())
      }

      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),

      ProgramError::ValidationFailed(ref s) => {
        write!(f, "shader program failed to validate: {}", s)
      }
    }
  }
}

impl error::Error for ProgramError {}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::CompilationFailed(vec![e])
  }
}

/// A compiled shader stage.
///
/// The driver object is released when the stage is dropped.
pub struct Stage<B>
where
  B: ?Sized + Shader,
{
  repr: B::StageRepr,
  ty: StageType,
}

impl<B> Stage<B>
where
  B: ?Sized + Shader,
{
  /// Compile a new shader stage.
  pub fn new<C, R>(ctx: &mut C, ty: StageType, src: R) -> Result<Self, StageError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
    R: AsRef<str>,
  {
    unsafe {
      ctx
        .backend()
        .new_stage(ty, src.as_ref())
        .map(|repr| Stage { repr, ty })
    }
  }

  /// Type of the stage.
  pub fn ty(&self) -> StageType {
    self.ty
  }
}

impl<B> fmt::Debug for Stage<B>
where
  B: ?Sized + Shader,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Stage").field("ty", &self.ty).finish()
  }
}

/// A linked and validated shader program.
///
/// The driver object is released when the program is dropped.
pub struct Program<B>
where
  B: ?Sized + Shader,
{
  pub(crate) repr: B::ProgramRepr,
}

impl<B> Program<B>
where
  B: ?Sized + Shader,
{
  /// Build a program from already compiled stages.
  ///
  /// The stages can be dropped right after this call.
  pub fn from_stages<C>(
    ctx: &mut C,
    vertex: &Stage<B>,
    fragment: &Stage<B>,
  ) -> Result<Self, ProgramError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    unsafe {
      let backend = ctx.backend();
      let repr = backend.new_program(&vertex.repr, &fragment.repr)?;
      backend.validate_program(&repr)?;

      Ok(Program { repr })
    }
  }

  /// Compile, link and validate a program from its vertex and fragment sources.
  ///
  /// Both stages are compiled even if the first one fails, so that the returned error reports
  /// every broken stage at once.
  pub fn from_strings<C, V, F>(ctx: &mut C, vertex: V, fragment: F) -> Result<Self, ProgramError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
    V: AsRef<str>,
    F: AsRef<str>,
  {
    let vs = Stage::new(ctx, StageType::VertexShader, vertex);
    let fs = Stage::new(ctx, StageType::FragmentShader, fragment);

    match (vs, fs) {
      (Ok(vs), Ok(fs)) => Self::from_stages(ctx, &vs, &fs),

      (vs, fs) => {
        let errors: Vec<_> = vs.err().into_iter().chain(fs.err()).collect();

        for e in &errors {
          log::error!("{}", e);
        }

        Err(ProgramError::CompilationFailed(errors))
      }
    }
  }

  /// Compile, link and validate a program from a split shader resource.
  pub fn from_source<C>(ctx: &mut C, source: &ShaderProgramSource) -> Result<Self, ProgramError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    Self::from_strings(ctx, &source.vertex, &source.fragment)
  }
}

impl<B> fmt::Debug for Program<B>
where
  B: ?Sized + Shader,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("Program")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn aggregated_error_lists_every_stage() {
    let err = ProgramError::CompilationFailed(vec![
      StageError::compilation_failed(StageType::VertexShader, "0:1: syntax error"),
      StageError::compilation_failed(StageType::FragmentShader, "0:3: undeclared identifier"),
    ]);

    assert_eq!(
      err.to_string(),
      "shader program has stage errors\n  \
       vertex shader compilation error: 0:1: syntax error\n  \
       fragment shader compilation error: 0:3: undeclared identifier"
    );
  }

  #[test]
  fn stage_error_type() {
    assert_eq!(
      StageError::compilation_failed(StageType::FragmentShader, "0:1: error").stage_type(),
      StageType::FragmentShader
    );
  }
}
