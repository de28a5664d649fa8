//! Graphics pipelines.
//!
//! A frame is rendered by walking down a chain of gates, each one only exposing what is valid at
//! that point:
//!
//! - [`PipelineGate`] clears the back buffer and hands out a [`ShadingGate`].
//! - [`ShadingGate`] makes a [`Program`] current and hands out a [`TessGate`].
//! - [`TessGate`] draws [`Tess`] with the current program.

use crate::{
  backend::{pipeline::Pipeline as PipelineBackend, tess::Tess as TessBackend},
  context::GraphicsContext,
  shader::Program,
  tess::Tess,
};

/// Various customization options for pipelines.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineState {
  clear_color: Option<[f32; 4]>,
}

impl Default for PipelineState {
  /// Clears to opaque black.
  fn default() -> Self {
    PipelineState {
      clear_color: Some([0., 0., 0., 1.]),
    }
  }
}

impl PipelineState {
  /// Create a default [`PipelineState`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Color the back buffer is cleared with, if clearing is enabled.
  pub fn clear_color(&self) -> Option<[f32; 4]> {
    self.clear_color
  }

  /// Set or disable the clear color.
  pub fn set_clear_color(self, clear_color: impl Into<Option<[f32; 4]>>) -> Self {
    PipelineState {
      clear_color: clear_color.into(),
    }
  }
}

/// Top-most gate, used to start a frame.
pub struct PipelineGate<'a, C>
where
  C: ?Sized + GraphicsContext,
{
  ctx: &'a mut C,
}

impl<'a, C> PipelineGate<'a, C>
where
  C: ?Sized + GraphicsContext,
  C::Backend: PipelineBackend,
{
  /// Create a new [`PipelineGate`].
  pub fn new(ctx: &'a mut C) -> Self {
    PipelineGate { ctx }
  }

  /// Run a pipeline on the back buffer.
  pub fn pipeline<F>(&mut self, pipeline_state: &PipelineState, f: F)
  where
    F: for<'b> FnOnce(ShadingGate<'b, C>),
  {
    if let Some(color) = pipeline_state.clear_color {
      unsafe { self.ctx.backend().clear(color) };
    }

    f(ShadingGate { ctx: self.ctx });
  }
}

/// Gate used to select shader programs.
pub struct ShadingGate<'a, C>
where
  C: ?Sized + GraphicsContext,
{
  ctx: &'a mut C,
}

impl<'a, C> ShadingGate<'a, C>
where
  C: ?Sized + GraphicsContext,
  C::Backend: PipelineBackend,
{
  /// Shade with `program`.
  pub fn shade<F>(&mut self, program: &Program<C::Backend>, f: F)
  where
    F: for<'b> FnOnce(TessGate<'b, C>),
  {
    unsafe { self.ctx.backend().use_program(&program.repr) };

    f(TessGate { ctx: self.ctx });
  }
}

/// Gate used to draw tessellations.
pub struct TessGate<'a, C>
where
  C: ?Sized + GraphicsContext,
{
  ctx: &'a mut C,
}

impl<'a, C> TessGate<'a, C>
where
  C: ?Sized + GraphicsContext,
  C::Backend: TessBackend,
{
  /// Draw all the vertices of `tess`.
  pub fn render(&mut self, tess: &Tess<C::Backend>) {
    unsafe {
      self
        .ctx
        .backend()
        .render(&tess.repr, tess.mode(), tess.vert_nb())
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_clears_to_black() {
    assert_eq!(PipelineState::default().clear_color(), Some([0., 0., 0., 1.]));
  }

  #[test]
  fn disable_clear() {
    let state = PipelineState::new().set_clear_color(None);
    assert_eq!(state.clear_color(), None);
  }
}
