//! Graphics context.
//!
//! A graphics context is the explicit handle every driver operation goes through. Nothing in
//! prism reaches for an ambient, implicitly current context: the context is passed down to
//! [`Program`](crate::shader::Program), [`Tess`](crate::tess::Tess) and the pipeline gates.
//!
//! An object which type implements [`GraphicsContext`] must be `!Send` and `!Sync`, and only one
//! context can live on a given thread.

use crate::{
  backend::{pipeline::Pipeline as PipelineBackend, query::Query as QueryBackend},
  pipeline::PipelineGate,
  query::Query,
};

/// Class of graphics context.
pub unsafe trait GraphicsContext {
  /// Backend type the context drives.
  type Backend: ?Sized;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Create a new pipeline gate.
  fn pipeline_gate(&mut self) -> PipelineGate<Self>
  where
    Self::Backend: PipelineBackend,
  {
    PipelineGate::new(self)
  }

  /// Create a new [`Query`] object.
  fn query(&mut self) -> Query<Self::Backend>
  where
    Self::Backend: QueryBackend,
  {
    Query::new(self)
  }
}
