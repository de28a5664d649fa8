//! GPU queries.

use crate::{
  backend::query::{Query as QueryBackend, QueryError},
  context::GraphicsContext,
};

/// Query object.
#[derive(Debug)]
pub struct Query<'a, B>
where
  B: ?Sized,
{
  backend: &'a B,
}

impl<'a, B> Query<'a, B>
where
  B: ?Sized + QueryBackend,
{
  /// Create a new [`Query`] for a given context.
  pub fn new<C>(ctx: &'a mut C) -> Self
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    let backend = ctx.backend();
    Self { backend }
  }

  /// The backend version.
  pub fn backend_version(&self) -> Result<String, QueryError> {
    self.backend.backend_version()
  }

  /// The shading language version.
  pub fn backend_shading_lang_version(&self) -> Result<String, QueryError> {
    self.backend.backend_shading_lang_version()
  }
}
