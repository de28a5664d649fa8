//! Query API implementation for OpenGL 3.3.

use crate::GL33;
use prism::backend::query::{Query as QueryBackend, QueryError};

unsafe impl QueryBackend for GL33 {
  fn backend_version(&self) -> Result<String, QueryError> {
    self
      .state
      .borrow()
      .get_gl_version()
      .ok_or(QueryError::NoBackendVersion)
  }

  fn backend_shading_lang_version(&self) -> Result<String, QueryError> {
    self
      .state
      .borrow()
      .get_glsl_version()
      .ok_or(QueryError::NoBackendShadingLanguageVersion)
  }
}
