//! Query backend interface.

use std::{error, fmt};

/// Query error.
#[derive(Debug, Eq, PartialEq)]
pub enum QueryError {
  /// No backend version information available.
  NoBackendVersion,

  /// No backend shading language version information available.
  NoBackendShadingLanguageVersion,
}

impl fmt::Display for QueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      QueryError::NoBackendVersion => f.write_str("no backend version available"),
      QueryError::NoBackendShadingLanguageVersion => {
        f.write_str("no backend shading language version available")
      }
    }
  }
}

impl error::Error for QueryError {}

/// Backends that support querying.
pub unsafe trait Query {
  /// The backend version.
  fn backend_version(&self) -> Result<String, QueryError>;

  /// The shading language version.
  fn backend_shading_lang_version(&self) -> Result<String, QueryError>;
}
