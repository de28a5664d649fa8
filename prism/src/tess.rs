//! GPU geometries.
//!
//! A [`Tess`] holds vertex positions stored on the GPU along with the primitive [`Mode`] used to
//! connect them. Positions are float vectors of one to four components and are exposed to vertex
//! shaders as attribute `0`:
//!
//! ```glsl
//! layout(location = 0) in vec4 position;
//! ```

use std::{error, fmt};

use crate::{backend::tess::Tess as TessBackend, context::GraphicsContext};

/// Vertices can be connected via several modes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
  /// A single point.
  Point,
  /// A line, defined by two points.
  Line,
  /// A triangle, defined by three points.
  Triangle,
}

impl Mode {
  /// Number of vertices needed to form a single primitive.
  pub fn vertices_per_primitive(self) -> usize {
    match self {
      Mode::Point => 1,
      Mode::Line => 2,
      Mode::Triangle => 3,
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Mode::Point => f.write_str("point"),
      Mode::Line => f.write_str("line"),
      Mode::Triangle => f.write_str("triangle"),
    }
  }
}

/// Error that can occur while building a [`Tess`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TessError {
  /// No vertex was provided.
  NoVertices,
  /// Vertices must have between one and four components.
  UnsupportedComponents(usize),
  /// The backend could not allocate the vertex storage.
  CannotCreate(String),
}

impl TessError {
  /// The backend could not allocate the vertex storage.
  pub fn cannot_create(reason: impl Into<String>) -> Self {
    TessError::CannotCreate(reason.into())
  }
}

impl fmt::Display for TessError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      TessError::NoVertices => f.write_str("no vertices"),
      TessError::UnsupportedComponents(n) => {
        write!(f, "unsupported vertex component count: {} (expected 1 to 4)", n)
      }
      TessError::CannotCreate(ref e) => write!(f, "cannot create tessellation: {}", e),
    }
  }
}

impl error::Error for TessError {}

/// Vertex positions stored on the GPU.
///
/// The vertex storage is released when the [`Tess`] is dropped.
pub struct Tess<B>
where
  B: ?Sized + TessBackend,
{
  pub(crate) repr: B::TessRepr,
  mode: Mode,
  vert_nb: usize,
}

impl<B> Tess<B>
where
  B: ?Sized + TessBackend,
{
  /// Upload `vertices` and connect them with `mode`.
  ///
  /// If the number of vertices is not a multiple of what `mode` needs, the trailing vertices are
  /// still uploaded but the backend will not form a primitive out of them.
  pub fn new<C, const N: usize>(
    ctx: &mut C,
    vertices: &[[f32; N]],
    mode: Mode,
  ) -> Result<Self, TessError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    if N == 0 || N > 4 {
      return Err(TessError::UnsupportedComponents(N));
    }

    if vertices.is_empty() {
      return Err(TessError::NoVertices);
    }

    if vertices.len() % mode.vertices_per_primitive() != 0 {
      log::warn!(
        "{} vertices do not form whole {} primitives",
        vertices.len(),
        mode
      );
    }

    let flat: Vec<f32> = vertices.iter().flat_map(|v| v.iter().copied()).collect();
    let repr = unsafe { ctx.backend().build(&flat, N)? };

    Ok(Tess {
      repr,
      mode,
      vert_nb: vertices.len(),
    })
  }

  /// Primitive mode.
  pub fn mode(&self) -> Mode {
    self.mode
  }

  /// Number of vertices.
  pub fn vert_nb(&self) -> usize {
    self.vert_nb
  }
}

impl<B> fmt::Debug for Tess<B>
where
  B: ?Sized + TessBackend,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Tess")
      .field("mode", &self.mode)
      .field("vert_nb", &self.vert_nb)
      .finish()
  }
}
