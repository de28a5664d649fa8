//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for prism. The backend type is [`GL33`].

mod pipeline;
mod query;
mod shader;
mod state;
mod tess;

pub use self::state::missing_symbols;
pub use self::state::GLState;
pub use self::state::StateQueryError;
use std::cell::RefCell;
use std::rc::Rc;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a prism backend type. It implements every backend trait.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// An OpenGL context must be current on the calling thread and its symbols loaded. Only one
  /// backend can be created per thread.
  ///
  /// If some symbols are missing (see [`missing_symbols`]), the backend is created but issues no
  /// OpenGL call: building stages and geometries fails and clearing does nothing.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 {
      state: Rc::new(RefCell::new(state)),
    })
  }
}
