//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for prism. The only
//! backend so far is [`GL33`], for OpenGL 3.3 core contexts.
//!
//! The backend does not create any OpenGL context. Creating one and loading the OpenGL symbols
//! with [`gl::load_with`] must be done beforehand, for instance by `prism-glfw`.

#[cfg(feature = "gl33")]
pub mod gl33;

#[cfg(feature = "gl33")]
pub use gl33::GL33;
