//! Graphics state.

use gl::types::*;
use std::{cell::RefCell, error, ffi::CStr, fmt, marker::PhantomData, os::raw::c_char};

// TLS synchronization barrier for `GLState`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

// Every OpenGL entry point the backend issues.
const SYMBOLS: &[(&str, fn() -> bool)] = &[
  ("glAttachShader", gl::AttachShader::is_loaded),
  ("glBindBuffer", gl::BindBuffer::is_loaded),
  ("glBindVertexArray", gl::BindVertexArray::is_loaded),
  ("glBufferData", gl::BufferData::is_loaded),
  ("glClear", gl::Clear::is_loaded),
  ("glClearColor", gl::ClearColor::is_loaded),
  ("glCompileShader", gl::CompileShader::is_loaded),
  ("glCreateProgram", gl::CreateProgram::is_loaded),
  ("glCreateShader", gl::CreateShader::is_loaded),
  ("glDeleteBuffers", gl::DeleteBuffers::is_loaded),
  ("glDeleteProgram", gl::DeleteProgram::is_loaded),
  ("glDeleteShader", gl::DeleteShader::is_loaded),
  ("glDeleteVertexArrays", gl::DeleteVertexArrays::is_loaded),
  ("glDetachShader", gl::DetachShader::is_loaded),
  ("glDrawArrays", gl::DrawArrays::is_loaded),
  ("glEnableVertexAttribArray", gl::EnableVertexAttribArray::is_loaded),
  ("glGenBuffers", gl::GenBuffers::is_loaded),
  ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
  ("glGetFloatv", gl::GetFloatv::is_loaded),
  ("glGetIntegerv", gl::GetIntegerv::is_loaded),
  ("glGetProgramInfoLog", gl::GetProgramInfoLog::is_loaded),
  ("glGetProgramiv", gl::GetProgramiv::is_loaded),
  ("glGetShaderInfoLog", gl::GetShaderInfoLog::is_loaded),
  ("glGetShaderiv", gl::GetShaderiv::is_loaded),
  ("glGetString", gl::GetString::is_loaded),
  ("glLinkProgram", gl::LinkProgram::is_loaded),
  ("glShaderSource", gl::ShaderSource::is_loaded),
  ("glUseProgram", gl::UseProgram::is_loaded),
  ("glValidateProgram", gl::ValidateProgram::is_loaded),
  ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded),
];

/// Names of the OpenGL entry points used by the backend that the loader could not resolve.
pub fn missing_symbols() -> Vec<&'static str> {
  SYMBOLS
    .iter()
    .filter(|(_, is_loaded)| !is_loaded())
    .map(|(name, _)| *name)
    .collect()
}

/// Cached value.
///
/// A cached value is used to prevent issuing GPU commands when the target value is already set
/// to what the command would set.
#[derive(Debug)]
struct Cached<T>(Option<T>)
where
  T: PartialEq;

impl<T> Cached<T>
where
  T: PartialEq,
{
  fn new(initial: T) -> Self {
    Cached(Some(initial))
  }

  fn invalid() -> Self {
    Cached(None)
  }

  fn set(&mut self, value: T) {
    self.0 = Some(value);
  }

  /// A non-cached value is invalid whatever the compared value.
  fn is_invalid(&self, new_val: &T) -> bool {
    match &self.0 {
      Some(ref t) => t != new_val,
      _ => true,
    }
  }
}

/// Whether a bind must go through the cache or be forced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Bind {
  Forced,
  Cached,
}

/// The graphics state.
///
/// This type represents the current state of a given graphics context. It adds a small cache
/// layer over the OpenGL calls prism issues so that the same call with the same parameters is not
/// sent twice in a row.
#[derive(Debug)]
pub struct GLState {
  _a: PhantomData<*const ()>, // !Send and !Sync

  // clear buffers
  clear_color: Cached<[GLfloat; 4]>,

  // array buffer
  bound_array_buffer: GLuint,

  // vertex array
  bound_vertex_array: GLuint,

  // shader program
  current_program: GLuint,

  // false if any entry point in SYMBOLS is missing; no OpenGL call is issued then
  symbols_loaded: bool,
}

impl GLState {
  /// Create a new `GLState`.
  ///
  /// > Note: keep in mind you can create only one per thread.
  pub(crate) fn new() -> Result<Self, StateQueryError> {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match *inner {
        Some(_) => {
          inner.take();
          Self::get_from_context()
        }

        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }

  /// Get a `GLState` from the current OpenGL context.
  ///
  /// If the OpenGL symbols are not all loaded, the context is not queried and the state starts
  /// from the default bindings with an unknown clear color.
  fn get_from_context() -> Result<Self, StateQueryError> {
    if !missing_symbols().is_empty() {
      return Ok(GLState {
        _a: PhantomData,
        clear_color: Cached::invalid(),
        bound_array_buffer: 0,
        bound_vertex_array: 0,
        current_program: 0,
        symbols_loaded: false,
      });
    }

    unsafe {
      let clear_color = Cached::new(get_ctx_clear_color());
      let bound_array_buffer = get_ctx_integer(gl::ARRAY_BUFFER_BINDING)?;
      let bound_vertex_array = get_ctx_integer(gl::VERTEX_ARRAY_BINDING)?;
      let current_program = get_ctx_integer(gl::CURRENT_PROGRAM)?;

      Ok(GLState {
        _a: PhantomData,
        clear_color,
        bound_array_buffer,
        bound_vertex_array,
        current_program,
        symbols_loaded: true,
      })
    }
  }

  /// Whether every OpenGL entry point the backend issues was loaded.
  pub(crate) fn symbols_loaded(&self) -> bool {
    self.symbols_loaded
  }

  pub(crate) unsafe fn set_clear_color(&mut self, clear_color: [GLfloat; 4]) {
    if self.clear_color.is_invalid(&clear_color) {
      let [r, g, b, a] = clear_color;
      gl::ClearColor(r, g, b, a);
      self.clear_color.set(clear_color);
    }
  }

  pub(crate) unsafe fn bind_array_buffer(&mut self, handle: GLuint, bind: Bind) {
    if bind == Bind::Forced || self.bound_array_buffer != handle {
      gl::BindBuffer(gl::ARRAY_BUFFER, handle);
      self.bound_array_buffer = handle;
    }
  }

  /// Forget `handle` if it is the bound array buffer; it is about to be deleted.
  pub(crate) fn unbind_buffer(&mut self, handle: GLuint) {
    if self.bound_array_buffer == handle {
      self.bound_array_buffer = 0;
    }
  }

  pub(crate) unsafe fn bind_vertex_array(&mut self, handle: GLuint, bind: Bind) {
    if bind == Bind::Forced || self.bound_vertex_array != handle {
      gl::BindVertexArray(handle);
      self.bound_vertex_array = handle;
    }
  }

  /// Forget `handle` if it is the bound vertex array; it is about to be deleted.
  pub(crate) fn unbind_vertex_array(&mut self, handle: GLuint) {
    if self.bound_vertex_array == handle {
      self.bound_vertex_array = 0;
    }
  }

  pub(crate) unsafe fn use_program(&mut self, handle: GLuint) {
    if self.current_program != handle {
      gl::UseProgram(handle);
      self.current_program = handle;
    }
  }

  /// Forget `handle` if it is the current program; it is about to be deleted.
  pub(crate) fn unuse_program(&mut self, handle: GLuint) {
    if self.current_program == handle {
      self.current_program = 0;
    }
  }

  pub(crate) fn get_gl_version(&self) -> Option<String> {
    if !self.symbols_loaded {
      return None;
    }

    unsafe { get_string(gl::VERSION) }
  }

  pub(crate) fn get_glsl_version(&self) -> Option<String> {
    if !self.symbols_loaded {
      return None;
    }

    unsafe { get_string(gl::SHADING_LANGUAGE_VERSION) }
  }
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// The [`GLState`] object is unavailable.
  ///
  /// That might occur if the current thread doesn’t support allocating a new graphics state. It
  /// might happen if you try to have more than one state on the same thread, for instance.
  UnavailableGLState,
  /// A binding point reported a negative object name.
  InvalidBinding(GLenum, GLint),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
      StateQueryError::InvalidBinding(pname, value) => {
        write!(f, "invalid binding for {:#x}: {}", pname, value)
      }
    }
  }
}

impl error::Error for StateQueryError {}

unsafe fn get_ctx_clear_color() -> [GLfloat; 4] {
  let mut data = [0.; 4];
  gl::GetFloatv(gl::COLOR_CLEAR_VALUE, data.as_mut_ptr());
  data
}

unsafe fn get_ctx_integer(pname: GLenum) -> Result<GLuint, StateQueryError> {
  let mut value = 0;
  gl::GetIntegerv(pname, &mut value);

  if value < 0 {
    Err(StateQueryError::InvalidBinding(pname, value))
  } else {
    Ok(value as GLuint)
  }
}

unsafe fn get_string(name: GLenum) -> Option<String> {
  let ptr = gl::GetString(name);

  if ptr.is_null() {
    None
  } else {
    Some(
      CStr::from_ptr(ptr as *const c_char)
        .to_string_lossy()
        .into_owned(),
    )
  }
}
