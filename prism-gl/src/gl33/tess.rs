//! OpenGL vertex storage.

use crate::gl33::{
  state::{Bind, GLState},
  shader::SYMBOLS_NOT_LOADED,
  GL33,
};
use gl::types::*;
use prism::{
  backend::tess::Tess as TessBackend,
  tess::{Mode, TessError},
};
use std::{cell::RefCell, mem, ptr, rc::Rc};

/// Wrapped OpenGL buffer.
///
/// Used to drop the buffer.
#[derive(Debug)]
struct BufferWrapper {
  handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl Drop for BufferWrapper {
  fn drop(&mut self) {
    unsafe {
      self.state.borrow_mut().unbind_buffer(self.handle);
      gl::DeleteBuffers(1, &self.handle);
    }
  }
}

/// Vertex array object and the vertex buffer it reads from.
#[derive(Debug)]
pub struct VertexArray {
  vao: GLuint,
  // deleted after the vertex array
  _buffer: BufferWrapper,
  state: Rc<RefCell<GLState>>,
}

impl Drop for VertexArray {
  fn drop(&mut self) {
    unsafe {
      self.state.borrow_mut().unbind_vertex_array(self.vao);
      gl::DeleteVertexArrays(1, &self.vao);
    }
  }
}

unsafe impl TessBackend for GL33 {
  type TessRepr = VertexArray;

  unsafe fn build(
    &mut self,
    vertices: &[f32],
    components: usize,
  ) -> Result<Self::TessRepr, TessError> {
    if !self.state.borrow().symbols_loaded() {
      return Err(TessError::cannot_create(SYMBOLS_NOT_LOADED));
    }

    let mut vao: GLuint = 0;
    gl::GenVertexArrays(1, &mut vao);

    if vao == 0 {
      return Err(TessError::cannot_create("unable to create vertex array"));
    }

    let mut state = self.state.borrow_mut();

    // the vertex array stays bound: programs validated afterwards need one to be
    state.bind_vertex_array(vao, Bind::Forced);

    let mut handle: GLuint = 0;
    gl::GenBuffers(1, &mut handle);

    if handle == 0 {
      state.unbind_vertex_array(vao);
      gl::DeleteVertexArrays(1, &vao);
      return Err(TessError::cannot_create("unable to create vertex buffer"));
    }

    state.bind_array_buffer(handle, Bind::Forced);

    let bytes = mem::size_of::<f32>() * vertices.len();
    gl::BufferData(
      gl::ARRAY_BUFFER,
      bytes as GLsizeiptr,
      vertices.as_ptr() as *const _,
      gl::STATIC_DRAW,
    );

    gl::EnableVertexAttribArray(0);
    gl::VertexAttribPointer(
      0,
      components as GLint,
      gl::FLOAT,
      gl::FALSE,
      (mem::size_of::<f32>() * components) as GLsizei,
      ptr::null(),
    );

    drop(state);

    log::debug!(
      "uploaded {} vertices ({} components) to buffer {}, vertex array {}",
      vertices.len() / components,
      components,
      handle,
      vao
    );

    Ok(VertexArray {
      vao,
      _buffer: BufferWrapper {
        handle,
        state: self.state.clone(),
      },
      state: self.state.clone(),
    })
  }

  unsafe fn render(&mut self, tess: &Self::TessRepr, mode: Mode, vert_nb: usize) {
    self
      .state
      .borrow_mut()
      .bind_vertex_array(tess.vao, Bind::Cached);

    gl::DrawArrays(opengl_mode(mode), 0, vert_nb as GLsizei);
  }
}

fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Point => gl::POINTS,
    Mode::Line => gl::LINES,
    Mode::Triangle => gl::TRIANGLES,
  }
}
