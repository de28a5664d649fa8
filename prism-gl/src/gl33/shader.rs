use crate::gl33::{state::GLState, GL33};
use gl::{self, types::*};
use prism::{
  backend::shader::Shader,
  shader::{ProgramError, StageError, StageType},
};
use std::{cell::RefCell, ffi::CString, ptr::null, rc::Rc};

pub(crate) const SYMBOLS_NOT_LOADED: &str = "OpenGL symbols are not loaded";

#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
  ty: StageType,
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

#[derive(Debug)]
pub struct Program {
  pub(crate) handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe {
      self.state.borrow_mut().unuse_program(self.handle);
      gl::DeleteProgram(self.handle);
    }
  }
}

impl Program {
  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      if program_status(handle, gl::LINK_STATUS) {
        Ok(())
      } else {
        Err(ProgramError::link_failed(program_info_log(handle)))
      }
    }
  }

  fn validate(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::ValidateProgram(handle);

      if program_status(handle, gl::VALIDATE_STATUS) {
        Ok(())
      } else {
        Err(ProgramError::validation_failed(program_info_log(handle)))
      }
    }
  }
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    if !self.state.borrow().symbols_loaded() {
      return Err(StageError::compilation_failed(ty, SYMBOLS_NOT_LOADED));
    }

    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "source contains a nul byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::compilation_failed(
        ty,
        "unable to create shader stage",
      ));
    }

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      log::debug!("compiled {} {}", ty, handle);
      Ok(Stage { handle, ty })
    } else {
      let log = info_log(handle, gl::GetShaderiv, gl::GetShaderInfoLog);
      gl::DeleteShader(handle);

      Err(StageError::compilation_failed(ty, log))
    }
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    if handle == 0 {
      return Err(ProgramError::link_failed("unable to create shader program"));
    }

    gl::AttachShader(handle, vertex.handle);
    gl::AttachShader(handle, fragment.handle);

    let program = Program {
      handle,
      state: self.state.clone(),
    };
    program.link()?;

    // stages are deleted by their owner right after; detaching lets the driver free them then
    gl::DetachShader(handle, vertex.handle);
    gl::DetachShader(handle, fragment.handle);

    log::debug!(
      "linked program {} ({} {}, {} {})",
      handle,
      vertex.ty,
      vertex.handle,
      fragment.ty,
      fragment.handle
    );

    Ok(program)
  }

  unsafe fn validate_program(&mut self, program: &Self::ProgramRepr) -> Result<(), ProgramError> {
    program.validate()
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

unsafe fn program_status(handle: GLuint, pname: GLenum) -> bool {
  let mut status: GLint = gl::FALSE.into();
  gl::GetProgramiv(handle, pname, &mut status);
  status == gl::TRUE.into()
}

unsafe fn program_info_log(handle: GLuint) -> String {
  info_log(handle, gl::GetProgramiv, gl::GetProgramInfoLog)
}

/// Read the info log of a shader or program object.
unsafe fn info_log(
  handle: GLuint,
  get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
  get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
  let mut log_len: GLint = 0;
  get_iv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

  if log_len <= 0 {
    return String::new();
  }

  let mut log = vec![0u8; log_len as usize];
  let mut written: GLsizei = 0;
  get_log(
    handle,
    log_len,
    &mut written,
    log.as_mut_ptr() as *mut GLchar,
  );
  log.truncate(written.max(0) as usize);

  String::from_utf8_lossy(&log).trim_end().to_owned()
}
