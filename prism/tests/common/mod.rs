//! Recording backend used to exercise prism without a GPU.

#![allow(dead_code)]

use prism::{
  backend::{
    pipeline::Pipeline,
    query::{Query, QueryError},
    shader::Shader,
    tess::Tess,
  },
  context::GraphicsContext,
  shader::{ProgramError, StageError, StageType},
  tess::{Mode, TessError},
};
use std::{cell::RefCell, rc::Rc};

/// Driver calls observed by the mock.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
  CompileStage(u32, StageType),
  DeleteStage(u32),
  LinkProgram(u32, [u32; 2]),
  ValidateProgram(u32),
  DeleteProgram(u32),
  UploadVertices(u32, Vec<f32>, usize),
  DeleteVertices(u32),
  Clear([f32; 4]),
  UseProgram(u32),
  Draw(u32, Mode, usize),
}

pub type Log = Rc<RefCell<Vec<Call>>>;

/// A stage source containing this token fails to compile with the rest of its line as diagnostic.
pub const COMPILE_ERROR: &str = "#error";

#[derive(Debug, Default)]
pub struct Mock {
  pub log: Log,
  pub link_error: Option<String>,
  pub validate_error: Option<String>,
  next_handle: u32,
}

impl Mock {
  fn handle(&mut self) -> u32 {
    self.next_handle += 1;
    self.next_handle
  }

  fn record(&self, call: Call) {
    self.log.borrow_mut().push(call);
  }
}

#[derive(Debug)]
pub struct MockObject {
  handle: u32,
  log: Log,
  on_drop: fn(u32) -> Call,
}

impl Drop for MockObject {
  fn drop(&mut self) {
    self.log.borrow_mut().push((self.on_drop)(self.handle));
  }
}

unsafe impl Shader for Mock {
  type StageRepr = MockObject;

  type ProgramRepr = MockObject;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let handle = self.handle();
    self.record(Call::CompileStage(handle, ty));

    if let Some(line) = src.lines().find(|line| line.contains(COMPILE_ERROR)) {
      self.record(Call::DeleteStage(handle));
      let reason = line.replace(COMPILE_ERROR, "").trim().to_owned();
      return Err(StageError::compilation_failed(ty, reason));
    }

    Ok(MockObject {
      handle,
      log: self.log.clone(),
      on_drop: Call::DeleteStage,
    })
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = self.handle();
    self.record(Call::LinkProgram(handle, [vertex.handle, fragment.handle]));

    let program = MockObject {
      handle,
      log: self.log.clone(),
      on_drop: Call::DeleteProgram,
    };

    match self.link_error {
      Some(ref e) => Err(ProgramError::link_failed(e.as_str())),
      None => Ok(program),
    }
  }

  unsafe fn validate_program(&mut self, program: &Self::ProgramRepr) -> Result<(), ProgramError> {
    self.record(Call::ValidateProgram(program.handle));

    match self.validate_error {
      Some(ref e) => Err(ProgramError::validation_failed(e.as_str())),
      None => Ok(()),
    }
  }
}

unsafe impl Tess for Mock {
  type TessRepr = MockObject;

  unsafe fn build(
    &mut self,
    vertices: &[f32],
    components: usize,
  ) -> Result<Self::TessRepr, TessError> {
    let handle = self.handle();
    self.record(Call::UploadVertices(handle, vertices.to_vec(), components));

    Ok(MockObject {
      handle,
      log: self.log.clone(),
      on_drop: Call::DeleteVertices,
    })
  }

  unsafe fn render(&mut self, tess: &Self::TessRepr, mode: Mode, vert_nb: usize) {
    self.record(Call::Draw(tess.handle, mode, vert_nb));
  }
}

unsafe impl Pipeline for Mock {
  unsafe fn clear(&mut self, color: [f32; 4]) {
    self.record(Call::Clear(color));
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    self.record(Call::UseProgram(program.handle));
  }
}

unsafe impl Query for Mock {
  fn backend_version(&self) -> Result<String, QueryError> {
    Ok("mock 1.0".to_owned())
  }

  fn backend_shading_lang_version(&self) -> Result<String, QueryError> {
    Err(QueryError::NoBackendShadingLanguageVersion)
  }
}

#[derive(Debug, Default)]
pub struct MockContext {
  pub mock: Mock,
}

impl MockContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn log(&self) -> Log {
    self.mock.log.clone()
  }

  /// Take every call recorded so far.
  pub fn calls(&self) -> Vec<Call> {
    self.mock.log.borrow_mut().drain(..).collect()
  }
}

unsafe impl GraphicsContext for MockContext {
  type Backend = Mock;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.mock
  }
}
