mod common;

use common::{Call, MockContext};
use prism::{
  backend::query::QueryError,
  context::GraphicsContext,
  pipeline::PipelineState,
  shader::Program,
  tess::{Mode, Tess, TessError},
};

const TRIANGLE: [[f32; 2]; 3] = [[-0.5, -0.5], [0.5, -0.5], [0.0, 0.5]];

#[test]
fn upload_flattens_positions() {
  let mut ctx = MockContext::new();
  let tess = Tess::new(&mut ctx, &TRIANGLE, Mode::Triangle).unwrap();

  assert_eq!(tess.vert_nb(), 3);
  assert_eq!(tess.mode(), Mode::Triangle);
  assert_eq!(
    ctx.calls(),
    vec![Call::UploadVertices(
      1,
      vec![-0.5, -0.5, 0.5, -0.5, 0.0, 0.5],
      2
    )]
  );

  drop(tess);
  assert_eq!(ctx.calls(), vec![Call::DeleteVertices(1)]);
}

#[test]
fn reject_empty_vertices() {
  let mut ctx = MockContext::new();
  let vertices: &[[f32; 2]] = &[];

  assert_eq!(
    Tess::new(&mut ctx, vertices, Mode::Triangle).unwrap_err(),
    TessError::NoVertices
  );
  assert!(ctx.calls().is_empty());
}

#[test]
fn reject_unsupported_components() {
  let mut ctx = MockContext::new();

  assert_eq!(
    Tess::new(&mut ctx, &[[0.; 5]], Mode::Point).unwrap_err(),
    TessError::UnsupportedComponents(5)
  );
  assert_eq!(
    Tess::new(&mut ctx, &[[0.; 0]], Mode::Point).unwrap_err(),
    TessError::UnsupportedComponents(0)
  );
}

#[test]
fn render_frame() {
  let mut ctx = MockContext::new();
  let tess = Tess::new(&mut ctx, &TRIANGLE, Mode::Triangle).unwrap();
  let program = Program::from_strings(&mut ctx, "void main() {}", "void main() {}").unwrap();
  ctx.calls();

  ctx
    .pipeline_gate()
    .pipeline(&PipelineState::default(), |mut shd_gate| {
      shd_gate.shade(&program, |mut tess_gate| {
        tess_gate.render(&tess);
      });
    });

  assert_eq!(
    ctx.calls(),
    vec![
      Call::Clear([0., 0., 0., 1.]),
      Call::UseProgram(4),
      Call::Draw(1, Mode::Triangle, 3),
    ]
  );
}

#[test]
fn render_without_clearing() {
  let mut ctx = MockContext::new();
  let tess = Tess::new(&mut ctx, &TRIANGLE, Mode::Line).unwrap();
  let program = Program::from_strings(&mut ctx, "void main() {}", "void main() {}").unwrap();
  ctx.calls();

  let state = PipelineState::new().set_clear_color(None);
  ctx.pipeline_gate().pipeline(&state, |mut shd_gate| {
    shd_gate.shade(&program, |mut tess_gate| {
      tess_gate.render(&tess);
    });
  });

  assert_eq!(
    ctx.calls(),
    vec![Call::UseProgram(4), Call::Draw(1, Mode::Line, 3)]
  );
}

#[test]
fn resources_release_in_reverse_acquisition_order() {
  let log = {
    let mut ctx = MockContext::new();
    let log = ctx.log();
    let _tess = Tess::new(&mut ctx, &TRIANGLE, Mode::Triangle).unwrap();
    let _program = Program::from_strings(&mut ctx, "void main() {}", "void main() {}").unwrap();
    log.borrow_mut().clear();
    log
  };

  assert_eq!(
    *log.borrow(),
    vec![Call::DeleteProgram(4), Call::DeleteVertices(1)]
  );
}

#[test]
fn query_through_context() {
  let mut ctx = MockContext::new();
  let query = ctx.query();

  assert_eq!(query.backend_version().unwrap(), "mock 1.0");
  assert_eq!(
    query.backend_shading_lang_version().unwrap_err(),
    QueryError::NoBackendShadingLanguageVersion
  );
}
