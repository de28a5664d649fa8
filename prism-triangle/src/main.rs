//! Draw a single static triangle.
//!
//! The shader program is built out of a shader resource holding both the vertex and the fragment
//! sources (`res/shaders/Basic.shader` by default). Close the window to quit.
//!
//! The process exits with a non-zero status if the window cannot be opened, the shader resource
//! cannot be read or the shader program cannot be built.

use glfw::Context as _;
use prism::{
  context::GraphicsContext as _,
  pipeline::PipelineState,
  shader::Program,
  source::ShaderProgramSource,
  tess::{Mode, Tess},
};
use prism_glfw::GlfwSurface;
use prism_windowing::{WindowDim, WindowOpt};
use std::{
  error::Error,
  path::{Path, PathBuf},
  process,
};
use structopt::StructOpt;

// Positions of the triangle, in normalized device coordinates.
const TRIANGLE: [[f32; 2]; 3] = [[-0.5, -0.5], [0.5, -0.5], [0.0, 0.5]];

#[derive(Debug, StructOpt)]
pub struct CLIOpts {
  #[structopt(short, long, default_value = "res/shaders/Basic.shader")]
  /// Shader resource to build the program from.
  shader: PathBuf,

  #[structopt(long, default_value = "640")]
  /// Width of the window.
  width: u32,

  #[structopt(long, default_value = "480")]
  /// Height of the window.
  height: u32,

  #[structopt(short, long, default_value = "My OpenGL window")]
  /// Title of the window.
  title: String,
}

/// Resolve a relative resource path missing from the working directory against `fallback_dir`.
///
/// `path` is returned unchanged if it exists, is absolute or is missing from `fallback_dir` too.
fn resolve_resource(path: &Path, fallback_dir: &Path) -> PathBuf {
  if path.is_absolute() || path.exists() {
    return path.to_owned();
  }

  let fallback = fallback_dir.join(path);

  if fallback.exists() {
    log::debug!("{} not found, using {}", path.display(), fallback.display());
    fallback
  } else {
    path.to_owned()
  }
}

fn run(cli_opts: CLIOpts) -> Result<(), Box<dyn Error>> {
  let dim = WindowDim::Windowed {
    width: cli_opts.width,
    height: cli_opts.height,
  };
  let surface = GlfwSurface::new_gl33(&cli_opts.title, WindowOpt::default().set_dim(dim))?;
  let mut context = surface.context;
  let events = surface.events_rx;

  {
    let q = context.query();

    match q.backend_version() {
      Ok(version) => log::info!("OpenGL version: {}", version),
      Err(e) => log::warn!("{}", e),
    }

    match q.backend_shading_lang_version() {
      Ok(version) => log::info!("OpenGL shading language version: {}", version),
      Err(e) => log::warn!("{}", e),
    }
  }

  let triangle = Tess::new(&mut context, &TRIANGLE, Mode::Triangle)?;

  let shader = resolve_resource(&cli_opts.shader, Path::new(env!("CARGO_MANIFEST_DIR")));
  log::info!("parsing shader {}", shader.display());
  let source = ShaderProgramSource::from_path(&shader)?;
  log::debug!("vertex source:\n{}", source.vertex);
  log::debug!("fragment source:\n{}", source.fragment);

  let program = Program::from_source(&mut context, &source)?;
  drop(source);

  let pipeline_state = PipelineState::default();

  while !context.window.should_close() {
    context
      .pipeline_gate()
      .pipeline(&pipeline_state, |mut shd_gate| {
        shd_gate.shade(&program, |mut tess_gate| {
          tess_gate.render(&triangle);
        });
      });

    context.window.swap_buffers();

    context.window.glfw.poll_events();
    for (_, event) in glfw::flush_messages(&events) {
      log::trace!("{:?}", event);
    }
  }

  log::info!("window closed, exiting");

  // dropped in reverse order: program, triangle, then the window and its context
  Ok(())
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if let Err(e) = run(cli_opts) {
    log::error!("{}", e);

    let mut source = e.source();
    while let Some(cause) = source {
      log::error!("  caused by: {}", cause);
      source = cause.source();
    }

    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cli_defaults() {
    let opts = CLIOpts::from_iter(&["prism-triangle"]);

    assert_eq!(opts.shader, PathBuf::from("res/shaders/Basic.shader"));
    assert_eq!((opts.width, opts.height), (640, 480));
    assert_eq!(opts.title, "My OpenGL window");
  }

  #[test]
  fn cli_overrides() {
    let opts = CLIOpts::from_iter(&[
      "prism-triangle",
      "--shader",
      "other.shader",
      "--width",
      "800",
      "--height",
      "600",
    ]);

    assert_eq!(opts.shader, PathBuf::from("other.shader"));
    assert_eq!((opts.width, opts.height), (800, 600));
  }

  #[test]
  fn resource_falls_back_to_crate_dir() {
    let res_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/res"));
    let resolved = resolve_resource(Path::new("shaders/Basic.shader"), res_dir);

    assert_eq!(resolved, res_dir.join("shaders/Basic.shader"));
    assert!(ShaderProgramSource::from_path(resolved).is_ok());
  }

  #[test]
  fn default_resource_resolves_from_any_dir() {
    let resolved = resolve_resource(
      Path::new("res/shaders/Basic.shader"),
      Path::new(env!("CARGO_MANIFEST_DIR")),
    );

    assert!(resolved.is_file());
  }

  #[test]
  fn unknown_resource_is_left_alone() {
    let path = Path::new("res/shaders/Missing.shader");

    assert_eq!(
      resolve_resource(path, Path::new(env!("CARGO_MANIFEST_DIR"))),
      path
    );
  }

  #[test]
  fn bundled_shader_resource_splits() {
    let source = ShaderProgramSource::parse(include_str!("../res/shaders/Basic.shader"));

    assert!(source.vertex.starts_with("#version 330 core\n"));
    assert!(source.vertex.contains("gl_Position = position;"));
    assert!(source.fragment.starts_with("#version 330 core\n"));
    assert!(source.fragment.contains("out vec4 color;"));
    assert!(!source.vertex.contains("#shader"));
    assert!(!source.fragment.contains("#shader"));
  }
}
