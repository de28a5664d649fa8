//! Shader resources.
//!
//! A shader resource is a single text file that embeds both the vertex and the fragment stage
//! sources. Sections are delimited by marker lines:
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! ...
//! #shader fragment
//! #version 330 core
//! ...
//! ```
//!
//! A marker line is any line containing `#shader`. If the rest of the line mentions `vertex` or
//! `fragment`, the corresponding section becomes the active one; otherwise the active section is
//! left untouched. Every other line is appended, followed by `'\n'`, to the active section. Lines
//! found before any section was selected are discarded.

use std::{
  error, fmt,
  fs::File,
  io::{self, BufRead, BufReader},
  path::{Path, PathBuf},
};

const MARKER: &str = "#shader";

/// Section a line of a shader resource belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
  /// No marker seen yet.
  Unselected,
  /// Vertex stage section.
  Vertex,
  /// Fragment stage section.
  Fragment,
}

impl Default for Section {
  fn default() -> Self {
    Section::Unselected
  }
}

impl Section {
  /// Inspect a line for a section marker.
  ///
  /// Returns `None` if the line is not a marker. A marker that names no known section yields
  /// `Some(None)`, which leaves the active section unchanged.
  pub fn from_marker(line: &str) -> Option<Option<Section>> {
    if !line.contains(MARKER) {
      return None;
    }

    if line.contains("vertex") {
      Some(Some(Section::Vertex))
    } else if line.contains("fragment") {
      Some(Some(Section::Fragment))
    } else {
      Some(None)
    }
  }
}

/// Error that can occur while loading a shader resource.
#[non_exhaustive]
#[derive(Debug)]
pub enum SourceError {
  /// The resource could not be opened or read.
  Io {
    /// Path of the resource.
    path: PathBuf,
    /// Underlying I/O error.
    err: io::Error,
  },
}

impl fmt::Display for SourceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      SourceError::Io { ref path, ref err } => {
        write!(f, "cannot read shader resource {}: {}", path.display(), err)
      }
    }
  }
}

impl error::Error for SourceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      SourceError::Io { err, .. } => Some(err),
    }
  }
}

/// Vertex and fragment sources split out of a shader resource.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShaderProgramSource {
  /// Vertex stage source.
  pub vertex: String,
  /// Fragment stage source.
  pub fragment: String,
}

impl ShaderProgramSource {
  /// Split an in-memory shader resource.
  pub fn parse(src: &str) -> Self {
    let mut splitter = Splitter::default();

    for line in src.lines() {
      splitter.feed(line);
    }

    splitter.finish()
  }

  /// Split a shader resource read line by line from `reader`.
  pub fn from_reader<R>(reader: R) -> io::Result<Self>
  where
    R: BufRead,
  {
    let mut splitter = Splitter::default();

    for line in reader.lines() {
      splitter.feed(&line?);
    }

    Ok(splitter.finish())
  }

  /// Load and split the shader resource at `path`.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
    let path = path.as_ref();
    let io_err = |err| SourceError::Io {
      path: path.to_owned(),
      err,
    };

    let file = File::open(path).map_err(io_err)?;
    let source = Self::from_reader(BufReader::new(file)).map_err(io_err)?;

    log::debug!(
      "split {}: {} vertex bytes, {} fragment bytes",
      path.display(),
      source.vertex.len(),
      source.fragment.len()
    );

    Ok(source)
  }
}

/// Line accumulator shared by the in-memory and streamed entry points.
#[derive(Debug, Default)]
struct Splitter {
  section: Section,
  source: ShaderProgramSource,
  discarded: usize,
}

impl Splitter {
  fn feed(&mut self, line: &str) {
    if let Some(marker) = Section::from_marker(line) {
      if let Some(section) = marker {
        self.section = section;
      }

      return;
    }

    let buf = match self.section {
      Section::Vertex => &mut self.source.vertex,
      Section::Fragment => &mut self.source.fragment,
      Section::Unselected => {
        self.discarded += 1;
        return;
      }
    };

    buf.push_str(line);
    buf.push('\n');
  }

  fn finish(self) -> ShaderProgramSource {
    if self.discarded > 0 {
      log::warn!(
        "discarded {} line(s) found before the first section marker",
        self.discarded
      );
    }

    self.source
  }
}
