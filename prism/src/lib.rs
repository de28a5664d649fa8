//! # prism
//!
//! Split a two-section shader resource, build a shader program out of it and draw static
//! geometry with it.
//!
//! prism is backend-agnostic: every driver call goes through the traits in [`backend`], and every
//! operation takes an explicit [`GraphicsContext`](context::GraphicsContext). The `prism-gl`
//! crate provides the OpenGL 3.3 backend and `prism-glfw` a GLFW surface exposing a context of
//! that backend.
//!
//! # What’s included?
//!
//! - [`source`]: split a shader resource into its vertex and fragment sources.
//! - [`shader`]: compile stages and link them into a [`Program`](shader::Program).
//! - [`tess`]: upload vertex positions.
//! - [`pipeline`]: clear, shade and draw.
//! - [`query`]: backend information such as the driver version.

#![deny(missing_docs)]

pub mod backend;
pub mod context;
pub mod pipeline;
pub mod query;
pub mod shader;
pub mod source;
pub mod tess;
