//! Feed module
//!
//! HTML and bookmarklet rendering.

pub mod renderer;

pub use renderer::{render_bookmarklet, render_page};
