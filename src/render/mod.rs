//! Text rendering of captures.
//!
//! Three views over the same capture:
//! - ASCII layout grid (default)
//! - Structure-only skeleton
//! - LLM document with metadata, legend and interactive element list

pub mod ascii;
pub mod grid;
pub mod llm;

// Re-export main functions
pub use ascii::{render_ascii, render_structure, RenderOptions};
pub use llm::render_for_llm;
