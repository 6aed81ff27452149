//! TypeScript source rendering from the component IR.
//!
//! This crate turns mapped component IR into emitted source text: the
//! per-widget component module, the index (re-export) module, and the
//! common re-export modules. Rendering is pure string building with no
//! I/O; persistence belongs to the orchestrator.

mod component;
mod index;
mod js;
mod reexports;

pub use component::generate_component;
pub use index::{generate_index, ReExport};
pub use reexports::generate_common_reexports;
