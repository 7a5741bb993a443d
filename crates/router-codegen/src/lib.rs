//! Router source-code generation.
//!
//! Turns a set of deployed contract descriptors into the source of a single
//! router contract that dispatches incoming calls by function selector:
//!
//! - **Collision validation**: reject selector sets with ambiguous targets
//! - **Dispatch tree**: balanced binary split over the sorted selector space
//! - **Rendering**: nested Yul branching plus per-module address constants
//! - **Assembly**: template substitution into the final contract source
//!
//! The pipeline is pure and synchronous; identical inputs always produce
//! byte-identical source text.

pub mod assemble;
pub mod config;
pub mod errors;
pub mod render;
pub mod template;
pub mod tree;
pub mod validate;

// Re-export main types
pub use assemble::render_router;
pub use config::{FunctionFilter, RouterConfig};
pub use errors::RouterError;
pub use render::{render_module_constants, render_receive_stub, to_private_constant_case};
pub use template::{render_template, ROUTER_TEMPLATE};
pub use tree::{build_dispatch_tree, DispatchNode, MAX_SELECTORS_PER_SWITCH};
pub use validate::validate_selectors;
