//! solc compilation of generated router sources.
//!
//! Thin collaborator around the `solc` binary's standard-JSON interface:
//!
//! - **Input construction**: one-source compile requests with a pinned EVM
//!   target
//! - **Invocation**: `solc --standard-json` as a subprocess over stdin/stdout
//! - **Artifacts**: ABI, metadata, assembly, bytecode, and gas estimates
//!
//! Compilation failures surface as [`CompilationError`] annotated with the
//! contract being compiled; they are never retried.

pub mod compile;
pub mod input;
pub mod output;

// Re-export main types
pub use compile::compile_contract;
pub use input::{standard_json_input, StandardJsonInput, DEFAULT_EVM_VERSION, KNOWN_EVM_VERSIONS};
pub use output::{CompilationError, CompileResult};
