//! EVM Router Generator
//!
//! Generates the source of a router contract that dispatches incoming calls
//! to deployed module contracts by function selector:
//!
//! - **Selector extraction**: keccak-256 signature hashing over JSON ABIs
//! - **Collision validation**: reject ambiguous routing targets up front
//! - **Dispatch tree**: balanced binary comparisons over sorted selectors
//! - **Rendering**: Yul branch/switch code substituted into a contract
//!   template
//! - **Compilation**: optional solc standard-JSON compilation of the result
//!
//! See [`generate_router`] for the entry point and [`compile_contract`] for
//! the compiler collaborator.

use anyhow::Result;
use tracing::debug;

// Re-export the pipeline surface
pub use router_abi::{
    compute_selector, extract_selectors, AbiFragment, AbiParameter, ContractDescriptor,
    FunctionSelector,
};
pub use router_codegen::{
    render_router, DispatchNode, RouterConfig, RouterError, ROUTER_TEMPLATE,
    MAX_SELECTORS_PER_SWITCH,
};
pub use router_solc::{compile_contract, CompilationError, CompileResult};

/// Generate router source for the given deployed contracts.
///
/// Thin facade over [`render_router`] that records the routed modules at
/// debug level.
pub fn generate_router(contracts: &[ContractDescriptor], config: &RouterConfig) -> Result<String> {
    for contract in contracts {
        debug!(
            contract = %contract.contract_name,
            address = %contract.deployed_address,
            "routing module"
        );
    }

    render_router(contracts, config)
}
