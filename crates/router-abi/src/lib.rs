//! EVM ABI model and function selector derivation.
//!
//! This crate provides the input side of router generation:
//!
//! - **ABI fragments**: serde model of ethers-style JSON ABI entries
//! - **Canonical signatures**: normalized `name(type1,type2)` formatting
//! - **Selector derivation**: first 4 bytes of the keccak-256 signature hash
//! - **Address utilities**: validation, normalization, and EIP-55 checksums
//!
//! # Example
//!
//! ```
//! use router_abi::compute_selector;
//!
//! assert_eq!(compute_selector("transfer(address,uint256)"), 0xa9059cbb);
//! ```

pub mod address;
pub mod descriptor;
pub mod fragment;
pub mod selector;

// Re-export main types
pub use descriptor::ContractDescriptor;
pub use fragment::{AbiFragment, AbiParameter};
pub use selector::{compute_selector, extract_selectors, FunctionSelector};
