//! Function selector derivation and extraction.
//!
//! A selector is the first 4 bytes of the keccak-256 digest of a function's
//! canonical signature. Two fragments with the same canonical signature
//! always hash to the same selector, which is what makes cross-contract
//! collisions possible behind a shared router.

use anyhow::{Context, Result};
use sha3::{Digest, Keccak256};

use crate::fragment::AbiFragment;

/// One routable function: its owning contract, name, and 4-byte dispatch key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSelector {
    pub contract_name: String,
    pub function_name: String,
    /// The 4 selector bytes as a big-endian integer, used for numeric
    /// ordering and comparison emission.
    pub selector_value: u32,
    /// Lowercase `0x`-prefixed 8-digit hex rendering of `selector_value`.
    pub selector_hex: String,
}

impl FunctionSelector {
    pub fn new(
        contract_name: impl Into<String>,
        function_name: impl Into<String>,
        selector_value: u32,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            function_name: function_name.into(),
            selector_value,
            selector_hex: format!("0x{:08x}", selector_value),
        }
    }

    /// `Contract.function()` annotation used in rendered case comments and
    /// collision listings.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}()", self.contract_name, self.function_name)
    }
}

/// First 4 bytes of `keccak256(signature)` as a big-endian u32.
pub fn compute_selector(signature: &str) -> u32 {
    let digest = Keccak256::digest(signature.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Extract a selector record for every eligible fragment accepted by
/// `filter`, preserving fragment order.
///
/// Pure: reads the ABI, never mutates it, and yields identical output for
/// identical input.
pub fn extract_selectors(
    contract_name: &str,
    abi: &[AbiFragment],
    filter: &dyn Fn(&str) -> bool,
) -> Result<Vec<FunctionSelector>> {
    let mut selectors = Vec::new();
    for fragment in abi {
        if !fragment.is_selector_candidate() {
            continue;
        }
        let name = fragment.name.as_deref().unwrap_or_default();
        if !filter(name) {
            continue;
        }
        let signature = fragment.canonical_signature().with_context(|| {
            format!("invalid ABI fragment for function {}.{}", contract_name, name)
        })?;
        selectors.push(FunctionSelector::new(
            contract_name,
            name,
            compute_selector(&signature),
        ));
    }
    Ok(selectors)
}
