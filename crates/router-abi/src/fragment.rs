//! JSON ABI fragment model and canonical signature formatting.
//!
//! Fragments arrive as ethers-style JSON ABI entries. Only named `function`
//! entries contribute selectors; events, constructors, and fallback entries
//! are carried through deserialization but never routed.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A single parameter of an ABI entry.
///
/// `kind` holds the raw ABI type string (`uint256`, `address[]`,
/// `tuple[2]`, ...). Tuple kinds resolve their component list recursively
/// when formatted canonically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<AbiParameter>>,
}

impl AbiParameter {
    /// Canonical type string as it appears in a function signature.
    ///
    /// Tuples render as parenthesized component lists; array suffixes carry
    /// over, so `tuple[2]` over `(address, uint256)` becomes
    /// `(address,uint256)[2]`.
    pub fn canonical_type(&self) -> Result<String> {
        if let Some(array_suffix) = self.kind.strip_prefix("tuple") {
            let Some(components) = &self.components else {
                bail!("tuple parameter is missing its components");
            };
            let inner = components
                .iter()
                .map(|c| c.canonical_type())
                .collect::<Result<Vec<_>>>()?
                .join(",");
            Ok(format!("({}){}", inner, array_suffix))
        } else {
            Ok(self.kind.clone())
        }
    }
}

/// One entry of a contract's JSON ABI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiFragment {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<AbiParameter>,
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
}

impl AbiFragment {
    /// Whether this fragment can contribute a selector: a `function` entry
    /// with a non-empty name.
    pub fn is_selector_candidate(&self) -> bool {
        self.kind == "function" && self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Canonical signature: `name(type1,type2)`, no spaces, no return types.
    pub fn canonical_signature(&self) -> Result<String> {
        let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) else {
            bail!("ABI fragment has no function name");
        };
        let params = self
            .inputs
            .iter()
            .map(|p| p.canonical_type())
            .collect::<Result<Vec<_>>>()?
            .join(",");
        Ok(format!("{}({})", name, params))
    }
}
