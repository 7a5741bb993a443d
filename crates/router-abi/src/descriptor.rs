//! Caller-supplied descriptions of the deployed contracts behind a router.

use serde::{Deserialize, Serialize};

use crate::fragment::AbiFragment;

/// One deployed module contract: its name, on-chain address, and ABI.
///
/// Owned by the caller and read-only to the generation pipeline. The JSON
/// shape matches deployment tooling output (`contractName`,
/// `deployedAddress`, `abi`); unrecognized fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDescriptor {
    pub contract_name: String,
    pub deployed_address: String,
    pub abi: Vec<AbiFragment>,
}
