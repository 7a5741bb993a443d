#![allow(dead_code)]
//! Shared fixtures for router generation tests.

use router_gen::{AbiFragment, ContractDescriptor};
use serde_json::json;

pub const TOKEN_MODULE_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const NFT_MODULE_ADDRESS: &str = "0xC011a73ee8576Fb46F5E1c5751cA3B9Fe0af2a6F";

/// Standard ERC-20 surface: exactly 9 functions, which fills one dispatch
/// leaf to the threshold.
pub fn erc20_abi() -> Vec<AbiFragment> {
    serde_json::from_value(json!([
        { "type": "function", "name": "name" },
        { "type": "function", "name": "symbol" },
        { "type": "function", "name": "decimals" },
        { "type": "function", "name": "totalSupply" },
        { "type": "function", "name": "balanceOf", "inputs": [{ "type": "address" }] },
        { "type": "function", "name": "transfer", "inputs": [
            { "type": "address" }, { "type": "uint256" }
        ]},
        { "type": "function", "name": "transferFrom", "inputs": [
            { "type": "address" }, { "type": "address" }, { "type": "uint256" }
        ]},
        { "type": "function", "name": "approve", "inputs": [
            { "type": "address" }, { "type": "uint256" }
        ]},
        { "type": "function", "name": "allowance", "inputs": [
            { "type": "address" }, { "type": "address" }
        ]},
        { "type": "event", "name": "Transfer" }
    ]))
    .expect("valid ERC-20 ABI fixture")
}

/// ERC-721 functions that do not overlap the ERC-20 signature set, so the
/// two fixtures can share a router without colliding.
pub fn nft_abi() -> Vec<AbiFragment> {
    serde_json::from_value(json!([
        { "type": "function", "name": "ownerOf", "inputs": [{ "type": "uint256" }] },
        { "type": "function", "name": "safeTransferFrom", "inputs": [
            { "type": "address" }, { "type": "address" }, { "type": "uint256" }
        ]},
        { "type": "function", "name": "getApproved", "inputs": [{ "type": "uint256" }] },
        { "type": "function", "name": "setApprovalForAll", "inputs": [
            { "type": "address" }, { "type": "bool" }
        ]},
        { "type": "function", "name": "isApprovedForAll", "inputs": [
            { "type": "address" }, { "type": "address" }
        ]},
        { "type": "function", "name": "tokenURI", "inputs": [{ "type": "uint256" }] }
    ]))
    .expect("valid ERC-721 ABI fixture")
}

pub fn contract(name: &str, address: &str, abi: Vec<AbiFragment>) -> ContractDescriptor {
    ContractDescriptor {
        contract_name: name.to_string(),
        deployed_address: address.to_string(),
        abi,
    }
}

pub fn token_module() -> ContractDescriptor {
    contract("TokenModule", TOKEN_MODULE_ADDRESS, erc20_abi())
}

pub fn nft_module() -> ContractDescriptor {
    contract("NftModule", NFT_MODULE_ADDRESS, nft_abi())
}
