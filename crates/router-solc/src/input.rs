//! solc standard-JSON input construction.

use std::collections::BTreeMap;

use serde::Serialize;

/// EVM targets accepted by the solc versions this crate drives.
pub const KNOWN_EVM_VERSIONS: [&str; 12] = [
    "homestead",
    "tangerineWhistle",
    "spuriousDragon",
    "byzantium",
    "constantinople",
    "petersburg",
    "istanbul",
    "berlin",
    "london",
    "paris",
    "shanghai",
    "cancun",
];

/// Default EVM target. Locked to an older version so generated routers stay
/// deployable on chains that lag the latest hard fork.
pub const DEFAULT_EVM_VERSION: &str = "paris";

/// Top-level standard-JSON compile request.
#[derive(Debug, Clone, Serialize)]
pub struct StandardJsonInput {
    pub language: String,
    pub sources: BTreeMap<String, SourceContent>,
    pub settings: CompilerSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    pub output_selection: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub evm_version: String,
}

/// Whether `version` names an EVM target solc understands.
pub fn is_known_evm_version(version: &str) -> bool {
    KNOWN_EVM_VERSIONS.contains(&version)
}

/// Build the compile request for a single contract source, selecting every
/// output artifact.
pub fn standard_json_input(
    contract_name: &str,
    source_code: &str,
    evm_version: &str,
) -> StandardJsonInput {
    let mut sources = BTreeMap::new();
    sources.insert(
        format!("{}.sol", contract_name),
        SourceContent {
            content: source_code.to_string(),
        },
    );

    let mut output_selection = BTreeMap::new();
    output_selection.insert(
        "*".to_string(),
        BTreeMap::from([("*".to_string(), vec!["*".to_string()])]),
    );

    StandardJsonInput {
        language: "Solidity".to_string(),
        sources,
        settings: CompilerSettings {
            output_selection,
            evm_version: evm_version.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standard_json_shape() {
        let input = standard_json_input("SampleRouter", "contract SampleRouter {}", "paris");
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "language": "Solidity",
                "sources": {
                    "SampleRouter.sol": { "content": "contract SampleRouter {}" }
                },
                "settings": {
                    "outputSelection": { "*": { "*": ["*"] } },
                    "evmVersion": "paris"
                }
            })
        );
    }

    #[test]
    fn test_known_evm_versions() {
        assert!(is_known_evm_version("paris"));
        assert!(is_known_evm_version("cancun"));
        assert!(!is_known_evm_version("montevideo"));
        assert!(!is_known_evm_version("Paris"));
    }
}
