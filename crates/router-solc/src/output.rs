//! solc standard-JSON output model and compiled artifacts.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Raw standard-JSON compiler output, as parsed from solc's stdout.
#[derive(Debug, Deserialize)]
pub struct SolcOutput {
    #[serde(default)]
    pub errors: Vec<SolcDiagnostic>,
    /// `source file -> contract name -> contract output`.
    #[serde(default)]
    pub contracts: BTreeMap<String, BTreeMap<String, SolcContract>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcDiagnostic {
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl SolcDiagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }

    /// Prefer the compiler's formatted rendering when present.
    pub fn display_message(&self) -> &str {
        self.formatted_message.as_deref().unwrap_or(&self.message)
    }
}

#[derive(Debug, Deserialize)]
pub struct SolcContract {
    pub abi: Vec<Value>,
    pub metadata: String,
    pub evm: SolcEvmOutput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcEvmOutput {
    #[serde(default)]
    pub assembly: Option<String>,
    pub bytecode: SolcBytecode,
    pub deployed_bytecode: SolcBytecode,
    #[serde(default)]
    pub gas_estimates: Value,
}

#[derive(Debug, Deserialize)]
pub struct SolcBytecode {
    pub object: String,
}

/// Artifact bundle for one successfully compiled contract.
#[derive(Debug, Clone)]
pub struct CompileResult {
    pub abi: Vec<Value>,
    /// Raw metadata JSON blob, as emitted by solc.
    pub metadata: String,
    /// Compiler version recorded inside the metadata blob.
    pub solc_version: String,
    pub assembly: String,
    pub bytecode: String,
    pub deployed_bytecode: String,
    pub gas_estimates: Value,
}

/// Compilation failure, annotated with the contract being compiled.
#[derive(Debug, Clone)]
pub struct CompilationError {
    pub contract_name: String,
    pub reason: String,
}

impl std::fmt::Display for CompilationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to compile contract \"{}\": {}",
            self.contract_name, self.reason
        )
    }
}

impl std::error::Error for CompilationError {}
