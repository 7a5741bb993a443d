//! Driving `solc --standard-json` as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::input::{is_known_evm_version, standard_json_input, DEFAULT_EVM_VERSION};
use crate::output::{CompilationError, CompileResult, SolcOutput};

/// Compile one contract source with the `solc` binary on `PATH`.
///
/// `evm_version` of `None` locks to [`DEFAULT_EVM_VERSION`]; an unknown
/// version string fails before the compiler is spawned.
pub fn compile_contract(
    contract_name: &str,
    source_code: &str,
    evm_version: Option<&str>,
) -> Result<CompileResult> {
    let evm_version = evm_version.unwrap_or(DEFAULT_EVM_VERSION);
    if !is_known_evm_version(evm_version) {
        return Err(CompilationError {
            contract_name: contract_name.to_string(),
            reason: format!("unknown EVM version \"{}\"", evm_version),
        }
        .into());
    }

    let input = standard_json_input(contract_name, source_code, evm_version);
    let input_json =
        serde_json::to_string(&input).context("failed to serialize compiler input")?;

    debug!(contract = contract_name, evm_version, "invoking solc");

    let mut child = Command::new("solc")
        .arg("--standard-json")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn solc (is it on PATH?)")?;

    child
        .stdin
        .take()
        .context("solc stdin unavailable")?
        .write_all(input_json.as_bytes())
        .context("failed to write compiler input")?;

    let output = child
        .wait_with_output()
        .context("failed to read solc output")?;
    if !output.status.success() {
        return Err(CompilationError {
            contract_name: contract_name.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let solc_output: SolcOutput =
        serde_json::from_slice(&output.stdout).context("failed to parse solc output")?;
    extract_result(contract_name, solc_output)
}

/// Pull the requested contract's artifacts out of the compiler output,
/// failing on any error-severity diagnostic.
fn extract_result(contract_name: &str, mut output: SolcOutput) -> Result<CompileResult> {
    let errors: Vec<&str> = output
        .errors
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.display_message())
        .collect();
    if !errors.is_empty() {
        return Err(CompilationError {
            contract_name: contract_name.to_string(),
            reason: errors.join("\n"),
        }
        .into());
    }

    let source_key = format!("{}.sol", contract_name);
    let contract = output
        .contracts
        .remove(&source_key)
        .and_then(|mut contracts| contracts.remove(contract_name))
        .ok_or_else(|| CompilationError {
            contract_name: contract_name.to_string(),
            reason: "contract missing from compiler output".to_string(),
        })?;

    let solc_version = solc_version_from_metadata(&contract.metadata);

    Ok(CompileResult {
        abi: contract.abi,
        solc_version,
        assembly: contract.evm.assembly.unwrap_or_default(),
        bytecode: contract.evm.bytecode.object,
        deployed_bytecode: contract.evm.deployed_bytecode.object,
        gas_estimates: contract.evm.gas_estimates,
        metadata: contract.metadata,
    })
}

/// Compiler version recorded in the metadata blob (`compiler.version`).
fn solc_version_from_metadata(metadata: &str) -> String {
    serde_json::from_str::<serde_json::Value>(metadata)
        .ok()
        .and_then(|m| {
            m.get("compiler")?
                .get("version")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_evm_version_fails_before_spawning() {
        let err = compile_contract("SampleRouter", "contract SampleRouter {}", Some("montevideo"))
            .unwrap_err();
        let compile_err = err
            .downcast_ref::<CompilationError>()
            .expect("CompilationError");
        assert_eq!(compile_err.contract_name, "SampleRouter");
        assert!(compile_err.reason.contains("montevideo"));
    }

    #[test]
    fn test_error_diagnostics_abort_extraction() {
        let output: SolcOutput = serde_json::from_value(json!({
            "errors": [
                { "severity": "warning", "message": "unused variable" },
                {
                    "severity": "error",
                    "message": "Expected ';'",
                    "formattedMessage": "Router.sol:3:1: ParserError: Expected ';'"
                }
            ]
        }))
        .unwrap();

        let err = extract_result("Router", output).unwrap_err();
        let compile_err = err
            .downcast_ref::<CompilationError>()
            .expect("CompilationError");
        assert!(compile_err.reason.contains("ParserError"));
        assert!(!compile_err.reason.contains("unused variable"));
    }

    #[test]
    fn test_extract_result_reads_artifacts() {
        let metadata = json!({ "compiler": { "version": "0.8.11+commit.d7f03943" } }).to_string();
        let output: SolcOutput = serde_json::from_value(json!({
            "contracts": {
                "Router.sol": {
                    "Router": {
                        "abi": [{ "type": "fallback", "stateMutability": "payable" }],
                        "metadata": metadata,
                        "evm": {
                            "assembly": "    /* fallback */",
                            "bytecode": { "object": "608060" },
                            "deployedBytecode": { "object": "6080" },
                            "gasEstimates": { "creation": { "totalCost": "58193" } }
                        }
                    }
                }
            }
        }))
        .unwrap();

        let result = extract_result("Router", output).unwrap();
        assert_eq!(result.solc_version, "0.8.11+commit.d7f03943");
        assert_eq!(result.bytecode, "608060");
        assert_eq!(result.deployed_bytecode, "6080");
        assert_eq!(result.abi.len(), 1);
    }

    #[test]
    fn test_missing_contract_in_output() {
        let output: SolcOutput = serde_json::from_value(json!({ "contracts": {} })).unwrap();
        let err = extract_result("Router", output).unwrap_err();
        assert!(err.to_string().contains("missing from compiler output"));
    }

    #[test]
    fn test_solc_version_from_metadata() {
        assert_eq!(
            solc_version_from_metadata(
                &json!({ "compiler": { "version": "0.8.24+commit.e11b9ed9" } }).to_string()
            ),
            "0.8.24+commit.e11b9ed9"
        );
        assert_eq!(solc_version_from_metadata("not json"), "");
    }
}
