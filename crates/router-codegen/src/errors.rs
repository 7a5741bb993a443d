//! Router generation error types.
//!
//! Generation is all-or-nothing: every variant aborts the current run with
//! no partial output, and none is ever downgraded to a warning.

use router_abi::FunctionSelector;

/// Errors surfaced while assembling a router contract.
#[derive(Debug, Clone)]
pub enum RouterError {
    /// The assembler was invoked with no contracts to route.
    EmptyContractList {
        /// Name of the router being generated.
        router_name: String,
    },

    /// Two or more distinct functions hash to the same 4-byte selector.
    SelectorCollision {
        /// Every conflicting selector record, in first-seen order.
        conflicts: Vec<FunctionSelector>,
    },

    /// A descriptor carries a malformed deployed address.
    InvalidAddress {
        contract_name: String,
        address: String,
    },
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::EmptyContractList { router_name } => {
                write!(
                    f,
                    "No contracts found to render during \"{}\" generation",
                    router_name
                )
            }
            RouterError::SelectorCollision { conflicts } => {
                writeln!(
                    f,
                    "The following contracts have repeated function selectors behind the same Router:"
                )?;
                for selector in conflicts {
                    writeln!(
                        f,
                        "  {} // {}",
                        selector.selector_hex,
                        selector.qualified_name()
                    )?;
                }
                Ok(())
            }
            RouterError::InvalidAddress {
                contract_name,
                address,
            } => {
                write!(
                    f,
                    "Contract {} has an invalid deployed address: \"{}\"",
                    contract_name, address
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_lists_each_conflict() {
        let err = RouterError::SelectorCollision {
            conflicts: vec![
                FunctionSelector::new("SampleModule", "getValue", 0x20965255),
                FunctionSelector::new("RepeatedModule", "getValue", 0x20965255),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("repeated function selectors"));
        assert!(message.contains("  0x20965255 // SampleModule.getValue()"));
        assert!(message.contains("  0x20965255 // RepeatedModule.getValue()"));
    }

    #[test]
    fn test_empty_contract_list_names_the_router() {
        let err = RouterError::EmptyContractList {
            router_name: "CoreRouter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No contracts found to render during \"CoreRouter\" generation"
        );
    }
}
