//! Cross-contract selector collision detection.

use std::collections::{BTreeMap, BTreeSet};

use router_abi::FunctionSelector;

use crate::errors::RouterError;

/// Reject selector values claimed by more than one distinct function
/// identity.
///
/// Duplicate entries for the same `(contract, function)` pair are tolerated;
/// only two different functions behind the same 4-byte value make routing
/// ambiguous. The conflict list preserves first-seen order over the input so
/// the caller can trace it back to their contract ordering.
pub fn validate_selectors(selectors: &[FunctionSelector]) -> Result<(), RouterError> {
    let mut identities: BTreeMap<u32, BTreeSet<(&str, &str)>> = BTreeMap::new();
    for selector in selectors {
        identities
            .entry(selector.selector_value)
            .or_default()
            .insert((
                selector.contract_name.as_str(),
                selector.function_name.as_str(),
            ));
    }

    let collided: BTreeSet<u32> = identities
        .iter()
        .filter(|(_, idents)| idents.len() > 1)
        .map(|(value, _)| *value)
        .collect();
    if collided.is_empty() {
        return Ok(());
    }

    let mut conflicts: Vec<FunctionSelector> = Vec::new();
    for selector in selectors {
        let already_listed = conflicts.iter().any(|c| {
            c.selector_value == selector.selector_value
                && c.contract_name == selector.contract_name
                && c.function_name == selector.function_name
        });
        if collided.contains(&selector.selector_value) && !already_listed {
            conflicts.push(selector.clone());
        }
    }

    Err(RouterError::SelectorCollision { conflicts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(contract: &str, function: &str, value: u32) -> FunctionSelector {
        FunctionSelector::new(contract, function, value)
    }

    #[test]
    fn test_distinct_selectors_pass() {
        let selectors = vec![
            selector("OwnerModule", "owner", 0x8da5cb5b),
            selector("TokenModule", "transfer", 0xa9059cbb),
        ];
        assert!(validate_selectors(&selectors).is_ok());
    }

    #[test]
    fn test_duplicate_identity_is_tolerated() {
        // The same fragment listed twice routes to one target; not ambiguous.
        let selectors = vec![
            selector("TokenModule", "transfer", 0xa9059cbb),
            selector("TokenModule", "transfer", 0xa9059cbb),
        ];
        assert!(validate_selectors(&selectors).is_ok());
    }

    #[test]
    fn test_cross_contract_collision_is_rejected() {
        let selectors = vec![
            selector("SampleModule", "getValue", 0x20965255),
            selector("OwnerModule", "owner", 0x8da5cb5b),
            selector("RepeatedModule", "getValue", 0x20965255),
        ];
        let err = validate_selectors(&selectors).unwrap_err();
        let RouterError::SelectorCollision { conflicts } = &err else {
            panic!("expected a selector collision");
        };
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].contract_name, "SampleModule");
        assert_eq!(conflicts[1].contract_name, "RepeatedModule");
    }

    #[test]
    fn test_same_contract_different_functions_collide() {
        // Hypothetical: two differently named functions hashing alike are
        // still ambiguous even inside one contract.
        let selectors = vec![
            selector("SampleModule", "alpha", 0x11223344),
            selector("SampleModule", "beta", 0x11223344),
        ];
        assert!(validate_selectors(&selectors).is_err());
    }
}
