//! Router assembly: extraction, validation, tree construction, rendering,
//! and template substitution, in one all-or-nothing pass.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use router_abi::{address, extract_selectors, ContractDescriptor, FunctionSelector};

use crate::config::RouterConfig;
use crate::errors::RouterError;
use crate::render::{render_dispatch_tree, render_module_constants, render_receive_stub};
use crate::template::{render_template, ROUTER_TEMPLATE};
use crate::tree::build_dispatch_tree;
use crate::validate::validate_selectors;

/// Produce the router contract source for `contracts`.
///
/// Fails without partial output on an empty contract list, a malformed
/// deployed address, or a selector collision. Identical inputs yield
/// byte-identical source text.
pub fn render_router(contracts: &[ContractDescriptor], config: &RouterConfig) -> Result<String> {
    if contracts.is_empty() {
        return Err(RouterError::EmptyContractList {
            router_name: config.router_name.clone(),
        }
        .into());
    }

    for contract in contracts {
        if !address::is_valid_address(&contract.deployed_address) {
            return Err(RouterError::InvalidAddress {
                contract_name: contract.contract_name.clone(),
                address: contract.deployed_address.clone(),
            }
            .into());
        }
    }

    let selectors = collect_selectors(contracts, config)?;
    validate_selectors(&selectors)?;

    debug!(
        contracts = contracts.len(),
        selectors = selectors.len(),
        router = %config.router_name,
        "building dispatch tree"
    );

    let tree = build_dispatch_tree(&selectors);

    let mut substitutions = BTreeMap::new();
    substitutions.insert("module_name", config.router_name.clone());
    substitutions.insert("modules", render_module_constants(contracts));
    substitutions.insert("selectors", render_dispatch_tree(&tree));
    substitutions.insert(
        "receive",
        render_receive_stub(config.can_receive_plain_eth),
    );

    let template = config.template.as_deref().unwrap_or(ROUTER_TEMPLATE);
    Ok(render_template(template, &substitutions))
}

/// Extract eligible selectors from every contract, in descriptor order.
fn collect_selectors(
    contracts: &[ContractDescriptor],
    config: &RouterConfig,
) -> Result<Vec<FunctionSelector>> {
    let filter = |name: &str| config.accepts(name);
    let mut all = Vec::new();
    for contract in contracts {
        let mut selectors = extract_selectors(&contract.contract_name, &contract.abi, &filter)?;
        all.append(&mut selectors);
    }
    Ok(all)
}
