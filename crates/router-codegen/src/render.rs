//! Rendering of dispatch code and per-contract fragments.
//!
//! Rendering is a stateless pass over an already-built tree: each recursive
//! call receives an explicit indent level and returns its text, so the
//! emitted source depends only on the tree shape.

use router_abi::ContractDescriptor;

use crate::tree::DispatchNode;

const TAB: &str = "    ";

/// The dispatch code lands inside the template's `findImplementation`
/// function, four blocks deep.
const BASE_INDENT: usize = 4;

fn indent(level: usize) -> String {
    TAB.repeat(BASE_INDENT + level)
}

/// Render the dispatch tree as nested Yul branching over `sig`.
///
/// Internal nodes emit a guarded short-circuit rather than an if/else: when
/// `sig` is below the right subtree's smallest selector the left branch runs
/// and leaves the dispatch function, otherwise control falls through to the
/// right branch. Exactly one leaf's case list is evaluated per call.
///
/// The result is trimmed: the template indents the first line, every later
/// line carries its own indentation.
pub fn render_dispatch_tree(tree: &DispatchNode) -> String {
    render_node(tree, 0).trim().to_string()
}

fn render_node(node: &DispatchNode, level: usize) -> String {
    match node {
        DispatchNode::Leaf(selectors) => {
            let mut lines = vec![format!("{}switch sig", indent(level))];
            for selector in selectors {
                lines.push(format!(
                    "{}case {} {{ result := {} }} // {}",
                    indent(level),
                    selector.selector_hex,
                    to_private_constant_case(&selector.contract_name),
                    selector.qualified_name()
                ));
            }
            lines.push(format!("{}leave", indent(level)));
            lines.join("\n")
        }
        DispatchNode::Node { left, right } => {
            let split = right
                .leftmost_selector()
                .expect("internal nodes always cover at least one selector");
            let lines = vec![
                format!("{}if lt(sig,{}) {{", indent(level), split.selector_hex),
                render_node(left, level + 1),
                format!("{}}}", indent(level)),
                render_node(right, level),
            ];
            lines.join("\n")
        }
    }
}

/// `SampleModule` -> `_SAMPLE_MODULE`: the private-constant naming
/// convention for module address bindings.
pub fn to_private_constant_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    out.push('_');
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            out.push('_');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// One `address private constant` declaration per contract.
///
/// Identifier uniqueness across contracts is assumed, not validated.
pub fn render_module_constants(contracts: &[ContractDescriptor]) -> String {
    contracts
        .iter()
        .map(|c| {
            format!(
                "{}address private constant {} = {};",
                TAB,
                to_private_constant_case(&c.contract_name),
                c.deployed_address
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// The optional bare-value-transfer stub; empty when disabled.
pub fn render_receive_stub(can_receive_plain_eth: bool) -> String {
    if can_receive_plain_eth {
        "\n    receive() external payable {}\n".to_string()
    } else {
        String::new()
    }
}
