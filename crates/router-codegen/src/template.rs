//! Router source template and placeholder substitution.

use std::collections::BTreeMap;

/// Built-in Solidity router template.
///
/// Markers (`{{module_name}}`, `{{modules}}`, `{{selectors}}`,
/// `{{receive}}`) are replaced by [`render_template`]. The dispatch code
/// sits inside a Yul `findImplementation` function; a zero result means no
/// selector matched and the call reverts with `UnknownSelector`.
pub const ROUTER_TEMPLATE: &str = r#"//SPDX-License-Identifier: UNLICENSED
pragma solidity ^0.8.11;

contract {{module_name}} {
    error UnknownSelector(bytes4 sel);

    {{modules}}
{{receive}}
    fallback() external payable {
        // Lookup table: Function selector => implementation contract
        address implementation;

        assembly {
            let sig32 := calldataload(0)
            let sig := shr(224, sig32)

            function findImplementation(sig) -> result {
                {{selectors}}
            }

            implementation := findImplementation(sig)
        }

        if (implementation == address(0)) {
            revert UnknownSelector(msg.sig);
        }

        // Delegate the call to the resolved module, bubbling the result up
        assembly {
            calldatacopy(0, 0, calldatasize())

            let result := delegatecall(gas(), implementation, 0, calldatasize(), 0, 0)

            returndatacopy(0, 0, returndatasize())

            switch result
            case 0 {
                revert(0, returndatasize())
            }
            default {
                return(0, returndatasize())
            }
        }
    }
}
"#;

/// Replace every `{{key}}` marker in `template` with its substitution value.
///
/// Unknown markers are left untouched so callers can layer their own
/// templating on top.
pub fn render_template(template: &str, substitutions: &BTreeMap<&str, String>) -> String {
    let mut out = template.to_string();
    for (key, value) in substitutions {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}
