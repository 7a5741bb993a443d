//! EVM address validation and normalization.
//!
//! Deployed addresses are 20-byte values written as `0x`-prefixed 40-digit
//! hex strings. This module is the canonical source for address checks in
//! the workspace; the assembler validates every descriptor's address here
//! before any rendering happens.

use sha3::{Digest, Keccak256};

/// Strict check: `0x` prefix followed by exactly 40 hex digits.
///
/// # Examples
///
/// ```
/// use router_abi::address::is_valid_address;
///
/// assert!(is_valid_address("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
/// assert!(!is_valid_address("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
/// assert!(!is_valid_address("0x1234"));
/// ```
pub fn is_valid_address(addr: &str) -> bool {
    match addr.strip_prefix("0x") {
        Some(hex_part) => matches!(hex::decode(hex_part), Ok(bytes) if bytes.len() == 20),
        None => false,
    }
}

/// Normalize an address to lowercase with a `0x` prefix.
///
/// Formatting only; use [`is_valid_address`] to validate first.
///
/// # Examples
///
/// ```
/// use router_abi::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266"),
///     "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let addr = addr.trim();
    let hex_part = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr)
        .to_lowercase();
    format!("0x{}", hex_part)
}

/// EIP-55 mixed-case checksum rendering, or `None` for invalid input.
///
/// A hex letter is uppercased when the corresponding nibble of
/// `keccak256(lowercase_hex)` is 8 or more.
///
/// # Examples
///
/// ```
/// use router_abi::address::checksum_address;
///
/// assert_eq!(
///     checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").as_deref(),
///     Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
/// );
/// assert_eq!(checksum_address("not-an-address"), None);
/// ```
pub fn checksum_address(addr: &str) -> Option<String> {
    if !is_valid_address(addr) {
        return None;
    }
    let hex_lower = normalize_address(addr);
    let hex_part = hex_lower.strip_prefix("0x").unwrap_or(&hex_lower);
    let digest = Keccak256::digest(hex_part.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in hex_part.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Some(out)
}
