//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Addresses are free-form user input (EVM hex, base58, bech32 or anything
//! else), so shortening works on characters rather than bytes:
//! - [`format_address`] - Keep the first N and last M characters
//! - [`truncate_address`] - [`format_address`] with a 4/4 split
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";
//! assert_eq!(format_address(address, 4, 4), "bc1q...0wlh");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f7bF4a";
/// assert_eq!(format_address(addr, 6, 4), "0x742d...bF4a");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";
/// assert_eq!(truncate_address(addr), "5FHn...94ty");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
