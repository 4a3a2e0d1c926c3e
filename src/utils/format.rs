/// Shortens a wallet address for display: `0x7a9...f42e`.
/// Anything too short to truncate is returned as-is.
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..5], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_full_address() {
        let addr = "0x7a9b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f42e1";
        assert_eq!(truncate_address(addr), "0x7a9...42e1");
    }

    #[test]
    fn leaves_short_strings_alone() {
        assert_eq!(truncate_address("0x7a9"), "0x7a9");
        assert_eq!(truncate_address(""), "");
    }
}
