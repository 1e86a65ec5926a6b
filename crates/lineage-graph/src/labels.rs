//! Short display labels for nodes.
//!
//! Labels are for drawing only; nothing looks nodes up by label.

/// Letters handed out to the first nodes in snapshot order.
pub const LETTER_LABELS: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

/// Label for the node at `position` in snapshot order.
///
/// The first twelve nodes get a letter. Later nodes fall back to the first
/// two characters of their address, uppercased.
pub fn label_for(position: usize, address: &str) -> String {
    match LETTER_LABELS.get(position) {
        Some(letter) => (*letter).to_string(),
        None => address.chars().take(2).collect::<String>().to_uppercase(),
    }
}

/// Labels a sequence of addresses in order.
pub fn assign_labels<'a>(addresses: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    addresses
        .into_iter()
        .enumerate()
        .map(|(i, address)| label_for(i, address))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_twelve_are_letters() {
        let addresses: Vec<String> = (0..12).map(|i| format!("0x{:02}", i)).collect();
        let labels = assign_labels(addresses.iter().map(String::as_str));

        assert_eq!(labels.first().map(String::as_str), Some("A"));
        assert_eq!(labels.last().map(String::as_str), Some("L"));
        let distinct: HashSet<&String> = labels.iter().collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn test_overflow_uses_address_prefix() {
        assert_eq!(label_for(12, "vault-keeper"), "VA");
        assert_eq!(label_for(40, "0xabc"), "0X");
    }

    #[test]
    fn test_short_address_fallback() {
        assert_eq!(label_for(13, "q"), "Q");
    }
}
