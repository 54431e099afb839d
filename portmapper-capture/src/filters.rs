//! BPF (Berkeley Packet Filter) filter builders

/// LLDP destination filter
/// Captures frames addressed to the LLDP nearest-bridge multicast address
pub fn lldp_dst_filter() -> String {
    "ether dst 01:80:c2:00:00:0e".to_string()
}

/// LLDP ethertype filter
pub fn lldp_ethertype_filter() -> String {
    "ether proto 0x88cc".to_string()
}

/// Combined LLDP filter: nearest-bridge destination and LLDP ethertype
pub fn lldp_capture_filter() -> String {
    combine_and(&[&lldp_dst_filter(), &lldp_ethertype_filter()])
}

/// Filter for a specific destination MAC address
pub fn dst_mac_filter(mac: &str) -> String {
    format!("ether dst {mac}")
}

/// Combine multiple filters with AND logic
pub fn combine_and(filters: &[&str]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    filters
        .iter()
        .map(|f| format!("({f})"))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Combine multiple filters with OR logic
pub fn combine_or(filters: &[&str]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    filters
        .iter()
        .map(|f| format!("({f})"))
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lldp_filters() {
        assert_eq!(lldp_dst_filter(), "ether dst 01:80:c2:00:00:0e");
        assert_eq!(lldp_ethertype_filter(), "ether proto 0x88cc");
    }

    #[test]
    fn test_lldp_capture_filter() {
        let filter = lldp_capture_filter();
        assert!(filter.contains("01:80:c2:00:00:0e"));
        assert!(filter.contains("0x88cc"));
        assert!(filter.contains("and"));
    }

    #[test]
    fn test_dst_mac_filter() {
        let mac = "aa:bb:cc:dd:ee:ff";
        assert_eq!(dst_mac_filter(mac), format!("ether dst {mac}"));
    }

    #[test]
    fn test_combine_and() {
        let combined = combine_and(&["tcp", "port 80"]);
        assert_eq!(combined, "(tcp) and (port 80)");

        let empty: Vec<&str> = vec![];
        assert_eq!(combine_and(&empty), "");
    }

    #[test]
    fn test_combine_or() {
        let combined = combine_or(&["tcp port 80", "tcp port 443"]);
        assert_eq!(combined, "(tcp port 80) or (tcp port 443)");
    }
}
