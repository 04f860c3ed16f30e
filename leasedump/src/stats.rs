use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use leasefile_core::LeaseSet;

/// Aggregate counts over a parsed lease set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaseStats {
    /// Number of lease blocks, counting every reappearance of an address.
    pub leases: usize,
    /// Number of distinct addresses.
    pub unique_addresses: usize,
    /// Lease counts keyed by `binding state` value.
    pub by_binding_state: BTreeMap<String, usize>,
    /// Timestamp anomalies recovered during the scan.
    pub malformed_timestamps: usize,
}

/// Count records, distinct addresses, and binding states.
pub fn build_stats(set: &LeaseSet) -> LeaseStats {
    let mut addresses = HashSet::new();
    let mut by_binding_state = BTreeMap::new();

    for record in set {
        addresses.insert(record.address.as_str());
        if let Some(state) = &record.binding_state {
            *by_binding_state.entry(state.clone()).or_insert(0) += 1;
        }
    }

    LeaseStats {
        leases: set.len(),
        unique_addresses: addresses.len(),
        by_binding_state,
        malformed_timestamps: set.malformed_timestamps().len(),
    }
}

#[cfg(test)]
mod tests {
    use leasefile_core::parse;

    use super::build_stats;

    #[test]
    fn counts_blocks_addresses_and_states() {
        let set = parse(concat!(
            "lease 10.0.0.1 {\n  binding state active;\n}\n",
            "lease 10.0.0.2 {\n  binding state active;\n}\n",
            "lease 10.0.0.1 {\n  binding state free;\n}\n",
            "lease 10.0.0.3 {\n}\n",
        ))
        .expect("parse");

        let stats = build_stats(&set);
        assert_eq!(stats.leases, 4);
        assert_eq!(stats.unique_addresses, 3);
        assert_eq!(stats.by_binding_state.get("active"), Some(&2));
        assert_eq!(stats.by_binding_state.get("free"), Some(&1));
        assert_eq!(stats.malformed_timestamps, 0);
    }

    #[test]
    fn empty_set_yields_zeroes() {
        let set = parse("").expect("parse");
        let stats = build_stats(&set);

        assert_eq!(stats.leases, 0);
        assert_eq!(stats.unique_addresses, 0);
        assert!(stats.by_binding_state.is_empty());
    }
}
