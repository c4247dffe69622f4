//! Property tests over arbitrary node snapshots.

use std::collections::HashSet;

use corelib::{ExcludeIds, MatchAll, Node, NodeId};
use proptest::prelude::*;
use selection::{SelectById, SelectBySubnet, Selector};

/// Snapshot of up to 40 nodes spread over at most 6 subnets.
fn arb_nodes() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(0u8..6, 0..40).prop_map(|subnet_tags| {
        subnet_tags
            .into_iter()
            .enumerate()
            .map(|(i, tag)| Node::new(NodeId(i as u128 + 1), format!("10.0.{}.0", tag)))
            .collect()
    })
}

proptest! {
    #[test]
    fn by_id_result_is_bounded_and_distinct(nodes in arb_nodes(), n in 0usize..50) {
        let selector = SelectById::new(&nodes);
        let result = selector.select(n, &MatchAll);

        prop_assert!(result.len() <= n);
        prop_assert_eq!(result.len(), n.min(nodes.len()));

        let ids: HashSet<NodeId> = result.iter().map(|node| node.id).collect();
        prop_assert_eq!(ids.len(), result.len());
    }

    #[test]
    fn by_subnet_result_is_subnet_distinct(nodes in arb_nodes(), n in 0usize..50) {
        let selector = SelectBySubnet::from_nodes(&nodes);
        let result = selector.select(n, &MatchAll);

        prop_assert!(result.len() <= n);
        prop_assert_eq!(result.len(), n.min(selector.count()));

        let nets: HashSet<&str> = result.iter().map(|node| node.last_net.as_str()).collect();
        prop_assert_eq!(nets.len(), result.len());
    }

    #[test]
    fn excluded_ids_never_appear(nodes in arb_nodes(), n in 0usize..50) {
        // Exclude every other node by id.
        let excluded: Vec<NodeId> = nodes
            .iter()
            .filter(|node| node.id.0 % 2 == 0)
            .map(|node| node.id)
            .collect();
        let criteria = ExcludeIds::new(excluded.clone());
        let banned: HashSet<NodeId> = excluded.into_iter().collect();

        let by_id = SelectById::new(&nodes);
        for node in by_id.select(n, &criteria) {
            prop_assert!(!banned.contains(&node.id));
        }

        let by_subnet = SelectBySubnet::from_nodes(&nodes);
        for node in by_subnet.select(n, &criteria) {
            prop_assert!(!banned.contains(&node.id));
        }
    }

    #[test]
    fn selection_never_mutates_the_snapshot(nodes in arb_nodes(), n in 0usize..20) {
        let selector = SelectById::new(&nodes);
        let mut result = selector.select(n, &MatchAll);
        for node in &mut result {
            node.last_net.push_str("-mutated");
        }
        for node in selector.select(nodes.len(), &MatchAll) {
            prop_assert!(!node.last_net.ends_with("-mutated"));
        }
    }
}
