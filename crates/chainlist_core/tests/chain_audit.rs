use chainlist_core::{audit, Chain, ChainAudit};

#[test]
fn empty_chain_passes_audit_with_zero_counts() {
    let report = audit(&Chain::new()).unwrap();

    assert_eq!(
        report,
        ChainAudit {
            forward_nodes: 0,
            backward_nodes: 0,
            arena_slots: 0,
            arena_occupied: 0,
            arena_free: 0,
        }
    );
}

#[test]
fn audit_passes_after_front_and_back_insertions() {
    let mut chain = Chain::new();
    chain.push_front(2);
    chain.push_back(3);
    chain.push_front(1);
    chain.push_back(4);

    let report = audit(&chain).unwrap();

    assert_eq!(report.forward_nodes, 4);
    assert_eq!(report.backward_nodes, 4);
    assert_eq!(report.arena_occupied, 4);
    assert_eq!(report.arena_free, 0);
    assert_eq!(chain.to_string(), "1 2 3 4");
}

#[test]
fn audit_counts_match_len_across_random_edits() {
    let mut chain = Chain::new();
    for value in 0..10 {
        if value % 2 == 0 {
            chain.push_back(value);
        } else {
            chain.push_front(value);
        }
    }
    chain.truncate(6);
    chain.push_back(99);

    let report = audit(&chain).unwrap();

    assert_eq!(report.forward_nodes, chain.len());
    assert_eq!(report.backward_nodes, chain.len());
    assert_eq!(report.arena_occupied, chain.len());
}

#[test]
fn truncate_returns_slots_to_the_arena() {
    let mut chain = Chain::new();
    for value in 1..=5 {
        chain.push_back(value);
    }

    chain.truncate(2);
    let report = audit(&chain).unwrap();

    assert_eq!(report.forward_nodes, 2);
    assert_eq!(report.arena_slots, 5);
    assert_eq!(report.arena_occupied, 2);
    assert_eq!(report.arena_free, 3);
}

#[test]
fn freed_slots_are_reused_before_the_arena_grows() {
    let mut chain = Chain::new();
    for value in 1..=5 {
        chain.push_back(value);
    }
    chain.truncate(2);

    chain.push_back(30);
    chain.push_back(40);
    let report = audit(&chain).unwrap();

    assert_eq!(report.arena_slots, 5);
    assert_eq!(report.arena_occupied, 4);
    assert_eq!(report.arena_free, 1);
    assert_eq!(chain.to_string(), "1 2 30 40");
}

#[test]
fn audit_report_serializes_with_expected_wire_fields() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);
    chain.push_back(3);
    chain.truncate(2);

    let report = audit(&chain).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["forward_nodes"], 2);
    assert_eq!(json["backward_nodes"], 2);
    assert_eq!(json["arena_slots"], 3);
    assert_eq!(json["arena_occupied"], 2);
    assert_eq!(json["arena_free"], 1);

    let decoded: ChainAudit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, report);
}
