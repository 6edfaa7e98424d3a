use chainlist_core::Chain;

#[test]
fn new_chain_starts_empty() {
    let chain = Chain::new();

    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    assert_eq!(chain.front(), None);
    assert_eq!(chain.back(), None);
    assert_eq!(chain.to_string(), "");
}

#[test]
fn push_front_reverses_insertion_order() {
    let mut chain = Chain::new();
    chain.push_front(3);
    chain.push_front(2);
    chain.push_front(1);

    assert_eq!(chain.to_string(), "1 2 3");
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.front(), Some(1));
    assert_eq!(chain.back(), Some(3));
}

#[test]
fn push_back_preserves_insertion_order() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);
    chain.push_back(3);

    assert_eq!(chain.to_string(), "1 2 3");
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.front(), Some(1));
    assert_eq!(chain.back(), Some(3));
}

#[test]
fn mixed_insertions_interleave_around_the_seed() {
    let mut chain = Chain::new();
    chain.push_front(1);
    chain.push_back(2);
    chain.push_front(0);
    chain.push_back(3);

    assert_eq!(chain.to_string(), "0 1 2 3");
    assert_eq!(chain.len(), 4);
}

#[test]
fn duplicates_and_extreme_values_are_accepted() {
    let mut chain = Chain::new();
    chain.push_back(i64::MIN);
    chain.push_back(0);
    chain.push_back(0);
    chain.push_back(i64::MAX);

    assert_eq!(
        chain.to_string(),
        "-9223372036854775808 0 0 9223372036854775807"
    );
    assert_eq!(chain.len(), 4);
}

#[test]
fn iter_yields_values_front_to_back() {
    let mut chain = Chain::new();
    chain.push_back(10);
    chain.push_back(20);
    chain.push_back(30);

    let values: Vec<i64> = chain.iter().collect();

    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn traversal_leaves_the_chain_unchanged() {
    let mut chain = Chain::new();
    chain.push_back(7);
    chain.push_back(8);
    chain.push_back(9);

    let first: Vec<i64> = chain.iter().collect();
    let second: Vec<i64> = chain.iter().collect();

    assert_eq!(first, second);
    assert_eq!(chain.to_string(), "7 8 9");
    assert_eq!(chain.to_string(), "7 8 9");
    assert_eq!(chain.len(), 3);
}

#[test]
fn front_and_back_track_both_insertion_sides() {
    let mut chain = Chain::new();
    chain.push_back(5);

    assert_eq!(chain.front(), Some(5));
    assert_eq!(chain.back(), Some(5));

    chain.push_front(4);
    chain.push_back(6);

    assert_eq!(chain.front(), Some(4));
    assert_eq!(chain.back(), Some(6));
}

#[test]
fn truncate_keeps_the_prefix_and_updates_len() {
    let mut chain = Chain::new();
    for value in 1..=5 {
        chain.push_back(value);
    }

    chain.truncate(2);

    assert_eq!(chain.to_string(), "1 2");
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.back(), Some(2));
}

#[test]
fn truncate_to_one_keeps_the_newest_front_insert() {
    let mut chain = Chain::new();
    chain.push_front(1);
    chain.push_front(2);
    chain.push_front(3);

    chain.truncate(1);

    assert_eq!(chain.to_string(), "3");
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.front(), Some(3));
    assert_eq!(chain.back(), Some(3));
}

#[test]
fn truncate_to_zero_empties_the_chain() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);

    chain.truncate(0);

    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    assert_eq!(chain.to_string(), "");
}

#[test]
fn truncate_at_or_beyond_len_is_a_noop() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);
    chain.push_back(3);

    chain.truncate(3);
    assert_eq!(chain.to_string(), "1 2 3");

    chain.truncate(10);
    assert_eq!(chain.to_string(), "1 2 3");
    assert_eq!(chain.len(), 3);
}

#[test]
fn truncate_on_an_empty_chain_is_a_noop() {
    let mut chain = Chain::new();

    chain.truncate(0);
    chain.truncate(4);

    assert!(chain.is_empty());
    assert_eq!(chain.to_string(), "");
}

#[test]
fn chain_grows_again_after_truncate() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);
    chain.push_back(3);
    chain.truncate(1);

    chain.push_back(9);
    chain.push_front(0);

    assert_eq!(chain.to_string(), "0 1 9");
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.back(), Some(9));
}

#[test]
fn cloned_chains_evolve_independently() {
    let mut chain = Chain::new();
    chain.push_back(1);
    chain.push_back(2);

    let mut copy = chain.clone();
    copy.push_back(3);
    chain.truncate(1);

    assert_eq!(chain.to_string(), "1");
    assert_eq!(copy.to_string(), "1 2 3");
}
