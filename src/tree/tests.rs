use rand::Rng;

use super::*;

fn random_input(len: usize, alphabet: u8) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
}

#[test]
fn test_build_small_tree() {
    let tree = CodeTree::from_symbols(b"aaabbc").unwrap();

    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.weight(), 6);
    assert_eq!(tree.height(), 2);
    assert!(!tree.is_single_leaf());
    assert!(tree.validate().is_ok());
}

#[test]
fn test_single_symbol_tree() {
    let tree = CodeTree::from_symbols(b"aaa").unwrap();

    assert!(tree.is_single_leaf());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.weight(), 3);
    assert_eq!(tree.node(tree.root()).symbol(), Some(b'a'));
    assert_eq!(tree.node(tree.root()).parent(), None);
    assert_eq!(tree.registry().get(&b'a'), Some(tree.root()));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_empty_input() {
    let empty: &[u8] = &[];

    assert!(matches!(CodeTree::from_symbols(empty), Err(crate::HuffmanError::EmptyInput)));
}

#[test]
fn test_internal_nodes_have_two_children_and_sum_weights() {
    let input = random_input(5000, 40);
    let tree = CodeTree::from_symbols(&input).unwrap();

    assert_eq!(tree.weight(), input.len() as u64);

    for i in 0..tree.len() {
        let node = tree.node(NodeId(i));
        match node.kind() {
            NodeKind::Internal { left, right } => {
                assert_ne!(left, right);
                assert_eq!(node.weight(), tree.node(*left).weight() + tree.node(*right).weight());
                assert_eq!(tree.node(*left).parent(), Some(NodeId(i)));
                assert_eq!(tree.node(*right).parent(), Some(NodeId(i)));
            },
            NodeKind::Leaf { symbol } => {
                assert_eq!(tree.registry().get(symbol), Some(NodeId(i)));
            },
        }
    }

    assert!(tree.validate().is_ok());
}

#[test]
fn test_registry_holds_every_symbol_once() {
    let input = b"the quick brown fox jumps over the lazy dog";
    let tree = CodeTree::from_symbols(input).unwrap();
    let table = FrequencyTable::from_symbols(input).unwrap();

    assert_eq!(tree.registry().len(), table.len());
    for (symbol, weight) in table.iter() {
        let leaf = tree.registry().get(&symbol).unwrap();
        assert_eq!(tree.node(leaf).symbol(), Some(symbol));
        assert_eq!(tree.node(leaf).weight(), weight);
    }
    assert!(!tree.registry().contains(&b'!'));
}

#[test]
fn test_child_follows_bits() {
    let tree = CodeTree::from_symbols(b"ab").unwrap();
    let root = tree.root();

    let zero = tree.child(root, Bit::Zero).unwrap();
    let one = tree.child(root, Bit::One).unwrap();

    assert_ne!(zero, one);
    assert!(tree.node(zero).is_leaf());
    assert_eq!(tree.child(zero, Bit::Zero), None);
}

#[test]
fn test_build_is_deterministic() {
    let input = random_input(300, 12);
    let table = FrequencyTable::from_symbols(&input).unwrap();

    let first = CodeTree::build(&table);
    let second = CodeTree::build(&table);

    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_display() {
    let tree = CodeTree::from_symbols(&['x', 'x', 'y']).unwrap();

    assert_eq!(tree.to_string(), "(3('y')('x'))");

    let tree = CodeTree::from_symbols(&['z']).unwrap();
    assert_eq!(tree.to_string(), "('z')");
}

#[test]
fn test_build_with_weights_near_u64_max() {
    let table = FrequencyTable::from_weights(vec![(b'a', u64::MAX / 2), (b'b', u64::MAX / 4), (b'c', u64::MAX / 4)]).unwrap();
    let tree = CodeTree::build(&table);

    assert_eq!(tree.weight(), table.total());
    assert!(tree.validate().is_ok());
}

#[test]
fn test_equal_weights_give_balanced_tree() {
    let input: Vec<u8> = (0..8).collect();
    let tree = CodeTree::from_symbols(&input).unwrap();

    assert_eq!(tree.height(), 3);
}
