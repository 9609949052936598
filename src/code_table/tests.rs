use rand::Rng;

use super::*;

fn table_of(input: &[u8]) -> CodeTable<u8> {
    CodeTable::from_tree(&CodeTree::from_symbols(input).unwrap())
}

/// Sum of 2^-len over every codeword, scaled by 2^max_len.
fn kraft_sum(table: &CodeTable<u8>) -> u64 {
    let max = table.max_len();
    table.iter().map(|(_, c)| 1u64 << (max - c.len())).sum()
}

#[test]
fn test_lengths_follow_frequencies() {
    let table = table_of(b"aaabbc");

    let a = table.get(&b'a').unwrap().len();
    let b = table.get(&b'b').unwrap().len();
    let c = table.get(&b'c').unwrap().len();

    assert!(a <= b);
    assert!(b <= c);
    assert!(a < c);
    assert_eq!(table.len(), 3);
    assert_eq!(table.max_len(), 2);
}

#[test]
fn test_single_symbol_codeword_is_zero() {
    let table = table_of(b"aaaa");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&b'a').unwrap().bits(), &[Bit::Zero]);
    assert_eq!(table.get(&b'a').unwrap().to_string(), "0");
}

#[test]
fn test_prefix_free() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let input: Vec<u8> = (0..rng.gen_range(2..500)).map(|_| rng.gen_range(0..60)).collect();
        let table = table_of(&input);

        for (s1, c1) in table.iter() {
            assert!(!c1.is_empty());
            for (s2, c2) in table.iter() {
                if s1 != s2 {
                    assert!(!c1.is_prefix_of(c2), "{} is a prefix of {}", c1, c2);
                }
            }
        }
    }
}

#[test]
fn test_kraft_equality() {
    let table = table_of(b"mississippi river banks");

    assert_eq!(kraft_sum(&table), 1u64 << table.max_len());
}

#[test]
fn test_codeword_matches_tree_path() {
    let tree = CodeTree::from_symbols(b"abracadabra").unwrap();
    let table = CodeTable::from_tree(&tree);

    for (symbol, code) in table.iter() {
        let mut cursor = tree.root();
        for &bit in code.iter() {
            cursor = tree.child(cursor, bit).unwrap();
        }
        assert_eq!(tree.node(cursor).symbol(), Some(*symbol));
    }
}

#[test]
fn test_weighted_len_is_optimal_for_known_input() {
    // a:45 b:13 c:12 d:16 e:9 f:5 has an optimal weighted length of 224.
    let frequencies = FrequencyTable::from_weights(vec![
        (b'a', 45), (b'b', 13), (b'c', 12), (b'd', 16), (b'e', 9), (b'f', 5),
    ]).unwrap();
    let table = CodeTable::from_tree(&CodeTree::build(&frequencies));

    assert_eq!(table.weighted_len(&frequencies), 224);
    assert_eq!(table.get(&b'a').unwrap().len(), 1);
}

#[test]
fn test_display() {
    let table = CodeTable::from_tree(&CodeTree::from_symbols(&['x', 'x', 'y']).unwrap());

    assert_eq!(table.to_string(), "'x':1 'y':0");
}
