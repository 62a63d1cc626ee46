#![allow(missing_docs)] // test only
use std::num::NonZeroUsize;

use chain_table::{char_code_sum, ChainTable, Contact, InsertOutcome, ZeroBucketsError};

fn contact_book() -> ChainTable {
    let mut table = ChainTable::new(5);
    table.insert("Alice", "111");
    table.insert("Bob", "222");
    table.insert("Carol", "333");
    table
}

#[test]
fn search_after_insert() {
    let table = contact_book();
    assert_eq!(table.search("Bob"), Some(&Contact::new("Bob", "222")));
    assert_eq!(table.search("Alice").map(Contact::number), Some("111"));
    assert_eq!(table.search("Carol").map(Contact::name), Some("Carol"));
    assert_eq!(table.len(), 3);
}

#[test]
fn update_in_place() {
    let mut table = contact_book();
    let bucket = table.bucket_index("Alice");
    let chain_len = table.chain_len(bucket);

    assert_eq!(table.insert("Alice", "999"), InsertOutcome::Updated);

    assert_eq!(table.search("Alice"), Some(&Contact::new("Alice", "999")));
    assert_eq!(table.chain_len(bucket), chain_len);
    assert_eq!(table.len(), 3);
}

#[test]
fn dump_lists_every_name_once() {
    let mut table = contact_book();
    table.insert("Alice", "999");
    let dump = table.dump().to_string();

    assert_eq!(dump.lines().count(), table.bucket_count());
    for name in ["Alice", "Bob", "Carol"] {
        assert_eq!(dump.matches(&format!("- {name}: ")).count(), 1, "{dump}");
    }
    assert!(dump.contains("Alice: 999"));
    assert!(!dump.contains("Alice: 111"));
}

#[test]
fn dump_format() {
    let table = contact_book();
    // Alice = 478, Bob = 275, Carol = 497
    assert_eq!(char_code_sum("Alice") % 5, 3);
    assert_eq!(char_code_sum("Bob") % 5, 0);
    assert_eq!(char_code_sum("Carol") % 5, 2);
    assert_eq!(
        table.dump().to_string(),
        "Index 0: - Bob: 222\n\
         Index 1: Empty\n\
         Index 2: - Carol: 333\n\
         Index 3: - Alice: 111\n\
         Index 4: Empty\n"
    );
}

#[test]
fn dump_is_idempotent() {
    let table = contact_book();
    assert_eq!(table.dump().to_string(), table.dump().to_string());

    let empty = ChainTable::new(3);
    assert_eq!(
        empty.dump().to_string(),
        "Index 0: Empty\nIndex 1: Empty\nIndex 2: Empty\n"
    );
}

#[test]
fn missing_keys() {
    let table = contact_book();
    for key in ["", "alice", "Dave", "Bob "] {
        assert_eq!(table.search(key), None);
        assert!(!table.contains(key));
    }
    assert_eq!(ChainTable::new(1).search("anyone"), None);
}

#[test]
fn anagrams_share_a_bucket() {
    let mut table = ChainTable::new(7);
    assert_eq!(table.bucket_index("ab"), table.bucket_index("ba"));
    table.insert("ab", "1");
    table.insert("ba", "2");

    assert_eq!(table.search("ab"), Some(&Contact::new("ab", "1")));
    assert_eq!(table.search("ba"), Some(&Contact::new("ba", "2")));
    let bucket = table.bucket_index("ab");
    assert!(table.chain(bucket).map(Contact::name).eq(["ab", "ba"]));
}

#[test]
fn bucket_index_is_deterministic() {
    let a = ChainTable::new(11);
    let b = ChainTable::new(11);
    for key in ["Alice", "Bob", "", "ünïcödé"] {
        let index = a.bucket_index(key);
        assert_eq!(index, a.bucket_index(key));
        assert_eq!(index, b.bucket_index(key));
        assert_eq!(index as u64, char_code_sum(key) % 11);
    }
}

#[test]
fn zero_buckets() {
    assert_eq!(ChainTable::try_new(0).unwrap_err(), ZeroBucketsError);
    assert!(ChainTable::try_new(1).is_ok());
    assert_eq!(
        ChainTable::with_buckets(NonZeroUsize::new(4).unwrap()).bucket_count(),
        4
    );
}

#[test]
#[should_panic(expected = "at least one bucket")]
fn zero_buckets_panics() {
    ChainTable::new(0);
}

#[test]
fn statistics() {
    let mut table = ChainTable::new(4);
    assert!(table.is_empty());
    assert_eq!(table.longest_chain(), 0);
    assert_eq!(table.load_factor(), 0.0);

    table.insert("ab", "1");
    table.insert("ba", "2");
    table.insert("d", "3");
    assert!(!table.is_empty());
    assert_eq!(table.len(), 3);
    assert_eq!(table.longest_chain(), 2);
    assert_eq!(table.load_factor(), 0.75);
}
