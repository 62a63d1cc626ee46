#![cfg(test)]
#![allow(missing_docs)]
use crate::{char_code_sum, ChainTable, Contact, InsertOutcome};
use indexmap::IndexMap;
use rand::prelude::*;

struct CheckedTable {
    dut: ChainTable,
    ref_map: IndexMap<String, String>,
}

impl CheckedTable {
    fn new(bucket_count: usize) -> Self {
        CheckedTable {
            dut: ChainTable::new(bucket_count),
            ref_map: IndexMap::new(),
        }
    }
    fn insert(&mut self, key: &str, number: &str) -> InsertOutcome {
        let ref_result = match self.ref_map.insert(key.to_owned(), number.to_owned()) {
            Some(_) => InsertOutcome::Updated,
            None => InsertOutcome::Inserted,
        };
        let chain_len_before = self.dut.chain_len(self.dut.bucket_index(key));
        let dut_result = self.dut.insert(key, number);
        assert_eq!(ref_result, dut_result);
        let chain_len_after = self.dut.chain_len(self.dut.bucket_index(key));
        match dut_result {
            InsertOutcome::Inserted => assert_eq!(chain_len_after, chain_len_before + 1),
            InsertOutcome::Updated => assert_eq!(chain_len_after, chain_len_before),
        }
        dut_result
    }
    fn search(&self, key: &str) -> Option<Contact> {
        let ref_result = self
            .ref_map
            .get_key_value(key)
            .map(|(name, number)| Contact::new(name.as_str(), number.as_str()));
        let dut_result = self.dut.search(key).cloned();
        assert_eq!(ref_result, dut_result);
        assert_eq!(ref_result.is_some(), self.dut.contains(key));
        ref_result
    }
    fn check(&self) {
        self.dut.check();
        assert_eq!(self.dut.len(), self.ref_map.len());
        for (name, number) in self.ref_map.iter() {
            assert_eq!(
                self.dut.search(name),
                Some(&Contact::new(name.as_str(), number.as_str()))
            );
        }
        // chains keep insertion order, which the reference map preserves globally
        for bucket in 0..self.dut.bucket_count() {
            let expected = self
                .ref_map
                .keys()
                .map(String::as_str)
                .filter(|name| self.dut.bucket_index(name) == bucket);
            assert!(self.dut.chain(bucket).map(|c| c.name()).eq(expected));
        }
    }
}

fn random_name(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(0..4);
    String::from_iter((0..len).map(|_| rng.gen_range('a'..='e')))
}

fn random_number(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..8);
    String::from_iter((0..len).map(|_| rng.gen_range('0'..='9')))
}

#[test]
fn test_random_ops() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
    for bucket_count in [1, 2, 3, 7, 16, 101] {
        let mut table = CheckedTable::new(bucket_count);
        for _ in 0..400 {
            let name = random_name(&mut rng);
            if rng.gen_bool(0.6) {
                let number = random_number(&mut rng);
                table.insert(&name, &number);
            } else {
                table.search(&name);
            }
        }
        table.check();
    }
}

#[test]
fn test_update_keeps_chain() {
    let mut table = CheckedTable::new(7);
    assert_eq!(table.insert("ab", "1"), InsertOutcome::Inserted);
    assert_eq!(table.insert("ba", "2"), InsertOutcome::Inserted);
    assert_eq!(table.insert("ab", "3"), InsertOutcome::Updated);
    table.check();

    let bucket = table.dut.bucket_index("ab");
    let chain: Vec<_> = table.dut.chain(bucket).map(|c| c.to_string()).collect();
    assert_eq!(chain, ["ab: 3", "ba: 2"]);
}

#[test]
fn test_colliding_keys() {
    // all of these sum to the same code point total
    let keys = ["abc", "acb", "bac", "bca", "cab", "cba", "aad"];
    for &key in &keys[1..] {
        assert_eq!(char_code_sum(key), char_code_sum(keys[0]));
    }

    let mut table = CheckedTable::new(13);
    for (i, key) in keys.iter().enumerate() {
        table.insert(key, &i.to_string());
    }
    table.check();

    let bucket = table.dut.bucket_index(keys[0]);
    assert_eq!(table.dut.chain_len(bucket), keys.len());
    assert_eq!(table.dut.longest_chain(), keys.len());
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(table.search(key).unwrap().number(), i.to_string());
    }
    assert_eq!(table.search("abd"), None);
}

#[test]
fn test_single_bucket() {
    let mut table = CheckedTable::new(1);
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        table.insert(name, "0");
    }
    table.insert("Bob", "1");
    table.check();
    assert_eq!(table.dut.chain_len(0), 4);
    assert_eq!(
        table.dut.dump().to_string(),
        "Index 0: - Alice: 0 - Bob: 1 - Carol: 0 - Dave: 0\n"
    );
}

#[test]
fn test_empty_key() {
    let mut table = CheckedTable::new(5);
    assert_eq!(table.search(""), None);
    table.insert("", "000");
    assert_eq!(table.dut.bucket_index(""), 0);
    assert_eq!(table.search(""), Some(Contact::new("", "000")));
    table.check();
}
