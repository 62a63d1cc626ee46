//! The [ChainTable] itself along with its node arena and helper types.
use std::{error::Error, fmt, iter::FusedIterator, num::NonZeroUsize};

use crate::{contact::Contact, hash::bucket_for};

/// Index of a chain node within a table's node arena.
///
/// Bucket heads and chain links are stored as `Option<NodeId>`. Node ids are assigned in insertion
/// order, so the id of an entry is also the number of entries that were inserted before it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// Returns the position of the node within the arena.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => NodeId(index),
            Err(_) => panic!("chain table exceeded {} entries", u32::MAX),
        }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug)]
struct ChainNode {
    /// The contact's name doubles as the node's key.
    contact: Contact,
    next: Option<NodeId>,
}

/// Error returned when constructing a [`ChainTable`] without any buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZeroBucketsError;

impl fmt::Display for ZeroBucketsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a chain table needs at least one bucket")
    }
}

impl Error for ZeroBucketsError {}

/// Which transition an [`insert`](ChainTable::insert) performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was absent and a new entry was appended to its chain.
    Inserted,
    /// The key was present and its number was overwritten in place.
    Updated,
}

/// Fixed-capacity hash table from contact names to [`Contact`] records using separate chaining.
///
/// The bucket count is set at construction and never changes. Within a chain, entries are kept in
/// insertion order and new entries are appended at the tail. Each key occurs at most once in the
/// whole table.
///
/// The table performs no internal synchronization. Sharing it between threads requires an external
/// lock around any sequence of operations that needs a consistent view.
#[derive(Clone, Debug)]
pub struct ChainTable {
    buckets: Box<[Option<NodeId>]>,
    nodes: Vec<ChainNode>,
}

impl ChainTable {
    /// Returns an empty table with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero, see [`try_new`](Self::try_new) for a non-panicking
    /// alternative.
    pub fn new(bucket_count: usize) -> Self {
        match Self::try_new(bucket_count) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an empty table with `bucket_count` buckets or an error if `bucket_count` is zero.
    pub fn try_new(bucket_count: usize) -> Result<Self, ZeroBucketsError> {
        NonZeroUsize::new(bucket_count)
            .map(Self::with_buckets)
            .ok_or(ZeroBucketsError)
    }

    /// Returns an empty table with `bucket_count` buckets.
    pub fn with_buckets(bucket_count: NonZeroUsize) -> Self {
        ChainTable {
            buckets: vec![None; bucket_count.get()].into_boxed_slice(),
            nodes: Vec::new(),
        }
    }

    /// Returns the number of buckets, fixed at construction.
    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the table.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    /// Returns the index of the bucket that `key` is (or would be) stored in.
    #[inline]
    pub fn bucket_index(&self, key: &str) -> usize {
        bucket_for(key, self.bucket_count())
    }

    /// Inserts a contact, or updates the number of an existing contact with the same name.
    ///
    /// When the name is already present its record is kept and only the number is replaced, the
    /// chain is left unchanged. Otherwise a new entry is appended at the tail of the key's chain.
    pub fn insert(&mut self, key: &str, number: impl Into<String>) -> InsertOutcome {
        let number = number.into();
        let bucket = self.bucket_index(key);

        let mut tail = None;
        let mut link = self.buckets[bucket];
        while let Some(id) = link {
            let node = &mut self.nodes[id.index()];
            if node.contact.name() == key {
                log::debug!("updating {key:?} in bucket {bucket}");
                node.contact.set_number(number);
                return InsertOutcome::Updated;
            }
            tail = Some(id);
            link = node.next;
        }

        let new_id = NodeId::from_index(self.nodes.len());
        self.nodes.push(ChainNode {
            contact: Contact::new(key, number),
            next: None,
        });

        match tail {
            None => {
                log::trace!("starting chain for bucket {bucket} with {key:?}");
                self.buckets[bucket] = Some(new_id);
            }
            Some(tail) => {
                log::trace!("collision in bucket {bucket}, appending {key:?} after node {tail:?}");
                self.nodes[tail.index()].next = Some(new_id);
            }
        }

        InsertOutcome::Inserted
    }

    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut link = self.buckets[self.bucket_index(key)];
        while let Some(id) = link {
            let node = &self.nodes[id.index()];
            if node.contact.name() == key {
                return Some(id);
            }
            link = node.next;
        }
        None
    }

    /// Returns the contact stored under `key`, if it exists.
    pub fn search(&self, key: &str) -> Option<&Contact> {
        self.find_node(key).map(|id| &self.nodes[id.index()].contact)
    }

    /// Returns `true` if the table contains a contact named `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    /// Returns an iterator over the contacts of a bucket, from head to tail.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` is not less than [`bucket_count`](Self::bucket_count).
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            nodes: &self.nodes,
            link: self.buckets[bucket],
        }
    }

    /// Returns the number of contacts stored in a bucket.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` is not less than [`bucket_count`](Self::bucket_count).
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Returns the length of the longest chain in the table.
    pub fn longest_chain(&self) -> usize {
        (0..self.bucket_count())
            .map(|bucket| self.chain_len(bucket))
            .max()
            .unwrap_or(0)
    }

    /// Returns a displayable listing of all buckets, one line per bucket.
    ///
    /// Empty buckets are shown as `Index {i}: Empty`, other buckets as `Index {i}:` followed by
    /// ` - {name}: {number}` for each contact in chain order.
    pub fn dump(&self) -> Dump<'_> {
        Dump { table: self }
    }

    /// Prints the [`dump`](Self::dump) of the table to stdout.
    pub fn print_table(&self) {
        print!("{}", self.dump());
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        let mut seen = vec![false; self.nodes.len()];
        for (bucket, &head) in self.buckets.iter().enumerate() {
            let mut keys: Vec<&str> = vec![];
            let mut link = head;
            while let Some(id) = link {
                assert!(
                    !std::mem::replace(&mut seen[id.index()], true),
                    "node {id:?} is linked more than once"
                );
                let node = &self.nodes[id.index()];
                let key = node.contact.name();
                assert_eq!(self.bucket_index(key), bucket, "{key:?} is in the wrong bucket");
                assert!(!keys.contains(&key), "duplicate key {key:?}");
                keys.push(key);
                link = node.next;
            }
        }
        assert!(seen.iter().all(|&seen| seen), "unreachable node");
    }
}

/// Iterator over the contacts of one bucket, returned by [`ChainTable::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    nodes: &'a [ChainNode],
    link: Option<NodeId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.link?.index()];
        self.link = node.next;
        Some(&node.contact)
    }
}

impl FusedIterator for Chain<'_> {}

/// Listing of all buckets of a table, returned by [`ChainTable::dump`].
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a> {
    table: &'a ChainTable,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in 0..self.table.bucket_count() {
            let mut chain = self.table.chain(bucket).peekable();
            if chain.peek().is_none() {
                writeln!(f, "Index {bucket}: Empty")?;
                continue;
            }
            write!(f, "Index {bucket}:")?;
            for contact in chain {
                write!(f, " - {contact}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
