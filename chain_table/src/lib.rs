//! [ChainTable] is a fixed-capacity hash table mapping contact names to [Contact] records.
//!
//! Collisions are resolved by separate chaining. The number of buckets is chosen at construction
//! and never changes, so chains grow without bound as entries are added. Entries can be inserted,
//! updated and looked up, but never removed.
//!
//! Chains are not linked through heap pointers. All nodes live in a single `Vec` and both bucket
//! heads and `next` links are node indices into it. Since nothing is ever removed, the arena
//! is append-only and every node index stays valid for the lifetime of the table.
//!
//! The bucket index of a key is the sum of the Unicode scalar values of its characters, reduced
//! modulo the bucket count (see [char_code_sum]). This is a weak hash, anagrams always collide,
//! and is kept as is so that bucket placement stays predictable.

mod contact;
mod hash;
mod table;
mod test_table;

pub use contact::Contact;
pub use hash::char_code_sum;
pub use table::{Chain, ChainTable, Dump, InsertOutcome, ZeroBucketsError};
