/// Returns the sum of the Unicode scalar values of all characters in `key`.
///
/// Reducing this modulo the bucket count yields the bucket index used by
/// [`ChainTable`](crate::ChainTable). The sum does not depend on the order of the characters.
#[inline]
pub fn char_code_sum(key: &str) -> u64 {
    key.chars().map(|c| u64::from(u32::from(c))).sum()
}

#[inline(always)]
pub(crate) fn bucket_for(key: &str, bucket_count: usize) -> usize {
    // `usize` fits in `u64` on all supported targets and the remainder is below `bucket_count`
    (char_code_sum(key) % bucket_count as u64) as usize
}
