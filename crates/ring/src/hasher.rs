use xxhash_rust::xxh3::xxh3_64;

/// Hash function shared by every participant of a ring.
///
/// Implementations must be deterministic across processes, otherwise two
/// routers would disagree about key ownership.
pub trait KeyHasher: Send + Sync {
    fn hash(&self, key: &str) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Hasher;

impl KeyHasher for Xxh3Hasher {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        xxh3_64(key.as_bytes())
    }
}
