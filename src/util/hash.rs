use std::hash::{BuildHasher, Hash, Hasher};

/// A value whose hash is chosen by hand, so that collisions can be forced in hashed collections.
/// Equality only considers the value.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that passes the last u64 written straight through, so [`ManualHash`] values land in
/// predictable buckets.
#[derive(Debug, Default)]
pub struct PassthroughHasher {
    state: u64,
}

impl Hasher for PassthroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Default, Clone)]
pub struct PassthroughBuilder;

impl BuildHasher for PassthroughBuilder {
    type Hasher = PassthroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassthroughHasher::default()
    }
}

#[test]
fn test_passthrough_hasher() {
    let mut hasher = PassthroughBuilder.build_hasher();
    ManualHash::new(42, "answer").hash(&mut hasher);
    assert_eq!(hasher.finish(), 42, "Manual hashes should pass straight through.");

    let mut hasher = PassthroughBuilder.build_hasher();
    hasher.write(&[0x01, 0x02]);
    assert_eq!(hasher.finish(), 0x0102, "Bytes should be folded in order.");
}
