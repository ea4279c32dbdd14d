/// Capacity of a [`KeySet`]: one slot per lowercase letter.
pub const MAX_KEYS: usize = 26;

/// Slot of a key in the collected and required bitmasks.
///
/// Slots are assigned in the scan order of the node indexer, not by
/// alphabet, so they double as offsets into the key portion of the node
/// numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyId(u8);

impl KeyId {
    pub(crate) fn new(slot: usize) -> Self {
        debug_assert!(slot < MAX_KEYS);
        Self(slot as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Set of key slots packed one bit per key.
///
/// All masks used by the planner flow through this type; the backing word is
/// an implementation detail of this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeySet(u32);

impl KeySet {
    /// Set containing no keys.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set containing every slot below `count`.
    pub fn full(count: usize) -> Self {
        debug_assert!(count <= MAX_KEYS);
        Self(((1u64 << count) - 1) as u32)
    }

    pub fn insert(&mut self, key: KeyId) {
        self.0 |= 1 << key.0;
    }

    /// Copy of `self` with `key` added.
    pub fn with(self, key: KeyId) -> Self {
        Self(self.0 | 1 << key.0)
    }

    pub fn contains(self, key: KeyId) -> bool {
        self.0 & (1 << key.0) != 0
    }

    /// True when every key in `other` is also in `self`.
    pub fn contains_all(self, other: KeySet) -> bool {
        other.0 & !self.0 == 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}
