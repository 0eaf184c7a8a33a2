/// Position-based identifier of a record in a dense collection.
///
/// Collections keep their identifiers in the contiguous run `1..=len`, so an
/// identifier is only meaningful relative to the current collection length:
/// after a deletion, a previously valid high identifier may address a
/// different record or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DenseId(u32);

impl DenseId {
    /// Parses a raw base-10 identifier and checks it against `len`.
    ///
    /// Returns `None` for non-numeric input, zero, or anything past the end
    /// of the collection.
    pub fn parse(raw: &str, len: usize) -> Option<Self> {
        let id = raw.parse::<u32>().ok()?;
        Self::checked(id, len)
    }

    /// Range check for an already numeric identifier.
    pub fn checked(id: u32, len: usize) -> Option<Self> {
        if id == 0 || usize::try_from(id).map_or(true, |id| id > len) {
            return None;
        }
        Some(Self(id))
    }

    /// Identifier the next appended record receives.
    pub fn next(len: usize) -> Self {
        Self(u32::try_from(len).map_or(u32::MAX, |len| len.saturating_add(1)))
    }

    /// Zero-based position in the collection.
    pub fn index(&self) -> usize {
        // u32 always fits in usize on supported targets
        self.0 as usize - 1
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Records stored in a dense collection.
pub trait DenseRecord {
    fn assign_id(&mut self, id: u32);
}

/// Rewrites identifiers to `1..=len` in the current order.
pub fn renumber<T: DenseRecord>(records: &mut [T]) {
    for (position, record) in records.iter_mut().enumerate() {
        record.assign_id(DenseId::next(position).value());
    }
}

/// Removes the record addressed by `id` and closes the gap it leaves.
pub fn remove_and_renumber<T: DenseRecord>(records: &mut Vec<T>, id: DenseId) -> T {
    let removed = records.remove(id.index());
    renumber(records);
    removed
}

/// Process-wide flag gating product mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminPolicy {
    enabled: bool,
}

impl AdminPolicy {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_admin(&self) -> bool {
        self.enabled
    }
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}
