use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full mapping of zero-padded number string to accumulated amount.
/// BTreeMap keeps entries in lexicographic key order, which for fixed-width
/// zero-padded keys coincides with numeric order.
pub type Snapshot = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    ThreeUp,
    Down,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::ThreeUp, CollectionKind::Down];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "3up" => Some(Self::ThreeUp),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::ThreeUp => "3up",
            Self::Down => "down",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ThreeUp => "3up Collection",
            Self::Down => "Down Collection",
        }
    }

    pub fn range(self) -> NumberRange {
        match self {
            Self::ThreeUp => NumberRange::new(0, 999, 3),
            Self::Down => NumberRange::new(0, 99, 2),
        }
    }

    /// Storage key, one persisted entry per collection.
    pub fn storage_key(self) -> String {
        format!("jantrik-{}", self.slug())
    }
}

/// Inclusive numeric range with a fixed zero-padded key width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: u32,
    pub max: u32,
    pub width: usize,
}

impl NumberRange {
    pub fn new(min: u32, max: u32, width: usize) -> Self {
        Self { min, max, width }
    }

    /// Number of integers in the range; zero when `min > max`.
    pub fn size(&self) -> usize {
        (u64::from(self.max) + 1).saturating_sub(u64::from(self.min)) as usize
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Render a number as a zero-padded key of the configured width.
    pub fn format(&self, value: u32) -> String {
        format!("{value:0width$}", width = self.width)
    }
}

/// In-memory state for both ledgers.
#[derive(Debug, Clone, Default)]
pub struct LedgerData {
    pub three_up: Snapshot,
    pub down: Snapshot,
}

impl LedgerData {
    pub fn snapshot(&self, kind: CollectionKind) -> &Snapshot {
        match kind {
            CollectionKind::ThreeUp => &self.three_up,
            CollectionKind::Down => &self.down,
        }
    }

    pub fn snapshot_mut(&mut self, kind: CollectionKind) -> &mut Snapshot {
        match kind {
            CollectionKind::ThreeUp => &mut self.three_up,
            CollectionKind::Down => &mut self.down,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub number: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub number: String,
    pub amount: f64,
    pub new_total: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryItem {
    pub number: String,
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<EntryItem>,
    pub active_count: usize,
    pub total_amount: f64,
    pub available_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_slugs_round_trip() {
        for kind in CollectionKind::ALL {
            assert_eq!(CollectionKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(CollectionKind::from_slug("4up"), None);
    }

    #[test]
    fn ranges_match_collections() {
        let three_up = CollectionKind::ThreeUp.range();
        assert_eq!(three_up.size(), 1000);
        assert_eq!(three_up.format(7), "007");

        let down = CollectionKind::Down.range();
        assert_eq!(down.size(), 100);
        assert_eq!(down.format(7), "07");
    }

    #[test]
    fn inverted_range_is_empty() {
        assert_eq!(NumberRange::new(5, 3, 2).size(), 0);
    }

    #[test]
    fn storage_keys_are_namespaced() {
        assert_eq!(CollectionKind::ThreeUp.storage_key(), "jantrik-3up");
        assert_eq!(CollectionKind::Down.storage_key(), "jantrik-down");
    }
}
