use dashmap::DashMap;
use islimits_core::ports::OverrideStore;
use islimits_types::error::StoreError;
use islimits_types::ids::IslandId;
use islimits_types::record::OverrideRecord;

/// Override records held in a [`DashMap`].
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    records: DashMap<IslandId, OverrideRecord>,
}

impl InMemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record, ordered by island id.
    pub fn snapshot(&self) -> Vec<OverrideRecord> {
        let mut records: Vec<OverrideRecord> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.island_id.cmp(&b.island_id));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn get(&self, island: &IslandId) -> Result<Option<OverrideRecord>, StoreError> {
        Ok(self.records.get(island).map(|r| r.value().clone()))
    }

    fn set(&self, island: &IslandId, record: &OverrideRecord) -> Result<(), StoreError> {
        self.records.insert(island.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use islimits_types::resource::ResourceKind;

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryOverrideStore::new();
        assert!(store.get(&IslandId::new("isl-1")).unwrap().is_none());
    }

    #[test]
    fn set_then_get_returns_record() {
        let store = InMemoryOverrideStore::new();
        let mut record = OverrideRecord::new(IslandId::new("isl-1"), "BSkyBlock");
        record.set_limit(ResourceKind::block("STONE"), 64);

        store.set(&record.island_id, &record).unwrap();

        assert_eq!(store.get(&IslandId::new("isl-1")).unwrap(), Some(record));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_is_sorted_by_island() {
        let store = InMemoryOverrideStore::new();
        for id in ["isl-b", "isl-a", "isl-c"] {
            let record = OverrideRecord::new(IslandId::new(id), "BSkyBlock");
            store.set(&record.island_id, &record).unwrap();
        }

        let ids: Vec<_> = store
            .snapshot()
            .into_iter()
            .map(|r| r.island_id.0)
            .collect();
        assert_eq!(ids, vec!["isl-a", "isl-b", "isl-c"]);
    }
}
