use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use itemservice_core::{DomainError, DomainResult, ItemId};
use itemservice_items::{Item, ItemDraft};

/// Key-by-identifier item store abstraction.
pub trait ItemRepository: Send + Sync {
    /// All persisted items, ordered by id.
    fn find_all(&self) -> Vec<Item>;
    fn find_by_id(&self, id: ItemId) -> Option<Item>;
    /// Persist a draft, assigning the next identifier.
    fn save(&self, draft: ItemDraft) -> Item;
    /// Overwrite an existing item by identifier.
    fn update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<()>;
}

impl<S> ItemRepository for std::sync::Arc<S>
where
    S: ItemRepository + ?Sized,
{
    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        (**self).find_by_id(id)
    }

    fn save(&self, draft: ItemDraft) -> Item {
        (**self).save(draft)
    }

    fn update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<()> {
        (**self).update(id, draft)
    }
}

/// In-memory item store for dev/test.
///
/// Ids are a monotonically increasing sequence starting at 1. A poisoned lock
/// degrades to empty reads / dropped writes rather than panicking.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    inner: RwLock<HashMap<ItemId, Item>>,
    sequence: AtomicU64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_id(&self) -> ItemId {
        ItemId::from_u64(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn find_all(&self) -> Vec<Item> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut items: Vec<Item> = map.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn save(&self, draft: ItemDraft) -> Item {
        let item = Item::from_draft(self.next_id(), draft);
        if let Ok(mut map) = self.inner.write() {
            map.insert(item.id, item.clone());
        }
        item
    }

    fn update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::not_found())?;

        match map.get_mut(&id) {
            Some(existing) => {
                *existing = Item::from_draft(id, draft);
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft::new(name, Some(10_000), Some(1))
    }

    #[test]
    fn save_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();
        let a = repo.save(draft("A"));
        let b = repo.save(draft("B"));
        assert_eq!(a.id, ItemId::from_u64(1));
        assert_eq!(b.id, ItemId::from_u64(2));
    }

    #[test]
    fn find_by_id_returns_saved_item() {
        let repo = InMemoryItemRepository::new();
        let saved = repo.save(draft("Book"));
        assert_eq!(repo.find_by_id(saved.id), Some(saved));
        assert_eq!(repo.find_by_id(ItemId::from_u64(999)), None);
    }

    #[test]
    fn find_all_is_ordered_by_id() {
        let repo = InMemoryItemRepository::new();
        repo.save(draft("A"));
        repo.save(draft("B"));
        repo.save(draft("C"));
        let names: Vec<_> = repo.find_all().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn update_overwrites_by_id() {
        let repo = InMemoryItemRepository::new();
        let saved = repo.save(draft("Before"));

        repo.update(saved.id, ItemDraft::new("After", Some(20_000), Some(3)))
            .unwrap();

        let found = repo.find_by_id(saved.id).unwrap();
        assert_eq!(found.name, "After");
        assert_eq!(found.price, Some(20_000));
        assert_eq!(found.quantity, Some(3));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let repo = InMemoryItemRepository::new();
        let err = repo
            .update(ItemId::from_u64(42), draft("Ghost"))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn repository_works_behind_an_arc() {
        let repo = std::sync::Arc::new(InMemoryItemRepository::new());
        let saved = ItemRepository::save(&repo, draft("Shared"));
        assert_eq!(repo.find_by_id(saved.id).map(|i| i.name), Some("Shared".to_string()));
    }
}
