use tokio::sync::RwLock;
use tracing::info;

use crate::contact::models::Contact;
use crate::resume::models::{Education, Experience, Record, Skill};
use crate::resume::seed;

/// Hands out record ids. Ids only ever grow, so an id freed by a delete is
/// never handed out again.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Moves the sequence past an id that was assigned elsewhere (seed data).
    pub fn observe(&mut self, id: u64) {
        self.next = self.next.max(id + 1);
    }
}

#[derive(Debug)]
struct Entries<T> {
    ids: IdSequence,
    records: Vec<T>,
}

/// Ordered, lock-guarded collection of one record type.
///
/// Lookups scan for a matching stored id; positions are never used as ids.
#[derive(Debug)]
pub struct Collection<T> {
    inner: RwLock<Entries<T>>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<T: Record> Collection<T> {
    pub fn with_records(records: Vec<T>) -> Self {
        let mut ids = IdSequence::default();
        for record in &records {
            ids.observe(record.id());
        }
        Self {
            inner: RwLock::new(Entries { ids, records }),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    /// Assigns the next id and appends the record built from it, under one lock.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut entries = self.inner.write().await;
        let id = entries.ids.next_id();
        let record = build(id);
        entries.records.push(record.clone());
        record
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub async fn update_with<F>(&self, id: u64, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.inner.write().await;
        let record = entries.records.iter_mut().find(|r| r.id() == id)?;
        apply(record);
        Some(record.clone())
    }

    pub async fn remove(&self, id: u64) -> Option<T> {
        let mut entries = self.inner.write().await;
        let position = entries.records.iter().position(|r| r.id() == id)?;
        Some(entries.records.remove(position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWrite {
    Created,
    Replaced,
}

/// Holds at most one contact record.
#[derive(Debug, Default)]
pub struct ContactSlot {
    inner: RwLock<Option<Contact>>,
}

impl ContactSlot {
    pub async fn get(&self) -> Option<Contact> {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, contact: Contact) -> SlotWrite {
        match self.inner.write().await.replace(contact) {
            Some(_) => SlotWrite::Replaced,
            None => SlotWrite::Created,
        }
    }
}

/// All in-memory resume data for the process.
#[derive(Debug, Default)]
pub struct ResumeStore {
    pub experience: Collection<Experience>,
    pub education: Collection<Education>,
    pub skill: Collection<Skill>,
    pub contact: ContactSlot,
}

impl ResumeStore {
    /// Store pre-loaded with one sample record per collection.
    pub fn seeded() -> Self {
        let store = Self {
            experience: Collection::with_records(seed::experience()),
            education: Collection::with_records(seed::education()),
            skill: Collection::with_records(seed::skill()),
            contact: ContactSlot::default(),
        };
        info!("Resume store seeded with sample records");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: u64, name: &str) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            proficiency: "1 year".to_string(),
            logo: "logo.png".to_string(),
        }
    }

    #[test]
    fn test_id_sequence_observe_only_moves_forward() {
        let mut ids = IdSequence::default();
        ids.observe(4);
        ids.observe(1);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.next_id(), 6);
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let skills = Collection::<Skill>::default();
        let a = skills.insert_with(|id| skill(id, "Rust")).await;
        let b = skills.insert_with(|id| skill(id, "Go")).await;
        assert_eq!((a.id, b.id), (0, 1));
        assert_eq!(skills.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let skills = Collection::<Skill>::default();
        for name in ["Rust", "Go", "Zig"] {
            skills.insert_with(|id| skill(id, name)).await;
        }
        assert_eq!(skills.remove(0).await.map(|s| s.name), Some("Rust".to_string()));

        let fresh = skills.insert_with(|id| skill(id, "C")).await;
        assert_eq!(fresh.id, 3);

        let ids: Vec<u64> = skills.list().await.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_lookup_scans_by_id_not_position() {
        let skills = Collection::with_records(vec![skill(0, "Rust"), skill(1, "Go"), skill(2, "Zig")]);
        skills.remove(0).await;

        // position 1 now holds id 2
        assert_eq!(skills.get(1).await.map(|s| s.name), Some("Go".to_string()));
        assert_eq!(skills.get(2).await.map(|s| s.name), Some("Zig".to_string()));
        assert!(skills.get(0).await.is_none());
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_id() {
        let skills = Collection::with_records(vec![skill(0, "Rust")]);
        assert!(skills.update_with(7, |s| s.name.clear()).await.is_none());
        assert!(skills.remove(7).await.is_none());
        assert_eq!(skills.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let skills = Collection::with_records(vec![skill(0, "Rust"), skill(1, "Go")]);
        let updated = skills
            .update_with(1, |s| s.proficiency = "5 years".to_string())
            .await
            .unwrap();
        assert_eq!(updated.proficiency, "5 years");
        assert_eq!(skills.list().await[1].proficiency, "5 years");
        assert_eq!(skills.list().await[0].proficiency, "1 year");
    }

    #[tokio::test]
    async fn test_seeded_collection_continues_after_highest_id() {
        let skills = Collection::with_records(vec![skill(3, "Rust")]);
        let next = skills.insert_with(|id| skill(id, "Go")).await;
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let skills = std::sync::Arc::new(Collection::<Skill>::default());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let skills = skills.clone();
            handles.push(tokio::spawn(async move {
                skills.insert_with(|id| skill(id, "Rust")).await.id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (0..32).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_contact_slot_reports_created_then_replaced() {
        let slot = ContactSlot::default();
        assert!(slot.get().await.is_none());

        let contact = Contact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+441234567890".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
            github: "github.com/ada".to_string(),
        };
        assert_eq!(slot.replace(contact.clone()).await, SlotWrite::Created);

        let mut renamed = contact;
        renamed.name = "Ada L.".to_string();
        assert_eq!(slot.replace(renamed).await, SlotWrite::Replaced);
        assert_eq!(slot.get().await.map(|c| c.name), Some("Ada L.".to_string()));
    }

    #[tokio::test]
    async fn test_seeded_store_has_one_record_each_and_no_contact() {
        let store = ResumeStore::seeded();
        assert_eq!(store.experience.list().await.len(), 1);
        assert_eq!(store.education.list().await.len(), 1);
        assert_eq!(store.skill.list().await.len(), 1);
        assert!(store.contact.get().await.is_none());
    }
}
