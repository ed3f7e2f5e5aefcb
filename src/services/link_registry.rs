//! Link registry
//!
//! Owns the collection of link records. The whole collection is one JSON
//! blob under [`LINKS_KEY`]; every mutation reads the blob, applies the
//! change, re-sorts newest first and writes the whole thing back. There is
//! no locking: two writers racing on the same store resolve as last writer
//! wins.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::storage::{KvStore, Link};
use crate::utils::generate_link_id;

/// Key under which the serialized collection is stored
pub const LINKS_KEY: &str = "termitoon-links";

type Clock = fn() -> DateTime<Utc>;

#[derive(Clone)]
pub struct LinkRegistry {
    store: Arc<dyn KvStore>,
    clock: Clock,
}

impl LinkRegistry {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            clock: Utc::now,
        }
    }

    /// Replace the time source used to stamp `created_at`
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// All links, newest first.
    ///
    /// A missing blob is an empty registry. A blob that cannot be read or
    /// parsed is also reported as empty, with the cause logged.
    pub fn list(&self) -> Vec<Link> {
        let mut links = self.load();
        sort_newest_first(&mut links);
        links
    }

    /// Add a link. Returns `Ok(None)` without touching storage when the
    /// title or url is blank after trimming.
    pub fn add(&self, title: &str, url: &str) -> Result<Option<Link>> {
        if title.trim().is_empty() || url.trim().is_empty() {
            debug!("Ignoring add with blank title or url");
            return Ok(None);
        }

        let mut links = self.read_links()?;
        let taken: HashSet<&str> = links.iter().map(|l| l.id.as_str()).collect();

        let created_at = (self.clock)();
        let mut id = generate_link_id(created_at.timestamp_millis());
        while taken.contains(id.as_str()) {
            id = generate_link_id(created_at.timestamp_millis());
        }

        let link = Link {
            id,
            title: title.to_string(),
            url: url.to_string(),
            created_at,
        };
        links.push(link.clone());
        self.save(links)?;

        info!("Added link {} ({})", link.id, link.title);
        Ok(Some(link))
    }

    /// Remove the link with `id`. Unknown ids are not an error.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut links = self.read_links()?;
        let before = links.len();
        links.retain(|l| l.id != id);

        if links.len() == before {
            debug!("Delete of unknown link id: {}", id);
        } else {
            info!("Deleted link {}", id);
        }

        self.save(links)
    }

    /// Look up one link, always reading the persisted blob.
    pub fn get_by_id(&self, id: &str) -> Option<Link> {
        self.load().into_iter().find(|l| l.id == id)
    }

    /// Read path for queries: storage failures degrade to an empty list.
    fn load(&self) -> Vec<Link> {
        self.read_links().unwrap_or_else(|e| {
            error!("Failed to read links from storage: {}", e);
            Vec::new()
        })
    }

    /// Read path for mutations: a storage failure aborts the write instead of
    /// replacing the stored collection with an empty one. An unparseable blob
    /// still counts as empty.
    fn read_links(&self) -> Result<Vec<Link>> {
        let Some(raw) = self.store.get(LINKS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Link>>(&raw) {
            Ok(links) => Ok(links),
            Err(e) => {
                error!("Failed to parse links from storage: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, mut links: Vec<Link>) -> Result<()> {
        sort_newest_first(&mut links);
        let json = serde_json::to_string(&links)?;
        self.store.set(LINKS_KEY, &json)
    }
}

fn sort_newest_first(links: &mut [Link]) {
    links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn registry() -> (LinkRegistry, Arc<MemoryKvStore>) {
        let store = Arc::new(MemoryKvStore::new());
        (LinkRegistry::new(store.clone()), store)
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let (registry, store) = registry();
        assert!(registry.add("", "http://a").unwrap().is_none());
        assert!(registry.add("   ", "http://a").unwrap().is_none());
        assert!(registry.add("title", "\t\n").unwrap().is_none());
        assert!(registry.list().is_empty());
        assert_eq!(store.get(LINKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_keeps_fields_verbatim() {
        let (registry, _) = registry();
        let link = registry
            .add(" Zootopia ", "http://example.com/v.mp4")
            .unwrap()
            .expect("link should be created");
        assert_eq!(link.title, " Zootopia ");
        assert_eq!(registry.get_by_id(&link.id), Some(link));
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let (registry, store) = registry();
        store.set(LINKS_KEY, "{not json").unwrap();
        assert!(registry.list().is_empty());
        assert_eq!(registry.get_by_id("anything"), None);
    }

    #[test]
    fn test_persisted_blob_is_sorted() {
        fn fixed_old() -> DateTime<Utc> {
            DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc)
        }

        let (registry, store) = registry();
        registry.add("new", "http://n").unwrap();
        registry
            .clone()
            .with_clock(fixed_old)
            .add("old", "http://o")
            .unwrap();

        let raw = store.get(LINKS_KEY).unwrap().unwrap();
        let stored: Vec<Link> = serde_json::from_str(&raw).unwrap();
        let titles: Vec<_> = stored.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["new", "old"]);
    }
}
