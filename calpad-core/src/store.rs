//! Event persistence.
//!
//! Mutations are whole-record: `upsert` replaces the event with the same id
//! (keeping its position) or appends, `delete` filters it out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CalpadError, CalpadResult};
use crate::event::Event;

pub trait EventStore {
    fn list(&self) -> CalpadResult<Vec<Event>>;
    fn upsert(&mut self, event: Event) -> CalpadResult<()>;
    fn delete(&mut self, id: &str) -> CalpadResult<()>;

    fn get(&self, id: &str) -> CalpadResult<Event> {
        self.list()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CalpadError::EventNotFound(id.to_string()))
    }
}

fn upsert_into(events: &mut Vec<Event>, event: Event) {
    match events.iter_mut().find(|e| e.id == event.id) {
        Some(slot) => *slot = event,
        None => events.push(event),
    }
}

fn delete_from(events: &mut Vec<Event>, id: &str) -> CalpadResult<()> {
    let before = events.len();
    events.retain(|e| e.id != id);
    if events.len() == before {
        return Err(CalpadError::EventNotFound(id.to_string()));
    }
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new(events: Vec<Event>) -> Self {
        MemoryStore { events }
    }
}

impl EventStore for MemoryStore {
    fn list(&self) -> CalpadResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn upsert(&mut self, event: Event) -> CalpadResult<()> {
        upsert_into(&mut self.events, event);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> CalpadResult<()> {
        delete_from(&mut self.events, id)
    }
}

/// Events kept as a JSON array in a single file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "events.json";

    /// Open `<dir>/events.json`, starting empty if it doesn't exist yet.
    pub fn open(dir: &Path) -> CalpadResult<Self> {
        let path = dir.join(Self::FILE_NAME);

        let events: Vec<Event> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                CalpadError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = events.len(), "loaded events");
        Ok(FileStore { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> CalpadResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.events)
            .map_err(|e| CalpadError::Serialization(e.to_string()))?;

        // Write then rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), count = self.events.len(), "saved events");
        Ok(())
    }
}

impl EventStore for FileStore {
    fn list(&self) -> CalpadResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn upsert(&mut self, event: Event) -> CalpadResult<()> {
        info!(id = %event.id, title = %event.title, "upserting event");
        let mut next = self.events.clone();
        upsert_into(&mut next, event);
        let previous = std::mem::replace(&mut self.events, next);
        if let Err(e) = self.save() {
            self.events = previous;
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> CalpadResult<()> {
        info!(id, "deleting event");
        let mut next = self.events.clone();
        delete_from(&mut next, id)?;
        let previous = std::mem::replace(&mut self.events, next);
        if let Err(e) = self.save() {
            self.events = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{date, make_event};

    #[test]
    fn upsert_appends_then_replaces_in_place() {
        let mut store = MemoryStore::default();
        store.upsert(make_event("1", "One", date(2024, 6, 1), date(2024, 6, 1))).unwrap();
        store.upsert(make_event("2", "Two", date(2024, 6, 2), date(2024, 6, 2))).unwrap();
        store.upsert(make_event("1", "Uno", date(2024, 6, 3), date(2024, 6, 3))).unwrap();

        let events = store.list().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "1");
        assert_eq!(events[0].title, "Uno");
        assert_eq!(events[0].start_date, date(2024, 6, 3));
        assert_eq!(events[1].id, "2");
    }

    #[test]
    fn delete_removes_by_id() {
        let mut store = MemoryStore::new(vec![
            make_event("1", "One", date(2024, 6, 1), date(2024, 6, 1)),
            make_event("2", "Two", date(2024, 6, 2), date(2024, 6, 2)),
        ]);
        store.delete("1").unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert!(matches!(store.get("1"), Err(CalpadError::EventNotFound(_))));
        assert_eq!(store.get("2").unwrap().title, "Two");
    }

    #[test]
    fn deleting_unknown_id_leaves_store_unchanged() {
        let mut store = MemoryStore::new(vec![make_event("1", "One", date(2024, 6, 1), date(2024, 6, 1))]);
        assert!(matches!(store.delete("nope"), Err(CalpadError::EventNotFound(_))));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn file_store_starts_empty_and_persists() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());

        store.upsert(make_event("1", "Kickoff", date(2024, 6, 1), date(2024, 6, 2))).unwrap();
        store.upsert(make_event("2", "Retro", date(2024, 6, 14), date(2024, 6, 14))).unwrap();
        store.delete("2").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        let events = reopened.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kickoff");
        assert_eq!(events[0].end_date, date(2024, 6, 2));

        let raw = std::fs::read_to_string(dir.path().join(FileStore::FILE_NAME)).unwrap();
        assert!(raw.contains("\"startDate\": \"2024-06-01\""));
    }

    #[test]
    fn file_store_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = FileStore::open(&nested).unwrap();
        store.upsert(make_event("1", "One", date(2024, 6, 1), date(2024, 6, 1))).unwrap();
        assert!(nested.join(FileStore::FILE_NAME).exists());
    }

    #[test]
    fn failed_save_leaves_events_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.upsert(make_event("1", "Kickoff", date(2024, 6, 1), date(2024, 6, 1))).unwrap();

        // A directory in the temp file's place makes every write fail
        std::fs::create_dir(dir.path().join("events.json.tmp")).unwrap();

        let err = store.upsert(make_event("2", "Retro", date(2024, 6, 14), date(2024, 6, 14)));
        assert!(matches!(err, Err(CalpadError::Io(_))));
        assert!(store.delete("1").is_err());

        let events = store.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.list().unwrap(), events);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FileStore::FILE_NAME), "{ not json").unwrap();
        assert!(matches!(FileStore::open(dir.path()), Err(CalpadError::Serialization(_))));
    }
}
