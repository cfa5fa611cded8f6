use super::LoadOutcome;
use crate::error::{Result, StockroomError};
use crate::model::Entity;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Ordered, file-backed collection of entities.
///
/// The log is bound to one file for its whole lifetime. Duplicated ids are
/// allowed here; uniqueness is [`super::Repository`]'s job.
#[derive(Debug, Clone)]
pub struct PersistentLog<T> {
    entries: Vec<T>,
    path: PathBuf,
}

impl<T> PersistentLog<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(StockroomError::InvalidArgument(
                "file path cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            entries: Vec::new(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, item: T) {
        debug!(
            "event=log_add module=store status=ok id={} count={}",
            item.id(),
            self.entries.len() + 1
        );
        self.entries.push(item);
    }

    /// Snapshot of the entries in append order.
    pub fn get_all(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry to the bound file as indented JSON.
    ///
    /// The content goes to a temporary sibling first and is renamed over the
    /// target, so readers see either the old file or the new one.
    pub fn save_to_file(&self) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(StockroomError::Serialization)?;

        if let Err(err) = write_atomic(&self.path, content.as_bytes()) {
            warn!(
                "event=log_save module=store status=error path={} error={}",
                self.path.display(),
                err
            );
            return Err(err);
        }

        info!(
            "event=log_save module=store status=ok path={} count={}",
            self.path.display(),
            self.entries.len()
        );
        Ok(())
    }

    /// Replace the in-memory entries with the content of the bound file.
    ///
    /// A missing or blank file is not an error and keeps the current entries.
    /// On any error the current entries are kept as well.
    pub fn load_from_file(&mut self) -> Result<LoadOutcome> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=log_load module=store status=missing path={}",
                    self.path.display()
                );
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => {
                warn!(
                    "event=log_load module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(StockroomError::Io(err));
            }
        };
        if content.trim().is_empty() {
            return Ok(LoadOutcome::Empty);
        }

        let parsed: Option<Vec<T>> = serde_json::from_str(&content).map_err(|err| {
            warn!(
                "event=log_load module=store status=corrupt path={} error={}",
                self.path.display(),
                err
            );
            StockroomError::Deserialization(err)
        })?;

        match parsed {
            None => Ok(LoadOutcome::Empty),
            Some(items) => {
                let count = items.len();
                self.entries = items;
                info!(
                    "event=log_load module=store status=ok path={} count={}",
                    self.path.display(),
                    count
                );
                Ok(LoadOutcome::Loaded(count))
            }
        }
    }
}

fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("log");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    let written = write_and_sync(&tmp_path, content)
        .and_then(|_| fs::rename(&tmp_path, target).map_err(StockroomError::Io));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn item(id: i32, name: &str, quantity: i32) -> InventoryItem {
        let added = Utc.with_ymd_and_hms(2024, 3, id as u32, 9, 30, 0).unwrap();
        InventoryItem::new(id, name, quantity, added).unwrap()
    }

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        (dir, path)
    }

    fn no_tmp_files(dir: &Path) -> bool {
        fs::read_dir(dir).unwrap().all(|entry| {
            let name = entry.unwrap().file_name();
            !name.to_string_lossy().ends_with(".tmp")
        })
    }

    #[test]
    fn rejects_empty_path() {
        let err = PersistentLog::<InventoryItem>::new("").unwrap_err();
        assert!(matches!(err, StockroomError::InvalidArgument(_)));
    }

    #[test]
    fn keeps_append_order_and_duplicates() {
        let (_dir, path) = setup();
        let mut log = PersistentLog::new(path).unwrap();
        log.add(item(2, "B", 25));
        log.add(item(1, "A", 10));
        log.add(item(2, "B again", 3));

        let ids: Vec<_> = log.get_all().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }

    #[test]
    fn round_trips_through_a_fresh_instance() {
        let (_dir, path) = setup();
        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));
        log.add(item(2, "B", 25));
        log.add(item(3, "C", 10));
        log.save_to_file().unwrap();

        let mut fresh: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
        let outcome = fresh.load_from_file().unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded(3));
        assert_eq!(fresh.get_all(), log.get_all());
    }

    #[test]
    fn writes_indented_named_fields() {
        let (_dir, path) = setup();
        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "Monitor", 10));
        log.save_to_file().unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("[\n  {"));
        assert!(on_disk.contains("\"name\": \"Monitor\""));
        assert!(on_disk.contains("\"quantity\": 10"));
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp_files() {
        let (dir, path) = setup();
        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));
        log.save_to_file().unwrap();
        log.add(item(2, "B", 25));
        log.save_to_file().unwrap();

        let mut fresh: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
        assert_eq!(fresh.load_from_file().unwrap(), LoadOutcome::Loaded(2));
        assert!(no_tmp_files(dir.path()));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("inventory.json");
        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));

        log.save_to_file().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_failure_reports_io_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        // A directory in place of the target makes the final rename fail.
        let path = dir.path().join("inventory.json");
        fs::create_dir(&path).unwrap();

        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));
        let err = log.save_to_file().unwrap_err();

        assert!(matches!(err, StockroomError::Io(_)));
        assert!(path.is_dir());
        assert!(no_tmp_files(dir.path()));
    }

    #[test]
    fn save_under_a_file_reports_io() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let mut log = PersistentLog::new(blocker.join("inventory.json")).unwrap();
        log.add(item(1, "A", 10));

        assert!(matches!(log.save_to_file(), Err(StockroomError::Io(_))));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
    }

    #[test]
    fn load_missing_file_keeps_entries() {
        let (_dir, path) = setup();
        let mut log = PersistentLog::new(path).unwrap();
        log.add(item(1, "A", 10));

        assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Missing);
        assert_eq!(log.get_all(), vec![item(1, "A", 10)]);
    }

    #[test]
    fn load_blank_or_null_file_keeps_entries() {
        let (_dir, path) = setup();
        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));

        fs::write(&path, "").unwrap();
        assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Empty);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Empty);

        fs::write(&path, "null").unwrap();
        assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Empty);

        assert_eq!(log.get_all(), vec![item(1, "A", 10)]);
    }

    #[test]
    fn load_corrupt_file_keeps_entries() {
        let (_dir, path) = setup();
        fs::write(&path, "[{\"id\": 1, \"name\": \"A\", ").unwrap();

        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(5, "E", 1));
        let err = log.load_from_file().unwrap_err();

        assert!(matches!(err, StockroomError::Deserialization(_)));
        assert_eq!(log.get_all(), vec![item(5, "E", 1)]);
    }

    #[test]
    fn load_wrong_shape_is_deserialization_failure() {
        let (_dir, path) = setup();
        fs::write(&path, "{\"id\": 1}").unwrap();

        let mut log: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
        assert!(matches!(
            log.load_from_file(),
            Err(StockroomError::Deserialization(_))
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn load_ignores_unknown_fields() {
        let (_dir, path) = setup();
        fs::write(
            &path,
            r#"[
  {
    "id": 4,
    "name": "Laptop cover",
    "quantity": 8,
    "date_added": "2024-03-04T09:30:00Z",
    "supplier": "added by a newer writer"
  }
]"#,
        )
        .unwrap();

        let mut log: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
        assert_eq!(log.load_from_file().unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(log.get_all(), vec![item(4, "Laptop cover", 8)]);
    }

    #[test]
    fn load_invalid_record_keeps_entries() {
        let (_dir, path) = setup();
        fs::write(
            &path,
            r#"[{"id": 1, "name": "", "quantity": -5, "date_added": "2024-03-01T09:30:00Z"}]"#,
        )
        .unwrap();

        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(5, "E", 1));
        let err = log.load_from_file().unwrap_err();

        assert!(matches!(err, StockroomError::Deserialization(_)));
        assert_eq!(log.get_all(), vec![item(5, "E", 1)]);
    }

    #[test]
    fn load_negative_quantity_is_deserialization_failure() {
        let (_dir, path) = setup();
        fs::write(
            &path,
            r#"[{"id": 1, "name": "A", "quantity": -5, "date_added": "2024-03-01T09:30:00Z"}]"#,
        )
        .unwrap();

        let mut log: PersistentLog<InventoryItem> = PersistentLog::new(&path).unwrap();
        assert!(matches!(
            log.load_from_file(),
            Err(StockroomError::Deserialization(_))
        ));
        assert!(log.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn load_symlink_loop_reports_io() {
        let (_dir, path) = setup();
        std::os::unix::fs::symlink(&path, &path).unwrap();

        let mut log = PersistentLog::new(&path).unwrap();
        log.add(item(1, "A", 10));

        assert!(matches!(log.load_from_file(), Err(StockroomError::Io(_))));
        assert_eq!(log.get_all(), vec![item(1, "A", 10)]);
    }

    #[test]
    fn load_directory_reports_io() {
        let dir = TempDir::new().unwrap();
        let mut log: PersistentLog<InventoryItem> = PersistentLog::new(dir.path()).unwrap();
        assert!(matches!(log.load_from_file(), Err(StockroomError::Io(_))));
    }
}
