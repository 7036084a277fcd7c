//! Storage for saved designs.
//!
//! The placement core treats persistence as save/load of opaque [`Design`]
//! snapshots. [`DesignRepository`] mirrors the backend's `/designs`
//! collection; two local implementations are provided.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use roomkit_core::{Design, PersistenceError};
use uuid::Uuid;

/// CRUD over saved designs.
pub trait DesignRepository {
    /// Designs owned by `user_id`.
    fn list(&self, user_id: &str) -> Result<Vec<Design>, PersistenceError>;

    fn get(&self, id: &str) -> Result<Design, PersistenceError>;

    /// Stores a new design. A missing id is generated; timestamps are
    /// stamped. Returns the stored document.
    fn create(&mut self, design: Design) -> Result<Design, PersistenceError>;

    /// Overwrites the design stored under `id`, refreshing `updated_at`.
    fn update(&mut self, id: &str, design: Design) -> Result<Design, PersistenceError>;

    fn delete(&mut self, id: &str) -> Result<(), PersistenceError>;

    fn exists(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }
}

/// Generates an id for a design that has none.
pub fn new_design_id() -> String {
    format!("design-{}", Uuid::new_v4().simple())
}

fn prepare_create(mut design: Design) -> Design {
    if design.id.as_deref().map_or(true, str::is_empty) {
        design.id = Some(new_design_id());
    }
    design.touch(Utc::now());
    design
}

fn prepare_update(id: &str, previous: &Design, mut design: Design) -> Design {
    design.id = Some(id.to_string());
    if design.created_at.is_none() {
        design.created_at = previous.created_at;
    }
    design.touch(Utc::now());
    design
}

fn not_found(id: &str) -> PersistenceError {
    PersistenceError::DesignNotFound { id: id.to_string() }
}

/// Saved designs kept in memory for the lifetime of the session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    designs: Vec<Design>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.designs
            .iter()
            .position(|d| d.id.as_deref() == Some(id))
    }
}

impl DesignRepository for InMemoryRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Design>, PersistenceError> {
        Ok(self
            .designs
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<Design, PersistenceError> {
        self.position(id)
            .map(|i| self.designs[i].clone())
            .ok_or_else(|| not_found(id))
    }

    fn create(&mut self, design: Design) -> Result<Design, PersistenceError> {
        let design = prepare_create(design);
        let id = design.id.clone().unwrap_or_default();
        match self.position(&id) {
            Some(i) => self.designs[i] = design.clone(),
            None => self.designs.push(design.clone()),
        }
        Ok(design)
    }

    fn update(&mut self, id: &str, design: Design) -> Result<Design, PersistenceError> {
        let i = self.position(id).ok_or_else(|| not_found(id))?;
        let design = prepare_update(id, &self.designs[i], design);
        self.designs[i] = design.clone();
        Ok(design)
    }

    fn delete(&mut self, id: &str) -> Result<(), PersistenceError> {
        let i = self.position(id).ok_or_else(|| not_found(id))?;
        self.designs.remove(i);
        Ok(())
    }
}

/// Saved designs stored as one pretty-printed `<id>.json` file each.
#[derive(Debug, Clone)]
pub struct JsonDirRepository {
    dir: PathBuf,
}

impl JsonDirRepository {
    /// Opens (creating if needed) a repository rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, PersistenceError> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(PersistenceError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("design id '{id}' is not usable as a file name"),
            )));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    fn write(&self, design: &Design) -> Result<(), PersistenceError> {
        let id = design.id.as_deref().unwrap_or_default();
        let json = serde_json::to_string_pretty(design)?;
        std::fs::write(self.path_for(id)?, json)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Design, PersistenceError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl DesignRepository for JsonDirRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Design>, PersistenceError> {
        let mut designs = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match Self::read(&path) {
                    Ok(design) if design.user_id == user_id => designs.push(design),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!("Skipping unreadable design {}: {}", path.display(), e)
                    }
                }
            }
        }
        designs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.name.cmp(&b.name)));
        Ok(designs)
    }

    fn get(&self, id: &str) -> Result<Design, PersistenceError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(not_found(id));
        }
        Self::read(&path)
    }

    fn create(&mut self, design: Design) -> Result<Design, PersistenceError> {
        let design = prepare_create(design);
        self.write(&design)?;
        Ok(design)
    }

    fn update(&mut self, id: &str, design: Design) -> Result<Design, PersistenceError> {
        let previous = self.get(id)?;
        let design = prepare_update(id, &previous, design);
        self.write(&design)?;
        Ok(design)
    }

    fn delete(&mut self, id: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(not_found(id));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}
