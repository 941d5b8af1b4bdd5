//! SQLite-backed document store.
//!
//! Each project and the checklist config live as one JSON document per row;
//! answer shapes stay opaque to the store. Progress is recomputed from the
//! current config on every read and re-cached after every write, so the
//! stored `progress` record is never trusted as truth.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::checklist::checklist_progress;
use crate::error::{Error, Result};
use crate::models::{
    ChecklistConfig, Checklists, CreateProjectInput, Progress, Project, ProjectStatus,
    UpdateProjectInput,
};

mod schema;

const CONFIG_ROW_ID: &str = "checklist";

/// Handle to the launchpad store. Cheap to clone; all clones share one
/// connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the database at the platform data directory, creating it on
    /// first run.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "launchpad", "launchpad")
            .ok_or(Error::DataDir)?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Self::open(&dirs.data_dir().join("launchpad.db"))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Arc::new(Mutex::new(Connection::open_in_memory()?)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        self.conn().execute_batch(schema::SCHEMA)?;
        tracing::debug!("Store schema applied");
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // Poisoning means another thread panicked mid-statement; nothing
        // sensible to recover here.
        self.conn.lock().expect("database mutex poisoned")
    }

    // -- projects ----------------------------------------------------------

    pub fn create_project(&self, input: CreateProjectInput) -> Result<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            brand_name: input.brand_name,
            collab_code: input.collab_code,
            design_refs: input.design_refs,
            payment_info: input.payment_info,
            poc: input.poc,
            status: input.status.unwrap_or(ProjectStatus::NotStarted),
            version: 1,
            version_history: vec![1],
            checklists: Checklists::default(),
            progress: Progress::default(),
            created_at: now,
            updated_at: now,
        };

        let document = serde_json::to_string(&project)?;
        self.conn().execute(
            "INSERT INTO projects (id, document, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                project.id.to_string(),
                document,
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )?;

        Ok(project)
    }

    pub fn get_project(&self, id: Uuid) -> Result<Option<Project>> {
        let conn = self.conn();
        let Some(mut project) = Self::load_project(&conn, id)? else {
            return Ok(None);
        };
        project.progress = checklist_progress(&project.checklists, &Self::load_config(&conn)?);
        Ok(Some(project))
    }

    /// All projects, most recently updated first, with progress recomputed
    /// against the current config.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let conn = self.conn();
        let config = Self::load_config(&conn)?;

        let mut stmt =
            conn.prepare("SELECT document FROM projects ORDER BY updated_at DESC, id")?;
        let documents = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut projects = Vec::new();
        for document in documents {
            let mut project: Project = serde_json::from_str(&document?)?;
            project.progress = checklist_progress(&project.checklists, &config);
            projects.push(project);
        }
        Ok(projects)
    }

    /// Last-write-wins merge of the set fields, then re-cache progress.
    pub fn update_project(&self, id: Uuid, input: UpdateProjectInput) -> Result<Option<Project>> {
        let conn = self.conn();
        let Some(mut project) = Self::load_project(&conn, id)? else {
            return Ok(None);
        };

        if let Some(v) = input.brand_name {
            project.brand_name = v;
        }
        if let Some(v) = input.collab_code {
            project.collab_code = Some(v);
        }
        if let Some(v) = input.design_refs {
            project.design_refs = Some(v);
        }
        if let Some(v) = input.payment_info {
            project.payment_info = Some(v);
        }
        if let Some(v) = input.poc {
            project.poc = Some(v);
        }
        if let Some(v) = input.status {
            project.status = v;
        }
        if let Some(v) = input.version {
            project.version = v.max(1);
        }
        if let Some(v) = input.version_history {
            project.version_history = v;
        }
        if let Some(v) = input.sales {
            project.checklists.sales = v;
        }
        if let Some(v) = input.launch {
            project.checklists.launch = v;
        }

        project.progress = checklist_progress(&project.checklists, &Self::load_config(&conn)?);
        project.updated_at = Utc::now();

        Self::store_project(&conn, &project)?;
        Ok(Some(project))
    }

    pub fn delete_project(&self, id: Uuid) -> Result<bool> {
        let changed = self.conn().execute(
            "DELETE FROM projects WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(changed > 0)
    }

    /// The version reconciler's one-time repair write. Overwrites only the
    /// history; everything else in the document stays as stored.
    pub fn save_version_history(&self, id: Uuid, history: &[u32]) -> Result<bool> {
        let conn = self.conn();
        let Some(mut project) = Self::load_project(&conn, id)? else {
            return Ok(false);
        };
        project.version_history = history.to_vec();
        Self::store_project(&conn, &project)?;
        Ok(true)
    }

    // -- config ------------------------------------------------------------

    /// The stored schema, or the built-in default when none has been saved.
    pub fn get_checklist_config(&self) -> Result<ChecklistConfig> {
        Self::load_config(&self.conn())
    }

    /// Replace the schema wholesale. Existing answers are not migrated;
    /// completion for every project follows the new schema from the next
    /// read onward.
    pub fn put_checklist_config(&self, config: &ChecklistConfig) -> Result<()> {
        let document = serde_json::to_string(config)?;
        self.conn().execute(
            "INSERT INTO config (id, document, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET document = ?2, updated_at = ?3",
            params![CONFIG_ROW_ID, document, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(version = %config.version, "Checklist config stored");
        Ok(())
    }

    // -- row helpers -------------------------------------------------------

    fn load_project(conn: &Connection, id: Uuid) -> Result<Option<Project>> {
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM projects WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    fn store_project(conn: &Connection, project: &Project) -> Result<()> {
        let document = serde_json::to_string(project)?;
        conn.execute(
            "UPDATE projects SET document = ?2, updated_at = ?3 WHERE id = ?1",
            params![
                project.id.to_string(),
                document,
                project.updated_at.to_rfc3339()
            ],
        )?;
        Ok(())
    }

    fn load_config(conn: &Connection) -> Result<ChecklistConfig> {
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM config WHERE id = ?1",
                params![CONFIG_ROW_ID],
                |row| row.get(0),
            )
            .optional()?;
        match document {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(ChecklistConfig::default()),
        }
    }
}
