use serde::{Deserialize, Serialize};

/// A named activity the user can time.
///
/// `alias` is the secondary key time entries refer to; the store keeps it
/// unique among tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,             // ⇔ tasks.id (TEXT PRIMARY KEY)
    pub name: String,           // ⇔ tasks.name
    pub alias: String,          // ⇔ tasks.alias (UNIQUE INDEX tasks_alias)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>, // ⇔ tasks.folder (nullable)
}

impl Task {
    /// Build a task with a fresh identifier.
    pub fn new(name: &str, alias: &str, folder: Option<&str>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.to_string(),
            alias: alias.to_string(),
            folder: folder.map(str::to_string),
        }
    }
}
