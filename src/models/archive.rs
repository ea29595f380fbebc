use serde::Serialize;

/// Row of the archive's `data/index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: String,
    pub tags: Vec<String>,
    pub category: String,
    pub file_path: String,
    pub md_path: String,
}
