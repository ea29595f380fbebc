//! Markdown archive building
//!
//! Mirrors every `.md` file under the input root into `md/`, and writes
//! `data/index.json` with one entry of front matter metadata per file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::models::ArchiveEntry;
use crate::parsers::{FrontMatter, parse_front_matter};
use crate::utils::{ensure_dir, first_segment, to_posix, write_json};

/// Directory (under the output root) receiving the copied markdown
pub const MARKDOWN_DIR: &str = "md";
/// Directory (under the output root) receiving the index
pub const DATA_DIR: &str = "data";
pub const INDEX_FILE: &str = "index.json";

const MARKDOWN_EXTENSION: &str = "md";

/// Counts gathered while building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub documents: usize,
    pub with_front_matter: usize,
}

/// Find every markdown file under `root`, as paths relative to it
///
/// Symlinked files are included, but linked directories are not descended
/// into. The walk is sorted by file name so repeated runs see files in the
/// same order.
///
/// # Errors
///
/// Returns an error if `root` or any directory below it cannot be read.
pub fn collect_markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk markdown tree: {}", root.display()))?;
        let path = entry.path();
        let is_file =
            entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        files.push(relative.to_path_buf());
    }

    Ok(files)
}

/// Build the index entry for the document at `relative` (relative to the root)
///
/// `title` falls back to the file stem, `category` to the first path segment,
/// and `file_path` to the relative path. `id` and `slug` stay `None` unless
/// front matter provides them.
pub fn build_archive_entry(relative: &Path, meta: &FrontMatter) -> ArchiveEntry {
    let posix = to_posix(relative);

    let title = meta
        .get_non_empty("title")
        .map(str::to_string)
        .unwrap_or_else(|| file_stem(relative));
    let category = meta
        .get_non_empty("category")
        .map(str::to_string)
        .or_else(|| first_segment(relative))
        .unwrap_or_default();
    let file_path = meta.get_non_empty("file_path").map(str::to_string).unwrap_or(posix.clone());

    ArchiveEntry {
        id: meta.get("id").map(str::to_string),
        slug: meta.get("slug").map(str::to_string),
        title,
        tags: meta.tags.clone(),
        category,
        file_path,
        md_path: format!("{}/{}", MARKDOWN_DIR, posix),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Order entries by `(category, title)`, keeping walk order for ties
pub fn sort_entries(entries: &mut [ArchiveEntry]) {
    entries.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.title.cmp(&b.title)));
}

/// Copy the markdown tree at `input` into `output` and write its index
///
/// Files are copied byte for byte. Front matter is read from the same bytes;
/// invalid UTF-8 is decoded lossily for that purpose only.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked, a file cannot be read or
/// copied, or the index cannot be written.
pub fn run_archive(input: &Path, output: &Path) -> Result<ArchiveSummary> {
    let markdown_out = output.join(MARKDOWN_DIR);
    let data_out = output.join(DATA_DIR);
    ensure_dir(&markdown_out)?;
    ensure_dir(&data_out)?;

    // Listed up front so copies landing inside the input tree are not revisited
    let files = collect_markdown_files(input)?;
    let mut summary = ArchiveSummary::default();
    let mut entries = Vec::with_capacity(files.len());

    for relative in files {
        let source = input.join(&relative);
        let bytes = fs::read(&source)
            .with_context(|| format!("Failed to read markdown file: {}", source.display()))?;

        let dest = markdown_out.join(&relative);
        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&dest, &bytes)
            .with_context(|| format!("Failed to copy markdown file to {}", dest.display()))?;

        let meta = parse_front_matter(&String::from_utf8_lossy(&bytes));
        if !meta.is_empty() {
            summary.with_front_matter += 1;
        }
        debug!(path = %relative.display(), front_matter = !meta.is_empty(), "archived document");

        entries.push(build_archive_entry(&relative, &meta));
        summary.documents += 1;
    }

    sort_entries(&mut entries);
    write_json(&data_out.join(INDEX_FILE), &entries)?;

    info!(
        "Archived {} documents ({} with front matter) -> {}",
        summary.documents,
        summary.with_front_matter,
        output.display()
    );

    Ok(summary)
}
