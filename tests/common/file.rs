use derive_new::new;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}

/// Writes a submit document for `step` whose JavaScript is `js`.
pub fn write_submit_document(path: PathBuf, step: &str, js: &str, updated_at: i64) {
    let document = json!({
        "version": 1,
        "submittedAt": updated_at,
        "step": step,
        "item": { "html": "<canvas></canvas>", "css": "", "js": js, "updatedAt": updated_at }
    });

    write_file(FileSpec::new(path, document.to_string()));
}

/// Writes an export document holding one JavaScript source per step.
pub fn write_export_document(path: PathBuf, items: &[(&str, &str, i64)]) {
    let items = items
        .iter()
        .map(|(step, js, updated_at)| {
            (
                step.to_string(),
                json!({ "html": "", "css": "", "js": js, "updatedAt": updated_at }),
            )
        })
        .collect::<serde_json::Map<_, _>>();
    let document = json!({ "version": 1, "exportedAt": 0, "items": items });

    write_file(FileSpec::new(path, document.to_string()));
}

/// The only file directly inside `dir`.
pub fn single_file_in(dir: &Path) -> PathBuf {
    let mut entries = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list {:?}: {}", dir, e))
        .map(|entry| entry.expect("readable entry").path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();

    assert_eq!(entries.len(), 1, "expected exactly one file in {:?}", dir);
    entries.remove(0)
}
