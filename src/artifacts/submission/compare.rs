use crate::artifacts::codec::file_map::FileMap;
use crate::artifacts::codec::manifest::Manifest;
use crate::artifacts::submission::record::{SourceKind, StepSources};

/// Picks the before/after texts to diff for one kind of source.
///
/// HTML and CSS are compared whole. JavaScript is compared whole unless a
/// manifest or a file is given, in which case both blobs are split and only
/// that file (or the manifest's default file) is compared. A file found in
/// neither blob is an error.
pub fn pick_texts(
    before: &StepSources,
    after: &StepSources,
    kind: SourceKind,
    file: Option<&str>,
    manifest: &Manifest,
) -> anyhow::Result<(String, String)> {
    let per_file = kind == SourceKind::Js && (!manifest.is_empty() || file.is_some());
    if !per_file {
        return Ok((before.text(kind).to_string(), after.text(kind).to_string()));
    }

    let before = FileMap::split(&before.js, manifest).file_map;
    let after = FileMap::split(&after.js, manifest).file_map;

    let file = match file {
        Some(file) if !before.contains(file) && !after.contains(file) => {
            anyhow::bail!(
                "no file named {file}; available: {}",
                FileMap::joined_names(&[&before, &after], manifest)
            )
        }
        Some(file) => file,
        None => manifest.default_file_name(),
    };

    Ok((
        before.get(file).unwrap_or_default().to_string(),
        after.get(file).unwrap_or_default().to_string(),
    ))
}
