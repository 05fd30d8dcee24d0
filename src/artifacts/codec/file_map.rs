use crate::artifacts::codec::manifest::Manifest;
use crate::artifacts::codec::marker::{FileMarker, contains_marker};
use crate::artifacts::codec::normalize_file_name;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// File name to content. Carries no order of its own; see [`Manifest`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileMap(HashMap<String, String>);

/// Outcome of splitting a combined blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub file_map: FileMap,
    pub default_file_name: String,
    pub normalized_manifest: Manifest,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(normalize_file_name(name)).map(String::as_str)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let name = match name.strip_prefix("./") {
            Some(stripped) => stripped.to_string(),
            None => name,
        };
        self.0.insert(name, content.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(normalize_file_name(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names listed by the manifest first, then the default file, then any
    /// remaining files alphabetically.
    pub fn ordered_names<'m>(&'m self, manifest: &'m Manifest) -> Vec<&'m str> {
        let mut names = manifest
            .emission_order(manifest.default_file_name())
            .into_iter()
            .filter(|name| self.contains(name))
            .collect::<Vec<_>>();

        let mut rest = self
            .0
            .keys()
            .map(String::as_str)
            .filter(|name| !names.contains(name))
            .collect::<Vec<_>>();
        rest.sort_unstable();

        names.extend(rest);
        names
    }

    /// Every name held by any of `maps`, deduplicated, as a comma separated list
    /// in manifest order.
    pub fn joined_names(maps: &[&FileMap], manifest: &Manifest) -> String {
        let mut names: Vec<&str> = Vec::new();
        for map in maps {
            for name in map.ordered_names(manifest) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        names.join(", ")
    }

    /// Splits a combined blob into files.
    ///
    /// Without any marker line the whole blob belongs to the manifest's default
    /// file. Otherwise every marker starts a new file; lines before the first
    /// marker belong to no file and are dropped. Every manifest entry and the
    /// default file are guaranteed a (possibly empty) entry afterwards.
    pub fn split(text: &str, manifest: &Manifest) -> SplitResult {
        let default_file_name = manifest.default_file_name().to_string();
        let mut file_map = FileMap::new();

        if contains_marker(text) {
            for (name, content) in segments(text) {
                file_map.insert(name, content);
            }
        } else {
            file_map.insert(default_file_name.clone(), text);
        }

        for name in manifest.names() {
            file_map.insert_if_missing(name);
        }
        file_map.insert_if_missing(&default_file_name);

        SplitResult {
            file_map,
            default_file_name,
            normalized_manifest: manifest.clone(),
        }
    }

    /// Joins the files back into one blob in manifest order.
    pub fn assemble(&self, manifest: &Manifest) -> String {
        self.assemble_with_fallback(manifest, manifest.default_file_name())
    }

    /// Like [`FileMap::assemble`], emitting `fallback` alone when the manifest is empty.
    pub fn assemble_with_fallback(&self, manifest: &Manifest, fallback: &str) -> String {
        manifest
            .emission_order(fallback)
            .into_iter()
            .map(|name| {
                let content = self.get(name).unwrap_or_default().trim_end();
                format!("{}\n{}\n", FileMarker::line_for(name), content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reads every file the manifest lists from `dir`. Files that do not exist are
    /// taken as empty.
    pub fn load_from_dir(dir: &Path, manifest: &Manifest) -> anyhow::Result<Self> {
        let mut file_map = FileMap::new();

        for name in manifest.emission_order(manifest.default_file_name()) {
            let path = dir.join(name);
            let content = if path.is_file() {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            } else {
                log::warn!("{} is listed but missing, using empty content", path.display());
                String::new()
            };
            file_map.insert(name, content);
        }

        Ok(file_map)
    }

    fn insert_if_missing(&mut self, name: &str) {
        self.0
            .entry(normalize_file_name(name).to_string())
            .or_default();
    }
}

impl<N, C> FromIterator<(N, C)> for FileMap
where
    N: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut file_map = FileMap::new();
        for (name, content) in iter {
            file_map.insert(name, content);
        }
        file_map
    }
}

fn segments(text: &str) -> Vec<(String, String)> {
    let mut segments = Vec::new();
    let mut current: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match FileMarker::parse(line) {
            Some(marker) => {
                flush_segment(&mut segments, current.as_deref(), &mut buffer);
                current = Some(marker.file_name().to_string());
            }
            None => buffer.push(line),
        }
    }
    flush_segment(&mut segments, current.as_deref(), &mut buffer);

    segments
}

fn flush_segment(segments: &mut Vec<(String, String)>, name: Option<&str>, buffer: &mut Vec<&str>) {
    match name {
        Some(name) => segments.push((name.to_string(), format!("{}\n", buffer.join("\n")))),
        None if buffer.iter().any(|line| !line.trim().is_empty()) => {
            log::debug!("dropping {} lines before the first file marker", buffer.len());
        }
        None => {}
    }
    buffer.clear();
}
