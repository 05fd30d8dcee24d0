use crate::artifacts::codec::file_map::FileMap;
use crate::artifacts::codec::manifest::Manifest;
use crate::artifacts::codec::normalize_file_name;

/// File-by-file editing of one combined source blob.
///
/// The session owns its [`FileMap`] for as long as the learner edits; content is
/// updated in place and files are never removed. Share it across threads only
/// behind a mutex, or clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingSession {
    manifest: Manifest,
    file_map: FileMap,
    active_file: String,
}

impl EditingSession {
    pub fn from_combined(text: &str, manifest: Manifest) -> Self {
        let split = FileMap::split(text, &manifest);

        Self {
            manifest: split.normalized_manifest,
            file_map: split.file_map,
            active_file: split.default_file_name,
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn file_map(&self) -> &FileMap {
        &self.file_map
    }

    pub fn active_file(&self) -> &str {
        &self.active_file
    }

    pub fn active_content(&self) -> &str {
        self.file_map.get(&self.active_file).unwrap_or_default()
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.file_map.get(name)
    }

    pub fn update_active(&mut self, content: impl Into<String>) {
        self.file_map.insert(self.active_file.clone(), content);
    }

    pub fn switch_to(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.file_map.contains(name) {
            anyhow::bail!("no file named {name} in this session");
        }

        log::debug!("switching from {} to {name}", self.active_file);
        self.active_file = normalize_file_name(name).to_string();
        Ok(())
    }

    /// Replaces every file with the content of a new blob. The active file is
    /// kept when the manifest still lists it.
    pub fn reload(&mut self, text: &str) {
        let split = FileMap::split(text, &self.manifest);

        if !self.manifest.contains(&self.active_file) {
            self.active_file = split.default_file_name;
        }
        self.file_map = split.file_map;
    }

    /// The files joined back into one blob. With an empty manifest only the
    /// active file is emitted.
    pub fn combined(&self) -> String {
        self.file_map
            .assemble_with_fallback(&self.manifest, &self.active_file)
    }
}
