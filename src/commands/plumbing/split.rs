use crate::areas::workbench::Workbench;
use crate::artifacts::codec::file_map::FileMap;
use crate::artifacts::codec::manifest::Manifest;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

impl Workbench {
    pub fn split(
        &self,
        combined: &Path,
        manifest: &Manifest,
        out: Option<&Path>,
    ) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(combined)
            .with_context(|| format!("failed to read {}", combined.display()))?;
        let split = FileMap::split(&text, manifest);

        for name in split.file_map.ordered_names(&split.normalized_manifest) {
            let content = split.file_map.get(name).unwrap_or_default();

            match out {
                Some(dir) => {
                    let path = output_path(dir, name)?;
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;

                    writeln!(self.writer(), "wrote {}", path.display())?;
                }
                None => {
                    writeln!(self.writer(), "* {name} ({} lines)", content.lines().count())?;
                }
            }
        }

        Ok(())
    }
}

// marker names come from the blob, so they must stay inside `dir`
fn output_path(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let relative = Path::new(name);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        anyhow::bail!("refusing to write {name} outside of {}", dir.display());
    }

    Ok(dir.join(relative))
}
