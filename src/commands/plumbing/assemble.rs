use crate::areas::workbench::Workbench;
use crate::artifacts::codec::file_map::FileMap;
use crate::artifacts::codec::manifest::Manifest;
use std::path::Path;

const MANIFEST_FILE_NAME: &str = "manifest.json";

impl Workbench {
    /// Prints the combined blob for the files of `dir`. Without an explicit
    /// manifest the directory's own `manifest.json` is used when present.
    pub fn assemble(&self, dir: &Path, manifest: &Manifest) -> anyhow::Result<()> {
        if !dir.is_dir() {
            anyhow::bail!("{} is not a directory", dir.display());
        }

        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let manifest = if manifest.is_empty() && manifest_path.is_file() {
            log::debug!("using {}", manifest_path.display());
            Manifest::load(&manifest_path)?
        } else {
            manifest.clone()
        };

        let file_map = FileMap::load_from_dir(dir, &manifest)?;
        write!(self.writer(), "{}", file_map.assemble(&manifest))?;

        Ok(())
    }
}
