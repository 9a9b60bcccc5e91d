use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use layoutguard_types::TreePath;
use tracing::debug;
use walkdir::WalkDir;

/// List every file and directory below `directory`, hidden entries included.
///
/// Entries are returned as tree paths relative to `directory` (`/dir/file`), in
/// lexicographic order. The directory itself is not part of the listing.
/// Symlinks are reported but not followed.
pub fn list_directory(directory: &Utf8Path) -> anyhow::Result<Vec<TreePath>> {
    let meta = std::fs::metadata(directory).with_context(|| format!("stat {directory}"))?;
    if !meta.is_dir() {
        anyhow::bail!("not a directory: {directory}");
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1) {
        let entry = entry.with_context(|| format!("walk {directory}"))?;
        let abs = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|p| anyhow::anyhow!("non UTF-8 path: {}", p.display()))?;
        let rel = abs
            .strip_prefix(directory)
            .with_context(|| format!("{abs} is outside {directory}"))?;
        out.push(TreePath::from_relative(rel));
    }

    // Stable order.
    out.sort();
    out.dedup();

    debug!(%directory, entries = out.len(), "listed directory");
    Ok(out)
}

/// List `base/sub`, with paths relative to `base/sub`.
pub fn list_sub_directory(base: &Utf8Path, sub: &Utf8Path) -> anyhow::Result<Vec<TreePath>> {
    list_directory(&base.join(sub))
}
