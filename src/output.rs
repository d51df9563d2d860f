use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replaces `path` with `contents`.
///
/// The data goes to a temporary file next to `path` first and is renamed into
/// place once fully written, so readers see either the old file or the new one.
/// An existing file keeps its permissions; a new one gets `0o644` on Unix.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush {}", tmp.path().display()))?;
    if let Some(permissions) = target_permissions(path)? {
        tmp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("failed to set permissions on {}", tmp.path().display()))?;
    }
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

fn target_permissions(path: &Path) -> Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(err) => Err(err).with_context(|| format!("failed to stat {}", path.display())),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn overwrites_existing_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.inl");
        fs::write(&path, "a much longer previous file body\n").unwrap();

        write_file(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[cfg(unix)]
    #[test]
    fn keeps_mode_of_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lipsum.inl");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_file(&path, "new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lipsum.inl");

        write_file(&path, "new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn missing_directory_is_an_error_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("words.inl");

        let err = write_file(&path, "x").unwrap_err();

        assert!(format!("{err:#}").contains("missing"));
        assert!(!path.exists());
    }
}
