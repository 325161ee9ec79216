//! Comparing the files of a source tree against a target tree
//!
//! Files are matched by their path relative to their own root with the
//! extension dropped, so `src/a/x.flac` corresponds to `dst/a/x.mp3` but not
//! to `dst/b/x.mp3`. Both trees are walked with [`get_files`] at the same
//! depth.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Result, WalkError};
use crate::tree::{Depth, get_files};

/// Which comparison to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Created,
    Deleted,
    Changed,
}

/// Files of one tree grouped by their extension-less relative path.
type FileIndex = BTreeMap<PathBuf, Vec<PathBuf>>;

/// The key two files must share to count as copies of each other.
fn match_key(root: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(|rel| rel.with_extension(""))
        .map_err(|_| WalkError::InvalidArgument {
            path: path.to_path_buf(),
            reason: "walked path is outside its root",
        })
}

fn index_files(root: &Path, depth: Depth) -> Result<FileIndex> {
    let mut index = FileIndex::new();
    for path in get_files(root, depth)? {
        let key = match_key(root, &path)?;
        index.entry(key).or_default().push(path);
    }
    Ok(index)
}

/// Every file of `side` whose key has no entry in `other`, sorted.
fn unmatched(side: FileIndex, other: &FileIndex) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = side
        .into_iter()
        .filter(|(key, _)| !other.contains_key(key))
        .flat_map(|(_, paths)| paths)
        .collect();
    found.sort();
    found
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| WalkError::access(path, e))
}

/// Files in `src` with no counterpart in `dst`, as source paths.
pub fn created(src: &Path, dst: &Path, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    let depth = depth.into();
    let src_files = index_files(src, depth)?;
    let dst_files = index_files(dst, depth)?;

    let found = unmatched(src_files, &dst_files);
    tracing::debug!(src = %src.display(), dst = %dst.display(), count = found.len(), "created files");
    Ok(found)
}

/// Files in `dst` with no counterpart in `src`, as target paths.
pub fn deleted(src: &Path, dst: &Path, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    let depth = depth.into();
    let src_files = index_files(src, depth)?;
    let dst_files = index_files(dst, depth)?;

    let found = unmatched(dst_files, &src_files);
    tracing::debug!(src = %src.display(), dst = %dst.display(), count = found.len(), "deleted files");
    Ok(found)
}

/// Files present in both trees whose source copy was modified strictly
/// after a target copy, as source paths.
///
/// Files only present on one side are reported by [`created`] and [`deleted`].
pub fn changed(src: &Path, dst: &Path, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    let depth = depth.into();
    let src_files = index_files(src, depth)?;
    let dst_files = index_files(dst, depth)?;

    let mut found = Vec::new();
    for (key, src_paths) in src_files {
        let Some(dst_paths) = dst_files.get(&key) else {
            continue;
        };
        for src_path in src_paths {
            let src_time = modified(&src_path)?;
            let mut newer = false;
            for dst_path in dst_paths {
                if src_time > modified(dst_path)? {
                    newer = true;
                    break;
                }
            }
            if newer {
                found.push(src_path);
            }
        }
    }
    found.sort();
    tracing::debug!(src = %src.display(), dst = %dst.display(), count = found.len(), "changed files");
    Ok(found)
}

/// Run the comparison selected by `report`.
pub fn compare(report: Report, src: &Path, dst: &Path, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    match report {
        Report::Created => created(src, dst, depth),
        Report::Deleted => deleted(src, dst, depth),
        Report::Changed => changed(src, dst, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel).unwrap();
        path
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    fn trees() -> (TempDir, TempDir) {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        touch(src.path(), "shared.txt");
        touch(src.path(), "album/new.flac");
        touch(src.path(), "album/kept.flac");
        touch(dst.path(), "shared.txt");
        touch(dst.path(), "album/kept.flac");
        touch(dst.path(), "album/old.flac");
        (src, dst)
    }

    #[test]
    fn test_created() {
        let (src, dst) = trees();
        let found = created(src.path(), dst.path(), -1).unwrap();
        assert_eq!(found, vec![src.path().join("album/new.flac")]);
    }

    #[test]
    fn test_deleted() {
        let (src, dst) = trees();
        let found = deleted(src.path(), dst.path(), -1).unwrap();
        assert_eq!(found, vec![dst.path().join("album/old.flac")]);
    }

    #[test]
    fn test_changed_uses_strictly_newer_mtime() {
        let (src, dst) = trees();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

        set_mtime(&src.path().join("shared.txt"), base + Duration::from_secs(60));
        set_mtime(&dst.path().join("shared.txt"), base);
        set_mtime(&src.path().join("album/kept.flac"), base);
        set_mtime(&dst.path().join("album/kept.flac"), base);

        let found = changed(src.path(), dst.path(), -1).unwrap();
        assert_eq!(found, vec![src.path().join("shared.txt")]);
    }

    #[test]
    fn test_changed_skips_newer_target() {
        let (src, dst) = trees();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

        set_mtime(&src.path().join("shared.txt"), base);
        set_mtime(&dst.path().join("shared.txt"), base + Duration::from_secs(60));
        set_mtime(&src.path().join("album/kept.flac"), base + Duration::from_secs(5));
        set_mtime(&dst.path().join("album/kept.flac"), base);

        let found = changed(src.path(), dst.path(), -1).unwrap();
        assert_eq!(found, vec![src.path().join("album/kept.flac")]);
    }

    #[test]
    fn test_extension_change_is_same_file() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        touch(src.path(), "album/song.flac");
        touch(dst.path(), "album/song.mp3");

        assert!(created(src.path(), dst.path(), -1).unwrap().is_empty());
        assert!(deleted(src.path(), dst.path(), -1).unwrap().is_empty());
    }

    #[test]
    fn test_same_stem_in_other_directory_does_not_match() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        touch(src.path(), "first/song.flac");
        touch(dst.path(), "second/song.mp3");

        assert_eq!(
            created(src.path(), dst.path(), -1).unwrap(),
            vec![src.path().join("first/song.flac")]
        );
        assert_eq!(
            deleted(src.path(), dst.path(), -1).unwrap(),
            vec![dst.path().join("second/song.mp3")]
        );
    }

    #[test]
    fn test_changed_across_extension_change() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let song = touch(src.path(), "album/song.flac");
        let copy = touch(dst.path(), "album/song.mp3");
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        set_mtime(&song, base + Duration::from_secs(60));
        set_mtime(&copy, base);

        assert_eq!(changed(src.path(), dst.path(), -1).unwrap(), vec![song]);
    }

    #[test]
    fn test_depth_limits_comparison() {
        let (src, dst) = trees();
        assert!(created(src.path(), dst.path(), 0).unwrap().is_empty());
        assert!(deleted(src.path(), dst.path(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_compare_dispatch() {
        let (src, dst) = trees();
        assert_eq!(
            compare(Report::Created, src.path(), dst.path(), -1).unwrap(),
            created(src.path(), dst.path(), -1).unwrap()
        );
        assert_eq!(
            compare(Report::Deleted, src.path(), dst.path(), -1).unwrap(),
            deleted(src.path(), dst.path(), -1).unwrap()
        );
    }

    #[test]
    fn test_missing_target_fails() {
        let (src, dst) = trees();
        let missing = dst.path().join("missing");
        let result = created(src.path(), &missing, -1);
        assert!(matches!(result, Err(WalkError::FilesystemAccess { .. })));
    }
}
