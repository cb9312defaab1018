//! Recursive directory copy used to materialize a saved template.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{OperationError, Result};

/// Totals for a finished copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
}

/// Copy the tree under `src` into `dst`, preserving relative paths.
///
/// Files are read whole and written whole, then given the source file's
/// permissions. Directories the copy creates get their source permissions
/// after their contents are written, so read-only templates still copy.
/// The first failure aborts the walk; anything already written stays.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    fs::create_dir_all(dst)
        .map_err(|e| OperationError::io(dst, "Failed to create directory", e))?;

    let src_real = fs::canonicalize(src)
        .map_err(|e| OperationError::io(src, "Failed to read template directory", e))?;
    let dst_real = fs::canonicalize(dst)
        .map_err(|e| OperationError::io(dst, "Failed to resolve destination", e))?;

    if src_real == dst_real {
        return Err(OperationError::Copy {
            message: format!("{} is the template directory itself", dst.display()),
            help: Some("Run the command from a different directory".to_string()),
        });
    }

    // Walk entries that would land on the destination inside the template,
    // or back on the template inside the destination, are pruned.
    let skip: Vec<PathBuf> = [
        dst_real.strip_prefix(&src_real).ok(),
        src_real.strip_prefix(&dst_real).ok(),
    ]
    .into_iter()
    .flatten()
    .map(|rel| src.join(rel))
    .collect();

    let mut stats = CopyStats::default();
    let mut created: Vec<(PathBuf, fs::Permissions)> = Vec::new();

    let walker = WalkDir::new(src)
        .into_iter()
        .filter_entry(|entry| !skip.iter().any(|s| entry.path() == s));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            OperationError::io(path, "Failed to walk template", e)
        })?;
        let path = entry.path();
        let rel = path.strip_prefix(src).map_err(|_| OperationError::Copy {
            message: format!("{} escaped {}", path.display(), src.display()),
            help: None,
        })?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            if !target.is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| OperationError::io(&target, "Failed to create directory", e))?;
                let permissions = entry
                    .metadata()
                    .map_err(|e| OperationError::io(path, "Failed to read metadata", e))?
                    .permissions();
                created.push((target, permissions));
            }
            stats.dirs += 1;
        } else {
            stats.bytes += copy_file(path, &target)?;
            stats.files += 1;
        }
    }

    // Innermost first so no parent is locked before its children are done.
    for (dir, permissions) in created.into_iter().rev() {
        fs::set_permissions(&dir, permissions)
            .map_err(|e| OperationError::io(&dir, "Failed to set permissions", e))?;
    }

    Ok(stats)
}

/// Copy one file's bytes and permission bits, returning the byte count.
fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let bytes = fs::read(from).map_err(|e| OperationError::io(from, "Failed to read file", e))?;
    fs::write(to, &bytes).map_err(|e| OperationError::io(to, "Failed to write file", e))?;

    let permissions = fs::metadata(from)
        .map_err(|e| OperationError::io(from, "Failed to read metadata", e))?
        .permissions();
    fs::set_permissions(to, permissions)
        .map_err(|e| OperationError::io(to, "Failed to set permissions", e))?;

    Ok(bytes.len() as u64)
}
