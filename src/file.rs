// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// Resolve the user's `-o` value: a directory hint (trailing separator or an
/// existing directory) gets `default_filename` appended. Parent directories
/// are created.
pub fn resolve_out_path(hint: &Path, default_filename: &str) -> Result<PathBuf> {
    if hint.as_os_str().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(&hint.to_string_lossy()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        return Ok(p.join(default_filename));
    }
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(p)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(std::io::Error::new(std::io::ErrorKind::AlreadyExists, msg).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Write `contents` via a sibling temp file + rename, so a crash never
/// leaves a half-written dataset behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("hero_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn dir_hint_gets_default_name() {
        let dir = tmp_dir("hint");
        let hint = format!("{}/nested/", dir.display());
        let out = resolve_out_path(Path::new(&hint), "data.json").unwrap();
        assert!(out.ends_with("data.json"));
        assert!(dir.join("nested").is_dir());
    }

    #[test]
    fn existing_dir_gets_default_name() {
        let dir = tmp_dir("existing");
        let out = resolve_out_path(&dir, "data.json").unwrap();
        assert_eq!(out, dir.join("data.json"));
    }

    #[test]
    fn file_path_creates_parent() {
        let dir = tmp_dir("file");
        let target = dir.join("a").join("b.json");
        let out = resolve_out_path(&target, "data.json").unwrap();
        assert_eq!(out, target);
        assert!(dir.join("a").is_dir());
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tmp_dir("notdir");
        let f = dir.join("plain");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
    }

    #[test]
    fn atomic_write_replaces() {
        let dir = tmp_dir("atomic");
        let f = dir.join("out.json");
        write_atomic(&f, "one").unwrap();
        write_atomic(&f, "two").unwrap();
        assert_eq!(fs::read_to_string(&f).unwrap(), "two");
        assert!(!dir.join("out.json.tmp").exists());
    }
}
