use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Something that can turn a bare executable name into a runnable path.
///
/// The hub only ever asks "is this game installed?" and "where is it?", so
/// the trait stays tiny. Tests plug in a fixed set of names instead of the
/// real `PATH`.
pub trait Resolver {
    /// Return the full path of `name` when an executable by that name is
    /// reachable, `None` otherwise. Absence is a normal outcome.
    fn resolve(&self, name: &str) -> Option<PathBuf>;

    fn is_installed(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        (**self).resolve(name)
    }
}

/// Resolver backed by a list of search directories, normally taken from the
/// `PATH` environment variable.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    dirs: Vec<PathBuf>,
}

impl PathResolver {
    /// Build a resolver from the current process `PATH`.
    ///
    /// The variable is read once; call again to observe changes.
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH"))
    }

    /// Build a resolver from a raw `PATH`-style value. Empty segments are
    /// skipped rather than treated as the current directory.
    pub fn from_path_var(var: Option<OsString>) -> Self {
        let dirs = match var {
            Some(v) => std::env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        PathResolver { dirs }
    }

    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        PathResolver { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl Resolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        // A name carrying a separator is looked up as given, like a shell would.
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            let p = PathBuf::from(name);
            return executable_candidate(&p);
        }
        self.dirs
            .iter()
            .find_map(|dir| executable_candidate(&dir.join(name)))
    }
}

#[cfg(unix)]
fn executable_candidate(p: &Path) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let meta = std::fs::metadata(p).ok()?;
    if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
        Some(p.to_path_buf())
    } else {
        None
    }
}

#[cfg(windows)]
fn executable_candidate(p: &Path) -> Option<PathBuf> {
    if p.extension().is_some() && p.is_file() {
        return Some(p.to_path_buf());
    }
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    exts.split(';')
        .filter(|e| !e.is_empty())
        .map(|e| {
            let mut s = p.as_os_str().to_owned();
            s.push(e);
            PathBuf::from(s)
        })
        .find(|c| c.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_exec(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let p = dir.join(name);
        fs::write(&p, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o755)).unwrap();
        p
    }

    #[test]
    fn empty_name_is_not_resolvable() {
        let r = PathResolver::with_dirs(vec![PathBuf::from("/")]);
        assert_eq!(r.resolve("   "), None);
    }

    #[test]
    fn empty_path_segments_are_skipped() {
        let r = PathResolver::from_path_var(Some(OsString::from("")));
        assert!(r.dirs().is_empty());
        let r = PathResolver::from_path_var(None);
        assert!(r.dirs().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_in_first_matching_dir() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        make_exec(b.path(), "rogue");
        let want = make_exec(a.path(), "rogue");
        let r = PathResolver::with_dirs(vec![a.path().to_path_buf(), b.path().to_path_buf()]);
        assert_eq!(r.resolve("rogue"), Some(want));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_file_is_ignored() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("nethack"), "data").unwrap();
        let r = PathResolver::with_dirs(vec![td.path().to_path_buf()]);
        assert!(!r.is_installed("nethack"));
    }

    #[cfg(unix)]
    #[test]
    fn directory_is_not_an_executable() {
        let td = TempDir::new().unwrap();
        fs::create_dir_all(td.path().join("crawl")).unwrap();
        let r = PathResolver::with_dirs(vec![td.path().to_path_buf()]);
        assert!(!r.is_installed("crawl"));
    }

    #[cfg(unix)]
    #[test]
    fn name_with_separator_is_checked_directly() {
        let td = TempDir::new().unwrap();
        let p = make_exec(td.path(), "moria");
        let r = PathResolver::default();
        assert_eq!(r.resolve(&p.to_string_lossy()), Some(p));
    }
}
