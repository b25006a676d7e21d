#![cfg(unix)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use gamehub::runner::{Launcher, ProcessLauncher};
use gamehub::{LaunchOutcome, PathResolver, Resolver};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

fn script(dir: &TempDir, name: &str, body: &str) {
    let f = dir.child(name);
    f.write_str(&format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(f.path(), fs::Permissions::from_mode(0o755)).unwrap();
}

fn launcher(dir: &TempDir) -> ProcessLauncher<PathResolver> {
    ProcessLauncher::new(PathResolver::with_dirs(vec![dir.path().to_path_buf()]))
}

#[test]
fn exit_status_is_reported() {
    let bin = TempDir::new().unwrap();
    script(&bin, "quitter", "exit 3");
    script(&bin, "winner", "exit 0");
    let mut l = launcher(&bin);
    assert_eq!(l.launch("quitter"), LaunchOutcome::Completed(Some(3)));
    assert_eq!(l.launch("winner"), LaunchOutcome::Completed(Some(0)));
}

#[test]
fn uninstalled_game_is_not_found() {
    let bin = TempDir::new().unwrap();
    assert_eq!(launcher(&bin).launch("nethack"), LaunchOutcome::NotFound);
}

#[test]
fn removed_after_scan_is_not_found() {
    let bin = TempDir::new().unwrap();
    script(&bin, "snake", "exit 0");
    let mut l = launcher(&bin);
    fs::remove_file(bin.child("snake").path()).unwrap();
    assert_eq!(l.launch("snake"), LaunchOutcome::NotFound);
}

#[test]
fn missing_interpreter_reads_as_not_found() {
    let bin = TempDir::new().unwrap();
    let f = bin.child("broken");
    f.write_str("#!/nonexistent/interpreter\n").unwrap();
    fs::set_permissions(f.path(), fs::Permissions::from_mode(0o755)).unwrap();
    // exec reports ENOENT for the interpreter, not for the script itself
    assert_eq!(launcher(&bin).launch("broken"), LaunchOutcome::NotFound);
}

/// Resolves every name to one fixed path, installed or not.
struct Always(PathBuf);

impl Resolver for Always {
    fn resolve(&self, _name: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

#[test]
fn exec_refusal_is_a_launch_failure() {
    let dir = TempDir::new().unwrap();
    // exec of a directory fails with EACCES, even for root
    let mut l = ProcessLauncher::new(Always(dir.path().to_path_buf()));
    let outcome = l.launch("rogue");
    assert!(
        matches!(outcome, LaunchOutcome::Failed(ref cause) if !cause.is_empty()),
        "got {outcome:?}"
    );
}
