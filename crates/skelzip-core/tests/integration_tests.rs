//! Integration tests for skelzip-core.
//!
//! These tests build real archives from temporary trees and read them back
//! with the `zip` crate.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use skelzip_core::CancellationToken;
use skelzip_core::NoopProgress;
use skelzip_core::ProgressCallback;
use skelzip_core::SkeletonConfig;
use skelzip_core::SkeletonError;
use skelzip_core::create_skeleton;
use skelzip_core::create_skeleton_with_progress;
use skelzip_core::list_skeleton;
use skelzip_core::skeleton::PrintProgress;
use skelzip_core::skeleton::config::README_CONTENT;
use skelzip_core::skeleton::config::README_NAME;
use skelzip_core::skeleton::walker::archive_name;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipArchive;

/// Reads every entry into name -> (`is_dir`, declared size, content).
fn read_archive(path: &Path) -> BTreeMap<String, (bool, u64, Vec<u8>)> {
    let mut zip = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entries = BTreeMap::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        entries.insert(
            entry.name().to_string(),
            (entry.is_dir(), entry.size(), content),
        );
    }
    entries
}

fn name(path: &Path) -> String {
    archive_name(path).unwrap()
}

fn sample_tree(temp: &TempDir) -> PathBuf {
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("docs/drafts")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("a.txt"), "abc").unwrap();
    fs::write(root.join("docs/report.pdf"), vec![0x25u8; 4096]).unwrap();
    fs::write(root.join("docs/drafts/zero.len"), "").unwrap();
    root
}

#[test]
fn test_scenario_three_entries() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "abc").unwrap();
    let output = temp.path().join("out.zip");

    create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();
    let entries = read_archive(&output);

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[&name(&root.join("a.txt"))],
        (false, 3, vec![0, 0, 0])
    );
    assert_eq!(
        entries[&format!("{}/", name(&root.join("sub")))],
        (true, 0, Vec::new())
    );
    assert_eq!(entries[README_NAME].2, README_CONTENT.as_bytes());
}

#[test]
fn test_every_file_and_directory_mirrored() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let output = temp.path().join("out.zip");

    let report = create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();
    let entries = read_archive(&output);

    let mut files = 0;
    let mut dirs = 0;
    for entry in walkdir_like(&root) {
        let meta = fs::metadata(&entry).unwrap();
        if meta.is_dir() {
            if entry == root {
                continue;
            }
            dirs += 1;
            let (is_dir, size, content) = &entries[&format!("{}/", name(&entry))];
            assert!(is_dir);
            assert_eq!(*size, 0);
            assert!(content.is_empty());
        } else {
            files += 1;
            let (is_dir, size, content) = &entries[&name(&entry)];
            assert!(!is_dir);
            assert_eq!(*size, meta.len());
            assert_eq!(content.len() as u64, meta.len());
            assert!(content.iter().all(|&b| b == 0));
        }
    }

    assert_eq!(entries.len(), files + dirs + 1);
    assert_eq!(report.files_added, files);
    assert_eq!(report.directories_added, dirs);
}

/// Recursive listing independent of the crate's own walker.
fn walkdir_like(root: &Path) -> Vec<PathBuf> {
    let mut out = vec![root.to_path_buf()];
    let mut i = 0;
    while i < out.len() {
        let path = out[i].clone();
        if path.is_dir() {
            for child in fs::read_dir(&path).unwrap() {
                out.push(child.unwrap().path());
            }
        }
        i += 1;
    }
    out
}

#[test]
fn test_idempotent_names_and_sizes() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let first = temp.path().join("first.zip");
    let second = temp.path().join("second.zip");

    create_skeleton(&first, &[&root], &SkeletonConfig::default()).unwrap();
    create_skeleton(&second, &[&root], &SkeletonConfig::default()).unwrap();

    let sizes = |path: &Path| -> Vec<(String, u64)> {
        read_archive(path)
            .into_iter()
            .map(|(name, (_, size, _))| (name, size))
            .collect()
    };
    assert_eq!(sizes(&first), sizes(&second));
}

#[test]
fn test_sorted_entries_follow_name_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir(&root).unwrap();
    for n in ["c", "a", "d", "b"] {
        fs::write(root.join(n), n).unwrap();
    }
    let output = temp.path().join("out.zip");

    let config = SkeletonConfig::default().with_sort_entries(true);
    create_skeleton(&output, &[&root], &config).unwrap();

    let manifest = list_skeleton(&output).unwrap();
    let names: Vec<_> = manifest.entries.iter().map(|e| e.name.clone()).collect();
    let expected: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|n| name(&root.join(n)))
        .chain(std::iter::once(README_NAME.to_string()))
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_entry_names_rooted_at_argument() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let output = temp.path().join("out.zip");

    create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();

    let base = name(&root);
    let manifest = list_skeleton(&output).unwrap();
    assert!(
        manifest
            .entries
            .iter()
            .filter(|e| e.name != README_NAME)
            .all(|e| e.name.starts_with(&base))
    );
}

#[test]
fn test_progress_line_per_visited_entry() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let output = temp.path().join("out.zip");

    let mut progress = PrintProgress::new(Vec::new());
    let report = create_skeleton_with_progress(
        &output,
        &[&root],
        &SkeletonConfig::default(),
        &mut progress,
        &CancellationToken::new(),
    )
    .unwrap();

    let text = String::from_utf8(progress.into_inner()).unwrap();
    let a_txt = root.join("a.txt").display().to_string();

    assert_eq!(text.lines().count(), report.entries_visited);
    assert_eq!(text.lines().next(), Some(root.display().to_string().as_str()));
    assert!(text.lines().any(|line| line == a_txt));
}

#[test]
fn test_cancel_during_walk_keeps_previous_output() {
    struct CancelOnThird {
        token: CancellationToken,
        seen: usize,
    }

    impl ProgressCallback for CancelOnThird {
        fn on_entry_start(&mut self, _path: &Path, _depth: usize) {
            self.seen += 1;
            if self.seen == 3 {
                self.token.cancel();
            }
        }
        fn on_bytes_written(&mut self, _bytes: u64) {}
        fn on_entry_complete(&mut self, _path: &Path) {}
        fn on_complete(&mut self) {
            panic!("must not complete");
        }
    }

    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let output = temp.path().join("out.zip");
    fs::write(&output, "previous run").unwrap();

    let token = CancellationToken::new();
    let mut progress = CancelOnThird {
        token: token.clone(),
        seen: 0,
    };
    let err = create_skeleton_with_progress(
        &output,
        &[&root],
        &SkeletonConfig::default(),
        &mut progress,
        &token,
    )
    .unwrap_err();

    assert!(matches!(err, SkeletonError::Cancelled));
    assert_eq!(progress.seen, 3);
    assert_eq!(fs::read(&output).unwrap(), b"previous run");
}

#[test]
fn test_second_root_failure_discards_everything() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let missing = temp.path().join("missing");
    let output = temp.path().join("out.zip");

    let err = create_skeleton(&output, &[&root, &missing], &SkeletonConfig::default())
        .unwrap_err();

    assert!(matches!(err, SkeletonError::Walk { .. }));
    assert!(err.to_string().starts_with(&missing.display().to_string()));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_fails_run() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let locked = root.join("docs");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory anyway.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = temp.path().join("out.zip");
    let result = create_skeleton(&output, &[&root], &SkeletonConfig::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.path(), Some(locked.as_path()));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_fails_run_and_keeps_output() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let locked = root.join("docs/report.pdf");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if File::open(&locked).is_ok() {
        return;
    }

    let output = temp.path().join("out.zip");
    fs::write(&output, "previous run").unwrap();

    let err = create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap_err();

    assert!(matches!(err, SkeletonError::Walk { .. }));
    assert_eq!(err.path(), Some(locked.as_path()));
    assert_eq!(fs::read(&output).unwrap(), b"previous run");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_followed_fails_run() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    std::os::unix::fs::symlink(root.join("gone"), root.join("dangling")).unwrap();
    let output = temp.path().join("out.zip");

    let config = SkeletonConfig::default().with_follow_symlinks(true);
    let err = create_skeleton(&output, &[&root], &config).unwrap_err();

    assert!(err.path().unwrap().ends_with("dangling"));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_symlink_recorded_as_zero_entry() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    std::os::unix::fs::symlink("a.txt", root.join("alias")).unwrap();
    let output = temp.path().join("out.zip");

    let report = create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();
    let entries = read_archive(&output);

    let (is_dir, size, content) = &entries[&name(&root.join("alias"))];
    assert!(!is_dir);
    assert_eq!(*size, "a.txt".len() as u64);
    assert!(content.iter().all(|&b| b == 0));
    assert_eq!(report.symlinks_added, 1);
}

#[test]
fn test_single_file_root() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("lonely.dat");
    fs::write(&file, [7u8; 21]).unwrap();
    let output = temp.path().join("out.zip");

    create_skeleton(&output, &[&file], &SkeletonConfig::default()).unwrap();
    let entries = read_archive(&output);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[&name(&file)], (false, 21, vec![0u8; 21]));
}

#[test]
fn test_empty_root_directory_yields_readme_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nothing");
    fs::create_dir(&root).unwrap();
    let output = temp.path().join("out.zip");

    let report = create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();

    assert_eq!(report.total_entries(), 0);
    assert_eq!(report.entries_visited, 1);
    assert_eq!(read_archive(&output).len(), 1);
}

#[test]
fn test_noop_progress_is_usable_directly() {
    let temp = TempDir::new().unwrap();
    let root = sample_tree(&temp);
    let output = temp.path().join("out.zip");

    let report = create_skeleton_with_progress(
        &output,
        &[&root],
        &SkeletonConfig::default().with_compression_level(Some(9)),
        &mut NoopProgress,
        &CancellationToken::new(),
    )
    .unwrap();

    assert_eq!(report.bytes_declared, 3 + 4096);
}
