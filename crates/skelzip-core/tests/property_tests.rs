//! Property-based tests for zero-fill content and name/size mirroring.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use skelzip_core::SkeletonConfig;
use skelzip_core::create_skeleton;
use skelzip_core::io::ZEROES;
use skelzip_core::io::ZeroFillReader;
use skelzip_core::skeleton::walker::archive_name;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipArchive;

proptest! {
    /// Bounded reads yield exactly the requested number of zero bytes.
    #[test]
    fn prop_bounded_reader_exact_length(size in 0u64..300_000) {
        let mut out = Vec::new();
        let copied = std::io::copy(&mut ZeroFillReader::bounded(size), &mut out).unwrap();
        prop_assert_eq!(copied, size);
        prop_assert_eq!(out.len() as u64, size);
        prop_assert!(out.iter().all(|&b| b == 0));
    }

    /// A read always fills the whole buffer, whatever it held before.
    #[test]
    fn prop_read_fills_buffer(mut buf in prop::collection::vec(any::<u8>(), 0..4096)) {
        let len = buf.len();
        let n = (&ZEROES).read(&mut buf).unwrap();
        prop_assert_eq!(n, len);
        prop_assert!(buf.iter().all(|&b| b == 0));
    }

    /// Normal relative paths map to the same string with `/` separators.
    #[test]
    fn prop_archive_name_of_plain_paths(
        components in prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..6)
    ) {
        let path: PathBuf = components.iter().collect();
        prop_assert_eq!(archive_name(&path).unwrap(), components.join("/"));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every generated file appears once, with its size and zero content.
    #[test]
    fn prop_files_mirrored_with_sizes(
        sizes in prop::collection::btree_map("[a-z]{1,8}", 0usize..20_000, 1..8)
    ) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tree");
        fs::create_dir(&root).unwrap();
        for (file, size) in &sizes {
            fs::write(root.join(file), vec![0xA5u8; *size]).unwrap();
        }
        let output = temp.path().join("out.zip");

        create_skeleton(&output, &[&root], &SkeletonConfig::default()).unwrap();

        let mut zip = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        prop_assert_eq!(zip.len(), sizes.len() + 1);
        for (file, size) in &sizes {
            let entry_name = archive_name(&root.join(file)).unwrap();
            let mut entry = zip.by_name(&entry_name).unwrap();
            prop_assert_eq!(entry.size(), *size as u64);
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            prop_assert_eq!(content.len(), *size);
            prop_assert!(content.iter().all(|&b| b == 0));
        }
    }
}
