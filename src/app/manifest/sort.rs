//! Byte-wise lexicographic ordering of manifest lines

use std::path::Path;

use tracing::info;

use super::io::read_lines;
use crate::errors::ManifestResult;

/// Sort lines in ascending byte-wise order of the whole line
pub fn sort_lines(mut lines: Vec<String>) -> Vec<String> {
    // `str` ordering compares UTF-8 bytes, which is the required order
    lines.sort_unstable();
    lines
}

/// Read the lines of `path` and return them sorted
pub fn sort_file<P: AsRef<Path>>(path: P) -> ManifestResult<Vec<String>> {
    let path = path.as_ref();
    let sorted = sort_lines(read_lines(path)?);
    info!("Sorted {} lines from {}", sorted.len(), path.display());
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_sort_is_bytewise_not_case_folded() {
        let lines = vec![
            "zlib=1.3".to_string(),
            "Zed=0.1".to_string(),
            "abc=2".to_string(),
            "ab=10".to_string(),
        ];
        assert_eq!(
            sort_lines(lines),
            vec!["Zed=0.1", "ab=10", "abc=2", "zlib=1.3"]
        );
    }

    #[test]
    fn test_sort_file_does_not_modify_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("unsorted.txt");
        std::fs::write(&path, "z=3\nx=1\ny=2\n").unwrap();

        let sorted = sort_file(&path).unwrap();

        assert_eq!(sorted, vec!["x=1", "y=2", "z=3"]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "z=3\nx=1\ny=2\n");
    }

    proptest! {
        #[test]
        fn prop_sort_is_ordered_permutation(lines in proptest::collection::vec("\\PC{0,6}", 0..30)) {
            let sorted = sort_lines(lines.clone());

            prop_assert!(sorted.windows(2).all(|w| w[0].as_bytes() <= w[1].as_bytes()));

            let mut expected = lines;
            expected.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
            prop_assert_eq!(sorted, expected);
        }
    }
}
