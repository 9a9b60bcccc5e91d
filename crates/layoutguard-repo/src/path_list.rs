use layoutguard_types::TreePath;

/// Parse a newline-separated path list. Blank lines are skipped and each
/// entry is normalized to a tree path; order and duplicates are kept.
pub fn read_path_list(text: &str) -> Vec<TreePath> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(TreePath::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn skips_blank_lines_and_normalizes() {
        let paths = read_path_list("/foo\n\n  \ncommunication/some_type/\r\n/foo\n");
        let got: Vec<&str> = paths.iter().map(TreePath::as_str).collect();
        assert_eq!(got, vec!["/foo", "/communication/some_type", "/foo"]);
    }

    proptest! {
        #[test]
        fn every_entry_is_absolute(text in "[ -~\n]{0,200}") {
            for p in read_path_list(&text) {
                prop_assert!(p.as_str().starts_with('/'));
            }
        }
    }
}
