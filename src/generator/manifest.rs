//! Manifest fragment extraction and aggregate assembly.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{RepoError, Result};

/// Declaration line prefixed to every aggregate document.
pub const XML_DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";

/// Read one addon's manifest as a fragment ready for aggregation: any line
/// containing an XML declaration is dropped and trailing whitespace is
/// trimmed per line. No other content is altered.
pub fn read_fragment(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RepoError::ManifestNotFound(path.to_path_buf()),
        _ => RepoError::ManifestUnreadable(format!("{}: {err}", path.display())),
    })?;

    let mut fragment = String::new();
    for line in raw.lines() {
        if line.contains("<?xml") {
            continue;
        }
        fragment.push_str(line.trim_end());
        fragment.push('\n');
    }
    Ok(fragment.trim_end().to_string())
}

/// Wrap an accumulated fragment body into the aggregate document: one
/// declaration line, one `<addons>` root pair, trailing newline.
pub fn wrap(body: &str) -> String {
    format!("{XML_DECLARATION}\n<addons>\n{}\n</addons>\n", body.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn declaration_lines_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addon.xml");
        fs::write(
            &path,
            "<?xml version=\"1.0\"?>\n<addon id=\"a\"/>\n  <?xml again?>\n",
        )
        .unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert_eq!(fragment, "<addon id=\"a\"/>");
    }

    #[test]
    fn only_trailing_whitespace_is_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addon.xml");
        fs::write(&path, "  <addon id=\"a\">   \n    <extension/>\t\n  </addon>\n").unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert_eq!(fragment, "  <addon id=\"a\">\n    <extension/>\n  </addon>");
    }

    #[test]
    fn crlf_manifests_lose_the_carriage_returns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addon.xml");
        fs::write(&path, "<addon id=\"a\">\r\n</addon>\r\n").unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert_eq!(fragment, "<addon id=\"a\">\n</addon>");
    }

    #[test]
    fn missing_manifest_is_classified_as_not_found() {
        let dir = tempdir().unwrap();
        let err = read_fragment(&dir.path().join("addon.xml")).unwrap_err();
        assert!(matches!(err, RepoError::ManifestNotFound(_)));
    }

    #[test]
    fn non_utf8_manifest_is_classified_as_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addon.xml");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_fragment(&path).unwrap_err();
        assert!(matches!(err, RepoError::ManifestUnreadable(_)));
    }

    #[test]
    fn wrap_produces_one_declaration_and_one_root_pair() {
        let document = wrap("<addon id=\"a\"/>\n\n<addon id=\"b\"/>\n\n");
        assert_eq!(document.matches("<?xml").count(), 1);
        assert_eq!(document.matches("<addons>").count(), 1);
        assert_eq!(document.matches("</addons>").count(), 1);
        assert!(document.ends_with("</addons>\n"));
    }

    #[test]
    fn wrap_trims_the_body_before_closing() {
        let document = wrap("<addon id=\"a\"/>\n\n");
        assert_eq!(
            document,
            format!("{XML_DECLARATION}\n<addons>\n<addon id=\"a\"/>\n</addons>\n")
        );
    }
}
