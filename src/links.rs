use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// `<dir>/report.pdf` -> `<dir>/report_links.txt`
pub fn sidecar_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}_links.txt"))
}

/// Write `link` as the only line of the sidecar file, replacing any old one.
pub fn write_sidecar(source: &Path, link: &str) -> Result<PathBuf> {
    let path = sidecar_path(source);
    fs::write(&path, format!("{link}\n")).map_err(|source| Error::SidecarWrite {
        path: path.clone(),
        source,
    })?;
    debug!("saved link to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("files/report.pdf", "files/report_links.txt")]
    #[case("archive.tar.gz", "archive.tar_links.txt")]
    #[case("notes", "notes_links.txt")]
    #[case(".bashrc", ".bashrc_links.txt")]
    fn names_sidecar_after_stem(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(sidecar_path(Path::new(source)), PathBuf::from(expected));
    }

    #[test]
    fn overwrites_existing_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.pdf");
        let sidecar = dir.path().join("report_links.txt");
        fs::write(&sidecar, "https://pixeldrain.com/u/old\nstale\n").unwrap();

        let written = write_sidecar(&source, "https://pixeldrain.com/u/abc123").unwrap();
        assert_eq!(written, sidecar);
        assert_eq!(
            fs::read_to_string(&sidecar).unwrap(),
            "https://pixeldrain.com/u/abc123\n"
        );
    }

    #[test]
    fn unwritable_location_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing-dir").join("report.pdf");
        assert!(matches!(
            write_sidecar(&source, "https://pixeldrain.com/u/abc123"),
            Err(Error::SidecarWrite { .. })
        ));
    }
}
