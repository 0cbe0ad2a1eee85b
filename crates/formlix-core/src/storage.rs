//! Artifact storage
//!
//! Rendered reports are written into a single flat directory. File names are
//! derived from the topic and a millisecond timestamp and never contain path
//! separators.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use formlix_ast::ReportFormat;
use tracing::{info, warn};

/// Served when the extension is not a known report format
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Build the artifact file name for `topic`
///
/// `Report_<topic>_<unix millis>.<ext>` with spaces and path separators in
/// the topic replaced by `_`.
pub fn artifact_file_name(topic: &str, format: ReportFormat) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    artifact_file_name_at(topic, format, millis)
}

fn artifact_file_name_at(topic: &str, format: ReportFormat, millis: u128) -> String {
    let safe_topic: String = topic
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("Report_{}_{}.{}", safe_topic, millis, format.extension())
}

/// Write `bytes` to `dir/name`, creating `dir` if needed
///
/// The data is flushed and synced before returning. On failure the partial
/// file is removed. Returns the path of the written file.
pub fn write_artifact(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let mut file = File::create(&path)?;
    let result = (|| {
        file.write_all(bytes)?;
        file.flush()?;
        file.sync_all()
    })();
    drop(file);

    if let Err(e) = result {
        if let Err(remove_err) = fs::remove_file(&path) {
            warn!(path = %path.display(), error = %remove_err, "failed to remove partial artifact");
        }
        return Err(e);
    }

    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(path)
}

/// MIME type for an artifact file name, by extension
pub fn content_type_for(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ReportFormat::from_extension)
        .map(ReportFormat::mime_type)
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Resolve an artifact name inside `dir` for download
///
/// Rejects names that are not a single plain file name, and files that do
/// not exist.
pub fn resolve_artifact(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let mut components = Path::new(name).components();
    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('\\');

    if !is_plain {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid artifact name: {name}"),
        ));
    }

    let path = dir.join(name);
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("artifact not found: {name}"),
        ));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            artifact_file_name_at("Renewable Energy", ReportFormat::Docx, 1700000000000),
            "Report_Renewable_Energy_1700000000000.docx"
        );
        assert_eq!(
            artifact_file_name_at("a/b\\c", ReportFormat::Pdf, 5),
            "Report_a_b_c_5.pdf"
        );
    }

    #[test]
    fn test_file_name_has_timestamp() {
        let name = artifact_file_name("X", ReportFormat::Pdf);
        assert!(name.starts_with("Report_X_"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_write_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");

        let path = write_artifact(&reports, "a.pdf", b"%PDF-1.7").unwrap();
        assert_eq!(path, reports.join("a.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7");

        // Second write into an existing directory
        write_artifact(&reports, "b.pdf", b"x").unwrap();
    }

    #[test]
    fn test_write_over_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory occupies the target name
        fs::create_dir(dir.path().join("taken.docx")).unwrap();
        assert!(write_artifact(dir.path(), "taken.docx", b"x").is_err());
        assert!(dir.path().join("taken.docx").is_dir());
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("r.pdf"), "application/pdf");
        assert_eq!(
            content_type_for("r.DOCX"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("r.txt"), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_for("noext"), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn test_resolve_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Report_X_1.pdf"), b"x").unwrap();

        assert!(resolve_artifact(dir.path(), "Report_X_1.pdf").is_ok());
        assert_eq!(
            resolve_artifact(dir.path(), "missing.pdf").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        for bad in ["../secret", "sub/file.pdf", "..", "/etc/passwd", "a\\b.pdf", ""] {
            assert_eq!(
                resolve_artifact(dir.path(), bad).unwrap_err().kind(),
                io::ErrorKind::InvalidInput,
                "{bad}"
            );
        }
    }
}
