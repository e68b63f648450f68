use super::*;

#[test]
fn io_errors_display_unmodified() {
    let base = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
    let err = PhanimError::from(base);
    assert_eq!(err.to_string(), "no access");
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PhanimError::Other(anyhow::Error::new(base).context("while saving"));
    assert!(err.to_string().contains("while saving"));
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::Other));
}

#[test]
fn other_without_io_source_has_no_kind() {
    let err = PhanimError::Other(anyhow::anyhow!("plain"));
    assert_eq!(err.io_kind(), None);
}
