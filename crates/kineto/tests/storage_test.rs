//! Tests for persisting generated media.

use kineto::{MediaPayload, StorageErrorKind, save_payload};

#[test]
fn test_bytes_are_written() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let destination = dir.path().join("nested/out.mp4");
    let payload = MediaPayload::Bytes {
        mime: Some("video/mp4".into()),
        data: vec![0, 0, 0, 24, b'f', b't', b'y', b'p'],
    };

    let written = save_payload(&payload, &destination)?;
    assert_eq!(written, 8);
    assert_eq!(std::fs::read(&destination)?, b"\0\0\0\x18ftyp");
    Ok(())
}

#[test]
fn test_paths_are_copied() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = dir.path().join("gradio_cache.mp4");
    std::fs::write(&source, b"video")?;
    let destination = dir.path().join("copy.mp4");

    save_payload(&MediaPayload::Path(source.clone()), &destination)?;
    assert_eq!(std::fs::read(&destination)?, b"video");
    // Source stays in place
    assert!(source.exists());
    Ok(())
}

#[test]
fn test_missing_source_is_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = save_payload(
        &MediaPayload::Path(dir.path().join("gone.mp4")),
        &dir.path().join("out.mp4"),
    )
    .unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::NotFound(_)));
    Ok(())
}

#[test]
fn test_urls_are_not_persisted() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = save_payload(
        &MediaPayload::Url("https://5a84.gradio.live/gradio_api/file=/tmp/v.mp4".into()),
        &dir.path().join("out.mp4"),
    )
    .unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::NotPersistable(_)));
    assert!(!dir.path().join("out.mp4").exists());
    Ok(())
}

#[test]
fn test_path_onto_itself_keeps_content() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let video = dir.path().join("video.mp4");
    std::fs::write(&video, b"twenty bytes of mp4!")?;

    let written = save_payload(&MediaPayload::Path(video.clone()), &video)?;
    assert_eq!(written, 20);
    assert_eq!(std::fs::read(&video)?, b"twenty bytes of mp4!");

    // Same file reached through a different spelling
    let indirect = dir.path().join(".").join("video.mp4");
    save_payload(&MediaPayload::Path(video.clone()), &indirect)?;
    assert_eq!(std::fs::read(&video)?.len(), 20);
    Ok(())
}
