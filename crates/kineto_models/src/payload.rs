//! Resolution of loosely-typed remote outputs into media payloads.

use kineto_core::MediaPayload;
use kineto_error::{RemoteError, RemoteErrorKind};
use serde_json::Value;

/// Resolves a remote output into a single media payload.
///
/// The designated payload slot is the first element of an output list.
/// Strings are URLs or paths; objects resolve their `video` component, then
/// their `url`, `path` or legacy `name` field; nested lists (tuple outputs)
/// resolve their first element.
///
/// # Errors
///
/// Returns [`RemoteErrorKind::Payload`] if no media reference can be found.
pub fn resolve_output(output: &Value) -> Result<MediaPayload, RemoteError> {
    match output {
        Value::String(reference) if !reference.trim().is_empty() => {
            Ok(MediaPayload::from_reference(reference.trim()))
        }
        Value::Array(items) => match items.first() {
            Some(first) => resolve_output(first),
            None => Err(payload_error("output list is empty")),
        },
        Value::Object(fields) => {
            if let Some(video) = fields.get("video").filter(|v| !v.is_null()) {
                return resolve_output(video);
            }
            ["url", "path", "name"]
                .into_iter()
                .filter_map(|key| fields.get(key).and_then(Value::as_str))
                .map(str::trim)
                .find(|reference| !reference.is_empty())
                .map(MediaPayload::from_reference)
                .ok_or_else(|| payload_error("object carries no url, path or name"))
        }
        Value::Null => Err(payload_error("output is null")),
        other => Err(payload_error(&format!("unexpected output {}", other))),
    }
}

#[track_caller]
fn payload_error(message: &str) -> RemoteError {
    RemoteError::new(RemoteErrorKind::Payload(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_path() {
        let payload = resolve_output(&json!(["/tmp/gradio/abc/video.mp4"])).unwrap();
        assert_eq!(payload, MediaPayload::Path("/tmp/gradio/abc/video.mp4".into()));
    }

    #[test]
    fn video_component_prefers_url() {
        let output = json!([{
            "video": {
                "path": "/tmp/gradio/abc/video.mp4",
                "url": "https://5a84.gradio.live/gradio_api/file=/tmp/gradio/abc/video.mp4",
                "meta": {"_type": "gradio.FileData"}
            },
            "subtitles": null
        }]);
        let payload = resolve_output(&output).unwrap();
        assert_eq!(
            payload,
            MediaPayload::Url(
                "https://5a84.gradio.live/gradio_api/file=/tmp/gradio/abc/video.mp4".into()
            )
        );
    }

    #[test]
    fn file_data_without_url_uses_path() {
        let output = json!([{"path": "/tmp/out.mp4", "url": null}]);
        assert_eq!(
            resolve_output(&output).unwrap(),
            MediaPayload::Path("/tmp/out.mp4".into())
        );
    }

    #[test]
    fn tuple_output_uses_first_element() {
        let output = json!([["/tmp/out.mp4", 42]]);
        assert_eq!(
            resolve_output(&output).unwrap(),
            MediaPayload::Path("/tmp/out.mp4".into())
        );
    }

    #[test]
    fn legacy_file_object_uses_name() {
        let output = json!([{"name": "/tmp/legacy.mp4", "data": null, "is_file": true}]);
        assert_eq!(
            resolve_output(&output).unwrap(),
            MediaPayload::Path("/tmp/legacy.mp4".into())
        );
    }

    #[test]
    fn null_and_empty_outputs_fail() {
        for output in [json!([]), json!([null]), json!([""]), json!([{"video": null}]), json!([3])] {
            let err = resolve_output(&output).unwrap_err();
            assert!(matches!(err.kind, RemoteErrorKind::Payload(_)), "{output}");
        }
    }
}
