//! Client for the asset storage service.
//!
//! Blocking `ureq` calls, meant to run on the async compute task pool with
//! results polled back on the main thread. The picker core only sees the
//! outcome types; the wire details stay in here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::MAX_UPLOAD_BYTES;

const USER_AGENT: &str = concat!("mapstyler/", env!("CARGO_PKG_VERSION"));

/// File extensions accepted for marker uploads.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// An asset already stored for this user, as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct RemoteAsset {
    pub public_url: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    crate::picker::catalog::MARKER_KIND.to_string()
}

/// Terminal result of one upload operation.
#[derive(Debug)]
pub struct UploadOutcome {
    pub success: bool,
    /// Public URL of the stored asset when the upload succeeded.
    pub url: Option<String>,
    pub kind: String,
    /// Best-effort failure detail; may be empty when the service gave none.
    pub error: Option<String>,
}

impl UploadOutcome {
    fn failure(kind: &str, error: String) -> Self {
        Self {
            success: false,
            url: None,
            kind: kind.to_string(),
            error: Some(error),
        }
    }
}

/// A local file that passed upload validation.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl PickedFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

fn assets_endpoint(base_url: &str) -> String {
    format!("{}/assets", base_url.trim_end_matches('/'))
}

/// Check a picked file before it is allowed to become an upload request:
/// known raster extension, within the size cap, readable image header.
pub fn validate_upload_file(path: &Path) -> Result<PickedFile, String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Unsupported file type".to_string());
    }

    let metadata =
        std::fs::metadata(path).map_err(|e| format!("Failed to read file: {}", e))?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(format!(
            "File is larger than the {} MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }

    let (width, height) =
        image::image_dimensions(path).map_err(|e| format!("Not a readable image: {}", e))?;

    Ok(PickedFile {
        path: path.to_path_buf(),
        width,
        height,
    })
}

/// Upload one file as a new asset. Never panics; every failure path folds
/// into an [`UploadOutcome`] with `success == false`.
pub fn upload_asset(
    base_url: &str,
    api_key: Option<&str>,
    path: &Path,
    kind: &str,
) -> UploadOutcome {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return UploadOutcome::failure(kind, format!("Failed to read {}: {}", filename, e));
        }
    };

    let url = format!(
        "{}?kind={}&filename={}",
        assets_endpoint(base_url),
        kind,
        filename
    );

    let mut request = ureq::post(&url)
        .set("User-Agent", USER_AGENT)
        .set("Content-Type", "application/octet-stream");
    if let Some(key) = api_key {
        request = request.set("Api-Key", key);
    }

    match request.send_bytes(&bytes) {
        Ok(response) => match response.into_json::<RemoteAsset>() {
            Ok(asset) => UploadOutcome {
                success: true,
                url: Some(asset.public_url),
                kind: asset.kind,
                error: None,
            },
            Err(e) => UploadOutcome::failure(kind, format!("Malformed upload response: {}", e)),
        },
        // The service reports rejections (too large, bad type, quota) as a
        // status with an optional JSON body shaped {"errors": "..."}.
        Err(ureq::Error::Status(_, response)) => {
            let body = response.into_string().unwrap_or_default();
            UploadOutcome::failure(kind, parse_error_body(&body))
        }
        Err(e) => UploadOutcome::failure(kind, format!("Upload failed: {}", e)),
    }
}

/// Fetch the assets this user has uploaded, for the "your uploads" tab.
pub fn list_assets(base_url: &str, api_key: Option<&str>) -> Result<Vec<RemoteAsset>, String> {
    let mut request = ureq::get(&assets_endpoint(base_url)).set("User-Agent", USER_AGENT);
    if let Some(key) = api_key {
        request = request.set("Api-Key", key);
    }

    match request.call() {
        Ok(response) => response
            .into_json::<Vec<RemoteAsset>>()
            .map_err(|e| format!("Malformed asset listing: {}", e)),
        Err(ureq::Error::Status(code, _)) => {
            Err(format!("Asset service returned status {}", code))
        }
        Err(e) => Err(format!("Failed to fetch uploads: {}", e)),
    }
}

/// Pull the user-facing message out of an upload failure body.
///
/// The body may optionally be a JSON object with a string-typed `errors`
/// field. Anything else — malformed JSON, missing field, wrong type —
/// degrades to an empty message; the error placeholder then shows only its
/// generic title. This never escalates past this boundary.
pub fn parse_error_body(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        errors: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.errors)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_with_message() {
        assert_eq!(parse_error_body(r#"{"errors":"too large"}"#), "too large");
    }

    #[test]
    fn test_parse_error_body_missing_field() {
        assert_eq!(parse_error_body(r#"{"detail":"nope"}"#), "");
    }

    #[test]
    fn test_parse_error_body_wrong_type() {
        assert_eq!(parse_error_body(r#"{"errors":["a","b"]}"#), "");
        assert_eq!(parse_error_body(r#"{"errors":42}"#), "");
    }

    #[test]
    fn test_parse_error_body_malformed() {
        assert_eq!(parse_error_body("<html>502</html>"), "");
        assert_eq!(parse_error_body(""), "");
    }

    #[test]
    fn test_remote_asset_parsing_full() {
        let json = r#"{"public_url":"https://assets.example.com/u/1/marker.png","kind":"marker"}"#;
        let asset: RemoteAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.public_url, "https://assets.example.com/u/1/marker.png");
        assert_eq!(asset.kind, "marker");
    }

    #[test]
    fn test_remote_asset_parsing_defaults_kind() {
        let json = r#"{"public_url":"https://assets.example.com/u/1/marker.png"}"#;
        let asset: RemoteAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.kind, "marker");
    }

    #[test]
    fn test_assets_endpoint_trims_trailing_slash() {
        assert_eq!(
            assets_endpoint("http://localhost:4000/api/v1/"),
            "http://localhost:4000/api/v1/assets"
        );
    }

    #[test]
    fn test_validate_rejects_unsupported_extension() {
        let err = validate_upload_file(Path::new("notes.txt")).unwrap_err();
        assert_eq!(err, "Unsupported file type");
    }

    #[test]
    fn test_validate_rejects_missing_extension() {
        let err = validate_upload_file(Path::new("marker")).unwrap_err();
        assert_eq!(err, "Unsupported file type");
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let err = validate_upload_file(Path::new("/nonexistent/marker.png")).unwrap_err();
        assert!(err.starts_with("Failed to read file"));
    }

    #[test]
    fn test_validate_accepts_real_image() {
        let path = std::env::temp_dir().join("mapstyler_validate_accepts.png");
        image::RgbaImage::new(4, 2).save(&path).unwrap();

        let picked = validate_upload_file(&path).unwrap();
        assert_eq!((picked.width, picked.height), (4, 2));
        assert_eq!(picked.file_name(), "mapstyler_validate_accepts.png");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_validate_rejects_non_image_payload() {
        let path = std::env::temp_dir().join("mapstyler_validate_rejects.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = validate_upload_file(&path).unwrap_err();
        assert!(err.starts_with("Not a readable image"));

        let _ = std::fs::remove_file(&path);
    }
}
