// API client module: a small blocking HTTP client that talks to the
// Pixeldrain file API. Uploads are sequential, so there is no need for an
// async runtime here.

use log::{debug, info};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::UploadError;
use crate::progress::{ProgressReader, ProgressSink};

pub const DEFAULT_BASE_URL: &str = "https://pixeldrain.com";

/// A file that passed the pre-upload checks: it exists and is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl UploadTarget {
    pub fn inspect(path: &Path) -> Result<Self, UploadError> {
        if !path.is_file() {
            return Err(UploadError::FileNotFound(path.to_path_buf()));
        }
        let size = fs::metadata(path)?.len();
        if size == 0 {
            return Err(UploadError::EmptyFile(path.to_path_buf()));
        }
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(UploadTarget {
            path: path.to_path_buf(),
            file_name,
            size,
        })
    }
}

/// Where an uploaded file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub id: String,
    pub link: String,
}

/// A confirmed upload as it appears in the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub link: String,
    pub filename: String,
}

/// Body of a `201 Created` reply from `POST /api/file`.
#[derive(Deserialize, Debug)]
pub struct CreatedFile {
    pub id: String,
}

/// The remote side of an upload. `PixeldrainClient` is the real one; tests
/// substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait FileHost {
    fn upload(
        &self,
        target: &UploadTarget,
        progress: Box<dyn ProgressSink + Send>,
    ) -> Result<RemoteFile, UploadError>;
}

/// Holds a reqwest blocking client, the service base URL and the API key
/// sent as the Basic auth password.
#[derive(Clone)]
pub struct PixeldrainClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PixeldrainClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(PixeldrainClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Base URL from `PIXELDRAIN_URL`, falling back to the public service.
    pub fn from_env(api_key: &str) -> Result<Self, reqwest::Error> {
        let base_url = std::env::var("PIXELDRAIN_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base_url, api_key)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/file", self.base_url)
    }

    pub fn download_link(&self, id: &str) -> String {
        format!("{}/u/{}", self.base_url, id)
    }
}

impl FileHost for PixeldrainClient {
    /// Stream the file as a single `file` part. The file handle lives inside
    /// the request body and is dropped with it on every path.
    fn upload(
        &self,
        target: &UploadTarget,
        progress: Box<dyn ProgressSink + Send>,
    ) -> Result<RemoteFile, UploadError> {
        let file = File::open(&target.path)?;
        let reader = ProgressReader::new(file, progress);
        let part = multipart::Part::reader_with_length(reader, target.size)
            .file_name(target.file_name.clone())
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("file", part);

        info!("uploading {} ({} bytes)", target.path.display(), target.size);
        let res = self
            .client
            .post(self.upload_url())
            .basic_auth("", Some(&self.api_key))
            .multipart(form)
            .send()?;

        let status = res.status();
        let body = res.text()?;
        debug!("upload of {} answered {}", target.file_name, status);

        let id = parse_upload_response(status, &body)?;
        Ok(RemoteFile {
            link: self.download_link(&id),
            id,
        })
    }
}

/// Anything but 201 is a rejection; a 201 must carry a string `id`.
pub fn parse_upload_response(status: StatusCode, body: &str) -> Result<String, UploadError> {
    if status != StatusCode::CREATED {
        return Err(UploadError::Rejected {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    let created: CreatedFile =
        serde_json::from_str(body).map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    Ok(created.id)
}
