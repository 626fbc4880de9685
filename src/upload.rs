use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::upload_request::UploadRequest;

/// Reads the configured log file and posts it once. The response is discarded.
pub async fn upload(config: &UploadConfig) -> Result<(), UploadError> {
    let mut token = HeaderValue::from_str(&config.token)?;
    token.set_sensitive(true);

    let content = tokio::fs::read_to_string(&config.path)
        .await
        .map_err(|e| UploadError::from_read(config.path.clone(), e))?;

    let request = UploadRequest::new(
        &config.server_name,
        &config.map_name,
        content.as_bytes(),
        &config.log_type,
    );

    tracing::info!(
        path = %config.path.display(),
        server = %config.server_name,
        map = %config.map_name,
        "Uploading {} log",
        format_bytes(request.payload_size()),
    );
    tracing::debug!("POST {}", config.url);

    let client = reqwest::Client::new();
    client.post(&config.url)
        .header(AUTHORIZATION, token)
        .json(&request)
        .send()
        .await?;

    Ok(())
}

fn format_bytes(bytes: usize) -> String {
    let kb = bytes / 1024;
    let mb = kb / 1024;
    let gb = mb / 1024;

    if gb > 0 {
        format!("{} GB", gb)
    } else if mb > 0 {
        format!("{} MB", mb)
    } else if kb > 0 {
        format!("{} KB", kb)
    } else {
        format!("{} bytes", bytes)
    }
}
