use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// JSON body accepted by the gbans `POST /api/log` endpoint.
#[derive(Debug, Serialize)]
pub struct UploadRequest {
    pub server_name: String,
    pub map_name: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl UploadRequest {
    pub fn new(server_name: &str, map_name: &str, content: &[u8], kind: &str) -> Self {
        Self {
            server_name: server_name.to_string(),
            map_name: map_name.to_string(),
            body: STANDARD.encode(content),
            kind: kind.to_string(),
        }
    }

    /// Size of the encoded body as sent on the wire.
    pub fn payload_size(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_standard_base64() {
        let request = UploadRequest::new("test-1", "pl_badwater", b"hello\n", "gbans_log");
        assert_eq!(request.body, "aGVsbG8K");

        // padding is kept and long input is not wrapped
        let line = "L 10/19/2026 - 12:00:00: \"player<2><[U:1:1]><Red>\" say \"gg\"\n".repeat(8);
        let request = UploadRequest::new("test-1", "pl_badwater", line.as_bytes(), "gbans_log");
        assert!(!request.body.contains('\n'));
        assert_eq!(STANDARD.decode(&request.body).unwrap(), line.as_bytes());
    }

    #[test]
    fn test_empty_content() {
        let request = UploadRequest::new("test-1", "pl_badwater", b"", "gbans_log");
        assert_eq!(request.body, "");
        assert_eq!(request.payload_size(), 0);
    }

    #[test]
    fn test_payload_size_is_encoded_length() {
        let request = UploadRequest::new("test-1", "pl_badwater", b"hello\n", "gbans_log");
        assert_eq!(request.payload_size(), 8);

        let content = vec![b'a'; 3 * 1024];
        let request = UploadRequest::new("test-1", "pl_badwater", &content, "gbans_log");
        assert_eq!(request.payload_size(), 4 * 1024);
    }

    #[test]
    fn test_serialized_keys() {
        let request = UploadRequest::new("srv", "cp_process_final", "ünïcode".as_bytes(), "gbans_log");
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["body", "map_name", "server_name", "type"]);

        assert_eq!(object["server_name"], "srv");
        assert_eq!(object["map_name"], "cp_process_final");
        assert_eq!(object["type"], "gbans_log");
        assert_eq!(
            STANDARD.decode(object["body"].as_str().unwrap()).unwrap(),
            "ünïcode".as_bytes()
        );
    }
}
