use std::path::PathBuf;

use clap::Parser;

/// Uploads a srcds log file to a gbans server.
#[derive(Parser, Debug)]
#[command(name = "srcds-logup")]
#[command(about = "Upload a game server log file to gbans")]
pub struct Args {
    /// Log file to upload.
    #[arg(short, long, env = "LOGUP_PATH", default_value = "console.log")]
    pub path: PathBuf,

    /// Log ingestion endpoint.
    #[arg(
        short,
        long,
        env = "LOGUP_URL",
        default_value = "http://localhost:6006/api/log"
    )]
    pub url: String,

    /// Server token sent as the Authorization header.
    #[arg(
        short,
        long,
        env = "LOGUP_TOKEN",
        default_value = "changeme",
        hide_env_values = true
    )]
    pub token: String,

    #[arg(short, long, env = "LOGUP_SERVER_NAME", default_value = "test-1")]
    pub server_name: String,

    #[arg(short, long, env = "LOGUP_MAP_NAME", default_value = "pl_badwater")]
    pub map_name: String,

    /// Payload type understood by the receiving server.
    #[arg(long, env = "LOGUP_LOG_TYPE", default_value = "gbans_log")]
    pub log_type: String,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub path: PathBuf,
    pub url: String,
    pub token: String,
    pub server_name: String,
    pub map_name: String,
    pub log_type: String,
}

impl From<Args> for UploadConfig {
    fn from(args: Args) -> Self {
        Self {
            path: args.path,
            url: args.url,
            token: args.token,
            server_name: args.server_name,
            map_name: args.map_name,
            log_type: args.log_type,
        }
    }
}
