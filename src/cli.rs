// Command line surface. The parsed struct doubles as the run configuration:
// it is built once in `main` and passed by reference everywhere else.

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

/// Upload files or folders to Pixeldrain
#[derive(Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct RunConfiguration {
    /// Path to the file or folder to upload
    pub path: PathBuf,

    /// Pixeldrain API key
    #[arg(long, env = "PIXELDRAIN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Save upload links to individual <filename>_links.txt files
    #[arg(long)]
    pub log: bool,
}

impl fmt::Debug for RunConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfiguration")
            .field("path", &self.path)
            .field("api_key", &"<redacted>")
            .field("log", &self.log)
            .finish()
    }
}
