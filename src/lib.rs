// Library root
// -----------
// The binary (`main.rs`) only parses arguments and sets up logging; the
// whole upload pipeline lives here.
//
// Module responsibilities:
// - `resolver`: decides whether the root path is a file or a directory and
//   lists the files to send.
// - `api`: the Pixeldrain HTTP client and the `FileHost` seam it implements.
// - `progress`: byte counting between the file and the request body.
// - `links`: `<name>_links.txt` sidecar files.
// - `ui`: colored terminal output, progress bars and the final summary.
// - `run`: ties the above together, one file at a time.
pub mod api;
pub mod cli;
pub mod error;
pub mod links;
pub mod logger;
pub mod progress;
pub mod resolver;
pub mod run;
pub mod ui;
