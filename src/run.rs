use log::debug;

use crate::api::{FileHost, UploadResult, UploadTarget};
use crate::cli::RunConfiguration;
use crate::error::{Result, UploadError};
use crate::links;
use crate::resolver::{self, QueuedFile};
use crate::ui;

/// Resolve the root path, upload every file in turn and print the summary.
///
/// Only an unusable root path is an error here; per-file failures are
/// reported and left out of the returned results.
pub fn run<H: FileHost>(host: &H, config: &RunConfiguration) -> Result<Vec<UploadResult>> {
    let queue = resolver::resolve(&config.path)?.queue();

    let mut results = Vec::new();
    for queued in &queue {
        if let Some(result) = process_file(host, queued, config.log) {
            results.push(result);
        }
    }

    ui::print_summary(&results);
    Ok(results)
}

/// Upload one file, turning any failure into a printed diagnostic.
pub fn process_file<H: FileHost>(host: &H, queued: &QueuedFile, log_links: bool) -> Option<UploadResult> {
    match upload_file(host, queued, log_links) {
        Ok(result) => Some(result),
        Err(err) => {
            debug!("{} skipped: {}", queued.path.display(), err);
            ui::error(&err.to_string());
            None
        }
    }
}

fn upload_file<H: FileHost>(
    host: &H,
    queued: &QueuedFile,
    log_links: bool,
) -> std::result::Result<UploadResult, UploadError> {
    let target = UploadTarget::inspect(&queued.path)?;
    if let Some(position) = queued.position {
        ui::announce(position, &target.file_name);
    }

    let bar = ui::upload_bar(target.size);
    let remote = match host.upload(&target, Box::new(bar.clone())) {
        Ok(remote) => {
            bar.finish();
            remote
        }
        Err(err) => {
            bar.abandon();
            return Err(err);
        }
    };
    debug!("{} stored as {}", target.file_name, remote.id);
    ui::link(&remote.link);

    if log_links {
        // The file is already on the server; a lost sidecar is only reported.
        if let Err(err) = links::write_sidecar(&target.path, &remote.link) {
            debug!("{err}");
            ui::error(&err.to_string());
        }
    }

    Ok(UploadResult {
        link: remote.link,
        filename: target.file_name,
    })
}
