// UI layer: everything the operator sees on the terminal. Colors are
// cosmetic: blue for names, yellow for labels, green for links, red for
// errors.

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::UploadResult;
use crate::resolver::Position;

const BAR_TEMPLATE: &str =
    "{msg}: {percent:>3}%|{bar:40}| {bytes}/{total_bytes} [{elapsed_precise}<{eta_precise}, {bytes_per_sec}]";

/// `-> [2/5] holiday.mp4`, printed before a file in directory mode.
pub fn announce(position: Position, file_name: &str) {
    println!(
        "{}",
        format!("-> [{}/{}] {}", position.index, position.total, file_name).blue()
    );
}

/// Byte progress bar for one upload of `size` bytes.
pub fn upload_bar(size: u64) -> ProgressBar {
    let bar = ProgressBar::new(size);
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message("Uploading".yellow().to_string());
    bar
}

pub fn link(link: &str) {
    println!("{}\n", link.green());
}

pub fn error(message: &str) {
    println!("{}", message.red());
}

/// Header plus one `link filename` line per result, in upload order. Empty
/// when nothing was uploaded.
pub fn summary_lines(results: &[UploadResult]) -> Vec<String> {
    if results.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["--- Uploaded files ---".yellow().to_string()];
    lines.extend(results.iter().map(|result| {
        format!("{} {}", result.link.as_str().green(), result.filename.as_str().blue())
    }));
    lines
}

pub fn print_summary(results: &[UploadResult]) {
    for line in summary_lines(results) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, filename: &str) -> UploadResult {
        UploadResult {
            link: format!("https://pixeldrain.com/u/{id}"),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn no_results_means_no_summary() {
        assert!(summary_lines(&[]).is_empty());
    }

    #[test]
    fn summary_lists_link_then_name_in_order() {
        let lines = summary_lines(&[result("aaa", "a.txt"), result("bbb", "b.txt")]);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("--- Uploaded files ---"));

        for (line, (link, name)) in lines[1..].iter().zip([
            ("https://pixeldrain.com/u/aaa", "a.txt"),
            ("https://pixeldrain.com/u/bbb", "b.txt"),
        ]) {
            let link_at = line.find(link).unwrap();
            let name_at = line.rfind(name).unwrap();
            assert!(link_at < name_at, "{line}");
        }
    }
}
