//! Main sync command

use crate::filter::IgnoreSet;
use crate::mirror::{count_files, mirror_tree, ProgressCallback};
use crate::types::{MirrorReport, SyncError};
use crate::ui::SyncProgress;
use crate::Config;
use std::rc::Rc;

/// Run a mirror pass: load patterns, count, mirror, summarize.
///
/// Pattern compilation happens first, so a malformed regex fails the run
/// before any file is touched. The counting walk completes before the
/// mirror walk begins; its total only sizes the progress display.
pub fn run(config: Config) -> Result<MirrorReport, SyncError> {
    let ignore = match &config.ignore_file {
        Some(path) => IgnoreSet::load(path)?,
        None => IgnoreSet::empty(),
    };

    if !config.quiet && !ignore.is_empty() {
        println!("{} ignore pattern(s) loaded", ignore.len());
    }

    let total = count_files(&config.source, &ignore)?;
    if !config.quiet {
        println!("Copying {} files...", total);
    }

    let progress = Rc::new(if config.quiet {
        SyncProgress::hidden(total)
    } else {
        SyncProgress::new(total)
    });

    let on_progress: ProgressCallback = {
        let progress = Rc::clone(&progress);
        Box::new(move |visited: u64, _total: u64| {
            progress.update(visited);
        })
    };

    let report = mirror_tree(
        &config.source,
        &config.destination,
        &ignore,
        total,
        Some(&on_progress),
    )?;

    progress.finish(report.files_copied, report.files_visited, report.bytes_copied);

    Ok(report)
}
