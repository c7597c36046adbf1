use pathnorm_core::{PathNormalizer, PathResolver};
use tracing::debug;

use crate::display::PathReport;

pub fn absolutize_command(
    normalizer: &PathNormalizer,
    paths: &[String],
    normalize: bool,
) -> Vec<PathReport> {
    debug!(
        "Absolutizing {} path(s) against {:?}",
        paths.len(),
        normalizer.working_directory()
    );

    paths
        .iter()
        .map(|path| {
            let output = if normalize {
                normalizer.resolve(path)
            } else {
                normalizer.absolutize_path(path)
            };
            PathReport::new(path, output)
        })
        .collect()
}
