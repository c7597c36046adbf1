use pathnorm_core::PathNormalizer;
use tracing::debug;

use crate::display::PathReport;

pub fn normalize_command(
    normalizer: &PathNormalizer,
    paths: &[String],
    separator: Option<&str>,
) -> Vec<PathReport> {
    let separator = separator.unwrap_or(normalizer.separator());
    debug!("Normalizing {} path(s) with separator {:?}", paths.len(), separator);

    paths
        .iter()
        .map(|path| PathReport::new(path, normalizer.normalize_path(path, separator)))
        .collect()
}
