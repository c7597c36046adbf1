use anyhow::{Context, Result};
use pathnorm_core::{Config, PathNormalizer};
use std::{env, path::Path};
use tracing::debug;

/// Load the settings file: the explicit one if given, else the nearest
/// `.pathnorm.json`/`pathnorm.json` above `search_from`, else defaults.
///
/// A relative explicit path is taken relative to `search_from`.
pub fn load_config(explicit: Option<&Path>, search_from: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => search_from.join(path),
        None => match Config::find_config_file(search_from) {
            Some(found) => found,
            None => {
                debug!("No config file found above {}", search_from.display());
                return Ok(Config::default());
            }
        },
    };

    Config::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Build the normalizer the commands run against.
///
/// Working directory precedence: `--cwd`, then the config file, then the
/// process's current directory. A relative `--cwd` is taken relative to the
/// current directory.
pub fn build_normalizer(config_path: Option<&Path>, cwd: Option<&str>) -> Result<PathNormalizer> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let current_dir_str = current_dir.to_string_lossy().into_owned();

    let config = load_config(config_path, &current_dir)?;
    let separator = config.host_separator();

    let normalizer = match cwd {
        Some(cwd) => {
            let anchored = PathNormalizer::with_separator(&current_dir_str, separator)
                .absolutize_path(cwd);
            PathNormalizer::with_separator(anchored, separator)
        }
        None => PathNormalizer::from_config(&config, &current_dir_str),
    };

    debug!("Using working directory {:?}", normalizer.working_directory());
    Ok(normalizer)
}
