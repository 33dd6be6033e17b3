//! Log setup. The terminal belongs to the UI, so records go to a file.

use crate::core::constants::LOG_FILENAME;
use crate::utils::persistence::save_path;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Route `log` records to `~/.bollard-striker/bollard-striker.log`.
///
/// The filter defaults to `info` and can be changed with `RUST_LOG`.
/// Returns the log file path.
pub fn init_file_logger() -> io::Result<PathBuf> {
    let path = save_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
