//! Result publication following the conventional on-disk contract: one
//! `part-00000` shard plus a zero-byte `_SUCCESS` marker in a directory
//! that must not pre-exist.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const PART_FILE: &str = "part-00000";
pub const SUCCESS_FILE: &str = "_SUCCESS";

/// Writing output to a pre-existing directory is an expected, caller-visible
/// condition; everything else is a plain I/O failure.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("the folder {0} already exists")]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Create `output_dir`, write one `key\tvalue` line per pair into the part
/// file in the order received, then write the `_SUCCESS` marker.
pub fn write_output(result: &[(String, u64)], output_dir: &Path) -> Result<(), OutputError> {
    if output_dir.exists() {
        return Err(OutputError::AlreadyExists(output_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;

    let mut part = BufWriter::new(File::create(output_dir.join(PART_FILE))?);
    for (key, value) in result {
        writeln!(part, "{}\t{}", key, value)?;
    }
    part.flush()?;

    File::create(output_dir.join(SUCCESS_FILE))?;
    Ok(())
}
