//! Input staging: turns the raw corpus into a synthetic load of `n`
//! duplicates per source file.

use common::Result;
use std::{
    fs::{self, read_to_string},
    io::ErrorKind,
    path::Path,
};

/// Create `input_dir` if it does not exist, otherwise delete every file
/// directly inside it so the run starts from a clean slate.
pub fn prepare_input_dir(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        fs::create_dir_all(input_dir)?;
        return Ok(());
    }
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

/// Write `n` copies of every file in `raw_dir` into `input_dir`, named
/// `{stem}_{i}.txt` with `i` in `[0, n)`. A missing raw directory stages
/// zero files and is not an error. Returns the number of files written.
pub fn generate_file_copies(n: usize, raw_dir: &Path, input_dir: &Path) -> Result<usize> {
    let entries = match fs::read_dir(raw_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let mut staged = 0;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let text = read_to_string(&path)?;
        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        for i in 0..n {
            fs::write(input_dir.join(format!("{}_{}.txt", stem, i)), &text)?;
            staged += 1;
        }
    }
    Ok(staged)
}
