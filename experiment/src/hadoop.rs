//! The simulated job: emit lines, map, shuffle/sort, reduce, write. Every
//! stage is a synchronous pass over an in-memory sequence, mimicking the
//! on-disk contract of a real job without any of its machinery.

use crate::output::write_output;
use common::{App, Result};
use itertools::Itertools;
use log::info;
use std::{
    fs::{self, read_to_string},
    path::Path,
};

/// Read every file in `input_dir` and return `(file path, line)` pairs,
/// lines keeping their trailing newline. Line order follows file order;
/// file order follows directory enumeration and is not guaranteed stable
/// across filesystems.
pub fn emit_input_lines(input_dir: &Path) -> Result<Vec<(String, String)>> {
    let mut sequence = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let file = path.to_string_lossy().into_owned();
        let content = read_to_string(&path)?;
        for line in content.split_inclusive('\n') {
            sequence.push((file.clone(), line.to_owned()));
        }
    }
    Ok(sequence)
}

/// Sort intermediate pairs by key, then value. Stable, so pairs that
/// compare equal keep their emission order. Equal keys end up contiguous,
/// which is all the reduce walk relies on.
pub fn shuffle_and_sort(mut pairs: Vec<(String, u64)>) -> Vec<(String, u64)> {
    pairs.sort();
    pairs
}

/// Collapse each maximal run of equal keys into one `(key, total)` pair.
/// The input must already be sorted; unsorted input yields fragmented
/// aggregates.
pub fn reduce(app: &dyn App, pairs: Vec<(String, u64)>) -> Vec<(String, u64)> {
    let mut result = Vec::new();
    for (key, group) in &pairs.into_iter().group_by(|kv| kv.0.clone()) {
        let total = app.reduce(&key, group.map(|kv| kv.1).collect_vec());
        result.push((key, total));
    }
    result
}

/// Run the full pipeline over `input_dir` and write the results (plus the
/// `_SUCCESS` marker) into a freshly created `output_dir`.
pub fn run(app: &dyn App, input_dir: &Path, output_dir: &Path) -> Result<()> {
    let sequence = emit_input_lines(input_dir)?;

    let intermediate = sequence
        .iter()
        .flat_map(|(file, line)| app.map(file, line))
        .collect_vec();
    info!("mapped {} lines into {} pairs", sequence.len(), intermediate.len());

    let sorted = shuffle_and_sort(intermediate);
    let result = reduce(app, sorted);
    info!("reduced to {} distinct words", result.len());

    write_output(&result, output_dir)?;
    Ok(())
}
