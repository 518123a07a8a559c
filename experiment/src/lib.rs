use common::wc::WordCount;
use common::Result;
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

pub mod corpus;
pub mod hadoop;
pub mod output;

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init()
}

/// The directory layout one experiment runs over. `raw` holds the externally
/// provided source texts; `input` and `output` are recreated on every run.
#[derive(Debug, Clone)]
pub struct Dirs {
    pub raw: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Dirs {
    /// The conventional `files/{raw,input,output}` layout under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let files = root.as_ref().join("files");
        Self {
            raw: files.join("raw"),
            input: files.join("input"),
            output: files.join("output"),
        }
    }
}

/// Stage `n` copies of the raw corpus, run the word-count pipeline over it
/// and return the wall-clock time of the pipeline alone (staging excluded).
pub fn run_experiment(n: usize, dirs: &Dirs) -> Result<Duration> {
    if dirs.output.exists() {
        fs::remove_dir_all(&dirs.output)?;
    }

    corpus::prepare_input_dir(&dirs.input)?;
    let staged = corpus::generate_file_copies(n, &dirs.raw, &dirs.input)?;
    info!("staged {} input files (factor {})", staged, n);

    let start = Instant::now();
    hadoop::run(&WordCount, &dirs.input, &dirs.output)?;
    Ok(start.elapsed())
}
