use common::wc::WordCount;
use experiment::output::{OutputError, PART_FILE, SUCCESS_FILE};
use experiment::{hadoop, run_experiment, Dirs};
use std::fs::{self, read_to_string};
use std::path::Path;
use tempfile::tempdir;

fn setup(raw_files: &[(&str, &str)]) -> (tempfile::TempDir, Dirs) {
    let root = tempdir().unwrap();
    let dirs = Dirs::under(root.path());
    fs::create_dir_all(&dirs.raw).unwrap();
    for (name, content) in raw_files {
        fs::write(dirs.raw.join(name), content).unwrap();
    }
    (root, dirs)
}

fn read_counts(output: &Path) -> Vec<(String, u64)> {
    read_to_string(output.join(PART_FILE))
        .unwrap()
        .lines()
        .map(|line| {
            let (word, count) = line.split_once('\t').unwrap();
            (word.to_owned(), count.parse().unwrap())
        })
        .collect()
}

#[test]
fn round_trip_word_count() {
    let (_root, dirs) = setup(&[("greeting.txt", "Hello hello, world!")]);
    run_experiment(1, &dirs).unwrap();

    assert_eq!(
        read_to_string(dirs.output.join(PART_FILE)).unwrap(),
        "hello\t2\nworld\t1\n"
    );
    assert_eq!(fs::metadata(dirs.output.join(SUCCESS_FILE)).unwrap().len(), 0);
}

#[test]
fn counts_scale_linearly_with_factor() {
    let raw = [("poem.txt", "the quick brown fox\nthe lazy dog\n")];

    let (_root1, dirs1) = setup(&raw);
    run_experiment(1, &dirs1).unwrap();
    let baseline = read_counts(&dirs1.output);

    let (_root3, dirs3) = setup(&raw);
    run_experiment(3, &dirs3).unwrap();
    let tripled = read_counts(&dirs3.output);

    assert_eq!(
        tripled,
        baseline
            .into_iter()
            .map(|(word, count)| (word, count * 3))
            .collect::<Vec<_>>()
    );
}

#[test]
fn empty_raw_dir_yields_empty_output() {
    let (_root, dirs) = setup(&[]);
    run_experiment(4, &dirs).unwrap();

    assert_eq!(read_to_string(dirs.output.join(PART_FILE)).unwrap(), "");
    assert!(dirs.output.join(SUCCESS_FILE).exists());
}

#[test]
fn missing_raw_dir_yields_empty_output() {
    let root = tempdir().unwrap();
    let dirs = Dirs::under(root.path());
    run_experiment(2, &dirs).unwrap();

    assert_eq!(read_to_string(dirs.output.join(PART_FILE)).unwrap(), "");
    assert!(dirs.output.join(SUCCESS_FILE).exists());
}

#[test]
fn rerun_replaces_previous_output() {
    let (_root, dirs) = setup(&[("a.txt", "uno dos dos")]);
    run_experiment(1, &dirs).unwrap();
    run_experiment(2, &dirs).unwrap();

    assert_eq!(
        read_counts(&dirs.output),
        vec![("dos".to_owned(), 4), ("uno".to_owned(), 2)]
    );
}

#[test]
fn pipeline_refuses_existing_output_dir() {
    let (_root, dirs) = setup(&[("a.txt", "palabra")]);
    fs::create_dir_all(&dirs.output).unwrap();
    fs::write(dirs.output.join("keep"), "untouched").unwrap();
    fs::create_dir_all(&dirs.input).unwrap();
    fs::write(dirs.input.join("a_0.txt"), "palabra").unwrap();

    let err = hadoop::run(&WordCount, &dirs.input, &dirs.output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OutputError>(),
        Some(OutputError::AlreadyExists(_))
    ));
    assert_eq!(read_to_string(dirs.output.join("keep")).unwrap(), "untouched");
    assert!(!dirs.output.join(PART_FILE).exists());
}

#[test]
fn token_totals_are_conserved() {
    let (_root, dirs) = setup(&[
        ("a.txt", "One two; two!\nthree three three\n"),
        ("b.txt", "four? four four FOUR"),
    ]);
    run_experiment(1, &dirs).unwrap();

    let counts = read_counts(&dirs.output);
    let total: u64 = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 10);
    assert_eq!(
        counts,
        vec![
            ("four".to_owned(), 4),
            ("one".to_owned(), 1),
            ("three".to_owned(), 3),
            ("two".to_owned(), 2),
        ]
    );
}
