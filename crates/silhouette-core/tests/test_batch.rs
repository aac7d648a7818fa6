mod common;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use silhouette_core::batch::{collect_ids, processed_ids, run_batch, BatchConfig};
use silhouette_core::error::SilhouetteError;
use silhouette_core::pipeline::{NoOpReporter, Pipeline, ProgressReporter};

use common::{config_with_background, sprite_with_border, write_png};

fn batch_dirs(root: &Path) -> BatchConfig {
    let config = BatchConfig {
        source_dir: root.join("originals"),
        hidden_dir: root.join("hidden"),
        revealed_dir: root.join("revealed"),
        parallel: false,
    };
    std::fs::create_dir_all(&config.source_dir).unwrap();
    config
}

fn add_source(config: &BatchConfig, name: &str) {
    write_png(&config.source_dir, name, &sprite_with_border(24, 12, [200, 50, 50, 255]));
}

#[derive(Default)]
struct CountingReporter {
    total: AtomicUsize,
    advanced: AtomicUsize,
    finished: AtomicUsize,
}

impl ProgressReporter for CountingReporter {
    fn begin(&self, total_items: usize) {
        self.total.store(total_items, Ordering::SeqCst);
    }
    fn advance(&self, _source: &Path) {
        self.advanced.fetch_add(1, Ordering::SeqCst);
    }
    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_batch_processes_all_new_sources() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "1_Bulbasaur.png");
    add_source(&config, "4_Charmander.png");

    let report = run_batch(&pipeline, &config, &NoOpReporter).unwrap();

    assert_eq!(report.processed.len(), 2);
    assert!(report.skipped.is_empty());
    assert!(report.is_success());
    for name in ["1_Bulbasaur.png", "4_Charmander.png"] {
        assert!(config.hidden_dir.join(name).is_file());
        assert!(config.revealed_dir.join(name).is_file());
    }
}

#[test]
fn test_batch_second_run_skips_everything() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "1_Bulbasaur.png");
    add_source(&config, "7_Squirtle.png");

    run_batch(&pipeline, &config, &NoOpReporter).unwrap();
    let report = run_batch(&pipeline, &config, &NoOpReporter).unwrap();

    assert!(report.processed.is_empty());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn test_batch_requires_both_artifacts_to_skip() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "25_Pikachu.png");

    // Only the hidden half exists: the pair must be rendered again.
    std::fs::create_dir_all(&config.hidden_dir).unwrap();
    std::fs::write(config.hidden_dir.join("25_Pikachu.png"), b"stale").unwrap();

    let report = run_batch(&pipeline, &config, &NoOpReporter).unwrap();
    assert_eq!(report.processed.len(), 1);
    assert!(config.revealed_dir.join("25_Pikachu.png").is_file());
}

#[test]
fn test_batch_skips_files_without_id() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "Missingno.png");
    add_source(&config, "151_Mew.png");

    let report = run_batch(&pipeline, &config, &NoOpReporter).unwrap();
    assert_eq!(report.processed.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].ends_with("Missingno.png"));
}

#[test]
fn test_batch_collects_failures_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "2_Ivysaur.png");
    std::fs::write(config.source_dir.join("3_Venusaur.png"), b"garbage").unwrap();

    let report = run_batch(&pipeline, &config, &NoOpReporter).unwrap();
    assert_eq!(report.processed.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].0.ends_with("3_Venusaur.png"));
    assert!(!report.is_success());
    assert!(!config.hidden_dir.join("3_Venusaur.png").exists());
}

#[test]
fn test_batch_parallel_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();

    let seq = batch_dirs(&dir.path().join("seq"));
    let par = BatchConfig {
        parallel: true,
        ..batch_dirs(&dir.path().join("par"))
    };
    for name in ["1_a.png", "2_b.png", "3_c.png", "4_d.png"] {
        add_source(&seq, name);
        add_source(&par, name);
    }

    run_batch(&pipeline, &seq, &NoOpReporter).unwrap();
    let report = run_batch(&pipeline, &par, &NoOpReporter).unwrap();
    assert_eq!(report.processed.len(), 4);

    for name in ["1_a.png", "2_b.png", "3_c.png", "4_d.png"] {
        let a = std::fs::read(seq.hidden_dir.join(name)).unwrap();
        let b = std::fs::read(par.hidden_dir.join(name)).unwrap();
        assert_eq!(a, b, "{name}");
    }
}

#[test]
fn test_batch_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    add_source(&config, "1_a.png");
    add_source(&config, "no_id.png");

    let reporter = CountingReporter::default();
    run_batch(&pipeline, &config, &reporter).unwrap();

    assert_eq!(reporter.total.load(Ordering::SeqCst), 2);
    assert_eq!(reporter.advanced.load(Ordering::SeqCst), 2);
    assert_eq!(reporter.finished.load(Ordering::SeqCst), 1);
}

#[test]
fn test_batch_output_path_that_is_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::new(config_with_background(dir.path())).unwrap();
    let config = batch_dirs(dir.path());
    std::fs::write(&config.hidden_dir, b"not a dir").unwrap();

    let err = run_batch(&pipeline, &config, &NoOpReporter).unwrap_err();
    assert!(matches!(err, SilhouetteError::NotADirectory(_)));
}

#[test]
fn test_processed_ids_is_intersection() {
    let dir = tempfile::tempdir().unwrap();
    let hidden = dir.path().join("hidden");
    let revealed = dir.path().join("revealed");
    std::fs::create_dir_all(&hidden).unwrap();
    std::fs::create_dir_all(&revealed).unwrap();

    for name in ["1_a.png", "2_b.png", "3_c.png"] {
        std::fs::write(hidden.join(name), b"").unwrap();
    }
    for name in ["2_b.png", "3_c.png", "9_z.png"] {
        std::fs::write(revealed.join(name), b"").unwrap();
    }

    assert_eq!(collect_ids(&hidden).unwrap().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    let done = processed_ids(&hidden, &revealed).unwrap();
    assert_eq!(done.into_iter().collect::<Vec<_>>(), vec![2, 3]);
}
