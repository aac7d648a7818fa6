//! Render every sprite in a source directory, skipping ids whose artifact
//! pair already exists.

mod ids;

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::consts::{DEFAULT_HIDDEN_DIR, DEFAULT_REVEALED_DIR, DEFAULT_SOURCE_DIR};
use crate::error::Result;
use crate::io::ensure_dir;
use crate::pipeline::{ArtifactPaths, Pipeline, ProgressReporter};

pub use ids::{collect_ids, list_files, parse_artifact_id, processed_ids};

#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub hidden_dir: PathBuf,
    pub revealed_dir: PathBuf,
    /// Render sources on the rayon pool instead of one by one.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            hidden_dir: PathBuf::from(DEFAULT_HIDDEN_DIR),
            revealed_dir: PathBuf::from(DEFAULT_REVEALED_DIR),
            parallel: false,
        }
    }
}

/// What happened to each source of a batch.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Outcome {
    Processed(PathBuf),
    Failed(PathBuf, String),
}

struct Job {
    source: PathBuf,
    outputs: ArtifactPaths,
}

fn plan_jobs(config: &BatchConfig) -> Result<(Vec<Job>, Vec<PathBuf>)> {
    let done = processed_ids(&config.hidden_dir, &config.revealed_dir)?;
    let mut jobs = Vec::new();
    let mut skipped = Vec::new();

    for source in list_files(&config.source_dir)? {
        let Some(name) = source.file_name() else {
            continue;
        };
        let id = name.to_str().and_then(parse_artifact_id);
        match id {
            None => {
                warn!(path = %source.display(), "No id prefix, skipping");
                skipped.push(source);
            }
            Some(id) if done.contains(&id) => {
                info!(id, "Already processed, skipping");
                skipped.push(source);
            }
            Some(_) => {
                let outputs =
                    ArtifactPaths::in_dirs(Path::new(name), &config.hidden_dir, &config.revealed_dir);
                jobs.push(Job { source, outputs });
            }
        }
    }

    Ok((jobs, skipped))
}

fn run_job(pipeline: &Pipeline, job: &Job, reporter: &dyn ProgressReporter) -> Outcome {
    let result = pipeline.process(&job.source, &job.outputs.hidden, &job.outputs.revealed);
    reporter.advance(&job.source);
    match result {
        Ok(()) => Outcome::Processed(job.source.clone()),
        Err(e) => {
            warn!(path = %job.source.display(), error = %e, "Failed to process");
            Outcome::Failed(job.source.clone(), e.to_string())
        }
    }
}

/// Process every not-yet-rendered source in `config.source_dir`.
///
/// A source is skipped when its id already has a file in both output
/// directories, or when its name carries no numeric id. Per-source failures
/// are collected into the report; only directory-level errors abort the run.
pub fn run_batch(
    pipeline: &Pipeline,
    config: &BatchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<BatchReport> {
    let start = Instant::now();

    ensure_dir(&config.hidden_dir)?;
    ensure_dir(&config.revealed_dir)?;

    let (jobs, skipped) = plan_jobs(config)?;
    info!(
        pending = jobs.len(),
        skipped = skipped.len(),
        parallel = config.parallel,
        "Batch planned"
    );

    reporter.begin(jobs.len() + skipped.len());
    for source in &skipped {
        reporter.advance(source);
    }

    let outcomes: Vec<Outcome> = if config.parallel && !jobs.is_empty() {
        pipeline.warm()?;
        jobs.par_iter()
            .map(|job| run_job(pipeline, job, reporter))
            .collect()
    } else {
        jobs.iter()
            .map(|job| run_job(pipeline, job, reporter))
            .collect()
    };
    reporter.finish();

    let mut report = BatchReport {
        skipped,
        ..Default::default()
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Processed(p) => report.processed.push(p),
            Outcome::Failed(p, e) => report.failed.push((p, e)),
        }
    }

    info!(
        processed = report.processed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Batch done"
    );
    Ok(report)
}
