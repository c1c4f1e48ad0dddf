//! Rank command implementation for the hirematch CLI.

use std::io::{BufReader, Write};
use std::num::NonZeroUsize;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use hirematch_core::{CandidateRecord, CandidateScorer, ScoreResult, ScoringConfig};
use hirematch_fuzzy::{FuzzySystem, FuzzyVariable, SystemDefinition};
use hirematch_scorer::{
    AdditiveScorer, BatchConfig, BatchOutcome, BatchScorer, CandidateFailure, FeatureExtractor,
    FuzzyCandidateScorer, SkillMatchMode, TierPolicy,
};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::candidates::{load_candidates, open_utf8_file};
use crate::{
    ARG_FUZZY_SYSTEM, ARG_RANK_CANDIDATES, ARG_RANK_EXPERIENCE_POLICY,
    ARG_RANK_EXPERIENCE_THRESHOLD, ARG_RANK_MIN_CGPA, ARG_RANK_MIN_EXPERIENCE, ARG_RANK_MODE,
    ARG_RANK_REQUIRED_SKILLS, ARG_RANK_SKILL_MODE, ARG_RANK_TIMEOUT_MS, ARG_RANK_WORKERS, CliError,
    ENV_RANK_CANDIDATES, ENV_RANK_REQUIRED_SKILLS,
};

/// Input names a custom fuzzy system must declare, in order.
const FEATURE_INPUTS: [&str; 3] = ["skills", "cgpa", "experience"];

/// Scoring engine selected with `--mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ScoringMode {
    /// Fuzzy inference over tiered features.
    #[default]
    Fuzzy,
    /// Capped sum of the legacy point tables.
    Additive,
}

/// Experience tiering selected with `--experience-policy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ExperiencePolicy {
    /// `0 → 7`, `12 → 14`, otherwise `21`.
    #[default]
    Buckets,
    /// Above `--experience-threshold` months `→ 21`, otherwise `7`.
    Threshold,
}

/// Skill matching selected with `--skill-mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SkillMode {
    /// Count skills the recruiter asked for.
    #[default]
    Required,
    /// Count skills from the built-in canonical list.
    Canonical,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate in a CSV upload against the \
                 recruiter's required skills and print them ranked best \
                 first as JSON. Candidates that cannot be scored are listed \
                 under `failures` instead of aborting the run.",
    about = "Rank candidates from a CSV upload"
)]
#[ortho_config(prefix = "HIREMATCH")]
pub(crate) struct RankArgs {
    /// Path to the candidate CSV file.
    #[arg(value_name = "csv")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Comma-separated skills the role requires.
    #[arg(long = ARG_RANK_REQUIRED_SKILLS, value_name = "skills")]
    #[serde(default)]
    pub(crate) required_skills: Option<String>,
    /// Candidates below this CGPA score zero.
    #[arg(long = ARG_RANK_MIN_CGPA, value_name = "cgpa")]
    #[serde(default)]
    pub(crate) min_cgpa: Option<f64>,
    /// Candidates with fewer months of experience score zero.
    #[arg(long = ARG_RANK_MIN_EXPERIENCE, value_name = "months")]
    #[serde(default)]
    pub(crate) min_experience: Option<u32>,
    /// Experience tiering for fuzzy scoring.
    #[arg(long = ARG_RANK_EXPERIENCE_POLICY, value_name = "policy", value_enum)]
    #[serde(default)]
    pub(crate) experience_policy: Option<ExperiencePolicy>,
    /// Split point in months for the `threshold` experience policy.
    #[arg(long = ARG_RANK_EXPERIENCE_THRESHOLD, value_name = "months")]
    #[serde(default)]
    pub(crate) experience_threshold: Option<u32>,
    /// Which skill list candidate skills are matched against.
    #[arg(long = ARG_RANK_SKILL_MODE, value_name = "mode", value_enum)]
    #[serde(default)]
    pub(crate) skill_mode: Option<SkillMode>,
    /// Scoring engine.
    #[arg(long = ARG_RANK_MODE, value_name = "mode", value_enum)]
    #[serde(default)]
    pub(crate) mode: Option<ScoringMode>,
    /// JSON fuzzy system definition replacing the built-in rule base.
    #[arg(long = ARG_FUZZY_SYSTEM, value_name = "path")]
    #[serde(default)]
    pub(crate) fuzzy_system: Option<Utf8PathBuf>,
    /// Abandon scoring after this many milliseconds.
    #[arg(long = ARG_RANK_TIMEOUT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) timeout_ms: Option<u64>,
    /// Number of scoring threads; defaults to the available parallelism.
    #[arg(long = ARG_RANK_WORKERS, value_name = "count")]
    #[serde(default)]
    pub(crate) workers: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the candidate CSV.
    pub(crate) candidates: Utf8PathBuf,
    /// Required skills and thresholds.
    pub(crate) scoring: ScoringConfig,
    /// Scoring engine.
    pub(crate) mode: ScoringMode,
    /// Skill matching for the extractor.
    pub(crate) skill_mode: SkillMatchMode,
    /// Experience tiering for fuzzy scoring.
    pub(crate) experience_policy: TierPolicy,
    /// Custom fuzzy system, if any.
    pub(crate) fuzzy_system: Option<Utf8PathBuf>,
    /// Worker pool settings.
    pub(crate) batch: BatchConfig,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_RANK_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;
        let required_skills = args.required_skills.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUIRED_SKILLS,
            env: ENV_RANK_REQUIRED_SKILLS,
        })?;

        let mut scoring = ScoringConfig::new(required_skills.split(','))?;
        if let Some(min_cgpa) = args.min_cgpa {
            scoring = scoring.with_min_cgpa(min_cgpa)?;
        }
        if let Some(months) = args.min_experience {
            scoring = scoring.with_min_experience_months(months);
        }

        let mode = args.mode.unwrap_or_default();
        if mode == ScoringMode::Additive {
            reject_for_additive(args.experience_policy.is_some(), ARG_RANK_EXPERIENCE_POLICY)?;
            reject_for_additive(args.fuzzy_system.is_some(), ARG_FUZZY_SYSTEM)?;
        }

        let experience_policy = match args.experience_policy.unwrap_or_default() {
            ExperiencePolicy::Buckets if args.experience_threshold.is_some() => {
                return Err(CliError::InvalidArgument {
                    field: ARG_RANK_EXPERIENCE_THRESHOLD,
                    reason: "only applies with --experience-policy threshold".to_owned(),
                });
            }
            ExperiencePolicy::Buckets => TierPolicy::experience_buckets(),
            ExperiencePolicy::Threshold => {
                TierPolicy::experience_threshold(args.experience_threshold.unwrap_or(0))
            }
        };

        let skill_mode = match args.skill_mode.unwrap_or_default() {
            SkillMode::Required => SkillMatchMode::Required,
            SkillMode::Canonical => SkillMatchMode::reference_canonical(),
        };

        let mut batch = BatchConfig::default();
        if let Some(count) = args.workers {
            let workers = NonZeroUsize::new(count).ok_or_else(|| CliError::InvalidArgument {
                field: ARG_RANK_WORKERS,
                reason: "must be at least 1".to_owned(),
            })?;
            batch = batch.with_workers(workers);
        }
        if let Some(millis) = args.timeout_ms {
            batch = batch.with_timeout(Duration::from_millis(millis));
        }

        Ok(Self {
            candidates,
            scoring,
            mode,
            skill_mode,
            experience_policy,
            fuzzy_system: args.fuzzy_system,
            batch,
        })
    }
}

fn reject_for_additive(present: bool, field: &'static str) -> Result<(), CliError> {
    if present {
        Err(CliError::InvalidArgument {
            field,
            reason: "only applies with --mode fuzzy".to_owned(),
        })
    } else {
        Ok(())
    }
}

/// A candidate left out of the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FailureReport {
    /// One-based data row in the CSV.
    pub(crate) row: usize,
    /// Candidate name as uploaded.
    pub(crate) candidate: String,
    /// Why the candidate was not scored.
    pub(crate) error: String,
}

impl From<CandidateFailure> for FailureReport {
    fn from(failure: CandidateFailure) -> Self {
        Self {
            row: failure.index.saturating_add(1),
            candidate: failure.candidate,
            error: failure.error.to_string(),
        }
    }
}

/// JSON document printed by `rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RankReport {
    /// Scored candidates, best first.
    pub(crate) ranked: Vec<ScoreResult>,
    /// Candidates that could not be scored, in upload order.
    pub(crate) failures: Vec<FailureReport>,
}

impl From<BatchOutcome> for RankReport {
    fn from(outcome: BatchOutcome) -> Self {
        let (ranked, failures) = outcome.into_ranked();
        Self {
            ranked,
            failures: failures.into_iter().map(FailureReport::from).collect(),
        }
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_rank(&config)?;
    crate::write_json(writer, &report)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<RankReport, CliError> {
    let records = load_candidates(&config.candidates, ARG_RANK_CANDIDATES)?;
    let outcome = match config.mode {
        ScoringMode::Fuzzy => {
            let extractor = FeatureExtractor::default()
                .with_skill_mode(config.skill_mode.clone())
                .with_experience_policy(config.experience_policy.clone());
            let scorer = fuzzy_scorer(config.fuzzy_system.as_deref())?.with_extractor(extractor);
            score_batch(scorer, config, &records)?
        }
        ScoringMode::Additive => {
            let extractor = FeatureExtractor::default()
                .with_skill_mode(config.skill_mode.clone())
                .with_cgpa_policy(TierPolicy::legacy_cgpa())
                .with_experience_policy(TierPolicy::legacy_experience());
            let scorer = AdditiveScorer::legacy().with_extractor(extractor);
            score_batch(scorer, config, &records)?
        }
    };
    info!(
        "ranked {} candidates, {} failed",
        outcome.results.len(),
        outcome.failures.len()
    );
    Ok(RankReport::from(outcome))
}

fn score_batch<S: CandidateScorer>(
    scorer: S,
    config: &RankConfig,
    records: &[CandidateRecord],
) -> Result<BatchOutcome, CliError> {
    BatchScorer::new(scorer)
        .with_config(config.batch)
        .score_candidates(records, &config.scoring)
        .map_err(CliError::from)
}

fn fuzzy_scorer(path: Option<&Utf8Path>) -> Result<FuzzyCandidateScorer, CliError> {
    let Some(system_path) = path else {
        return FuzzyCandidateScorer::reference().map_err(CliError::ReferenceSystem);
    };
    let system = load_fuzzy_system(system_path)?;
    FuzzyCandidateScorer::new(system).map_err(|source| CliError::IncompatibleFuzzySystem {
        path: system_path.to_path_buf(),
        source,
    })
}

/// Load and validate a JSON-encoded [`SystemDefinition`] from disk.
pub(crate) fn load_fuzzy_system(path: &Utf8Path) -> Result<FuzzySystem, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_FUZZY_SYSTEM,
        path: path.to_path_buf(),
        source,
    })?;
    let definition: SystemDefinition =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseFuzzySystem {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let system =
        FuzzySystem::try_from(definition).map_err(|source| CliError::InvalidFuzzySystem {
            path: path.to_path_buf(),
            source,
        })?;
    if system
        .inputs()
        .iter()
        .map(FuzzyVariable::name)
        .eq(FEATURE_INPUTS)
    {
        return Ok(system);
    }
    Err(CliError::FuzzySystemInputs {
        path: path.to_path_buf(),
        found: system
            .inputs()
            .iter()
            .map(|input| input.name().to_owned())
            .collect(),
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
