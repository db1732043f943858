//! Ladder solving command
//!
//! Drives the bounded attempt loop: ask the generator for candidates,
//! validate them, search for a ladder, and check the result. Failed attempts
//! feed their words into the exclusion hint for the next request.

use crate::core::{Chain, Slot};
use crate::error::LadderError;
use crate::generator::{CandidateGenerator, GenerationRequest, GeneratorError, RawCandidate};
use crate::solver::{
    CandidateValidator, DEFAULT_MIN_CANDIDATES, FallbackSolver, LadderSolver, SearchStats,
    SlotAssignmentSearch, SolverType,
};
use std::collections::BTreeSet;

/// Default attempt limit for the repair pipeline
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Longest accepted clue, in characters
pub const MAX_CLUE_CHARS: usize = 140;

/// How many generation rounds a solve may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pipeline {
    /// Re-request candidates after each failed attempt (default)
    #[default]
    Repair,
    /// One generation round
    ///
    /// Only the round count changes: `solve_ladder` searches with whatever
    /// solver it is handed. Use [`Pipeline::default_solver`] to get the
    /// fallback solver, which also tries reordering the candidates.
    Exhaustive,
}

impl Pipeline {
    /// Solver to use when the caller does not pick one
    #[must_use]
    pub const fn default_solver(self, node_budget: usize) -> SolverType {
        match self {
            Self::Repair => SolverType::SlotOrder(SlotAssignmentSearch::new(node_budget)),
            Self::Exhaustive => SolverType::Fallback(FallbackSolver::new(node_budget)),
        }
    }
}

/// Configuration for solving a ladder
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub word_length: usize,
    pub clues: Vec<String>,
    pub max_attempts: usize,
    pub min_candidates: usize,
    pub pipeline: Pipeline,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(word_length: usize, clues: Vec<String>) -> Self {
        Self {
            word_length,
            clues,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            pipeline: Pipeline::Repair,
        }
    }

    /// Attempts actually available under the selected pipeline
    #[must_use]
    pub fn attempt_limit(&self) -> usize {
        match self.pipeline {
            Pipeline::Repair => self.max_attempts.max(1),
            Pipeline::Exhaustive => 1,
        }
    }

    /// Reject requests no attempt could satisfy
    ///
    /// # Errors
    /// Returns `LadderError::MalformedInput` describing the first problem.
    pub fn check(&self) -> Result<(), LadderError> {
        if self.word_length == 0 {
            return Err(LadderError::MalformedInput("word length must be positive".into()));
        }
        if self.clues.is_empty() {
            return Err(LadderError::MalformedInput("at least one clue is required".into()));
        }
        for (index, clue) in self.clues.iter().enumerate() {
            if clue.trim().is_empty() {
                return Err(LadderError::MalformedInput(format!("clue {index} is empty")));
            }
            let chars = clue.chars().count();
            if chars > MAX_CLUE_CHARS {
                return Err(LadderError::MalformedInput(format!(
                    "clue {index} is {chars} characters, limit is {MAX_CLUE_CHARS}"
                )));
            }
        }
        Ok(())
    }
}

/// What happened in one attempt
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    Success(Chain),
    Failure { code: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Attempt {
    pub number: usize,
    pub outcome: AttemptOutcome,
    /// Slots that came back with fewer than the minimum viable candidates
    pub sparse_slots: Vec<usize>,
}

/// Why a solve gave up: the last chain produced plus every attempt's record
#[derive(Debug, Clone)]
pub struct Exhaustion {
    /// Possibly invalid; never to be treated as a solution
    pub last_chain: Chain,
    pub attempts: Vec<Attempt>,
    /// Every word rejected along the way, sorted
    pub rejected_words: Vec<String>,
}

/// Result of a successful solve
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub chain: Chain,
    pub attempts: Vec<Attempt>,
    pub stats: SearchStats,
}

/// Attempt-loop state
enum SolveState {
    Attempting(usize),
    Succeeded(Chain, SearchStats),
    Exhausted,
}

/// Outcome of a single attempt, before it is recorded
struct AttemptRun {
    result: Result<(Chain, SearchStats), LadderError>,
    /// Best chain this attempt produced, valid or not
    chain: Chain,
    seen_words: Vec<String>,
    sparse_slots: Vec<usize>,
}

/// Solve a word ladder, retrying with fresh candidates until an attempt
/// succeeds or the attempt limit is reached
///
/// # Errors
///
/// - `MalformedInput` if the configuration is unusable (never retried)
/// - `UpstreamUnavailable` if every attempt failed to reach the generator
/// - `AttemptsExhausted` if every attempt ran out of ladders; carries the
///   last chain produced and per-attempt diagnostics
///
/// # Examples
/// ```
/// use word_ladder::commands::{SolveConfig, solve_ladder};
/// use word_ladder::generator::FixtureGenerator;
/// use word_ladder::solver::SolverType;
///
/// let mut generator = FixtureGenerator::from_json(r#"{
///     "Become dry through extreme heat": [{"word": "PARCH", "justification": "dry out"}],
///     "Covered entrance to a house": [{"word": "PORCH", "justification": "entrance"}]
/// }"#).unwrap();
/// let config = SolveConfig::new(5, vec![
///     "Become dry through extreme heat".to_string(),
///     "Covered entrance to a house".to_string(),
/// ]);
///
/// let result = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap();
/// let ladder: Vec<_> = result.chain.words().collect();
/// assert_eq!(ladder, vec!["PARCH", "PORCH"]);
/// ```
pub fn solve_ladder<G, L>(
    config: &SolveConfig,
    generator: &mut G,
    solver: &L,
) -> Result<SolveResult, LadderError>
where
    G: CandidateGenerator,
    L: LadderSolver,
{
    config.check()?;

    let limit = config.attempt_limit();
    let validator =
        CandidateValidator::new(config.word_length).with_min_candidates(config.min_candidates);
    let mut rejected: BTreeSet<String> = BTreeSet::new();
    let mut attempts: Vec<Attempt> = Vec::with_capacity(limit);
    let mut last_chain = Chain::default();
    let mut upstream = UpstreamFailures::default();

    let mut state = SolveState::Attempting(1);
    loop {
        state = match state {
            SolveState::Attempting(number) => {
                log::info!(
                    target: "orchestrator",
                    "attempt {number}/{limit}: {} clues, {} excluded words, solver {}",
                    config.clues.len(),
                    rejected.len(),
                    solver.name()
                );

                let run = run_attempt(config, &validator, generator, solver, &rejected);
                if !run.chain.is_empty() {
                    last_chain = run.chain;
                }

                match run.result {
                    Ok((chain, stats)) => {
                        log::info!(target: "orchestrator", "attempt {number} succeeded");
                        attempts.push(Attempt {
                            number,
                            outcome: AttemptOutcome::Success(chain.clone()),
                            sparse_slots: run.sparse_slots,
                        });
                        SolveState::Succeeded(chain, stats)
                    }
                    Err(err) => {
                        log::warn!(target: "orchestrator", "attempt {number} failed: {err}");
                        if let LadderError::UpstreamUnavailable { reason, .. } = &err {
                            upstream.count += 1;
                            upstream.last_reason = Some(reason.clone());
                        }
                        rejected.extend(run.seen_words);
                        attempts.push(Attempt {
                            number,
                            outcome: AttemptOutcome::Failure {
                                code: err.code(),
                                reason: err.to_string(),
                            },
                            sparse_slots: run.sparse_slots,
                        });
                        if number < limit {
                            SolveState::Attempting(number + 1)
                        } else {
                            SolveState::Exhausted
                        }
                    }
                }
            }
            SolveState::Succeeded(chain, stats) => {
                return Ok(SolveResult {
                    chain,
                    attempts,
                    stats,
                });
            }
            SolveState::Exhausted => {
                return Err(exhausted(attempts, last_chain, rejected, &upstream));
            }
        };
    }
}

/// Turn a run of failed attempts into the caller-facing error
fn exhausted(
    attempts: Vec<Attempt>,
    last_chain: Chain,
    rejected: BTreeSet<String>,
    upstream: &UpstreamFailures,
) -> LadderError {
    if upstream.count == attempts.len()
        && let Some(reason) = &upstream.last_reason
    {
        log::warn!(target: "orchestrator", "generator unreachable on every attempt");
        return LadderError::UpstreamUnavailable {
            attempts: attempts.len(),
            reason: reason.clone(),
        };
    }

    log::warn!(
        target: "orchestrator",
        "giving up after {} attempts, {} words rejected",
        attempts.len(),
        rejected.len()
    );
    LadderError::AttemptsExhausted(Box::new(Exhaustion {
        last_chain,
        attempts,
        rejected_words: rejected.into_iter().collect(),
    }))
}

/// Attempts that never got a response from the generator
#[derive(Default)]
struct UpstreamFailures {
    count: usize,
    last_reason: Option<String>,
}

fn run_attempt<G, L>(
    config: &SolveConfig,
    validator: &CandidateValidator,
    generator: &mut G,
    solver: &L,
    rejected: &BTreeSet<String>,
) -> AttemptRun
where
    G: CandidateGenerator,
    L: LadderSolver,
{
    let mut run = AttemptRun {
        result: Err(LadderError::SchemaMismatch("no response".into())),
        chain: Chain::default(),
        seen_words: Vec::new(),
        sparse_slots: Vec::new(),
    };

    let request = GenerationRequest {
        word_length: config.word_length,
        clues: &config.clues,
        excluded: rejected,
    };

    let raw = match generator.generate(&request) {
        Ok(raw) => raw,
        Err(err) => {
            run.result = Err(generator_failure(err));
            return run;
        }
    };
    run.seen_words = raw
        .iter()
        .flatten()
        .map(|c| c.word.trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .collect();

    if let Err(err) = check_schema(config, &raw) {
        run.result = Err(err);
        return run;
    }

    let report = validator.validate(&raw);
    if !report.sparse_slots.is_empty() {
        log::debug!(
            target: "orchestrator",
            "sparse slots {:?} after dropping {} candidates",
            report.sparse_slots,
            report.dropped
        );
    }
    run.sparse_slots = report.sparse_slots;

    let slots: Vec<Slot> = config
        .clues
        .iter()
        .zip(report.slots)
        .map(|(clue, candidates)| {
            Slot::new(clue.clone(), config.word_length).with_candidates(candidates)
        })
        .collect();

    run.result = match solver.solve(&slots) {
        Ok(solution) => {
            run.chain = solution.chain.clone();
            match solution.chain.validate(&config.clues) {
                Ok(()) => Ok((solution.chain, solution.stats)),
                Err(defect) => Err(defect.into()),
            }
        }
        Err(err) => {
            run.chain = Chain::draft(&slots);
            Err(err)
        }
    };
    run
}

/// Classify a generator error for one attempt
fn generator_failure(err: GeneratorError) -> LadderError {
    match err {
        GeneratorError::Malformed(reason) => LadderError::SchemaMismatch(reason),
        GeneratorError::Transient(reason) | GeneratorError::Unavailable(reason) => {
            LadderError::UpstreamUnavailable {
                attempts: 1,
                reason,
            }
        }
    }
}

/// The response must have one list per clue, and at least one word of the
/// requested length somewhere
fn check_schema(config: &SolveConfig, raw: &[Vec<RawCandidate>]) -> Result<(), LadderError> {
    if raw.len() != config.clues.len() {
        return Err(LadderError::SchemaMismatch(format!(
            "{} candidate lists for {} clues",
            raw.len(),
            config.clues.len()
        )));
    }

    let mut words = raw.iter().flatten().peekable();
    if words.peek().is_some()
        && !words.any(|c| c.word.trim().chars().count() == config.word_length)
    {
        return Err(LadderError::SchemaMismatch(format!(
            "no candidate has the requested length {}",
            config.word_length
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FixtureGenerator;

    fn candidates(words: &[&str]) -> Vec<RawCandidate> {
        words
            .iter()
            .map(|w| RawCandidate {
                word: (*w).to_string(),
                justification: format!("{w} fits"),
            })
            .collect()
    }

    fn clues(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    /// Answers from a script of responses, one per call, recording requests
    struct Scripted {
        responses: Vec<Result<Vec<Vec<RawCandidate>>, GeneratorError>>,
        excluded_seen: Vec<BTreeSet<String>>,
    }

    impl Scripted {
        fn new(responses: Vec<Result<Vec<Vec<RawCandidate>>, GeneratorError>>) -> Self {
            Self {
                responses,
                excluded_seen: Vec::new(),
            }
        }
    }

    impl CandidateGenerator for Scripted {
        fn generate(
            &mut self,
            request: &GenerationRequest<'_>,
        ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError> {
            self.excluded_seen.push(request.excluded.clone());
            if self.responses.len() > 1 {
                self.responses.remove(0)
            } else {
                self.responses[0].clone()
            }
        }
    }

    #[test]
    fn parch_porch_scenario() {
        let texts = vec![
            "Become dry through extreme heat".to_string(),
            "Covered entrance to a house".to_string(),
        ];
        let config = SolveConfig::new(5, texts);
        let mut generator = Scripted::new(vec![Ok(vec![
            candidates(&["PARCH", "SEARS", "DRIES"]),
            candidates(&["PORCH", "STOOP", "FOYER"]),
        ])]);

        let result = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap();
        let solved = result.chain.to_solved();
        assert_eq!(solved.ladder, vec!["PARCH", "PORCH"]);
        assert_eq!(solved.pairs.len(), 2);
        assert_eq!(solved.pairs[1].clue, "Covered entrance to a house");
        assert_eq!(result.attempts.len(), 1);
    }

    #[test]
    fn malformed_input_is_not_retried() {
        let mut generator = Scripted::new(vec![Ok(vec![])]);
        let solver = SolverType::default();

        for config in [
            SolveConfig::new(0, clues(&["clue"])),
            SolveConfig::new(4, Vec::new()),
            SolveConfig::new(4, clues(&["ok", "  "])),
            SolveConfig::new(4, vec!["x".repeat(MAX_CLUE_CHARS + 1)]),
        ] {
            let err = solve_ladder(&config, &mut generator, &solver).unwrap_err();
            assert_eq!(err.code(), "malformed_input");
        }
        assert!(generator.excluded_seen.is_empty());
    }

    #[test]
    fn clue_at_limit_is_accepted() {
        let config = SolveConfig::new(4, vec!["é".repeat(MAX_CLUE_CHARS)]);
        assert!(config.check().is_ok());
    }

    #[test]
    fn exhaustion_after_max_attempts() {
        let config = SolveConfig::new(4, clues(&["a", "b", "c"]));
        let mut generator = Scripted::new(vec![Ok(vec![
            candidates(&["COLD", "BOLD", "GOLD"]),
            candidates(&["WARM", "FARM", "HARM"]),
            candidates(&["PINE", "LINE", "MINE"]),
        ])]);

        let err = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap_err();
        let LadderError::AttemptsExhausted(exhaustion) = err else {
            panic!("expected exhaustion, got {err}");
        };
        assert_eq!(exhaustion.attempts.len(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(generator.excluded_seen.len(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(
            exhaustion.last_chain.words().collect::<Vec<_>>(),
            vec!["COLD", "WARM", "PINE"]
        );
        assert!(exhaustion.last_chain.validate(&config.clues).is_err());
        assert_eq!(exhaustion.rejected_words.len(), 9);
        for attempt in &exhaustion.attempts {
            assert!(matches!(
                attempt.outcome,
                AttemptOutcome::Failure {
                    code: "no_valid_assignment",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejected_words_become_exclusion_hint() {
        let config = SolveConfig::new(4, clues(&["a", "b"]));
        let mut generator = Scripted::new(vec![
            Ok(vec![candidates(&["COLD"]), candidates(&["WARM"])]),
            Ok(vec![candidates(&["COLD"]), candidates(&["CORD"])]),
        ]);

        let result = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap();
        assert_eq!(result.attempts.len(), 2);
        assert!(generator.excluded_seen[0].is_empty());
        let hint: Vec<_> = generator.excluded_seen[1].iter().cloned().collect();
        assert_eq!(hint, vec!["COLD", "WARM"]);
    }

    #[test]
    fn exhaustive_pipeline_uses_one_round() {
        let mut config = SolveConfig::new(4, clues(&["a", "b"]));
        config.pipeline = Pipeline::Exhaustive;
        let round = vec![candidates(&["COLD"]), candidates(&["WARM"])];
        let mut generator = Scripted::new(vec![Ok(round)]);

        let err = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap_err();
        assert_eq!(err.code(), "attempts_exhausted");
        assert_eq!(generator.excluded_seen.len(), 1);
    }

    #[test]
    fn pipeline_picks_default_solver() {
        assert_eq!(Pipeline::Repair.default_solver(10).name(), "slot-order");
        assert_eq!(Pipeline::Exhaustive.default_solver(10).name(), "fallback");
    }

    #[test]
    fn exhaustive_default_solver_reorders_in_one_round() {
        let mut config = SolveConfig::new(4, clues(&["a", "b", "c"]));
        config.pipeline = Pipeline::Exhaustive;
        let round = vec![
            candidates(&["CARD"]),
            candidates(&["COLD"]),
            candidates(&["CORD"]),
        ];
        let mut generator = Scripted::new(vec![Ok(round)]);

        let solver = config.pipeline.default_solver(1_000);
        let result = solve_ladder(&config, &mut generator, &solver).unwrap();
        assert_eq!(result.attempts.len(), 1);
        assert_eq!(
            result.chain.words().collect::<Vec<_>>(),
            vec!["CARD", "CORD", "COLD"]
        );
    }

    #[test]
    fn empty_slot_triggers_retry() {
        let config = SolveConfig::new(4, clues(&["a", "b"]));
        let mut generator = Scripted::new(vec![
            Ok(vec![candidates(&["COLD"]), candidates(&["TOOLONG"])]),
            Ok(vec![candidates(&["COLD"]), candidates(&["CORD"])]),
        ]);

        let result = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap();
        assert!(matches!(
            &result.attempts[0].outcome,
            AttemptOutcome::Failure {
                code: "candidate_exhausted",
                ..
            }
        ));
        assert_eq!(result.attempts[0].sparse_slots, vec![0, 1]);
    }

    #[test]
    fn schema_mismatch_counts_as_attempt() {
        let config = SolveConfig::new(4, clues(&["a", "b"]));
        let mut generator = Scripted::new(vec![
            Ok(vec![candidates(&["COLD"])]),
            Ok(vec![candidates(&["PARCH"]), candidates(&["PORCH"])]),
            Ok(vec![candidates(&["COLD"]), candidates(&["CORD"])]),
        ]);

        let result = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap();
        let codes: Vec<_> = result
            .attempts
            .iter()
            .map(|a| match &a.outcome {
                AttemptOutcome::Failure { code, .. } => *code,
                AttemptOutcome::Success(_) => "success",
            })
            .collect();
        assert_eq!(codes, vec!["schema_mismatch", "schema_mismatch", "success"]);
    }

    #[test]
    fn upstream_unavailable_on_every_attempt() {
        let mut config = SolveConfig::new(4, clues(&["a"]));
        config.max_attempts = 2;
        let mut generator = Scripted::new(vec![Err(GeneratorError::Unavailable("down".into()))]);

        let err = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap_err();
        match err {
            LadderError::UpstreamUnavailable { attempts, reason } => {
                assert_eq!(attempts, 2);
                assert_eq!(reason, "down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn upstream_recovery_then_search_failure_is_exhaustion() {
        let mut config = SolveConfig::new(4, clues(&["a", "b"]));
        config.max_attempts = 2;
        let mut generator = Scripted::new(vec![
            Err(GeneratorError::Unavailable("down".into())),
            Ok(vec![candidates(&["COLD"]), candidates(&["WARM"])]),
        ]);

        let err = solve_ladder(&config, &mut generator, &SolverType::default()).unwrap_err();
        assert_eq!(err.code(), "attempts_exhausted");
    }

    #[test]
    fn reorder_solver_through_orchestrator() {
        let config = SolveConfig::new(4, clues(&["a", "b", "c"]));
        let mut generator = FixtureGenerator::new(vec![
            ("a".to_string(), candidates(&["CARD"])),
            ("b".to_string(), candidates(&["COLD"])),
            ("c".to_string(), candidates(&["CORD"])),
        ]);

        let solver = SolverType::from_name("reorder", 1_000);
        let result = solve_ladder(&config, &mut generator, &solver).unwrap();
        assert_eq!(result.chain.validate(&config.clues), Ok(()));
        assert_eq!(
            result.chain.words().collect::<Vec<_>>(),
            vec!["CARD", "CORD", "COLD"]
        );
    }
}
