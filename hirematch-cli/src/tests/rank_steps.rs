//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::rank::{RankReport, run_rank_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct RankWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["hirematch".to_owned(), "rank".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn report(&self) -> RankReport {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a rank report")
    }

    fn error<T>(&self, inspect: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        inspect(error)
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

#[given("a candidate upload with a strong, a weak and an incomplete candidate")]
fn mixed_upload(#[from(world)] world: &RankWorld) {
    let path = world.workspace.candidates(
        "Ada Lovelace,\"Python, SQL, Rust\",3.9,24\n\
         Weak Candidate,Excel,2.2,0\n\
         Nobody,Python,,12\n",
    );
    world.push_args([path.as_str()]);
}

#[given("a candidate upload with one Python and SQL candidate")]
fn single_upload(#[from(world)] world: &RankWorld) {
    let path = world.workspace.candidates("Ada,\"Python, SQL\",3.2,6\n");
    world.push_args([path.as_str()]);
}

#[given("the required skills {skills}")]
fn required_skills(#[from(world)] world: &RankWorld, skills: String) {
    let flag = format!("--{ARG_RANK_REQUIRED_SKILLS}");
    world.push_args([flag.as_str(), unquote(&skills)]);
}

#[given("the scoring mode {mode}")]
fn scoring_mode(#[from(world)] world: &RankWorld, mode: String) {
    let flag = format!("--{ARG_RANK_MODE}");
    world.push_args([flag.as_str(), unquote(&mode)]);
}

#[given("a fuzzy system file containing invalid JSON")]
fn invalid_fuzzy_system(#[from(world)] world: &RankWorld) {
    let path = world.workspace.path("system.json");
    write_utf8(&path, b"{ not valid json");
    let flag = format!("--{ARG_FUZZY_SYSTEM}");
    world.push_args([flag.as_str(), path.as_str()]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
        Command::System(_) => panic!("expected rank command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and ranks {name} first")]
fn ranks_first(#[from(world)] world: &RankWorld, name: String) {
    let report = world.report();
    assert_eq!(
        report.ranked.first().map(|result| result.candidate.as_str()),
        Some(unquote(&name))
    );
}

#[then("the failures list {name} in row {row}")]
fn failure_listed(#[from(world)] world: &RankWorld, name: String, row: usize) {
    let report = world.report();
    let failure = report
        .failures
        .iter()
        .find(|failure| failure.candidate == unquote(&name))
        .expect("failure reported");
    assert_eq!(failure.row, row);
}

#[then("the command succeeds and the top score is {score}")]
fn top_score(#[from(world)] world: &RankWorld, score: f64) {
    let report = world.report();
    assert_eq!(report.ranked.first().map(|result| result.score), Some(score));
}

#[then("the command fails because the required skills are missing")]
fn fails_missing_skills(#[from(world)] world: &RankWorld) {
    world.error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RANK_REQUIRED_SKILLS),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the fuzzy system JSON is invalid")]
fn fails_invalid_system(#[from(world)] world: &RankWorld) {
    world.error(|error| match error {
        CliError::ParseFuzzySystem { .. } => {}
        other => panic!("expected ParseFuzzySystem, found {other:?}"),
    });
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_happy_path, "ranking a candidate upload");
register_rank_scenario!(rank_missing_skills, "rejecting a missing required skills list");
register_rank_scenario!(rank_additive, "ranking with the legacy additive scorer");
register_rank_scenario!(rank_invalid_system, "rejecting an invalid fuzzy system");
