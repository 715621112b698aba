//! Behaviour tests driving the recommend CLI scenarios.

use super::helpers::{EXAMPLE_RATINGS, Workspace};
use super::*;
use crate::recommend::run_recommend_with;
use affinity_core::{RecommendError, RecommendationReport};
use affinity_data::LoadRatingsError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct RecommendWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, user: u64) -> Vec<String> {
        let mut argv = vec![
            "affinity".to_owned(),
            "recommend".to_owned(),
            self.workspace.ratings_path().into_string(),
            format!("--{ARG_USER}"),
            user.to_string(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn expect_error<T>(&self, check: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the example ratings exist on disk")]
fn example_ratings_exist(#[from(world)] world: &RecommendWorld) {
    world.workspace.write_ratings(EXAMPLE_RATINGS);
}

#[given("the ratings file contains {line}")]
fn ratings_file_contains(#[from(world)] world: &RecommendWorld, line: String) {
    let contents = format!("{}\n", line.trim_matches('"'));
    world.workspace.write_ratings(&contents);
}

#[given("I request JSON output")]
fn request_json_output(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[when("I run the recommend command for user {user}")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld, user: u64) {
    let invocation = world.build_command_line(user);
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and recommends item {item} with score {score}")]
fn command_succeeds_and_recommends(
    #[from(world)] world: &RecommendWorld,
    item: u64,
    score: String,
) {
    world.expect_success();
    let expected = format!("Item: {item}, Predicted Score: {score}");
    let stdout = world.stdout_text();
    assert!(
        stdout.lines().any(|printed| printed == expected),
        "expected {expected:?} in output:\n{stdout}"
    );
}

#[then("the command succeeds and prints a report with {count} recommendations")]
fn command_succeeds_with_report(#[from(world)] world: &RecommendWorld, count: usize) {
    world.expect_success();
    let report: RecommendationReport =
        serde_json::from_str(&world.stdout_text()).expect("output should be a JSON report");
    assert_eq!(report.user, 1);
    assert_eq!(report.recommendations.len(), count);
}

#[then("the command fails because the user is unknown")]
fn command_fails_unknown_user(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::Recommend(RecommendError::UserNotFound { user }) => assert_eq!(*user, 99),
        other => panic!("expected Recommend, found {other:?}"),
    });
}

#[then("the command fails because the ratings file is missing")]
fn command_fails_missing_ratings(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_RATINGS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    });
}

#[then("the command fails because the ratings cannot be loaded")]
fn command_fails_load_ratings(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::LoadRatings {
            source: LoadRatingsError::InvalidRating { line, .. },
            ..
        } => assert_eq!(*line, 1),
        other => panic!("expected LoadRatings, found {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_text_output, "recommending items as text");
register_recommend_scenario!(recommend_json_output, "recommending items as JSON");
register_recommend_scenario!(recommend_unknown_user, "rejecting unknown users");
register_recommend_scenario!(recommend_missing_ratings, "rejecting missing ratings files");
register_recommend_scenario!(recommend_malformed_ratings, "rejecting malformed ratings");
