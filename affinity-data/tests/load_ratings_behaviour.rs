//! Behavioural coverage for loading rating files from disk.

use std::cell::RefCell;

use affinity_core::RatingMatrix;
use affinity_data::{LoadRatingsError, load_ratings};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Scenario state: a scratch directory, the ratings path and the outcome.
pub struct LoadWorld {
    _tmp: TempDir,
    path: Utf8PathBuf,
    outcome: RefCell<Option<Result<RatingMatrix, LoadRatingsError>>>,
}

impl LoadWorld {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap_or_else(|err| panic!("create tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 tempdir {path:?}"));
        Self {
            path: root.join("ratings.csv"),
            _tmp: tmp,
            outcome: RefCell::new(None),
        }
    }

    fn write(&self, contents: &str) {
        std::fs::write(&self.path, contents)
            .unwrap_or_else(|err| panic!("write ratings file: {err}"));
    }

    fn matrix(&self) -> RatingMatrix {
        match self.outcome.borrow().as_ref() {
            Some(Ok(matrix)) => matrix.clone(),
            other => panic!("expected a loaded matrix, found {other:?}"),
        }
    }
}

#[fixture]
/// Build a fresh world for each scenario run.
pub fn world() -> LoadWorld {
    LoadWorld::new()
}

#[given("a ratings file with 4 lines for 2 users")]
fn well_formed(#[from(world)] world: &LoadWorld) {
    world.write("1,10,5.0\n1,20,3.0\n2,10,4.0\n2,30,2.5\n");
}

#[given("a ratings file where user 1 rates item 10 twice")]
fn duplicated(#[from(world)] world: &LoadWorld) {
    world.write("1,10,5.0\n2,10,4.0\n1,10,1.5\n");
}

#[given("a ratings file with a malformed third line")]
fn malformed(#[from(world)] world: &LoadWorld) {
    world.write("1,10,5.0\n1,20,3.0\n1,30\n");
}

#[given("no ratings file exists")]
fn missing(#[from(world)] world: &LoadWorld) {
    assert!(!world.path.exists());
}

#[when("I load the ratings file")]
fn load(#[from(world)] world: &LoadWorld) {
    world.outcome.replace(Some(load_ratings(&world.path)));
}

#[then("the matrix holds {users} users and {ratings} ratings")]
fn holds(#[from(world)] world: &LoadWorld, users: usize, ratings: usize) {
    let matrix = world.matrix();
    assert_eq!(matrix.user_count(), users);
    assert_eq!(matrix.rating_count(), ratings);
}

#[then("user {user} rates item {item} as {rating}")]
fn rates(#[from(world)] world: &LoadWorld, user: u64, item: u64, rating: f64) {
    let stored = world.matrix().ratings(user).and_then(|r| r.get(item));
    assert_eq!(stored, Some(rating));
}

#[then("loading fails on line {line}")]
fn fails_on_line(#[from(world)] world: &LoadWorld, line: usize) {
    match world.outcome.borrow().as_ref() {
        Some(Err(LoadRatingsError::FieldCount { line: failed, .. })) => assert_eq!(*failed, line),
        other => panic!("expected FieldCount, found {other:?}"),
    }
}

#[then("loading fails because the file cannot be opened")]
fn fails_to_open(#[from(world)] world: &LoadWorld) {
    match world.outcome.borrow().as_ref() {
        Some(Err(LoadRatingsError::Open { path, .. })) => assert_eq!(*path, world.path),
        other => panic!("expected Open, found {other:?}"),
    }
}

#[scenario(path = "tests/features/load_ratings.feature", index = 0)]
fn loading_well_formed_file(#[from(world)] world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_ratings.feature", index = 1)]
fn duplicate_rows_keep_last(#[from(world)] world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_ratings.feature", index = 2)]
fn malformed_rows_abort(#[from(world)] world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_ratings.feature", index = 3)]
fn missing_file_cannot_be_opened(#[from(world)] world: LoadWorld) {
    let _ = world;
}
