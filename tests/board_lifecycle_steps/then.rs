//! Then steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use eyre::ensure;
use rstest_bdd_macros::then;
use trestle::board::domain::TaskStatus;

#[then(r#"the "{column}" column has a task count of {count:usize}"#)]
fn column_count(world: &BoardWorld, column: String, count: usize) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let actual = world.controller.store().tasks_in(status).len();
    ensure!(
        actual == count,
        "expected {count} tasks in {column}, found {actual}"
    );
    Ok(())
}

#[then("the board has a task count of {count:usize}")]
fn board_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.controller.store().count();
    ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then("the rendered view has a task count of {count:usize}")]
fn rendered_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let log = world.log.borrow();
    let last = log
        .renders
        .last()
        .ok_or_else(|| eyre::eyre!("nothing has been rendered"))?;
    ensure!(
        last.len() == count,
        "expected {count} rendered tasks, found {}",
        last.len()
    );
    Ok(())
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .controller
        .store()
        .board()
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))?;
    ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then("a warning is shown")]
fn warning_shown(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        !world.log.borrow().warnings.is_empty(),
        "expected at least one warning"
    );
    Ok(())
}

#[then("no further save has occurred since the submission")]
fn no_further_save(world: &BoardWorld) -> Result<(), eyre::Report> {
    let actual = world.blob.saves.get();
    ensure!(
        actual == world.saves_mark,
        "expected {} saves, found {actual}",
        world.saves_mark
    );
    Ok(())
}
