//! When steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use trestle::board::domain::{FilterSet, TaskForm, TaskStatus};
use trestle::board::services::BoardCommand;

#[when(r#"a task "{title}" with priority "{priority}" and label "{label}" is submitted"#)]
fn submit_task(world: &mut BoardWorld, title: String, priority: String, label: String) {
    let form = TaskForm::new(title, "captured from the form", priority, label);
    world.controller.dispatch(BoardCommand::Submit(form));
    world.saves_mark = world.blob.saves.get();
}

#[when("a task form with an empty title is submitted")]
fn submit_empty_title(world: &mut BoardWorld) {
    let form = TaskForm::new("", "captured from the form", "low", "home");
    world.controller.dispatch(BoardCommand::Submit(form));
}

#[when(r#"the task "{title}" is moved to "{status}""#)]
fn move_task(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let id = world
        .find_id(&title)
        .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))?;
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid target status: {err}"))?;
    world.controller.dispatch(BoardCommand::Move { id, status: target });
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .find_id(&title)
        .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))?;
    world.controller.dispatch(BoardCommand::Delete(id));
    Ok(())
}

#[when(r#"the board is filtered by search "{term}""#)]
fn filter_by_search(world: &mut BoardWorld, term: String) {
    let filters = FilterSet::new().with_search(term);
    world.controller.dispatch(BoardCommand::Filter(filters));
}
