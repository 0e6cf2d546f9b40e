//! When steps for to-do command BDD scenarios.

use super::world::{TodoCommandWorld, run_async};
use rstest_bdd_macros::when;
use tarefa::todo::commands::{MarkTodo, RenameTodo, TodoCommand};

#[when("the command is handled")]
fn handle_pending_command(world: &mut TodoCommandWorld) -> Result<(), eyre::Report> {
    let command = world
        .pending_command
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending command in scenario world"))?;
    let result = run_async(world.service.handle(command));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the item is renamed to "{title}""#)]
fn rename_item(world: &mut TodoCommandWorld, title: String) -> Result<(), eyre::Report> {
    let item = world
        .current_item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created item in scenario world"))?;

    let command = TodoCommand::Rename(RenameTodo::new(
        item.id(),
        item.owner().as_str().to_owned(),
        title,
    ));
    let result = run_async(world.service.handle(command));
    world.last_result = Some(result);
    Ok(())
}

#[when("the item is marked done")]
fn mark_item_done(world: &mut TodoCommandWorld) -> Result<(), eyre::Report> {
    let item = world
        .current_item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created item in scenario world"))?;

    let command = TodoCommand::MarkDone(MarkTodo::new(
        item.id(),
        item.owner().as_str().to_owned(),
    ));
    let result = run_async(world.service.handle(command));
    world.last_result = Some(result);
    Ok(())
}
