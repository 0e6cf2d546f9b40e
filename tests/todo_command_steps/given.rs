//! Given steps for to-do command BDD scenarios.

use super::world::{TodoCommandWorld, run_async};
use chrono::{DateTime, TimeZone, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tarefa::todo::commands::{CreateTodo, TodoCommand};

/// Fixed due date shared by scenario setup steps.
fn scenario_due_date() -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario due date"))
}

#[given(r#"a create command with title "{title}" for owner "{owner}""#)]
fn create_command(
    world: &mut TodoCommandWorld,
    title: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let due_at = scenario_due_date()?;
    world.pending_command = Some(TodoCommand::Create(CreateTodo::new(title, owner, due_at)));
    Ok(())
}

#[given(r#"a create command with an empty title for owner "{owner}""#)]
fn create_command_without_title(
    world: &mut TodoCommandWorld,
    owner: String,
) -> Result<(), eyre::Report> {
    let due_at = scenario_due_date()?;
    world.pending_command = Some(TodoCommand::Create(CreateTodo::new("", owner, due_at)));
    Ok(())
}

#[given(r#"an item titled "{title}" owned by "{owner}""#)]
fn existing_item(
    world: &mut TodoCommandWorld,
    title: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let due_at = scenario_due_date()?;
    let outcome = run_async(
        world
            .service
            .handle(TodoCommand::Create(CreateTodo::new(title, owner, due_at))),
    )
    .wrap_err("create item for scenario setup")?;

    let item = outcome
        .todo()
        .ok_or_else(|| eyre::eyre!("scenario setup command was rejected"))?
        .clone();
    world.current_item = Some(item);
    Ok(())
}
