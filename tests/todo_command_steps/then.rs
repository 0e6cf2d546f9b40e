//! Then steps for to-do command BDD scenarios.

use super::world::TodoCommandWorld;
use rstest_bdd_macros::then;
use tarefa::todo::services::CommandOutcome;

/// Returns the most recent successfully handled outcome.
fn last_outcome(world: &TodoCommandWorld) -> Result<&CommandOutcome, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(outcome)) => Ok(outcome),
        Some(Err(err)) => Err(eyre::eyre!("command handling failed: {err}")),
        None => Err(eyre::eyre!("no command has been handled yet")),
    }
}

#[then(r#"the outcome is accepted with message "{message}""#)]
fn outcome_is_accepted(world: &TodoCommandWorld, message: String) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if !outcome.is_accepted() {
        return Err(eyre::eyre!("expected an accepted outcome, got {outcome:?}"));
    }
    if outcome.message() != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, got {:?}",
            outcome.message()
        ));
    }
    Ok(())
}

#[then(r#"the outcome is rejected with message "{message}""#)]
fn outcome_is_rejected(world: &TodoCommandWorld, message: String) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if outcome.is_accepted() {
        return Err(eyre::eyre!("expected a rejected outcome, got {outcome:?}"));
    }
    if outcome.message() != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, got {:?}",
            outcome.message()
        ));
    }
    Ok(())
}

#[then(r#"the item title is "{title}""#)]
fn item_title_is(world: &TodoCommandWorld, title: String) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    let item = outcome
        .todo()
        .ok_or_else(|| eyre::eyre!("outcome carries no item"))?;
    if item.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, got {:?}",
            item.title().as_str()
        ));
    }
    Ok(())
}

#[then(r#"a validation failure names the field "{field}""#)]
fn failure_names_field(world: &TodoCommandWorld, field: String) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    let failures = outcome
        .failures()
        .ok_or_else(|| eyre::eyre!("outcome carries no validation failures"))?;
    if !failures.iter().any(|failure| failure.field == field) {
        return Err(eyre::eyre!(
            "no failure names field {field:?}: {failures:?}"
        ));
    }
    Ok(())
}

#[then("the item is done")]
fn item_is_done(world: &TodoCommandWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    let item = outcome
        .todo()
        .ok_or_else(|| eyre::eyre!("outcome carries no item"))?;
    if !item.done() {
        return Err(eyre::eyre!("expected the item to be done"));
    }
    Ok(())
}
