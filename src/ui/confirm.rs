//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Outcome of asking before a destructive operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancelled,
    /// Batch mode without `--yes`; nobody is there to answer
    Refused,
}

/// Ask before a destructive operation.
///
/// `--yes` skips the prompt. In batch mode without `--yes` the operation is
/// refused rather than prompted for.
pub fn confirm_action(
    prompt: &str,
    assume_yes: bool,
    batch: bool,
) -> Result<Confirmation, dialoguer::Error> {
    if assume_yes {
        return Ok(Confirmation::Proceed);
    }
    if batch {
        return Ok(Confirmation::Refused);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(if confirmed {
        Confirmation::Proceed
    } else {
        Confirmation::Cancelled
    })
}

/// Confirm a destructive operation, reporting the outcome.
///
/// Returns `Ok(false)` when the user declined. A batch-mode refusal is an
/// error naming `action`.
pub fn confirm_destructive(
    prompt: &str,
    action: &str,
    assume_yes: bool,
    batch: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    match confirm_action(prompt, assume_yes, batch)? {
        Confirmation::Proceed => Ok(true),
        Confirmation::Cancelled => {
            println!("Cancelled");
            Ok(false)
        }
        Confirmation::Refused => {
            Err(format!("Refusing to {} in batch mode without --yes", action).into())
        }
    }
}
