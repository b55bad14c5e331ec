//! `citymap drag` command implementation.
//!
//! Replays a press / move / release gesture through the drag controller, the
//! same path an interactive front end would take.

use citymap::{Config, DragOutcome, PointerEvent, validate};
use colored::Colorize;

use super::display::number;

/// Run the drag command.
pub fn run(
    config: &Config,
    press: &str,
    moves: &[String],
    release: &str,
) -> Result<(), citymap::Error> {
    let mut events = vec![PointerEvent::Press(validate::parse_point(press)?)];
    for point in moves {
        events.push(PointerEvent::Move(validate::parse_point(point)?));
    }
    events.push(PointerEvent::Release(validate::parse_point(release)?));

    let mut map = super::open(config)?;

    for event in events {
        match map.handle_pointer(event)? {
            DragOutcome::Ignored => {
                if matches!(event, PointerEvent::Press(_)) {
                    println!(
                        "No location within {} of the press point.",
                        number(config.pick_radius)
                    );
                    return Ok(());
                }
            }
            DragOutcome::Picked { name } => {
                println!("{} {}", "Picked".white().bold(), name.cyan());
            }
            DragOutcome::Moved { name, position } => {
                tracing::debug!(name = %name, %position, "Previewed");
            }
            DragOutcome::Committed { name, position } => {
                println!(
                    "{} {} at ({}, {})",
                    "Moved".green().bold(),
                    name.cyan(),
                    number(position.x),
                    number(position.y)
                );
            }
            DragOutcome::Reverted { name, kind, reason } => {
                println!(
                    "{}: move of {} was not saved ({kind}): {reason}",
                    "warning".yellow().bold(),
                    name.cyan()
                );
            }
        }
    }

    Ok(())
}
