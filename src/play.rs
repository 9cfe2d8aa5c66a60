//! Line-oriented shell: one guess per line.

use crate::render;
use bulls_and_cows::{IgnoreReason, KeyValueStore, SessionController, Submission};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

const FROZEN_HINT: &str = "The game is over. Type :reset to play again or :quit to leave.";

/// Reads guesses and commands from `input` until end of input or `:quit`.
#[instrument(skip_all)]
pub fn run<S, R, W>(
    controller: &mut SessionController<S>,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render::help_line(controller.rules()))?;
    writeln!(output, "Commands: :history :reset :quit")?;
    print_history(controller, output)?;
    if controller.is_frozen() {
        writeln!(output, "{}", FROZEN_HINT)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;
        let raw = line.trim_end_matches('\r');

        match raw.trim() {
            ":quit" | ":q" => break,
            ":reset" => {
                controller.reset();
                writeln!(output, "New secret chosen.")?;
                continue;
            }
            ":history" => {
                print_history(controller, output)?;
                continue;
            }
            _ => {}
        }

        let rules = controller.rules().clone();
        match controller.submit_guess(raw) {
            Submission::Ignored(IgnoreReason::Frozen) => writeln!(output, "{}", FROZEN_HINT)?,
            Submission::Ignored(_) => {}
            Submission::Invalid(input) => {
                writeln!(output, "{}", render::invalid_message(&input, &rules))?
            }
            Submission::Recorded(entry) => {
                writeln!(output, "{}", render::describe(&entry, rules.length()))?
            }
            Submission::Won(pending) => {
                writeln!(output, "{}", render::describe(pending.entry(), rules.length()))?;
                write!(
                    output,
                    "You win in {} attempts! Play again? [y/N] ",
                    pending.controller().attempts()
                )?;
                output.flush()?;

                let answer = lines.next().transpose()?.unwrap_or_default();
                let again = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
                pending.resolve(again);

                if again {
                    writeln!(output, "New secret chosen.")?;
                } else {
                    writeln!(output, "{}", FROZEN_HINT)?;
                }
            }
        }
    }

    Ok(())
}

fn print_history<S: KeyValueStore, W: Write>(
    controller: &SessionController<S>,
    output: &mut W,
) -> io::Result<()> {
    let length = controller.rules().length();
    for entry in controller.history().all() {
        writeln!(output, "  {}", render::describe(entry, length))?;
    }
    Ok(())
}
