//! Interactive wizard over a line-oriented terminal.
//!
//! Each line is one command: an option number or its exact text selects, `b` goes back,
//! `r` starts over, `q` (or end of input) closes. Every session starts from a fresh state.

use crate::present::Renderer;
use anyhow::Result;
use articula::domain::step::Step;
use articula::features::consult::{Consult, Wizard};
use std::io::{BufRead, Write};
use tracing::debug;

const KEYS_HINT: &str = "b: volver · r: reiniciar · q: salir";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Back,
    Reset,
    Quit,
    Select(&'a str),
    Empty,
}

/// `candidates` turns option numbers into their text; anything else is passed through
/// verbatim for the wizard to validate.
fn parse<'a>(line: &'a str, candidates: &[&'a str]) -> Command<'a> {
    match line.trim() {
        "" => Command::Empty,
        "b" | "B" => Command::Back,
        "r" | "R" => Command::Reset,
        "q" | "Q" => Command::Quit,
        text => match text.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => Command::Select(candidates[n - 1]),
            _ => Command::Select(text),
        },
    }
}

/// Runs one session until the user quits or input ends.
///
/// # Errors
/// Returns an error only when reading input or writing output fails; invalid selections are
/// reported on `out` and the prompt repeats.
pub fn run(consult: &Consult, renderer: &Renderer, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut wizard = consult.wizard();
    let mut lines = input.lines();
    debug!("Consult session opened");

    loop {
        let candidates = wizard.candidates();
        screen(&wizard, renderer, &candidates, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match parse(&line, &candidates) {
            Command::Empty => {},
            Command::Quit => break,
            Command::Reset => wizard.reset(),
            Command::Back => {
                if wizard.back().is_err() {
                    renderer.notice(out, "Ya estás en el primer paso.")?;
                }
            },
            Command::Select(_) if wizard.step() == Step::Result => {
                renderer.notice(out, "La consulta terminó. Usá b para volver o r para reiniciar.")?;
            },
            Command::Select(value) => {
                if wizard.select(value).is_err() {
                    renderer.notice(out, &format!("Opción no válida: {value}"))?;
                }
            },
        }
    }

    debug!(step = %wizard.step(), "Consult session closed");
    Ok(())
}

fn screen(wizard: &Wizard<'_>, renderer: &Renderer, candidates: &[&str], out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    renderer.progress(out, wizard.step())?;

    match wizard.outcome() {
        Some(outcome) => {
            let orientation = wizard.state().orientation.as_deref().unwrap_or_default();
            renderer.outcome(out, orientation, &outcome)?;
        },
        None => {
            renderer.prompt(out, wizard.step())?;
            renderer.options(out, candidates)?;
        },
    }
    renderer.hint(out, KEYS_HINT)?;
    Ok(())
}
