//! Line-oriented session.

use std::io::{BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Args;
use crossbeam_channel::{select, Receiver};
use premium_client::PredictionClient;
use premium_core::{DisplayMode, IPredictionClient, InputField, PremiumConfig};
use premium_ui::display::submit_label;
use premium_ui::{render_panel, Session, UiEvent};
use tracing::debug;

const HELP: &str = "\
commands:
  age <value>      set age (empty value clears it)
  height <value>   set height in cm
  weight <value>   set weight in kg
  predict          submit the three values
  close            hide the last result
  show             print the current values
  help             print this text
  quit             leave";

/// Edit the three fields and submit from a prompt.
///
/// Results are printed as soon as they arrive; input keeps being accepted
/// while a request is in flight.
#[derive(Args, Debug, Clone, Default)]
pub struct InteractiveCommand {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Set(InputField, String),
    Predict,
    Close,
    Show,
    Help,
    Quit,
    Blank,
}

/// Parse one prompt line.
pub fn parse_line(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(ReplCommand::Blank),
        "age" => Ok(ReplCommand::Set(InputField::Age, rest.to_string())),
        "height" => Ok(ReplCommand::Set(InputField::Height, rest.to_string())),
        "weight" => Ok(ReplCommand::Set(InputField::Weight, rest.to_string())),
        "predict" | "submit" => Ok(ReplCommand::Predict),
        "close" => Ok(ReplCommand::Close),
        "show" => Ok(ReplCommand::Show),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

impl InteractiveCommand {
    /// Returns whether the last outcome was a success.
    pub fn run(&self, config: &PremiumConfig) -> Result<bool> {
        let client =
            PredictionClient::new(&config.client).context("failed to build HTTP client")?;
        let (tx, lines) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("premium-stdin".to_string())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            })
            .context("failed to spawn stdin reader")?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{HELP}")?;
        run_repl(client, lines, config.display.effective_mode(), &mut out)
    }
}

enum Step {
    Line(Option<String>),
    Completion(Option<UiEvent>),
}

/// Drive a session from `lines` until `quit` or the channel closes.
///
/// A request still in flight when input ends is waited for and printed;
/// after `quit` its response is dropped.
pub fn run_repl<C: IPredictionClient + 'static>(
    client: C,
    lines: Receiver<String>,
    mode: DisplayMode,
    out: &mut impl Write,
) -> Result<bool> {
    let mut session = Session::new(client);
    let completions = session.completions().clone();
    let mut quit = false;

    loop {
        let step = select! {
            recv(lines) -> line => Step::Line(line.ok()),
            recv(completions) -> event => Step::Completion(event.ok()),
        };
        match step {
            Step::Line(Some(line)) => match parse_line(&line) {
                Ok(ReplCommand::Quit) => {
                    quit = true;
                    break;
                }
                Ok(cmd) => handle(&mut session, cmd, mode, out)?,
                Err(msg) => writeln!(out, "{msg}")?,
            },
            Step::Completion(Some(event)) => {
                session.dispatch(event);
                print_panel(&session, mode, out)?;
            }
            Step::Line(None) | Step::Completion(None) => break,
        }
    }

    // `quit` abandons an in-flight request; end of input waits for it.
    if session.state().loading && !quit {
        debug!("input closed with a request in flight; waiting for it");
        session.wait_forever();
        print_panel(&session, mode, out)?;
    }
    Ok(session
        .state()
        .outcome
        .as_ref()
        .is_some_and(|o| o.is_success()))
}

fn handle<C: IPredictionClient + 'static>(
    session: &mut Session<C>,
    cmd: ReplCommand,
    mode: DisplayMode,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        ReplCommand::Set(field, value) => {
            session.edit(field, value);
        }
        ReplCommand::Predict => {
            let state = session.submit();
            if state.loading {
                writeln!(out, "{}", submit_label(state))?;
            } else {
                print_panel(session, mode, out)?;
            }
        }
        ReplCommand::Close => {
            session.close_result();
        }
        ReplCommand::Show => {
            let state = session.state();
            for field in InputField::ALL {
                writeln!(out, "{}: {}", field.label(), state.inputs.get(field))?;
            }
            writeln!(out, "[{}]", submit_label(state))?;
        }
        ReplCommand::Help => writeln!(out, "{HELP}")?,
        ReplCommand::Blank | ReplCommand::Quit => {}
    }
    Ok(())
}

fn print_panel<C: IPredictionClient + 'static>(
    session: &Session<C>,
    mode: DisplayMode,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(panel) = render_panel(session.state(), mode) {
        writeln!(out, "{panel}")?;
    }
    Ok(())
}
