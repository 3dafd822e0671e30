use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use catalog_core::{AppController, AppViewModel, CatalogConfig, RenderSink};
use catalog_engine::FetchSettings;
use catalog_logging::{catalog_info, catalog_warn};

use super::command::{self, Command, HELP};
use super::effects::EffectRunner;
use super::{logging, render};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    catalog_info!("Catalog viewer starting");

    let runner =
        EffectRunner::new(FetchSettings::default()).context("failed to start record engine")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_stdin_reader(cmd_tx);

    let mut controller =
        AppController::new(CatalogConfig::default(), TerminalSink::new(io::stdout()));
    println!("Type 'help' for commands.");
    runner.run(controller.start());

    loop {
        while let Some(msg) = runner.poll() {
            runner.run(controller.dispatch(msg));
        }
        match cmd_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Dispatch(msg)) => runner.run(controller.dispatch(msg)),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    catalog_info!("Catalog viewer exiting");
    Ok(())
}

fn spawn_stdin_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match command::parse(&line) {
                Ok(cmd) => {
                    if cmd_tx.send(cmd).is_err() {
                        return;
                    }
                }
                Err(command::ParseError::Empty) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });
}

/// Writes each rendered frame to `out`, separated by a blank line.
struct TerminalSink<W> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn write_frame(&mut self, view: &AppViewModel) -> io::Result<()> {
        for line in render::render(view) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, view: &AppViewModel) {
        if let Err(err) = self.write_frame(view) {
            catalog_warn!("Failed to write frame: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Effect, Msg};

    #[test]
    fn controller_frames_reach_the_terminal() {
        let config = CatalogConfig {
            first_id: 1,
            last_id: 2,
            ..CatalogConfig::default()
        };
        let mut controller = AppController::new(config, TerminalSink::new(Vec::new()));

        let effects = controller.start();
        assert_eq!(
            effects,
            vec![Effect::LoadRange {
                first: 1,
                last: 2,
                batch_size: catalog_core::BATCH_SIZE
            }]
        );
        controller.dispatch(Msg::LoadFailed("offline".to_string()));

        let output = String::from_utf8(controller.sink().out.clone()).unwrap();
        assert_eq!(
            output,
            format!(
                "Loading records... 0/2\n\nLoad failed\n{}\n  cause: offline\n\n",
                catalog_core::LOAD_FAILURE_MESSAGE
            )
        );
    }
}
