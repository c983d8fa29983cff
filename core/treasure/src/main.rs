mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use cli::{parse_args, print_completion, Config, ParseOutcome};
use domain::ScreenCommand;
use ports::inbound::RunScreenApp;
use wiring::{wire_screen, App};

/// REPL を回す Runner（コマンドのディスパッチは main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunScreenApp for Runner {
    fn run(&mut self, _config: Config) -> Result<i32, Error> {
        let _ = self.app.log.log(
            &LogRecord::new(LogLevel::Info, "screen started")
                .component("cli")
                .event("lifecycle"),
        );

        self.app.screen.startup()?;
        println!("Type 'help' for commands.");

        let stdin = io::stdin();
        loop {
            if self.app.interrupt.is_interrupted() {
                break;
            }
            eprint!("treasure> ");
            let _ = io::stderr().flush();

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| Error::io_msg(e.to_string()))?;
            if read == 0 {
                break; // EOF
            }

            let command = match ScreenCommand::parse(&line) {
                Ok(None) => continue,
                Ok(Some(ScreenCommand::Quit)) => break,
                Ok(Some(cmd)) => cmd,
                Err(e) => {
                    eprintln!("treasure: {}", e);
                    continue;
                }
            };

            if let Err(e) = self.dispatch(&command) {
                eprintln!("treasure: {}", e);
                let _ = self.app.log.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .component("cli")
                        .event("error")
                        .field("command", serde_json::json!(command.name())),
                );
            }
        }

        let _ = self.app.log.log(
            &LogRecord::new(LogLevel::Info, "screen finished")
                .component("cli")
                .event("lifecycle"),
        );
        Ok(0)
    }
}

impl Runner {
    fn dispatch(&mut self, command: &ScreenCommand) -> Result<(), Error> {
        let screen = &mut self.app.screen;
        match command {
            ScreenCommand::Help => {
                print_repl_help();
                Ok(())
            }
            ScreenCommand::List => screen.list_rows(),
            ScreenCommand::ShowSaved => screen.show_saved(),
            ScreenCommand::Filter(filter) => screen.set_filter(*filter),
            ScreenCommand::Add(coordinate) => screen.tap_map(*coordinate),
            ScreenCommand::Delete(index) => screen.delete_row(*index),
            ScreenCommand::Open(index) => screen.open_row(*index),
            ScreenCommand::Share => screen.share_selected(),
            ScreenCommand::Search(query) => screen.search(query),
            ScreenCommand::Locate => screen.locate(),
            ScreenCommand::Quit => Ok(()),
        }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("treasure: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_screen(&config)?;
    let mut runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: treasure [options]");
}

fn print_help() {
    println!("Usage: treasure [options]");
    println!("Options:");
    println!("  -h, --help                  Show this help message");
    println!("  -p, --provider <provider>   Place search provider: fixed (offline, default) or nominatim");
    println!("  -l, --log-file <path>       Append JSONL diagnostics to <path>. Default: $TREASURE_LOG if set.");
    println!("  --no-interactive            Do not prompt for names; map taps are cancelled (CI-friendly).");
    println!("  --generate <shell>          Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  TREASURE_LOCATION   \"lat,lon\" used as the current position for 'locate'.");
    println!("  TREASURE_PLACES_URL Base URL for the nominatim provider.");
    println!("  TREASURE_LOG        Diagnostics file when -l is not given.");
    println!();
    println!("Description:");
    println!("  Interactive screen over a list of treasures: rows, map annotations,");
    println!("  category filter, place search and external navigation hand-off.");
}

fn print_repl_help() {
    println!("Commands:");
    println!("  list                   Render the visible rows");
    println!("  filter <category>      all, food, cafe or other");
    println!("  add <lat,lon>          Tap the map; you will be asked for a name");
    println!("  delete <row>           Remove the row (rows start at 1)");
    println!("  open <row>             Select the row and open driving directions");
    println!("  share                  Share the selected treasure");
    println!("  search <query>         Search places; results replace the map markers");
    println!("  locate                 Center on the current position, then nearby search");
    println!("  show                   Back to the saved markers");
    println!("  quit                   Exit");
}
