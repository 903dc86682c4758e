mod alphabet;
mod clipboard;
mod command;
mod config;
mod display;
mod error;
mod generator;
mod input;
mod logging;
mod password;
mod session;
mod strength;
mod text;

use std::io::{self, Write};

use clap::Parser;
use log::warn;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::command::{Cli, Kind};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = ctrlc::set_handler(|| {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        let _ = stdout.reset();
        let _ = writeln!(stdout);
        std::process::exit(130);
    }) {
        warn!("could not install ctrl-c handler: {}", err);
    }

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    if let Err(err) = run(cli.kind, &mut stdout) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = display::error(&mut stderr, &err.to_string());
        let code = match err {
            Error::EmptyAlphabet => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run(kind: Option<Kind>, stdout: &mut StandardStream) -> Result<()> {
    let mut clipboard = SystemClipboard::new();

    match kind {
        None => session(Config::default(), stdout, &mut clipboard),
        Some(Kind::Session(settings)) => session(settings.to_config(), stdout, &mut clipboard),
        Some(Kind::Generate { settings, copy }) => {
            let config = settings.to_config();
            let mut generator = Generator::new();
            let outcome = generator.generate(&config.selection, &config.request, &mut rand::thread_rng())?;
            display::report(stdout, &outcome.report)?;
            display::passwords(stdout, &outcome.batch)?;

            if let Some(number) = copy {
                let password = generator.password(number).ok_or(Error::NoSuchPassword(number))?;
                clipboard.write_text(password);
                display::write(stdout, text::MSG_COPIED)?;
            }
            Ok(())
        }
        Some(Kind::Alphabet(settings)) => {
            let alphabet = alphabet::build(&settings.to_config().selection);
            writeln!(stdout, "{}", alphabet)?;
            display::alphabet_size(stdout, alphabet.len())?;
            Ok(())
        }
    }
}

fn session(config: Config, stdout: &mut StandardStream, clipboard: &mut SystemClipboard) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdout, clipboard, rand::thread_rng(), config);
    session.run(stdin.lock())
}
