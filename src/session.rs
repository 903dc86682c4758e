use std::io::{self, BufRead};

use log::info;
use rand::Rng;
use termcolor::WriteColor;

use crate::alphabet;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::display;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::input::{self, Action};
use crate::text;

/// Interactive stand-in for the generator form: the settings can change at
/// any time, results only change on `generate`.
pub struct Session<'a, W: WriteColor, C: Clipboard, R: Rng> {
    out:       &'a mut W,
    clipboard: &'a mut C,
    rng:       R,
    config:    Config,
    generator: Generator,
}

impl<'a, W: WriteColor, C: Clipboard, R: Rng> Session<'a, W, C, R> {
    pub fn new(out: &'a mut W, clipboard: &'a mut C, rng: R, config: Config) -> Self {
        Session {
            out,
            clipboard,
            rng,
            config,
            generator: Generator::new(),
        }
    }

    #[cfg(test)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Runs until `quit` or end of input. Bad lines are reported and skipped.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> Result<()> {
        display::write(self.out, text::MSG_BANNER)?;
        self.show_settings()?;

        let mut line = String::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let action = match input::parse(&line) {
                Ok(action) => action,
                Err(err) => {
                    display::error(self.out, &err.to_string())?;
                    continue;
                }
            };
            if action == Action::Quit {
                break;
            }
            match self.apply(action) {
                Ok(()) => (),
                Err(Error::Io(err)) => return Err(Error::Io(err)),
                Err(err) => display::error(self.out, &err.to_string())?,
            }
        }
        display::write(self.out, text::MSG_BYE)?;
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Toggle(category) => {
                let on = self.config.selection.toggle(category);
                writeln!(self.out, "{}: {}", category.label(), if on { "on" } else { "off" })?;
                display::alphabet_size(self.out, self.config.selection.alphabet_size())?;
            }
            Action::Length(n) => {
                let length = self.config.request.set_length(n);
                writeln!(self.out, "password length: {}", length)?;
            }
            Action::Count(n) => {
                let count = self.config.request.set_count(n);
                writeln!(self.out, "password count: {}", count)?;
            }
            Action::Generate => {
                let Config { selection, request } = self.config;
                self.generator.generate(&selection, &request, &mut self.rng)?;
                self.show_results()?;
            }
            Action::Copy(number) => {
                let password = self
                    .generator
                    .password(number)
                    .ok_or(Error::NoSuchPassword(number))?;
                self.clipboard.write_text(password);
                info!("copied password {}", number);
                display::write(self.out, text::MSG_COPIED)?;
            }
            Action::Alphabet => {
                let alphabet = alphabet::build(&self.config.selection);
                writeln!(self.out, "alphabet: {}", alphabet)?;
                display::alphabet_size(self.out, alphabet.len())?;
            }
            Action::Show => {
                self.show_settings()?;
                self.show_results()?;
            }
            Action::Help => display::write(self.out, text::MSG_HELP)?,
            Action::Quit | Action::Nothing => (),
        }
        Ok(())
    }

    fn show_settings(&mut self) -> io::Result<()> {
        display::selection(self.out, &self.config.selection)?;
        writeln!(
            self.out,
            "password length: {}, count: {}",
            self.config.request.length, self.config.request.count
        )
    }

    fn show_results(&mut self) -> io::Result<()> {
        match self.generator.outcome() {
            Some(outcome) => {
                display::report(self.out, &outcome.report)?;
                display::passwords(self.out, &outcome.batch)
            }
            None => display::write(self.out, text::MSG_NOTHING_YET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use rand::{rngs::StdRng, SeedableRng};
    use termcolor::NoColor;

    fn run(script: &str, clipboard: &mut MemoryClipboard) -> (String, Config, usize) {
        let mut out = NoColor::new(Vec::new());
        let (config, batch_len) = {
            let mut session = Session::new(
                &mut out,
                clipboard,
                StdRng::seed_from_u64(42),
                Config::default(),
            );
            session.run(script.as_bytes()).expect("running session");
            let batch_len = session.generator().outcome().map_or(0, |o| o.batch.len());
            (*session.config(), batch_len)
        };
        let text = String::from_utf8(out.into_inner()).expect("utf8");
        (text, config, batch_len)
    }

    #[test]
    fn generate_and_copy() {
        let mut clipboard = MemoryClipboard::default();
        let (out, config, batch_len) = run("4\nlength 6\ncount 3\ng\ncopy 2\nq\n", &mut clipboard);

        assert_eq!(config.selection.alphabet_size(), 62);
        assert_eq!(batch_len, 3);
        assert!(out.contains("56,800,235,584"));
        assert!(out.contains(text::MSG_VERDICT_MET));
        assert!(out.contains(text::MSG_COPIED));
        assert_eq!(clipboard.written.len(), 1);
        assert_eq!(clipboard.written[0].len(), 6);
    }

    #[test]
    fn empty_alphabet_keeps_old_results() {
        let mut clipboard = MemoryClipboard::default();
        let (out, config, batch_len) = run("count 2\ng\n1\n2\n3\n4\ng\n", &mut clipboard);

        assert_eq!(config.selection.alphabet_size(), 0);
        assert_eq!(batch_len, 2);
        assert!(out.contains("error: no character category selected"));
        assert!(out.ends_with(&format!("> {}\n", text::MSG_BYE)));
    }

    #[test]
    fn bad_input_does_not_end_session() {
        let mut clipboard = MemoryClipboard::default();
        let (out, config, batch_len) =
            run("length abc\nfly\ncopy 1\nlength 99\ncount 0\n", &mut clipboard);

        assert!(out.contains("error: not a number: abc"));
        assert!(out.contains("error: unknown command: fly"));
        assert!(out.contains("error: no password number 1"));
        assert_eq!(config.request.length, 20);
        assert_eq!(config.request.count, 1);
        assert_eq!(batch_len, 0);
        assert!(clipboard.written.is_empty());
    }

    #[test]
    fn oversized_numbers_clamp_like_cli_flags() {
        let mut clipboard = MemoryClipboard::default();
        let (out, config, batch_len) = run(
            "5\nlength 99999999999999999999999999\ncount 99999999999999999999999999\ng\ncopy 100\ncopy 101\n",
            &mut clipboard,
        );

        assert!(!out.contains("not a number"));
        assert_eq!(config.request.length, 20);
        assert_eq!(config.request.count, 100);
        assert_eq!(config.selection.alphabet_size(), 71);
        assert_eq!(batch_len, 100);
        assert_eq!(clipboard.written.len(), 1);
        assert_eq!(clipboard.written[0].len(), 20);
        assert!(out.contains("error: no password number 101"));
    }

    #[test]
    fn show_before_generate() {
        let mut clipboard = MemoryClipboard::default();
        let (out, _, _) = run("s\na\n", &mut clipboard);
        assert!(out.contains(text::MSG_NOTHING_YET));
        assert!(out.contains("alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&\n"));
    }
}
