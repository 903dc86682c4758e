use clap::{Args, Parser, Subcommand};

use crate::alphabet::{Category, Selection};
use crate::config::{self, Config, Request, DEFAULT_COUNT, DEFAULT_LENGTH};

#[derive(Debug, Parser)]
#[command(name = "pwlab")]
#[command(about = "Random password generator with a brute-force strength estimate (not cryptographically secure)")]
#[command(version)]
pub struct Cli {
    /// More log output on stderr; repeat for debug
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub kind: Option<Kind>,
}

#[derive(Debug, Subcommand)]
pub enum Kind {
    /// Interactive session (the default)
    Session(Settings),
    /// Generate one batch, print it with its strength report
    Generate {
        #[command(flatten)]
        settings: Settings,
        /// Copy password number N of the batch to the clipboard
        #[arg(long, value_name = "N")]
        copy: Option<usize>,
    },
    /// Print the alphabet the flags select
    Alphabet(Settings),
}

#[derive(Debug, Args)]
pub struct Settings {
    /// Password length, clamped to 4..=20
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, value_parser = config::parse_number)]
    pub length: usize,
    /// Number of passwords, clamped to 1..=100
    #[arg(short, long, default_value_t = DEFAULT_COUNT, value_parser = config::parse_number)]
    pub count: usize,
    #[arg(long)]
    pub no_upper: bool,
    #[arg(long)]
    pub no_lower: bool,
    #[arg(long)]
    pub no_digits: bool,
    /// Leave out ! # $ % &
    #[arg(long)]
    pub no_symbols: bool,
    /// Add ( ) " '
    #[arg(long)]
    pub extra_symbols: bool,
}

impl Settings {
    pub fn to_config(&self) -> Config {
        let mut selection = Selection::none();
        selection.set(Category::Uppercase, !self.no_upper);
        selection.set(Category::Lowercase, !self.no_lower);
        selection.set(Category::Digits, !self.no_digits);
        selection.set(Category::Symbols, !self.no_symbols);
        selection.set(Category::ExtraSymbols, self.extra_symbols);
        Config {
            selection,
            request: Request::new(self.length, self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_flags() {
        let cli = Cli::parse_from([
            "pwlab", "generate", "--length", "30", "-c", "3", "--no-symbols", "--extra-symbols", "--copy", "1",
        ]);
        let Some(Kind::Generate { settings, copy }) = cli.kind else {
            panic!("expected generate")
        };
        let config = settings.to_config();
        assert_eq!(copy, Some(1));
        assert_eq!(config.request, Request { length: 20, count: 3 });
        assert_eq!(config.selection.alphabet_size(), 26 + 26 + 10 + 4);
    }

    #[test]
    fn huge_flags_are_clamped() {
        let cli = Cli::parse_from([
            "pwlab", "generate", "-l", "99999999999999999999999999", "-c", "99999999999999999999999999",
        ]);
        let Some(Kind::Generate { settings, .. }) = cli.kind else {
            panic!("expected generate")
        };
        assert_eq!(settings.to_config().request, Request { length: 20, count: 100 });
        assert!(Cli::try_parse_from(["pwlab", "generate", "-l", "six"]).is_err());
    }

    #[test]
    fn no_subcommand() {
        let cli = Cli::parse_from(["pwlab", "-vv"]);
        assert!(cli.kind.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
