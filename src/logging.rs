use log::LevelFilter;

/// Logs go to stderr so they never mix with generated passwords on stdout.
/// `RUST_LOG` overrides the level picked from `-v` flags.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();
}
