//! Default logging setup for the phonebook binaries
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Environment variable holding the log filter, defaults to `info`.
pub const FILTER_ENV: &str = "PHONEBOOK_LOG";

/// Environment variable controlling colored output (`auto`, `always` or `never`).
pub const STYLE_ENV: &str = "PHONEBOOK_LOG_STYLE";

/// Perform the default logging setup used by phonebook binaries
///
/// Each record is prefixed with the time elapsed since setup. Whenever the target of a record
/// differs from the previous one, a header line naming the new target is written first.
pub fn setup() {
    builder().init();
}

/// Same as [`setup`], but does nothing if a logger is already installed.
pub fn try_setup() -> Result<(), log::SetLoggerError> {
    builder().try_init()
}

fn builder() -> env_logger::Builder {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, "info")
            .write_style(STYLE_ENV),
    );

    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        {
            let mut last_target = last_target
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            if target != *last_target {
                last_target.clear();
                last_target.push_str(target);

                writeln!(
                    buf,
                    "{} {}",
                    format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                    format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
                )?;
            }
        }

        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });

    builder
}
