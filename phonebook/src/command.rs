//! Parsing of the line based command language.
use std::{error::Error, fmt};

/// A single parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert a contact or update its number.
    Insert {
        /// Contact name, may contain single spaces.
        name: String,
        /// Phone number, always a single word.
        number: String,
    },
    /// Look up a contact by name.
    Search {
        /// Contact name, may contain single spaces.
        name: String,
    },
    /// Print the whole table.
    Print,
    /// Print table statistics.
    Stats,
    /// Print the command summary.
    Help,
    /// Stop processing commands.
    Quit,
}

/// Summary of all commands, printed by `help`.
pub const HELP: &str = "\
commands:
  insert NAME NUMBER   add a contact or update its number (alias: add)
  search NAME          look up a contact (alias: find)
  print                list all buckets (alias: dump)
  stats                show entry count, load factor and longest chain
  help                 show this summary
  quit                 stop (alias: exit)
";

/// Error for a line that is not a valid command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    Unknown(String),
    /// The command is missing arguments.
    MissingArguments {
        /// Name of the command as typed.
        command: String,
        /// Expected argument shape.
        usage: &'static str,
    },
    /// The command takes no arguments, but some were given.
    UnexpectedArguments {
        /// Name of the command as typed.
        command: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(command) => {
                write!(f, "unknown command {command:?}, try \"help\"")
            }
            CommandError::MissingArguments { command, usage } => {
                write!(f, "missing arguments, usage: {command} {usage}")
            }
            CommandError::UnexpectedArguments { command } => {
                write!(f, "{command} takes no arguments")
            }
        }
    }
}

impl Error for CommandError {}

impl Command {
    /// Parses a single line.
    ///
    /// Returns `Ok(None)` for blank lines and for comments starting with `#`. Words are separated
    /// by any amount of whitespace. For `insert` the last word is the number and all words before
    /// it form the name, joined by single spaces.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        if command.starts_with('#') {
            return Ok(None);
        }
        let args: Vec<&str> = words.collect();

        let no_args = |parsed: Command| {
            if args.is_empty() {
                Ok(Some(parsed))
            } else {
                Err(CommandError::UnexpectedArguments {
                    command: command.to_owned(),
                })
            }
        };

        match command {
            "insert" | "add" => match args.split_last() {
                Some((number, name)) if !name.is_empty() => Ok(Some(Command::Insert {
                    name: name.join(" "),
                    number: (*number).to_owned(),
                })),
                _ => Err(CommandError::MissingArguments {
                    command: command.to_owned(),
                    usage: "NAME NUMBER",
                }),
            },
            "search" | "find" => {
                if args.is_empty() {
                    Err(CommandError::MissingArguments {
                        command: command.to_owned(),
                        usage: "NAME",
                    })
                } else {
                    Ok(Some(Command::Search {
                        name: args.join(" "),
                    }))
                }
            }
            "print" | "dump" => no_args(Command::Print),
            "stats" => no_args(Command::Stats),
            "help" => no_args(Command::Help),
            "quit" | "exit" => no_args(Command::Quit),
            _ => Err(CommandError::Unknown(command.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(name: &str, number: &str) -> Command {
        Command::Insert {
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }

    #[test]
    fn blank_and_comments() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t"), Ok(None));
        assert_eq!(Command::parse("# insert Alice 111"), Ok(None));
        assert_eq!(Command::parse("  #comment"), Ok(None));
    }

    #[test]
    fn insert_commands() {
        assert_eq!(Command::parse("insert Alice 111"), Ok(Some(insert("Alice", "111"))));
        assert_eq!(Command::parse("add  Bob\t222 "), Ok(Some(insert("Bob", "222"))));
        assert_eq!(
            Command::parse("insert Mary  Ann Smith 555-0100"),
            Ok(Some(insert("Mary Ann Smith", "555-0100")))
        );
        assert!(matches!(
            Command::parse("insert Alice"),
            Err(CommandError::MissingArguments { usage: "NAME NUMBER", .. })
        ));
        assert!(matches!(
            Command::parse("insert"),
            Err(CommandError::MissingArguments { .. })
        ));
    }

    #[test]
    fn search_commands() {
        assert_eq!(
            Command::parse("search Bob"),
            Ok(Some(Command::Search { name: "Bob".to_owned() }))
        );
        assert_eq!(
            Command::parse("find Mary Ann"),
            Ok(Some(Command::Search { name: "Mary Ann".to_owned() }))
        );
        assert!(matches!(
            Command::parse("search"),
            Err(CommandError::MissingArguments { usage: "NAME", .. })
        ));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("print"), Ok(Some(Command::Print)));
        assert_eq!(Command::parse("dump"), Ok(Some(Command::Print)));
        assert_eq!(Command::parse("stats"), Ok(Some(Command::Stats)));
        assert_eq!(Command::parse("help"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse(" exit "), Ok(Some(Command::Quit)));
        assert_eq!(
            Command::parse("print everything"),
            Err(CommandError::UnexpectedArguments {
                command: "print".to_owned()
            })
        );
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("delete Alice").unwrap_err();
        assert_eq!(err, CommandError::Unknown("delete".to_owned()));
        assert_eq!(err.to_string(), "unknown command \"delete\", try \"help\"");
    }
}
