//! Executes commands against a contact table.
use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use chain_table::{ChainTable, InsertOutcome};

use crate::command::{Command, HELP};

/// A contact table together with the commands that operate on it.
#[derive(Debug)]
pub struct Session {
    table: ChainTable,
}

impl Session {
    /// Starts a session with the given table.
    pub fn new(table: ChainTable) -> Self {
        Session { table }
    }

    /// Returns the table of this session.
    pub fn table(&self) -> &ChainTable {
        &self.table
    }

    /// Executes a single command, writing its output to `out`.
    ///
    /// Returns [`ControlFlow::Break`] for [`Command::Quit`].
    pub fn execute(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Insert { name, number } => match self.table.insert(&name, number) {
                InsertOutcome::Inserted => writeln!(out, "added {name}")?,
                InsertOutcome::Updated => writeln!(out, "updated {name}")?,
            },
            Command::Search { name } => match self.table.search(&name) {
                Some(contact) => writeln!(out, "{contact}")?,
                None => writeln!(out, "{name}: not found")?,
            },
            Command::Print => write!(out, "{}", self.table.dump())?,
            Command::Stats => writeln!(
                out,
                "entries: {}, buckets: {}, load factor: {:.2}, longest chain: {}",
                self.table.len(),
                self.table.bucket_count(),
                self.table.load_factor(),
                self.table.longest_chain(),
            )?,
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Reads commands line by line from `input` until it is exhausted or a `quit` command is seen.
    ///
    /// Invalid lines are reported to `out` and skipped.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        for (line_index, line) in input.lines().enumerate() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => (),
                Ok(Some(command)) => {
                    log::trace!("line {}: {command:?}", line_index + 1);
                    if self.execute(command, &mut out)?.is_break() {
                        log::debug!("quit at line {}", line_index + 1);
                        break;
                    }
                }
                Err(err) => {
                    log::warn!("line {}: {err}", line_index + 1);
                    writeln!(out, "error: {err}")?;
                }
            }
        }
        out.flush()?;
        log::info!(
            "session ended with {} contacts in {} buckets",
            self.table.len(),
            self.table.bucket_count()
        );
        Ok(())
    }
}
