//! Output plumbing shared by the commands
//!
//! Long diffs go through the `minus` pager when stdout is a terminal and straight
//! to stdout otherwise (pipes, redirects, tests).

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write` so commands can print to it like
/// any other writer.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where command output ends up.
pub enum Output {
    Pager(Pager),
    Stdout,
}

impl Output {
    /// The pager when asked for and stdout is a terminal, stdout otherwise.
    pub fn select(use_pager: bool) -> Self {
        if use_pager && io::stdout().is_terminal() {
            Output::Pager(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
            Output::Stdout => Box::new(io::stdout()),
        }
    }

    /// Shows everything written so far; a no-op for stdout.
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Pager(pager) => minus::page_all(pager)?,
            Output::Stdout => io::stdout().flush()?,
        }

        Ok(())
    }
}
