//! Holds the rendered snapshot and turns intents into Sync Core calls.
//!
//! Every successful mutation is followed by a full refresh. When a gesture
//! fails, the previous snapshot stays on screen.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use todo_core::{ApiError, Snapshot, Todo, TodoId, TodoService, Transport, UpdateTodo};
use tracing::{debug, warn};

use crate::intent::{self, Intent, ParseError, HELP};
use crate::render::render;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no item #{0} in the current list")]
    UnknownItem(TodoId),
}

pub struct App<'a, T> {
    service: &'a TodoService<T>,
    snapshot: Snapshot,
}

impl<'a, T: Transport> App<'a, T> {
    /// Starts with an empty snapshot; call `refresh` to load the first one.
    pub fn new(service: &'a TodoService<T>) -> Self {
        Self {
            service,
            snapshot: Snapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn refresh(&mut self) -> Result<(), ShellError> {
        self.snapshot = self.service.snapshot()?;
        Ok(())
    }

    /// Apply one gesture. `Help` and `Quit` belong to the caller and leave
    /// the snapshot alone.
    pub fn dispatch(&mut self, intent: &Intent) -> Result<(), ShellError> {
        debug!(?intent, "dispatching");
        let next = match intent {
            Intent::Submit(name) => self.service.mutate_and_refresh(|s| s.create(name))?,
            Intent::Toggle(id) => {
                let update = UpdateTodo::toggled(self.item(*id)?);
                self.service
                    .mutate_and_refresh(|s| s.update(*id, &update.name, update.is_done))?
            }
            Intent::Delete(id) => {
                self.item(*id)?;
                self.service.mutate_and_refresh(|s| s.delete(*id))?
            }
            Intent::Refresh => self.service.snapshot()?,
            Intent::Help | Intent::Quit => return Ok(()),
        };
        self.snapshot = next;
        Ok(())
    }

    fn item(&self, id: TodoId) -> Result<&Todo, ShellError> {
        self.snapshot.get(id).ok_or(ShellError::UnknownItem(id))
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        render(&self.snapshot, out)
    }

    /// Run a single gesture against a freshly loaded snapshot and print the
    /// result.
    pub fn run_once(&mut self, intent: &Intent, out: &mut impl Write) -> anyhow::Result<()> {
        self.refresh()?;
        self.dispatch(intent)?;
        self.render(out)?;
        Ok(())
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Errors from individual gestures are reported on `err` and the session
    /// continues; only I/O failures on the streams end it.
    pub fn run_interactive(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        match self.refresh() {
            Ok(()) => self.render(out)?,
            Err(e) => report(err, &e)?,
        }

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let intent = match intent::parse_line(&line) {
                Ok(Some(intent)) => intent,
                Ok(None) => continue,
                Err(e) => {
                    report_parse(err, &e)?;
                    continue;
                }
            };

            match intent {
                Intent::Quit => break,
                Intent::Help => writeln!(out, "{HELP}")?,
                other => match self.dispatch(&other) {
                    Ok(()) => self.render(out)?,
                    Err(e) => report(err, &e)?,
                },
            }
        }
        Ok(())
    }
}

fn report(err: &mut impl Write, e: &ShellError) -> io::Result<()> {
    warn!(error = %e, "gesture failed");
    writeln!(err, "error: {e}")
}

fn report_parse(err: &mut impl Write, e: &ParseError) -> io::Result<()> {
    writeln!(err, "error: {e}")
}
