//! Default output. One `write_all` per line keeps lines from interleaving as
//! long as they stay under the pipe buffer size.

use super::{Message, Output};
use crate::line::EOL;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrOutput;

impl Output for StderrOutput {
    fn write(&self, msg: &mut Message<'_, '_>) -> Result<(), crate::Error> {
        let line = msg.terminate(EOL);
        io::stderr().lock().write_all(line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
