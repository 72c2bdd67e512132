//! Local syslog over the `/dev/log` datagram socket (RFC 3164 framing).
//!
//! syslog stamps its own time and pid, so pair this output with a mask
//! without [`FieldMask::CONTEXT`](crate::fmt::FieldMask::CONTEXT); the text
//! sent starts at the tag either way.

use super::{Message, Output};
use crate::level::Level;
use std::io::Write;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};

const DEFAULT_SOCKET: &str = "/dev/log";

/// `LOG_USER`
const FACILITY_USER: u8 = 1;

#[derive(Debug)]
pub struct SyslogOutput {
    socket: UnixDatagram,
    ident: String,
    pid: u32,
}

impl SyslogOutput {
    /// Connects to the system socket.
    ///
    /// # Errors
    /// [`crate::Error::OutputOpen`] when the socket is unavailable.
    pub fn open(ident: impl Into<String>) -> Result<Self, crate::Error> {
        Self::connect(DEFAULT_SOCKET, ident)
    }

    /// Connects to a datagram socket at `path`.
    ///
    /// # Errors
    /// [`crate::Error::OutputOpen`] when the socket is unavailable.
    pub fn connect(path: impl AsRef<Path>, ident: impl Into<String>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let open_err = |source| crate::Error::OutputOpen {
            path: PathBuf::from(path),
            source,
        };
        let socket = UnixDatagram::unbound().map_err(open_err)?;
        socket.connect(path).map_err(open_err)?;
        Ok(Self {
            socket,
            ident: ident.into(),
            pid: std::process::id(),
        })
    }
}

/// syslog severity for a level.
#[must_use]
pub const fn severity(level: Level) -> u8 {
    match level {
        Level::Verbose | Level::Debug => 7,
        Level::Info => 6,
        Level::Warn => 4,
        Level::Error => 3,
        Level::Fatal => 0,
    }
}

impl Output for SyslogOutput {
    fn write(&self, msg: &mut Message<'_, '_>) -> Result<(), crate::Error> {
        let text = msg.from_tag();
        let mut packet = Vec::with_capacity(text.len() + self.ident.len() + 24);
        write!(
            packet,
            "<{}>{}[{}]: ",
            FACILITY_USER * 8 + severity(msg.level()),
            self.ident,
            self.pid
        )?;
        packet.extend_from_slice(text);
        self.socket.send(&packet)?;
        Ok(())
    }
}
