use std::io;
use std::io::{Read, Write};
use std::time::Duration;

use crate::framer::ByteDecodeError;

/// Fixed link settings for the maser console port: 2400/7-N-1.
pub const BAUD_RATE: u32 = 2_400;

/// serialport cannot block forever; a read that times out is reported as
/// `Ok(None)` so workers just keep waiting.
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Fatal error for a relay worker: the link died or the stream stopped
/// being decodable.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("serial port: {0}")]
    Port(#[from] serialport::Error),
    #[error("i/o: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] ByteDecodeError),
}

/// Blocking single-byte transport, one end of a link.
///
/// The trait seam exists so pumps can be driven by scripted in-memory links
/// in tests.
pub trait ByteLink: Send {
    /// Blocking read of one byte. `Ok(None)` means "nothing yet, keep
    /// waiting" (read timeout); errors are fatal for the owning worker.
    fn read_byte(&mut self) -> Result<Option<u8>, LinkError>;

    /// Synchronous write-through of one byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError>;
}

/// A serial device opened with the fixed maser settings.
pub struct SerialLink {
    name: String,
    port: Box<dyn serialport::SerialPort>,
}

impl SerialLink {
    pub fn open(path: &str) -> Result<Self, LinkError> {
        let port = serialport::new(path, BAUD_RATE)
            .data_bits(serialport::DataBits::Seven)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open()?;
        Ok(Self {
            name: path.to_string(),
            port,
        })
    }

    /// Second handle onto the same device, used as the write side of the
    /// opposite relay direction.
    pub fn try_clone(&self) -> Result<Self, LinkError> {
        Ok(Self {
            name: self.name.clone(),
            port: self.port.try_clone()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ByteLink for SerialLink {
    fn read_byte(&mut self) -> Result<Option<u8>, LinkError> {
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        self.port.write_all(&[byte])?;
        Ok(())
    }
}
