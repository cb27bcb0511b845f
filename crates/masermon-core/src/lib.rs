//! Core functionalities: serial links, line framing, relay pumps, traffic log,
//! atomic textfile publishing.

pub mod framer;
pub mod logsink;
pub mod pump;
pub mod serial;
pub mod textfile;

pub use framer::{ByteDecodeError, LineFramer, Terminator};
pub use logsink::TrafficLog;
pub use pump::{PumpEvent, RelayPump};
pub use serial::{ByteLink, LinkError, SerialLink};
pub use textfile::TextfilePublisher;
