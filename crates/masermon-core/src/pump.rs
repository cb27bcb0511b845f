use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;

use crate::framer::{LineFramer, Terminator};
use crate::logsink::TrafficLog;
use crate::serial::{ByteLink, LinkError};

/// Reported when a pump worker dies; the process treats this as fatal.
#[derive(Debug)]
pub struct PumpEvent {
    pub label: &'static str,
    pub error: LinkError,
}

/// One direction of the relay.
///
/// Reads one byte at a time from its source, forwards it unmodified to the
/// destination (when relaying) before any decode work, and independently
/// accumulates the byte into a line framer. Completed frames are written to
/// the shared traffic log and handed to an optional frame sink (the
/// instrument direction feeds the metrics decoder this way).
pub struct RelayPump {
    label: &'static str,
    source: Box<dyn ByteLink>,
    dest: Option<Box<dyn ByteLink>>,
    framer: LineFramer,
    log: Arc<TrafficLog>,
    frame_sink: Option<Box<dyn FnMut(&str) + Send>>,
}

impl RelayPump {
    pub fn new(
        label: &'static str,
        source: Box<dyn ByteLink>,
        dest: Option<Box<dyn ByteLink>>,
        policy: Terminator,
        log: Arc<TrafficLog>,
    ) -> Self {
        Self {
            label,
            source,
            dest,
            framer: LineFramer::new(policy),
            log,
            frame_sink: None,
        }
    }

    /// Attach a handler for completed frames, called after the frame is
    /// logged.
    pub fn with_frame_sink(mut self, sink: impl FnMut(&str) + Send + 'static) -> Self {
        self.frame_sink = Some(Box::new(sink));
        self
    }

    /// Drive the pump until the link fails. Only returns on error; clean
    /// shutdown happens by process exit while the worker blocks in a read.
    pub fn run(mut self) -> Result<(), LinkError> {
        loop {
            let byte = match self.source.read_byte()? {
                Some(byte) => byte,
                None => continue,
            };

            // Forwarding must not wait on framing or metric work.
            if let Some(dest) = self.dest.as_mut() {
                dest.write_byte(byte)?;
            }

            if let Some(frame) = self.framer.feed(byte)? {
                self.log.message(&format!("{}: {}", self.label, frame));
                if let Some(sink) = self.frame_sink.as_mut() {
                    sink(&frame);
                }
            }
        }
    }

    /// Run on a dedicated worker thread, reporting the fatal error over
    /// `events` when the pump dies.
    pub fn spawn(self, events: Sender<PumpEvent>) -> thread::JoinHandle<()> {
        let label = self.label;
        thread::spawn(move || {
            if let Err(error) = self.run() {
                let _ = events.send(PumpEvent { label, error });
            }
        })
    }
}
