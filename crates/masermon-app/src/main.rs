//! masermon: monitor a hydrogen maser's serial console, export its telemetry
//! as node_exporter textfile metrics, and optionally relay traffic between
//! the maser and a control station while logging both directions.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{bounded, select};

use masermon_core::{
    ByteLink, PumpEvent, RelayPump, SerialLink, Terminator, TextfilePublisher, TrafficLog,
};
use masermon_decode::{decode_frame, render_exposition};

const LOG_PATH: &str = "/var/log/maser.log";
const METRICS_DIR: &str = "/var/lib/node_exporter/textfile_collector/";
const METRICS_PREFIX: &str = "maser";

#[derive(Parser, Debug)]
#[command(name = "masermon", version, about)]
struct Args {
    /// Serial device connected to the maser
    #[arg(default_value = "/dev/ttyUSB1")]
    maser_device: String,

    /// Serial device connected to the control station, typically
    /// /dev/ttyUSB0. When omitted, NOTHING IS RELAYED: masermon passively
    /// monitors the maser, logging its output and exporting metrics only
    control_device: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let log = Arc::new(
        TrafficLog::open(LOG_PATH, true)
            .with_context(|| format!("cannot open traffic log {LOG_PATH}"))?,
    );
    let publisher = TextfilePublisher::new(METRICS_DIR, METRICS_PREFIX);

    let (pump_tx, pump_rx) = bounded::<PumpEvent>(2);
    let (int_tx, int_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = int_tx.try_send(());
    })
    .context("cannot install interrupt handler")?;

    let maser = SerialLink::open(&args.maser_device)
        .with_context(|| format!("cannot open maser port {}", args.maser_device))?;
    log.message(&format!("Connected to Maser on {}", maser.name()));

    // The maser direction always frames on newlines and feeds the decoder;
    // the control direction (relay only) frames on the F/D sentinels.
    match &args.control_device {
        Some(control_device) => {
            let control = SerialLink::open(control_device)
                .with_context(|| format!("cannot open control port {control_device}"))?;
            log.message(&format!("Connected to Control on {}", control.name()));

            let maser_writer = maser.try_clone()?;
            let control_writer = control.try_clone()?;

            RelayPump::new(
                "Maser",
                Box::new(maser),
                Some(Box::new(control_writer)),
                Terminator::Newline,
                log.clone(),
            )
            .with_frame_sink(metrics_sink(publisher))
            .spawn(pump_tx.clone());

            RelayPump::new(
                "Control",
                Box::new(control),
                Some(Box::new(maser_writer)),
                Terminator::Sentinel,
                log.clone(),
            )
            .spawn(pump_tx);
        }
        None => {
            log.message("No control device given, monitoring only (relay disabled)");
            let source: Box<dyn ByteLink> = Box::new(maser);
            RelayPump::new("Maser", source, None, Terminator::Newline, log.clone())
                .with_frame_sink(metrics_sink(publisher))
                .spawn(pump_tx);
        }
    }

    // Block until interrupted or until a worker dies; no polling.
    select! {
        recv(int_rx) -> _ => {
            log.message("Relay and logging stopped by interrupt");
            Ok(())
        }
        recv(pump_rx) -> event => {
            let event = event.context("pump event channel closed")?;
            log.message(&format!("{} link failed: {}", event.label, event.error));
            Err(anyhow::Error::new(event.error).context(format!("{} link failed", event.label)))
        }
    }
}

/// Frame handler for the instrument direction: classify, decode and publish
/// the group the frame belongs to. Publish failures are logged, not fatal.
fn metrics_sink(publisher: TextfilePublisher) -> impl FnMut(&str) + Send + 'static {
    move |frame: &str| {
        if let Some(decoded) = decode_frame(frame) {
            let body = render_exposition(METRICS_PREFIX, &decoded.samples);
            if let Err(e) = publisher.publish(&decoded.group, &body) {
                log::warn!("failed to publish {} metrics: {e}", decoded.group);
            }
        }
    }
}
