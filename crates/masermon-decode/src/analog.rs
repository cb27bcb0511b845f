//! Analog channel line decoder.

use crate::catalog::{normalize, ChannelSet, Slot};
use crate::fields::float_field;
use crate::sample::MetricSample;

/// Character width of one analog channel cell in the printout.
const CELL_WIDTH: usize = 8;
/// Offset of the first channel cell.
const FIRST_CELL: usize = 15;
/// Digits printed per channel value within its cell.
const VALUE_WIDTH: usize = 6;

/// Decode one analog channel line against its set.
///
/// Values are positional: channel `i` reads `[15 + 8i, 15 + 8i + 6)`. The
/// I.F. sense channel overflows its cell in the firmware printout, so any
/// channel normalizing to `if` reads the fixed range `[30, 37)` instead.
pub fn decode_analog(line: &str, set: &ChannelSet) -> Vec<MetricSample> {
    let group = set.group_name();
    let mut samples = Vec::with_capacity(set.slots.len());

    for (index, slot) in set.slots.iter().enumerate() {
        let Slot::Named(id) = slot else { continue };
        let channel = normalize(id);

        let start = FIRST_CELL + index * CELL_WIDTH;
        let value = if channel == "if" {
            float_field(line, 30, 37)
        } else {
            float_field(line, start, start + VALUE_WIDTH)
        };

        samples.push(MetricSample::float(format!("{group}_{channel}"), value));
    }

    samples
}
