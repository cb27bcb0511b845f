//! Status printout decoders.
//!
//! Offsets are fixed properties of this maser's firmware printout and must
//! not be "cleaned up": the autotuner block packs single-character state
//! flags between multi-digit counters.

use crate::fields::{binary_field, int_field, label_field, timestamp_field};
use crate::sample::MetricSample;

/// Status line 1: maser identity, clock, autotuner and synthesizer state.
pub fn decode_status1(line: &str) -> Vec<MetricSample> {
    let mut samples = Vec::with_capacity(21);

    samples.push(MetricSample::label("info", "name", label_field(line, 0, 8)));

    // UTC date and time as printed by the maser: YR DOY HR MIN SEC.
    samples.push(MetricSample::int("utc_time", timestamp_field(line, 9, 24)));

    samples.push(MetricSample::label(
        "autotuner_status_raw",
        "raw",
        label_field(line, 25, 45),
    ));
    samples.push(MetricSample::label(
        "autotuner_mode",
        "mode",
        label_field(line, 25, 26),
    ));
    samples.push(MetricSample::label(
        "autotuner_h2flux_state",
        "state",
        label_field(line, 26, 27),
    ));
    samples.push(MetricSample::label(
        "autotuner_measurement_state",
        "state",
        label_field(line, 27, 28),
    ));
    samples.push(MetricSample::int(
        "autotuner_measurement_count_seconds",
        int_field(line, 28, 30),
    ));
    samples.push(MetricSample::label(
        "autotuner_h2flux_ctrl_device",
        "device",
        label_field(line, 30, 31),
    ));
    samples.push(MetricSample::label(
        "autotuner_sign",
        "sign",
        label_field(line, 31, 32),
    ));
    samples.push(MetricSample::int(
        "autotuner_max_diff",
        int_field(line, 32, 38),
    ));
    samples.push(MetricSample::label(
        "autotuner_shift_direction",
        "direction",
        label_field(line, 38, 39),
    ));
    samples.push(MetricSample::int(
        "autotuner_bit_shift",
        int_field(line, 39, 41),
    ));
    samples.push(MetricSample::int(
        "autotuner_dac1_chan",
        int_field(line, 41, 43),
    ));
    samples.push(MetricSample::int(
        "autotuner_dac2_chan",
        int_field(line, 43, 45),
    ));
    samples.push(MetricSample::int(
        "autotuner_measurement_msb",
        int_field(line, 46, 48),
    ));
    samples.push(MetricSample::int(
        "autotuner_register_msb",
        int_field(line, 49, 51),
    ));
    samples.push(MetricSample::int(
        "autotuner_register_number",
        int_field(line, 52, 58),
    ));

    samples.push(MetricSample::label(
        "synthesizer_mode",
        "mode",
        label_field(line, 63, 64),
    ));
    samples.push(MetricSample::int(
        "synthesizer_number_a",
        int_field(line, 65, 69),
    ));
    samples.push(MetricSample::int(
        "synthesizer_number_b",
        int_field(line, 70, 74),
    ));
    samples.push(MetricSample::int(
        "synthesizer_number_c",
        int_field(line, 75, 78),
    ));

    samples
}

/// Status line 2: autotuner intervals, digital status word, DAC control
/// words.
pub fn decode_status2(line: &str) -> Vec<MetricSample> {
    vec![
        MetricSample::int(
            "autotuner_wait_interval_seconds",
            int_field(line, 0, 3),
        ),
        MetricSample::int("autotuner_count_seconds", int_field(line, 5, 9)),
        MetricSample::int("digital_status_word", binary_field(line, 15, 27)),
        MetricSample::int("dac1_channel", int_field(line, 35, 37)),
        MetricSample::int("dac1_msb", int_field(line, 38, 40)),
        MetricSample::int("dac2_channel", int_field(line, 41, 43)),
        MetricSample::int("dac2_msb", int_field(line, 44, 46)),
    ]
}
