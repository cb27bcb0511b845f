//! Fixed-column telemetry decoding for the maser status printout.
//!
//! A framed line is classified by substring, then decoded into metric
//! samples at fixed character offsets. Lines that match nothing are dropped
//! without error; fields that fail to parse become the `-1` sentinel.

pub mod analog;
pub mod catalog;
pub mod fields;
pub mod sample;
pub mod status;

pub use catalog::{ChannelSet, Slot, CHANNEL_SETS};
pub use sample::{render_exposition, MetricSample, MetricValue};

/// Classification of one framed line, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameClass {
    Status1,
    Status2,
    Analog(&'static ChannelSet),
    Unrecognized,
}

/// Classify by substring containment: `SYN`, then `DGSW`, then the first
/// analog set key in catalog order.
pub fn classify(line: &str) -> FrameClass {
    if line.contains("SYN") {
        FrameClass::Status1
    } else if line.contains("DGSW") {
        FrameClass::Status2
    } else {
        CHANNEL_SETS
            .iter()
            .find(|set| line.contains(set.key))
            .map(FrameClass::Analog)
            .unwrap_or(FrameClass::Unrecognized)
    }
}

/// All samples decoded from one frame, routed to a single metric group.
#[derive(Debug)]
pub struct DecodedFrame {
    /// Output group: `status1`, `status2`, or the normalized analog set name.
    pub group: String,
    pub samples: Vec<MetricSample>,
}

/// Decode one framed line; `None` for unrecognized lines.
pub fn decode_frame(line: &str) -> Option<DecodedFrame> {
    match classify(line) {
        FrameClass::Status1 => Some(DecodedFrame {
            group: "status1".to_string(),
            samples: status::decode_status1(line),
        }),
        FrameClass::Status2 => Some(DecodedFrame {
            group: "status2".to_string(),
            samples: status::decode_status2(line),
        }),
        FrameClass::Analog(set) => Some(DecodedFrame {
            group: set.group_name(),
            samples: analog::decode_analog(line, set),
        }),
        FrameClass::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syn_wins_over_analog_keys() {
        // A line carrying both markers is status line 1: SYN has priority.
        let class = classify("CURRENTS and SYN in one line");
        assert_eq!(class, FrameClass::Status1);
    }

    #[test]
    fn dgsw_wins_over_analog_keys() {
        let class = classify("DGSW VOLTAGES");
        assert_eq!(class, FrameClass::Status2);
    }

    #[test]
    fn first_catalog_match_wins() {
        // BUFFERS precedes CURRENTS in catalog order.
        match classify("BUFFERS CURRENTS") {
            FrameClass::Analog(set) => assert_eq!(set.key, "BUFFERS "),
            other => panic!("expected analog class, got {other:?}"),
        }
    }

    #[test]
    fn unknown_lines_are_dropped() {
        assert_eq!(classify("noise"), FrameClass::Unrecognized);
        assert_eq!(classify(""), FrameClass::Unrecognized);
        assert!(decode_frame("noise").is_none());
    }

    #[test]
    fn analog_frames_route_to_their_set_group() {
        let decoded = decode_frame("VOLTAGES 1").unwrap();
        assert_eq!(decoded.group, "voltages");
    }
}
