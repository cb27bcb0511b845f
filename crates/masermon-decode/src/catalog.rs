/// One position in an analog channel set printout.
///
/// Spares hold their slot so value offsets stay positional; they produce no
/// metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Named(&'static str),
    Spare,
}

/// A named group of up to eight analog channels.
///
/// `key` is matched as a raw substring against the framed line, padding
/// included, exactly as the instrument prints it.
#[derive(Debug, PartialEq, Eq)]
pub struct ChannelSet {
    pub key: &'static str,
    pub slots: [Slot; 8],
}

impl ChannelSet {
    /// Metric group / output file fragment: trimmed, lower-cased, internal
    /// spaces become underscores.
    pub fn group_name(&self) -> String {
        normalize(self.key)
    }
}

/// Name normalization shared by set keys and channel ids.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_ascii_lowercase()
}

use Slot::{Named, Spare};

/// The analog telemetry catalog for this maser firmware. Order matters:
/// classification takes the first key contained in the line.
pub static CHANNEL_SETS: [ChannelSet; 8] = [
    ChannelSet {
        key: "VOLTAGES",
        slots: [
            Named("p28"),
            Named("p18"),
            Named("p5"),
            Named("n18"),
            Named("VACION"),
            Named("THRMREF"),
            Named("p00"),
            Named("p2 REF"),
        ],
    },
    ChannelSet {
        key: "BUFFERS ",
        slots: [
            Named("RCVR1"),
            Named("TRANS"),
            Named("SYNTH"),
            Named("DIST"),
            Named("1"),
            Named("2"),
            Named("3"),
            Named("4"),
        ],
    },
    ChannelSet {
        key: "MULT SEN",
        slots: [
            Named("1p4 GHZ"),
            Named("400KHZ"),
            Named("200MRC"),
            Named("20MHZ"),
            Named("200MRF"),
            Named("200MLP"),
            Named("20 MMLT"),
            Named("10 REF"),
        ],
    },
    ChannelSet {
        key: "CURRENTS",
        slots: [
            Named("p28"),
            Named("BATCHG"),
            Named("VACPMP"),
            Named("SOURCE"),
            Named("STSEL"),
            Named("H2PUR"),
            Spare,
            Spare,
        ],
    },
    ChannelSet {
        key: "HEATERS ",
        slots: [
            Named("RCVR"),
            Named("MNCYL"),
            Named("LOSUP"),
            Named("OUTEL"),
            Named("CAV"),
            Named("GAUGE"),
            Spare,
            Spare,
        ],
    },
    ChannelSet {
        key: "CONTROL ",
        slots: [
            Named("MNCRSE"),
            Named("UPNECK"),
            Named("LONECK"),
            Named("MNFINE"),
            Named("UPMAIN"),
            Named("LOMAIN"),
            Spare,
            Spare,
        ],
    },
    ChannelSet {
        key: " MISC   ",
        slots: [
            Named("PK PH"),
            Named("VCO"),
            Named("IF"),
            Named("PRESS"),
            Named("1MHZ"),
            Named("GAIN"),
            Named("OFFSET"),
            Named("RAW REF"),
        ],
    },
    ChannelSet {
        key: " TEMP   ",
        slots: [
            Named("SUP PLT"),
            Named("RCVR"),
            Named("MAIN"),
            Named("TOPCAB"),
            Named("LOWCAB"),
            Named("OUTEL"),
            Named("CAV LF"),
            Named("CAV RT"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_normalize_padding_and_case() {
        let names: Vec<String> = CHANNEL_SETS.iter().map(|s| s.group_name()).collect();
        assert_eq!(
            names,
            vec![
                "voltages", "buffers", "mult_sen", "currents", "heaters", "control", "misc",
                "temp"
            ]
        );
    }

    #[test]
    fn normalize_collapses_internal_spaces_to_underscores() {
        assert_eq!(normalize(" p2 REF "), "p2_ref");
        assert_eq!(normalize("   IF  "), "if");
        assert_eq!(normalize("1p4 GHZ"), "1p4_ghz");
    }
}
