use thiserror::Error;

/// Raised when an incoming byte cannot be decoded as a single character.
/// The link is 7-N-1, so anything outside the 7-bit range means the stream
/// can no longer be framed reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte 0x{0:02X} cannot be decoded as a 7-bit character")]
pub struct ByteDecodeError(pub u8);

/// Frame terminator rule for one direction of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Frame ends on `\n`; trailing CR/LF are stripped from the frame.
    Newline,
    /// Frame ends on `F` or `D`; the sentinel stays in the frame.
    /// This is how the control station terminates its request strings.
    Sentinel,
}

/// Accumulates raw serial bytes into lines according to a terminator rule.
///
/// Frames are only emitted on a terminator, never mid-accumulation.
/// Zero-length frames are valid and are still handed downstream.
pub struct LineFramer {
    policy: Terminator,
    buf: String,
}

impl LineFramer {
    pub fn new(policy: Terminator) -> Self {
        Self {
            policy,
            buf: String::new(),
        }
    }

    /// Feed one byte; returns a completed frame when the terminator is seen.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String>, ByteDecodeError> {
        if !byte.is_ascii() {
            return Err(ByteDecodeError(byte));
        }
        let ch = byte as char;
        self.buf.push(ch);

        let done = match self.policy {
            Terminator::Newline => ch == '\n',
            Terminator::Sentinel => ch == 'F' || ch == 'D',
        };
        if !done {
            return Ok(None);
        }

        let frame = match self.policy {
            Terminator::Newline => {
                let line = self.buf.trim_end_matches(['\r', '\n']).to_string();
                self.buf.clear();
                line
            }
            Terminator::Sentinel => std::mem::take(&mut self.buf),
        };
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_str(framer: &mut LineFramer, s: &str) -> Vec<String> {
        s.bytes()
            .filter_map(|b| framer.feed(b).unwrap())
            .collect()
    }

    #[test]
    fn newline_policy_strips_cr_lf() {
        let mut framer = LineFramer::new(Terminator::Newline);
        let frames = feed_str(&mut framer, "Maser data\r\n");
        assert_eq!(frames, vec!["Maser data".to_string()]);
    }

    #[test]
    fn newline_policy_no_emit_mid_line() {
        let mut framer = LineFramer::new(Terminator::Newline);
        assert!(feed_str(&mut framer, "partial").is_empty());
        let frames = feed_str(&mut framer, " line\n");
        assert_eq!(frames, vec!["partial line".to_string()]);
    }

    #[test]
    fn consecutive_newlines_emit_empty_frames() {
        let mut framer = LineFramer::new(Terminator::Newline);
        let frames = feed_str(&mut framer, "a\n\n\n");
        assert_eq!(frames, vec!["a".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn sentinel_policy_terminates_on_every_f_or_d() {
        let mut framer = LineFramer::new(Terminator::Sentinel);
        let frames = feed_str(&mut framer, "AB12FCD3D");
        // Each F or D ends a frame and stays in it; the D inside "CD3D"
        // splits it.
        assert_eq!(
            frames,
            vec!["AB12F".to_string(), "CD".to_string(), "3D".to_string()]
        );
    }

    #[test]
    fn non_ascii_byte_is_a_hard_error() {
        let mut framer = LineFramer::new(Terminator::Newline);
        assert_eq!(framer.feed(0x80), Err(ByteDecodeError(0x80)));
        // The buffer keeps what it had; a later valid line still comes out.
        let frames = feed_str(&mut framer, "ok\n");
        assert_eq!(frames, vec!["ok".to_string()]);
    }
}
