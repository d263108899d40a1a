//! Incremental decoder for `text/event-stream` response bodies.
//!
//! The audit service delivers live events over a long-lived HTTP response
//! in the standard event-stream framing: `field:value` lines, one event
//! per blank-line-terminated block. Transport chunks carry no alignment
//! guarantee, so a chunk boundary may fall mid-line or mid-event; the
//! decoder buffers unterminated input across calls and only ever emits
//! complete events.
//!
//! The parser is lenient: comment lines (leading `:`) and fields other
//! than `data` are ignored without error.

/// Stateful decoder turning raw body chunks into event payloads.
///
/// One decoder instance serves exactly one streaming session; state never
/// persists across sessions.
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    /// Unconsumed input, still waiting for a line terminator.
    buffer: Vec<u8>,
    /// `data` line values of the event currently being assembled.
    data: Vec<String>,
}

impl EventStreamDecoder {
    /// Create a decoder with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one transport chunk and return the payloads of every event
    /// completed by it, in input order.
    ///
    /// A trailing partial line stays buffered and is finished by a later
    /// chunk. The decoder never fails; input that does not fit the
    /// protocol is skipped.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(end) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=end).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if let Some(payload) = self.process_line(&line) {
                events.push(payload);
            }
        }
        events
    }

    /// Handle one complete line, returning a payload when the line
    /// terminates an event.
    fn process_line(&mut self, line: &[u8]) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line[0] == b':' {
            return None;
        }
        let (field, value) = match line.iter().position(|&b| b == b':') {
            Some(colon) => {
                let value = &line[colon + 1..];
                // One leading space after the colon is part of the framing.
                let value = value.strip_prefix(b" ").unwrap_or(value);
                (&line[..colon], value)
            }
            None => (line, &line[..0]),
        };
        if field == b"data" {
            // Lines are complete here, so multi-byte characters split
            // across chunks have been reassembled already.
            self.data.push(String::from_utf8_lossy(value).into_owned());
        }
        None
    }

    /// Finish the pending event. Multiple `data` lines join with `\n`.
    /// A blank line with nothing accumulated, or an accumulation that
    /// joins to the empty string, emits nothing.
    fn dispatch(&mut self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let payload = self.data.join("\n");
        self.data.clear();
        if payload.is_empty() {
            return None;
        }
        Some(payload)
    }
}
