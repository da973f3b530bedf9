//! Character sink adapter.
//!
//! Wraps the caller-supplied byte sink together with the running output
//! count for one top-level formatting call. A missing sink means "count but
//! discard", which is how callers measure output length without a buffer.

/// Byte sink plus running count.
///
/// Invariant: `idx` equals the number of bytes submitted since the call
/// started, whether or not a sink function is attached.
pub struct FmtSink<'a> {
    out: Option<&'a mut dyn FnMut(u8)>,
    idx: usize,
}

impl<'a> FmtSink<'a> {
    /// Wrap an optional byte sink.
    pub fn new(out: Option<&'a mut dyn FnMut(u8)>) -> Self {
        Self { out, idx: 0 }
    }

    /// Submit one byte and advance the count.
    pub fn put(&mut self, byte: u8) {
        if let Some(f) = self.out.as_mut() {
            f(byte);
        }
        self.idx += 1;
    }

    /// Number of bytes submitted so far.
    pub fn len(&self) -> usize {
        self.idx
    }

    /// True when nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.idx == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_counts() {
        let mut sink = FmtSink::new(None);
        sink.put(b'a');
        sink.put(b'b');
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_sink_preserves_order() {
        let mut out = Vec::new();
        let mut collect = |b: u8| out.push(b);
        let mut sink = FmtSink::new(Some(&mut collect));
        for &b in b"abc" {
            sink.put(b);
        }
        assert_eq!(sink.len(), 3);
        drop(sink);
        assert_eq!(out, b"abc");
    }
}
