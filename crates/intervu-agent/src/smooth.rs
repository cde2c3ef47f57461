// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word-boundary smoothing for streamed text.
//!
//! Providers emit text in arbitrary fragments, sometimes splitting words
//! mid-token. The smoother buffers fragments and releases whole words (each
//! carrying its trailing whitespace), so the client never renders a torn
//! word. CJK text has no word boundaries; it flows through on whitespace and
//! at flush, which at chat-message scale is indistinguishable from direct
//! delivery.

/// Buffers streamed text fragments and releases them at word boundaries.
#[derive(Debug, Default)]
pub struct WordSmoother {
    buffer: String,
}

impl WordSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a fragment and returns the complete words now releasable.
    ///
    /// A word is complete once the whitespace following it has arrived; the
    /// trailing partial word stays buffered until the next push or flush.
    pub fn push(&mut self, fragment: &str) -> Vec<String> {
        self.buffer.push_str(fragment);

        let split_at = match self.buffer.rfind(char::is_whitespace) {
            // Split after the last whitespace char, keeping the partial tail.
            Some(idx) => idx + self.buffer[idx..].chars().next().map_or(1, char::len_utf8),
            None => return Vec::new(),
        };

        let releasable = &self.buffer[..split_at];
        let mut words = Vec::new();
        let mut word_start = 0;
        for (idx, ch) in releasable.char_indices() {
            if ch.is_whitespace() {
                let end = idx + ch.len_utf8();
                words.push(releasable[word_start..end].to_string());
                word_start = end;
            }
        }
        self.buffer.drain(..split_at);
        words
    }

    /// Releases whatever remains in the buffer.
    pub fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }
}
