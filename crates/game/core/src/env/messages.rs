//! Player-facing notification sink.

/// Message channel, used by the display layer for filtering and colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MsgChannel {
    /// Ordinary gameplay messages.
    #[default]
    Plain,
    /// Messages about timed effects starting or ending.
    Duration,
}

/// Where transformation messages go.
///
/// Every failure path of the state machine emits its explanation here
/// before returning; callers display, log, or discard as they see fit.
pub trait MessageSink {
    fn notify(&mut self, text: &str, channel: MsgChannel);
}

/// Sink that drops everything. Useful for simulation and tests that do
/// not assert on message output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentMessages;

impl MessageSink for SilentMessages {
    fn notify(&mut self, _text: &str, _channel: MsgChannel) {}
}

/// Sink that records messages in order.
#[derive(Clone, Debug, Default)]
pub struct BufferedMessages {
    messages: Vec<(String, MsgChannel)>,
}

impl BufferedMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    pub fn messages(&self) -> &[(String, MsgChannel)] {
        &self.messages
    }

    /// Returns true if any recorded message contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.messages.iter().any(|(text, _)| text.contains(fragment))
    }

    /// Drains and returns the recorded messages.
    pub fn take(&mut self) -> Vec<(String, MsgChannel)> {
        std::mem::take(&mut self.messages)
    }
}

impl MessageSink for BufferedMessages {
    fn notify(&mut self, text: &str, channel: MsgChannel) {
        self.messages.push((text.to_owned(), channel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_sink_records_in_order() {
        let mut sink = BufferedMessages::new();
        sink.notify("first", MsgChannel::Plain);
        sink.notify("second", MsgChannel::Duration);

        assert_eq!(sink.messages().len(), 2);
        assert_eq!(sink.messages()[0].0, "first");
        assert_eq!(sink.messages()[1].1, MsgChannel::Duration);
        assert!(sink.contains("sec"));

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.messages().is_empty());
    }
}
