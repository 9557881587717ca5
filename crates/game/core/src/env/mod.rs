//! Traits describing the world outside the transformation core.
//!
//! Item properties, the hit-point formula, randomness, notifications, and
//! world side effects all live behind traits so the rules stay pure and
//! testable. The [`TransformEnv`] aggregate bundles them so each operation
//! takes one environment parameter instead of five.
mod items;
mod messages;
mod rng;
mod world;

pub use items::ItemOracle;
pub use messages::{BufferedMessages, MessageSink, MsgChannel, SilentMessages};
pub use rng::{PcgRng, RngOracle};
pub use world::{VitalsOracle, WorldHooks};

/// Bundles every collaborator a transformation operation may need.
///
/// Read-only oracles are shared references; the dice, the message sink,
/// and the world hooks are mutated as the operation proceeds.
pub struct TransformEnv<'a> {
    pub items: &'a dyn ItemOracle,
    pub vitals: &'a dyn VitalsOracle,
    pub rng: &'a mut dyn RngOracle,
    pub messages: &'a mut dyn MessageSink,
    pub world: &'a mut dyn WorldHooks,
}

impl<'a> TransformEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        vitals: &'a dyn VitalsOracle,
        rng: &'a mut dyn RngOracle,
        messages: &'a mut dyn MessageSink,
        world: &'a mut dyn WorldHooks,
    ) -> Self {
        Self {
            items,
            vitals,
            rng,
            messages,
            world,
        }
    }

    /// Emits a player-facing message on the given channel.
    #[inline]
    pub fn notify(&mut self, text: &str, channel: MsgChannel) {
        self.messages.notify(text, channel);
    }
}
