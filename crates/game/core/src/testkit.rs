//! Shared collaborator doubles for rules tests.

use crate::env::{BufferedMessages, ItemOracle, PcgRng, TransformEnv, VitalsOracle, WorldHooks};
use crate::state::{ItemHandle, PlayerState};

/// Item oracle backed by explicit lists; names are `"trinket {id}"`.
pub(crate) struct TestItems {
    cursed: Vec<ItemHandle>,
    barding: Vec<ItemHandle>,
}

impl TestItems {
    pub fn new() -> Self {
        Self {
            cursed: Vec::new(),
            barding: Vec::new(),
        }
    }

    pub fn curse(&mut self, item: ItemHandle) {
        self.cursed.push(item);
    }

    pub fn mark_barding(&mut self, item: ItemHandle) {
        self.barding.push(item);
    }
}

impl ItemOracle for TestItems {
    fn is_cursed(&self, handle: ItemHandle) -> bool {
        self.cursed.contains(&handle)
    }

    fn name(&self, handle: ItemHandle) -> String {
        format!("trinket {}", handle.0)
    }

    fn is_species_barding(&self, handle: ItemHandle) -> bool {
        self.barding.contains(&handle)
    }
}

/// Flat hit-point formula: every player has the same base maximum.
pub(crate) struct TestVitals {
    pub base_max: u32,
}

impl VitalsOracle for TestVitals {
    fn base_max_hp(&self, _player: &PlayerState) -> u32 {
        self.base_max
    }
}

/// World hooks that count invocations instead of doing anything.
#[derive(Default)]
pub(crate) struct TestWorld {
    /// Items in the pack; drained by `drop_all_inventory`.
    pub pack_size: usize,
    pub butcher_cancels: u32,
    pub terrain_recomputes: u32,
}

impl WorldHooks for TestWorld {
    fn drop_all_inventory(&mut self) -> usize {
        std::mem::take(&mut self.pack_size)
    }

    fn cancel_butcher_action(&mut self) {
        self.butcher_cancels += 1;
    }

    fn recompute_terrain_movement(&mut self) {
        self.terrain_recomputes += 1;
    }
}

/// Owns one of every collaborator and lends them out as a [`TransformEnv`].
pub(crate) struct TestBed {
    pub items: TestItems,
    pub vitals: TestVitals,
    pub rng: PcgRng,
    pub messages: BufferedMessages,
    pub world: TestWorld,
}

impl TestBed {
    pub fn new() -> Self {
        Self {
            items: TestItems::new(),
            vitals: TestVitals { base_max: 40 },
            rng: PcgRng::new(7),
            messages: BufferedMessages::new(),
            world: TestWorld::default(),
        }
    }

    pub fn env(&mut self) -> TransformEnv<'_> {
        TransformEnv::new(
            &self.items,
            &self.vitals,
            &mut self.rng,
            &mut self.messages,
            &mut self.world,
        )
    }
}
