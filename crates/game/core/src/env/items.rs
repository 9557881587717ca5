use crate::state::ItemHandle;

/// Read-only item property queries answered by the external inventory.
///
/// The transformation core holds only [`ItemHandle`]s; everything it needs
/// to know about an item (curse state, display name, whether it is the
/// wearer's species barding) comes through this oracle.
pub trait ItemOracle: Send + Sync {
    /// Returns true if the item resists being removed.
    fn is_cursed(&self, handle: ItemHandle) -> bool;

    /// Display name without article, e.g. `"leather armour"`.
    fn name(&self, handle: ItemHandle) -> String;

    /// Returns true if the item is barding made for the wearer's species
    /// (naga or centaur barding rather than ordinary boots).
    fn is_species_barding(&self, handle: ItemHandle) -> bool;
}
