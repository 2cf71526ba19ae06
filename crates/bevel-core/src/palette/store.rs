//! Process-wide palette storage with atomic reload.

use super::{PaletteOptions, PaletteSet, ThemeColors};
use crate::policy::ShadingPolicy;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

static STORE: LazyLock<PaletteStore> = LazyLock::new(PaletteStore::default);

/// The process-wide palette store, initialised with the default palettes.
pub fn palette_store() -> &'static PaletteStore {
    &STORE
}

/// Holds the current [`PaletteSet`].
///
/// Readers take an `Arc` snapshot with [`PaletteStore::load`] and keep using
/// it for the whole draw call. A reload builds a complete new set and swaps
/// it in, so a reader sees either the old set or the new one, never a mix.
pub struct PaletteStore {
    current: ArcSwap<PaletteSet>,
    generation: AtomicU64,
}

impl PaletteStore {
    /// Create a store holding `set`.
    pub fn new(set: PaletteSet) -> Self {
        Self {
            current: ArcSwap::from_pointee(set),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current palettes.
    pub fn load(&self) -> Arc<PaletteSet> {
        self.current.load_full()
    }

    /// Regenerate every palette and publish the result.
    pub fn reload(&self, colors: &ThemeColors, options: &PaletteOptions, policy: &ShadingPolicy) -> Arc<PaletteSet> {
        let set = Arc::new(PaletteSet::generate(colors, options, policy));
        self.replace(Arc::clone(&set));
        set
    }

    /// Publish an already generated palette set.
    pub fn replace(&self, set: Arc<PaletteSet>) {
        self.current.store(set);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        log::debug!("Palette set swapped in (generation {})", generation);
    }

    /// Number of reloads since the store was created.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(PaletteSet::with_defaults())
    }
}
