//! How many adversaries each level gets.
//!
//! Level `l` (1-based) gets `l / 2 + 1` zombies and `(l - 1) / 2` ghosts,
//! named `Z0, Z1, ...` and `G0, G1, ...`.

use crate::character::Archetype;

/// Adversary counts for one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnSchedule {
    pub zombies: usize,
    pub ghosts: usize,
}

impl SpawnSchedule {
    /// Schedule for the given 1-based level number.
    #[must_use]
    pub fn for_level(level_number: usize) -> Self {
        Self {
            zombies: level_number / 2 + 1,
            ghosts: level_number.saturating_sub(1) / 2,
        }
    }

    /// Total adversaries this schedule spawns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.zombies + self.ghosts
    }

    /// Name and archetype of each adversary, zombies first.
    pub fn spawns(&self) -> impl Iterator<Item = (String, Archetype)> {
        let zombies = (0..self.zombies).map(|i| named(Archetype::Zombie, i));
        let ghosts = (0..self.ghosts).map(|i| named(Archetype::Ghost, i));
        zombies.chain(ghosts)
    }
}

fn named(archetype: Archetype, index: usize) -> (String, Archetype) {
    (format!("{}{index}", archetype.name_prefix()), archetype)
}
