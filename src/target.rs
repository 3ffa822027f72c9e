//! Objects a skull profile can be attached to: items held in memory and
//! blocks placed in a world.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::{Result, SkullError};

/// Something that may render a player head.
pub trait SkullTarget {
    /// Whether the target can carry a profile at all.
    fn is_skull(&self) -> bool;

    fn profile(&self) -> Option<&Profile>;

    /// Replaces the profile of the target. Fails with
    /// [`SkullError::NotASkull`] on targets that cannot carry one.
    fn attach_profile(&mut self, profile: Profile) -> Result<()>;
}

/// Target that can be turned into a player head first.
pub trait Placeable: SkullTarget {
    fn set_to_skull(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Air,
    Stone,
    SkeletonSkull,
    PlayerHead,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
}

impl ItemStack {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            profile: None,
        }
    }

    pub fn player_head() -> Self {
        Self::new(Material::PlayerHead)
    }
}

impl SkullTarget for ItemStack {
    fn is_skull(&self) -> bool {
        self.material == Material::PlayerHead
    }

    fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    fn attach_profile(&mut self, profile: Profile) -> Result<()> {
        if !self.is_skull() {
            return Err(SkullError::NotASkull);
        }
        self.profile = Some(profile);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl BlockState {
    fn air() -> Self {
        Self {
            material: Material::Air,
            profile: None,
        }
    }
}

/// Persisted block states, keyed by position. Unset positions are air.
#[derive(Debug, Default)]
pub struct World {
    blocks: HashMap<BlockPos, BlockState>,
    physics_updates: usize,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, pos: BlockPos) -> Option<&BlockState> {
        self.blocks.get(&pos)
    }

    pub fn material(&self, pos: BlockPos) -> Material {
        self.state(pos)
            .map(|s| s.material)
            .unwrap_or(Material::Air)
    }

    /// Sets the block type, dropping the previous state.
    pub fn set_type(&mut self, pos: BlockPos, material: Material, apply_physics: bool) {
        self.blocks.insert(
            pos,
            BlockState {
                material,
                profile: None,
            },
        );
        if apply_physics {
            self.physics_updates += 1;
        }
    }

    /// Copy of the current state, to be edited and committed.
    pub fn snapshot(&self, pos: BlockPos) -> BlockState {
        self.state(pos).cloned().unwrap_or_else(BlockState::air)
    }

    /// Writes `state` back. Unless `force` is set, refuses to overwrite a
    /// block whose type changed since the snapshot was taken.
    pub fn commit(
        &mut self,
        pos: BlockPos,
        state: BlockState,
        force: bool,
        apply_physics: bool,
    ) -> Result<()> {
        let current = self.material(pos);
        if !force && current != state.material {
            return Err(SkullError::Commit(format!(
                "block at {:?} is {:?}, snapshot was {:?}",
                pos, current, state.material
            )));
        }
        self.blocks.insert(pos, state);
        if apply_physics {
            self.physics_updates += 1;
        }
        Ok(())
    }

    /// Number of changes that triggered a physics update.
    pub fn physics_updates(&self) -> usize {
        self.physics_updates
    }

    pub fn block_at(&mut self, pos: BlockPos) -> PlacedBlock<'_> {
        PlacedBlock { world: self, pos }
    }
}

/// A block of a [`World`], changed through committed state updates.
pub struct PlacedBlock<'w> {
    world: &'w mut World,
    pos: BlockPos,
}

impl PlacedBlock<'_> {
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    pub fn material(&self) -> Material {
        self.world.material(self.pos)
    }
}

impl SkullTarget for PlacedBlock<'_> {
    fn is_skull(&self) -> bool {
        self.material() == Material::PlayerHead
    }

    fn profile(&self) -> Option<&Profile> {
        self.world
            .state(self.pos)
            .and_then(|s| s.profile.as_ref())
    }

    fn attach_profile(&mut self, profile: Profile) -> Result<()> {
        if !self.is_skull() {
            return Err(SkullError::NotASkull);
        }
        let mut state = self.world.snapshot(self.pos);
        state.profile = Some(profile);
        self.world.commit(self.pos, state, false, false)
    }
}

impl Placeable for PlacedBlock<'_> {
    fn set_to_skull(&mut self) -> Result<()> {
        if !self.is_skull() {
            self.world
                .set_type(self.pos, Material::PlayerHead, false);
        }
        Ok(())
    }
}
