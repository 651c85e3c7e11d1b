use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    error::{
        Result,
        WrapOptionError,
        general_error,
    },
    mons::Combatant,
};

/// Maximum number of combatants in a party.
pub const MAX_PARTY_SIZE: usize = 6;

/// An ordered party of combatants, which owns every member.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    members: Vec<Combatant>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a party from the given members.
    pub fn from_members(members: Vec<Combatant>) -> Result<Self> {
        if members.len() > MAX_PARTY_SIZE {
            return Err(general_error(format!(
                "party cannot hold {} members",
                members.len()
            )));
        }
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_PARTY_SIZE
    }

    /// Adds a member to the end of the party, handing it back if the party is full.
    pub fn add(&mut self, combatant: Combatant) -> Result<(), Combatant> {
        if self.is_full() {
            return Err(combatant);
        }
        self.members.push(combatant);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Combatant> {
        if index >= self.members.len() {
            return Err(general_error(format!("no party member at {index}")));
        }
        Ok(self.members.remove(index))
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        if a >= self.members.len() || b >= self.members.len() {
            return Err(general_error(format!("cannot swap party members {a} and {b}")));
        }
        self.members.swap(a, b);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Combatant> {
        self.members
            .get(index)
            .wrap_not_found_error(format_args!("party member {index}"))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Combatant> {
        self.members
            .get_mut(index)
            .wrap_not_found_error(format_args!("party member {index}"))
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    /// Index of the first member that has not fainted.
    pub fn first_alive(&self) -> Option<usize> {
        self.members.iter().position(|member| !member.is_fainted())
    }

    pub fn has_alive(&self) -> bool {
        self.first_alive().is_some()
    }
}
