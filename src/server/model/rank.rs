//! The staff rank ladder.
//!
//! Ranks form a single ordered list of Discord role ids, lowest first. A member's
//! rank is the highest ladder role they hold; promotion and demotion move exactly one
//! step unless an explicit target rank is given.

use std::{collections::HashSet, fmt};

use crate::server::error::rank::RankError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank {
    pub role_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    Promote,
    Demote,
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Promote => f.write_str("promote"),
            Self::Demote => f.write_str("demote"),
        }
    }
}

/// A computed rank transition.
///
/// `from` is `None` when the member held no ladder role before a promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChange {
    pub from: Option<Rank>,
    pub to: Rank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankLadder {
    ranks: Vec<Rank>,
}

impl RankLadder {
    /// Creates a ladder from ranks ordered lowest first.
    ///
    /// # Returns
    /// - `Ok(RankLadder)` - Ladder with at least one rank and unique role ids
    /// - `Err(RankError::EmptyLadder)` - No ranks provided
    /// - `Err(RankError::DuplicateRole)` - A role id appears twice
    pub fn new(ranks: Vec<Rank>) -> Result<Self, RankError> {
        if ranks.is_empty() {
            return Err(RankError::EmptyLadder);
        }

        let mut seen = HashSet::new();
        for rank in &ranks {
            if !seen.insert(rank.role_id) {
                return Err(RankError::DuplicateRole(rank.role_id));
            }
        }

        Ok(Self { ranks })
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn role_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.ranks.iter().map(|rank| rank.role_id)
    }

    pub fn contains(&self, role_id: u64) -> bool {
        self.position(role_id).is_some()
    }

    pub fn position(&self, role_id: u64) -> Option<usize> {
        self.ranks.iter().position(|rank| rank.role_id == role_id)
    }

    pub fn rank(&self, role_id: u64) -> Option<&Rank> {
        self.position(role_id).map(|index| &self.ranks[index])
    }

    /// Weight used for sorting: 1 for the lowest rank, 0 for roles off the ladder.
    pub fn weight(&self, role_id: u64) -> u32 {
        self.position(role_id)
            .map(|index| index as u32 + 1)
            .unwrap_or(0)
    }

    /// Returns the highest ladder rank among `role_ids`.
    pub fn highest_of(&self, role_ids: &[u64]) -> Option<&Rank> {
        role_ids
            .iter()
            .filter_map(|role_id| self.position(*role_id))
            .max()
            .map(|index| &self.ranks[index])
    }

    /// Next rank up from `current`.
    ///
    /// An unranked member (`None`) is promoted onto the lowest rank.
    pub fn promote(&self, current: Option<u64>) -> Result<&Rank, RankError> {
        let Some(current) = current else {
            return Ok(&self.ranks[0]);
        };

        let index = self
            .position(current)
            .ok_or(RankError::NotOnLadder(current))?;

        self.ranks
            .get(index + 1)
            .ok_or_else(|| RankError::AlreadyHighest(self.ranks[index].name.clone()))
    }

    /// Next rank down from `current`.
    pub fn demote(&self, current: Option<u64>) -> Result<&Rank, RankError> {
        let current = current.ok_or(RankError::Unranked)?;

        let index = self
            .position(current)
            .ok_or(RankError::NotOnLadder(current))?;

        if index == 0 {
            return Err(RankError::AlreadyLowest(self.ranks[index].name.clone()));
        }

        Ok(&self.ranks[index - 1])
    }

    /// Computes the transition for a promote/demote request.
    ///
    /// Without `target` this is a single step. With `target`, the target must be on
    /// the ladder and strictly above (promote) or below (demote) the current rank.
    pub fn transition(
        &self,
        current: Option<u64>,
        direction: RankDirection,
        target: Option<u64>,
    ) -> Result<RankChange, RankError> {
        let from = match current {
            Some(role_id) => Some(
                self.rank(role_id)
                    .cloned()
                    .ok_or(RankError::NotOnLadder(role_id))?,
            ),
            None => None,
        };

        let to = match target {
            None => match direction {
                RankDirection::Promote => self.promote(current)?,
                RankDirection::Demote => self.demote(current)?,
            },
            Some(target) => {
                let target_index = self
                    .position(target)
                    .ok_or(RankError::NotOnLadder(target))?;
                let current_index = current.and_then(|role_id| self.position(role_id));

                let valid = match (direction, current_index) {
                    (RankDirection::Promote, None) => true,
                    (RankDirection::Promote, Some(index)) => target_index > index,
                    (RankDirection::Demote, None) => return Err(RankError::Unranked),
                    (RankDirection::Demote, Some(index)) => target_index < index,
                };

                if !valid {
                    return Err(RankError::WrongDirection {
                        direction,
                        target: self.ranks[target_index].name.clone(),
                    });
                }

                &self.ranks[target_index]
            }
        };

        Ok(RankChange {
            from,
            to: to.clone(),
        })
    }
}
