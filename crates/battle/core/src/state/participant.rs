//! Participants and the data they carry into battle.

use crate::ledger::ResourceLedger;

use super::Side;

/// Category of a skill, deciding which resource a selection spends.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    /// Spends one dodge charge instead of spirit.
    Dodge,
    /// Basic attack.
    #[default]
    NormalAttack,
    /// Offensive skill.
    AttackSkill,
    /// Defensive skill.
    DefenseSkill,
    /// Utility skill.
    FunctionalSkill,
}

impl SkillKind {
    /// Returns true for the dodge kind, whose spirit cost is meaningless.
    #[inline]
    pub const fn is_dodge(self) -> bool {
        matches!(self, SkillKind::Dodge)
    }
}

/// A skill as loaded into a participant's ordered skill list.
///
/// Immutable once loaded; selection addresses skills by index, so the list
/// order must stay stable for the whole battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    /// Display name, also used as the pending-action label on selection.
    pub name: String,
    /// Flavor/description text carried for presentation.
    pub description: String,
    /// Spirit cost; ignored for [`SkillKind::Dodge`].
    pub cost: u32,
    pub kind: SkillKind,
}

impl Skill {
    pub fn new(name: impl Into<String>, cost: u32, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cost,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A buff carried by a participant.
///
/// Carried data only; the timing core neither applies nor expires buffs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub name: String,
    pub description: String,
    pub stacks: u32,
}

impl Buff {
    pub fn new(name: impl Into<String>, stacks: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            stacks,
        }
    }
}

/// One side of the battle: identity, resource ledger, skills, and buffs.
///
/// Owned exclusively by the battle engine; the ledger is mutated only through
/// operations bound to this participant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub name: String,
    pub ledger: ResourceLedger,
    pub skills: Vec<Skill>,
    pub buffs: Vec<Buff>,
}

impl Participant {
    pub fn new(name: impl Into<String>, ledger: ResourceLedger) -> Self {
        Self {
            name: name.into(),
            ledger,
            skills: Vec::new(),
            buffs: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_buffs(mut self, buffs: Vec<Buff>) -> Self {
        self.buffs = buffs;
        self
    }

    /// Looks up a skill by its stable index.
    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }
}

/// Both participants of a battle, addressed by [`Side`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub player: Participant,
    pub opponent: Participant,
}

impl Roster {
    pub fn new(player: Participant, opponent: Participant) -> Self {
        Self { player, opponent }
    }

    pub fn side(&self, side: Side) -> &Participant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Participant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}
