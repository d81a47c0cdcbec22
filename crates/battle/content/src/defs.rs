//! Loader-facing definition types.
//!
//! Definitions mirror what a data file can express; conversion into
//! battle-core state fills in the runtime-only parts (full health and dodge
//! charges, empty spirit pool, unarmed regen deadline).

use serde::{Deserialize, Serialize};

use battle_core::{Buff, Participant, ResourceLedger, Roster, Skill, SkillKind};

/// A skill as written in roster data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: u32,
    pub kind: SkillKind,
}

impl SkillDef {
    pub fn into_skill(self) -> Skill {
        Skill {
            name: self.name,
            description: self.description,
            cost: self.cost,
            kind: self.kind,
        }
    }
}

/// A buff as written in roster data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stacks: u32,
}

impl BuffDef {
    pub fn into_buff(self) -> Buff {
        Buff {
            name: self.name,
            description: self.description,
            stacks: self.stacks,
        }
    }
}

/// One participant as written in roster data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDef {
    pub name: String,
    #[serde(default)]
    pub health_floor: i32,
    pub health_ceiling: i32,
    pub spirit_ceiling: u32,
    pub dodge_ceiling: u32,
    pub skills: Vec<SkillDef>,
    #[serde(default)]
    pub buffs: Vec<BuffDef>,
}

impl ParticipantDef {
    pub fn into_participant(self) -> Participant {
        let ledger = ResourceLedger::new(
            self.health_floor,
            self.health_ceiling,
            self.spirit_ceiling,
            self.dodge_ceiling,
        );
        Participant::new(self.name, ledger)
            .with_skills(self.skills.into_iter().map(SkillDef::into_skill).collect())
            .with_buffs(self.buffs.into_iter().map(BuffDef::into_buff).collect())
    }
}

/// A whole two-sided roster as written in roster data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterDef {
    pub player: ParticipantDef,
    pub opponent: ParticipantDef,
}

impl RosterDef {
    pub fn into_roster(self) -> Roster {
        Roster::new(
            self.player.into_participant(),
            self.opponent.into_participant(),
        )
    }
}
