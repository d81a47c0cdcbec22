//! Programmatic fixture duelists.
//!
//! A matched pair of participants used by tests, demos, and as a fallback
//! when no data-driven roster is supplied: 10 health, two dodge charges,
//! an empty spirit pool capped at 10, and the standard four-skill kit.

use battle_core::{Participant, ResourceLedger, Roster, Skill, SkillKind};

fn standard_kit() -> Vec<Skill> {
    vec![
        Skill::new("Guard", 0, SkillKind::Dodge)
            .with_description("Spend a dodge charge to evade the incoming blow."),
        Skill::new("Strike", 1, SkillKind::NormalAttack)
            .with_description("A quick basic attack."),
        Skill::new("Crescent Cut", 2, SkillKind::AttackSkill)
            .with_description("A sweeping heavy blow."),
        Skill::new("Iron Veil", 2, SkillKind::DefenseSkill)
            .with_description("Harden your stance against the next hit."),
    ]
}

fn duelist(name: &str) -> Participant {
    Participant::new(name, ResourceLedger::new(0, 10, 10, 2)).with_skills(standard_kit())
}

/// Builds the default one-on-one roster.
pub fn duel_roster() -> Roster {
    Roster::new(duelist("Wandering Blade"), duelist("Ashen Duelist"))
}
