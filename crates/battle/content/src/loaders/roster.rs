//! Roster loader.
//!
//! Loads two-sided rosters from RON data files.

use anyhow::Context;

use battle_core::Roster;

use crate::defs::RosterDef;

/// Parses a roster from RON source text.
pub fn roster_from_ron_str(source: &str) -> anyhow::Result<Roster> {
    let def: RosterDef = ron::from_str(source).context("failed to parse roster RON")?;
    Ok(def.into_roster())
}

/// Loads the embedded default duel roster.
pub fn load_duel_roster() -> anyhow::Result<Roster> {
    let source = include_str!("../../data/rosters/duel.ron");
    roster_from_ron_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::SkillKind;

    #[test]
    fn embedded_duel_roster_loads() {
        let roster = load_duel_roster().expect("embedded roster must parse");

        assert_eq!(roster.player.name, "Wandering Blade");
        assert_eq!(roster.opponent.name, "Ashen Duelist");
        assert_eq!(roster.player.skills.len(), 4);
        assert_eq!(roster.player.skills[0].kind, SkillKind::Dodge);

        // Ledgers start at full health/dodge with an empty spirit pool.
        assert_eq!(roster.player.ledger.health(), 10);
        assert_eq!(roster.player.ledger.dodge_charges(), 2);
        assert_eq!(roster.player.ledger.spirit(), 0);
    }

    #[test]
    fn malformed_ron_reports_a_parse_error() {
        let err = roster_from_ron_str("(player: oops").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn omitted_optional_fields_use_defaults() {
        let source = r#"
            (
                player: (
                    name: "Solo",
                    health_ceiling: 5,
                    spirit_ceiling: 3,
                    dodge_ceiling: 1,
                    skills: [(name: "Jab", cost: 1, kind: NormalAttack)],
                ),
                opponent: (
                    name: "Shade",
                    health_ceiling: 5,
                    spirit_ceiling: 3,
                    dodge_ceiling: 1,
                    skills: [(name: "Claw", cost: 1, kind: NormalAttack)],
                ),
            )
        "#;

        let roster = roster_from_ron_str(source).unwrap();
        assert_eq!(roster.player.ledger.health_floor(), 0);
        assert!(roster.player.buffs.is_empty());
        assert_eq!(roster.player.skills[0].description, "");
    }
}
