use super::*;
use crate::expr::{d4, d6, d8, multi_die_roll};

impl Character {
    /// Nemo, an 8th level half-orc paladin. Used when no character file is given.
    pub fn sample() -> Self {
        let magic_bonus = constant(1).named("Magic Weapon Bonus");

        Self {
            name: "Nemo".to_owned(),
            species: "Half-Orc".to_owned(),
            classes: vec1![CharacterClass {
                name: "Paladin".to_owned(),
                level: 8,
            }],
            abilities: AbilityScores {
                strength: AbilityScore::new(18),
                dexterity: AbilityScore::new(10),
                constitution: AbilityScore::new(14),
                intelligence: AbilityScore::new(11),
                wisdom: AbilityScore::new(8).save_proficient(),
                charisma: AbilityScore::new(14).save_proficient(),
            },
            proficiency_bonus: 3,
            skills: [
                Skill::Athletics,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Perception,
                Skill::Persuasion,
            ]
            .into_iter()
            .collect(),
            weapons: vec![
                Weapon::new("Giant Slayer Sword", "Piercing")
                    .proficient(true)
                    .ability(Ability::Strength)
                    .damage_die(d8())
                    .attack_bonus(magic_bonus.clone())
                    .damage_bonus(magic_bonus.clone()),
                Weapon::new("Giant Slayer Sword (vs Giants)", "Piercing")
                    .proficient(true)
                    .ability(Ability::Strength)
                    .damage_die(d8())
                    .attack_bonus(magic_bonus.clone())
                    .damage_bonus(
                        sum([
                            multi_die_roll(6, 2).named("Giant Slaying Bonus"),
                            magic_bonus,
                        ])
                        .named("Weapon Bonus"),
                    )
                    .description(
                        "Giants must score 15 or higher on a strength save or be knocked prone.",
                    ),
                Weapon::new("Javelin", "Piercing")
                    .proficient(true)
                    .ability(Ability::Strength)
                    .damage_die(d6())
                    .description("Range up to 120 ft. Disadvantage if throwing more than 60 ft."),
                Weapon::new("Improvised Weapon", "Unknown")
                    .ability(Ability::Strength)
                    .damage_die(d4())
                    .description("Range up to 60 ft. Disadvantage if throwing more than 20 ft."),
                Weapon::new("Improvised Weapon", "Unknown")
                    .ability(Ability::Dexterity)
                    .damage_die(d4())
                    .description("Range up to 60 ft. Disadvantage if throwing more than 20 ft."),
                Weapon::new("Unarmed Strike", "Bludgeoning")
                    .proficient(true)
                    .ability(Ability::Strength)
                    .damage_bonus(constant(1).named("Unarmed Strike Bonus")),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_serde() {
        let nemo = Character::sample();
        let json = serde_json::to_string(&nemo).unwrap();
        assert_eq!(serde_json::from_str::<Character>(&json).unwrap(), nemo);
    }

    #[test]
    fn test_sample() {
        let nemo = Character::sample();
        assert_eq!(nemo.level(), 8);
        assert_eq!(nemo.weapons.len(), 6);
        assert_eq!(nemo.ability_modifier(Ability::Charisma), 2);
        assert_eq!(nemo.save_modifier(Ability::Charisma), 5);
        assert_eq!(nemo.skill_modifier(Skill::Persuasion), 5);
    }
}
