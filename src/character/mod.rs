//! Character sheet data and the roll expressions it produces.

mod ability;
mod sample;
mod weapon;

use crate::common::*;
use crate::error::{Result, SheetError};
use crate::expr::{constant, d20, sum, Expression};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Index;
use std::path::Path;

pub use ability::{Ability, Skill};
pub use weapon::Weapon;

/// Modifier granted by an ability score: `floor((score - 10) / 2)`.
pub fn score_modifier(score: Int) -> Int {
    score.saturating_sub(10).div_euclid(2)
}

/// `+3`, `+0`, `-1`.
pub fn modifier_label(modifier: Int) -> String {
    format!("{:+}", modifier)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub level: Int,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub score: Int,
    #[serde(default)]
    pub save_proficient: bool,
}

impl AbilityScore {
    pub fn new(score: Int) -> Self {
        Self {
            score,
            save_proficient: false,
        }
    }

    pub fn save_proficient(self) -> Self {
        Self {
            save_proficient: true,
            ..self
        }
    }

    pub fn modifier(&self) -> Int {
        score_modifier(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: AbilityScore,
    pub dexterity: AbilityScore,
    pub constitution: AbilityScore,
    pub intelligence: AbilityScore,
    pub wisdom: AbilityScore,
    pub charisma: AbilityScore,
}

impl Index<Ability> for AbilityScores {
    type Output = AbilityScore;

    fn index(&self, ability: Ability) -> &Self::Output {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub species: String,
    pub classes: NonEmpty<CharacterClass>,
    pub abilities: AbilityScores,
    pub proficiency_bonus: Int,
    /// Skills the character is proficient in.
    #[serde(default)]
    pub skills: BTreeSet<Skill>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl Character {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
        let character = Self::from_toml(&text)?;
        log::info!("loaded character {:?} from {}", character.name, path.display());
        Ok(character)
    }

    pub fn level(&self) -> Int {
        self.classes.iter().map(|c| c.level).fold(0, Int::saturating_add)
    }

    pub fn ability_modifier(&self, ability: Ability) -> Int {
        self.abilities[ability].modifier()
    }

    pub fn save_modifier(&self, ability: Ability) -> Int {
        let mut ret = self.ability_modifier(ability);
        if self.abilities[ability].save_proficient {
            ret = ret.saturating_add(self.proficiency_bonus);
        }
        ret
    }

    pub fn is_proficient(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    pub fn skill_modifier(&self, skill: Skill) -> Int {
        let mut ret = self.ability_modifier(skill.ability());
        if self.is_proficient(skill) {
            ret = ret.saturating_add(self.proficiency_bonus);
        }
        ret
    }

    /// Looks up a weapon by its 1-based position on the sheet.
    pub fn weapon(&self, number: &str) -> Result<&Weapon> {
        number
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.weapons.get(i))
            .ok_or_else(|| SheetError::UnknownWeapon(number.to_owned()))
    }

    fn modifier_expr(&self, ability: Ability) -> Expression {
        constant(self.ability_modifier(ability)).named(format!("{} Modifier", ability))
    }

    fn proficiency_expr(&self) -> Expression {
        constant(self.proficiency_bonus).named("Proficiency Bonus")
    }

    /// `d20 + <ability> modifier`.
    pub fn ability_check(&self, ability: Ability) -> Expression {
        sum([d20(), self.modifier_expr(ability)]).named(format!("{} Roll", ability))
    }

    pub fn saving_throw(&self, ability: Ability) -> Expression {
        let mut parts = vec![d20(), self.modifier_expr(ability)];
        if self.abilities[ability].save_proficient {
            parts.push(self.proficiency_expr());
        }
        sum(parts).named(format!("{} Save", ability))
    }

    pub fn skill_check(&self, skill: Skill) -> Expression {
        let mut parts = vec![d20(), self.modifier_expr(skill.ability())];
        if self.is_proficient(skill) {
            parts.push(self.proficiency_expr());
        }
        sum(parts).named(format!("{} Roll", skill))
    }

    pub fn attack_roll(&self, weapon: &Weapon) -> Expression {
        let mut parts = vec![d20()];
        if let Some(ability) = weapon.ability {
            parts.push(self.modifier_expr(ability));
        }
        if weapon.proficient {
            parts.push(self.proficiency_expr());
        }
        parts.extend(weapon.attack_bonus.clone());
        sum(parts).named(format!("{} Attack Roll", weapon.name))
    }

    pub fn damage_roll(&self, weapon: &Weapon) -> Expression {
        let mut parts: Vec<_> = weapon.damage_die.iter().cloned().collect();
        if let Some(ability) = weapon.ability {
            parts.push(self.modifier_expr(ability));
        }
        parts.extend(weapon.damage_bonus.clone());
        sum(parts).named(format!("{} Damage", weapon.name))
    }
}
