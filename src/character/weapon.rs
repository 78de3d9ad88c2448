use super::Ability;
use crate::expr::Expression;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage_type: String,
    #[serde(default)]
    pub proficient: bool,
    /// Ability whose modifier applies to attack and damage.
    #[serde(default)]
    pub ability: Option<Ability>,
    #[serde(default)]
    pub damage_die: Option<Expression>,
    #[serde(default)]
    pub attack_bonus: Option<Expression>,
    #[serde(default)]
    pub damage_bonus: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            damage_type: damage_type.into(),
            proficient: false,
            ability: None,
            damage_die: None,
            attack_bonus: None,
            damage_bonus: None,
            description: None,
        }
    }

    pub fn proficient(mut self, proficient: bool) -> Self {
        self.proficient = proficient;
        self
    }

    pub fn ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn damage_die(mut self, die: Expression) -> Self {
        self.damage_die = Some(die);
        self
    }

    pub fn attack_bonus(mut self, bonus: Expression) -> Self {
        self.attack_bonus = Some(bonus);
        self
    }

    pub fn damage_bonus(mut self, bonus: Expression) -> Self {
        self.damage_bonus = Some(bonus);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
