use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases and strips spaces, dashes and underscores so user input like
/// `"Sleight of Hand"` and `"sleight_of_hand"` compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $Name:ident, $err:ident {
            $($Variant:ident => $display:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $Name {
            $($Variant,)+
        }

        impl $Name {
            pub const ALL: &'static [Self] = &[$(Self::$Variant),+];

            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Self::$Variant => $display,)+
                }
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl FromStr for $Name {
            type Err = SheetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|x| normalize(x.display_name()) == wanted)
                    .ok_or_else(|| SheetError::$err(s.to_owned()))
            }
        }
    };
}

keyed_enum!(
    /// The six ability scores.
    Ability, UnknownAbility {
        Strength => "Strength";
        Dexterity => "Dexterity";
        Constitution => "Constitution";
        Intelligence => "Intelligence";
        Wisdom => "Wisdom";
        Charisma => "Charisma";
    }
);

keyed_enum!(
    Skill, UnknownSkill {
        Acrobatics => "Acrobatics";
        AnimalHandling => "Animal Handling";
        Arcana => "Arcana";
        Athletics => "Athletics";
        Deception => "Deception";
        History => "History";
        Insight => "Insight";
        Intimidation => "Intimidation";
        Investigation => "Investigation";
        Medicine => "Medicine";
        Nature => "Nature";
        Perception => "Perception";
        Performance => "Performance";
        Persuasion => "Persuasion";
        Religion => "Religion";
        SleightOfHand => "Sleight of Hand";
        Stealth => "Stealth";
        Survival => "Survival";
    }
);

impl Ability {
    /// Three-letter abbreviation, e.g. `STR`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl Skill {
    /// The ability a check with this skill adds.
    pub fn ability(self) -> Ability {
        use Ability::*;
        match self {
            Self::Athletics => Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Dexterity,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Intelligence,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Charisma
            }
        }
    }
}
