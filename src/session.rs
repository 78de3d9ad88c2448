//! Line commands driving a character sheet, a roller and a feed.

use crate::character::{modifier_label, Ability, Character, Skill};
use crate::common::*;
use crate::error::{Result, SheetError};
use crate::expr::{labelled_summary, multi_die_roll, Expression};
use crate::feed::Feed;
use crate::roll::{PlainStringifier, RollContext, Roller};
use std::fmt;
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  sheet                  show the character sheet
  check <ability>        roll an ability check
  save <ability>         roll a saving throw
  skill <skill>          roll a skill check
  attack <weapon #>      roll a weapon attack
  damage <weapon #>      roll weapon damage
  roll <count> <faces>   roll some dice, e.g. 'roll 2 6'
  feed [json]            show past rolls, newest first
  help                   show this message
  quit                   leave";

/// Default bound on the dice a single command may roll.
pub const MAX_DICE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sheet,
    Check(Ability),
    Save(Ability),
    Skill(Skill),
    Attack(String),
    Damage(String),
    Roll { num_die: Int, die: Int },
    Feed { json: bool },
    Help,
    Quit,
}

fn parse_int(s: &str) -> Result<Int> {
    s.parse().map_err(|_| SheetError::InvalidNumber(s.to_owned()))
}

impl FromStr for Command {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (head, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        let arg = |what: &'static str| {
            if rest.is_empty() {
                Err(SheetError::MissingArgument(what))
            } else {
                Ok(rest)
            }
        };

        Ok(match head.to_lowercase().as_str() {
            "sheet" => Self::Sheet,
            "check" => Self::Check(arg("ability")?.parse()?),
            "save" => Self::Save(arg("ability")?.parse()?),
            "skill" => Self::Skill(arg("skill")?.parse()?),
            "attack" => Self::Attack(arg("weapon number")?.to_owned()),
            "damage" => Self::Damage(arg("weapon number")?.to_owned()),
            "roll" => {
                let mut parts = arg("dice")?.split_whitespace();
                let num_die = parse_int(parts.next().ok_or(SheetError::MissingArgument("count"))?)?;
                let die = parse_int(parts.next().ok_or(SheetError::MissingArgument("faces"))?)?;
                Self::Roll { num_die, die }
            }
            "feed" => Self::Feed {
                json: rest.eq_ignore_ascii_case("json"),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(SheetError::UnknownCommand(s.to_owned())),
        })
    }
}

pub struct Session<R> {
    character: Character,
    feed: Feed,
    ctx: RollContext<R>,
    max_dice: usize,
}

impl<R: Roller> Session<R> {
    pub fn new(character: Character, roller: R) -> Self {
        Self {
            character,
            feed: Feed::new(),
            ctx: RollContext::new(roller),
            max_dice: MAX_DICE,
        }
    }

    /// Replaces the [`MAX_DICE`] bound.
    pub fn with_max_dice(mut self, max_dice: usize) -> Self {
        self.max_dice = max_dice;
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Runs one command and returns the text to show. [`Command::Quit`]
    /// returns an empty string; leaving is up to the caller.
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        let c = &self.character;
        let expr = match command {
            Command::Sheet => return Ok(self.sheet()),
            Command::Feed { json: true } => return self.feed.to_json(),
            Command::Feed { json: false } => return Ok(self.show_feed()),
            Command::Help => return Ok(HELP.to_owned()),
            Command::Quit => return Ok(String::new()),
            Command::Check(ability) => c.ability_check(*ability),
            Command::Save(ability) => c.saving_throw(*ability),
            Command::Skill(skill) => c.skill_check(*skill),
            Command::Attack(n) => c.attack_roll(c.weapon(n)?),
            Command::Damage(n) => c.damage_roll(c.weapon(n)?),
            Command::Roll { num_die, die } => {
                multi_die_roll(*die, *num_die).named(format!("{}d{}", num_die, die))
            }
        };
        self.roll(&expr)
    }

    /// Evaluates `expr`, records it in the feed and renders the result.
    ///
    /// Expressions rolling more than the session's dice bound are refused
    /// before any die is thrown.
    pub fn roll(&mut self, expr: &Expression) -> Result<String> {
        let count = expr.dice_count();
        if count > self.max_dice {
            return Err(SheetError::TooManyDice {
                count,
                max: self.max_dice,
            });
        }
        let result = self.ctx.eval(expr);
        let item = self.feed.push(result);
        Ok(PlainStringifier::new().stringify(&item.result))
    }

    pub fn sheet(&self) -> String {
        SheetView(&self.character).to_string()
    }

    fn show_feed(&self) -> String {
        if self.feed.is_empty() {
            return "no rolls yet".to_owned();
        }
        let mut stringifier = PlainStringifier::new();
        self.feed
            .iter()
            .map(|item| {
                format!(
                    "{}\n  [{}]",
                    stringifier.stringify(&item.result),
                    item.date.to_rfc3339()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Plain-text character sheet: abilities, skills and weapons with their
/// modifiers and formulas.
struct SheetView<'a>(&'a Character);

impl fmt::Display for SheetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        let classes = c
            .classes
            .iter()
            .map(|class| format!("{} {}", class.name, class.level))
            .collect::<Vec<_>>()
            .join(" / ");
        writeln!(f, "{}, {} {}", c.name, c.species, classes)?;
        writeln!(f, "Proficiency Bonus {}", modifier_label(c.proficiency_bonus))?;

        write!(f, "\nAbilities")?;
        for &ability in Ability::ALL {
            let score = &c.abilities[ability];
            write!(
                f,
                "\n  {:<3} {:>2} {:>3}  save {:>3}{}  {}",
                ability.abbreviation(),
                score.score,
                modifier_label(score.modifier()),
                modifier_label(c.save_modifier(ability)),
                if score.save_proficient { "*" } else { " " },
                labelled_summary(&c.saving_throw(ability)),
            )?;
        }

        write!(f, "\n\nSkills")?;
        for &skill in Skill::ALL {
            write!(
                f,
                "\n  {:<16} {:<3} {:>3}{}",
                skill.display_name(),
                skill.ability().abbreviation(),
                modifier_label(c.skill_modifier(skill)),
                if c.is_proficient(skill) { "*" } else { "" },
            )?;
        }

        if !c.weapons.is_empty() {
            write!(f, "\n\nWeapons")?;
        }
        for (i, weapon) in c.weapons.iter().enumerate() {
            write!(f, "\n  {}. {} ({})", i + 1, weapon.name, weapon.damage_type)?;
            write!(f, "\n     {}", labelled_summary(&c.attack_roll(weapon)))?;
            write!(f, "\n     {}", labelled_summary(&c.damage_roll(weapon)))?;
            if let Some(description) = &weapon.description {
                write!(f, "\n     {}", description)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::{Eval, SequenceRoller};

    fn session() -> Session<SequenceRoller> {
        Session::new(Character::sample(), SequenceRoller::new(vec1![17, 3, 5]))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("sheet".parse::<Command>().unwrap(), Command::Sheet);
        assert_eq!(
            "check Strength".parse::<Command>().unwrap(),
            Command::Check(Ability::Strength)
        );
        assert_eq!(
            "SAVE wisdom".parse::<Command>().unwrap(),
            Command::Save(Ability::Wisdom)
        );
        assert_eq!(
            "skill sleight of hand".parse::<Command>().unwrap(),
            Command::Skill(Skill::SleightOfHand)
        );
        assert_eq!(
            "attack 2".parse::<Command>().unwrap(),
            Command::Attack("2".to_owned())
        );
        assert_eq!(
            "roll 2  6".parse::<Command>().unwrap(),
            Command::Roll { num_die: 2, die: 6 }
        );
        assert_eq!("feed".parse::<Command>().unwrap(), Command::Feed { json: false });
        assert_eq!("feed JSON".parse::<Command>().unwrap(), Command::Feed { json: true });
        assert_eq!("  quit ".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("dance".parse::<Command>(), Err(SheetError::UnknownCommand(_))));
        assert!(matches!("check".parse::<Command>(), Err(SheetError::MissingArgument("ability"))));
        assert!(matches!("roll 2".parse::<Command>(), Err(SheetError::MissingArgument("faces"))));
        assert!(matches!("roll two 6".parse::<Command>(), Err(SheetError::InvalidNumber(_))));
        assert!(matches!("skill cooking".parse::<Command>(), Err(SheetError::UnknownSkill(_))));
    }

    #[test]
    fn test_skill_roll() {
        let mut session = session();
        let out = session.execute(&Command::Skill(Skill::Athletics)).unwrap();
        assert_eq!(
            out,
            "  Roll d20 \u{2192} 17\n  Strength Modifier = 4\n  Proficiency Bonus = 3\nAthletics Roll = 17 + 4 + 3 = 24"
        );
        assert_eq!(session.feed().len(), 1);
        assert_eq!(session.feed().latest().unwrap().result.value(), 24);
    }

    #[test]
    fn test_damage_roll() {
        let mut session = session();
        let out = session.execute(&"damage 2".parse().unwrap()).unwrap();
        assert!(out.ends_with("Giant Slayer Sword (vs Giants) Damage = 1 + 4 + 9 = 14"), "{}", out);
        assert!(out.contains("Giant Slaying Bonus = Roll 2d6 \u{2192} 3 + 5 = 8"), "{}", out);
    }

    #[test]
    fn test_adhoc_roll() {
        let mut session = session();
        let out = session.execute(&Command::Roll { num_die: 3, die: 20 }).unwrap();
        assert_eq!(out, "3d20 = Roll 3d20 \u{2192} 17 + 3 + 5 = 25");
    }

    #[test]
    fn test_dice_bound() {
        let mut session = session();
        assert!(matches!(
            session.execute(&"roll 2000000000 6".parse().unwrap()),
            Err(SheetError::TooManyDice {
                count: 2000000000,
                max: MAX_DICE
            })
        ));
        assert!(session.feed().is_empty());

        let out = session.execute(&"roll 2 2147483647".parse().unwrap()).unwrap();
        assert_eq!(out, "2d2147483647 = Roll 2d2147483647 \u{2192} 17 + 3 = 20");

        let mut session = session.with_max_dice(2);
        assert!(session.execute(&Command::Roll { num_die: 2, die: 6 }).is_ok());
        assert!(matches!(
            session.execute(&Command::Roll { num_die: 3, die: 6 }),
            Err(SheetError::TooManyDice { count: 3, max: 2 })
        ));
    }

    #[test]
    fn test_large_totals() {
        let mut session = Session::new(Character::sample(), SequenceRoller::new(vec1![Int::MAX]));
        let out = session.execute(&"roll 4 2147483647".parse().unwrap()).unwrap();
        assert!(out.ends_with("= 2147483647"), "{}", out);
        assert_eq!(session.feed().latest().unwrap().result.value(), Int::MAX);
    }

    #[test]
    fn test_unknown_weapon() {
        let mut session = session();
        assert!(matches!(
            session.execute(&Command::Attack("9".to_owned())),
            Err(SheetError::UnknownWeapon(_))
        ));
        assert!(session.feed().is_empty());
    }

    #[test]
    fn test_feed_output() {
        let mut session = session();
        assert_eq!(session.execute(&Command::Feed { json: false }).unwrap(), "no rolls yet");
        session.execute(&Command::Check(Ability::Dexterity)).unwrap();
        session.execute(&Command::Roll { num_die: 1, die: 6 }).unwrap();
        let out = session.execute(&Command::Feed { json: false }).unwrap();
        let newest = out.find("1d6 = ").unwrap();
        let oldest = out.find("Dexterity Roll").unwrap();
        assert!(newest < oldest);

        let json = session.execute(&Command::Feed { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_sheet() {
        let session = session();
        let sheet = session.sheet();
        assert!(sheet.starts_with("Nemo, Half-Orc Paladin 8\nProficiency Bonus +3\n\nAbilities\n  STR"));
        assert!(sheet.contains("\n\nSkills\n"));
        assert!(sheet.contains("\n\nWeapons\n  1. "));
        assert!(!sheet.ends_with('\n'));
        assert!(sheet.contains("Wisdom Save = d20 + 2"));
        assert!(sheet.contains("Giant Slayer Sword Attack Roll = d20 + 8"));
        assert!(sheet.contains("Unarmed Strike Damage = 5"));
        assert!(session.feed().is_empty());
    }
}
