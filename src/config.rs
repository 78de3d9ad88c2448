use crate::character::Character;
use crate::error::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

pub const CHARACTER_VAR: &str = "SHEET_DICE_CHARACTER";
pub const SEED_VAR: &str = "SHEET_DICE_SEED";

/// Startup options for the `sheet` front end.
///
/// Command-line flags win over environment variables.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "sheet")]
#[command(about = "Roll checks, saves and attacks from a character sheet")]
pub struct Config {
    /// TOML character file; the built-in sample character when unset
    #[arg(long, short, env = CHARACTER_VAR)]
    pub character: Option<PathBuf>,
    /// RNG seed for reproducible rolls
    #[arg(long, short, env = SEED_VAR)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn load_character(&self) -> Result<Character> {
        match &self.character {
            Some(path) => Character::load(path),
            None => {
                log::info!("no character file given; using the sample character");
                Ok(Character::sample())
            }
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetError;
    use clap::error::ErrorKind;
    use rand::Rng;

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from(["sheet", "--character", "tess.toml", "-s", "12"]).unwrap();
        assert_eq!(config.character, Some(PathBuf::from("tess.toml")));
        assert_eq!(config.seed, Some(12));

        let config = Config::try_parse_from(["sheet", "-c", "nemo.toml", "--seed", "0"]).unwrap();
        assert_eq!(config.character, Some(PathBuf::from("nemo.toml")));
        assert_eq!(config.seed, Some(0));
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| Config::try_parse_from(args).unwrap_err().kind();
        assert_eq!(kind(&["sheet", "--seed"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["sheet", "--seed", "many"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["sheet", "--verbose"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_sample_character() {
        let config = Config::default();
        assert_eq!(config.load_character().unwrap().name, "Nemo");
    }

    #[test]
    fn test_missing_character_file() {
        let config = Config {
            character: Some(PathBuf::from("/nonexistent/character.toml")),
            seed: None,
        };
        assert!(matches!(config.load_character(), Err(SheetError::Io { .. })));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = Config {
            character: None,
            seed: Some(99),
        };
        let a: Vec<u32> = config.rng().sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = config.rng().sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }
}
