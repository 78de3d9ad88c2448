use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid character sheet: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot export feed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown ability {0:?}")]
    UnknownAbility(String),
    #[error("unknown skill {0:?}")]
    UnknownSkill(String),
    #[error("no weapon numbered {0}")]
    UnknownWeapon(String),
    #[error("unknown command {0:?}; try 'help'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("refusing to roll {count} dice at once (the limit is {max})")]
    TooManyDice { count: usize, max: usize },
}

impl SheetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SheetError> = std::result::Result<T, E>;
