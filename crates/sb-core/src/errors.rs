//! Error types

use thiserror::Error;

use crate::spell::SpellId;

/// A static spell table row that breaks a load-time invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("spell {spell} has level {level}, expected 1..=9")]
    LevelOutOfRange { spell: SpellId, level: i32 },

    #[error("spell {spell} has min range {min} above max range {max}")]
    RangeInverted { spell: SpellId, min: i32, max: i32 },

    #[error("targeted spell {spell} needs a positive range, got {min}..={max}")]
    TargetedWithoutRange { spell: SpellId, min: i32, max: i32 },

    #[error("spell {spell} has a non-positive power cap {cap}")]
    BadPowerCap { spell: SpellId, cap: i32 },

    #[error("spell {spell} appears twice in the table")]
    Duplicate { spell: SpellId },

    #[error("spell {spell} has no table entry")]
    Missing { spell: SpellId },
}

/// Failure loading or parsing the engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

/// Artefact creation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtefactError {
    #[error("{0} items cannot become artefacts")]
    NotArtefactClass(String),

    #[error("item is already an unrandart")]
    AlreadyUnrandart,

    #[error("no valid property set after {tries} rerolls, fallback properties installed")]
    RerollExhausted { tries: u32 },

    #[error("{god} does not gift {item}")]
    InvalidGift { god: String, item: String },

    #[error("unrandart '{0}' already exists")]
    UniqueExists(&'static str),

    #[error("unknown unrandart index {0}")]
    UnknownUnrand(usize),

    #[error("no such item")]
    NoSuchItem,
}
