//! stonebolt core
//!
//! Ranged-attack and area-effect resolution for a grid roguelike: bolts that
//! trace, bounce, pierce and explode; the armour and resistance model they
//! feed into; the spell catalog built on top of them; and the randomized
//! artefact property generator that equipment lookups depend on.

pub mod artefact;
pub mod beam;
pub mod config;
pub mod errors;
pub mod geom;
pub mod item;
pub mod resist;
pub mod spell;
pub mod spells;
pub mod world;

pub use config::EngineConfig;
pub use errors::{ArtefactError, ConfigError, TableError};
pub use geom::Coord;
pub use sb_rng::{DiceDef, GameRng, calc_dice};
pub use world::World;
