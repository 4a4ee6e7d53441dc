//! Engine tunables
//!
//! Balance knobs for the beam engine and artefact generator. Loaded from an
//! rc-style file (`OPTIONS=key:value,...`) or from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many times a single bolt may affect the same actor.
    pub max_hits_per_target: u32,
    pub max_bounces: u32,
    pub max_reflections: u32,
    pub max_explosion_radius: i32,
    /// Omnireflect succeeds with chance `SH / (SH + reflect_denominator)`.
    pub reflect_denominator: i32,
    pub randart_reroll_cap: u32,
    /// Percent of tracer power that must land on foes before a smart
    /// monster fires.
    pub foe_ratio: i32,
    /// Same, for hostile summons that nominally fight for the player.
    pub summoned_foe_ratio: i32,
    pub los_radius: i32,
    /// Per-mille chance that one damage point passes one point of AC under
    /// the proportional rule.
    pub proportional_ac_pass_permille: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_hits_per_target: 2,
            max_bounces: 3,
            max_reflections: 3,
            max_explosion_radius: 9,
            reflect_denominator: 20,
            randart_reroll_cap: 500,
            foe_ratio: 80,
            summoned_foe_ratio: 25,
            los_radius: 8,
            proportional_ac_pass_permille: 970,
        }
    }
}

impl EngineConfig {
    /// Load options from a config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&contents)
        } else {
            Self::parse_config(&contents)
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse options from rc text. Lines starting with `#` are comments.
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.strip_prefix("OPTIONS=") {
                Some(opts) => {
                    for opt in opts.split(',') {
                        let opt = opt.trim();
                        if !opt.is_empty() {
                            config.parse_option(opt)?;
                        }
                    }
                }
                None => return Err(ConfigError::Parse(line.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), ConfigError> {
        let (key, value) = opt
            .split_once(':')
            .or_else(|| opt.split_once('='))
            .ok_or_else(|| ConfigError::MissingValue(opt.to_string()))?;
        let (key, value) = (key.trim(), value.trim());

        let invalid = || ConfigError::InvalidValue(key.to_string(), value.to_string());
        let as_u32 = || value.parse::<u32>().map_err(|_| invalid());
        let as_i32 = || value.parse::<i32>().map_err(|_| invalid());

        match key {
            "max_hits_per_target" => self.max_hits_per_target = as_u32()?,
            "max_bounces" => self.max_bounces = as_u32()?,
            "max_reflections" => self.max_reflections = as_u32()?,
            "max_explosion_radius" => self.max_explosion_radius = as_i32()?,
            "reflect_denominator" => self.reflect_denominator = as_i32()?,
            "randart_reroll_cap" => self.randart_reroll_cap = as_u32()?,
            "foe_ratio" => self.foe_ratio = as_i32()?,
            "summoned_foe_ratio" => self.summoned_foe_ratio = as_i32()?,
            "los_radius" => self.los_radius = as_i32()?,
            "proportional_ac_pass_permille" => self.proportional_ac_pass_permille = as_i32()?,
            _ => return Err(ConfigError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bad = |name: &str, value: i64| {
            Err(ConfigError::InvalidValue(name.to_string(), value.to_string()))
        };
        if !(0..=9).contains(&self.max_explosion_radius) {
            return bad("max_explosion_radius", self.max_explosion_radius.into());
        }
        if self.max_hits_per_target == 0 {
            return bad("max_hits_per_target", 0);
        }
        if self.reflect_denominator <= 0 {
            return bad("reflect_denominator", self.reflect_denominator.into());
        }
        if !(0..=100).contains(&self.foe_ratio) {
            return bad("foe_ratio", self.foe_ratio.into());
        }
        if !(0..=100).contains(&self.summoned_foe_ratio) {
            return bad("summoned_foe_ratio", self.summoned_foe_ratio.into());
        }
        if !(0..=1000).contains(&self.proportional_ac_pass_permille) {
            return bad(
                "proportional_ac_pass_permille",
                self.proportional_ac_pass_permille.into(),
            );
        }
        if self.randart_reroll_cap == 0 {
            return bad("randart_reroll_cap", 0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.foe_ratio, 80);
        assert_eq!(config.max_explosion_radius, 9);
        assert_eq!(config.randart_reroll_cap, 500);
    }

    #[test]
    fn test_parse_options() {
        let text = "# engine tuning\nOPTIONS=max_bounces:5, foe_ratio=50\n\nOPTIONS=los_radius:7";
        let config = EngineConfig::parse_config(text).unwrap();
        assert_eq!(config.max_bounces, 5);
        assert_eq!(config.foe_ratio, 50);
        assert_eq!(config.los_radius, 7);
        assert_eq!(config.max_hits_per_target, 2);
    }

    #[test]
    fn test_unknown_option() {
        let err = EngineConfig::parse_config("OPTIONS=colour:red").unwrap_err();
        assert_eq!(err, ConfigError::UnknownOption("colour".to_string()));
    }

    #[test]
    fn test_invalid_value() {
        let err = EngineConfig::parse_config("OPTIONS=max_bounces:lots").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(..)));
        let err = EngineConfig::parse_config("OPTIONS=max_explosion_radius:12").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(..)));
    }

    #[test]
    fn test_missing_value() {
        let err = EngineConfig::parse_config("OPTIONS=foe_ratio").unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("foe_ratio".to_string()));
    }

    #[test]
    fn test_stray_line_rejected() {
        assert!(matches!(
            EngineConfig::parse_config("BIND=g:pickup"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = EngineConfig::default();
        config.max_reflections = 1;
        let json = config.to_json().unwrap();
        let back = EngineConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = EngineConfig::from_json(r#"{ "foe_ratio": 60 }"#).unwrap();
        assert_eq!(config.foe_ratio, 60);
        assert_eq!(config.max_bounces, 3);
    }
}
