//! Game tunables and configuration file loading
//!
//! The rc file uses the same shape as other roguelike option files:
//!
//! ```text
//! # comments and blank lines are ignored
//! OPTIONS=seconds_per_system:10,move_chance:80
//! OPTIONS=!delays
//! ```
//!
//! Durations are given in milliseconds and percentages as integers in 0..=100.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::OptionsError;

/// Name of the rc file looked up in the home directory
pub const RC_FILE_NAME: &str = ".bitmasherrc";

/// Largest accepted `seconds_per_system`
pub const MAX_SECONDS_PER_SYSTEM: u64 = 3600;

/// Largest accepted fighter stat or boost. Keeps the boss arithmetic in
/// range for any number of missing items.
pub const MAX_FIGHTER_STAT: i32 = 100_000;

/// User-configurable game tunables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Time the player is given per system generated
    pub seconds_per_system: u64,
    /// Time it takes to SCAN the neighbouring systems
    pub scan_time: Duration,
    /// Chance a neighbour SCAN fails, in percent
    pub scan_fail_chance: u32,
    /// Steps the traverser can take before it gives up placing a system
    pub max_steps: u32,
    /// Chance the traverser moves instead of attaching, in percent.
    /// Larger values make spikier maps.
    pub move_chance: u32,
    /// Pause before each move of a battle
    pub battle_move_delay: Duration,
    pub fighter_base_health: i32,
    /// Extra RANSOMWARE health per missing code fragment
    pub code_fragment_health_boost: i32,
    pub fighter_base_damage: i32,
    /// Extra player damage. The boss can only be beaten when this is positive.
    pub player_damage_boost: i32,
    /// Extra RANSOMWARE damage per missing vulnerability
    pub vulnerability_damage_boost: i32,
    /// Pause after each printed line for the slow-scroll effect
    pub print_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seconds_per_system: 8,
            scan_time: Duration::from_millis(800),
            scan_fail_chance: 10,
            max_steps: 100,
            move_chance: 70,
            battle_move_delay: Duration::from_millis(700),
            fighter_base_health: 50,
            code_fragment_health_boost: 25,
            fighter_base_damage: 10,
            player_damage_boost: 5,
            vulnerability_damage_boost: 10,
            print_delay: Duration::from_millis(110),
        }
    }
}

impl GameConfig {
    /// Default rc file location, `$HOME/.bitmasherrc`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(RC_FILE_NAME))
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut config = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        config.parse_option(opt)?;
                    }
                }
            } else {
                return Err(OptionsError::UnknownOption(line.to_string()));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Zero every presentation delay
    pub fn without_delays(mut self) -> Self {
        self.set_delays(false);
        self
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.scan_fail_chance > 100 {
            return Err(invalid("scan_fail_chance", self.scan_fail_chance));
        }
        if self.move_chance > 100 {
            return Err(invalid("move_chance", self.move_chance));
        }
        if self.max_steps == 0 {
            return Err(invalid("max_steps", self.max_steps));
        }
        if self.seconds_per_system > MAX_SECONDS_PER_SYSTEM {
            return Err(invalid("seconds_per_system", self.seconds_per_system));
        }
        let stats = [
            ("fighter_base_health", self.fighter_base_health),
            ("code_fragment_health_boost", self.code_fragment_health_boost),
            ("fighter_base_damage", self.fighter_base_damage),
            ("player_damage_boost", self.player_damage_boost),
            ("vulnerability_damage_boost", self.vulnerability_damage_boost),
        ];
        if let Some((name, value)) = stats.iter().find(|(_, v)| *v > MAX_FIGHTER_STAT) {
            return Err(invalid(name, value));
        }
        if self.fighter_base_health <= 0 {
            return Err(invalid("fighter_base_health", self.fighter_base_health));
        }
        if self.fighter_base_damage + self.player_damage_boost <= 0 {
            return Err(invalid("player_damage_boost", self.player_damage_boost));
        }
        if self.player_damage_boost == 0 {
            log::warn!("player_damage_boost is 0; the RANSOMWARE may be unbeatable");
        }
        Ok(())
    }

    fn set_delays(&mut self, enabled: bool) {
        if enabled {
            let defaults = Self::default();
            self.scan_time = defaults.scan_time;
            self.battle_move_delay = defaults.battle_move_delay;
            self.print_delay = defaults.print_delay;
        } else {
            self.scan_time = Duration::ZERO;
            self.battle_move_delay = Duration::ZERO;
            self.print_delay = Duration::ZERO;
        }
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };

        match name {
            "delays" => self.set_delays(!negated),
            _ if self.is_value_option(name) => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn is_value_option(&self, name: &str) -> bool {
        matches!(
            name,
            "seconds_per_system"
                | "scan_time"
                | "scan_fail_chance"
                | "max_steps"
                | "move_chance"
                | "battle_move_delay"
                | "fighter_base_health"
                | "code_fragment_health_boost"
                | "fighter_base_damage"
                | "player_damage_boost"
                | "vulnerability_damage_boost"
                | "print_delay"
        )
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        match name {
            "seconds_per_system" => self.seconds_per_system = parse(name, value)?,
            "scan_time" => self.scan_time = Duration::from_millis(parse(name, value)?),
            "scan_fail_chance" => self.scan_fail_chance = parse_percent(name, value)?,
            "max_steps" => self.max_steps = parse(name, value)?,
            "move_chance" => self.move_chance = parse_percent(name, value)?,
            "battle_move_delay" => {
                self.battle_move_delay = Duration::from_millis(parse(name, value)?);
            }
            "fighter_base_health" => self.fighter_base_health = parse_stat(name, value)?,
            "code_fragment_health_boost" => {
                self.code_fragment_health_boost = parse_stat(name, value)?;
            }
            "fighter_base_damage" => self.fighter_base_damage = parse_stat(name, value)?,
            "player_damage_boost" => self.player_damage_boost = parse_stat(name, value)?,
            "vulnerability_damage_boost" => {
                self.vulnerability_damage_boost = parse_stat(name, value)?;
            }
            "print_delay" => self.print_delay = Duration::from_millis(parse(name, value)?),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn invalid(name: &str, value: impl ToString) -> OptionsError {
    OptionsError::InvalidValue(name.to_string(), value.to_string())
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, OptionsError> {
    value.parse().map_err(|_| invalid(name, value))
}

fn parse_percent(name: &str, value: &str) -> Result<u32, OptionsError> {
    let percent: u32 = parse(name, value)?;
    if percent > 100 {
        return Err(invalid(name, value));
    }
    Ok(percent)
}

/// Fighter stats are never negative
fn parse_stat(name: &str, value: &str) -> Result<i32, OptionsError> {
    let stat: i32 = parse(name, value)?;
    if stat < 0 {
        return Err(invalid(name, value));
    }
    Ok(stat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seconds_per_system, 8);
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.move_chance, 70);
        assert_eq!(config.scan_fail_chance, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_value_options() {
        let config = "# tuning\n\nOPTIONS=seconds_per_system:12, move_chance=80\nOPTIONS=scan_time:250";
        let config = GameConfig::parse_config(config).unwrap();
        assert_eq!(config.seconds_per_system, 12);
        assert_eq!(config.move_chance, 80);
        assert_eq!(config.scan_time, Duration::from_millis(250));
    }

    #[test]
    fn test_parse_delays_toggle() {
        let config = GameConfig::parse_config("OPTIONS=!delays").unwrap();
        assert_eq!(config.print_delay, Duration::ZERO);
        assert_eq!(config.battle_move_delay, Duration::ZERO);
        assert_eq!(config.scan_time, Duration::ZERO);

        let config = GameConfig::parse_config("OPTIONS=!delays,delays").unwrap();
        assert_eq!(config.print_delay, GameConfig::default().print_delay);
    }

    #[test]
    fn test_unknown_option() {
        assert_eq!(
            GameConfig::parse_config("OPTIONS=colour"),
            Err(OptionsError::UnknownOption("colour".to_string()))
        );
        assert!(matches!(
            GameConfig::parse_config("BIND=g:pickup"),
            Err(OptionsError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            GameConfig::parse_config("OPTIONS=move_chance:101"),
            Err(OptionsError::InvalidValue("move_chance".into(), "101".into()))
        );
        assert!(GameConfig::parse_config("OPTIONS=max_steps:lots").is_err());
        assert!(GameConfig::parse_config("OPTIONS=max_steps:0").is_err());
        assert!(GameConfig::parse_config("OPTIONS=fighter_base_damage:-1").is_err());
        assert!(
            GameConfig::parse_config("OPTIONS=fighter_base_damage:0,player_damage_boost:0")
                .is_err()
        );
    }

    #[test]
    fn test_oversized_values_are_rejected() {
        assert_eq!(
            GameConfig::parse_config("OPTIONS=seconds_per_system:9223372036854775807"),
            Err(OptionsError::InvalidValue(
                "seconds_per_system".into(),
                "9223372036854775807".into()
            ))
        );
        assert_eq!(
            GameConfig::parse_config("OPTIONS=code_fragment_health_boost:2147483647"),
            Err(OptionsError::InvalidValue(
                "code_fragment_health_boost".into(),
                "2147483647".into()
            ))
        );
        assert!(GameConfig::parse_config("OPTIONS=vulnerability_damage_boost:100001").is_err());

        let config = GameConfig::parse_config(&format!(
            "OPTIONS=seconds_per_system:{MAX_SECONDS_PER_SYSTEM},fighter_base_health:{MAX_FIGHTER_STAT}"
        ))
        .unwrap();
        assert_eq!(config.seconds_per_system, MAX_SECONDS_PER_SYSTEM);
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            GameConfig::parse_config("OPTIONS=max_steps"),
            Err(OptionsError::MissingValue("max_steps".to_string()))
        );
    }

    #[test]
    fn test_without_delays() {
        let config = GameConfig::default().without_delays();
        assert_eq!(config.print_delay, Duration::ZERO);
        assert_eq!(config.max_steps, 100);
    }
}
