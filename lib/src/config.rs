//! Writer configuration parsed from a `key=value` command line.
//!
//! Firmware usually passes these through a boot argument string or a build
//! constant, e.g. `"ledseg.colon=1 ledseg.clock=12 ledseg.log=debug"`.

use core::fmt;
use core::str::FromStr;

use crate::klog::{KlogLevel, klog_set_level};
use crate::numfmt::MAX_FLOAT_PRECISION;

const DEFAULT_COLON_DIGIT: u8 = 1;
const DEFAULT_CLOCK_MODE: ClockMode = ClockMode::H24;
const DEFAULT_FLOAT_PRECISION: u8 = 2;
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockMode {
    /// Leading zero on the hour: `09:05`.
    H24,
    /// Leading space on the hour: ` 9:05`.
    H12,
}

impl FromStr for ClockMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "24" | "24h" => Ok(ClockMode::H24),
            "12" | "12h" => Ok(ClockMode::H12),
            _ => Err(()),
        }
    }
}

impl ClockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockMode::H24 => "24",
            ClockMode::H12 => "12",
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriterConfig {
    /// Cell whose decimal point is wired to the clock colon.
    pub colon_digit: u8,
    pub clock_mode: ClockMode,
    /// Default fraction digits for float output.
    pub float_precision: u8,
    pub log_level: KlogLevel,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            colon_digit: DEFAULT_COLON_DIGIT,
            clock_mode: DEFAULT_CLOCK_MODE,
            float_precision: DEFAULT_FLOAT_PRECISION,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WriterConfig {
    /// Push the configured level into klog.
    pub fn apply_log_level(&self) {
        klog_set_level(self.log_level);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError<'a> {
    /// A `ledseg.` key this version does not know.
    UnknownKey(&'a str),
    /// A known key with a value that does not parse or is out of range.
    InvalidValue { key: &'a str, value: &'a str },
}

impl fmt::Display for ConfigError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(key) => write!(f, "unknown key '{}'", key),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for '{}'", value, key)
            }
        }
    }
}

fn apply_token<'a>(cfg: &mut WriterConfig, token: &'a str) -> Result<(), ConfigError<'a>> {
    let Some(rest) = token.strip_prefix("ledseg.") else {
        // Tokens for other subsystems share the command line.
        return Ok(());
    };
    let (key, value) = rest.split_once('=').unwrap_or((rest, ""));
    let invalid = || ConfigError::InvalidValue { key, value };

    match key {
        "colon" => cfg.colon_digit = value.parse::<u8>().map_err(|_| invalid())?,
        "clock" => cfg.clock_mode = value.parse::<ClockMode>().map_err(|_| invalid())?,
        "precision" => {
            let prec = value.parse::<u8>().map_err(|_| invalid())?;
            if prec > MAX_FLOAT_PRECISION {
                return Err(invalid());
            }
            cfg.float_precision = prec;
        }
        "log" => cfg.log_level = KlogLevel::from_name(value).ok_or_else(invalid)?,
        _ => return Err(ConfigError::UnknownKey(key)),
    }
    Ok(())
}

/// Strict parse: the first bad `ledseg.` token is reported.
pub fn parse(cmdline: &str) -> Result<WriterConfig, ConfigError<'_>> {
    let mut cfg = WriterConfig::default();
    for token in cmdline.split_whitespace() {
        apply_token(&mut cfg, token)?;
    }
    Ok(cfg)
}

/// Lenient parse: bad tokens are logged and skipped, defaults fill the gaps.
pub fn config_from_cmdline(cmdline: Option<&str>) -> WriterConfig {
    let mut cfg = WriterConfig::default();
    if let Some(cmdline) = cmdline {
        for token in cmdline.split_whitespace() {
            if let Err(err) = apply_token(&mut cfg, token) {
                crate::klog_warn!("ledseg: ignoring config token: {}", err);
            }
        }
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = config_from_cmdline(None);
        assert_eq!(cfg, WriterConfig::default());
        assert_eq!(cfg.colon_digit, 1);
        assert_eq!(cfg.clock_mode, ClockMode::H24);
        assert_eq!(cfg.float_precision, 2);
        assert_eq!(cfg.log_level, KlogLevel::Info);
    }

    #[test]
    fn parses_all_keys() {
        let cfg = parse("quiet ledseg.colon=2 ledseg.clock=12 ledseg.precision=3 ledseg.log=trace")
            .unwrap();
        assert_eq!(cfg.colon_digit, 2);
        assert_eq!(cfg.clock_mode, ClockMode::H12);
        assert_eq!(cfg.float_precision, 3);
        assert_eq!(cfg.log_level, KlogLevel::Trace);
    }

    #[test]
    fn clock_mode_names() {
        assert_eq!("12h".parse::<ClockMode>(), Ok(ClockMode::H12));
        assert_eq!("24".parse::<ClockMode>(), Ok(ClockMode::H24));
        assert_eq!("13".parse::<ClockMode>(), Err(()));
        for mode in [ClockMode::H24, ClockMode::H12] {
            assert_eq!(mode.as_str().parse::<ClockMode>(), Ok(mode));
        }
    }

    #[test]
    fn apply_log_level_sets_klog() {
        use crate::klog::{TEST_LOCK, klog_get_level, klog_init};

        let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        parse("ledseg.log=debug").unwrap().apply_log_level();
        assert_eq!(klog_get_level(), KlogLevel::Debug);
        WriterConfig::default().apply_log_level();
        assert_eq!(klog_get_level(), KlogLevel::Info);
        klog_init();
    }

    #[test]
    fn strict_parse_reports_first_error() {
        assert_eq!(
            parse("ledseg.colon=x"),
            Err(ConfigError::InvalidValue {
                key: "colon",
                value: "x"
            })
        );
        assert_eq!(
            parse("ledseg.precision=9"),
            Err(ConfigError::InvalidValue {
                key: "precision",
                value: "9"
            })
        );
        assert_eq!(parse("ledseg.bright=4"), Err(ConfigError::UnknownKey("bright")));
        assert_eq!(
            parse("ledseg.clock"),
            Err(ConfigError::InvalidValue {
                key: "clock",
                value: ""
            })
        );
    }

    #[test]
    fn lenient_parse_keeps_good_tokens() {
        let cfg = config_from_cmdline(Some("ledseg.colon=300 ledseg.clock=12h ledseg.zzz=1"));
        assert_eq!(cfg.colon_digit, DEFAULT_COLON_DIGIT);
        assert_eq!(cfg.clock_mode, ClockMode::H12);
    }
}
