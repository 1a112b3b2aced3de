use platform_dirs::AppDirs;
use serde::{Serialize, Deserialize, de::DeserializeOwned};
use ron::ser::{to_string_pretty, PrettyConfig};
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};
use log::warn;
use crate::math::base::NumberBase;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no config directory for this platform")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "defaults::start_base")]
    pub start_base: NumberBase,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    use super::NumberBase;
    default_!(start_base, NumberBase);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_base: NumberBase::Decimal,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        load_or_default("radixcalc.cfg")
    }
}

pub fn config_path(file_name: &str) -> Result<PathBuf, ConfigError> {
    let dirs = AppDirs::new(Some("radixcalc"), false).ok_or(ConfigError::NoConfigDir)?;
    fs::create_dir_all(&dirs.config_dir)?;
    Ok(dirs.config_dir.join(file_name))
}

/// Read a RON config, creating it with defaults when missing.
/// Loaded configs are written back so fields added later show up in the file.
pub fn load_or_default<T>(file_name: &str) -> T
where
    T: Serialize + DeserializeOwned + Default,
{
    match config_path(file_name).and_then(|path| try_load(&path)) {
        Ok(conf) => conf,
        Err(e) => {
            warn!("using default {file_name}: {e}");
            T::default()
        },
    }
}

/// An unreadable file is left alone so the user can fix it.
pub fn try_load<T>(path: &Path) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
{
    let conf = match fs::File::open(path) {
        Ok(file) => from_reader::<fs::File, T>(file)?,
        Err(_) => T::default(),
    };
    fs::write(path, to_ron(&conf)?)?;
    Ok(conf)
}

pub fn to_ron<T: Serialize>(conf: &T) -> Result<String, ConfigError> {
    Ok(to_string_pretty(conf, PrettyConfig::default())?)
}

pub fn from_ron<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    Ok(ron::from_str(s)?)
}

#[test]
fn ron_round_trip() {
    let conf = Config { start_base: NumberBase::Hexadecimal };
    let text = to_ron(&conf).unwrap();
    assert_eq!(from_ron::<Config>(&text).unwrap(), conf);
}

#[test]
fn missing_fields_take_defaults() {
    let conf: Config = from_ron("()").unwrap();
    assert_eq!(conf, Config::default());
}

#[test]
fn bad_ron_is_an_error() {
    assert!(matches!(from_ron::<Config>("(start_base: Ternary)"), Err(ConfigError::RonParse(_))));
}

#[cfg(test)]
mod file_tests {
    use super::*;
    use crate::egui_frontend::config::EguiConfig;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radixcalc.cfg");
        let conf: Config = try_load(&path).unwrap();
        assert_eq!(conf, Config::default());
        let written: Config = from_ron(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn partial_file_is_written_back_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("egui.cfg");
        fs::write(&path, "(always_on_top: true)").unwrap();
        let conf: EguiConfig = try_load(&path).unwrap();
        assert!(conf.always_on_top);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("font_size"));
        assert!(text.contains("copy_alert_time"));
        assert_eq!(from_ron::<EguiConfig>(&text).unwrap(), conf);
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radixcalc.cfg");
        fs::write(&path, "(start_base: Ternary").unwrap();
        let result: Result<Config, _> = try_load(&path);
        assert!(matches!(result, Err(ConfigError::RonParse(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "(start_base: Ternary");
    }
}
