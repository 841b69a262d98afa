use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    log_directory: String,
    log_filename: String,
    garage_path: String
}

impl DemoSettings {
    const LOG_DIRECTORY: &'static str = "log_directory";
    const LOG_FILENAME: &'static str = "log_filename";
    const GARAGE_PATH: &'static str = "garage_path";
    const CONFIG_FILENAME: &'static str = "gearshift-conf";
    const ENV_PREFIX: &'static str = "GEARSHIFT";

    const DEFAULT_LOG_DIRECTORY: &'static str = ".";
    const DEFAULT_LOG_FILENAME: &'static str = "gearshift.log";
    const DEFAULT_GARAGE_PATH: &'static str = "garage.toml";

    pub fn default() -> Self {
        DemoSettings {
            log_directory: DemoSettings::DEFAULT_LOG_DIRECTORY.to_string(),
            log_filename: DemoSettings::DEFAULT_LOG_FILENAME.to_string(),
            garage_path: DemoSettings::DEFAULT_GARAGE_PATH.to_string()
        }
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(DemoSettings::LOG_DIRECTORY, DemoSettings::DEFAULT_LOG_DIRECTORY)?
            .set_default(DemoSettings::LOG_FILENAME, DemoSettings::DEFAULT_LOG_FILENAME)?
            .set_default(DemoSettings::GARAGE_PATH, DemoSettings::DEFAULT_GARAGE_PATH)
    }

    pub fn load() -> Result<Self, ConfigError> {
        let path = PathBuf::from(format!("{}.toml", DemoSettings::CONFIG_FILENAME));
        DemoSettings::load_from(&path, DemoSettings::ENV_PREFIX)
    }

    /// Read settings from the toml file at `path` with `env_prefix` overrides.
    /// A missing file is created with the resolved values; a file that fails
    /// to parse is an error and is left untouched
    pub fn load_from(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        let environment = config::Environment::with_prefix(env_prefix);
        if !path.is_file() {
            let ret: DemoSettings = DemoSettings::defaults()?
                .add_source(environment)
                .build()?
                .try_deserialize()?;
            ret.write_to(path).unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
            return Ok(ret);
        }
        DemoSettings::defaults()?
            .add_source(config::File::from(path))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn log_directory(&self) -> PathBuf {
        PathBuf::from(&self.log_directory)
    }

    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }

    pub fn garage_path(&self) -> PathBuf {
        PathBuf::from(&self.garage_path)
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};
    use std::path::PathBuf;
    use crate::settings::DemoSettings;

    fn scratch_file(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("gearshift-{}-{}.toml", process::id(), name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn defaults_deserialize() {
        let settings: DemoSettings = DemoSettings::defaults().unwrap().build().unwrap().try_deserialize().unwrap();
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(settings.garage_path(), PathBuf::from("garage.toml"));
        assert_eq!(settings.log_filename(), "gearshift.log");
    }

    #[test]
    fn file_values_override_defaults() {
        let settings: DemoSettings = DemoSettings::defaults().unwrap()
            .add_source(config::File::from_str("garage_path = \"cars/fleet.toml\"", config::FileFormat::Toml))
            .build().unwrap()
            .try_deserialize().unwrap();
        assert_eq!(settings.garage_path(), PathBuf::from("cars/fleet.toml"));
        assert_eq!(settings.log_directory(), PathBuf::from("."));
    }

    #[test]
    fn malformed_file_is_an_error_and_kept() {
        let path = scratch_file("malformed");
        let contents = "garage_path = \"cars/fleet.toml\"\nlog_directory = [";
        fs::write(&path, contents).unwrap();
        assert!(DemoSettings::load_from(&path, "GEARSHIFT_MALFORMED_TEST").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_file("missing");
        let settings = DemoSettings::load_from(&path, "GEARSHIFT_MISSING_TEST").unwrap();
        assert_eq!(settings, DemoSettings::default());
        let written: DemoSettings = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, settings);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_file_is_read() {
        let path = scratch_file("existing");
        fs::write(&path, "log_filename = \"drive.log\"").unwrap();
        let settings = DemoSettings::load_from(&path, "GEARSHIFT_EXISTING_TEST").unwrap();
        assert_eq!(settings.log_filename(), "drive.log");
        assert_eq!(settings.garage_path(), PathBuf::from("garage.toml"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn environment_overrides_file() {
        let path = scratch_file("environment");
        fs::write(&path, "garage_path = \"cars/fleet.toml\"").unwrap();
        env::set_var("GEARSHIFT_ENV_TEST_GARAGE_PATH", "env/garage.toml");
        let settings = DemoSettings::load_from(&path, "GEARSHIFT_ENV_TEST");
        env::remove_var("GEARSHIFT_ENV_TEST_GARAGE_PATH");
        assert_eq!(settings.unwrap().garage_path(), PathBuf::from("env/garage.toml"));
        fs::remove_file(&path).unwrap();
    }
}
