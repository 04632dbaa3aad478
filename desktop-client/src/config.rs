use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigStore, FileConfigSource, Validate};
use snake_common::games::snake::ArenaSettings;

use crate::constants::CONFIG_FILE;

pub fn get_config_store(path: Option<&str>) -> ConfigStore<FileConfigSource, ClientConfig> {
    ConfigStore::from_yaml_file(path.unwrap_or(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub settings: ArenaSettings,
    /// How many feedback lines the event feed keeps.
    pub event_feed_size: usize,
    /// Frame clock period for `--headless`.
    pub frame_interval_ms: u64,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.settings.validate()?;
        if self.event_feed_size == 0 || self.event_feed_size > 200 {
            return Err("event_feed_size must be between 1 and 200".to_string());
        }
        if self.frame_interval_ms == 0 || self.frame_interval_ms > 100 {
            return Err("frame_interval_ms must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            settings: ArenaSettings::default(),
            event_feed_size: 8,
            frame_interval_ms: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{from_yaml, to_yaml, ConfigSource};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_arena_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serialized = to_yaml(&default_config);
        assert!(serialized.is_ok());
        let deserialized: Result<ClientConfig, String> = from_yaml(&serialized.unwrap());
        assert!(deserialized.is_ok());
        assert_eq!(default_config, deserialized.unwrap());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = ClientConfig::default();
        let file_path = get_temp_file_path();
        dbg!(&file_path);
        let source = FileConfigSource::new(file_path);

        let serialized = to_yaml(&default_config).unwrap();
        assert!(source.write_content(&serialized).is_ok());

        let read_result = source.read_content();
        assert!(read_result.is_ok());
        let read_string = read_result.unwrap().unwrap();

        let deserialized: ClientConfig = from_yaml(&read_string).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_store() {
        let mut config = ClientConfig::default();
        config.settings.two_player = true;
        config.event_feed_size = 20;
        let store = get_config_store(Some(&get_temp_file_path()));

        assert!(store.save(&config).is_ok());

        let loaded = store.load();
        assert!(loaded.is_ok());
        assert_eq!(config, loaded.unwrap());

        let loaded_again = store.load();
        assert_eq!(config, loaded_again.unwrap());
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let store = get_config_store(Some("this_file_does_not_exist.yaml"));
        let loaded = store.load();
        assert!(loaded.is_ok());
        assert_eq!(ClientConfig::default(), loaded.unwrap());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ClientConfig::default();
        config.event_feed_size = 0;
        let store = get_config_store(Some(&get_temp_file_path()));
        assert!(store.save(&config).is_err());

        let file_path = get_temp_file_path();
        let source = FileConfigSource::new(file_path.clone());
        let mut broken = ClientConfig::default();
        broken.settings.board.width = 805;
        source.write_content(&to_yaml(&broken).unwrap()).unwrap();
        let store = get_config_store(Some(&file_path));
        assert!(store.load().is_err());
    }
}
