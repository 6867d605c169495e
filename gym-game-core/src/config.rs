//! Configuration files.
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// A configuration stored in a YAML file.
pub trait YamlConfig: Serialize + DeserializeOwned {
    /// Constructs the configuration from a YAML file.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves the configuration as a YAML file.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempdir::TempDir;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestConfig {
        name: String,
        max_steps: Option<usize>,
    }

    impl YamlConfig for TestConfig {}

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = TestConfig {
            name: "grid".to_string(),
            max_steps: Some(100),
        };

        let dir = TempDir::new("yaml_config")?;
        let path = dir.path().join("config.yaml");
        config.save(&path)?;
        let config_ = TestConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(TestConfig::load("/nonexistent/config.yaml").is_err());
    }
}
