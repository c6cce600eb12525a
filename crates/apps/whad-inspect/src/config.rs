use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Frames longer than this are refused before decoding.
pub const DEFAULT_MAX_FRAME_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    pub max_frame_len: usize,
    pub pretty: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self { max_frame_len: DEFAULT_MAX_FRAME_LEN, pretty: true }
    }
}

impl InspectConfig {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, std::io::Error> {
        match path {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }
}
