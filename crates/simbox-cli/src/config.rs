// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Box config loading: a storage port plus a filesystem adapter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use simbox_geom::{BoxConfig, BoxError, Mat3, SimBox};
use thiserror::Error;

/// Storage port for raw config blobs (keyed by file name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("config not found: {0}")]
    NotFound(String),
    /// I/O error while reading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reads configs as JSON files from one directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Splits a file path into a store over its directory and the key naming it.
    pub fn for_file(path: &Path) -> (Self, String) {
        let base = path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);
        let key = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (Self::new(base), key)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::NotFound(path.display().to_string()))
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }
}

/// Thin service that deserializes JSON configs from a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load and deserialize the config stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let bytes = self.store.load_raw(key)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// On-disk box description: either named parameters or a box matrix.
///
/// A document with a `matrix` key is read in matrix form; anything else must
/// be a [`BoxConfig`]. Both forms reject unknown keys.
#[derive(Debug, Clone)]
pub enum BoxSource {
    /// `{"Lx": .., "Ly": .., "Lz": .., ...}`.
    Params(BoxConfig),
    /// `{"matrix": [[..], [..], [..]], "periodic": [..]}`.
    Matrix(MatrixSource),
}

/// Matrix form of a box config.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixSource {
    /// Rows of the upper-triangular box matrix.
    pub matrix: Vec<Vec<f64>>,
    /// Per-axis periodicity.
    #[serde(default = "all_periodic")]
    pub periodic: [bool; 3],
}

const fn all_periodic() -> [bool; 3] {
    [true; 3]
}

impl<'de> Deserialize<'de> for BoxSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let is_matrix = value.get("matrix").is_some();
        if is_matrix {
            MatrixSource::deserialize(value)
                .map(Self::Matrix)
                .map_err(D::Error::custom)
        } else {
            BoxConfig::deserialize(value)
                .map(Self::Params)
                .map_err(D::Error::custom)
        }
    }
}

impl BoxSource {
    /// Builds the described box.
    pub fn into_box(self) -> Result<SimBox, BoxError> {
        match self {
            Self::Params(cfg) => Ok(SimBox::from_config(&cfg)),
            Self::Matrix(MatrixSource { matrix, periodic }) => {
                let mut b = SimBox::from_matrix(Mat3::try_from(matrix)?)?;
                b.set_periodic(periodic);
                Ok(b)
            }
        }
    }
}
