//! Static profile and move table.
//!
//! The bundled seed is compiled into the binary. A replacement file can be
//! named in [`SeedSettings`]. Either way the move table is checked for
//! completeness before anything is shown.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coaching::{ConfigurationError, TrainingConfig, UserProfileData};
use crate::storage::config::SeedSettings;

/// Seed bundled with the application.
pub const EMBEDDED_SEED: &str = include_str!("../../seed/profile.toml");

/// The user profile together with the move table it is resolved against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// User profile
    pub profile: UserProfileData,
    /// Move name per exercise type and level
    pub moves: TrainingConfig,
}

impl SeedData {
    /// Parse and validate the bundled seed.
    pub fn embedded() -> SeedResult<Self> {
        Self::from_toml_str(EMBEDDED_SEED)
    }

    /// Parse and validate seed data in TOML form.
    pub fn from_toml_str(content: &str) -> SeedResult<Self> {
        let seed: SeedData =
            toml::from_str(content).map_err(|e| SeedError::ParseError(e.to_string()))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Parse and validate seed data in JSON form.
    pub fn from_json_str(content: &str) -> SeedResult<Self> {
        let seed: SeedData =
            serde_json::from_str(content).map_err(|e| SeedError::ParseError(e.to_string()))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Read seed data from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> SeedResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content =
            std::fs::read_to_string(path).map_err(|e| SeedError::IoError(e.to_string()))?;

        match extension.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(SeedError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Check the invariants the views rely on.
    ///
    /// The move table must be complete and session ids unique. Missing
    /// recommendations are only logged; they resolve to the default level.
    pub fn validate(&self) -> SeedResult<()> {
        self.moves.validate()?;

        let mut seen = HashSet::new();
        for session in &self.profile.sessions {
            if !seen.insert(session.id.as_str()) {
                return Err(SeedError::DuplicateSessionId(session.id.clone()));
            }
        }

        for exercise in self.profile.recommendations.missing() {
            tracing::warn!("Seed profile has no recommended level for {}", exercise);
        }

        Ok(())
    }
}

/// Load the seed named by `settings`, or the bundled one.
pub fn load_seed(settings: &SeedSettings) -> SeedResult<SeedData> {
    match &settings.profile_path {
        Some(path) => {
            tracing::info!("Loading seed data from {}", path.display());
            SeedData::from_path(path)
        }
        None => {
            tracing::info!("Using bundled seed data");
            SeedData::embedded()
        }
    }
}

/// Seed loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported seed format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate session id: {0}")]
    DuplicateSessionId(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Result type for seed loading.
pub type SeedResult<T> = Result<T, SeedError>;
