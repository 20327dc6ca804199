use crate::cli::ProjectArgs;
use crate::config::{resolve_path, VaryConfig, CONFIG_FILE};
use crate::error::{CliError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Environment variables read as settings, without the `VARY_` prefix.
const ENV_KEYS: [&str; 3] = ["variants_file", "out_dir", "public_path"];

/// Settings given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl VaryConfig {
    /// Load settings for a command.
    ///
    /// Returns the settings and the project directory they apply to.
    /// Priority: CLI args > VARY_* environment variables > vary.config.json > defaults
    pub fn load(project: &ProjectArgs, mut overrides: CliOverrides) -> Result<(Self, PathBuf)> {
        let root = match &project.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()?,
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(project.config.as_deref(), &root)? {
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(
            Env::prefixed("VARY_")
                .only(&ENV_KEYS)
                .map(|key| env_key_to_field(key.as_str()).into())
                .lowercase(false),
        );

        if overrides.variants_file.is_none() {
            overrides.variants_file = project.variants_file.clone();
        }
        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment
            .extract()
            .map_err(|e| CliError::Settings(e.to_string()))?;

        Ok((config, root))
    }
}

/// The settings file to read, if any. An explicit path must exist.
fn config_file(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = resolve_path(path, root);
            if !path.is_file() {
                return Err(CliError::FileNotFound(path));
            }
            Ok(Some(path))
        }
        None => {
            let path = root.join(CONFIG_FILE);
            Ok(path.is_file().then_some(path))
        }
    }
}

/// `OUT_DIR` -> `outDir`, matching the camelCase keys of vary.config.json.
pub(super) fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    for (idx, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
        let part = part.to_ascii_lowercase();
        if idx == 0 {
            field.push_str(&part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                field.push(first.to_ascii_uppercase());
                field.push_str(chars.as_str());
            }
        }
    }
    field
}
