use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use fnorm_name::NameOptions;
use fnorm_pack::PackOptions;
use serde::{Deserialize, Serialize};

/// Layered settings: built-in defaults, then `fnorm.toml`, then `FNORM_*` variables.
///
/// ```toml
/// [name]
/// max_len = 255
/// fallback = "unnamed"
///
/// [pack]
/// archive_name = "normalized_files.zip"
/// compression = "deflated"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub name: NameOptions,
    pub pack: PackOptions,
}

impl Config {
    pub const FILE: &str = "fnorm.toml";
    pub const ENV_PREFIX: &str = "FNORM_";

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
    }

    /// Load from an explicit file, which must exist, or from `./fnorm.toml` if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => bail!("config file {} not found", path.display()),
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(Self::FILE),
        };

        let config: Config = Self::figment(&file)
            .extract()
            .with_context(|| format!("failed to load config from {}", file.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.name.validate().context("invalid [name] settings")?;
        self.pack.validate().context("invalid [pack] settings")?;
        Ok(())
    }
}
