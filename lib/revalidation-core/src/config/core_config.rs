use std::path::Path;
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_with::{DurationSeconds, serde_as};
use strum::{Display, EnumString};
use url::Url;

use super::{ConfigParsingError, ConfigValidationError};

/// Hard upper bound on the number of tags (and, separately, paths) processed per request.
pub const MAX_ENTRIES_LIMIT: usize = 200;

const DEFAULT_TAG_MAX_LENGTH: usize = 256;
const DEFAULT_PATH_MAX_LENGTH: usize = 1024;
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(feature = "config_env")]
const SECRET_ENV_VARIABLE: &str = "REVALIDATE_SECRET";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Default)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    pub revalidation: RevalidationConfig,
    pub cache_invalidator: CacheInvalidatorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevalidationConfig {
    pub secret: Option<SecretString>,
    pub max_entries: usize,
    pub tag_max_length: usize,
    pub path_max_length: usize,
}

impl Default for RevalidationConfig {
    fn default() -> Self {
        Self {
            secret: None,
            max_entries: MAX_ENTRIES_LIMIT,
            tag_max_length: DEFAULT_TAG_MAX_LENGTH,
            path_max_length: DEFAULT_PATH_MAX_LENGTH,
        }
    }
}

impl RevalidationConfig {
    /// The shared secret callers must present, `None` when unset or empty.
    pub fn secret(&self) -> Option<&str> {
        self.secret
            .as_ref()
            .map(|secret| secret.expose_secret())
            .filter(|secret| !secret.is_empty())
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries.min(MAX_ENTRIES_LIMIT)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CacheInvalidatorType {
    Http,
    #[default]
    Log,
    Memory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheInvalidatorConfig {
    pub r#type: CacheInvalidatorType,
    pub params: Option<HttpInvalidatorParams>,
}

impl CacheInvalidatorConfig {
    pub fn http_params(&self) -> Result<&HttpInvalidatorParams, ConfigValidationError> {
        self.params
            .as_ref()
            .ok_or(ConfigValidationError::MissingParameter("cacheInvalidator.params"))
    }
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpInvalidatorParams {
    pub base_url: Url,
    pub token: Option<SecretString>,
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(rename = "timeoutSeconds")]
    pub timeout: Option<Duration>,
}

impl HttpInvalidatorParams {
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT)
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("REVALIDATION_").split("__").lowercase(false));
        }

        #[cfg_attr(not(feature = "config_env"), allow(unused_mut))]
        let mut core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        // read verbatim, figment would coerce numeric-looking secrets
        #[cfg(feature = "config_env")]
        if let Ok(secret) = std::env::var(SECRET_ENV_VARIABLE) {
            core.revalidation.secret = Some(SecretString::from(secret));
        }

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
