pub static DEFAULT_CONFIG: &str = include_str!("../config/default.yml");

pub fn default_config_path() -> Option<std::path::PathBuf> {
    use etcetera::AppStrategy;
    app_dirs()
        .map(|d| d.config_dir().join("zipranges.yml"))
        .ok()
}

pub fn app_dirs() -> Result<impl etcetera::AppStrategy, etcetera::HomeDirError> {
    etcetera::choose_app_strategy(etcetera::AppStrategyArgs {
        top_level_domain: "org".to_string(),
        author: "zipranges".to_string(),
        app_name: "zipranges".to_string(),
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum EnablementLevel {
    #[default]
    Auto,
    Never,
    Always,
}

/// Settings as written in a config file; anything left out falls through to
/// whatever it gets merged onto.
#[derive(Debug, PartialEq, Default, Clone)]
struct ConfigFile {
    separator: Option<String>,
    color: Option<String>,
    unknown_keys: Vec<String>,
}

impl<'de> merde::Deserialize<'de> for ConfigFile {
    async fn deserialize(
        de: &mut dyn merde::DynDeserializer<'de>,
    ) -> Result<Self, merde::MerdeError<'de>> {
        use merde::DynDeserializerExt;
        let mut result = ConfigFile::default();
        de.next().await?.into_map_start()?;
        loop {
            match de.next().await? {
                merde::Event::Str(key) => {
                    if key == "separator" {
                        result.separator = de.t().await?;
                    } else if key == "color" {
                        result.color = de.t().await?;
                    } else {
                        result.unknown_keys.push(key.to_string());
                        let _: merde::Value<'de> = de.t().await?;
                    }
                }
                merde::Event::MapEnd => return Ok(result),
                e => {
                    return Err(merde::MerdeError::UnexpectedEvent {
                        got: merde::EventType::from(&e),
                        expected: &[merde::EventType::Str],
                        help: None,
                    })
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct PartialConfig {
    pub separator: Option<String>,
    pub color: Option<EnablementLevel>,
}

impl From<ConfigFile> for PartialConfig {
    fn from(value: ConfigFile) -> Self {
        use clap::ValueEnum;
        for key in value.unknown_keys.iter() {
            log::warn!("ignoring unknown config setting {key:?}");
        }
        let color = value.color.and_then(|color| {
            match EnablementLevel::from_str(color.trim(), true) {
                Ok(level) => Some(level),
                Err(_) => {
                    log::warn!("ignoring unknown color setting {color:?}");
                    None
                }
            }
        });
        Self {
            separator: value.separator,
            color,
        }
    }
}

#[derive(Debug)]
pub enum ConfigParseError {
    Deserialize(merde::MerdeError<'static>),
    NotUtf8(std::str::Utf8Error),
    UnreadableFile(std::path::PathBuf, std::io::Error),
}

impl From<merde::MerdeError<'_>> for ConfigParseError {
    fn from(value: merde::MerdeError<'_>) -> Self {
        use merde::IntoStatic;
        Self::Deserialize(value.into_static())
    }
}

impl From<std::str::Utf8Error> for ConfigParseError {
    fn from(value: std::str::Utf8Error) -> Self {
        Self::NotUtf8(value)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deserialize(e)
                => write!(f, "{}", e),
            Self::NotUtf8(e)
                => write!(f, "{}", e),
            Self::UnreadableFile(path, e)
                => write!(f, "couldn't read {path:#?}: {e}"),
        }
    }
}

impl PartialConfig {
    pub fn load_from_str(config_str: &str) -> Result<Self, ConfigParseError> {
        let file = merde::yaml::from_str::<ConfigFile>(config_str)?;
        Ok(file.into())
    }

    /// Reads `path`, or the default config location if `path` is `None`.
    ///
    /// A config missing from the default location is `Ok(None)`; one missing
    /// from an explicitly given path is an error.
    pub fn load(path: Option<&std::path::Path>) -> Result<Option<Self>, ConfigParseError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_owned(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(None),
            },
        };
        let config_bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {path:#?}");
                return Ok(None);
            }
            Err(e) => return Err(ConfigParseError::UnreadableFile(path, e)),
        };
        log::debug!("reading config from {path:#?}");
        let config_str = std::str::from_utf8(&config_bytes)?;
        Self::load_from_str(config_str).map(Some)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub separator: String,
    pub color: EnablementLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            color: EnablementLevel::Auto,
        }
    }
}

impl Config {
    pub fn load_default() -> Self {
        match PartialConfig::load_from_str(DEFAULT_CONFIG) {
            Ok(defaults) => Self::default().merge(defaults),
            Err(e) => {
                log::error!("built-in config is broken: {}", e);
                Self::default()
            }
        }
    }

    /// Overrides every setting `overrides` specifies.
    pub fn merge(mut self, overrides: PartialConfig) -> Self {
        if let Some(separator) = overrides.separator {
            self.separator = separator;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        self
    }
}
