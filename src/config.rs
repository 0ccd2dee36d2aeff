use crate::error::{
    BadEnvVarSnafu, EnrolResult, NoProgrammesSnafu, ParsePlaceholderUrlSnafu,
    ParseServerAddressSnafu,
};
use dotenvy::var;
use snafu::{ResultExt, ensure};
use std::{env::VarError, net::SocketAddr, sync::Arc};
use url::Url;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_PLACEHOLDER_PHOTO: &str = "https://placehold.co/128";
const DEFAULT_PROGRAMMES: &str =
    "Computer Science,Mathematics,Physics,Engineering,Business Studies,English Literature";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_address: SocketAddr,
    page_config: Arc<PageConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> EnrolResult<Self> {
        let server_ip = var_or_default("ENROL_SERVER_IP", DEFAULT_SERVER_IP)?;
        let server_address = server_ip
            .parse()
            .context(ParseServerAddressSnafu { original: server_ip })?;

        Ok(Self {
            server_address,
            page_config: Arc::new(PageConfig::new()?),
        })
    }

    pub const fn server_address(&self) -> SocketAddr {
        self.server_address
    }

    pub fn page_config(&self) -> Arc<PageConfig> {
        self.page_config.clone()
    }
}

/// What the registration page offers and falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub placeholder_photo: Url,
    pub programmes: Vec<String>,
}

impl PageConfig {
    pub fn new() -> EnrolResult<Self> {
        let placeholder_photo =
            var_or_default("ENROL_PLACEHOLDER_PHOTO", DEFAULT_PLACEHOLDER_PHOTO)?;
        let programmes = var_or_default("ENROL_PROGRAMMES", DEFAULT_PROGRAMMES)?;

        Self::from_raw(&placeholder_photo, &programmes)
    }

    pub fn from_raw(placeholder_photo: &str, programmes: &str) -> EnrolResult<Self> {
        let placeholder_photo = Url::parse(placeholder_photo).context(ParsePlaceholderUrlSnafu {
            original: placeholder_photo,
        })?;

        let programmes: Vec<String> = programmes
            .split(',')
            .map(str::trim)
            .filter(|programme| !programme.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        ensure!(!programmes.is_empty(), NoProgrammesSnafu);

        Ok(Self {
            placeholder_photo,
            programmes,
        })
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_raw(DEFAULT_PLACEHOLDER_PHOTO, DEFAULT_PROGRAMMES)
            .expect("default page config is valid")
    }
}

fn var_or_default(name: &'static str, default: &str) -> EnrolResult<String> {
    match var(name) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => {
            debug!(name, default, "env var not set, using default");
            Ok(default.to_string())
        }
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}
