//! API 端点配置
//!
//! The app can talk to more than one backend deployment. Each owner has a
//! built-in base URL that a `SUBWAY_API_<OWNER>` variable overrides at
//! compile time.

use std::fmt;
use std::str::FromStr;

/// A stored or selected owner name outside [`ApiOwner::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown api owner: {0}")]
pub struct UnknownApiOwner(pub String);

const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8080";
const DEFAULT_STAGING_ENDPOINT: &str = "/staging-api";
const DEFAULT_PRODUCTION_ENDPOINT: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiOwner {
    Local,
    Staging,
    #[default]
    Production,
}

impl ApiOwner {
    pub const ALL: [ApiOwner; 3] = [ApiOwner::Local, ApiOwner::Staging, ApiOwner::Production];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ApiOwner::Local => "local",
            ApiOwner::Staging => "staging",
            ApiOwner::Production => "production",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            ApiOwner::Local => "Local",
            ApiOwner::Staging => "Staging",
            ApiOwner::Production => "Production",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiOwner::Local => option_env!("SUBWAY_API_LOCAL").unwrap_or(DEFAULT_LOCAL_ENDPOINT),
            ApiOwner::Staging => {
                option_env!("SUBWAY_API_STAGING").unwrap_or(DEFAULT_STAGING_ENDPOINT)
            }
            ApiOwner::Production => {
                option_env!("SUBWAY_API_PRODUCTION").unwrap_or(DEFAULT_PRODUCTION_ENDPOINT)
            }
        }
    }
}

impl FromStr for ApiOwner {
    type Err = UnknownApiOwner;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiOwner::ALL
            .iter()
            .copied()
            .find(|owner| owner.as_str() == s)
            .ok_or_else(|| UnknownApiOwner(s.to_string()))
    }
}

impl fmt::Display for ApiOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_names_round_trip() {
        for owner in ApiOwner::ALL {
            assert_eq!(owner.as_str().parse::<ApiOwner>(), Ok(owner));
        }
        assert_eq!(
            "mars".parse::<ApiOwner>(),
            Err(UnknownApiOwner("mars".to_string()))
        );
    }

    #[test]
    fn every_owner_has_an_endpoint() {
        for owner in ApiOwner::ALL {
            assert!(!owner.endpoint().is_empty());
        }
    }
}
