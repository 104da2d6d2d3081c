//! Cache purge request models.
//!
//! Responsibilities:
//! - Represent a purge as exactly one mode (`PurgeRequest`).
//! - Validate a request locally before it reaches the network.
//! - Convert the wire-shaped `PurgeParams` into a `PurgeRequest`.
//!
//! Invariants:
//! - A serialized `PurgeBody` carries exactly one populated field.
//! - Hostnames are sent without a leading scheme.

use cfctl_config::validation::{
    normalize_hostname, validate_hostnames, validate_prefixes, validate_tags, validate_urls,
};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// A single cache purge operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeRequest {
    /// Purge every cached resource in the zone.
    Everything,
    /// Purge specific URLs (at most 30).
    Files(Vec<String>),
    /// Purge every resource served for the given hostnames.
    Hosts(Vec<String>),
    /// Purge resources carrying the given `Cache-Tag` values (at most 30).
    Tags(Vec<String>),
    /// Purge every resource under the given URL prefixes.
    Prefixes(Vec<String>),
}

impl PurgeRequest {
    /// Validate the request without touching the network.
    ///
    /// An empty item list means no purge mode is selected at all.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Everything => Ok(()),
            Self::Files(items) | Self::Hosts(items) | Self::Tags(items) | Self::Prefixes(items)
                if items.is_empty() =>
            {
                Err(ClientError::NoPurgeParameters)
            }
            Self::Files(urls) => Ok(validate_urls(urls)?),
            Self::Hosts(hosts) => Ok(validate_hostnames(hosts)?),
            Self::Tags(tags) => Ok(validate_tags(tags)?),
            Self::Prefixes(prefixes) => Ok(validate_prefixes(prefixes)?),
        }
    }

    /// Number of items the request targets; zero for `Everything`.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Everything => 0,
            Self::Files(items) | Self::Hosts(items) | Self::Tags(items) | Self::Prefixes(items) => {
                items.len()
            }
        }
    }

    /// Singular noun for the items this request targets.
    pub fn item_noun(&self) -> &'static str {
        match self {
            Self::Everything => "resource",
            Self::Files(_) => "URL",
            Self::Hosts(_) => "hostname",
            Self::Tags(_) => "tag",
            Self::Prefixes(_) => "prefix",
        }
    }

    /// The JSON body sent to `POST /zones/{id}/purge_cache`.
    pub fn body(&self) -> PurgeBody {
        let mut body = PurgeBody::default();
        match self {
            Self::Everything => body.purge_everything = Some(true),
            Self::Files(urls) => body.files = Some(urls.clone()),
            Self::Hosts(hosts) => {
                body.hosts = Some(
                    hosts
                        .iter()
                        .map(|h| normalize_hostname(h).to_string())
                        .collect(),
                )
            }
            Self::Tags(tags) => body.tags = Some(tags.clone()),
            Self::Prefixes(prefixes) => body.prefixes = Some(prefixes.clone()),
        }
        body
    }
}

/// Wire body for the purge endpoint.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PurgeBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge_everything: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
}

/// Flat purge parameters, as a caller might assemble them field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PurgeParams {
    pub purge_everything: bool,
    pub files: Vec<String>,
    pub hosts: Vec<String>,
    pub tags: Vec<String>,
    pub prefixes: Vec<String>,
}

impl TryFrom<PurgeParams> for PurgeRequest {
    type Error = ClientError;

    /// Picks the first populated mode in the order
    /// everything, files, hosts, tags, prefixes.
    fn try_from(params: PurgeParams) -> Result<Self> {
        if params.purge_everything {
            Ok(Self::Everything)
        } else if !params.files.is_empty() {
            Ok(Self::Files(params.files))
        } else if !params.hosts.is_empty() {
            Ok(Self::Hosts(params.hosts))
        } else if !params.tags.is_empty() {
            Ok(Self::Tags(params.tags))
        } else if !params.prefixes.is_empty() {
            Ok(Self::Prefixes(params.prefixes))
        } else {
            Err(ClientError::NoPurgeParameters)
        }
    }
}

/// Result payload of a successful purge.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PurgeResult {
    #[serde(default)]
    pub id: String,
}
