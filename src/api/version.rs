//! Server version API.

use serde::{Deserialize, Serialize};

use crate::context::{AppRest, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::rest::RestExt;

/// Versions reported by `GET /versions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVersion {
    /// REST API generation, e.g. `v1`.
    pub version: String,
    #[serde(default)]
    pub core: Option<String>,
    #[serde(default)]
    pub gremlin: Option<String>,
    /// REST API version, e.g. `0.38.0.0`.
    #[serde(default)]
    pub api: Option<String>,
}

/// Calls on `/versions`; not scoped to a graph.
#[derive(FromContext, Clone)]
pub struct VersionApi {
    rest: AppRest,
}

impl VersionApi {
    pub async fn get(&self) -> Result<ServerVersion, AppError> {
        self.rest.get(["versions"]).send().await?.get("versions")
    }
}
