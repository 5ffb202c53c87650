//! Service registration metadata.
//!
//! Describes every RPC method the item API exposes: its registered name,
//! HTTP binding and auth requirements. The server publishes this as its
//! discovery document.

use serde::{Deserialize, Serialize};

use crate::auth::AuthRequirements;

/// Default service name used in the API root path.
pub const DEFAULT_SERVICE_NAME: &str = "ruffnote_plus";
/// Default service version used in the API root path.
pub const DEFAULT_SERVICE_VERSION: &str = "v1";
/// Human readable service description.
pub const SERVICE_DESCRIPTION: &str = "ruffnote+";

/// HTTP verbs used by the item API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One registered RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub description: String,
    pub scopes: Vec<String>,
    pub audiences: Vec<String>,
    pub client_ids: Vec<String>,
}

/// A registered service and its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Root path every method path is relative to, e.g. `/api/ruffnote_plus/v1`.
    pub fn root_path(&self) -> String {
        format!("/api/{}/{}", self.name, self.version)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Builds the item service descriptor; every method shares `requirements`.
pub fn item_service(
    name: impl Into<String>,
    version: impl Into<String>,
    requirements: &AuthRequirements,
) -> ServiceDescriptor {
    let method = |name: &str, http_method: HttpMethod, path: &str, description: &str| {
        MethodDescriptor {
            name: name.to_string(),
            http_method,
            path: path.to_string(),
            description: description.to_string(),
            scopes: requirements.scopes.clone(),
            audiences: requirements.audiences.clone(),
            client_ids: requirements.client_ids.clone(),
        }
    };

    ServiceDescriptor {
        name: name.into(),
        version: version.into(),
        description: SERVICE_DESCRIPTION.to_string(),
        methods: vec![
            method("item.list", HttpMethod::Get, "items", "List items."),
            method(
                "item.availabile",
                HttpMethod::Get,
                "item",
                "Check whether a name is unused.",
            ),
            method("item.create", HttpMethod::Post, "item", "Create an item."),
            method("item.rename", HttpMethod::Put, "item", "Rename an item."),
            method("item.delete", HttpMethod::Delete, "item", "Delete an item."),
        ],
    }
}
