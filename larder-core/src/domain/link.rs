//! Hypermedia link types

use serde::{Deserialize, Serialize};

/// HTTP method a link is followed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An absolute URI plus the relation and method describing a related action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: LinkMethod,
    /// Media type returned when the link is followed, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<String>,
    /// Media type expected in the request body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<String>,
}

impl Link {
    pub fn new(method: LinkMethod, href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method,
            produces: None,
            consumes: None,
        }
    }

    pub fn produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces = Some(media_type.into());
        self
    }

    pub fn consumes(mut self, media_type: impl Into<String>) -> Self {
        self.consumes = Some(media_type.into());
        self
    }
}
