// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group of the platform custom resources
pub const API_GROUP: &str = "korifi.cloudfoundry.org";

/// Headers set by the authenticating front proxy
pub mod headers {
    /// Authenticated principal name
    pub const REMOTE_USER: &str = "X-Remote-User";
    /// Group membership, repeated once per group
    pub const REMOTE_GROUP: &str = "X-Remote-Group";
}

/// Admission webhook contract
pub mod webhooks {
    /// Marker carried in the denial message when a display name is already taken
    pub const DUPLICATE_NAME_ERROR: &str = "DuplicateNameError";
}

/// Access probe issued to decide whether a caller can see into an org
pub mod org_visibility {
    pub const VERB: &str = "list";
    pub const RESOURCE: &str = "cfspaces";
}

/// Defaults for optional configuration
pub mod defaults {
    pub const ROOT_NAMESPACE: &str = "cf";
    pub const LISTEN_ADDR: &str = "0.0.0.0:9000";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

pub const DEFAULT_ROUTE_PROTOCOL: &str = "http";
pub const DEFAULT_STACK: &str = "cflinuxfs3";
