//! Permission strings checked by the REST layer.

pub const SIDECARS_READ: &str = "sidecars:read";
pub const SIDECARS_UPDATE: &str = "sidecars:update";

/// Grants every permission.
pub const WILDCARD: &str = "*";
