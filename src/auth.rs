//! Role-based export authorization.
//!
//! Authentication happens upstream: the proxy in front of this service forwards
//! the caller's roles in a request header. This module only turns that header
//! into a [`Principal`] and decides whether it may export.

use std::collections::BTreeSet;

use axum::http::HeaderMap;

use crate::config::EXPORT_ROLES;

/// The caller of an endpoint and the roles it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    roles: BTreeSet<String>,
}

impl Principal {
    /// Builds a principal from a list of role names.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// A caller without any role.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Reads the comma separated role list from `header`.
    ///
    /// A missing or non-UTF-8 header yields an anonymous principal. Entries are
    /// trimmed and empty entries dropped.
    pub fn from_headers(headers: &HeaderMap, header: &str) -> Self {
        let Some(value) = headers.get(header).and_then(|v| v.to_str().ok()) else {
            return Self::anonymous();
        };
        Self::with_roles(
            value
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty()),
        )
    }

    /// Whether the principal holds `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Roles held, in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

/// Whether `principal` may export: it must hold `administrator` or `gestor`.
pub fn can_export(principal: &Principal) -> bool {
    EXPORT_ROLES.iter().any(|role| principal.has_role(role))
}
