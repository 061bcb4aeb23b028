//! Platform session for one incoming request.
//!
//! This module provides the [`IoContext`] type carried as `vtex` in every
//! resolver [`Context`](crate::Context).

use crate::config::{AccountName, AuthToken, Workspace};

/// The platform session of a single request.
///
/// Created by the caller for each incoming request and dropped when the
/// request ends. Resolvers only read it.
///
/// # Example
///
/// ```rust
/// use search_facade::{AccountName, AuthToken, IoContext, Workspace};
///
/// let vtex = IoContext::new(
///     AccountName::new("storetheme").unwrap(),
///     Workspace::master(),
///     AuthToken::new("app-token").unwrap(),
/// )
/// .with_request_id("req-42")
/// .with_locale("pt-BR");
///
/// assert_eq!(vtex.host(), "master--storetheme.myvtex.com");
/// assert_eq!(vtex.request_id.as_deref(), Some("req-42"));
/// ```
#[derive(Clone, Debug)]
pub struct IoContext {
    /// The store account serving this request.
    pub account: AccountName,

    /// The workspace the request was routed to.
    pub workspace: Workspace,

    /// Token forwarded to downstream services.
    pub auth_token: AuthToken,

    /// Platform request id, if known.
    pub request_id: Option<String>,

    /// Locale of the storefront session, if known.
    pub locale: Option<String>,
}

impl IoContext {
    /// Suffix of the per-workspace account host.
    const HOST_SUFFIX: &'static str = ".myvtex.com";

    /// Creates a session with no request id or locale.
    #[must_use]
    pub const fn new(account: AccountName, workspace: Workspace, auth_token: AuthToken) -> Self {
        Self {
            account,
            workspace,
            auth_token,
            request_id: None,
            locale: None,
        }
    }

    /// Sets the platform request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Sets the storefront locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Returns the workspace-scoped account host, `{workspace}--{account}.myvtex.com`.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}--{}{}", self.workspace, self.account, Self::HOST_SUFFIX)
    }
}

// Verify IoContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IoContext>();
};
