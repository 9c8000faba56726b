//! Webhook constants.

/// Update route prefix.
pub const UPDATE_PATH_PREFIX: &str = "/update";
/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub signature header.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";
/// Event triggering an update.
pub const PUSH_EVENT: &str = "push";
/// Body of successful responses.
pub const OK_BODY: &str = "OK";
