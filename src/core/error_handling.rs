//! Error reporting shared by every command.
//!
//! Errors that the user can fix (a missing version declaration, a malformed
//! descriptor) are reported with their own message. System failures such as
//! unreadable files get the operation context on the primary line and the
//! full error at debug level.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// True if the error carries a message the user can act on directly
    fn is_user_actionable(&self) -> bool;

    /// The message to show for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Log errors with a detail level based on how specific the error is
///
/// # Examples
/// ```rust,no_run
/// # use pkgmeta::core::error_handling::log_error_with_context;
/// # use pkgmeta::resolver::VersionResolver;
/// let resolver = VersionResolver::new(".");
/// if let Err(e) = resolver.find_version(&["missing", "__init__.py"]) {
///     // Logs: "FATAL: Resolving version" plus the IO error at debug level
///     log_error_with_context(&e, "Resolving version");
/// }
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(error: &E, operation_context: &str) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}: {}", operation_context, error),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
