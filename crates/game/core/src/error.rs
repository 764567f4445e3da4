//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`CatalogError`, `ChannelError`, `SessionError`) are
//! defined next to the operations that raise them. This module provides the
//! shared classification used by callers to pick a recovery strategy.
//!
//! The core never logs and never retries: errors surface synchronously to the
//! immediate caller, and recoverability policy belongs to the collaborator.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the command can be retried with different input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the content or encounter is unusable until fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative command.
    ///
    /// Examples: target already incapacitated, roster not loaded yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown participant, attack channel outside the known set
    Validation,

    /// Fatal error - content is broken and instantiation must stop.
    ///
    /// Examples: archetype without any stat anchors
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the error means content or state must be fixed.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatErrorKind: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics, log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
