/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library
and/or diagnosing an unexpected derivation result.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [principle registry](crate::db::registry).
    pub const REGISTRY: &str = "registry";

    /// Logs related to the [assertion kernel](crate::context).
    pub const KERNEL: &str = "kernel";

    /// Logs related to the [derivation driver](crate::procedures).
    pub const DERIVATION: &str = "derivation";

    /// Logs related to the [query resolver](crate::query).
    pub const QUERY: &str = "query";

    /// Logs related to the [corpus reader](crate::corpus).
    pub const CORPUS: &str = "corpus";
}
