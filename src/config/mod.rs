/*!
Configuration of a database.

Unlike the teacher's multi-option `Config`, this engine has few real knobs:
whether `force` is permitted, and whether principles are primary by default.
Kept as a dedicated type (rather than loose parameters) so call sites read
the same way the teacher's configuration does, and so new options have a
natural home.
*/

/// The configuration governing a [Database](crate::db::Database)'s kernel and
/// query resolver.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether the query resolver is permitted to register a new conjunction
    /// and rerun derivation when a query references an unregistered
    /// conjunction of otherwise-known principles (§4.5, step 2).
    pub force: bool,

    /// Whether a principle registered for the first time is automatically
    /// declared primary (a convenience some corpora rely on; the default
    /// corpus grammar requires an explicit `is primary` declaration).
    pub primary_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            force: false,
            primary_by_default: false,
        }
    }
}
