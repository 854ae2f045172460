//! Migration configuration.

/// Knobs for the migration direction.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MigrateOptions {
    /// Container that receives generated methods.
    pub container_name: String,
    /// Event id of the first method minted into an empty container.
    pub first_event_id: i32,
    /// Attempts before a fix is abandoned because the container keeps
    /// changing underneath it.
    pub retry_budget: u32,
    /// Leading character generated parameter names must avoid.
    pub reserved_prefix: char,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        MigrateOptions {
            container_name: "Log".to_string(),
            first_event_id: 0,
            retry_budget: 16,
            reserved_prefix: '_',
        }
    }
}
