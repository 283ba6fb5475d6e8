//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records with lifecycle status and time-accounting columns.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Accumulated working minutes.
        time_spent -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Timestamp of the latest accepted mutation.
        updated_at -> Nullable<Timestamptz>,
        /// Completion timestamp, set once when the task completes.
        completed_at -> Nullable<Timestamptz>,
    }
}
