//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped by owning user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Identifier of the owning user.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Status label.
        #[max_length = 50]
        status -> Varchar,
        /// Priority label.
        #[max_length = 50]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
