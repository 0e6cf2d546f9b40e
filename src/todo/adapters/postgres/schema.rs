//! Diesel schema for to-do item persistence.

diesel::table! {
    /// To-do item records.
    todos (id) {
        /// Item identifier.
        id -> Uuid,
        /// Item title.
        #[max_length = 255]
        title -> Varchar,
        /// Owning user identifier.
        #[max_length = 255]
        owner -> Varchar,
        /// Due date.
        due_at -> Timestamptz,
        /// Completion flag.
        done -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
