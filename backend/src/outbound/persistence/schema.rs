//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Worker accounts table.
    ///
    /// Usernames and emails carry unique constraints; the credential column
    /// stores only the hash produced by the external hashing collaborator.
    workers (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login name.
        username -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Hashed credential; never selected by ordinary reads.
        credential -> Varchar,
        /// Authorization role as its stable string form.
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Projects table.
    projects (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable project name.
        name -> Varchar,
        /// Worker holding the ProjectManager role at creation time.
        referring_employee_id -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Assignments table binding workers to projects over date ranges.
    assignments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Inclusive start date.
        start_date -> Date,
        /// Inclusive end date.
        end_date -> Date,
        /// The staffed project.
        project_id -> Uuid,
        /// The staffed worker.
        worker_id -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(assignments -> projects (project_id));
diesel::joinable!(assignments -> workers (worker_id));

diesel::allow_tables_to_appear_in_same_query!(assignments, projects, workers);
