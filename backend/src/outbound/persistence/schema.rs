//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL. When a
//! migration changes the schema, regenerate or update this file to match.

diesel::table! {
    /// Ledger movements table.
    ///
    /// One row per recorded movement. The amount sign always matches the
    /// type: CREDITO rows are positive, DEBITO rows negative.
    movements (id) {
        /// Primary key: UUID v4, database-generated.
        id -> Uuid,
        /// Movement date.
        fecha -> Date,
        /// Movement type, constrained to CREDITO or DEBITO.
        tipo -> Varchar,
        /// Signed amount, NUMERIC(15, 2).
        monto -> Numeric,
        /// Optional description (max 255 characters).
        descripcion -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}
