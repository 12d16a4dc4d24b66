//! SeaORM entities
//!
//! Table models for the PostgreSQL adapter. Domain code never sees these;
//! adapters convert them into `domain::entities` types.

pub mod items;
