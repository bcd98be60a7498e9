//! # Carlot Core
//!
//! The catalog store behind the Carlot vehicle inventory service.
//!
//! ## Overview
//!
//! `carlot-core` owns the persistent schema and the data-access operations
//! the presentation shell consumes:
//!
//! - **Reference-data resolution**: find-or-create for manufacturers and
//!   bodystyles, at most one row per distinct name
//! - **Composite listing writes**: model + image + stock created in a single
//!   transaction, rolled back as a unit on any failure
//! - **Catalog reads**: the five-way joined view with optional substring
//!   filtering on manufacturer or model name
//! - **Image byte lookup**: raw stored bytes by image id
//!
//! The store is a single SQLite file, created on first use and migrated
//! idempotently via [`MIGRATOR`].

pub mod database;
pub mod error;

pub use database::ports::catalog::CatalogRepository;
pub use database::repositories::catalog::SqliteCatalogRepository;
pub use error::{CatalogError, Result};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
