//! Table assembly and file output for extracted PBCore rows.
//!
//! Records from `pbcore-transform` become [`Table`]s here, are optionally
//! projected to a column subset, and are written as CSV. The corpus anomaly
//! report is written as pretty JSON.

pub mod error;
pub mod hash;
pub mod projection;
pub mod table;
pub mod writer;

pub use error::{OutputError, Result};
pub use hash::sha256_hex;
pub use projection::project;
pub use table::{
    ASSET_TABLE, CorpusTables, INSTANTIATION_TABLE, JOINED_TABLE, Table, build_tables,
};
pub use writer::{WrittenFile, table_to_csv, write_csv, write_json};
