pub mod anomalies;
pub mod record;
pub mod schema;
pub mod vocabulary;

pub use anomalies::CorpusAnomalies;
pub use record::{AssetRecord, InstantiationRecord, normalize_asset_id};
pub use schema::{
    ASSET_COLUMNS, DEFAULT_PROJECTION, INSTANTIATION_COLUMNS, JOIN_KEY, MAX_OTHER_IDENTIFIERS,
    Projection, TableRow, column_index,
};
