//! Fixed, ordered column schemas for the two output tables.

/// A flat row with a fixed column schema.
///
/// `cells()` must return exactly one value per entry in `COLUMNS`, in the
/// same order.
pub trait TableRow {
    /// Column names in output order.
    const COLUMNS: &'static [&'static str];

    /// Cell values in `COLUMNS` order.
    fn cells(&self) -> Vec<&str>;
}

/// Maximum number of "other" identifiers kept per asset.
pub const MAX_OTHER_IDENTIFIERS: usize = 3;

/// Asset table columns.
pub const ASSET_COLUMNS: &[&str] = &[
    "asset_id",
    "aapb_pbcore_id",
    "sonyci_id",
    "other_id_1",
    "other_id_2",
    "other_id_3",
    "media_type",
    "asset_type",
    "organization",
    "level_of_user_access",
    "special_collections",
    "transcript_status",
    "transcript_url",
    "proxy_start_time",
    "broadcast_date",
    "created_date",
    "copyright_date",
    "date",
    "single_date",
    "series_title",
    "program_title",
    "episode_title",
    "episode_number",
    "segment_title",
    "raw_footage_title",
    "promo_title",
    "clip_title",
    "title",
    "consolidated_title",
    "series_description",
    "program_description",
    "episode_description",
    "segment_description",
    "raw_footage_description",
    "promo_description",
    "clip_description",
    "description",
    "consolidated_description",
    "producing_organization",
    "proxy_duration",
];

/// Instantiation table columns.
pub const INSTANTIATION_COLUMNS: &[&str] = &[
    "asset_id",
    "inst_identifiers",
    "inst_media_type",
    "inst_digital_format",
    "inst_physical_format",
    "inst_generations",
    "inst_duration",
    "inst_location",
    "inst_date",
];

/// Column shared by both tables; the join key.
pub const JOIN_KEY: &str = "asset_id";

/// Asset columns written when no explicit projection is requested.
pub const DEFAULT_PROJECTION: &[&str] = &[
    "asset_id",
    "sonyci_id",
    "media_type",
    "asset_type",
    "level_of_user_access",
    "broadcast_date",
    "created_date",
    "consolidated_title",
    "proxy_duration",
];

/// Which asset columns to write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    /// [`DEFAULT_PROJECTION`].
    #[default]
    Default,
    /// Every column in [`ASSET_COLUMNS`].
    All,
    /// An explicit, ordered column list.
    Columns(Vec<String>),
}

impl Projection {
    /// Resolve to the ordered list of column names.
    pub fn column_names(&self) -> Vec<&str> {
        match self {
            Self::Default => DEFAULT_PROJECTION.to_vec(),
            Self::All => ASSET_COLUMNS.to_vec(),
            Self::Columns(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Parse a comma-separated column list; blank entries are ignored.
    pub fn from_list(list: &str) -> Self {
        let names = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self::Columns(names)
    }
}

/// Position of `name` in `columns`.
pub fn column_index(columns: &[&str], name: &str) -> Option<usize> {
    columns.iter().position(|column| *column == name)
}
