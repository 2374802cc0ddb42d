//! Row types produced per PBCore description document.
//!
//! Every attribute is a `String`; an absent field is the empty string.

use serde::{Deserialize, Serialize};

use crate::schema::{ASSET_COLUMNS, INSTANTIATION_COLUMNS, MAX_OTHER_IDENTIFIERS, TableRow};

/// Derive the normalized asset id from the primary identifier.
///
/// Replaces every `/` and `_` with `-`; nothing else changes.
pub fn normalize_asset_id(primary_id: &str) -> String {
    primary_id.replace(['/', '_'], "-")
}

/// One row per valid description document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub asset_id: String,
    pub aapb_pbcore_id: String,
    pub sonyci_id: String,
    /// `source:value` identifiers other than the primary and Sony Ci ones.
    pub other_ids: [String; MAX_OTHER_IDENTIFIERS],
    pub media_type: String,
    pub asset_type: String,
    pub organization: String,
    pub level_of_user_access: String,
    pub special_collections: String,
    pub transcript_status: String,
    pub transcript_url: String,
    pub proxy_start_time: String,
    pub broadcast_date: String,
    pub created_date: String,
    pub copyright_date: String,
    pub date: String,
    pub single_date: String,
    pub series_title: String,
    pub program_title: String,
    pub episode_title: String,
    pub episode_number: String,
    pub segment_title: String,
    pub raw_footage_title: String,
    pub promo_title: String,
    pub clip_title: String,
    pub title: String,
    pub consolidated_title: String,
    pub series_description: String,
    pub program_description: String,
    pub episode_description: String,
    pub segment_description: String,
    pub raw_footage_description: String,
    pub promo_description: String,
    pub clip_description: String,
    pub description: String,
    pub consolidated_description: String,
    pub producing_organization: String,
    pub proxy_duration: String,
}

impl TableRow for AssetRecord {
    const COLUMNS: &'static [&'static str] = ASSET_COLUMNS;

    fn cells(&self) -> Vec<&str> {
        let [other_1, other_2, other_3] = &self.other_ids;
        vec![
            &self.asset_id,
            &self.aapb_pbcore_id,
            &self.sonyci_id,
            other_1,
            other_2,
            other_3,
            &self.media_type,
            &self.asset_type,
            &self.organization,
            &self.level_of_user_access,
            &self.special_collections,
            &self.transcript_status,
            &self.transcript_url,
            &self.proxy_start_time,
            &self.broadcast_date,
            &self.created_date,
            &self.copyright_date,
            &self.date,
            &self.single_date,
            &self.series_title,
            &self.program_title,
            &self.episode_title,
            &self.episode_number,
            &self.segment_title,
            &self.raw_footage_title,
            &self.promo_title,
            &self.clip_title,
            &self.title,
            &self.consolidated_title,
            &self.series_description,
            &self.program_description,
            &self.episode_description,
            &self.segment_description,
            &self.raw_footage_description,
            &self.promo_description,
            &self.clip_description,
            &self.description,
            &self.consolidated_description,
            &self.producing_organization,
            &self.proxy_duration,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

/// One row per `pbcoreInstantiation` of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiationRecord {
    /// Owning asset; foreign key to [`AssetRecord::asset_id`].
    pub asset_id: String,
    /// Instantiation identifiers joined with `|`.
    pub identifiers: String,
    pub media_type: String,
    pub digital_format: String,
    pub physical_format: String,
    pub generations: String,
    pub duration: String,
    pub location: String,
    pub date: String,
}

impl TableRow for InstantiationRecord {
    const COLUMNS: &'static [&'static str] = INSTANTIATION_COLUMNS;

    fn cells(&self) -> Vec<&str> {
        vec![
            self.asset_id.as_str(),
            &self.identifiers,
            &self.media_type,
            &self.digital_format,
            &self.physical_format,
            &self.generations,
            &self.duration,
            &self.location,
            &self.date,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_slashes_and_underscores() {
        assert_eq!(normalize_asset_id("cpb-aacip/111_02c8693q"), "cpb-aacip-111-02c8693q");
        assert_eq!(normalize_asset_id(""), "");
    }

    #[test]
    fn cells_match_schema_width() {
        let asset = AssetRecord::default();
        assert_eq!(asset.cells().len(), AssetRecord::COLUMNS.len());
        let inst = InstantiationRecord::default();
        assert_eq!(inst.cells().len(), InstantiationRecord::COLUMNS.len());
    }

    #[test]
    fn other_ids_land_in_their_columns() {
        let asset = AssetRecord {
            other_ids: ["a:1".into(), "b:2".into(), String::new()],
            ..AssetRecord::default()
        };
        let cells = asset.cells();
        let index = |name: &str| {
            AssetRecord::COLUMNS
                .iter()
                .position(|c| *c == name)
                .unwrap()
        };
        assert_eq!(cells[index("other_id_1")], "a:1");
        assert_eq!(cells[index("other_id_2")], "b:2");
        assert_eq!(cells[index("other_id_3")], "");
    }
}
