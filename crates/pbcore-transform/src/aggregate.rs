//! Per-document aggregation into asset and instantiation rows.

use tracing::{debug, warn};

use pbcore_ingest::{DescriptionDocument, XmlElement};
use pbcore_model::vocabulary::{
    PRODUCING_ORGANIZATION_ROLE, annotation, attribute, date, element, source, title,
};
use pbcore_model::{
    AssetRecord, CorpusAnomalies, InstantiationRecord, MAX_OTHER_IDENTIFIERS, normalize_asset_id,
};

use crate::canonical::{DateParts, DescriptionParts, TitleParts, first_non_empty, last_with_role};
use crate::instantiation::InstantiationSet;
use crate::select::{Filter, descendants, elements, select, select_all, select_untyped};

/// Everything extracted from one description document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetExtraction {
    pub asset: AssetRecord,
    pub instantiations: Vec<InstantiationRecord>,
    /// Sony Ci identifiers anywhere in the document, empty ones included.
    pub sonyci_count: usize,
    /// Media types of digital copies that declare one, in document order.
    pub digital_media_types: Vec<String>,
}

/// Extract the asset row and its instantiation rows from a document root.
pub fn extract_asset(root: &XmlElement) -> AssetExtraction {
    let aapb_pbcore_id = first_non_empty(&select_all(
        root,
        element::IDENTIFIER,
        Filter::equals(attribute::SOURCE, source::ARCHIVE_INVENTORY),
    ));
    let asset_id = normalize_asset_id(&aapb_pbcore_id);

    let sonyci_ids = select_all(
        root,
        element::IDENTIFIER,
        Filter::equals(attribute::SOURCE, source::SONY_CI),
    );
    let sonyci_count = descendants(
        root,
        element::IDENTIFIER,
        Filter::equals(attribute::SOURCE, source::SONY_CI),
    )
    .len();

    let annotation_of = |kind: &str| {
        select(
            root,
            element::ANNOTATION,
            Filter::equals(attribute::ANNOTATION_TYPE, kind),
        )
    };
    let special_collections = select_all(
        root,
        element::ANNOTATION,
        Filter::equals(attribute::ANNOTATION_TYPE, annotation::SPECIAL_COLLECTIONS),
    )
    .into_iter()
    .filter(|value| !value.is_empty())
    .collect::<Vec<_>>()
    .join(",");

    let date_of = |kind: &str| {
        select(
            root,
            element::ASSET_DATE,
            Filter::equals(attribute::DATE_TYPE, kind),
        )
    };
    let dates = DateParts {
        broadcast: date_of(date::BROADCAST),
        created: date_of(date::CREATED),
        copyright: date_of(date::COPYRIGHT),
        untyped: select_untyped(root, element::ASSET_DATE, attribute::DATE_TYPE),
    };

    let title_of = |kind: &str| {
        select(
            root,
            element::TITLE,
            Filter::equals(attribute::TITLE_TYPE, kind),
        )
    };
    let titles = TitleParts {
        series: title_of(title::SERIES),
        program: title_of(title::PROGRAM),
        episode: title_of(title::EPISODE),
        episode_number: title_of(title::EPISODE_NUMBER),
        segment: title_of(title::SEGMENT),
        raw_footage: title_of(title::RAW_FOOTAGE),
        promo: title_of(title::PROMO),
        clip: title_of(title::CLIP),
        untyped: select_untyped(root, element::TITLE, attribute::TITLE_TYPE),
    };

    let description_of = |kind: &str| {
        select(
            root,
            element::DESCRIPTION,
            Filter::equals(attribute::DESCRIPTION_TYPE, kind),
        )
    };
    let descriptions = DescriptionParts {
        series: description_of(title::SERIES),
        program: description_of(title::PROGRAM),
        episode: description_of(title::EPISODE),
        segment: description_of(title::SEGMENT),
        raw_footage: description_of(title::RAW_FOOTAGE),
        promo: description_of(title::PROMO),
        clip: description_of(title::CLIP),
        untyped: select_untyped(root, element::DESCRIPTION, attribute::DESCRIPTION_TYPE),
    };

    let creators: Vec<(String, String)> = elements(root, element::CREATOR, Filter::Any)
        .map(|creator| {
            (
                select(creator, element::CREATOR_ROLE, Filter::Any),
                select(creator, element::CREATOR_NAME, Filter::Any),
            )
        })
        .collect();
    let producing_organization = last_with_role(
        creators
            .iter()
            .map(|(role, name)| (role.as_str(), name.as_str())),
        PRODUCING_ORGANIZATION_ROLE,
    );

    let instantiations = InstantiationSet::extract(root, &asset_id);
    if instantiations.is_empty() {
        debug!(asset_id = %asset_id, "asset has no instantiations");
    }
    let candidates = instantiations.media_type_candidates();

    let asset = AssetRecord {
        asset_id,
        aapb_pbcore_id,
        sonyci_id: first_non_empty(&sonyci_ids),
        other_ids: other_identifiers(root),
        media_type: candidates.best(),
        asset_type: select(root, element::ASSET_TYPE, Filter::Any),
        organization: annotation_of(annotation::ORGANIZATION),
        level_of_user_access: annotation_of(annotation::LEVEL_OF_USER_ACCESS),
        special_collections,
        transcript_status: annotation_of(annotation::TRANSCRIPT_STATUS),
        transcript_url: annotation_of(annotation::TRANSCRIPT_URL),
        proxy_start_time: annotation_of(annotation::PROXY_START_TIME),
        single_date: dates.canonical(),
        broadcast_date: dates.broadcast,
        created_date: dates.created,
        copyright_date: dates.copyright,
        date: dates.untyped,
        consolidated_title: titles.consolidate(),
        series_title: titles.series,
        program_title: titles.program,
        episode_title: titles.episode,
        episode_number: titles.episode_number,
        segment_title: titles.segment,
        raw_footage_title: titles.raw_footage,
        promo_title: titles.promo,
        clip_title: titles.clip,
        title: titles.untyped,
        consolidated_description: descriptions.consolidate(),
        series_description: descriptions.series,
        program_description: descriptions.program,
        episode_description: descriptions.episode,
        segment_description: descriptions.segment,
        raw_footage_description: descriptions.raw_footage,
        promo_description: descriptions.promo,
        clip_description: descriptions.clip,
        description: descriptions.untyped,
        producing_organization,
        proxy_duration: instantiations.proxy_duration(),
    };

    AssetExtraction {
        asset,
        instantiations: instantiations.into_records(),
        sonyci_count,
        digital_media_types: candidates.digital,
    }
}

/// Up to three `source:value` identifiers besides the primary and Sony Ci
/// ones, in order of first appearance. Extras are dropped.
fn other_identifiers(root: &XmlElement) -> [String; MAX_OTHER_IDENTIFIERS] {
    let mut others: [String; MAX_OTHER_IDENTIFIERS] = Default::default();
    let found = elements(root, element::IDENTIFIER, Filter::Any)
        .filter(|identifier| {
            !matches!(
                identifier.attribute(attribute::SOURCE),
                Some(source::ARCHIVE_INVENTORY | source::SONY_CI)
            )
        })
        .filter_map(|identifier| {
            let value = identifier.trimmed_text();
            if value.is_empty() {
                return None;
            }
            match identifier.attribute(attribute::SOURCE).map(str::trim) {
                Some(name) if !name.is_empty() => Some(format!("{name}:{value}")),
                _ => Some(value.to_string()),
            }
        });
    for (slot, value) in others.iter_mut().zip(found) {
        *slot = value;
    }
    others
}

/// Accumulates rows and anomalies across a corpus.
///
/// Append-only; one document at a time.
#[derive(Debug, Clone, Default)]
pub struct CorpusAggregator {
    pub assets: Vec<AssetRecord>,
    pub instantiations: Vec<InstantiationRecord>,
    pub anomalies: CorpusAnomalies,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract one document and append its rows.
    pub fn add_document(&mut self, document: &DescriptionDocument) -> &AssetRecord {
        let extraction = extract_asset(&document.root);
        if extraction.asset.asset_id.is_empty() {
            warn!(
                file = %document.path.display(),
                "document has no archive inventory identifier; asset_id is empty"
            );
        }
        debug!(
            file = %document.path.display(),
            asset_id = %extraction.asset.asset_id,
            instantiation_count = extraction.instantiations.len(),
            media_type = %extraction.asset.media_type,
            "asset extracted"
        );
        self.add_extraction(extraction)
    }

    /// Append an already extracted asset.
    pub fn add_extraction(&mut self, extraction: AssetExtraction) -> &AssetRecord {
        let AssetExtraction {
            asset,
            instantiations,
            sonyci_count,
            digital_media_types,
        } = extraction;
        self.anomalies
            .record_sonyci_count(&asset.asset_id, sonyci_count);
        if self
            .anomalies
            .record_digital_media_types(&asset.asset_id, &digital_media_types)
        {
            debug!(
                asset_id = %asset.asset_id,
                media_types = ?digital_media_types,
                "digital copies mix moving image and sound"
            );
        }
        self.instantiations.extend(instantiations);
        self.assets.push(asset);
        &self.assets[self.assets.len() - 1]
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn instantiation_count(&self) -> usize {
        self.instantiations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbcore_ingest::parse_document;
    use pbcore_model::vocabulary::PBCORE_NAMESPACE;

    fn root(body: &str) -> XmlElement {
        parse_document(&format!(
            r#"<pbcoreDescriptionDocument xmlns="{PBCORE_NAMESPACE}">{body}</pbcoreDescriptionDocument>"#
        ))
        .unwrap()
    }

    #[test]
    fn asset_id_is_normalized_primary_identifier() {
        let doc = root(
            r#"<pbcoreIdentifier source="http://americanarchiveinventory.org">cpb-aacip/15_000000</pbcoreIdentifier>"#,
        );
        let extraction = extract_asset(&doc);
        assert_eq!(extraction.asset.aapb_pbcore_id, "cpb-aacip/15_000000");
        assert_eq!(extraction.asset.asset_id, "cpb-aacip-15-000000");
    }

    #[test]
    fn primary_identifier_skips_empty_matches() {
        let doc = root(
            r#"<pbcoreIdentifier source="http://americanarchiveinventory.org"> </pbcoreIdentifier>
               <pbcoreIdentifier source="http://americanarchiveinventory.org">cpb-aacip_7</pbcoreIdentifier>"#,
        );
        assert_eq!(extract_asset(&doc).asset.asset_id, "cpb-aacip-7");
    }

    #[test]
    fn missing_primary_identifier_gives_empty_asset_id() {
        let extraction = extract_asset(&root(""));
        assert_eq!(extraction.asset.asset_id, "");
        assert_eq!(extraction.sonyci_count, 0);
    }

    #[test]
    fn sonyci_first_non_empty() {
        let doc = root(
            r#"<pbcoreIdentifier source="Sony Ci"></pbcoreIdentifier>
               <pbcoreIdentifier source="Sony Ci">CI-200</pbcoreIdentifier>"#,
        );
        let extraction = extract_asset(&doc);
        assert_eq!(extraction.asset.sonyci_id, "CI-200");
        assert_eq!(extraction.sonyci_count, 2);
    }

    #[test]
    fn other_identifiers_capped_at_three() {
        let doc = root(
            r#"<pbcoreIdentifier source="http://americanarchiveinventory.org">cpb-aacip-1</pbcoreIdentifier>
               <pbcoreIdentifier source="NOLA Code">NC-1</pbcoreIdentifier>
               <pbcoreIdentifier source="Sony Ci">CI-1</pbcoreIdentifier>
               <pbcoreIdentifier>bare</pbcoreIdentifier>
               <pbcoreIdentifier source="Local"></pbcoreIdentifier>
               <pbcoreIdentifier source="Tape">T-9</pbcoreIdentifier>
               <pbcoreIdentifier source="Dropped">D-1</pbcoreIdentifier>"#,
        );
        let extraction = extract_asset(&doc);
        assert_eq!(
            extraction.asset.other_ids,
            [
                "NOLA Code:NC-1".to_string(),
                "bare".to_string(),
                "Tape:T-9".to_string()
            ]
        );
    }

    #[test]
    fn special_collections_joined_with_commas() {
        let doc = root(
            r#"<pbcoreAnnotation annotationType="special_collections">civil-rights</pbcoreAnnotation>
               <pbcoreAnnotation annotationType="organization">WGBH</pbcoreAnnotation>
               <pbcoreAnnotation annotationType="special_collections">vietnam</pbcoreAnnotation>"#,
        );
        let asset = extract_asset(&doc).asset;
        assert_eq!(asset.special_collections, "civil-rights,vietnam");
        assert_eq!(asset.organization, "WGBH");
    }

    #[test]
    fn producing_organization_takes_last_match() {
        let doc = root(
            r#"<pbcoreCreator><creator>WGBH</creator><creatorRole>Producing Organization</creatorRole></pbcoreCreator>
               <pbcoreCreator><creator>Jane Doe</creator><creatorRole>Director</creatorRole></pbcoreCreator>
               <pbcoreCreator><creator>WNET</creator><creatorRole>Producing Organization</creatorRole></pbcoreCreator>"#,
        );
        assert_eq!(extract_asset(&doc).asset.producing_organization, "WNET");
    }

    #[test]
    fn titles_dates_and_descriptions_consolidate() {
        let doc = root(
            r#"<pbcoreAssetDate dateType="Created">1986</pbcoreAssetDate>
               <pbcoreAssetDate dateType="Copyright">1987</pbcoreAssetDate>
               <pbcoreTitle titleType="Series">Civil War</pbcoreTitle>
               <pbcoreTitle titleType="Episode Number">3</pbcoreTitle>
               <pbcoreTitle titleType="Episode">Shiloh</pbcoreTitle>
               <pbcoreDescription descriptionType="Episode">Battle.</pbcoreDescription>
               <pbcoreDescription>Extra.</pbcoreDescription>"#,
        );
        let asset = extract_asset(&doc).asset;
        assert_eq!(asset.single_date, "1987");
        assert_eq!(asset.consolidated_title, "Civil War: No. 3: Shiloh");
        assert_eq!(asset.consolidated_description, "Battle. Extra.");
        assert_eq!(asset.description, "Extra.");
    }

    #[test]
    fn aggregator_records_anomalies() {
        let mixed = root(
            r#"<pbcoreIdentifier source="http://americanarchiveinventory.org">cpb-aacip_2</pbcoreIdentifier>
               <pbcoreInstantiation>
                 <instantiationDigital>audio/mp3</instantiationDigital>
                 <instantiationMediaType>Sound</instantiationMediaType>
               </pbcoreInstantiation>
               <pbcoreInstantiation>
                 <instantiationDigital>video/mp4</instantiationDigital>
                 <instantiationMediaType>Moving Image</instantiationMediaType>
               </pbcoreInstantiation>"#,
        );
        let mut aggregator = CorpusAggregator::new();
        let asset = aggregator.add_extraction(extract_asset(&mixed));
        assert_eq!(asset.media_type, "Moving Image");
        assert_eq!(aggregator.asset_count(), 1);
        assert_eq!(aggregator.instantiation_count(), 2);
        assert!(aggregator.anomalies.missing_sonyci_ids.contains("cpb-aacip-2"));
        assert_eq!(
            aggregator.anomalies.mixed_digital_media_types["cpb-aacip-2"],
            vec!["Sound".to_string(), "Moving Image".to_string()]
        );
    }
}
