//! Per-instantiation extraction and the two asset-level rollups it feeds.

use pbcore_ingest::XmlElement;
use pbcore_model::InstantiationRecord;
use pbcore_model::vocabulary::{element, instantiation};

use crate::canonical::{CopyKind, MediaTypeCandidates, proxy_duration};
use crate::select::{Filter, contains, descendants, select, select_all};

/// Separator between instantiation identifiers.
pub const IDENTIFIER_SEPARATOR: &str = "|";

/// One extracted instantiation plus what the rollups need to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedInstantiation {
    pub record: InstantiationRecord,
    pub kind: CopyKind,
    /// Whether an `instantiationMediaType` element is present.
    pub has_media_type: bool,
}

/// Extract one `pbcoreInstantiation`.
///
/// Identifier elements without text contribute an empty string to the
/// joined list rather than a placeholder.
pub fn extract_instantiation(asset_id: &str, inst: &XmlElement) -> ExtractedInstantiation {
    let identifiers =
        select_all(inst, instantiation::IDENTIFIER, Filter::Any).join(IDENTIFIER_SEPARATOR);
    let kind = if contains(inst, instantiation::DIGITAL) {
        CopyKind::Digital
    } else if contains(inst, instantiation::PHYSICAL) {
        CopyKind::Physical
    } else {
        CopyKind::Unclassified
    };
    let record = InstantiationRecord {
        asset_id: asset_id.to_string(),
        identifiers,
        media_type: select(inst, instantiation::MEDIA_TYPE, Filter::Any),
        digital_format: select(inst, instantiation::DIGITAL, Filter::Any),
        physical_format: select(inst, instantiation::PHYSICAL, Filter::Any),
        generations: select(inst, instantiation::GENERATIONS, Filter::Any),
        duration: select(inst, instantiation::DURATION, Filter::Any),
        location: select(inst, instantiation::LOCATION, Filter::Any),
        date: select(inst, instantiation::DATE, Filter::Any),
    };
    ExtractedInstantiation {
        record,
        kind,
        has_media_type: contains(inst, instantiation::MEDIA_TYPE),
    }
}

/// Every instantiation below the document root, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantiationSet {
    pub items: Vec<ExtractedInstantiation>,
}

impl InstantiationSet {
    pub fn extract(root: &XmlElement, asset_id: &str) -> Self {
        let items = descendants(root, element::INSTANTIATION, Filter::Any)
            .into_iter()
            .map(|inst| extract_instantiation(asset_id, inst))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Media types split by copy kind, from copies that declare one.
    pub fn media_type_candidates(&self) -> MediaTypeCandidates {
        let mut candidates = MediaTypeCandidates::default();
        for item in self.items.iter().filter(|item| item.has_media_type) {
            candidates.push(item.kind, &item.record.media_type);
        }
        candidates
    }

    pub fn proxy_duration(&self) -> String {
        proxy_duration(self.items.iter().map(|item| {
            (
                item.kind,
                item.record.generations.as_str(),
                item.record.duration.as_str(),
            )
        }))
    }

    pub fn into_records(self) -> Vec<InstantiationRecord> {
        self.items.into_iter().map(|item| item.record).collect()
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
    fn extracts_fixed_columns() {
        let doc = root(
            r#"<pbcoreInstantiation>
                 <instantiationIdentifier source="File Name">a.mp4</instantiationIdentifier>
                 <instantiationIdentifier source="MD5">abc</instantiationIdentifier>
                 <instantiationDate>2010-05-01</instantiationDate>
                 <instantiationDigital>video/mp4</instantiationDigital>
                 <instantiationLocation>N/A</instantiationLocation>
                 <instantiationMediaType>Moving Image</instantiationMediaType>
                 <instantiationGenerations>Proxy</instantiationGenerations>
                 <instantiationDuration>00:28:30</instantiationDuration>
               </pbcoreInstantiation>"#,
        );
        let set = InstantiationSet::extract(&doc, "cpb-aacip-1");
        assert_eq!(set.len(), 1);
        let item = &set.items[0];
        assert_eq!(item.kind, CopyKind::Digital);
        assert!(item.has_media_type);
        assert_eq!(
            item.record,
            InstantiationRecord {
                asset_id: "cpb-aacip-1".into(),
                identifiers: "a.mp4|abc".into(),
                media_type: "Moving Image".into(),
                digital_format: "video/mp4".into(),
                physical_format: String::new(),
                generations: "Proxy".into(),
                duration: "00:28:30".into(),
                location: "N/A".into(),
                date: "2010-05-01".into(),
            }
        );
    }

    #[test]
    fn empty_identifier_joins_as_empty_text() {
        let doc = root(
            r#"<pbcoreInstantiation>
                 <instantiationIdentifier/>
                 <instantiationIdentifier>tape-7</instantiationIdentifier>
                 <instantiationPhysical>1/2 inch videotape</instantiationPhysical>
               </pbcoreInstantiation>"#,
        );
        let set = InstantiationSet::extract(&doc, "a");
        assert_eq!(set.items[0].record.identifiers, "|tape-7");
        assert_eq!(set.items[0].kind, CopyKind::Physical);
    }

    #[test]
    fn empty_digital_marker_still_classifies() {
        let doc = root(
            r#"<pbcoreInstantiation>
                 <instantiationDigital/>
                 <instantiationPhysical>Betacam</instantiationPhysical>
                 <instantiationMediaType>Sound</instantiationMediaType>
               </pbcoreInstantiation>"#,
        );
        let set = InstantiationSet::extract(&doc, "a");
        assert_eq!(set.items[0].kind, CopyKind::Digital);
        assert_eq!(set.media_type_candidates().digital, vec!["Sound".to_string()]);
    }

    #[test]
    fn copies_without_media_type_do_not_vote() {
        let doc = root(
            r#"<pbcoreInstantiation><instantiationDigital>video/mp4</instantiationDigital></pbcoreInstantiation>
               <pbcoreInstantiation>
                 <instantiationPhysical>Audio cassette</instantiationPhysical>
                 <instantiationMediaType>Sound</instantiationMediaType>
               </pbcoreInstantiation>"#,
        );
        let set = InstantiationSet::extract(&doc, "a");
        let candidates = set.media_type_candidates();
        assert!(candidates.digital.is_empty());
        assert_eq!(candidates.best(), "Sound");
    }

    #[test]
    fn asset_without_instantiations_is_empty() {
        let doc = root("<pbcoreTitle>No copies</pbcoreTitle>");
        let set = InstantiationSet::extract(&doc, "a");
        assert!(set.is_empty());
        assert_eq!(set.media_type_candidates().best(), "");
        assert_eq!(set.proxy_duration(), "");
        assert!(set.into_records().is_empty());
    }

    #[test]
    fn proxy_duration_from_set() {
        let doc = root(
            r#"<pbcoreInstantiation>
                 <instantiationDigital>video/mp4</instantiationDigital>
                 <instantiationGenerations>Master</instantiationGenerations>
                 <instantiationDuration>01:00:00</instantiationDuration>
               </pbcoreInstantiation>
               <pbcoreInstantiation>
                 <instantiationDigital>video/mp4</instantiationDigital>
                 <instantiationGenerations>Proxy</instantiationGenerations>
                 <instantiationDuration>00:05:00</instantiationDuration>
               </pbcoreInstantiation>"#,
        );
        let set = InstantiationSet::extract(&doc, "a");
        assert_eq!(set.proxy_duration(), "00:05:00");
    }
}
