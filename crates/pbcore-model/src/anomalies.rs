//! Corpus-wide anomaly ledger.
//!
//! Anomalies are recorded, never raised. They are advisory side outputs of
//! one extraction run and are not persisted beyond the optional JSON report.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::vocabulary::media_type;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusAnomalies {
    /// Assets carrying more than one Sony Ci identifier.
    pub multiple_sonyci_ids: BTreeSet<String>,
    /// Assets carrying no Sony Ci identifier.
    pub missing_sonyci_ids: BTreeSet<String>,
    /// Assets whose digital copies mix moving-image and sound media types,
    /// with the digital media types in document order.
    pub mixed_digital_media_types: BTreeMap<String, Vec<String>>,
}

impl CorpusAnomalies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many Sony Ci identifiers an asset carries.
    pub fn record_sonyci_count(&mut self, asset_id: &str, count: usize) {
        match count {
            0 => {
                self.missing_sonyci_ids.insert(asset_id.to_string());
            }
            1 => {}
            _ => {
                self.multiple_sonyci_ids.insert(asset_id.to_string());
            }
        }
    }

    /// Record the digital media types of an asset if they conflict.
    ///
    /// Returns true when the asset was recorded.
    pub fn record_digital_media_types(&mut self, asset_id: &str, digital: &[String]) -> bool {
        if !is_mixed_moving_image_and_sound(digital) {
            return false;
        }
        self.mixed_digital_media_types
            .insert(asset_id.to_string(), digital.to_vec());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.multiple_sonyci_ids.is_empty()
            && self.missing_sonyci_ids.is_empty()
            && self.mixed_digital_media_types.is_empty()
    }
}

/// More than one value, not all equal, and both moving image and sound.
fn is_mixed_moving_image_and_sound(values: &[String]) -> bool {
    let Some(first) = values.first() else {
        return false;
    };
    values.len() > 1
        && values.iter().any(|value| value != first)
        && values.iter().any(|value| value == media_type::MOVING_IMAGE)
        && values.iter().any(|value| value == media_type::SOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn sonyci_counts_split_into_missing_and_multiple() {
        let mut anomalies = CorpusAnomalies::new();
        anomalies.record_sonyci_count("a", 0);
        anomalies.record_sonyci_count("b", 1);
        anomalies.record_sonyci_count("c", 3);
        assert!(anomalies.missing_sonyci_ids.contains("a"));
        assert!(anomalies.multiple_sonyci_ids.contains("c"));
        assert_eq!(anomalies.missing_sonyci_ids.len(), 1);
        assert_eq!(anomalies.multiple_sonyci_ids.len(), 1);
    }

    #[test]
    fn mixed_media_requires_both_kinds() {
        let mut anomalies = CorpusAnomalies::new();
        assert!(anomalies.record_digital_media_types("a", &strings(&["Sound", "Moving Image"])));
        assert!(!anomalies.record_digital_media_types("b", &strings(&["Sound", "Sound"])));
        assert!(!anomalies.record_digital_media_types("c", &strings(&["Sound", "Text"])));
        assert!(!anomalies.record_digital_media_types("d", &strings(&["Moving Image"])));
        assert_eq!(anomalies.mixed_digital_media_types.len(), 1);
        assert_eq!(
            anomalies.mixed_digital_media_types["a"],
            strings(&["Sound", "Moving Image"])
        );
    }
}
