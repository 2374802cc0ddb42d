//! Field selection over PBCore elements.
//!
//! Every lookup scans the direct children of a container for elements in
//! the PBCore namespace with a given local name, optionally filtered on an
//! attribute. Absent fields resolve to the empty string, never an error.

use pbcore_ingest::XmlElement;
use pbcore_model::vocabulary::PBCORE_NAMESPACE;

/// Attribute predicate applied to candidate elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<'a> {
    /// Every element with the right name.
    Any,
    /// Elements whose attribute equals the value exactly.
    Equals { attribute: &'a str, value: &'a str },
    /// Elements that do not carry the attribute at all.
    Missing(&'a str),
}

impl<'a> Filter<'a> {
    pub fn equals(attribute: &'a str, value: &'a str) -> Self {
        Self::Equals { attribute, value }
    }

    fn matches(self, element: &XmlElement) -> bool {
        match self {
            Self::Any => true,
            Self::Equals { attribute, value } => element.attribute(attribute) == Some(value),
            Self::Missing(attribute) => !element.has_attribute(attribute),
        }
    }
}

/// Matching direct children in document order.
pub fn elements<'e>(
    container: &'e XmlElement,
    name: &str,
    filter: Filter<'_>,
) -> impl Iterator<Item = &'e XmlElement> {
    container
        .children
        .iter()
        .filter(move |child| child.is(PBCORE_NAMESPACE, name) && filter.matches(child))
}

/// Trimmed text of the first match, or empty.
pub fn select(container: &XmlElement, name: &str, filter: Filter<'_>) -> String {
    elements(container, name, filter)
        .next()
        .map(|element| element.trimmed_text().to_string())
        .unwrap_or_default()
}

/// Trimmed text of every match, in document order.
pub fn select_all(container: &XmlElement, name: &str, filter: Filter<'_>) -> Vec<String> {
    elements(container, name, filter)
        .map(|element| element.trimmed_text().to_string())
        .collect()
}

/// Text of the first element lacking `type_attribute` entirely.
pub fn select_untyped(container: &XmlElement, name: &str, type_attribute: &str) -> String {
    select(container, name, Filter::Missing(type_attribute))
}

/// Whether at least one matching child exists, regardless of its text.
pub fn contains(container: &XmlElement, name: &str) -> bool {
    elements(container, name, Filter::Any).next().is_some()
}

/// Matching elements anywhere below `container`, in document order.
pub fn descendants<'e>(
    container: &'e XmlElement,
    name: &str,
    filter: Filter<'_>,
) -> Vec<&'e XmlElement> {
    container
        .descendants()
        .into_iter()
        .filter(|element| element.is(PBCORE_NAMESPACE, name) && filter.matches(element))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbcore_ingest::parse_document;

    fn doc(body: &str) -> XmlElement {
        parse_document(&format!(
            r#"<pbcoreDescriptionDocument xmlns="{PBCORE_NAMESPACE}" xmlns:o="urn:other">{body}</pbcoreDescriptionDocument>"#
        ))
        .unwrap()
    }

    #[test]
    fn select_first_match_by_attribute() {
        let root = doc(
            r#"<pbcoreTitle titleType="Program"> First </pbcoreTitle>
               <pbcoreTitle titleType="Program">Second</pbcoreTitle>"#,
        );
        assert_eq!(
            select(&root, "pbcoreTitle", Filter::equals("titleType", "Program")),
            "First"
        );
        assert_eq!(
            select(&root, "pbcoreTitle", Filter::equals("titleType", "Episode")),
            ""
        );
    }

    #[test]
    fn attribute_match_is_case_sensitive() {
        let root = doc(r#"<pbcoreTitle titleType="program">x</pbcoreTitle>"#);
        assert_eq!(
            select(&root, "pbcoreTitle", Filter::equals("titleType", "Program")),
            ""
        );
    }

    #[test]
    fn select_all_preserves_order_and_empties() {
        let root = doc(
            r#"<pbcoreIdentifier source="Sony Ci"/>
               <pbcoreIdentifier source="Sony Ci">CI-200</pbcoreIdentifier>"#,
        );
        assert_eq!(
            select_all(&root, "pbcoreIdentifier", Filter::equals("source", "Sony Ci")),
            vec![String::new(), "CI-200".to_string()]
        );
    }

    #[test]
    fn untyped_skips_elements_with_the_attribute() {
        let root = doc(
            r#"<pbcoreAssetDate dateType="Created">1986</pbcoreAssetDate>
               <pbcoreAssetDate>1990-01-01</pbcoreAssetDate>"#,
        );
        assert_eq!(select_untyped(&root, "pbcoreAssetDate", "dateType"), "1990-01-01");
    }

    #[test]
    fn untyped_ignores_empty_attribute_value() {
        let root = doc(r#"<pbcoreTitle titleType="">Typed but blank</pbcoreTitle>"#);
        assert_eq!(select_untyped(&root, "pbcoreTitle", "titleType"), "");
    }

    #[test]
    fn foreign_namespace_is_ignored() {
        let root = doc(r#"<o:pbcoreTitle>Foreign</o:pbcoreTitle>"#);
        assert_eq!(select(&root, "pbcoreTitle", Filter::Any), "");
        assert!(!contains(&root, "pbcoreTitle"));
    }

    #[test]
    fn direct_children_only() {
        let root = doc(r#"<pbcorePart><pbcoreTitle>Nested</pbcoreTitle></pbcorePart>"#);
        assert_eq!(select(&root, "pbcoreTitle", Filter::Any), "");
        assert_eq!(descendants(&root, "pbcoreTitle", Filter::Any).len(), 1);
    }
}
