//! Namespace-aware XML element tree.
//!
//! PBCore records are small, so each document is read fully into a tree of
//! [`XmlElement`]s with `quick-xml`'s namespace reader. Only what the field
//! selectors need is kept: resolved namespace, local name, attributes, own
//! character data, and children in document order.

use std::borrow::Cow;

use quick_xml::NsReader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

use crate::error::DocumentError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Resolved namespace URI, if the element is bound to one.
    pub namespace: Option<String>,
    /// Element name without prefix.
    pub local_name: String,
    /// Attributes in document order (qualified names as written).
    pub attributes: Vec<(String, String)>,
    /// Character data directly under this element, untrimmed.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Whether this element has the given namespace and local name.
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Own character data with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// All descendants (not including `self`) in document order.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children.iter().rev());
        }
        out
    }
}

/// Parse a complete XML document into its root element.
pub fn parse_document(xml: &str) -> Result<XmlElement, DocumentError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let mut reader = NsReader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (namespace, event) = match reader.read_resolved_event() {
            Ok((resolved, event)) => (resolve_namespace(resolved)?, event),
            Err(error) => {
                return Err(DocumentError::Malformed {
                    message: format!("{error} (at byte {})", reader.error_position()),
                });
            }
        };

        match event {
            Event::Start(start) => {
                let element = open_element(namespace, &start)?;
                if stack.is_empty() && root.is_some() {
                    return Err(DocumentError::MultipleRoots {
                        name: element.local_name,
                    });
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(namespace, &start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let raw = String::from_utf8_lossy(&text);
                push_text(&mut stack, &unescape_text(&raw)?)?;
            }
            Event::CData(data) => {
                let raw = String::from_utf8_lossy(&data).into_owned();
                push_text(&mut stack, &raw)?;
            }
            Event::GeneralRef(reference) => {
                let name = String::from_utf8_lossy(&reference);
                push_text(&mut stack, &unescape_text(&format!("&{name};"))?)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(DocumentError::UnclosedElement {
            name: open.local_name,
        });
    }
    root.ok_or(DocumentError::NoRootElement)
}

fn resolve_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, DocumentError> {
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(String::from_utf8_lossy(uri).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(DocumentError::Malformed {
            message: format!(
                "unbound namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            ),
        }),
    }
}

fn open_element(
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<XmlElement, DocumentError> {
    let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|error| DocumentError::Malformed {
            message: format!("bad attribute on <{local_name}>: {error}"),
        })?;
        // Namespace declarations are consumed by the reader
        if attribute.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attribute.value);
        attributes.push((key, unescape_text(&raw)?));
    }
    Ok(XmlElement {
        namespace,
        local_name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), DocumentError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DocumentError::MultipleRoots {
            name: element.local_name,
        });
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(DocumentError::TextOutsideRoot),
    }
}

fn unescape_text(raw: &str) -> Result<String, DocumentError> {
    unescape(raw)
        .map(Cow::into_owned)
        .map_err(|error| DocumentError::Malformed {
            message: format!("bad entity reference: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://www.pbcore.org/PBCore/PBCoreNamespace.html";

    #[test]
    fn parses_namespaced_tree() {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<pbcoreDescriptionDocument xmlns="{NS}">
  <pbcoreTitle titleType="Series">  Civil War </pbcoreTitle>
  <pbcoreInstantiation><instantiationDigital/></pbcoreInstantiation>
</pbcoreDescriptionDocument>"#
        );
        let root = parse_document(&xml).unwrap();
        assert!(root.is(NS, "pbcoreDescriptionDocument"));
        assert_eq!(root.children.len(), 2);
        let title = &root.children[0];
        assert!(title.is(NS, "pbcoreTitle"));
        assert_eq!(title.attribute("titleType"), Some("Series"));
        assert_eq!(title.trimmed_text(), "Civil War");
        assert_eq!(root.descendants().len(), 3);
    }

    #[test]
    fn resolves_entities_and_cdata() {
        let xml = r#"<r><a>Tom &amp; Jerry &#65;</a><b><![CDATA[<raw>]]></b><c k="x &lt; y"/></r>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.children[0].trimmed_text(), "Tom & Jerry A");
        assert_eq!(root.children[1].trimmed_text(), "<raw>");
        assert_eq!(root.children[2].attribute("k"), Some("x < y"));
        assert_eq!(root.children[0].namespace, None);
    }

    #[test]
    fn descendants_are_in_document_order() {
        let root = parse_document("<r><a><b/><c/></a><d/></r>").unwrap();
        let names: Vec<_> = root
            .descendants()
            .iter()
            .map(|e| e.local_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(matches!(
            parse_document("<r><a></b></r>"),
            Err(DocumentError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_truncated_document() {
        assert!(parse_document("<r><a>text</a>").is_err());
    }

    #[test]
    fn rejects_empty_and_non_xml_input() {
        assert_eq!(parse_document(""), Err(DocumentError::NoRootElement));
        assert_eq!(
            parse_document("just some words"),
            Err(DocumentError::TextOutsideRoot)
        );
    }

    #[test]
    fn rejects_second_root() {
        assert_eq!(
            parse_document("<a/><b/>"),
            Err(DocumentError::MultipleRoots {
                name: "b".to_string()
            })
        );
    }
}
