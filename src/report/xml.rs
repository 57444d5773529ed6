//! Minimal XML tree parsing for JUnit-style reports
//!
//! quick-xml's pull parser is folded into a plain element tree so the
//! converters can walk it the same way they walk JSON. Only the subset
//! JUnit reports need is kept: element names, attributes, children, text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Default, Clone)]
pub struct XmlElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First direct child with the given element name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First descendant with the given name, depth-first.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given name, in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut out = Vec::new();
        self.collect(name, &mut out);
        out
    }

    fn collect<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.collect(name, out);
        }
    }
}

/// Resolve the element a converter should treat as the document container.
///
/// Candidate names are tried in order, first against the root itself and
/// then against its descendants; the root is the final fallback. JUnit
/// files in the wild start at `testsuites`, `testsuite`, or neither.
pub fn container<'a>(root: &'a XmlElement, candidates: &[&str]) -> &'a XmlElement {
    for name in candidates {
        if root.name == *name {
            return root;
        }
        if let Some(found) = root.find(name) {
            return found;
        }
    }
    root
}

pub fn parse_file(path: &Path) -> Result<XmlElement> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_str(&content).with_context(|| format!("Invalid XML in {}", path.display()))
}

pub fn parse_str(content: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().context("XML parse error")? {
            Event::Start(start) => {
                stack.push(element_from(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&text.unescape().context("XML parse error")?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or_else(|| anyhow!("XML document has no root element"))
}

fn element_from(start: &BytesStart) -> Result<XmlElement> {
    let mut element = XmlElement {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        ..Default::default()
    };
    for attr in start.attributes() {
        let attr = attr.context("XML parse error")?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().context("XML parse error")?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<testsuites name="all" tests="2">
  <testsuite name="suite" tests="2">
    <testcase name="ok" classname="C" time="0.1"/>
    <testcase name="bad" classname="C" time="0.2">
      <failure message="boom" type="AssertionError">stack trace</failure>
    </testcase>
  </testsuite>
</testsuites>"#;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let root = parse_str(SAMPLE).unwrap();
        assert_eq!(root.name, "testsuites");
        assert_eq!(root.attr("tests"), Some("2"));
        let cases = root.descendants("testcase");
        assert_eq!(cases.len(), 2);
        let failure = cases[1].child("failure").unwrap();
        assert_eq!(failure.attr("message"), Some("boom"));
        assert_eq!(failure.text, "stack trace");
    }

    #[test]
    fn container_walks_the_fallback_chain() {
        let root = parse_str(SAMPLE).unwrap();
        assert_eq!(container(&root, &["testsuites", "testsuite"]).name, "testsuites");

        let bare = parse_str(r#"<testsuite name="only" tests="0"/>"#).unwrap();
        assert_eq!(container(&bare, &["testsuites", "testsuite"]).name, "testsuite");

        let odd = parse_str(r#"<report><x/></report>"#).unwrap();
        assert_eq!(container(&odd, &["testsuites", "testsuite"]).name, "report");
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_str("<a><b></a>").is_err());
    }
}
