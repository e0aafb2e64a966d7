use std::collections::HashSet;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::DbusError;

/// Method names discovered on a remote object.
///
/// Keeps discovery order for listing while behaving as a set for membership:
/// a name declared several times is stored once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTable {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl MethodTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `gdbus introspect --xml` output and collects every declared method.
    ///
    /// The whole body must be a single well-formed XML document. Every
    /// `<method name="...">` element below the root is collected in document
    /// order, whatever its parent.
    ///
    /// # Errors
    /// Returns `DbusError::Parse` if `xml` is not well-formed, has no root
    /// element, or has content after the root element.
    pub fn from_introspection(xml: &str, object_path: &str) -> Result<Self, DbusError> {
        let names = scan_methods(xml).map_err(|details| DbusError::Parse {
            path: object_path.to_string(),
            details,
        })?;

        let mut table = Self::new();
        for name in names {
            table.insert(name);
        }
        Ok(table)
    }

    /// Adds `name`, returning `false` if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !self.members.insert(name.clone()) {
            return false;
        }
        self.ordered.push(name);
        true
    }

    /// Whether `name` was discovered
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Returns the stored name equal to `name`, if discovered
    pub fn get(&self, name: &str) -> Option<&str> {
        self.members.get(name).map(String::as_str)
    }

    /// Method names in discovery order
    pub fn names(&self) -> &[String] {
        &self.ordered
    }

    /// Iterates method names in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of distinct methods
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no methods were discovered
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Walks the whole document, checking it is well-formed, and returns the
/// names of all `method` elements below the root.
fn scan_methods(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(element) => {
                open_element(&element, depth, &mut seen_root, &mut names)?;
                depth += 1;
            }
            Event::Empty(element) => {
                open_element(&element, depth, &mut seen_root, &mut names)?;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(outside_root(seen_root));
                }
            }
            Event::CData(_) if depth == 0 => return Err(outside_root(seen_root)),
            Event::Eof => {
                if depth > 0 {
                    return Err(format!("unexpected end of document, {depth} element(s) unclosed"));
                }
                if !seen_root {
                    return Err("no element found".to_string());
                }
                return Ok(names);
            }
            _ => {}
        }
    }
}

fn open_element(
    element: &BytesStart<'_>,
    depth: usize,
    seen_root: &mut bool,
    names: &mut Vec<String>,
) -> Result<(), String> {
    if depth == 0 {
        if *seen_root {
            return Err(outside_root(true));
        }
        *seen_root = true;
    }

    let mut name = None;
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        if attribute.key.as_ref() == b"name" {
            let value = attribute.unescape_value().map_err(|e| e.to_string())?;
            name = Some(value.into_owned());
        }
    }

    let is_method = depth > 0 && element.name().as_ref() == b"method";
    if let Some(name) = name.filter(|_| is_method) {
        names.push(name);
    }

    Ok(())
}

fn outside_root(seen_root: bool) -> String {
    if seen_root {
        "junk after document element".to_string()
    } else {
        "content before document element".to_string()
    }
}
