use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ─── Document Tree ───────────────────────────────────────────────────────────

/// One node of a parsed markup tree.
///
/// Nodes are homogeneous: a tag, its attributes, optional text content and the
/// ordered child elements. `children` is always in document order, which the
/// "first matching child" queries rely on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given tag, in document order.
    pub fn first_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All direct children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Text content, or `""` when the element has none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// True when text is absent or whitespace only.
    pub fn has_blank_text(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// The identifying `id` attribute, when present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.attr("id").filter(|id| !id.is_empty())
    }
}

// Subtrees are unlinked onto a heap stack so arbitrarily deep trees do not
// exhaust the call stack when dropped.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

/// The `<?xml ...?>` prolog of a document, when one was present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDeclaration {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// A parsed ad-markup document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<XmlDeclaration>,
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document {
            declaration: None,
            root,
        }
    }

    /// The version declared on the root element.
    pub fn declared_version(&self) -> Option<&str> {
        self.root.attr("version")
    }
}

// ─── Ancestor Context ────────────────────────────────────────────────────────

/// Identifiers of the enclosing Ad, Creative and MediaFile.
///
/// Built fresh on every descent and never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AncestorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file_id: Option<String>,
}

impl AncestorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seen by the children of `element`.
    pub fn enter(&self, element: &Element) -> AncestorContext {
        let id = element.id().map(str::to_string);
        match element.tag.as_str() {
            "Ad" => AncestorContext {
                ad_id: id,
                creative_id: None,
                media_file_id: None,
            },
            "Creative" => AncestorContext {
                creative_id: id,
                media_file_id: None,
                ..self.clone()
            },
            "MediaFile" => AncestorContext {
                media_file_id: id,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ad_id.is_none() && self.creative_id.is_none() && self.media_file_id.is_none()
    }

    /// Nearest identified ancestors first, e.g. `Creative id=c1, Ad id=a1`.
    pub fn describe(&self) -> String {
        [
            ("MediaFile", self.media_file_id.as_deref()),
            ("Creative", self.creative_id.as_deref()),
            ("Ad", self.ad_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(tag, id)| id.map(|id| format!("{} id={}", tag, id)))
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Location label for `element` nested in this context:
    /// `MediaFile id=m1 (Creative id=c1, Ad id=a1)`.
    pub fn locate(&self, element: &Element) -> String {
        let mut label = element.tag.clone();
        if let Some(id) = element.id() {
            label.push_str(&format!(" id={}", id));
        }
        if !self.is_empty() {
            label.push_str(&format!(" ({})", self.describe()));
        }
        label
    }
}

impl fmt::Display for AncestorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "document")
        } else {
            write!(f, "{}", self.describe())
        }
    }
}
