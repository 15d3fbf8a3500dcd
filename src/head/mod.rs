//! Document head model.
//!
//! `DocumentHead` is an owned, in-memory model of the mutable `<head>`
//! state the site is responsible for: the title, a set of meta tags keyed
//! by `(namespace, key)`, and JSON-LD script nodes. The browser DOM of the
//! deployed site is the eventual render target; modeling it as a value
//! keeps every mutation observable and testable.
//!
//! # Architecture
//!
//! ```text
//! pages::descriptor_for(route)
//!         │
//!         ▼
//! MetadataSync::apply(descriptor)      (head/sync.rs)
//!         │  find-or-create meta tags
//!         │  remove-then-insert managed scripts
//!         ▼
//! DocumentHead ──► render() ──► <head>…</head> markup
//! ```
//!
//! # Key Invariant
//!
//! At most one meta tag exists per distinct `(namespace, key)`; `set_meta`
//! always finds-or-creates, never appends a duplicate.

pub mod sync;

use std::borrow::Cow;
use std::fmt::Write as _;

/// Marker attribute on script nodes owned by the synchronizer.
pub const SCHEMA_MARKER: &str = "data-schema";

/// Positional index attribute on owned script nodes.
pub const SCHEMA_INDEX: &str = "data-schema-index";

// ============================================================================
// Tag Types
// ============================================================================

/// Attribute namespace identifying a meta tag.
///
/// Plain meta tags are keyed by `name`; Open Graph and article tags are
/// keyed by `property`. Lookups never cross namespaces, so `name="og:title"`
/// and `property="og:title"` would be distinct tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaNs {
    Name,
    Property,
}

impl MetaNs {
    /// The HTML attribute this namespace renders as.
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single meta tag: `<meta {ns}="{key}" content="{content}">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub ns: MetaNs,
    pub key: String,
    pub content: String,
}

/// A `<script type="application/ld+json">` node.
///
/// Managed nodes carry the [`SCHEMA_MARKER`] attribute and a positional
/// index; they are the only nodes the synchronizer may remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptNode {
    pub managed: bool,
    pub index: usize,
    pub payload: String,
}

// ============================================================================
// Document Head
// ============================================================================

/// Owned model of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    title: Option<String>,
    metas: Vec<MetaTag>,
    scripts: Vec<ScriptNode>,
}

impl DocumentHead {
    /// Create an empty head.
    ///
    /// Starting empty is what guarantees the no-pre-existing-duplicates
    /// precondition for managed keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document title, if one has been applied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Find-or-create the tag for `(ns, key)` and set its content.
    ///
    /// An existing tag is updated in place; a missing one is appended.
    /// Repeated calls can therefore never grow the tag count for a key.
    pub fn set_meta(&mut self, ns: MetaNs, key: &str, content: impl Into<String>) {
        let content = content.into();
        match self.metas.iter_mut().find(|m| m.ns == ns && m.key == key) {
            Some(tag) => tag.content = content,
            None => self.metas.push(MetaTag {
                ns,
                key: key.to_owned(),
                content,
            }),
        }
    }

    /// Remove the tag for `(ns, key)`, if present.
    pub fn remove_meta(&mut self, ns: MetaNs, key: &str) {
        self.metas.retain(|m| !(m.ns == ns && m.key == key));
    }

    /// Content of the tag for `(ns, key)`, if present.
    pub fn meta(&self, ns: MetaNs, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.ns == ns && m.key == key)
            .map(|m| m.content.as_str())
    }

    /// Number of tags for `(ns, key)`. Stays 0 or 1 under `set_meta`.
    pub fn meta_count(&self, ns: MetaNs, key: &str) -> usize {
        self.metas
            .iter()
            .filter(|m| m.ns == ns && m.key == key)
            .count()
    }

    /// Total meta tag count.
    pub fn meta_len(&self) -> usize {
        self.metas.len()
    }

    /// All meta tags, in insertion order.
    pub fn metas(&self) -> &[MetaTag] {
        &self.metas
    }

    /// Append a managed (marker-tagged) script node.
    pub fn push_managed_script(&mut self, index: usize, payload: impl Into<String>) {
        self.scripts.push(ScriptNode {
            managed: true,
            index,
            payload: payload.into(),
        });
    }

    /// Append an unmanaged script node (e.g., from static markup).
    pub fn push_script(&mut self, payload: impl Into<String>) {
        self.scripts.push(ScriptNode {
            managed: false,
            index: 0,
            payload: payload.into(),
        });
    }

    /// Remove every managed script node; unmanaged nodes are untouched.
    pub fn remove_managed_scripts(&mut self) {
        self.scripts.retain(|s| !s.managed);
    }

    /// Managed script nodes in document order.
    pub fn managed_scripts(&self) -> impl Iterator<Item = &ScriptNode> {
        self.scripts.iter().filter(|s| s.managed)
    }

    /// All script nodes in document order.
    pub fn scripts(&self) -> &[ScriptNode] {
        &self.scripts
    }

    /// Render the head to HTML markup.
    ///
    /// Title and attribute values are escaped; JSON-LD payloads are emitted
    /// verbatim (they are serialized JSON, not HTML text).
    pub fn render(&self) -> String {
        let mut out = String::from("<head>\n");

        if let Some(title) = &self.title {
            let _ = writeln!(out, "  <title>{}</title>", html_escape(title));
        }

        for tag in &self.metas {
            let _ = writeln!(
                out,
                "  <meta {}=\"{}\" content=\"{}\">",
                tag.ns.attr(),
                html_escape(&tag.key),
                html_escape(&tag.content),
            );
        }

        for script in &self.scripts {
            if script.managed {
                let _ = writeln!(
                    out,
                    "  <script type=\"application/ld+json\" {SCHEMA_MARKER}=\"true\" {SCHEMA_INDEX}=\"{}\">{}</script>",
                    script.index, script.payload,
                );
            } else {
                let _ = writeln!(
                    out,
                    "  <script type=\"application/ld+json\">{}</script>",
                    script.payload,
                );
            }
        }

        out.push_str("</head>\n");
        out
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// ============================================================================
// Tests
// ============================================================================
