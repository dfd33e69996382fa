//! Renderer: turn a finished document tree into escaped markup.
//!
//! - Text content escapes `&`, `<` and `>`
//! - Attribute values are double-quoted and escape `&`, `<`, `>`, `"` and `'`
//! - Attribute names are written as-is
//! - Boolean attributes are written bare
//! - Void elements (see [`Tag::is_void`]) never get children or an end tag

use std::fmt::Write;

use crate::Tag;
use crate::dom::{Attribute, BuildError, Document, ElementData, NodeData, NodeId};

/// Render the subtree rooted at `root` into a new string.
///
/// The document is not modified. Fails only if `root` is not a live node.
pub fn render_to_text(doc: &Document, root: NodeId) -> Result<String, BuildError> {
    if !doc.contains(root) {
        return Err(BuildError::StaleNode);
    }
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, doc);
    ser.write_tree(root);
    Ok(out)
}

impl Document {
    /// Render the subtree rooted at `root`. See [`render_to_text`].
    pub fn render(&self, root: NodeId) -> Result<String, BuildError> {
        render_to_text(self, root)
    }
}

fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

fn attr_entity(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => text_entity(c),
    }
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    doc: &'a Document,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, doc: &'a Document) -> Self {
        Self { out, doc }
    }

    /// Write `text`, replacing every character `entity` maps with its entity.
    /// Unmapped runs are copied in one piece.
    fn write_escaped(&mut self, text: &str, entity: fn(char) -> Option<&'static str>) {
        let mut run_start = 0;
        for (idx, c) in text.char_indices() {
            if let Some(replacement) = entity(c) {
                let _ = self.out.write_str(&text[run_start..idx]);
                let _ = self.out.write_str(replacement);
                run_start = idx + c.len_utf8();
            }
        }
        let _ = self.out.write_str(&text[run_start..]);
    }

    fn write_attr(&mut self, attr: &Attribute) {
        let _ = write!(self.out, " {}", attr.name);
        if let Some(value) = &attr.value {
            let _ = self.out.write_str("=\"");
            self.write_escaped(value, attr_entity);
            let _ = self.out.write_char('"');
        }
    }

    /// Depth-first walk. Open elements live on a heap stack, not the call stack.
    fn write_tree(&mut self, root: NodeId) {
        let doc = self.doc;
        // Elements awaiting their end tag, each with the sibling to visit after it.
        let mut open: Vec<(Tag, Option<NodeId>)> = Vec::new();
        let mut cursor = Some(root);

        loop {
            let Some(id) = cursor else {
                match open.pop() {
                    Some((tag, after)) => {
                        let _ = write!(self.out, "</{}>", tag.name());
                        cursor = after;
                        continue;
                    }
                    None => break,
                }
            };

            // The root's own siblings are outside the rendered subtree.
            let after = if id == root {
                None
            } else {
                doc.next_sibling(id)
            };

            match doc.get(id) {
                Some(NodeData::Element(elem)) => {
                    self.write_start_tag(elem);
                    if elem.tag.is_void() {
                        cursor = after;
                    } else {
                        open.push((elem.tag, after));
                        cursor = doc.first_child(id);
                    }
                }
                Some(NodeData::Text(text)) => {
                    self.write_escaped(text, text_entity);
                    cursor = after;
                }
                None => cursor = after,
            }
        }
    }

    fn write_start_tag(&mut self, elem: &ElementData) {
        let _ = write!(self.out, "<{}", elem.tag.name());
        for attr in &elem.attrs {
            self.write_attr(attr);
        }
        let _ = self.out.write_char('>');
    }
}
