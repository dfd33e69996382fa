//! Arena-based document tree.
//!
//! A [`Document`] is the allocation context for one tree: it owns the
//! indextree arena, every node in it, and every string those nodes hold.
//! Nodes are addressed by stable [`NodeId`] handles. A child stores its
//! parent's handle rather than an address, so growing a sibling list never
//! invalidates anything.
//!
//! Handles carry the id of the document that issued them. Every other
//! document treats them as stale. A cloned document keeps its id, so it
//! accepts the handles of the document it was cloned from.

use std::sync::atomic::{AtomicU64, Ordering};

use facet::Facet;
use indextree::{Arena, NodeError};
use smallvec::SmallVec;

use crate::tracing_macros::{debug, trace};
use crate::{Stem, Tag};

/// Errors that can occur while building a document.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum BuildError {
    /// node is not part of this document (destroyed, or issued by another document)
    StaleNode,

    /// text nodes cannot hold attributes or children
    NotAnElement,

    /// node already has a parent
    AlreadyAttached,

    /// cannot append a node to itself or to one of its descendants
    Cycle,

    /// document node limit of {limit} exceeded
    NodeLimitExceeded { limit: usize },

    /// component build failed: {reason}
    ComponentFailed { reason: String },
}

impl BuildError {
    /// Convenience for component build functions reporting their own failure.
    pub fn component(reason: impl Into<String>) -> Self {
        BuildError::ComponentFailed {
            reason: reason.into(),
        }
    }
}

impl From<NodeError> for BuildError {
    fn from(err: NodeError) -> Self {
        match err {
            NodeError::Removed => BuildError::StaleNode,
            _ => BuildError::Cycle,
        }
    }
}

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node of one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    doc: u64,
    slot: indextree::NodeId,
}

/// A normalized attribute. `value: None` is a boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Stem<'static>,
    pub value: Option<Stem<'static>>,
}

/// Element data (tag + attributes). Children live in the arena.
#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag: Tag,

    /// Render order; duplicates allowed.
    pub attrs: SmallVec<[Attribute; 4]>,
}

/// What goes in each arena slot.
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(Stem<'static>),
}

/// Options for a new [`Document`].
#[derive(Clone, Debug, Default)]
pub struct DocumentOptions {
    /// Arena slots to reserve up front.
    pub capacity: usize,
    /// Maximum number of live nodes. `None` means unbounded.
    pub node_limit: Option<usize>,
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` nodes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Refuse to hold more than `limit` live nodes at once.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

/// The allocation context for one tree.
#[derive(Debug, Clone)]
pub struct Document {
    id: u64,
    arena: Arena<NodeData>,
    live: usize,
    node_limit: Option<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    pub fn with_options(options: DocumentOptions) -> Self {
        Self {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::with_capacity(options.capacity),
            live: 0,
            node_limit: options.node_limit,
        }
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live
    }

    fn handle(&self, slot: indextree::NodeId) -> NodeId {
        NodeId { doc: self.id, slot }
    }

    /// Arena slot behind `id`, if it was issued here and is still live.
    fn slot(&self, id: NodeId) -> Option<indextree::NodeId> {
        let live = id.doc == self.id
            && self.arena.get(id.slot).is_some()
            && !id.slot.is_removed(&self.arena);
        live.then_some(id.slot)
    }

    /// Whether `id` is a live node of this document.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Get node data, or `None` for destroyed and foreign handles.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.slot(id).map(|slot| self.arena[slot].get())
    }

    /// Parent of a node, `None` for roots and stale handles.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.arena[self.slot(id)?].parent()?;
        Some(self.handle(parent))
    }

    /// Iterate children of a node in order (empty for stale handles).
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.slot(id)
            .into_iter()
            .flat_map(move |slot| slot.children(&self.arena))
            .map(move |child| self.handle(child))
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        let child = self.arena[self.slot(id)?].first_child()?;
        Some(self.handle(child))
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let sibling = self.arena[self.slot(id)?].next_sibling()?;
        Some(self.handle(sibling))
    }

    /// Tag of an element node.
    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        match self.get(id)? {
            NodeData::Element(elem) => Some(elem.tag),
            NodeData::Text(_) => None,
        }
    }

    /// Attributes of an element node (empty for text and destroyed handles).
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match self.get(id) {
            Some(NodeData::Element(elem)) => &elem.attrs,
            _ => &[],
        }
    }

    /// Content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            NodeData::Text(text) => Some(text.as_str()),
            NodeData::Element(_) => None,
        }
    }

    fn alloc(&mut self, data: NodeData) -> Result<NodeId, BuildError> {
        if let Some(limit) = self.node_limit
            && self.live >= limit
        {
            debug!(limit, "node limit reached");
            return Err(BuildError::NodeLimitExceeded { limit });
        }
        self.live += 1;
        let slot = self.arena.new_node(data);
        Ok(self.handle(slot))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, BuildError> {
        let slot = self.slot(id).ok_or(BuildError::StaleNode)?;
        match self.arena[slot].get_mut() {
            NodeData::Element(elem) => Ok(elem),
            NodeData::Text(_) => Err(BuildError::NotAnElement),
        }
    }

    fn ensure_element(&self, id: NodeId) -> Result<(), BuildError> {
        match self.get(id) {
            Some(NodeData::Element(_)) => Ok(()),
            Some(NodeData::Text(_)) => Err(BuildError::NotAnElement),
            None => Err(BuildError::StaleNode),
        }
    }

    /// Create a parentless element.
    pub fn create_element(&mut self, tag: Tag) -> Result<NodeId, BuildError> {
        trace!(%tag, "create element");
        self.alloc(NodeData::Element(ElementData {
            tag,
            attrs: SmallVec::new(),
        }))
    }

    /// Create an element as the last child of `parent`.
    pub fn create_child_element(&mut self, parent: NodeId, tag: Tag) -> Result<NodeId, BuildError> {
        self.ensure_element(parent)?;
        let id = self.create_element(tag)?;
        parent.slot.checked_append(id.slot, &mut self.arena)?;
        Ok(id)
    }

    /// Create a parentless text node. The text is copied into the document.
    pub fn create_text(&mut self, text: &str) -> Result<NodeId, BuildError> {
        trace!(len = text.len(), "create text");
        self.alloc(NodeData::Text(Stem::copy_of(text)))
    }

    /// Create a text node as the last child of `parent`.
    pub fn create_child_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, BuildError> {
        self.ensure_element(parent)?;
        let id = self.create_text(text)?;
        parent.slot.checked_append(id.slot, &mut self.arena)?;
        Ok(id)
    }

    /// Append one attribute. Key and value are copied; nothing is
    /// de-duplicated or escaped.
    pub fn add_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), BuildError> {
        self.push_attribute(
            id,
            Attribute {
                name: Stem::copy_of(name),
                value: value.map(Stem::copy_of),
            },
        )
    }

    /// Append an already-owned attribute.
    pub fn push_attribute(&mut self, id: NodeId, attr: Attribute) -> Result<(), BuildError> {
        self.element_mut(id)?.attrs.push(attr);
        Ok(())
    }

    /// Append several attributes in order.
    pub fn extend_attributes(
        &mut self,
        id: NodeId,
        attrs: impl IntoIterator<Item = Attribute>,
    ) -> Result<(), BuildError> {
        self.element_mut(id)?.attrs.extend(attrs);
        Ok(())
    }

    /// Attach a parentless node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), BuildError> {
        self.ensure_element(parent)?;
        let child = self.slot(child).ok_or(BuildError::StaleNode)?;
        if self.arena[child].parent().is_some() {
            return Err(BuildError::AlreadyAttached);
        }
        // `ancestors` starts at `parent` itself.
        if parent.slot.ancestors(&self.arena).any(|ancestor| ancestor == child) {
            return Err(BuildError::Cycle);
        }
        parent.slot.checked_append(child, &mut self.arena)?;
        Ok(())
    }

    /// Free a node and its whole subtree, descendants first.
    ///
    /// The node is detached from its parent. Destroying a handle that is
    /// already gone does nothing.
    pub fn destroy(&mut self, id: NodeId) {
        let Some(slot) = self.slot(id) else {
            trace!("destroy: node already gone");
            return;
        };

        // Pre-order, so walking it backwards frees every child before its parent.
        let subtree: Vec<indextree::NodeId> = slot.descendants(&self.arena).collect();
        slot.detach(&mut self.arena);
        for &node in subtree.iter().rev() {
            node.remove(&mut self.arena);
        }
        self.live -= subtree.len();
        debug!(freed = subtree.len(), live = self.live, "destroyed subtree");
    }
}
