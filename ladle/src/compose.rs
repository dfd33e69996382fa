//! Descriptors and the compositor that materializes them into a document.
//!
//! Descriptors ([`Child`], [`ElementDescriptor`]) are plain values with no
//! document attached. They only turn into nodes when materialized under a
//! concrete parent, so the same descriptor can be built once and used in any
//! number of places.

use smallvec::SmallVec;

use crate::attrs::{AttrInput, AttrValue, build_attributes};
use crate::component::Invocation;
use crate::dom::{BuildError, Document, NodeId};
use crate::tracing_macros::trace;
use crate::{Stem, Tag};

/// Nodes attached by one materialization, in order.
pub type Materialized = SmallVec<[NodeId; 1]>;

/// One entry of a child list.
#[derive(Debug)]
pub enum Child<'a> {
    /// Text, stored verbatim. Escaping happens at render time.
    Text(Stem<'a>),
    /// A node that was already built in the target document.
    Node(NodeId),
    Element(ElementDescriptor<'a>),
    /// One component call.
    Use(Invocation<'a>),
    /// One component call per props item.
    Repeat(Invocation<'a>),
    /// Nothing to materialize.
    Skip,
}

impl<'a> Child<'a> {
    pub fn text(text: impl Into<Stem<'a>>) -> Self {
        Child::Text(text.into())
    }

    /// Materialize under `parent`, returning the nodes attached to it.
    pub fn materialize(
        &self,
        doc: &mut Document,
        parent: NodeId,
    ) -> Result<Materialized, BuildError> {
        let mut out = Materialized::new();
        self.materialize_into(doc, parent, &mut out)?;
        Ok(out)
    }

    fn materialize_into(
        &self,
        doc: &mut Document,
        parent: NodeId,
        out: &mut Materialized,
    ) -> Result<(), BuildError> {
        match self {
            Child::Text(text) => {
                out.push(doc.create_child_text(parent, text)?);
            }
            Child::Node(node) => {
                doc.append_child(parent, *node)?;
                out.push(*node);
            }
            Child::Element(elem) => {
                out.push(elem.materialize_under(doc, parent)?);
            }
            Child::Use(invocation) | Child::Repeat(invocation) => {
                trace!(
                    component = invocation.component_name(),
                    count = invocation.len(),
                    "invoking component"
                );
                invocation.invoke(doc, parent, out)?;
            }
            Child::Skip => {}
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for Child<'a> {
    fn from(text: &'a str) -> Self {
        Child::Text(Stem::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Child<'a> {
    fn from(text: &'a String) -> Self {
        Child::Text(Stem::Borrowed(text.as_str()))
    }
}

impl From<String> for Child<'_> {
    fn from(text: String) -> Self {
        Child::Text(Stem::from(text))
    }
}

impl<'a> From<Stem<'a>> for Child<'a> {
    fn from(text: Stem<'a>) -> Self {
        Child::Text(text)
    }
}

impl From<NodeId> for Child<'_> {
    fn from(node: NodeId) -> Self {
        Child::Node(node)
    }
}

impl<'a> From<ElementDescriptor<'a>> for Child<'a> {
    fn from(elem: ElementDescriptor<'a>) -> Self {
        Child::Element(elem)
    }
}

impl From<()> for Child<'_> {
    fn from((): ()) -> Self {
        Child::Skip
    }
}

impl<'a, T: Into<Child<'a>>> From<Option<T>> for Child<'a> {
    fn from(child: Option<T>) -> Self {
        child.map_or(Child::Skip, Into::into)
    }
}

/// An element waiting to be materialized: tag, attribute inputs, children.
#[derive(Debug)]
pub struct ElementDescriptor<'a> {
    pub tag: Tag,
    pub attrs: Vec<AttrInput<'a>>,
    pub children: Vec<Child<'a>>,
}

impl<'a> ElementDescriptor<'a> {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one attribute input.
    pub fn attr(mut self, name: impl Into<Stem<'a>>, value: impl Into<AttrValue<'a>>) -> Self {
        self.attrs.push(AttrInput::new(name, value));
        self
    }

    /// Add one child.
    pub fn child(mut self, child: impl Into<Child<'a>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Child<'a>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Materialize as a parentless root.
    ///
    /// On failure the half-built root is destroyed, along with anything
    /// already attached to it, since the caller never gets its handle.
    pub fn build(&self, doc: &mut Document) -> Result<NodeId, BuildError> {
        build_root(doc, self.tag, &self.attrs, &self.children)
    }

    /// Materialize as the last child of `parent`.
    pub fn materialize_under(
        &self,
        doc: &mut Document,
        parent: NodeId,
    ) -> Result<NodeId, BuildError> {
        let node = doc.create_child_element(parent, self.tag)?;
        self.populate(doc, node)?;
        Ok(node)
    }

    fn populate(&self, doc: &mut Document, node: NodeId) -> Result<(), BuildError> {
        doc.extend_attributes(node, build_attributes(&self.attrs))?;
        append_children(doc, node, &self.children)?;
        Ok(())
    }
}

/// Materialize `children` under `parent`, strictly in order.
pub fn append_children(
    doc: &mut Document,
    parent: NodeId,
    children: &[Child<'_>],
) -> Result<Materialized, BuildError> {
    let mut out = Materialized::new();
    for child in children {
        child.materialize_into(doc, parent, &mut out)?;
    }
    Ok(out)
}

/// Create a root element with attributes and children in one call.
///
/// Same failure behavior as [`ElementDescriptor::build`].
pub fn create_root_element(
    doc: &mut Document,
    tag: Tag,
    attrs: &[AttrInput<'_>],
    children: &[Child<'_>],
) -> Result<NodeId, BuildError> {
    build_root(doc, tag, attrs, children)
}

fn build_root(
    doc: &mut Document,
    tag: Tag,
    attrs: &[AttrInput<'_>],
    children: &[Child<'_>],
) -> Result<NodeId, BuildError> {
    let node = doc.create_element(tag)?;
    let populated = doc
        .extend_attributes(node, build_attributes(attrs))
        .and_then(|()| append_children(doc, node, children));
    match populated {
        Ok(_) => Ok(node),
        Err(err) => {
            doc.destroy(node);
            Err(err)
        }
    }
}

/// Build a `Vec<Child>` from anything convertible into a [`Child`].
///
/// ```rust
/// use ladle::{children, html, attrs};
///
/// let kids = children!["Hello, ", html::strong(attrs! {}, children!["world"]), ()];
/// assert_eq!(kids.len(), 3);
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::Child<'_>> =
            ::std::vec![$($crate::Child::from($child)),*];
        children
    }};
}
