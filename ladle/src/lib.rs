//! Server-side HTML templating on an arena DOM.
//!
//! ladle provides:
//! - **Descriptors**: context-free element, text and component values ([`Child`], [`ElementDescriptor`])
//! - **Attributes**: loosely typed inputs normalized into markup attributes ([`attrs!`])
//! - **Components**: named build functions, invoked once ([`use_component`]) or per item ([`repeat`])
//! - **Document**: an indextree arena that owns every node and string of one tree
//! - **Rendering**: escaped markup with void-element handling
//!
//! # Example
//!
//! ```rust
//! use ladle::{BuildError, Component, Document, NodeId, attrs, children, html, repeat, use_component};
//!
//! struct Link<'a> {
//!     href: &'a str,
//!     label: &'a str,
//! }
//!
//! fn nav_link(doc: &mut Document, link: &Link<'_>) -> Result<NodeId, BuildError> {
//!     html::a(attrs! { href: link.href }, children![link.label]).build(doc)
//! }
//!
//! fn heading(doc: &mut Document, title: &&str) -> Result<NodeId, BuildError> {
//!     html::h1(attrs! {}, children![*title]).build(doc)
//! }
//!
//! let links = [
//!     Link { href: "/", label: "Home" },
//!     Link { href: "/about", label: "About" },
//! ];
//!
//! let page = html::nav(
//!     attrs! { aria_label: "main" },
//!     children![
//!         use_component(Component::new("heading", heading), "Site"),
//!         repeat(Component::new("nav_link", nav_link), links),
//!     ],
//! );
//!
//! let mut doc = Document::new();
//! let root = page.build(&mut doc)?;
//! assert_eq!(
//!     doc.render(root)?,
//!     r#"<nav aria-label="main"><h1>Site</h1><a href="/">Home</a><a href="/about">About</a></nav>"#
//! );
//!
//! doc.destroy(root);
//! assert_eq!(doc.node_count(), 0);
//! # Ok::<(), BuildError>(())
//! ```

mod tracing_macros;

pub mod attrs;
pub mod component;
pub mod compose;
pub mod dom;
pub mod html;
pub mod serialize;
mod stem;
pub mod tag;

pub use attrs::{AttrInput, AttrValue, build_attributes, normalize_key};
pub use component::{BuildFn, Component, Invocation, repeat, use_component};
pub use compose::{Child, ElementDescriptor, Materialized, append_children, create_root_element};
pub use dom::{Attribute, BuildError, Document, DocumentOptions, ElementData, NodeData, NodeId};
pub use serialize::render_to_text;
pub use stem::Stem;
pub use tag::Tag;
