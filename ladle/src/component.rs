//! Reusable components and the two ways to invoke them.
//!
//! A component is a named build function `(document, props) -> root`. The
//! root it returns must be parentless; the compositor attaches it where the
//! invocation appears.
//!
//! ```rust
//! use ladle::{BuildError, Component, Document, NodeId, attrs, children, html, repeat};
//!
//! fn item(doc: &mut Document, name: &&str) -> Result<NodeId, BuildError> {
//!     html::li(attrs! {}, children![*name]).build(doc)
//! }
//!
//! const ITEM: Component<&str> = Component::new("item", item);
//!
//! let mut doc = Document::new();
//! let list = html::ul(attrs! {}, children![repeat(ITEM, ["a", "b"])]).build(&mut doc)?;
//! assert_eq!(doc.render(list)?, "<ul><li>a</li><li>b</li></ul>");
//! # Ok::<(), BuildError>(())
//! ```

use std::fmt;

use crate::compose::{Child, Materialized};
use crate::dom::{BuildError, Document, NodeId};
use crate::tracing_macros::debug;

/// Signature of a component's build function.
pub type BuildFn<P> = fn(&mut Document, &P) -> Result<NodeId, BuildError>;

/// A named, reusable build function.
pub struct Component<P> {
    name: &'static str,
    build: BuildFn<P>,
}

impl<P> Clone for Component<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Component<P> {}

impl<P> fmt::Debug for Component<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}

impl<P> Component<P> {
    pub const fn new(name: &'static str, build: BuildFn<P>) -> Self {
        Self { name, build }
    }

    /// Diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the build function once. The result is not attached anywhere.
    pub fn build(&self, doc: &mut Document, props: &P) -> Result<NodeId, BuildError> {
        debug!(component = self.name, "building component");
        (self.build)(doc, props).inspect_err(|_err| {
            debug!(component = self.name, error = %_err, "component failed");
        })
    }

    /// Build and attach as the last child of `parent`.
    fn build_into(
        &self,
        doc: &mut Document,
        parent: NodeId,
        props: &P,
    ) -> Result<NodeId, BuildError> {
        let root = self.build(doc, props)?;
        doc.append_child(parent, root)?;
        Ok(root)
    }
}

/// Object-safe view of an invocation, so `Child` can hold any props type.
trait Invoke {
    fn component_name(&self) -> &'static str;
    fn len(&self) -> usize;
    fn invoke(
        &self,
        doc: &mut Document,
        parent: NodeId,
        out: &mut Materialized,
    ) -> Result<(), BuildError>;
}

struct Single<P> {
    component: Component<P>,
    props: P,
}

impl<P> Invoke for Single<P> {
    fn component_name(&self) -> &'static str {
        self.component.name
    }

    fn len(&self) -> usize {
        1
    }

    fn invoke(
        &self,
        doc: &mut Document,
        parent: NodeId,
        out: &mut Materialized,
    ) -> Result<(), BuildError> {
        out.push(self.component.build_into(doc, parent, &self.props)?);
        Ok(())
    }
}

struct Repeated<P> {
    component: Component<P>,
    props: Vec<P>,
}

impl<P> Invoke for Repeated<P> {
    fn component_name(&self) -> &'static str {
        self.component.name
    }

    fn len(&self) -> usize {
        self.props.len()
    }

    fn invoke(
        &self,
        doc: &mut Document,
        parent: NodeId,
        out: &mut Materialized,
    ) -> Result<(), BuildError> {
        out.reserve(self.props.len());
        for props in &self.props {
            out.push(self.component.build_into(doc, parent, props)?);
        }
        Ok(())
    }
}

/// A component bound to its props, waiting to be materialized.
pub struct Invocation<'a> {
    inner: Box<dyn Invoke + 'a>,
}

impl Invocation<'_> {
    /// Name of the invoked component.
    pub fn component_name(&self) -> &'static str {
        self.inner.component_name()
    }

    /// How many children this invocation expands to.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn invoke(
        &self,
        doc: &mut Document,
        parent: NodeId,
        out: &mut Materialized,
    ) -> Result<(), BuildError> {
        self.inner.invoke(doc, parent, out)
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("component", &self.component_name())
            .field("len", &self.len())
            .finish()
    }
}

/// Invoke `component` once with `props`.
pub fn use_component<'a, P: 'a>(component: Component<P>, props: P) -> Child<'a> {
    Child::Use(Invocation {
        inner: Box::new(Single { component, props }),
    })
}

/// Invoke `component` once per item of `props`, in order, producing
/// consecutive siblings.
pub fn repeat<'a, P: 'a>(
    component: Component<P>,
    props: impl IntoIterator<Item = P>,
) -> Child<'a> {
    Child::Repeat(Invocation {
        inner: Box::new(Repeated {
            component,
            props: props.into_iter().collect(),
        }),
    })
}
