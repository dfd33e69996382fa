//! Tag-named constructors for element descriptors.
//!
//! ```rust
//! use ladle::{Document, attrs, children, html};
//!
//! let page = html::div(
//!     attrs! { class: "container" },
//!     children!["Hello, ", html::strong(attrs! {}, children!["world & <zig>"]), html::br(attrs! {}, children![])],
//! );
//!
//! let mut doc = Document::new();
//! let root = page.build(&mut doc)?;
//! assert_eq!(
//!     doc.render(root)?,
//!     r#"<div class="container">Hello, <strong>world &amp; &lt;zig&gt;</strong><br></div>"#
//! );
//! # Ok::<(), ladle::BuildError>(())
//! ```

use crate::attrs::AttrInput;
use crate::compose::{Child, ElementDescriptor};
use crate::tag::{Tag, for_each_tag};

macro_rules! define_constructors {
    ($($variant:ident $ctor:ident $name:literal $kind:ident;)*) => {
        $(
            #[doc = concat!("`<", $name, ">` element descriptor.")]
            pub fn $ctor<'a>(attrs: Vec<AttrInput<'a>>, children: Vec<Child<'a>>) -> ElementDescriptor<'a> {
                ElementDescriptor {
                    tag: Tag::$variant,
                    attrs,
                    children,
                }
            }
        )*
    };
}

for_each_tag!(define_constructors);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, children};

    #[test]
    fn test_constructors_carry_their_tag() {
        assert_eq!(div(attrs! {}, children![]).tag, Tag::Div);
        assert_eq!(option(attrs! {}, children![]).tag, Tag::OptionElement);
        assert_eq!(linear_gradient(attrs! {}, children![]).tag.name(), "linearGradient");
    }
}
