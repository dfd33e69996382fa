//! Attribute inputs and the policy that turns them into element attributes.
//!
//! Inputs are written with identifier-style names and loosely typed values:
//!
//! ```rust
//! use ladle::{attrs, build_attributes};
//!
//! let inputs = attrs! { stroke_width: 2, r#type: "checkbox", checked: true, disabled: false };
//! let built = build_attributes(&inputs);
//! let names: Vec<&str> = built.iter().map(|attr| attr.name.as_str()).collect();
//! assert_eq!(names, ["stroke-width", "type", "checked"]);
//! ```

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::Stem;
use crate::dom::Attribute;

/// A build-time attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue<'a> {
    /// `true` renders a bare attribute, `false` drops it.
    Bool(bool),
    Text(Stem<'a>),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept apart from `Float` so it formats with `f32` precision.
    Float32(f32),
    /// Anything without a markup representation. Ignored when building.
    Unsupported,
}

impl<'a> AttrValue<'a> {
    /// The value as it will be stored on the element.
    ///
    /// `None` means "no attribute at all"; `Some(None)` is a boolean attribute.
    fn resolve(&self) -> Option<Option<Stem<'static>>> {
        match self {
            AttrValue::Bool(true) => Some(None),
            AttrValue::Bool(false) | AttrValue::Unsupported => None,
            AttrValue::Text(text) => Some(Some(text.to_owned_stem())),
            AttrValue::Int(n) => Some(Some(Stem::display(n))),
            AttrValue::UInt(n) => Some(Some(Stem::display(n))),
            AttrValue::Float(n) => Some(Some(Stem::display(n))),
            AttrValue::Float32(n) => Some(Some(Stem::display(n))),
        }
    }
}

impl From<bool> for AttrValue<'_> {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl<'a> From<&'a str> for AttrValue<'a> {
    fn from(value: &'a str) -> Self {
        AttrValue::Text(Stem::Borrowed(value))
    }
}

impl<'a> From<&'a String> for AttrValue<'a> {
    fn from(value: &'a String) -> Self {
        AttrValue::Text(Stem::Borrowed(value.as_str()))
    }
}

impl From<String> for AttrValue<'_> {
    fn from(value: String) -> Self {
        AttrValue::Text(Stem::from(value))
    }
}

impl<'a> From<Stem<'a>> for AttrValue<'a> {
    fn from(value: Stem<'a>) -> Self {
        AttrValue::Text(value)
    }
}

impl From<char> for AttrValue<'_> {
    fn from(value: char) -> Self {
        AttrValue::Text(Stem::from(value))
    }
}

impl From<()> for AttrValue<'_> {
    fn from((): ()) -> Self {
        AttrValue::Unsupported
    }
}

impl<'a, T: Into<AttrValue<'a>>> From<Option<T>> for AttrValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Unsupported, Into::into)
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue<'_> {
                fn from(value: $ty) -> Self {
                    AttrValue::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64);
impl_from_number!(UInt as u64: u8, u16, u32, u64);
impl_from_number!(Float as f64: f64);
impl_from_number!(Float32 as f32: f32);

impl From<isize> for AttrValue<'_> {
    fn from(value: isize) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<usize> for AttrValue<'_> {
    fn from(value: usize) -> Self {
        AttrValue::UInt(value as u64)
    }
}

/// One declared attribute: a name as written by the caller and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrInput<'a> {
    pub name: Stem<'a>,
    pub value: AttrValue<'a>,
}

impl<'a> AttrInput<'a> {
    pub fn new(name: impl Into<Stem<'a>>, value: impl Into<AttrValue<'a>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rewrite a declared name into a markup attribute name.
///
/// Underscores become hyphens and a raw-identifier `r#` prefix is dropped, so
/// `stroke_width` gives `stroke-width` and `r#type` gives `type`. Nothing
/// else is checked or escaped.
pub fn normalize_key(name: &str) -> CompactString {
    let name = name.strip_prefix("r#").unwrap_or(name);
    name.chars()
        .map(|c| if c == '_' { '-' } else { c })
        .collect()
}

/// Apply the attribute policy to a list of inputs, keeping their order.
///
/// Duplicate names are all kept.
pub fn build_attributes(inputs: &[AttrInput<'_>]) -> SmallVec<[Attribute; 4]> {
    inputs
        .iter()
        .filter_map(|input| {
            let value = input.value.resolve()?;
            Some(Attribute {
                name: Stem::Owned(normalize_key(&input.name)),
                value,
            })
        })
        .collect()
}

/// Build a `Vec<AttrInput>` from `name: value` pairs.
///
/// Names are identifiers (raw identifiers allowed) or string literals.
///
/// ```rust
/// let inputs = ladle::attrs! { class: "card", data_id: 7, "aria-hidden": true };
/// assert_eq!(inputs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
    ($($key:tt : $value:expr),* $(,)?) => {{
        let inputs: ::std::vec::Vec<$crate::AttrInput<'_>> =
            ::std::vec![$($crate::AttrInput::new($crate::__attr_name!($key), $value)),*];
        inputs
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_name {
    ($key:ident) => {
        ::core::stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}
