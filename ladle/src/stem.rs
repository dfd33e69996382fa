//! Text storage shared by descriptors and documents.

use compact_str::{CompactString, ToCompactString, format_compact};
use std::fmt;
use std::ops::Deref;

/// A string that is either borrowed from the caller or owned inline.
///
/// Descriptors hold whatever the caller passed, usually `Borrowed` literals
/// or props fields. A [`Document`](crate::Document) only stores
/// `Stem<'static>`, so every string crossing into it goes through
/// [`Stem::into_owned`] or [`Stem::copy_of`].
#[derive(Clone)]
pub enum Stem<'a> {
    Borrowed(&'a str),
    Owned(CompactString),
}

impl Stem<'static> {
    /// An owned copy of `text`.
    pub fn copy_of(text: &str) -> Stem<'static> {
        Stem::Owned(CompactString::new(text))
    }

    /// Format a value with `Display` into an owned stem.
    pub fn display(value: impl fmt::Display) -> Stem<'static> {
        Stem::Owned(format_compact!("{value}"))
    }
}

impl Stem<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Borrowed(text) => text,
            Self::Owned(text) => text.as_str(),
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    /// Detach from the source, reusing the buffer when already owned.
    pub fn into_owned(self) -> Stem<'static> {
        match self {
            Self::Borrowed(text) => Stem::copy_of(text),
            Self::Owned(text) => Stem::Owned(text),
        }
    }

    /// Like [`Stem::into_owned`], for stems that stay with a reusable descriptor.
    pub fn to_owned_stem(&self) -> Stem<'static> {
        Stem::copy_of(self.as_str())
    }
}

impl Deref for Stem<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Stem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Stem<'_> {}

impl PartialEq<str> for Stem<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Stem<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Stem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Stem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a str> for Stem<'a> {
    fn from(text: &'a str) -> Self {
        Self::Borrowed(text)
    }
}

impl<'a> From<&'a String> for Stem<'a> {
    fn from(text: &'a String) -> Self {
        Self::Borrowed(text)
    }
}

impl From<String> for Stem<'_> {
    fn from(text: String) -> Self {
        Self::Owned(text.into())
    }
}

impl From<CompactString> for Stem<'_> {
    fn from(text: CompactString) -> Self {
        Self::Owned(text)
    }
}

impl From<char> for Stem<'_> {
    fn from(c: char) -> Self {
        Self::Owned(c.to_compact_string())
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Stem<'static>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_owned_detaches_from_source() {
        let source = String::from("hello");
        let borrowed = Stem::from(&source);
        assert!(borrowed.is_borrowed());
        let owned = borrowed.into_owned();
        drop(source);
        assert_eq!(owned, "hello");
        assert!(!owned.is_borrowed());
    }

    #[test]
    fn test_equality_ignores_representation() {
        assert_eq!(Stem::from("abc"), Stem::from(String::from("abc")));
        assert_eq!(Stem::from('x'), "x");
        assert_eq!(Stem::display(-3), "-3");
        assert_eq!(Stem::display(1.0_f64), "1");
    }
}
