//! The closed set of tags ladle knows how to build and render.
//!
//! Every tag lives in one table ([`for_each_tag!`]). The table drives the
//! [`Tag`] enum, its name lookup, the void classification used by the
//! renderer, and the constructors in [`crate::html`]. Making a tag void is a
//! one-word change to its row; nothing at a call site needs to know.

use std::fmt;

/// Invokes `$callback!` with every row of the tag table.
///
/// Rows are `Variant constructor "name" kind;` where `kind` is `void` for
/// elements that never have children or an end tag, `normal` otherwise.
macro_rules! for_each_tag {
    ($callback:ident) => {
        $callback! {
            // Document and metadata
            Html html "html" normal;
            Head head "head" normal;
            Body body "body" normal;
            Title title "title" normal;
            Base base "base" void;
            Link link "link" void;
            Meta meta "meta" void;
            Style style "style" normal;
            Script script "script" normal;
            Noscript noscript "noscript" normal;
            Template template "template" normal;

            // Sections
            Header header "header" normal;
            Footer footer "footer" normal;
            Main main "main" normal;
            Article article "article" normal;
            Section section "section" normal;
            Nav nav "nav" normal;
            Aside aside "aside" normal;
            Address address "address" normal;
            Hgroup hgroup "hgroup" normal;
            H1 h1 "h1" normal;
            H2 h2 "h2" normal;
            H3 h3 "h3" normal;
            H4 h4 "h4" normal;
            H5 h5 "h5" normal;
            H6 h6 "h6" normal;

            // Grouping
            P p "p" normal;
            Div div "div" normal;
            Span span "span" normal;
            Pre pre "pre" normal;
            Blockquote blockquote "blockquote" normal;
            Ol ol "ol" normal;
            Ul ul "ul" normal;
            Li li "li" normal;
            Menu menu "menu" normal;
            Dl dl "dl" normal;
            Dt dt "dt" normal;
            Dd dd "dd" normal;
            Figure figure "figure" normal;
            Figcaption figcaption "figcaption" normal;
            Hr hr "hr" void;

            // Text-level
            A a "a" normal;
            Em em "em" normal;
            Strong strong "strong" normal;
            Small small "small" normal;
            S s "s" normal;
            Cite cite "cite" normal;
            Q q "q" normal;
            Dfn dfn "dfn" normal;
            Abbr abbr "abbr" normal;
            Ruby ruby "ruby" normal;
            Rt rt "rt" normal;
            Rp rp "rp" normal;
            Data data "data" normal;
            Time time "time" normal;
            Code code "code" normal;
            Var var "var" normal;
            Samp samp "samp" normal;
            Kbd kbd "kbd" normal;
            Sub sub "sub" normal;
            Sup sup "sup" normal;
            I i "i" normal;
            B b "b" normal;
            U u "u" normal;
            Mark mark "mark" normal;
            Bdi bdi "bdi" normal;
            Bdo bdo "bdo" normal;
            Br br "br" void;
            Wbr wbr "wbr" void;
            Ins ins "ins" normal;
            Del del "del" normal;

            // Embedded
            Img img "img" void;
            Iframe iframe "iframe" normal;
            Embed embed "embed" void;
            Object object "object" normal;
            Param param "param" void;
            Video video "video" normal;
            Audio audio "audio" normal;
            Source source "source" void;
            Track track "track" void;
            Picture picture "picture" normal;
            Canvas canvas "canvas" normal;
            Map map "map" normal;
            Area area "area" void;

            // Tables
            Table table "table" normal;
            Caption caption "caption" normal;
            Colgroup colgroup "colgroup" normal;
            Col col "col" void;
            Thead thead "thead" normal;
            Tbody tbody "tbody" normal;
            Tfoot tfoot "tfoot" normal;
            Tr tr "tr" normal;
            Th th "th" normal;
            Td td "td" normal;

            // Forms
            Form form "form" normal;
            Input input "input" void;
            Button button "button" normal;
            Select select "select" normal;
            Optgroup optgroup "optgroup" normal;
            OptionElement option "option" normal;
            Textarea textarea "textarea" normal;
            Label label "label" normal;
            Fieldset fieldset "fieldset" normal;
            Legend legend "legend" normal;
            Datalist datalist "datalist" normal;
            Output output "output" normal;
            Progress progress "progress" normal;
            Meter meter "meter" normal;

            // Interactive
            Details details "details" normal;
            Summary summary "summary" normal;
            Dialog dialog "dialog" normal;
            Slot slot "slot" normal;

            // SVG
            Svg svg "svg" normal;
            G g "g" normal;
            Defs defs "defs" normal;
            Symbol symbol "symbol" normal;
            Path path "path" normal;
            Circle circle "circle" normal;
            Ellipse ellipse "ellipse" normal;
            Line line "line" normal;
            Rect rect "rect" normal;
            Polygon polygon "polygon" normal;
            Polyline polyline "polyline" normal;
            LinearGradient linear_gradient "linearGradient" normal;
            Stop stop "stop" normal;
        }
    };
}

pub(crate) use for_each_tag;

macro_rules! define_tags {
    ($($variant:ident $ctor:ident $name:literal $kind:ident;)*) => {
        /// An element tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, facet::Facet)]
        #[repr(u8)]
        pub enum Tag {
            $(
                #[doc = concat!("`<", $name, ">`")]
                $variant,
            )*
        }

        impl Tag {
            /// Every tag, in table order.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant),*];

            /// The tag name as written in markup.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                }
            }

            /// Void elements never render children or an end tag.
            pub const fn is_void(self) -> bool {
                match self {
                    $(Tag::$variant => define_tags!(@void $kind),)*
                }
            }

            /// Look a tag up by its markup name (case-sensitive).
            pub fn from_name(name: &str) -> Option<Tag> {
                match name {
                    $($name => Some(Tag::$variant),)*
                    _ => None,
                }
            }
        }
    };
    (@void void) => { true };
    (@void normal) => { false };
}

for_each_tag!(define_tags);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_set() {
        let void: Vec<&str> = Tag::ALL
            .iter()
            .filter(|tag| tag.is_void())
            .map(|tag| tag.name())
            .collect();
        assert_eq!(
            void,
            [
                "base", "link", "meta", "hr", "br", "wbr", "img", "embed", "param", "source",
                "track", "area", "col", "input"
            ]
        );
    }

    #[test]
    fn test_from_name_roundtrip() {
        for &tag in Tag::ALL {
            assert_eq!(Tag::from_name(tag.name()), Some(tag));
        }
        assert_eq!(Tag::from_name("DIV"), None);
        assert_eq!(Tag::from_name("blink"), None);
    }

    #[test]
    fn test_display_uses_markup_name() {
        assert_eq!(Tag::OptionElement.to_string(), "option");
        assert_eq!(Tag::LinearGradient.to_string(), "linearGradient");
    }
}
