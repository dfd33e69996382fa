//! End-to-end rendering tests: descriptors in, markup out.

use facet_testhelpers::test;
use ladle::{Document, ElementDescriptor, Tag, attrs, children, html};

fn render(desc: &ElementDescriptor<'_>) -> String {
    let mut doc = Document::new();
    let root = desc.build(&mut doc).unwrap();
    doc.render(root).unwrap()
}

#[test]
fn test_greeting_with_strong_and_break() {
    let page = html::div(
        attrs! { class: "container" },
        children![
            "Hello, ",
            html::strong(attrs! {}, children!["world & <zig>"]),
            html::br(attrs! {}, children![]),
        ],
    );
    assert_eq!(
        render(&page),
        r#"<div class="container">Hello, <strong>world &amp; &lt;zig&gt;</strong><br></div>"#
    );
}

#[test]
fn test_typed_attribute_values() {
    let page = html::div(
        attrs! {},
        children![
            html::img(
                attrs! { src: "/x.png", width: 10, height: 20, draggable: true },
                children![]
            ),
            html::input(
                attrs! { r#type: "checkbox", checked: true, disabled: false },
                children![]
            ),
        ],
    );
    assert_eq!(
        render(&page),
        r#"<div><img src="/x.png" width="10" height="20" draggable><input type="checkbox" checked></div>"#
    );
}

#[test]
fn test_underscored_names_become_hyphenated() {
    let icon = html::svg(
        attrs! { view_box: "0 0 10 10" },
        children![html::circle(
            attrs! { cx: 5, cy: 5, r: 4.5, stroke_width: 2, fill: "none" },
            children![]
        )],
    );
    assert_eq!(
        render(&icon),
        r#"<svg view-box="0 0 10 10"><circle cx="5" cy="5" r="4.5" stroke-width="2" fill="none"></circle></svg>"#
    );
}

#[test]
fn test_nesting_renders_in_construction_order() {
    let table = html::table(
        attrs! {},
        children![
            html::thead(
                attrs! {},
                children![html::tr(
                    attrs! {},
                    children![
                        html::th(attrs! {}, children!["Name"]),
                        html::th(attrs! {}, children!["Qty"]),
                    ]
                )]
            ),
            html::tbody(
                attrs! {},
                children![html::tr(
                    attrs! {},
                    children![
                        html::td(attrs! {}, children!["Pears"]),
                        html::td(attrs! {}, children!["3"]),
                    ]
                )]
            ),
        ],
    );
    assert_eq!(
        render(&table),
        "<table><thead><tr><th>Name</th><th>Qty</th></tr></thead>\
         <tbody><tr><td>Pears</td><td>3</td></tr></tbody></table>"
    );
}

#[test]
fn test_text_escaping_touches_only_markup_characters() {
    let text = "a&b<c>d\"e'f é ✓";
    let page = html::p(attrs! {}, children![text]);
    assert_eq!(
        render(&page),
        "<p>a&amp;b&lt;c&gt;d\"e'f é ✓</p>"
    );
}

#[test]
fn test_attribute_escaping_covers_quotes() {
    let page = html::a(attrs! { title: "a&b<c>d\"e'f" }, children![]);
    assert_eq!(
        render(&page),
        r#"<a title="a&amp;b&lt;c&gt;d&quot;e&#39;f"></a>"#
    );
}

#[test]
fn test_every_void_tag_skips_children_and_end_tag() {
    for &tag in Tag::ALL.iter().filter(|tag| tag.is_void()) {
        let desc = ElementDescriptor::new(tag).child("ignored");
        let expected = format!("<{}>", tag.name());
        assert_eq!(render(&desc), expected);
    }
}

#[test]
fn test_duplicate_attributes_are_all_emitted() {
    let page = html::span(attrs! { class: "a", class: "b" }, children![]);
    assert_eq!(render(&page), r#"<span class="a" class="b"></span>"#);
}

#[test]
fn test_boolean_attributes() {
    let page = html::button(
        attrs! { disabled: true, hidden: false, autofocus: true },
        children!["Go"],
    );
    assert_eq!(render(&page), "<button disabled autofocus>Go</button>");
}

#[test]
fn test_rendering_does_not_modify_document() {
    let mut doc = Document::new();
    let root = html::ul(
        attrs! {},
        children![html::li(attrs! {}, children!["one"])],
    )
    .build(&mut doc)
    .unwrap();

    let first = doc.render(root).unwrap();
    let second = doc.render(root).unwrap();
    assert_eq!(first, second);
    assert_eq!(doc.node_count(), 3);
}

#[test]
fn test_prebuilt_nodes_render_in_place() {
    let mut doc = Document::new();
    let badge = doc.create_element(Tag::Span).unwrap();
    doc.add_attribute(badge, "class", Some("badge")).unwrap();
    doc.create_child_text(badge, "new").unwrap();

    let root = html::h2(attrs! {}, children!["Inbox ", badge])
        .build(&mut doc)
        .unwrap();
    assert_eq!(
        doc.render(root).unwrap(),
        r#"<h2>Inbox <span class="badge">new</span></h2>"#
    );
}

/// Small deterministic generator for tree shapes.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

const GENERATED_TAGS: [Tag; 8] = [
    Tag::Div,
    Tag::Span,
    Tag::Ul,
    Tag::Li,
    Tag::Section,
    Tag::Em,
    Tag::Br,
    Tag::Img,
];

const GENERATED_TEXT: [(&str, &str); 4] = [
    ("plain", "plain"),
    ("a&b", "a&amp;b"),
    ("<x>", "&lt;x&gt;"),
    ("\"q\" 'q'", "\"q\" 'q'"),
];

/// Generate a random element and, alongside it, the markup it must render to
/// and the number of nodes it materializes.
fn generate(
    rng: &mut Lcg,
    depth: u32,
    expected: &mut String,
    nodes: &mut usize,
) -> ElementDescriptor<'static> {
    let tag = GENERATED_TAGS[rng.below(GENERATED_TAGS.len() as u64) as usize];
    let n = rng.below(1000);
    let mut desc = ElementDescriptor::new(tag).attr("data_n", n);
    *nodes += 1;
    expected.push_str(&format!("<{} data-n=\"{n}\">", tag.name()));
    if tag.is_void() {
        return desc;
    }

    let child_count = if depth == 0 { 0 } else { rng.below(4) };
    for _ in 0..child_count {
        if rng.below(3) == 0 {
            let (raw, escaped) = GENERATED_TEXT[rng.below(GENERATED_TEXT.len() as u64) as usize];
            desc = desc.child(raw);
            expected.push_str(escaped);
            *nodes += 1;
        } else {
            desc = desc.child(generate(rng, depth - 1, expected, nodes));
        }
    }
    expected.push_str(&format!("</{}>", tag.name()));
    desc
}

#[test]
fn test_generated_trees_render_in_construction_order() {
    for seed in 0..64 {
        let mut rng = Lcg(seed);
        let mut expected = String::new();
        let mut nodes = 0;
        let desc = generate(&mut rng, 5, &mut expected, &mut nodes);

        let mut doc = Document::new();
        let root = desc.build(&mut doc).unwrap();
        assert_eq!(doc.node_count(), nodes, "seed {seed}");
        assert_eq!(doc.render(root).unwrap(), expected, "seed {seed}");
    }
}
