use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use tuidom::{descendants, path_to, Document, Element, Event, EventKind, MouseButton};

fn header_row() -> Element {
    Element::row().id("root").child(
        Element::row()
            .id("thead")
            .child(Element::text("Name").id("name").class("sortable"))
            .child(
                Element::row()
                    .id("age")
                    .class("sortable")
                    .attr("fieldname", "age")
                    .child(Element::text("Age").id("age-label")),
            ),
    )
}

// ============================================================================
// Element Tree
// ============================================================================

#[test]
fn test_classes_are_deduplicated() {
    let mut el = Element::text("x").class("sortable").class("sortable");
    assert_eq!(el.classes, vec!["sortable".to_string()]);

    assert!(el.add_class("ascending"));
    assert!(!el.add_class("ascending"));
    assert!(el.has_class("ascending"));

    assert!(el.remove_class("ascending"));
    assert!(!el.remove_class("ascending"));
    assert!(!el.has_class("ascending"));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::row()
        .child(Element::text("Created "))
        .child(Element::row().child(Element::text("At")));
    assert_eq!(el.text_content(), "Created At");
    assert_eq!(Element::box_().text_content(), "");
}

#[test]
fn test_attributes() {
    let el = Element::text("Age").attr("fieldname", "age");
    assert_eq!(el.get_attr("fieldname"), Some("age"));
    assert_eq!(el.get_attr("missing"), None);
}

#[test]
fn test_path_to() {
    let root = header_row();
    let ids: Vec<&str> = path_to(&root, "age-label")
        .unwrap()
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["root", "thead", "age", "age-label"]);

    assert!(path_to(&root, "nope").is_none());
}

#[test]
fn test_descendants_document_order() {
    let root = header_row();
    let ids: Vec<&str> = descendants(&root).into_iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["thead", "name", "age", "age-label"]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_bubbles_to_ancestors() {
    let mut doc = Document::new(header_row());
    let seen = Rc::new(RefCell::new(Vec::new()));

    for id in ["thead", "root"] {
        let seen = Rc::clone(&seen);
        doc.add_listener(id, EventKind::Release, move |cx| {
            seen.borrow_mut()
                .push((cx.current_target().to_string(), cx.target().id.clone()));
        });
    }

    let outcome = doc.dispatch(&Event::release("age-label"));
    assert_eq!(outcome.invoked, 2);
    assert!(!outcome.default_prevented);
    assert_eq!(
        *seen.borrow(),
        vec![
            ("thead".to_string(), "age-label".to_string()),
            ("root".to_string(), "age-label".to_string()),
        ]
    );
}

#[test]
fn test_stop_propagation_skips_ancestors() {
    let mut doc = Document::new(header_row());
    let root_hits = Rc::new(RefCell::new(0));

    doc.add_listener("thead", EventKind::Release, |cx| {
        cx.prevent_default();
        cx.stop_propagation();
    });
    {
        let root_hits = Rc::clone(&root_hits);
        doc.add_listener("root", EventKind::Release, move |_| {
            *root_hits.borrow_mut() += 1;
        });
    }

    let outcome = doc.dispatch(&Event::release("name"));
    assert_eq!(outcome.invoked, 1);
    assert!(outcome.default_prevented);
    assert!(outcome.propagation_stopped);
    assert_eq!(*root_hits.borrow(), 0);
}

#[test]
fn test_listener_kind_filter() {
    let mut doc = Document::new(header_row());
    doc.add_listener("thead", EventKind::Release, |_| {});

    let click = Event::Click {
        target: Some("name".to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    assert!(!doc.dispatch(&click).is_handled());
    assert!(doc.dispatch(&Event::release("name")).is_handled());
    assert_eq!(doc.listener_count("thead"), 1);
    assert_eq!(doc.listener_count("root"), 0);
}

#[test]
fn test_dispatch_unknown_or_missing_target() {
    let mut doc = Document::new(header_row());
    doc.add_listener("root", EventKind::Release, |_| {});

    assert!(!doc.dispatch(&Event::release("ghost")).is_handled());

    let untargeted = Event::Release {
        target: None,
        x: 3,
        y: 4,
        button: MouseButton::Left,
    };
    assert!(!doc.dispatch(&untargeted).is_handled());
}

#[test]
fn test_attachments_are_typed() {
    let mut doc = Document::new(header_row());
    doc.set_attachment("thead", 7u32);

    assert_eq!(doc.attachment::<u32>("thead"), Some(7));
    assert_eq!(doc.attachment::<String>("thead"), None);
    assert_eq!(doc.attachment::<u32>("root"), None);
}

// ============================================================================
// Crossterm Conversion
// ============================================================================

#[test]
fn test_from_mouse() {
    let up = MouseEvent {
        kind: MouseEventKind::Up(crossterm::event::MouseButton::Left),
        column: 12,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
        Event::from_mouse(up, Some("name".to_string())),
        Some(Event::Release {
            target: Some("name".to_string()),
            x: 12,
            y: 1,
            button: MouseButton::Left,
        })
    );

    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(Event::from_mouse(moved, None), None);
}
