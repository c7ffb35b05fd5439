//! Sortable Header Demo
//!
//! Drives a header row through a few releases, sorting an in-memory table
//! from the callback, then saves and restores the sort context.

use std::fs::File;
use std::sync::{Arc, Mutex};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use sortable::{SortContext, SortMode, attach};
use tuidom::{Document, Element, Event};

#[derive(Debug, Clone)]
struct Person {
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "Mira", age: 41 },
        Person { name: "Anton", age: 29 },
        Person { name: "Zoe", age: 35 },
    ]
}

fn header_row() -> Element {
    Element::row()
        .id("thead")
        .child(Element::text("Name").id("name").class("sortable"))
        .child(
            Element::text("Age")
                .id("age")
                .class("sortable")
                .attr("fieldname", "age"),
        )
}

fn sorter(rows: Arc<Mutex<Vec<Person>>>) -> impl Fn(&str, SortMode) + Send + Sync + 'static {
    move |field: &str, mode: SortMode| {
        let Ok(mut rows) = rows.lock() else {
            return;
        };
        match field {
            "name" => rows.sort_by(|a, b| a.name.cmp(b.name)),
            "age" => rows.sort_by_key(|p| p.age),
            _ => return,
        }
        match mode {
            SortMode::Descending => rows.reverse(),
            // Restore insertion order.
            SortMode::Unsorted => *rows = people(),
            SortMode::Ascending => {}
        }
        println!("{field} {mode}: {:?}", rows.iter().map(|p| p.name).collect::<Vec<_>>());
    }
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("sortable-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let rows = Arc::new(Mutex::new(people()));
    let mut doc = Document::new(header_row());
    let controller = match attach(&mut doc, "thead", sorter(Arc::clone(&rows))) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    for id in ["name", "name", "age"] {
        doc.dispatch(&Event::release(id));
    }

    let saved = controller.context();
    match serde_json::to_string(&saved) {
        Ok(json) => println!("saved context: {json}"),
        Err(e) => eprintln!("Error: {}", e),
    }

    // A fresh header row picks the selection back up.
    let fresh_rows = Arc::new(Mutex::new(people()));
    let mut fresh = Document::new(header_row());
    let restored = match attach(&mut fresh, "thead", sorter(fresh_rows)) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    if let Err(e) = restored.set_context(&saved) {
        eprintln!("Error: {}", e);
    }
    restored.apply_markers(fresh.root_mut());

    if let Err(e) = restored.set_context(&SortContext::single("salary", SortMode::Ascending)) {
        println!("rejected: {e}");
    }
}
