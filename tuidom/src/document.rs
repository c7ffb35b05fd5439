//! Element tree with delegated event listeners.
//!
//! A [`Document`] owns the root element. Listeners are registered on an
//! element id and receive every event whose target is that element or one of
//! its descendants, bubbling from the target up to the root.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::trace;

use crate::element::{find_element, path_to, Element};
use crate::event::{Event, EventKind};

type Handler = Box<dyn Fn(&mut EventContext<'_>)>;

struct Listener {
    kind: EventKind,
    handler: Handler,
}

/// State passed to a listener while an event bubbles.
pub struct EventContext<'a> {
    target: &'a Element,
    current_target: &'a str,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<'a> EventContext<'a> {
    /// The element the event was aimed at.
    pub fn target(&self) -> &'a Element {
        self.target
    }

    /// Id of the element whose listener is running.
    pub fn current_target(&self) -> &'a str {
        self.current_target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Skip listeners on the remaining ancestors.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners that ran.
    pub invoked: usize,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        self.invoked > 0
    }
}

pub struct Document {
    root: Element,
    listeners: HashMap<String, Vec<Listener>>,
    attachments: HashMap<(String, TypeId), Box<dyn Any>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root.id)
            .field("listeners", &self.listeners.len())
            .field("attachments", &self.attachments.len())
            .finish()
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: HashMap::new(),
            attachments: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Register a listener on `id` for events of `kind`.
    pub fn add_listener<F>(&mut self, id: impl Into<String>, kind: EventKind, handler: F)
    where
        F: Fn(&mut EventContext<'_>) + 'static,
    {
        self.listeners.entry(id.into()).or_default().push(Listener {
            kind,
            handler: Box::new(handler),
        });
    }

    /// Number of listeners registered on `id`, across all kinds.
    pub fn listener_count(&self, id: &str) -> usize {
        self.listeners.get(id).map_or(0, Vec::len)
    }

    /// Deliver `event` to listeners on its target and then each ancestor,
    /// stopping early if a listener calls `stop_propagation`.
    pub fn dispatch(&self, event: &Event) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        let Some(target_id) = event.target() else {
            return outcome;
        };
        let Some(path) = path_to(&self.root, target_id) else {
            trace!("dispatch: target {target_id} not in document");
            return outcome;
        };
        let Some(&target) = path.last() else {
            return outcome;
        };

        let kind = event.kind();
        let mut cx = EventContext {
            target,
            current_target: &target.id,
            default_prevented: false,
            propagation_stopped: false,
        };

        for &element in path.iter().rev() {
            let Some(listeners) = self.listeners.get(&element.id) else {
                continue;
            };
            cx.current_target = &element.id;
            for listener in listeners.iter().filter(|l| l.kind == kind) {
                trace!("dispatch: {kind:?} on {target_id} -> listener on {}", element.id);
                (listener.handler)(&mut cx);
                outcome.invoked += 1;
            }
            if cx.propagation_stopped {
                break;
            }
        }

        outcome.default_prevented = cx.default_prevented;
        outcome.propagation_stopped = cx.propagation_stopped;
        outcome
    }

    // -------------------------------------------------------------------------
    // Attachments
    // -------------------------------------------------------------------------

    /// Typed value previously stored on `id`, if any.
    pub fn attachment<T: Any + Clone>(&self, id: &str) -> Option<T> {
        self.attachments
            .get(&(id.to_string(), TypeId::of::<T>()))
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Store a typed value on `id`, replacing any previous value of that type.
    pub fn set_attachment<T: Any>(&mut self, id: impl Into<String>, value: T) {
        self.attachments
            .insert((id.into(), TypeId::of::<T>()), Box::new(value));
    }
}
