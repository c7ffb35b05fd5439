//! Per-container sort-state machine.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace, warn};
use tuidom::{Element, find_element_mut};

use crate::{Header, Result, SortConfig, SortContext, SortError, SortMode};

/// Callback invoked with `(field_name, new_mode)` whenever a header changes.
pub type SortCallback = Arc<dyn Fn(&str, SortMode) + Send + Sync>;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

struct Registered {
    header: Header,
    field_name: String,
}

#[derive(Default)]
struct ControllerInner {
    /// Headers in container order.
    headers: Vec<Registered>,
    /// Header id -> mode. A missing entry means the header was never touched
    /// or was cleared by another header's transition.
    states: HashMap<String, SortMode>,
}

impl ControllerInner {
    fn registered(&self, id: &str) -> Option<&Registered> {
        self.headers.iter().find(|r| r.header.id == id)
    }

    fn by_field(&self, field: &str) -> Option<&Registered> {
        self.headers.iter().find(|r| r.field_name == field)
    }

    /// Clear every header, then give `id` the new mode.
    fn select(&mut self, id: &str, mode: SortMode) {
        self.states.clear();
        self.states.insert(id.to_string(), mode);
    }
}

/// Sort controller for one header row.
///
/// Holds the registered headers, the mode of each header and the callback.
/// At most one header is ever in a non-`Unsorted` mode. Cloning yields a
/// handle to the same controller.
///
/// # Examples
///
/// ```
/// use sortable::{Header, SortController, SortMode};
///
/// let controller = SortController::new(
///     [Header::new("name", "Name"), Header::new("age", "Age").field("age")],
///     |field, mode| println!("sort {field} {mode}"),
/// );
///
/// controller.handle_release("name");
/// assert_eq!(controller.mode_of("name"), Some(SortMode::Ascending));
///
/// controller.handle_release("age");
/// assert_eq!(controller.mode_of("name"), None);
/// assert_eq!(controller.active(), Some(("age".to_string(), SortMode::Ascending)));
/// ```
#[derive(Clone)]
pub struct SortController {
    inner: Arc<RwLock<ControllerInner>>,
    config: Arc<SortConfig>,
    callback: SortCallback,
}

impl fmt::Debug for SortController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("SortController")
            .field("headers", &inner.headers.len())
            .field("states", &inner.states)
            .field("config", &self.config)
            .finish()
    }
}

impl SortController {
    /// Create a controller with the default configuration.
    pub fn new<F>(headers: impl IntoIterator<Item = Header>, callback: F) -> Self
    where
        F: Fn(&str, SortMode) + Send + Sync + 'static,
    {
        Self::with_config(SortConfig::default(), headers, callback)
    }

    pub fn with_config<F>(
        config: SortConfig,
        headers: impl IntoIterator<Item = Header>,
        callback: F,
    ) -> Self
    where
        F: Fn(&str, SortMode) + Send + Sync + 'static,
    {
        let controller = Self {
            inner: Arc::new(RwLock::new(ControllerInner::default())),
            config: Arc::new(config),
            callback: Arc::new(callback),
        };
        for header in headers {
            controller.add_header(header);
        }
        controller
    }

    fn read(&self) -> RwLockReadGuard<'_, ControllerInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ControllerInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Whether both handles refer to the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Register a header. Returns false if its id is already registered.
    pub fn add_header(&self, header: Header) -> bool {
        let mut inner = self.write();
        if inner.registered(&header.id).is_some() {
            return false;
        }
        let field_name = header.field_name(&self.config);
        trace!("register header {} as '{field_name}'", header.id);
        inner.headers.push(Registered { header, field_name });
        true
    }

    /// Whether `id` is a registered sortable header.
    pub fn is_sortable(&self, id: &str) -> bool {
        self.read().registered(id).is_some()
    }

    /// Registered headers in container order.
    pub fn headers(&self) -> Vec<Header> {
        self.read().headers.iter().map(|r| r.header.clone()).collect()
    }

    pub fn field_name(&self, id: &str) -> Option<String> {
        self.read().registered(id).map(|r| r.field_name.clone())
    }

    /// Adopt a mode that markup already carries, without invoking the callback.
    ///
    /// An active mode is refused when another header is already active, so
    /// markup with several active markers keeps only the first one adopted.
    pub(crate) fn restore_mode(&self, id: &str, mode: SortMode) -> bool {
        let mut inner = self.write();
        if mode.is_active() && inner.states.iter().any(|(other, m)| other != id && m.is_active()) {
            debug!("ignoring {mode} marker on {id}: another header is already active");
            return false;
        }
        inner.states.insert(id.to_string(), mode);
        true
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Current mode of a header, `None` if it carries no state.
    pub fn mode_of(&self, id: &str) -> Option<SortMode> {
        self.read().states.get(id).copied()
    }

    /// First header in container order with an active mode.
    pub fn active(&self) -> Option<(String, SortMode)> {
        let inner = self.read();
        inner.headers.iter().find_map(|r| {
            inner
                .states
                .get(&r.header.id)
                .filter(|mode| mode.is_active())
                .map(|mode| (r.field_name.clone(), *mode))
        })
    }

    /// Advance the header `target` one step and notify the callback.
    ///
    /// Releases on anything but a registered header are ignored.
    pub fn handle_release(&self, target: &str) -> EventResult {
        let (field_name, next) = {
            let mut inner = self.write();
            let Some(field_name) = inner.registered(target).map(|r| r.field_name.clone()) else {
                trace!("release on {target} ignored: not a sortable header");
                return EventResult::Ignored;
            };

            let current = *inner
                .states
                .entry(target.to_string())
                .or_insert(SortMode::Unsorted);
            let next = current.next();
            inner.select(target, next);
            (field_name, next)
        };

        debug!("header {target} ('{field_name}') -> {next}");
        (self.callback)(&field_name, next);
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Context
    // -------------------------------------------------------------------------

    /// Snapshot of every header with an active mode.
    pub fn context(&self) -> SortContext {
        let inner = self.read();
        inner
            .headers
            .iter()
            .filter_map(|r| {
                inner
                    .states
                    .get(&r.header.id)
                    .filter(|mode| mode.is_active())
                    .map(|mode| (r.field_name.clone(), *mode))
            })
            .collect()
    }

    /// Restore a snapshot taken with [`context`](Self::context).
    ///
    /// An empty context does nothing. Otherwise every header is cleared, the
    /// named header takes the given mode and the callback runs as it would for
    /// a click. Contexts with several entries or an unknown field are rejected
    /// without changing anything.
    pub fn set_context(&self, context: &SortContext) -> Result<()> {
        let entry = context
            .entry()
            .inspect_err(|e| warn!("set_context rejected: {e}"))?;
        let Some((field, mode)) = entry else {
            return Ok(());
        };

        {
            let mut inner = self.write();
            let Some(id) = inner.by_field(field).map(|r| r.header.id.clone()) else {
                warn!("set_context rejected: no header for field '{field}'");
                return Err(SortError::UnknownField(field.to_string()));
            };
            inner.select(&id, mode);
            debug!("context restored: header {id} ('{field}') -> {mode}");
        }

        (self.callback)(field, mode);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Markup
    // -------------------------------------------------------------------------

    /// Write each header's mode back onto its element as a marker class.
    ///
    /// Headers without state lose all markers. Headers not found under `root`
    /// are skipped.
    pub fn apply_markers(&self, root: &mut Element) {
        let inner = self.read();
        for registered in &inner.headers {
            let Some(element) = find_element_mut(root, &registered.header.id) else {
                continue;
            };
            for mode in SortMode::ALL {
                element.remove_class(mode.marker());
            }
            if let Some(mode) = inner.states.get(&registered.header.id) {
                element.add_class(mode.marker());
            }
        }
    }
}
