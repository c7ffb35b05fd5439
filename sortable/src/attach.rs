//! Binding a controller to a document container.

use log::debug;
use tuidom::{Document, EventKind, descendants};

use crate::{Header, Result, SortConfig, SortController, SortError, SortMode};

/// Make the header row `container` sortable with the default configuration.
///
/// See [`attach_with`].
pub fn attach<F>(doc: &mut Document, container: &str, callback: F) -> Result<SortController>
where
    F: Fn(&str, SortMode) + Send + Sync + 'static,
{
    attach_with(doc, container, SortConfig::default(), callback)
}

/// Make the header row `container` sortable.
///
/// Every descendant carrying the marker class becomes a header; one that
/// already carries a mode marker class starts in that mode. Only the first
/// header in container order with an active marker keeps it; later active
/// markers are dropped. A single release listener is bound on the container
/// and routes releases on headers to the controller.
///
/// Headers are read once, here. A sortable element added under the container
/// afterwards is not routed until it is registered with
/// [`SortController::add_header`].
///
/// Attaching again to the same container returns the existing controller and
/// ignores `config` and `callback`.
pub fn attach_with<F>(
    doc: &mut Document,
    container: &str,
    config: SortConfig,
    callback: F,
) -> Result<SortController>
where
    F: Fn(&str, SortMode) + Send + Sync + 'static,
{
    if let Some(existing) = doc.attachment::<SortController>(container) {
        debug!("sortable: {container} already attached");
        return Ok(existing);
    }

    let element = doc
        .get(container)
        .ok_or_else(|| SortError::UnknownContainer(container.to_string()))?;

    let mut headers = Vec::new();
    let mut initial = Vec::new();
    for el in descendants(element)
        .into_iter()
        .filter(|el| el.has_class(&config.marker_class))
    {
        if let Some(mode) = SortMode::ALL.into_iter().find(|m| el.has_class(m.marker())) {
            initial.push((el.id.clone(), mode));
        }
        headers.push(Header::from_element(el, &config));
    }

    debug!("sortable: attaching to {container} with {} headers", headers.len());
    let controller = SortController::with_config(config, headers, callback);
    for (id, mode) in initial {
        controller.restore_mode(&id, mode);
    }

    let routed = controller.clone();
    doc.add_listener(container, EventKind::Release, move |cx| {
        if routed.handle_release(&cx.target().id).is_handled() {
            cx.prevent_default();
            cx.stop_propagation();
        }
    });
    doc.set_attachment(container, controller.clone());

    Ok(controller)
}
