//! Clipboard event helpers.
//!
//! Copy and paste ride on the window's `copy`/`paste` events: the collection
//! is written into, and read back from, the event's own `DataTransfer`, so no
//! clipboard permission prompt is involved.

/// Data format the collection travels under.
pub const CLIPBOARD_FORMAT: &str = "text/plain";

/// Put `text` on the clipboard for this copy event. Returns whether the
/// browser accepted it; on success the default copy is suppressed.
#[cfg(feature = "hydrate")]
pub fn write_event(ev: &web_sys::ClipboardEvent, text: &str) -> bool {
    let Some(data) = ev.clipboard_data() else {
        return false;
    };
    if data.set_data(CLIPBOARD_FORMAT, text).is_err() {
        return false;
    }
    ev.prevent_default();
    true
}

/// Text carried by a paste event, if any.
#[cfg(feature = "hydrate")]
pub fn read_event(ev: &web_sys::ClipboardEvent) -> Option<String> {
    ev.clipboard_data()
        .and_then(|data| data.get_data(CLIPBOARD_FORMAT).ok())
        .filter(|text| !text.is_empty())
}
