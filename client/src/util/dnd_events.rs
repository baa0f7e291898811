//! Bridge between browser drag events and the core drag-payload model.
//!
//! The browser is the drag/drop capability here: it detects the gesture and
//! delivers the payload string from `dragstart` to `drop`. These helpers keep
//! the `DataTransfer` plumbing out of the components.

use builder::dnd::DragPayload;
use web_sys::DragEvent;

/// Data format key used on the drag data channel.
const DATA_FORMAT: &str = "text/plain";

/// Store an encoded payload on a dragstart event.
pub fn store_payload(ev: &DragEvent, payload: DragPayload) {
    let Some(dt) = ev.data_transfer() else {
        return;
    };
    if dt.set_data(DATA_FORMAT, &payload.encode()).is_err() {
        log::warn!("drag payload could not be stored; gesture will be inert");
    }
}

/// Read the payload back from a drop event. Missing or malformed data reads
/// as `None` — a cancelled gesture.
#[must_use]
pub fn read_payload(ev: &DragEvent) -> Option<DragPayload> {
    let dt = ev.data_transfer()?;
    let Ok(raw) = dt.get_data(DATA_FORMAT) else {
        return None;
    };
    DragPayload::parse(&raw)
}
