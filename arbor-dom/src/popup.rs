//! Document-level active popup slot.
//!
//! A visible popup must hide on the next pointer click anywhere in the
//! document. Instead of each popup registering its own global click
//! listener, the document owns a single slot: showing a popup acquires
//! it, hiding releases it, and a click consumes it. At most one dismissal
//! handler is ever live, and a popup that acquires the slot displaces the
//! previous holder.

use log::trace;

/// Proof that a popup currently holds (or once held) the slot.
///
/// Not `Clone`: the popup that acquired it owns it until it is released
/// or consumed.
#[derive(Debug, PartialEq, Eq)]
pub struct PopupLease {
    serial: u64,
}

#[derive(Debug)]
struct ActivePopup {
    owner: String,
    serial: u64,
}

#[derive(Debug, Default)]
pub struct PopupSlot {
    active: Option<ActivePopup>,
    next_serial: u64,
}

impl PopupSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the slot for `owner`.
    ///
    /// Returns the new lease and the owner that was displaced, if a
    /// different popup held the slot.
    pub fn acquire(&mut self, owner: impl Into<String>) -> (PopupLease, Option<String>) {
        let owner = owner.into();
        let serial = self.next_serial;
        self.next_serial += 1;

        let displaced = self
            .active
            .replace(ActivePopup {
                owner: owner.clone(),
                serial,
            })
            .map(|previous| previous.owner)
            .filter(|previous| *previous != owner);

        trace!("Popup slot acquired by {owner} (displaced: {displaced:?})");
        (PopupLease { serial }, displaced)
    }

    /// Release the slot if `lease` is still the live one.
    ///
    /// Returns true when a live dismissal handler was removed.
    pub fn release(&mut self, lease: PopupLease) -> bool {
        if self.is_current(&lease) {
            self.active = None;
            trace!("Popup slot released");
            true
        } else {
            false
        }
    }

    /// Whether `lease` is the one holding the slot.
    pub fn is_current(&self, lease: &PopupLease) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.serial == lease.serial)
    }

    /// Deliver a document click. Consumes the live dismissal handler and
    /// returns the owner that must hide.
    pub fn dispatch_click(&mut self) -> Option<String> {
        let active = self.active.take()?;
        trace!("Popup {} dismissed by click", active.owner);
        Some(active.owner)
    }

    /// Number of live dismissal handlers: 0 or 1.
    pub fn live_handlers(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn owner(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.owner.as_str())
    }
}
