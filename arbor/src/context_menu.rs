//! Positionable popup holding an ordered list of labeled actions.
//!
//! Visibility is tied to a [`PopupLease`] on the document's
//! [`PopupSlot`]: showing acquires the slot, hiding releases it, and any
//! click delivered to the slot consumes it. Call [`ContextMenu::reconcile`]
//! after the slot may have changed hands to pick up the dismissal.

use arbor_dom::{ClassNames, Element, PopupLease, PopupSlot};
use log::debug;

/// One labeled menu action.
#[derive(Debug, Clone)]
pub struct MenuEntry<A> {
    pub label: String,
    pub action: A,
}

pub struct ContextMenu<A> {
    entries: Vec<MenuEntry<A>>,
    position: (i32, i32),
    lease: Option<PopupLease>,
}

impl<A> Default for ContextMenu<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            position: (0, 0),
            lease: None,
        }
    }
}

impl<A> std::fmt::Debug for ContextMenu<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.entries.iter().map(|e| e.label.as_str()).collect();
        f.debug_struct("ContextMenu")
            .field("entries", &labels)
            .field("position", &self.position)
            .field("visible", &self.is_visible())
            .finish()
    }
}

impl<A> ContextMenu<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen coordinates used by the next [`show`](Self::show).
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Make the menu visible. An already-visible menu keeps its lease, so
    /// repeated shows never stack dismissal handlers.
    ///
    /// Returns the owner of a different popup that was displaced and must
    /// hide.
    pub fn show(&mut self, slot: &mut PopupSlot, owner: &str) -> Option<String> {
        if let Some(lease) = &self.lease
            && slot.is_current(lease)
        {
            return None;
        }

        let (lease, displaced) = slot.acquire(owner);
        self.lease = Some(lease);
        debug!("Context menu {owner} shown at {:?}", self.position);
        displaced
    }

    /// Hide the menu and drop its dismissal handler. Safe when hidden.
    pub fn hide(&mut self, slot: &mut PopupSlot) {
        if let Some(lease) = self.lease.take() {
            slot.release(lease);
        }
    }

    /// Drop visibility if the slot no longer holds this menu's lease
    /// (dismissed by a click or displaced by another popup).
    pub fn reconcile(&mut self, slot: &PopupSlot) {
        if let Some(lease) = &self.lease
            && !slot.is_current(lease)
        {
            self.lease = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.lease.is_some()
    }

    /// Append a labeled entry. Entries are never removed.
    pub fn add_action(&mut self, label: impl Into<String>, action: A) {
        self.entries.push(MenuEntry {
            label: label.into(),
            action,
        });
    }

    pub fn entries(&self) -> &[MenuEntry<A>] {
        &self.entries
    }

    pub fn action(&self, index: usize) -> Option<&A> {
        self.entries.get(index).map(|entry| &entry.action)
    }

    /// Element id of entry `index` when rendered under `owner`.
    pub fn entry_id(owner: &str, index: usize) -> String {
        format!("{owner}-entry-{index}")
    }

    /// Project the menu: a positioned container with one row per entry.
    pub fn render(&self, owner: &str) -> Element {
        let (x, y) = self.position;
        let display = if self.is_visible() { "inline-block" } else { "none" };

        let rows = self.entries.iter().enumerate().map(|(index, entry)| {
            Element::li()
                .id(Self::entry_id(owner, index))
                .class(ClassNames::MENU_ENTRY)
                .data("entry", index.to_string())
                .text(entry.label.clone())
        });

        Element::div()
            .id(owner)
            .class(ClassNames::CONTEXT_MENU)
            .style("display", display)
            .style("left", format!("{x}px"))
            .style("top", format!("{y}px"))
            .child(Element::ul().id(format!("{owner}-entries")).children(rows))
    }
}
