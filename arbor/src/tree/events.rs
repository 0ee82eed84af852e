//! Event wiring: clicks, double-clicks, right-clicks, text selection.
//!
//! Targets are resolved against the current projection by walking up from
//! the target element, so handlers only need the id under the pointer.

use arbor_dom::{
    closest, find_path, ClassNames, Element, Event, EventResult, MouseButton, PopupSlot,
};
use log::{debug, trace, warn};

use super::{MenuRequest, NodeId, Tree};
use crate::error::TreeError;
use crate::prompt::Prompt;

impl Tree {
    /// Dispatch a pointer event to the tree.
    ///
    /// Only a left click activates tree affordances. `popups` is the
    /// document's popup slot. Every click, of any button, inside the tree
    /// or not, is delivered to it after the tree's own handling, which is
    /// what hides a visible menu (including after one of its entries ran).
    pub fn handle_event(
        &mut self,
        event: &Event,
        popups: &mut PopupSlot,
        prompt: &mut dyn Prompt,
    ) -> Result<EventResult, TreeError> {
        self.menu.reconcile(popups);
        let view = self.render();

        match event {
            Event::Click { target, button, .. } => {
                let outcome = match target {
                    Some(target) if *button == MouseButton::Left => {
                        self.on_click(&view, target, prompt)
                    }
                    _ => Ok(EventResult::Ignored),
                };
                popups.dispatch_click();
                self.menu.reconcile(popups);
                outcome
            }
            Event::DoubleClick {
                target: Some(target),
                ..
            } => self.on_double_click(&view, target),
            Event::ContextMenu {
                target: Some(target),
                x,
                y,
            } => Ok(self.on_context_menu(&view, target, *x, *y, popups)),
            Event::SelectStart {
                target: Some(target),
            } if !find_path(&view, target).is_empty() => Ok(EventResult::PreventDefault),
            _ => Ok(EventResult::Ignored),
        }
    }

    fn on_click(
        &mut self,
        view: &Element,
        target: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<EventResult, TreeError> {
        if let Some(index) = menu_entry_at(view, target) {
            if !self.menu.is_visible() {
                return Ok(EventResult::Ignored);
            }
            let Some(request) = self.pending else {
                warn!("Menu entry {index} clicked with no pending request");
                return Ok(EventResult::Ignored);
            };
            self.run_menu_action(index, &request, prompt)?;
            return Ok(EventResult::Handled);
        }

        // Only a click directly on the affordance toggles
        let on_expand = find_path(view, target)
            .last()
            .is_some_and(|el| el.has_class(ClassNames::EXPAND));
        if !on_expand {
            trace!("Click on {target} ignored");
            return Ok(EventResult::Ignored);
        }

        match node_at(view, target) {
            Some(node) => {
                self.toggle_expansion(node)?;
                Ok(EventResult::Handled)
            }
            None => Ok(EventResult::Ignored),
        }
    }

    fn on_double_click(&mut self, view: &Element, target: &str) -> Result<EventResult, TreeError> {
        if closest(view, target, ClassNames::CONTENT).is_none() {
            return Ok(EventResult::Ignored);
        }

        match node_at(view, target) {
            Some(node) => {
                self.toggle_expansion(node)?;
                Ok(EventResult::Handled)
            }
            None => Ok(EventResult::Ignored),
        }
    }

    fn on_context_menu(
        &mut self,
        view: &Element,
        target: &str,
        x: i32,
        y: i32,
        popups: &mut PopupSlot,
    ) -> EventResult {
        if closest(view, target, ClassNames::CONTENT).is_none() {
            return EventResult::Ignored;
        }
        let Some(node) = node_at(view, target) else {
            return EventResult::Ignored;
        };

        self.pending = Some(MenuRequest::new(node));
        self.menu.set_position(x, y);
        let owner = self.menu_owner();
        if let Some(displaced) = self.menu.show(popups, &owner) {
            debug!("Context menu displaced popup {displaced}");
        }
        EventResult::PreventDefault
    }
}

/// Node of the row containing `target`.
fn node_at(view: &Element, target: &str) -> Option<NodeId> {
    let row = closest(view, target, ClassNames::NODE)?;
    let index = row.get_data("node")?.parse().ok()?;
    let generation = row.get_data("generation")?.parse().ok()?;
    Some(NodeId { index, generation })
}

/// Index of the menu entry containing `target`.
fn menu_entry_at(view: &Element, target: &str) -> Option<usize> {
    closest(view, target, ClassNames::MENU_ENTRY)
        .and_then(|entry| entry.get_data("entry"))
        .and_then(|raw| raw.parse().ok())
}
