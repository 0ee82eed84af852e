//! Projection of the logical tree into elements.

use arbor_dom::{ClassNames, Element};

use super::{Expansion, Node, NodeId, Tree};

impl Tree {
    /// Render the whole widget: the root list followed by the context menu.
    ///
    /// Pure: the same logical state always produces the same elements.
    /// Closed branches still render their children; hiding them is up to
    /// the stylesheet.
    pub fn render(&self) -> Element {
        let id = self.id.to_string();
        let roots = self.render_children(NodeId::ROOT);

        Element::div()
            .id(id.clone())
            .child(
                Element::ul()
                    .id(format!("{id}-root"))
                    .class(ClassNames::CONTAINER)
                    .children(roots),
            )
            .child(self.menu.render(&self.menu_owner()))
    }

    fn render_children(&self, parent: NodeId) -> Vec<Element> {
        self.children(parent)
            .iter()
            .filter_map(|&child| self.node(child).map(|node| self.render_node(child, node)))
            .collect()
    }

    fn render_node(&self, id: NodeId, node: &Node) -> Element {
        let row = self.element_id(id);

        Element::li()
            .id(row.clone())
            .class(ClassNames::NODE)
            .class(expansion_class(node.expansion))
            .class_if(ClassNames::IS_LAST, node.is_last)
            .class_if(ClassNames::IS_ROOT, node.root_level)
            .data("node", id.index().to_string())
            .data("generation", id.generation().to_string())
            .child(Element::div().id(format!("{row}-expand")).class(ClassNames::EXPAND))
            .child(
                Element::div()
                    .id(format!("{row}-content"))
                    .class(ClassNames::CONTENT)
                    .markup(node.content.clone()),
            )
            .child(
                Element::ul()
                    .id(format!("{row}-children"))
                    .class(ClassNames::CONTAINER)
                    .children(self.render_children(id)),
            )
    }

    /// Element id of the row rendered for `node`.
    pub fn element_id(&self, node: NodeId) -> String {
        format!("{}-node-{}-{}", self.id, node.index(), node.generation())
    }

    /// Element id of `node`'s expand affordance.
    pub fn expand_element_id(&self, node: NodeId) -> String {
        format!("{}-expand", self.element_id(node))
    }

    /// Element id of `node`'s content cell.
    pub fn content_element_id(&self, node: NodeId) -> String {
        format!("{}-content", self.element_id(node))
    }

    /// Indented plain-text view. `+` marks closed branches, `-` open ones.
    /// Children of closed branches are omitted.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(NodeId::ROOT, 0, &mut out);
        out
    }

    fn write_outline(&self, parent: NodeId, depth: usize, out: &mut String) {
        for &child in self.children(parent) {
            let Some(node) = self.node(child) else {
                continue;
            };
            let marker = match node.expansion {
                Expansion::Leaf => ' ',
                Expansion::Open => '-',
                Expansion::Closed => '+',
            };
            out.push_str(&"  ".repeat(depth));
            out.push(marker);
            out.push(' ');
            out.push_str(&node.content);
            out.push('\n');

            if node.expansion == Expansion::Open {
                self.write_outline(child, depth + 1, out);
            }
        }
    }
}

fn expansion_class(expansion: Expansion) -> &'static str {
    match expansion {
        Expansion::Leaf => ClassNames::EXPAND_LEAF,
        Expansion::Open => ClassNames::EXPAND_OPEN,
        Expansion::Closed => ClassNames::EXPAND_CLOSED,
    }
}
