//! Tree configuration types.

/// Per-tree configuration: menu labels and prompt wording.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Label of the "add child" action.
    pub add_label: String,
    /// Label of the "edit" action.
    pub edit_label: String,
    /// Label of the "delete" action.
    pub delete_label: String,
    /// Label of the "add at root level" action.
    pub add_in_root_label: String,
    /// Label of the "expand" action.
    pub expand_label: String,
    /// Label of the "collapse" action.
    pub collapse_label: String,

    /// Message shown when asking for the text of a new item.
    pub add_message: String,
    /// Message shown when asking for replacement text.
    pub edit_message: String,
    /// Message shown when confirming a deletion.
    pub delete_message: String,

    /// Install the six standard context menu actions on creation.
    pub standard_actions: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            add_label: "add".to_string(),
            edit_label: "edit".to_string(),
            delete_label: "delete".to_string(),
            add_in_root_label: "add in root".to_string(),
            expand_label: "expand".to_string(),
            collapse_label: "collapse".to_string(),
            add_message: "Item text".to_string(),
            edit_message: "New item text".to_string(),
            delete_message: "delete item?".to_string(),
            standard_actions: true,
        }
    }
}

impl TreeConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an empty context menu; actions are added by the host.
    pub fn without_standard_actions(mut self) -> Self {
        self.standard_actions = false;
        self
    }

    /// Set the add/edit/delete prompt messages.
    pub fn messages(
        mut self,
        add: impl Into<String>,
        edit: impl Into<String>,
        delete: impl Into<String>,
    ) -> Self {
        self.add_message = add.into();
        self.edit_message = edit.into();
        self.delete_message = delete.into();
        self
    }

    /// Set the label of the "add child" action.
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.add_label = label.into();
        self
    }

    /// Set the label of the "edit" action.
    pub fn edit_label(mut self, label: impl Into<String>) -> Self {
        self.edit_label = label.into();
        self
    }

    /// Set the label of the "delete" action.
    pub fn delete_label(mut self, label: impl Into<String>) -> Self {
        self.delete_label = label.into();
        self
    }

    /// Set the label of the "add at root level" action.
    pub fn add_in_root_label(mut self, label: impl Into<String>) -> Self {
        self.add_in_root_label = label.into();
        self
    }

    /// Set the label of the "expand" action.
    pub fn expand_label(mut self, label: impl Into<String>) -> Self {
        self.expand_label = label.into();
        self
    }

    /// Set the label of the "collapse" action.
    pub fn collapse_label(mut self, label: impl Into<String>) -> Self {
        self.collapse_label = label.into();
        self
    }
}
