//! Nested record documents: `[{ "content": "...", "children": [...] }]`.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LoadError, TreeError};
use crate::tree::{NodeId, Tree};

/// One item of a record document. A missing or `null` `children` key
/// means leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Record>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    pub fn leaf(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(content: impl Into<String>, children: Vec<Record>) -> Self {
        Self {
            content: content.into(),
            children,
        }
    }

    /// Parse a JSON record document.
    pub fn parse_document(json: &str) -> Result<Vec<Record>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Tree {
    /// Materialize `records` under `parent`, depth-first, in input order.
    pub fn build_from_records(&mut self, parent: NodeId, records: &[Record]) -> Result<(), TreeError> {
        self.get(parent)?;
        for record in records {
            let item = self.create_item(record.content.clone());
            self.build_from_records(item, &record.children)?;
            self.attach(parent, item)?;
        }
        Ok(())
    }

    /// Replace all root-level items with `records`.
    pub fn set_data(&mut self, records: &[Record]) -> Result<(), TreeError> {
        self.clear();
        self.build_from_records(NodeId::ROOT, records)?;
        debug!("Tree {} loaded {} nodes", self.id(), self.len());
        Ok(())
    }

    /// Parse a JSON record document and replace the tree's items with it.
    /// The tree is left untouched when parsing fails.
    pub fn set_data_from_json(&mut self, json: &str) -> Result<(), LoadError> {
        let records = Record::parse_document(json)?;
        self.set_data(&records)?;
        Ok(())
    }

    /// Export the attached nodes back into the record format.
    pub fn to_records(&self) -> Vec<Record> {
        self.records_under(NodeId::ROOT)
    }

    fn records_under(&self, parent: NodeId) -> Vec<Record> {
        self.children(parent)
            .iter()
            .filter_map(|&child| {
                let content = self.content(child)?.to_string();
                Some(Record::branch(content, self.records_under(child)))
            })
            .collect()
    }
}
