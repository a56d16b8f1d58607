//! Catalog Models
//!
//! Entities owned by the remote catalog API and the drafts used to edit them.

use serde::{Deserialize, Serialize};

/// An entity mirrored from a remote collection resource.
pub trait Record: Clone + PartialEq + 'static {
    /// Collection path under the API base, e.g. `categories`
    const RESOURCE: &'static str;
    /// Route prefix of the (external) detail view
    const DETAIL_ROUTE: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> u32;

    fn name(&self) -> &str;

    fn detail_href(&self) -> String {
        format!("#/{}/{}", Self::DETAIL_ROUTE, self.id())
    }

    /// Accessible name of the row's delete button
    fn delete_label(&self) -> String {
        format!("Hapus {}", self.name())
    }

    /// Question shown before a delete is sent
    fn delete_prompt(&self) -> String {
        format!("Hapus {}?", self.name())
    }
}

/// Form input for creating or updating a record of type `R`.
///
/// The serialized draft is the request body sent on create and update.
pub trait Draft<R>: Clone + Default + PartialEq + Serialize + 'static {
    /// Copy a record's editable fields into a fresh draft
    fn from_record(record: &R) -> Self;

    /// Whether every required field is filled in
    fn is_complete(&self) -> bool;

    /// Write the draft's fields onto a confirmed record, keeping its id
    fn apply_to(&self, record: &mut R);

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);
}

fn has_name(name: &str) -> bool {
    !name.trim().is_empty()
}

// ========================
// Category
// ========================

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Record for Category {
    const RESOURCE: &'static str = "categories";
    const DETAIL_ROUTE: &'static str = "category";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
}

impl Draft<Category> for CategoryDraft {
    fn from_record(record: &Category) -> Self {
        Self { name: record.name.clone() }
    }

    fn is_complete(&self) -> bool {
        has_name(&self.name)
    }

    fn apply_to(&self, record: &mut Category) {
        record.name = self.name.clone();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

// ========================
// Label
// ========================

/// Label data structure (matches backend)
///
/// `category_id` is not checked against the category list on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<u32>,
}

impl Record for Label {
    const RESOURCE: &'static str = "labels";
    const DETAIL_ROUTE: &'static str = "label";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Full label draft: a name plus the selected category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelDraft {
    pub name: String,
    pub category_id: Option<u32>,
}

impl Draft<Label> for LabelDraft {
    fn from_record(record: &Label) -> Self {
        Self {
            name: record.name.clone(),
            category_id: record.category_id,
        }
    }

    fn is_complete(&self) -> bool {
        has_name(&self.name) && self.category_id.is_some()
    }

    fn apply_to(&self, record: &mut Label) {
        record.name = self.name.clone();
        record.category_id = self.category_id;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Name-only label draft used by the combined label/category screen.
/// Updates leave the label's category untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelNameDraft {
    pub name: String,
}

impl Draft<Label> for LabelNameDraft {
    fn from_record(record: &Label) -> Self {
        Self { name: record.name.clone() }
    }

    fn is_complete(&self) -> bool {
        has_name(&self.name)
    }

    fn apply_to(&self, record: &mut Label) {
        record.name = self.name.clone();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
