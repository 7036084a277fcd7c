use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Furniture category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureType {
    Chair,
    Table,
    Sofa,
    Bed,
    Cabinet,
    #[default]
    Other,
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chair => write!(f, "chair"),
            Self::Table => write!(f, "table"),
            Self::Sofa => write!(f, "sofa"),
            Self::Bed => write!(f, "bed"),
            Self::Cabinet => write!(f, "cabinet"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Declared 3D model format of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    Box,
    Obj,
    Glb,
}

/// The model a renderer should load for a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Draw a colored box of the template's dimensions.
    Box,
    /// Wavefront OBJ file.
    Obj(String),
    /// Binary glTF file. Always placed on the floor.
    Glb(String),
}

/// An immutable catalog entry. Dimensions are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureTemplate {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: FurnitureType,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    #[serde(default)]
    pub color: String,
    pub default_color: String,
    #[serde(default)]
    pub model_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format: Option<ModelFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_model_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glb_model_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FurnitureTemplate {
    /// Creates a box-model template.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: FurnitureType,
        (width, length, height): (f64, f64, f64),
        default_color: impl Into<String>,
    ) -> Self {
        let default_color = default_color.into();
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width,
            length,
            height,
            color: default_color.clone(),
            default_color,
            model_url: String::new(),
            thumbnail_url: String::new(),
            model_format: None,
            obj_model_path: None,
            glb_model_path: None,
            created_at: None,
        }
    }

    /// Resolves the model to render: a GLB path wins over an OBJ path, and
    /// without either the template is drawn as a box.
    pub fn model_source(&self) -> ModelSource {
        let non_empty = |p: &Option<String>| p.as_ref().filter(|s| !s.is_empty()).cloned();
        if let Some(path) = non_empty(&self.glb_model_path) {
            ModelSource::Glb(path)
        } else if let Some(path) = non_empty(&self.obj_model_path) {
            ModelSource::Obj(path)
        } else {
            ModelSource::Box
        }
    }

    fn is_loadable(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("missing id".to_string());
        }
        for (name, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        Ok(())
    }
}

/// Read-only furniture catalog for a session, indexed by template id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<FurnitureTemplate>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, skipping entries without an id or with non-positive
    /// dimensions. A repeated id replaces the earlier entry.
    pub fn from_templates(items: impl IntoIterator<Item = FurnitureTemplate>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            if let Err(reason) = item.is_loadable() {
                tracing::warn!("Skipping catalog entry '{}': {}", item.name, reason);
                continue;
            }
            match catalog.by_id.get(&item.id) {
                Some(&slot) => {
                    tracing::warn!("Duplicate catalog id '{}', keeping the later entry", item.id);
                    catalog.templates[slot] = item;
                }
                None => {
                    catalog.by_id.insert(item.id.clone(), catalog.templates.len());
                    catalog.templates.push(item);
                }
            }
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&FurnitureTemplate> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnitureTemplate> {
        self.templates.iter()
    }

    /// Templates of one category, in catalog order.
    pub fn by_category(&self, category: FurnitureType) -> impl Iterator<Item = &FurnitureTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
