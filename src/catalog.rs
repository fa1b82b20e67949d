use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chair,
    Table,
    Sofa,
    Desk,
    Bed,
    Cabinet,
    Decoration,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Chair,
        Category::Table,
        Category::Sofa,
        Category::Desk,
        Category::Bed,
        Category::Cabinet,
        Category::Decoration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chair => "chair",
            Category::Table => "table",
            Category::Sofa => "sofa",
            Category::Desk => "desk",
            Category::Bed => "bed",
            Category::Cabinet => "cabinet",
            Category::Decoration => "decoration",
        }
    }

    /// Capitalized name for category buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Chair => "Chair",
            Category::Table => "Table",
            Category::Sofa => "Sofa",
            Category::Desk => "Desk",
            Category::Bed => "Bed",
            Category::Cabinet => "Cabinet",
            Category::Decoration => "Decoration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Width, height and depth in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDefinition {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Category filter used by the catalog browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Immutable, ordered furniture catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FurnitureDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive dimensions.
    pub fn new(items: Vec<FurnitureDefinition>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            let d = item.dimensions;
            for (axis, value) in [("width", d.width), ("height", d.height), ("depth", d.depth)] {
                // Written this way so NaN is rejected too
                if !(value > 0.0) {
                    return Err(CatalogError::InvalidDimension {
                        id: item.id.clone(),
                        axis,
                        value,
                    });
                }
            }
        }

        Ok(Self { items })
    }

    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let items: Vec<FurnitureDefinition> = serde_yaml::from_str(content)?;
        Self::new(items)
    }

    /// The reference catalog shipped with the application.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(include_str!("../catalog.yaml"))
    }

    pub fn items(&self) -> &[FurnitureDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&FurnitureDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<&FurnitureDefinition> {
        self.filter(CategoryFilter::Only(category))
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&FurnitureDefinition> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    /// Distinct categories in first-seen catalog order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        categories
    }
}

/// Load the catalog named in the config, falling back to the bundled one.
///
/// Only a broken bundled catalog is an error; a broken user file is logged.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog, CatalogError> {
    if let Some(p) = path {
        let expanded = shellexpand::tilde(p);
        match try_load_catalog_file(Path::new(expanded.as_ref())) {
            Ok(catalog) => {
                tracing::info!(path = %expanded, items = catalog.len(), "loaded catalog");
                return Ok(catalog);
            }
            Err(e) => {
                tracing::warn!(path = %expanded, error = %e, "falling back to bundled catalog");
            }
        }
    }

    Catalog::bundled()
}

fn try_load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_yaml(&content)
}
