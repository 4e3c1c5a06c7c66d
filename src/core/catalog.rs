//! # Catalog
//!
//! The grocery items the app displays. A `Catalog` is built once at startup
//! (from the built-in demo list or a catalog file) and never mutated after.
//!
//! ```text
//! Catalog
//! └── items: Vec<Item>      // insertion order == display order for "All"
//!     ├── id: u32           // unique, >= 1
//!     ├── name: String      // non-empty
//!     └── category: Category
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Category
// ============================================================================

/// Classification tag of an item.
///
/// The three named variants are the categories offered as filter options.
/// Catalog files may carry other tags; those load as `Other` and are shown
/// with default badge styling. An `Other` is only ever built through
/// `Category::from`, so it never holds one of the named tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Produce,
    Dairy,
    Dessert,
    Other(OtherTag),
}

/// Tag text of an unrecognized category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherTag(String);

impl OtherTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Category {
    /// Filter options, in the order the picker lists them.
    pub const KNOWN: [Category; 3] = [Category::Produce, Category::Dairy, Category::Dessert];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Dessert => "Dessert",
            Category::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Produce" => Category::Produce,
            "Dairy" => Category::Dairy,
            "Dessert" => Category::Dessert,
            _ => Category::Other(OtherTag(tag)),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::from(tag.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: Category,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(String),
    InvalidId(u32),
    DuplicateId(u32),
    EmptyName(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
            CatalogError::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            CatalogError::InvalidId(id) => write!(f, "item id must be at least 1 (got {id})"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate item id {id}"),
            CatalogError::EmptyName(id) => write!(f, "item {id} has an empty name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// On-disk shape shared by the TOML and JSON catalog formats.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting ids below 1, duplicate ids and blank names.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CatalogError::InvalidId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The built-in grocery list shown when no catalog file is configured.
    pub fn demo() -> Self {
        Self {
            items: vec![
                Item::new(1, "Organic Milk (1 Gal)", Category::Dairy),
                Item::new(2, "Fuji Apples (3 lbs)", Category::Produce),
                Item::new(3, "Vanilla Bean Ice Cream", Category::Dessert),
                Item::new(4, "Cheddar Cheese Block", Category::Dairy),
                Item::new(5, "Ripe Bananas", Category::Produce),
                Item::new(6, "Chocolate Lava Cake", Category::Dessert),
                Item::new(7, "Broccoli Crowns", Category::Produce),
            ],
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.items)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.items)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        info!("Loaded {} items from {}", catalog.len(), path.display());
        for item in catalog.items.iter().filter(|i| matches!(i.category, Category::Other(_))) {
            debug!("Item {} has unrecognized category {:?}", item.id, item.category.as_str());
        }
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
