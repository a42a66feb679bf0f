use super::{StoreError, StoreResult};

/// Store-assigned product identifier (SQLite rowid)
pub type ProductId = i64;

/// Longest accepted `name`, in characters
pub const NAME_MAX_CHARS: usize = 100;

/// Longest accepted `description`, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// A stored product row
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

/// The mutable fields of a product, written together on create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Check the column bounds before touching the database.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.chars().count() > NAME_MAX_CHARS {
            return Err(StoreError::InvalidField(format!(
                "name must be at most {NAME_MAX_CHARS} characters"
            )));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(StoreError::InvalidField(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
        if !self.price.is_finite() {
            return Err(StoreError::InvalidField("price must be a finite number".to_string()));
        }
        Ok(())
    }

    /// Attach an id, producing the stored form.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
