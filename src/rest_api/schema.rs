//! # Product Schema
//!
//! Wire shapes for products. Outbound records go through an explicit
//! allow-list projection; anything added to [`Product`] later stays
//! private until it is added here too.

use serde::{Deserialize, Serialize};

use crate::store::{Product, ProductFields, ProductId};

/// Externally visible product representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWire {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

/// Request body for create and update; every field is required
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductInput {
    pub fn into_fields(self) -> ProductFields {
        ProductFields::new(self.name, self.description, self.price, self.quantity)
    }
}

/// Delete confirmation, carrying the removed product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub product: ProductWire,
}

impl DeleteResponse {
    pub fn new(product: &Product) -> Self {
        Self {
            deleted: true,
            product: to_wire(product),
        }
    }
}

/// Project a stored product onto its wire shape.
pub fn to_wire(product: &Product) -> ProductWire {
    ProductWire {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        quantity: product.quantity,
    }
}

/// Project a sequence of products, preserving order.
pub fn to_wire_many(products: &[Product]) -> Vec<ProductWire> {
    products.iter().map(to_wire).collect()
}
