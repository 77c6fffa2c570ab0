use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Teclado",
    "price": 12.5,
    "description": "Teclado gamer"
}))]
pub struct Product {
    /// Assigned by the store, never reused
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl Product {
    pub fn from_input(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            description: input.description,
        }
    }

    /// Overwrite every mutable field.
    pub fn replace(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.description = input.description;
    }
}

/// Request body for both create and update; all fields are required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Teclado",
    "price": 12.5,
    "description": "Teclado gamer"
}))]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Body returned by a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub const DELETED: &'static str = "Product deleted successfully";

    pub fn deleted() -> Self {
        Self {
            message: Self::DELETED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> ProductInput {
        ProductInput {
            name: "Teclado".to_string(),
            price: 12.5,
            description: "Teclado gamer".to_string(),
        }
    }

    #[test]
    fn test_from_input_keeps_fields() {
        let product = Product::from_input(7, keyboard());
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Teclado");
        assert_eq!(product.price, 12.5);
        assert_eq!(product.description, "Teclado gamer");
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut product = Product::from_input(3, keyboard());
        product.replace(ProductInput {
            name: "Mouse".to_string(),
            price: 5.0,
            description: "Mouse sem fio".to_string(),
        });
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.price, 5.0);
    }

    #[test]
    fn test_input_field_names_are_case_sensitive() {
        let parsed: Result<ProductInput, _> = serde_json::from_str(
            r#"{"Name":"Teclado","Price":12.5,"Description":"Teclado gamer"}"#,
        );
        assert!(parsed.is_err());
    }
}
