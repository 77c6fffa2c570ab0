use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Product, ProductInput};

/// Sea-ORM Entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// OpenAPI tag shared by every product route
pub const TAG: &str = "products";

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
        }
    }
}

/// Insert form: the id is left to the `SERIAL` column.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            description: Set(input.description),
        }
    }
}

impl ActiveModel {
    /// Update form: every column is overwritten for the row with `id`.
    pub fn replacing(id: i32, input: ProductInput) -> Self {
        ActiveModel {
            id: Set(id),
            ..input.into()
        }
    }
}
