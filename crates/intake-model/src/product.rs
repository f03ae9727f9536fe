//! Product record: the catalogue row accepted by the intake pipeline.

use crate::field::{Constraint, FieldKind, FieldRef, FieldSpec, FieldValue};
use crate::schema::RecordSchema;

/// Allowed values of `item`.
pub const ITEM_CHOICES: &[&str] = &["Product", "Service"];
/// Allowed values of `type`.
pub const TYPE_CHOICES: &[&str] = &["Physical", "Non-Physical"];

pub const NAME_MAX_LENGTH: usize = 100;
pub const SKU_MAX_LENGTH: usize = 32;
pub const DESCRIPTION_MAX_LENGTH: usize = 5000;

const ITEM_MESSAGE: &str = "The item type of the row is invalid ({{ value }}). Allowed item types are {{ choices }}.";
const TYPE_MESSAGE: &str =
    "The type of the row is invalid ({{ value }}). Allowed item types are {{ choices }}.";

const PRODUCT_SPECS: &[FieldSpec] = &[
    FieldSpec::new(
        "item",
        FieldKind::Text,
        &[
            Constraint::NotBlank,
            Constraint::Choice {
                choices: ITEM_CHOICES,
                message: ITEM_MESSAGE,
            },
        ],
    ),
    FieldSpec::new(
        "name",
        FieldKind::Text,
        &[Constraint::NotBlank, Constraint::MaxLength(NAME_MAX_LENGTH)],
    ),
    FieldSpec::new(
        "type",
        FieldKind::Text,
        &[
            Constraint::NotBlank,
            Constraint::Choice {
                choices: TYPE_CHOICES,
                message: TYPE_MESSAGE,
            },
        ],
    ),
    FieldSpec::new(
        "sku",
        FieldKind::Text,
        &[Constraint::NotBlank, Constraint::MaxLength(SKU_MAX_LENGTH)],
    ),
    FieldSpec::new("stock", FieldKind::Integer, &[Constraint::NotBlank]),
    FieldSpec::new(
        "price",
        FieldKind::Integer,
        &[Constraint::NotBlank, Constraint::PositiveOrZero],
    ),
    FieldSpec::new("category", FieldKind::Integer, &[Constraint::NotBlank]),
    FieldSpec::new(
        "description",
        FieldKind::Text,
        &[
            Constraint::NotBlank,
            Constraint::MaxLength(DESCRIPTION_MAX_LENGTH),
        ],
    ),
    FieldSpec::new(
        "weight",
        FieldKind::Float,
        &[Constraint::NotBlank, Constraint::PositiveOrZero],
    ),
    FieldSpec::new(
        "width",
        FieldKind::Float,
        &[Constraint::NotBlank, Constraint::PositiveOrZero],
    ),
    FieldSpec::new(
        "height",
        FieldKind::Float,
        &[Constraint::NotBlank, Constraint::PositiveOrZero],
    ),
    FieldSpec::new("visible", FieldKind::Boolean, &[Constraint::NotNull]),
];

/// One product or service row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub item: FieldValue<String>,
    pub name: FieldValue<String>,
    /// Column `type`.
    pub product_type: FieldValue<String>,
    pub sku: FieldValue<String>,
    pub stock: FieldValue<i64>,
    pub price: FieldValue<i64>,
    pub category: FieldValue<i64>,
    pub description: FieldValue<String>,
    pub weight: FieldValue<f64>,
    pub width: FieldValue<f64>,
    pub height: FieldValue<f64>,
    pub visible: FieldValue<bool>,
}

impl RecordSchema for Product {
    const SPECS: &'static [FieldSpec] = PRODUCT_SPECS;

    fn from_cells(cells: &[&str]) -> Self {
        let cell = |index: usize| cells.get(index).copied().unwrap_or_default();
        Self {
            item: FieldValue::from_cell(cell(0)),
            name: FieldValue::from_cell(cell(1)),
            product_type: FieldValue::from_cell(cell(2)),
            sku: FieldValue::from_cell(cell(3)),
            stock: FieldValue::from_cell(cell(4)),
            price: FieldValue::from_cell(cell(5)),
            category: FieldValue::from_cell(cell(6)),
            description: FieldValue::from_cell(cell(7)),
            weight: FieldValue::from_cell(cell(8)),
            width: FieldValue::from_cell(cell(9)),
            height: FieldValue::from_cell(cell(10)),
            visible: FieldValue::from_cell(cell(11)),
        }
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.item.to_cell(),
            self.name.to_cell(),
            self.product_type.to_cell(),
            self.sku.to_cell(),
            self.stock.to_cell(),
            self.price.to_cell(),
            self.category.to_cell(),
            self.description.to_cell(),
            self.weight.to_cell(),
            self.width.to_cell(),
            self.height.to_cell(),
            self.visible.to_cell(),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        let field = match name {
            "item" => FieldRef::Text(&self.item),
            "name" => FieldRef::Text(&self.name),
            "type" => FieldRef::Text(&self.product_type),
            "sku" => FieldRef::Text(&self.sku),
            "stock" => FieldRef::Integer(&self.stock),
            "price" => FieldRef::Integer(&self.price),
            "category" => FieldRef::Integer(&self.category),
            "description" => FieldRef::Text(&self.description),
            "weight" => FieldRef::Float(&self.weight),
            "width" => FieldRef::Float(&self.width),
            "height" => FieldRef::Float(&self.height),
            "visible" => FieldRef::Boolean(&self.visible),
            _ => return None,
        };
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_is_declaration_order() {
        assert_eq!(
            Product::fields(),
            vec![
                "item",
                "name",
                "type",
                "sku",
                "stock",
                "price",
                "category",
                "description",
                "weight",
                "width",
                "height",
                "visible",
            ]
        );
    }

    #[test]
    fn every_spec_resolves_to_a_field_of_matching_kind() {
        let product = Product::from_cells(&[]);
        for spec in Product::SPECS {
            let field = product.field(spec.name).expect("declared field");
            assert_eq!(field.kind(), spec.kind, "{}", spec.name);
        }
        assert!(product.field("colour").is_none());
    }

    #[test]
    fn short_rows_decode_trailing_cells_as_missing() {
        let product = Product::from_cells(&["Product", "Chair"]);
        assert_eq!(product.name, FieldValue::Parsed("Chair".to_string()));
        assert!(product.visible.is_missing());
    }
}
