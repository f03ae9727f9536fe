//! Integration tests for the record model.

use intake_model::{FieldValue, Product, RecordSchema};

fn valid_cells() -> Vec<&'static str> {
    vec![
        "Product",
        "Product Sample 1",
        "Physical",
        "TY-1",
        "10",
        "250",
        "3",
        "A sturdy chair.",
        "4.5",
        "2.1",
        "1.2",
        "TRUE",
    ]
}

#[test]
fn cells_round_trip_through_product() {
    let product = Product::from_cells(&valid_cells());

    assert_eq!(product.stock, FieldValue::Parsed(10));
    assert_eq!(product.weight, FieldValue::Parsed(4.5));
    assert_eq!(product.visible, FieldValue::Parsed(true));
    assert_eq!(product.to_cells(), valid_cells());
}

#[test]
fn unparsable_cells_survive_encoding() {
    let mut cells = valid_cells();
    cells[5] = "cheap";
    let product = Product::from_cells(&cells);

    assert_eq!(product.price, FieldValue::Unparsable("cheap".to_string()));
    assert_eq!(product.to_cells()[5], "cheap");
}

#[test]
fn joined_fields_is_comma_separated_header() {
    assert_eq!(
        Product::joined_fields(),
        "item,name,type,sku,stock,price,category,description,weight,width,height,visible"
    );
}
