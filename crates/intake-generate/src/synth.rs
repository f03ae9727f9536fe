//! Random product rows.

use intake_model::{FieldValue, ITEM_CHOICES, Product, TYPE_CHOICES};
use rand::Rng;

const DESCRIPTION_HEAD: &str =
    "Lorem Ipsum is simply dummy text of the printing and typesetting industry. ID = ";
const DESCRIPTION_TAIL: &str = ". Lorem Ipsum has been the industry's standard dummy text ever \
since the 1500s, when an unknown printer took a galley of type and scrambled it to make a type \
specimen book. It has survived not only five centuries, but also the leap into electronic \
typesetting, remaining essentially unchanged. It was popularised in the 1960s with the release of \
Letraset sheets containing Lorem Ipsum passages, and more recently with desktop publishing \
software like Aldus PageMaker including versions of Lorem Ipsum.";

/// Fixed sample description embedding `id`.
pub fn description(id: u64) -> String {
    format!("{DESCRIPTION_HEAD}{id}{DESCRIPTION_TAIL}")
}

/// Build the synthetic product with identifier `id`.
///
/// Every generated product satisfies the product constraints.
pub fn synthesize<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Product {
    let item = pick(rng, ITEM_CHOICES);
    let product_type = pick(rng, TYPE_CHOICES);
    Product {
        item: FieldValue::Parsed(item.to_string()),
        name: FieldValue::Parsed(format!("{item} Sample {id}")),
        product_type: FieldValue::Parsed(product_type.to_string()),
        sku: FieldValue::Parsed(format!("TY-{id}")),
        stock: FieldValue::Parsed(rng.gen_range(0..=100)),
        price: FieldValue::Parsed(rng.gen_range(0..=1000)),
        category: FieldValue::Parsed(rng.gen_range(0..=50)),
        description: FieldValue::Parsed(description(id)),
        weight: FieldValue::Parsed(tenths(rng, 100)),
        width: FieldValue::Parsed(tenths(rng, 50)),
        height: FieldValue::Parsed(tenths(rng, 50)),
        visible: FieldValue::Parsed(rng.gen_bool(0.5)),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices[rng.gen_range(0..choices.len())]
}

// 0.1 up to max / 10, one decimal.
fn tenths<R: Rng + ?Sized>(rng: &mut R, max: u32) -> f64 {
    f64::from(rng.gen_range(1..=max)) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::RecordSchema;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn identifiers_flow_into_text_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let product = synthesize(42, &mut rng);
        let item = product.item.parsed().unwrap().clone();
        assert_eq!(product.name, FieldValue::Parsed(format!("{item} Sample 42")));
        assert_eq!(product.sku, FieldValue::Parsed("TY-42".to_string()));
        assert!(
            product
                .description
                .parsed()
                .unwrap()
                .contains("industry. ID = 42. Lorem")
        );
    }

    #[test]
    fn numeric_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for id in 1..500 {
            let product = synthesize(id, &mut rng);
            assert!((0..=100).contains(product.stock.parsed().unwrap()));
            assert!((0..=1000).contains(product.price.parsed().unwrap()));
            assert!((0..=50).contains(product.category.parsed().unwrap()));
            let weight = *product.weight.parsed().unwrap();
            assert!((0.1..=10.0).contains(&weight), "{weight}");
            let width = *product.width.parsed().unwrap();
            assert!((0.1..=5.0).contains(&width), "{width}");
        }
    }

    #[test]
    fn cells_use_upper_case_booleans() {
        let mut rng = StdRng::seed_from_u64(3);
        let cells = synthesize(1, &mut rng).to_cells();
        assert_eq!(cells.len(), 12);
        assert!(cells[11] == "TRUE" || cells[11] == "FALSE");
    }

    #[test]
    fn same_seed_same_rows() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        for id in 1..20 {
            assert_eq!(synthesize(id, &mut first), synthesize(id, &mut second));
        }
    }
}
