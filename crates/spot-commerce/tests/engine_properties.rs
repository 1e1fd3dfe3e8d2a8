//! Property tests for the cart and catalog engines.

use proptest::prelude::*;
use spot_cache::MemoryStore;
use spot_commerce::prelude::*;
use spot_commerce::search;
use std::collections::HashSet;

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0u32..40,
        1i64..100_000,
        arb_category(),
        0u8..=50,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, cents, category, rating, in_stock, featured)| {
            Product::new(id.to_string(), format!("Item {}", id), Money::usd(cents), category)
                .with_rating(f64::from(rating) / 10.0, 0)
                .with_in_stock(in_stock)
                .with_featured(featured)
        })
}

/// Products with unique IDs.
fn arb_snapshot() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..25).prop_map(|products| {
        let mut seen = HashSet::new();
        products
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect()
    })
}

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize, i64),
    Remove(usize),
    Update(usize, i64),
    Clear,
}

fn arb_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => (0usize..6, -3i64..10).prop_map(|(i, q)| CartOp::Add(i, q)),
        2 => (0usize..6).prop_map(CartOp::Remove),
        2 => (0usize..6, -3i64..10).prop_map(|(i, q)| CartOp::Update(i, q)),
        1 => Just(CartOp::Clear),
    ]
}

fn pool() -> Vec<Product> {
    (0..6)
        .map(|i| Product::new(i.to_string(), format!("P{}", i), Money::usd(199 + i * 250), Category::Home))
        .collect()
}

/// Same products, every other one priced in euros.
fn mixed_pool() -> Vec<Product> {
    pool()
        .into_iter()
        .enumerate()
        .map(|(i, mut p)| {
            if i % 2 == 1 {
                p.price = Money::new(p.price.amount_cents, Currency::EUR);
            }
            p
        })
        .collect()
}

fn apply(engine: &mut CartEngine<MemoryStore>, products: &[Product], op: &CartOp) {
    match op {
        CartOp::Add(i, q) => {
            // refused when the currency differs from the cart's
            let _ = engine.add_item(&products[*i], *q);
        }
        CartOp::Remove(i) => {
            engine.remove_item(&products[*i].id);
        }
        CartOp::Update(i, q) => {
            engine.update_quantity(&products[*i].id, *q);
        }
        CartOp::Clear => engine.clear(),
    }
}

proptest! {
    #[test]
    fn cart_invariants_hold_after_any_sequence(
        ops in prop::collection::vec(arb_op(), 0..40),
        mixed in any::<bool>(),
    ) {
        let products = if mixed { mixed_pool() } else { pool() };
        let store = MemoryStore::new();
        let mut engine = CartEngine::load(store.clone());
        for op in &ops {
            apply(&mut engine, &products, op);
        }

        // at most one line per product, every quantity positive
        let ids: Vec<&ProductId> = engine.items().map(|l| &l.product.id).collect();
        let unique: HashSet<&ProductId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
        prop_assert!(engine.items().all(|l| l.quantity >= 1));
        let currencies: HashSet<Currency> = engine.items().map(|l| l.product.price.currency).collect();
        prop_assert!(currencies.len() <= 1);

        // aggregates match their definitions
        let count: u64 = engine.items().map(|l| u64::from(l.quantity)).sum();
        let cents: i64 = engine
            .items()
            .map(|l| l.product.price.amount_cents * i64::from(l.quantity))
            .sum();
        prop_assert_eq!(engine.item_count(), count);
        prop_assert_eq!(engine.subtotal().amount_cents, cents);

        // the persisted slot reproduces the cart
        let reloaded = CartEngine::load(store);
        prop_assert_eq!(reloaded.cart(), engine.cart());
    }

    #[test]
    fn add_merges(a in 1i64..1000, b in 1i64..1000) {
        let products = pool();
        let product = &products[0];
        let mut engine = CartEngine::load(MemoryStore::new());
        engine.add_item(product, a).unwrap();
        engine.add_item(product, b).unwrap();
        prop_assert_eq!(engine.cart().get(&product.id).map(|l| i64::from(l.quantity)), Some(a + b));
        prop_assert_eq!(engine.cart().len(), 1);
    }

    #[test]
    fn update_replaces(ops in prop::collection::vec(arb_op(), 0..20), q in -5i64..50) {
        let products = pool();
        let mut engine = CartEngine::load(MemoryStore::new());
        for op in &ops {
            apply(&mut engine, &products, op);
        }
        let target = &products[0];
        let was_present = engine.is_in_cart(&target.id);

        engine.update_quantity(&target.id, q);

        let quantity = engine.cart().get(&target.id).map(|l| i64::from(l.quantity));
        if q <= 0 || !was_present {
            prop_assert_eq!(quantity, None);
        } else {
            prop_assert_eq!(quantity, Some(q));
        }
    }

    #[test]
    fn remove_is_idempotent(ops in prop::collection::vec(arb_op(), 0..20), i in 0usize..6) {
        let products = pool();
        let mut engine = CartEngine::load(MemoryStore::new());
        for op in &ops {
            apply(&mut engine, &products, op);
        }
        engine.remove_item(&products[i].id);
        let after_first = engine.cart().clone();
        prop_assert!(engine.remove_item(&products[i].id).is_none());
        prop_assert_eq!(engine.cart(), &after_first);
    }

    #[test]
    fn category_and_stock_filters_commute(
        products in arb_snapshot(),
        selected in prop::collection::btree_set(arb_category(), 0..3),
    ) {
        let slugs: Vec<&str> = selected.iter().map(|c| c.slug()).collect();
        let category_only = QuerySpec::new().with_categories(&slugs);
        let stock_only = QuerySpec::new().in_stock_only(true);
        let both = QuerySpec::new().with_categories(&slugs).in_stock_only(true);

        let category_then_stock: HashSet<&ProductId> = search::query(&products, &category_only)
            .into_iter()
            .filter(|p| p.in_stock)
            .map(|p| &p.id)
            .collect();
        let stock_then_category: HashSet<&ProductId> = search::query(&products, &stock_only)
            .into_iter()
            .filter(|p| search::matches_category(p, &category_only))
            .map(|p| &p.id)
            .collect();
        let combined: HashSet<&ProductId> =
            search::query(&products, &both).into_iter().map(|p| &p.id).collect();

        prop_assert_eq!(&category_then_stock, &stock_then_category);
        prop_assert_eq!(&category_then_stock, &combined);
    }

    #[test]
    fn featured_sort_is_stable(products in arb_snapshot()) {
        let result = search::query(&products, &QuerySpec::default());
        let position = |id: &ProductId| products.iter().position(|p| &p.id == id).unwrap();

        let featured_count = result.iter().take_while(|p| p.featured).count();
        prop_assert!(result[featured_count..].iter().all(|p| !p.featured));

        for group in [&result[..featured_count], &result[featured_count..]] {
            let positions: Vec<usize> = group.iter().map(|p| position(&p.id)).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn query_is_deterministic_and_a_subset(
        products in arb_snapshot(),
        term in "[a-z ]{0,3}",
        sort in prop::sample::select(SortKey::ALL.to_vec()),
    ) {
        let spec = QuerySpec::new().with_search(term).with_sort(sort);
        let first: Vec<&ProductId> = search::query(&products, &spec).iter().map(|p| &p.id).collect();
        let second: Vec<&ProductId> = search::query(&products, &spec).iter().map(|p| &p.id).collect();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= products.len());
    }
}
