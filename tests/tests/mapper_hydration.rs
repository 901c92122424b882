use pretty_assertions::assert_eq;
use tests::prelude::*;

fn product(product_id: i64, label: &str, category_id: i64, price: f64) -> Product {
    Product {
        product_id,
        label: label.to_string(),
        category_id,
        price,
    }
}

fn find_all_returns_every_row_in_order(test: &mut DbTest) {
    let (mut products, _) = test.mappers();

    let all = products
        .find_all(&Criteria::new().order_by(r#""productId""#))
        .unwrap();

    assert_eq!(
        all,
        [
            product(1, "apple", 1, 0.15),
            product(2, "pineapple", 1, 0.95),
            product(3, "banana", 1, 0.2),
            product(4, "carrot", 2, 0.45),
            product(5, "potato", 2, 0.3),
        ]
    );
}

fn each_row_is_a_new_instance(test: &mut DbTest) {
    let (mut products, _) = test.mappers();

    let mut first = products.find(1).unwrap();
    let second = products.find(1).unwrap();

    first[0].label = "changed".to_string();
    assert_eq!(second[0].label, "apple");
}

fn find_by_category(test: &mut DbTest) {
    let (mut products, mut categories) = test.mappers();

    let vegetable = categories.find_by("category", "vegetable").unwrap();
    assert_eq!(vegetable.len(), 1);

    let vegetables = products
        .find_by("categoryId", vegetable[0].category_id)
        .unwrap();
    assert_eq!(
        vegetables,
        [product(4, "carrot", 2, 0.45), product(5, "potato", 2, 0.3)]
    );
    assert!(vegetables.iter().all(|product| product.category_id == 2));
}

fn update_round_trip(test: &mut DbTest) {
    let (mut products, _) = test.mappers();
    let apple = Criteria::new().filter(r#""label" = 'apple'"#);

    let mut model = Product::default();
    assert!(products.find_row(&mut model, &apple).unwrap());
    assert_eq!(model.price, 0.15);

    products
        .update(r#""price" = 0.24"#, Some(r#""label" = 'apple'"#))
        .unwrap();
    assert!(products.find_row(&mut model, &apple).unwrap());
    assert_eq!(model.price, 0.24);

    products
        .update(r#""price" = 0.15"#, Some(r#""label" = 'apple'"#))
        .unwrap();
    assert!(products.find_row(&mut model, &apple).unwrap());
    assert_eq!(model, product(1, "apple", 1, 0.15));
}

fn delete_and_reinsert(test: &mut DbTest) {
    let (mut products, _) = test.mappers();
    let pineapple = Criteria::new().filter(r#""label" = 'pineapple'"#);

    assert_eq!(
        products.delete(Some(r#""label" = 'pineapple'"#)).unwrap(),
        1
    );

    let remaining = products.find_all(&Criteria::new()).unwrap();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|product| product.label != "pineapple"));

    products
        .insert(r#""label", "categoryId", "price""#, "'pineapple', 1, 0.95")
        .unwrap();

    let restored = products.find_all(&pineapple).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].category_id, 1);
    assert_eq!(restored[0].price, 0.95);
    assert_ne!(restored[0].product_id, 2);
}

fn find_row_without_match_leaves_model_untouched(test: &mut DbTest) {
    let (_, mut categories) = test.mappers();

    let mut model = Category {
        category_id: 7,
        category: "untouched".to_string(),
    };

    let found = categories
        .find_row(&mut model, &Criteria::new().filter(r#""category" = 'grain'"#))
        .unwrap();

    assert!(!found);
    assert_eq!(model.category_id, 7);
    assert_eq!(model.category, "untouched");
}

fn unbound_mapper_and_gateway(test: &mut DbTest) {
    let mut mapper = Mapper::<Product>::unbound();
    assert!(mapper.find_all(&Criteria::new()).unwrap_err().is_invalid_state());

    mapper.set_db_table(DbTable::unbound());
    let err = mapper.find(1).unwrap_err();
    assert!(err.is_invalid_state());

    // Binding a real gateway makes the mapper usable.
    mapper.set_db_table(test.db_table());
    assert_eq!(mapper.find(1).unwrap().len(), 1);
}

tests!(
    find_all_returns_every_row_in_order,
    each_row_is_a_new_instance,
    find_by_category,
    update_round_trip,
    delete_and_reinsert,
    find_row_without_match_leaves_model_untouched,
    unbound_mapper_and_gateway,
);
