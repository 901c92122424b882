use pretty_assertions::assert_eq;
use tests::prelude::*;

fn labels(rows: &[tablegate::Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.get_as::<String>("label").unwrap())
        .collect()
}

fn find_by_primary_key(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    let rows = products.find(1).unwrap();
    assert_eq!(labels(&rows), ["apple"]);
    assert_eq!(rows[0].get_as::<f64>("price").unwrap(), 0.15);

    assert!(products.find(999).unwrap().is_empty());
}

fn find_by_column(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    let rows = products.find_by("categoryId", 2).unwrap();
    assert_eq!(labels(&rows), ["carrot", "potato"]);

    // The value is bound, never spliced into the statement.
    let rows = products.find_by("label", "apple' OR '1' = '1").unwrap();
    assert!(rows.is_empty());
}

fn find_all_with_criteria(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    let rows = products.find_all(&Criteria::new()).unwrap();
    assert_eq!(labels(&rows), ["apple", "pineapple", "banana", "carrot", "potato"]);

    let criteria = Criteria::new()
        .filter(r#""price" < 0.4"#)
        .order_by(r#""price" DESC"#);
    let rows = products.find_all(&criteria).unwrap();
    assert_eq!(labels(&rows), ["potato", "banana", "apple"]);

    let criteria = Criteria::new().order_by(r#""productId""#).limit(2);
    assert_eq!(labels(&products.find_all(&criteria).unwrap()), ["apple", "pineapple"]);

    let criteria = Criteria::new().order_by(r#""productId""#).limit(2).offset(3);
    assert_eq!(labels(&products.find_all(&criteria).unwrap()), ["carrot", "potato"]);
}

fn find_row_first_match_or_none(test: &mut DbTest) {
    let mut categories = test.db_table::<CategoryTable>();

    let row = categories
        .find_row(&Criteria::new().filter(r#""category" = 'vegetable'"#))
        .unwrap()
        .unwrap();
    assert_eq!(row.get_as::<i64>("categoryId").unwrap(), 2);

    let row = categories
        .find_row(&Criteria::new().order_by(r#""categoryId" DESC"#))
        .unwrap()
        .unwrap();
    assert_eq!(row.get_as::<String>("category").unwrap(), "vegetable");

    let row = categories
        .find_row(&Criteria::new().filter(r#""category" = 'grain'"#))
        .unwrap();
    assert!(row.is_none());
}

fn writes_report_affected_rows(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    let updated = products
        .update(r#""price" = "price" * 2"#, Some(r#""categoryId" = 2"#))
        .unwrap();
    assert_eq!(updated, 2);

    let inserted = products
        .insert(r#""label", "categoryId", "price""#, "'leek', 2, 0.6")
        .unwrap();
    assert_eq!(inserted, 1);

    let deleted = products.delete(Some(r#""categoryId" = 2"#)).unwrap();
    assert_eq!(deleted, 3);

    assert_eq!(products.delete(Some(r#""label" = 'durian'"#)).unwrap(), 0);
}

fn delete_without_filter_empties_table(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    assert_eq!(products.delete(None).unwrap(), 5);
    assert!(products.find_all(&Criteria::new()).unwrap().is_empty());
}

fn gateways_share_the_database(test: &mut DbTest) {
    let mut writer = test.db_table::<ProductTable>();
    let mut reader = test.db_table::<ProductTable>();

    writer
        .update(r#""price" = 0.99"#, Some(r#""label" = 'banana'"#))
        .unwrap();

    let rows = reader.find_by("label", "banana").unwrap();
    assert_eq!(rows[0].get_as::<f64>("price").unwrap(), 0.99);
}

fn driver_errors_surface(test: &mut DbTest) {
    let mut products = test.db_table::<ProductTable>();

    let err = products
        .find_all(&Criteria::new().filter("colour = 'red'"))
        .unwrap_err();
    assert!(err.is_driver(), "{err}");

    // The gateway stays usable afterwards.
    assert_eq!(products.find(1).unwrap().len(), 1);
}

tests!(
    find_by_primary_key,
    find_by_column,
    find_all_with_criteria,
    find_row_first_match_or_none,
    writes_report_affected_rows,
    delete_without_filter_empties_table,
    gateways_share_the_database,
    driver_errors_surface,
);
