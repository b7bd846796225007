use dwriter::core::projection::{DataModel, EventListProjection};
use dwriter::core::store::{Addressing, NOT_FOUND_SENTINEL};
use dwriter::models::index_path::IndexPath;

mod common;
use common::{lunch_store, temp_store};

#[test]
fn test_root_child_count_matches_store_count() {
    let (_dir, store) = lunch_store();
    let model = EventListProjection::new(&store);

    assert_eq!(model.child_count(&IndexPath::root()), 2);
    assert_eq!(model.child_count(&IndexPath::row(0)), 0);
    assert_eq!(model.child_count(&IndexPath::from(vec![0, 1])), 0);
}

#[test]
fn test_has_children_follows_child_count() {
    let (_dir, store) = temp_store(Addressing::IdOffset);

    let paths = [
        IndexPath::root(),
        IndexPath::row(0),
        IndexPath::from(vec![1, 2]),
    ];

    {
        let model = EventListProjection::new(&store);
        for p in &paths {
            assert_eq!(model.has_children(p), model.child_count(p) > 0, "{p}");
        }
        assert!(!model.has_children(&IndexPath::root()));
    }

    store.append("t", "x").unwrap();

    let model = EventListProjection::new(&store);
    for p in &paths {
        assert_eq!(model.has_children(p), model.child_count(p) > 0, "{p}");
    }
    assert!(model.has_children(&IndexPath::root()));
    assert!(!model.has_children(&IndexPath::row(0)));
}

#[test]
fn test_data_for_each_path_shape() {
    let (_dir, store) = lunch_store();
    let model = EventListProjection::new(&store);

    assert_eq!(
        model.data(&IndexPath::row(0)),
        "2013-02-14 10:00:00, lunch"
    );
    assert_eq!(
        model.data(&IndexPath::row(1)),
        "2013-02-14 18:30:00, dinner"
    );
    assert_eq!(model.data(&IndexPath::row(5)), NOT_FOUND_SENTINEL);
    assert_eq!(model.data(&IndexPath::root()), "");
    assert_eq!(model.data(&IndexPath::from(vec![0, 0])), "");
}

#[test]
fn test_item_type_is_always_empty() {
    let (_dir, store) = lunch_store();
    let model = EventListProjection::new(&store);

    assert_eq!(model.item_type(&IndexPath::root()), "");
    assert_eq!(model.item_type(&IndexPath::row(0)), "");
    assert_eq!(model.item_type(&IndexPath::from(vec![3, 4, 5])), "");
}

#[test]
fn test_projection_reflects_store_without_caching() {
    let (_dir, store) = temp_store(Addressing::IdOffset);
    let model = EventListProjection::new(&store);

    assert_eq!(model.child_count(&IndexPath::root()), 0);
    assert_eq!(model.data(&IndexPath::row(0)), NOT_FOUND_SENTINEL);

    store.append("t1", "first").unwrap();

    assert_eq!(model.child_count(&IndexPath::root()), 1);
    assert_eq!(model.data(&IndexPath::row(0)), "t1, first");

    store.drop_table().unwrap();

    assert_eq!(model.child_count(&IndexPath::root()), 0);
    assert_eq!(model.data(&IndexPath::row(0)), NOT_FOUND_SENTINEL);
}

#[test]
fn test_try_value_at_distinguishes_missing_from_failure() {
    let (_dir, store) = lunch_store();
    let model = EventListProjection::new(&store);

    let rec = model.try_value_at(&IndexPath::row(0)).unwrap().unwrap();
    assert_eq!(rec.text, "lunch");

    assert!(model.try_value_at(&IndexPath::row(9)).unwrap().is_none());
    assert!(model.try_value_at(&IndexPath::root()).unwrap().is_none());

    store.drop_table().unwrap();
    assert!(model.try_value_at(&IndexPath::row(0)).is_err());
}

#[test]
fn test_rows_renders_every_position() {
    let (_dir, store) = lunch_store();
    let model = EventListProjection::new(&store);

    let rows: Vec<String> = model.rows().collect();
    assert_eq!(
        rows,
        vec![
            "2013-02-14 10:00:00, lunch".to_string(),
            "2013-02-14 18:30:00, dinner".to_string(),
        ]
    );
}
