use super::query::*;
use super::test_support::{ids, make_designer};
use crate::db::Catalog;
use crate::models::{Designer, Price};

fn seed() -> Catalog {
    Catalog::seed().unwrap()
}

#[test]
fn test_filter_by_text_matches_any_field() {
    let catalog = seed();
    let active = catalog.active();

    // name
    assert_eq!(ids(&filter_by_text(&active, "PRIYA")), vec![3]);
    // title
    assert_eq!(ids(&filter_by_text(&active, "luxury space")), vec![2]);
    // description
    assert_eq!(ids(&filter_by_text(&active, "recycled")), vec![5]);
    // tag
    assert_eq!(ids(&filter_by_text(&active, "smart homes")), vec![1]);
    // shared tag keeps catalog order
    assert_eq!(ids(&filter_by_text(&active, "sustainable")), vec![1, 5]);
}

#[test]
fn test_filter_by_keywords_ignores_tags() {
    let catalog = seed();
    let active = catalog.active();
    assert!(filter_by_keywords(&active, "smart homes").is_empty());
    assert_eq!(ids(&filter_by_keywords(&active, "smart home")), vec![1]);
}

#[test]
fn test_filter_by_location() {
    let catalog = seed();
    let active = catalog.active();
    assert_eq!(ids(&filter_by_location(&active, "delhi")), vec![2]);
    assert_eq!(filter_by_location(&active, "india").len(), 5);
    assert!(filter_by_location(&active, "london").is_empty());
}

#[test]
fn test_filter_by_tag_is_substring() {
    let catalog = seed();
    let active = catalog.active();
    assert_eq!(ids(&filter_by_tag(&active, "eco")), vec![5]);
    assert_eq!(ids(&filter_by_tag(&active, "LUX")), vec![2]);
}

#[test]
fn test_filter_by_any_tag_is_exact() {
    let catalog = seed();
    let active = catalog.active();
    let tags = vec!["luxury".to_string(), "Minimalist".to_string()];
    assert_eq!(ids(&filter_by_any_tag(&active, &tags)), vec![2, 3]);
    assert!(filter_by_any_tag(&active, &["lux".to_string()]).is_empty());
}

#[test]
fn test_filter_by_min_rating_inclusive() {
    let catalog = seed();
    let active = catalog.active();
    assert_eq!(ids(&filter_by_min_rating(&active, 4.8)), vec![1, 2, 5]);
    assert_eq!(ids(&filter_by_min_rating(&active, 4.9)), vec![2]);
}

#[test]
fn test_filter_by_max_price_on_sample_data() {
    let catalog = seed();
    let active = catalog.active();
    let result = filter_by_max_price(&active, 2500);
    let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
    assert!(names.contains(&"Sarah Johnson"));
    assert!(!names.contains(&"Rajesh Patel"));
    assert_eq!(ids(&result), vec![1, 3]);
}

#[test]
fn test_filter_by_price_range_defaults() {
    let catalog = seed();
    let active = catalog.active();
    assert_eq!(filter_by_price_range(&active, None, None).len(), 5);
    assert_eq!(ids(&filter_by_price_range(&active, Some(2600.0), None)), vec![2, 4, 5]);
    assert_eq!(ids(&filter_by_price_range(&active, None, Some(2200.0))), vec![3]);
    assert_eq!(
        ids(&filter_by_price_range(&active, Some(2500.0), Some(2800.0))),
        vec![1, 4, 5]
    );
}

#[test]
fn test_sort_field_parse_falls_back_to_name() {
    assert_eq!(SortField::parse_lenient("rating"), SortField::Rating);
    assert_eq!(SortField::parse_lenient("price"), SortField::Price);
    assert_eq!(SortField::parse_lenient("projects"), SortField::Projects);
    assert_eq!(SortField::parse_lenient("created_at"), SortField::Name);
    assert_eq!(SortField::parse_lenient(""), SortField::Name);
}

#[test]
fn test_sort_order_parse() {
    assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse_lenient("DESC"), SortOrder::Desc);
    assert_eq!(SortOrder::parse_lenient("descending"), SortOrder::Asc);
    assert_eq!(SortOrder::parse_lenient("asc"), SortOrder::Asc);
}

#[test]
fn test_sort_by_each_field() {
    let catalog = seed();
    let active = catalog.active();

    let by_name = sort_by(active.clone(), SortField::Name, SortOrder::Asc);
    assert_eq!(ids(&by_name), vec![4, 5, 3, 2, 1]);

    let by_price = sort_by(active.clone(), SortField::Price, SortOrder::Desc);
    assert_eq!(ids(&by_price), vec![2, 4, 5, 1, 3]);

    let by_projects = sort_by(active.clone(), SortField::Projects, SortOrder::Asc);
    assert_eq!(ids(&by_projects), vec![3, 1, 5, 4, 2]);
}

#[test]
fn test_sort_by_rating_desc_is_stable() {
    let catalog = seed();
    // Sarah (1) and Kavya (5) both have 4.8
    let sorted = sort_by(catalog.active(), SortField::Rating, SortOrder::Desc);
    assert_eq!(ids(&sorted), vec![2, 1, 5, 3, 4]);

    let sorted = sort_by(catalog.active(), SortField::Rating, SortOrder::Asc);
    assert_eq!(ids(&sorted), vec![4, 3, 1, 5, 2]);
}

#[test]
fn test_sort_by_name_case_insensitive() {
    let a = make_designer(1, "beta");
    let b = make_designer(2, "Alpha");
    let c = make_designer(3, "ALPHA");
    let view: Vec<&Designer> = vec![&a, &b, &c];
    assert_eq!(ids(&sort_by(view, SortField::Name, SortOrder::Asc)), vec![2, 3, 1]);
}

#[test]
fn test_filters_apply_in_sequence() {
    let catalog = seed();
    let filters = DesignerFilters {
        search: Some("design".to_string()),
        location: Some("india".to_string()),
        tag: None,
        min_rating: Some(4.7),
        max_price: Some(2600),
    };
    assert_eq!(ids(&filters.apply(&catalog.active())), vec![1, 3, 5]);
}

#[test]
fn test_default_filters_keep_everything() {
    let catalog = seed();
    assert_eq!(DesignerFilters::default().apply(&catalog.active()).len(), 5);
}

#[test]
fn test_filters_on_empty_view() {
    let empty: Vec<&Designer> = vec![];
    assert!(filter_by_text(&empty, "x").is_empty());
    assert!(sort_by(empty, SortField::Price, SortOrder::Desc).is_empty());
}

#[test]
fn test_price_filter_uses_typed_amount() {
    let cheap = Designer {
        price: Price::new("$", 999),
        ..make_designer(1, "Cheap")
    };
    let dear = Designer {
        price: Price::new("$", 12_000),
        ..make_designer(2, "Dear")
    };
    let view = vec![&cheap, &dear];
    assert_eq!(ids(&filter_by_max_price(&view, 1000)), vec![1]);
}
