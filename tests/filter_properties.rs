use chrono::Utc;
use nestwise_homes::models::{Property, PropertyStatus, PropertyType};
use nestwise_homes::search::{filter, suggest, Choice, FilterSpec};
use proptest::prelude::*;

const CITIES: [&str; 4] = ["Dhaka", "Chittagong", "Sylhet", "Khulna"];
const WORDS: [&str; 5] = ["Luxury", "Modern", "Family", "Cozy", "Office"];

fn arb_type() -> impl Strategy<Value = PropertyType> {
    prop::sample::select(PropertyType::ALL.to_vec())
}

fn arb_property() -> impl Strategy<Value = Property> {
    (
        0u32..10_000,
        prop::sample::select(WORDS.to_vec()),
        prop::sample::select(CITIES.to_vec()),
        arb_type(),
        0u64..1_000_000,
        prop::option::of(0u32..6),
        prop::option::of((0u32..8).prop_map(|h| h as f32 / 2.0)),
    )
        .prop_map(|(n, word, city, kind, price, bedrooms, bathrooms)| Property {
            id: format!("p{n}"),
            title: format!("{word} {kind}"),
            description: format!("A {} place", word.to_lowercase()),
            property_type: kind,
            address: format!("{n} Road"),
            city: city.to_string(),
            state: city.to_string(),
            zip_code: None,
            price,
            size_sqft: None,
            bedrooms,
            bathrooms,
            status: PropertyStatus::Available,
            image_urls: vec![],
            is_featured: false,
            is_approved: true,
            views_count: 0,
            owner_id: "owner".to_string(),
            agent_id: None,
            amenities: vec![],
            created_at: Utc::now(),
        })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::option::of(prop::sample::select(vec!["luxury", "MODERN", "road", "zzz", ""])),
        prop::option::of(0u64..1_000_000),
        prop::option::of(0u64..1_000_000),
        prop::option::of(arb_type()),
        prop::option::of(prop::sample::select(vec!["dhaka", "SYL", "o", ""])),
        prop::option::of(0u32..6),
        prop::option::of((0u32..8).prop_map(|h| h as f32 / 2.0)),
    )
        .prop_map(|(search, min, max, kind, city, bedrooms, bathrooms)| FilterSpec {
            search: search.unwrap_or_default().to_string(),
            min_price: min,
            max_price: max,
            property_type: Choice::from(kind),
            city: city.unwrap_or_default().to_string(),
            bedrooms: Choice::from(bedrooms),
            bathrooms: Choice::from(bathrooms),
        })
}

proptest! {
    #[test]
    fn result_is_an_ordered_subset(props in prop::collection::vec(arb_property(), 0..20), spec in arb_spec()) {
        let result = filter(&props, &spec);
        // Walk the input once: every output element must appear, in order
        let mut remaining = props.iter();
        for kept in &result {
            prop_assert!(remaining.any(|p| p == kept));
        }
    }

    #[test]
    fn empty_spec_is_identity(props in prop::collection::vec(arb_property(), 0..20)) {
        prop_assert_eq!(filter(&props, &FilterSpec::default()), props);
    }

    #[test]
    fn filtering_is_idempotent(props in prop::collection::vec(arb_property(), 0..20), spec in arb_spec()) {
        let once = filter(&props, &spec);
        prop_assert_eq!(filter(&once, &spec), once);
    }

    #[test]
    fn raising_min_price_never_grows_result(
        props in prop::collection::vec(arb_property(), 0..20),
        spec in arb_spec(),
        bump in 0u64..500_000,
    ) {
        let base = filter(&props, &spec).len();
        let mut tighter = spec.clone();
        tighter.min_price = Some(spec.min_price.unwrap_or(0) + bump);
        prop_assert!(filter(&props, &tighter).len() <= base);
    }

    #[test]
    fn lowering_max_price_never_grows_result(
        props in prop::collection::vec(arb_property(), 0..20),
        spec in arb_spec(),
        cut in 0u64..500_000,
    ) {
        let base = filter(&props, &spec).len();
        let mut tighter = spec.clone();
        tighter.max_price = Some(spec.max_price.unwrap_or(1_000_000).saturating_sub(cut));
        prop_assert!(filter(&props, &tighter).len() <= base);
    }

    #[test]
    fn exact_bedrooms_only_keep_equal_counts(
        props in prop::collection::vec(arb_property(), 0..20),
        wanted in 0u32..6,
    ) {
        let spec = FilterSpec::new().bedrooms(wanted);
        for p in filter(&props, &spec) {
            prop_assert_eq!(p.bedrooms, Some(wanted));
        }
        let expected = props.iter().filter(|p| p.bedrooms == Some(wanted)).count();
        prop_assert_eq!(filter(&props, &spec).len(), expected);
    }

    #[test]
    fn city_match_ignores_case(props in prop::collection::vec(arb_property(), 0..20)) {
        let lower = filter(&props, &FilterSpec::new().city("dhaka"));
        let upper = filter(&props, &FilterSpec::new().city("DHAKA"));
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(lower.len(), props.iter().filter(|p| p.city == "Dhaka").count());
    }

    #[test]
    fn suggestions_are_capped(props in prop::collection::vec(arb_property(), 0..30), term in "[a-z]{0,4}") {
        let hits = suggest(&props, &term);
        prop_assert!(hits.len() <= 8);
        if term.len() < 2 {
            prop_assert!(hits.is_empty());
        }
    }
}
