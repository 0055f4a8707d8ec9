//! Filter conjunction: a combined filter passes iff every part passes.

use proptest::prelude::*;

use super::strategies::courses;
use edusearch::{CourseFilter, PriceRange, RecordFilter};

fn category_filter() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("Mathematics".to_string())),
        Just(Some("Science".to_string())),
    ]
}

fn level_filter() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("beginner".to_string())),
        Just(Some("advanced".to_string())),
    ]
}

fn range_filter() -> impl Strategy<Value = Option<PriceRange>> {
    prop_oneof![
        Just(None),
        (0u32..100, 0u32..100).prop_map(|(a, b)| Some(PriceRange::new(f64::from(a), f64::from(b)))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_course_filter_is_conjunction(
        courses in courses(),
        category in category_filter(),
        level in level_filter(),
        price_range in range_filter(),
    ) {
        let combined = CourseFilter { category: category.clone(), level: level.clone(), price_range };
        let parts = [
            CourseFilter { category, ..Default::default() },
            CourseFilter { level, ..Default::default() },
            CourseFilter { price_range, ..Default::default() },
        ];

        for course in &courses {
            let each = parts.iter().all(|f| f.matches(course));
            prop_assert_eq!(combined.matches(course), each);
        }
    }

    #[test]
    fn prop_empty_filter_matches_everything(courses in courses()) {
        let filter = CourseFilter::default();
        prop_assert!(filter.is_empty());
        prop_assert!(courses.iter().all(|c| filter.matches(c)));
    }
}
