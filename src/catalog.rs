//! Which item categories each customer segment cares about.

/// Segment name and its preferred categories, most relevant first.
pub const SEGMENT_PREFERENCES: &[(&str, &[&str])] = &[
    (
        "Frozen Meat and Seafood Enthusiasts",
        &["frozen_meat", "seafood"],
    ),
    ("Wellness Seekers", &["wellness_food", "wellness_products"]),
    (
        "Diverse Shoppers",
        &[
            "frozen_meat",
            "seafood",
            "stationery",
            "fruits",
            "vegetables",
            "pet_care",
        ],
    ),
    ("Fresh Produce Lovers", &["fruits", "vegetables"]),
    ("Dairy Aficionados", &["dairy"]),
    (
        "Beauty and Personal Care Enthusiasts",
        &["beauty_and_personal_care"],
    ),
    ("Baby Needs Shoppers", &["baby_needs"]),
];

/// Preferred categories for `segment`; empty when the segment is unknown.
pub fn preferred_categories(segment: &str) -> &'static [&'static str] {
    SEGMENT_PREFERENCES
        .iter()
        .find(|(name, _)| *name == segment)
        .map(|(_, categories)| *categories)
        .unwrap_or(&[])
}
