use crate::catalog::Event;

/// Sentinel that disables the category / registration-type facets.
pub const ALL: &str = "all";

/// Narrows the catalog by free-text query, category and registration-type
/// facets, AND-combined. The text query matches case-insensitively against
/// title, description or location (OR across the three). Input order is
/// preserved; an empty result is a normal outcome.
pub fn filter_events<'a>(
    events: &'a [Event],
    query: &str,
    category: &str,
    registration_type: &str,
) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|event| {
            let matches_search = needle.is_empty()
                || event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle);

            let matches_category = category == ALL || event.category == category;
            let matches_type =
                registration_type == ALL || event.registration_type.as_str() == registration_type;

            matches_search && matches_category && matches_type
        })
        .collect()
}
