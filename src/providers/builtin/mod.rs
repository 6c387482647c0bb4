pub mod search_index;
pub mod search_page;
pub mod title;

use dupecheck_provider_api::{Candidate, QueryValues};

/// Keys to hand a full-text backend: the title, or the tags when no title is set.
pub(crate) fn fulltext_keys(values: &QueryValues) -> Option<String> {
	if let Some(title) = values.title.as_deref() {
		return Some(title.to_string());
	}
	let tags = values.tag_list();
	(!tags.is_empty()).then(|| tags.join(" "))
}

/// Whether `candidate` passes the self-exclusion and scope filters in `values`.
pub(crate) fn within_scope(candidate: &Candidate, values: &QueryValues) -> bool {
	if values
		.entity_id
		.as_deref()
		.is_some_and(|entity_id| candidate.is_entity(entity_id))
	{
		return false;
	}
	if values
		.entity_type
		.as_deref()
		.is_some_and(|entity_type| candidate.key.entity_type != entity_type)
	{
		return false;
	}
	values
		.bundle
		.as_deref()
		.is_none_or(|bundle| candidate.key.bundle.as_deref() == Some(bundle))
}
