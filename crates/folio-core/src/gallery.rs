//! Category filtering for the project gallery.

use crate::content::Project;

/// Pseudo-category that selects every project.
pub const ALL_CATEGORY: &str = "All";

/// Projects whose category equals `category`, in their original order.
///
/// `"All"` returns the full list unchanged. Matching is exact - no case
/// folding, no partial matches. Filtering is pure and idempotent; an
/// unknown label simply yields an empty list.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    if category == ALL_CATEGORY {
        projects.iter().collect()
    } else {
        projects.iter().filter(|p| p.category == category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_all_returns_full_list_in_order() {
        let filtered = filter_projects(PROJECTS, ALL_CATEGORY);
        assert_eq!(filtered.len(), PROJECTS.len());
        for (kept, original) in filtered.iter().zip(PROJECTS) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_backend_selects_exactly_the_banking_api() {
        let filtered = filter_projects(PROJECTS, "Backend");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Banking API");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        for category in crate::content::CATEGORIES {
            let once = filter_projects(PROJECTS, category);
            let owned: Vec<Project> = once.iter().map(|p| **p).collect();
            let twice = filter_projects(&owned, category);
            assert_eq!(once.len(), twice.len(), "category {category}");
            for (a, b) in once.iter().zip(&twice) {
                assert_eq!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_no_case_normalization() {
        assert!(filter_projects(PROJECTS, "backend").is_empty());
    }

    #[test]
    fn test_unknown_label_yields_empty() {
        assert!(filter_projects(PROJECTS, "Machine Learning").is_empty());
    }
}
