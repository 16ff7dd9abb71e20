//! Category partition and ordering.
//!
//! Splits the dataset into the featured and archive listings, each sorted
//! ascending by `order`. The sort is stable, so records sharing an `order`
//! keep their input sequence.

use super::types::{Category, ProjectRecord};

/// Borrowed view of the dataset split by category.
#[derive(Debug, Clone, Default)]
pub struct Partitioned<'a> {
    pub featured: Vec<&'a ProjectRecord>,
    pub archive: Vec<&'a ProjectRecord>,
}

impl Partitioned<'_> {
    /// Total records across both listings.
    pub fn len(&self) -> usize {
        self.featured.len() + self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `projects` by category and sort each listing by `order`.
pub fn partition_by_category(projects: &[ProjectRecord]) -> Partitioned<'_> {
    let mut partitioned = Partitioned::default();

    for project in projects {
        match project.category {
            Category::Featured => partitioned.featured.push(project),
            Category::Archive => partitioned.archive.push(project),
        }
    }

    // slice::sort_by_key is stable
    partitioned.featured.sort_by_key(|p| p.order);
    partitioned.archive.sort_by_key(|p| p.order);

    partitioned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, order: i64, title: &str) -> ProjectRecord {
        ProjectRecord::new(category, order, title)
    }

    fn titles(list: &[&ProjectRecord]) -> Vec<String> {
        list.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let projects = vec![
            record(Category::Featured, 1, "f1"),
            record(Category::Archive, 1, "a1"),
            record(Category::Featured, 2, "f2"),
            record(Category::Archive, 2, "a2"),
            record(Category::Archive, 3, "a3"),
        ];

        let parts = partition_by_category(&projects);
        assert_eq!(parts.len(), projects.len());
        assert!(parts.featured.iter().all(|p| p.category == Category::Featured));
        assert!(parts.archive.iter().all(|p| p.category == Category::Archive));
        assert_eq!(titles(&parts.featured), vec!["f1", "f2"]);
        assert_eq!(titles(&parts.archive), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn test_sort_ascending_by_order() {
        let projects = vec![
            record(Category::Featured, 10, "ten"),
            record(Category::Featured, -1, "minus"),
            record(Category::Featured, 4, "four"),
        ];

        let parts = partition_by_category(&projects);
        assert_eq!(titles(&parts.featured), vec!["minus", "four", "ten"]);
    }

    #[test]
    fn test_equal_order_keeps_input_sequence() {
        let projects = vec![
            record(Category::Archive, 2, "first"),
            record(Category::Archive, 1, "lead"),
            record(Category::Archive, 2, "second"),
            record(Category::Archive, 2, "third"),
        ];

        let parts = partition_by_category(&projects);
        assert_eq!(
            titles(&parts.archive),
            vec!["lead", "first", "second", "third"]
        );
    }

    #[test]
    fn test_input_is_not_reordered() {
        let projects = vec![
            record(Category::Featured, 2, "b"),
            record(Category::Featured, 1, "a"),
        ];
        let before = projects.clone();

        let _ = partition_by_category(&projects);
        assert_eq!(projects, before);
    }

    #[test]
    fn test_empty_input() {
        let parts = partition_by_category(&[]);
        assert!(parts.is_empty());
    }
}
