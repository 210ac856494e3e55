use crate::models::Course;

pub const ALL_CATEGORIES: &str = "all";

/// Search term and category selected on the courses page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_search(course) && self.matches_category(course)
    }

    fn matches_search(&self, course: &Course) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        course.title.to_lowercase().contains(&needle)
            || course.instructor.to_lowercase().contains(&needle)
            || course.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, course: &Course) -> bool {
        self.category == ALL_CATEGORIES || self.category == course.category
    }

    /// Matching courses in their original order.
    pub fn apply<'a, I>(&self, courses: I) -> Vec<&'a Course>
    where
        I: IntoIterator<Item = &'a Course>,
    {
        courses.into_iter().filter(|course| self.matches(course)).collect()
    }

    pub fn view<'a>(&self, courses: &'a [Course]) -> CatalogView<'a> {
        CatalogView {
            shown: self.apply(courses),
            total: courses.len(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub shown: Vec<&'a Course>,
    pub total: usize,
}

impl CatalogView<'_> {
    /// No course survived the filters. There is no separate loading state.
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} courses", self.shown.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn filter(search: &str, category: &str) -> CatalogFilter {
        CatalogFilter {
            search: search.to_string(),
            category: category.to_string(),
        }
    }

    fn titles(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn default_filter_returns_everything_in_order() {
        let courses = data::get_courses();
        let shown = CatalogFilter::default().apply(&courses);
        let ids: Vec<u32> = shown.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn search_matches_tag_case_insensitively() {
        let courses = data::get_courses();
        let shown = filter("react", "all").apply(&courses);
        assert_eq!(titles(&shown), ["Full-Stack Web Development"]);
    }

    #[test]
    fn category_alone_selects_design_course() {
        let courses = data::get_courses();
        let shown = filter("", "Design").apply(&courses);
        assert_eq!(titles(&shown), ["UI/UX Design Fundamentals"]);
    }

    #[test]
    fn search_matches_instructor_and_title() {
        let courses = data::get_courses();
        assert_eq!(titles(&filter("LISA", "all").apply(&courses)), ["Business Analytics"]);
        assert_eq!(
            titles(&filter("analytics", "all").apply(&courses)),
            ["Data Science & Analytics", "Digital Marketing Mastery", "Business Analytics"]
        );
    }

    #[test]
    fn category_comparison_is_case_sensitive() {
        let courses = data::get_courses();
        assert!(filter("", "design").apply(&courses).is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        let courses = data::get_courses();
        assert!(filter("react", "Design").apply(&courses).is_empty());
        assert_eq!(
            titles(&filter("analytics", "Business").apply(&courses)),
            ["Business Analytics"]
        );
    }

    #[test]
    fn every_result_satisfies_the_predicates() {
        let courses = data::get_courses();
        for term in ["", "a", "py", "Kim", "cloud", "zzz"] {
            for category in data::CATEGORIES {
                let f = filter(term, category);
                for course in f.apply(&courses) {
                    let needle = term.to_lowercase();
                    let text_hit = term.is_empty()
                        || course.title.to_lowercase().contains(&needle)
                        || course.instructor.to_lowercase().contains(&needle)
                        || course.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                    assert!(text_hit);
                    assert!(*category == "all" || course.category == *category);
                }
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let courses = data::get_courses();
        for term in ["", "an", "React", "x"] {
            for category in data::CATEGORIES {
                let f = filter(term, category);
                let once = f.apply(&courses);
                let twice = f.apply(once.iter().copied());
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut f = filter("anything", "Cloud");
        f.reset();
        assert_eq!(f, CatalogFilter::default());
        assert_eq!(f.search, "");
        assert_eq!(f.category, "all");
    }

    #[test]
    fn empty_view_reports_counts() {
        let courses = data::get_courses();
        let view = filter("no such course", "all").view(&courses);
        assert!(view.is_empty());
        assert_eq!(view.summary(), "Showing 0 of 6 courses");
    }
}
