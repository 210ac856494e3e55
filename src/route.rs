use std::fmt;

pub const DEFAULT_COURSE_ID: u32 = 1;

/// Pages reachable from the navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Courses,
    CourseDetails { id: u32 },
    Consultation,
    Schedule,
    About,
    Contact,
    Login,
    Dashboard,
    Settings,
}

/// Entries of the main navigation bar, in display order.
pub const NAV_PAGES: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Courses, "Courses"),
    (Route::Consultation, "Consultation"),
    (Route::Schedule, "Schedule"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::CourseDetails { id } => format!("/course-details?id={}", id),
            Route::Consultation => "/consultation".to_string(),
            Route::Schedule => "/schedule".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Settings => "/settings".to_string(),
        }
    }

    /// Parses `path[?query]`. Unknown paths yield `None`.
    pub fn parse(location: &str) -> Option<Route> {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let route = match path {
            "/" | "" => Route::Home,
            "/courses" => Route::Courses,
            "/course-details" => Route::CourseDetails { id: course_id(query) },
            "/consultation" => Route::Consultation,
            "/schedule" => Route::Schedule,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/settings" => Route::Settings,
            _ => return None,
        };
        Some(route)
    }

    /// Whether a navigation entry for `self` should render as active.
    pub fn is_section_of(&self, current: &Route) -> bool {
        match (self, current) {
            (Route::Courses, Route::CourseDetails { .. }) => true,
            _ => self == current,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

pub fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

/// Course id carried by the details page query. Falls back to the first
/// course when absent or not a number.
pub fn course_id(query: &str) -> u32 {
    query_param(query, "id")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_COURSE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_without_id_defaults_to_first_course() {
        assert_eq!(Route::parse("/course-details"), Some(Route::CourseDetails { id: 1 }));
        assert_eq!(Route::parse("/course-details?"), Some(Route::CourseDetails { id: 1 }));
        assert_eq!(Route::parse("/course-details?id=abc"), Some(Route::CourseDetails { id: 1 }));
        assert_eq!(Route::parse("/course-details?id="), Some(Route::CourseDetails { id: 1 }));
    }

    #[test]
    fn details_reads_id_among_other_params() {
        assert_eq!(
            Route::parse("/course-details?ref=home&id=4"),
            Some(Route::CourseDetails { id: 4 })
        );
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Courses,
            Route::CourseDetails { id: 5 },
            Route::Consultation,
            Route::Schedule,
            Route::About,
            Route::Contact,
            Route::Login,
            Route::Dashboard,
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_path_is_rejected() {
        assert_eq!(Route::parse("/pricing"), None);
    }

    #[test]
    fn details_page_highlights_courses_entry() {
        assert!(Route::Courses.is_section_of(&Route::CourseDetails { id: 2 }));
        assert!(!Route::Home.is_section_of(&Route::Courses));
    }
}
