/// Client-side pages, one per URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Images,
    ImagesCategory(String),
    Videos,
}

impl Route {
    /// Matches a path against the route table. Any `?query` or `#fragment`
    /// is dropped first, and one trailing slash is accepted.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };

        match trimmed {
            "/" => Some(Route::Home),
            "/images" => Some(Route::Images),
            "/videos" => Some(Route::Videos),
            other => {
                let category = other.strip_prefix("/images/")?;
                if matches!(category, "" | "." | "..") || category.contains('/') {
                    return None;
                }
                Some(Route::ImagesCategory(category.to_string()))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Images => "/images".into(),
            Route::ImagesCategory(c) => format!("/images/{c}"),
            Route::Videos => "/videos".into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Images => "images",
            Route::ImagesCategory(_) => "images-category",
            Route::Videos => "videos",
        }
    }

    /// `(pattern, name)` pairs in table order.
    pub fn all_patterns() -> &'static [(&'static str, &'static str)] {
        &[
            ("/", "home"),
            ("/images", "images"),
            ("/images/:category", "images-category"),
            ("/videos", "videos"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/images"), Some(Route::Images));
        assert_eq!(Route::parse("/images/"), Some(Route::Images));
        assert_eq!(Route::parse("/videos"), Some(Route::Videos));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            Route::parse("/images/landscape"),
            Some(Route::ImagesCategory("landscape".into()))
        );
        assert_eq!(
            Route::parse("/images/landscape/"),
            Some(Route::ImagesCategory("landscape".into()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/photos"), None);
        assert_eq!(Route::parse("/images/a/b"), None);
        assert_eq!(Route::parse("/images//"), None);
        assert_eq!(Route::parse("videos"), None);
    }

    #[test]
    fn test_parse_drops_query_and_fragment() {
        assert_eq!(Route::parse("/images?x=1"), Some(Route::Images));
        assert_eq!(Route::parse("/videos#top"), Some(Route::Videos));
        assert_eq!(
            Route::parse("/images/a?x=1"),
            Some(Route::ImagesCategory("a".into()))
        );
        assert_eq!(
            Route::parse("/images/a/#f"),
            Some(Route::ImagesCategory("a".into()))
        );
        assert_eq!(Route::parse("/?tab=videos"), Some(Route::Home));
        assert_eq!(Route::parse("/images/?x=1"), Some(Route::Images));
    }

    #[test]
    fn test_parse_rejects_dot_segments() {
        assert_eq!(Route::parse("/images/."), None);
        assert_eq!(Route::parse("/images/.."), None);
        assert_eq!(Route::parse("/images/..?x=1"), None);
        assert_eq!(
            Route::parse("/images/..a"),
            Some(Route::ImagesCategory("..a".into()))
        );
    }

    #[test]
    fn test_path_matches_parse() {
        let routes = [
            Route::Home,
            Route::Images,
            Route::ImagesCategory("animals".into()),
            Route::Videos,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_names_follow_table() {
        assert_eq!(Route::ImagesCategory("x".into()).name(), "images-category");
        let names: Vec<&str> = Route::all_patterns().iter().map(|(_, n)| *n).collect();
        assert_eq!(names, ["home", "images", "images-category", "videos"]);
    }
}
