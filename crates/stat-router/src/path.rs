//! Path pattern matching.

use std::collections::HashMap;

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A parameter segment (e.g., {id}).
    Param(String),
}

/// A parsed path pattern such as `/board/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    pattern: String,
    segments: Vec<PathSegment>,
}

impl PathPattern {
    /// Parses a path pattern string.
    ///
    /// # Example
    ///
    /// ```
    /// use stat_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/board/{id}");
    /// let params = pattern.match_path("/board/42").unwrap();
    /// assert_eq!(params.get("id").map(String::as_str), Some("42"));
    /// ```
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|part| {
                part.strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .map_or_else(
                        || PathSegment::Literal(part.to_string()),
                        |name| PathSegment::Param(name.to_string()),
                    )
            })
            .collect();

        Self {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns whether the pattern has no parameters.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, PathSegment::Literal(_)))
    }

    /// Returns the parameter names in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            PathSegment::Param(name) => Some(name.as_str()),
            PathSegment::Literal(_) => None,
        })
    }

    /// Matches a path (without query string) and extracts its parameters.
    ///
    /// A trailing slash is ignored.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                PathSegment::Literal(literal) if literal == part => {}
                PathSegment::Literal(_) => return None,
                PathSegment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Builds a path from parameters.
    ///
    /// Returns the name of the first missing parameter on failure.
    pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, String> {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Param(name) => {
                    path.push_str(params.get(name).ok_or_else(|| name.clone())?);
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path() {
        let pattern = PathPattern::new("/sign-in");
        assert!(pattern.is_literal());
        assert!(pattern.match_path("/sign-in").is_some());
        assert!(pattern.match_path("/sign-in/").is_some());
        assert!(pattern.match_path("/sign-up").is_none());
    }

    #[test]
    fn test_param() {
        let pattern = PathPattern::new("/user/{username}");
        assert!(!pattern.is_literal());
        let params = pattern.match_path("/user/치킨먹자").unwrap();
        assert_eq!(params.get("username").map(String::as_str), Some("치킨먹자"));
        assert!(pattern.match_path("/user").is_none());
        assert!(pattern.match_path("/user/a/b").is_none());
    }

    #[test]
    fn test_param_names() {
        let pattern = PathPattern::new("/user/{username}/posts/{id}");
        assert_eq!(pattern.pattern(), "/user/{username}/posts/{id}");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["username", "id"]);
    }

    #[test]
    fn test_reverse() {
        let pattern = PathPattern::new("/board/{id}");
        let params: HashMap<String, String> =
            [("id".to_string(), "7".to_string())].into_iter().collect();
        assert_eq!(pattern.reverse(&params), Ok("/board/7".to_string()));
        assert_eq!(pattern.reverse(&HashMap::new()), Err("id".to_string()));
    }

    #[test]
    fn test_root() {
        let pattern = PathPattern::new("/");
        assert_eq!(pattern.reverse(&HashMap::new()), Ok("/".to_string()));
        assert!(pattern.match_path("/").is_some());
    }
}
