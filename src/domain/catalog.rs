use crate::domain::models::Template;

/// The list of selectable templates. Built once from the listing response and
/// only ever replaced as a whole; there are no in-place mutators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    #[must_use]
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Entries whose name starts with `query` (case-insensitive) and for which
    /// `is_taken` is false, in catalog order.
    pub fn candidates<'a>(
        &'a self,
        query: &str,
        is_taken: impl Fn(&str) -> bool,
    ) -> Vec<&'a Template> {
        let query = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| !is_taken(&t.name) && t.name.to_lowercase().starts_with(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str) -> Template {
        Template {
            name: name.to_string(),
            download_url: format!("https://example.invalid/{name}"),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            template("Node"),
            template("Python"),
            template("Nim"),
            template("node_modules"),
        ])
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let c = catalog();
        let names: Vec<_> = c
            .candidates("no", |_| false)
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Node", "node_modules"]);
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let c = catalog();
        assert_eq!(c.candidates("", |_| false).len(), 4);
        assert_eq!(c.candidates("", |_| false)[0].name, "Node");
    }

    #[test]
    fn test_taken_names_are_excluded() {
        let c = catalog();
        let names: Vec<_> = c
            .candidates("n", |n| n == "Node")
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Nim", "node_modules"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(catalog().candidates("zzz", |_| false).is_empty());
    }

    #[test]
    fn test_filtering_leaves_catalog_untouched() {
        let c = catalog();
        let before = c.clone();
        let _ = c.candidates("py", |_| true);
        assert_eq!(c, before);
    }
}
