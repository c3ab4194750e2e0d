use std::sync::LazyLock;

use regex::Regex;

use super::CatalogItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    /// Remastered editions.
    Remaster,
    /// Anniversary, deluxe, live, collector's, demo and expanded editions.
    Extra,
}

/// Pattern table deciding which [`ReleaseType`]s a release belongs to.
///
/// A kind may have several patterns; a release is of that kind when any of
/// them matches its title followed by its version.
#[derive(Debug, Clone)]
pub struct TypePolicy {
    rules: Vec<(ReleaseType, Regex)>,
}

#[allow(clippy::expect_used)]
static STANDARD_POLICY: LazyLock<TypePolicy> = LazyLock::new(|| {
    TypePolicy::new(vec![
        (
            ReleaseType::Remaster,
            Regex::new(r"(?i)(re)?master(ed)?").expect("remaster regex is valid"),
        ),
        (
            ReleaseType::Extra,
            Regex::new(r"(?i)(anniversary|deluxe|live|collector|demo|expanded)")
                .expect("extra regex is valid"),
        ),
    ])
});

impl TypePolicy {
    pub fn new(rules: Vec<(ReleaseType, Regex)>) -> Self {
        Self { rules }
    }

    /// The built-in table used by [`is_type`].
    pub fn standard() -> &'static TypePolicy {
        &STANDARD_POLICY
    }

    pub fn is_type(&self, kind: ReleaseType, item: &CatalogItem) -> bool {
        let haystack = format!(
            "{} {}",
            item.title,
            item.version.as_deref().unwrap_or_default()
        );

        self.rules
            .iter()
            .filter(|(rule_kind, _)| *rule_kind == kind)
            .any(|(_, pattern)| pattern.is_match(&haystack))
    }
}

impl Default for TypePolicy {
    fn default() -> Self {
        Self::standard().clone()
    }
}

pub fn is_type(kind: ReleaseType, item: &CatalogItem) -> bool {
    TypePolicy::standard().is_type(kind, item)
}
