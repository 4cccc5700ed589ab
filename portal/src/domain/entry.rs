//! Subject identifier extraction from the entry URL.

use url::Url;

use super::SubjectId;

/// Query parameter carrying the subject identifier.
pub const SUBJECT_QUERY_KEY: &str = "v";

/// Reads the subject identifier out of the page's entry URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntryResolver;

impl EntryResolver {
    /// Extract the subject id from `url`.
    ///
    /// The decoded value of `v` wins. When `v` is absent or blank the raw
    /// query string (without its leading `?`) is used verbatim.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::EntryResolver;
    /// use url::Url;
    ///
    /// let keyed = Url::parse("https://example.test/?v=R7V5CT").unwrap();
    /// let bare = Url::parse("https://example.test/?R7V5CT").unwrap();
    /// let none = Url::parse("https://example.test/").unwrap();
    ///
    /// assert_eq!(EntryResolver::resolve(&keyed).unwrap().as_ref(), "R7V5CT");
    /// assert_eq!(EntryResolver::resolve(&bare).unwrap().as_ref(), "R7V5CT");
    /// assert!(EntryResolver::resolve(&none).is_none());
    /// ```
    pub fn resolve(url: &Url) -> Option<SubjectId> {
        let keyed = url
            .query_pairs()
            .find(|(key, _)| key == SUBJECT_QUERY_KEY)
            .and_then(|(_, value)| SubjectId::new(value).ok());
        keyed.or_else(|| url.query().and_then(|raw| SubjectId::new(raw).ok()))
    }

    /// Copy of `url` without query string or fragment.
    pub fn cleaned(url: &Url) -> Url {
        let mut clean = url.clone();
        clean.set_query(None);
        clean.set_fragment(None);
        clean
    }
}
