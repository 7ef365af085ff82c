//! Parameter sources.
//!
//! A source is a read-only mapping from field name to raw string. Looking up
//! a field that is not present yields the empty string, which every
//! validator treats as "absent".

use std::collections::{BTreeMap, HashMap};

/// Read-only access to raw request parameters.
pub trait ParamSource {
    /// Returns the raw value for `field`, or `""` if it is absent.
    fn raw(&self, field: &str) -> &str;
}

impl<S: ParamSource + ?Sized> ParamSource for &S {
    fn raw(&self, field: &str) -> &str {
        (**self).raw(field)
    }
}

impl<H> ParamSource for HashMap<String, String, H>
where
    H: std::hash::BuildHasher,
{
    fn raw(&self, field: &str) -> &str {
        self.get(field).map(String::as_str).unwrap_or("")
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn raw(&self, field: &str) -> &str {
        self.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Ordered query parameters, as they appeared in the request.
///
/// A name may repeat; [`ParamSource::raw`] returns its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Returns every value for `field` in request order.
    pub fn get_all<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over all name/value pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of name/value pairs, counting repeats.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ParamSource for QueryParams {
    fn raw(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "axum")]
mod http {
    use std::collections::HashMap;

    use axum::{
        extract::{rejection::QueryRejection, FromRequestParts, Query},
        http::{request::Parts, Uri},
    };

    use super::{ParamSource, QueryParams};

    impl QueryParams {
        /// Parses the query string of `uri`, percent-decoding names and values.
        pub fn from_uri(uri: &Uri) -> Result<Self, QueryRejection> {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)?;
            Ok(pairs.into_iter().collect())
        }
    }

    impl<S> FromRequestParts<S> for QueryParams
    where
        S: Send + Sync,
    {
        type Rejection = QueryRejection;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            Self::from_uri(&parts.uri)
        }
    }

    impl ParamSource for Query<HashMap<String, String>> {
        fn raw(&self, field: &str) -> &str {
            self.0.raw(field)
        }
    }
}
