use crate::compiler::Key;

use std::str::FromStr;

use smallvec::SmallVec;

/// Decoded parameter values in capture-group order.
///
/// A key whose group did not participate in the match is still listed,
/// with no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Key, Option<String>); 4]>,
}

impl Params {
    /// The value bound to `name`. Positional keys are looked up as `"0"`, `"1"`, ...
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find(|(k, _)| k.matches(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.buf.iter().any(|(k, _)| k.matches(name))
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, Option<&str>)> + '_ {
        self.buf.iter().map(|(k, v)| (k, v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Params {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// A present value always wins; a missing one never replaces anything.
    pub(super) fn assign(&mut self, key: &Key, value: Option<String>) {
        match self.buf.iter_mut().find(|(k, _)| k.same_slot(key)) {
            Some((_, slot)) => {
                if value.is_some() {
                    *slot = value;
                }
            }
            None => self.buf.push((key.clone(), value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Key {
        Key::Name("x".into())
    }

    #[test]
    fn assign_keeps_present_value() {
        let mut params = Params::new();
        params.assign(&x(), Some("v".into()));
        params.assign(&x(), None);
        assert_eq!(params.get("x"), Some("v"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn assign_later_value_wins() {
        let mut params = Params::new();
        params.assign(&x(), None);
        assert!(params.contains_key("x"));
        assert_eq!(params.get("x"), None);

        params.assign(&x(), Some("u".into()));
        params.assign(&x(), Some("v".into()));
        assert_eq!(params.get("x"), Some("v"));
    }

    #[test]
    fn assign_named_and_positional_share_slot() {
        let mut params = Params::new();
        params.assign(&Key::Name("0".into()), Some("a".into()));
        params.assign(&Key::Index(0), Some("b".into()));
        assert_eq!(params.get("0"), Some("b"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn lookup_positional() {
        let mut params = Params::new();
        params.assign(&Key::Index(0), Some("/a/b".into()));
        params.assign(&Key::Name("n".into()), Some("42".into()));
        assert_eq!(params.get("0"), Some("/a/b"));
        assert_eq!(params.parse::<u32>("n"), Some(Ok(42)));
        assert!(params.parse::<u32>("0").unwrap().is_err());
        assert_eq!(params.parse::<u32>("m"), None);

        let keys: Vec<String> = params.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["0", "n"]);
    }
}
