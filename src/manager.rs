//! Body Class Manager - the ordered class list behind a `<body>` tag
//!
//! A controller resets, sets and adds classes while handling a request; the
//! view renders them as `class="a b c"`. Defaults come from a [`ParamStore`].

use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

use crate::classes::BodyClass;
use crate::params::{ConfigurationKeyError, ParamStore, Params};

/// Parameter consulted when no explicit key is given.
pub const DEFAULT_PARAM_KEY: &str = "defaultBodyClass";

/// Request-scoped holder of body classes
#[derive(Debug, Clone)]
pub struct BodyClassManager<S> {
    store: S,
    classes: Vec<String>,
}

impl<S: ParamStore> BodyClassManager<S> {
    /// Create an empty manager reading defaults from `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            classes: Vec::new(),
        }
    }

    /// Create a manager already loaded with the defaults under `param_key`
    /// (or [`DEFAULT_PARAM_KEY`]).
    pub fn with_defaults(store: S, param_key: Option<&str>) -> Result<Self, ConfigurationKeyError> {
        let mut manager = Self::new(store);
        manager.init_defaults(param_key)?;
        Ok(manager)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reset(&mut self) {
        self.classes.clear();
    }

    /// Replace the classes, or append to them when `override_existing` is false.
    pub fn set(&mut self, class: impl Into<BodyClass>, override_existing: bool) {
        let incoming = class.into().into_vec();
        log::trace!("set body class {:?} (override: {})", incoming, override_existing);

        if override_existing {
            self.classes = incoming;
        } else {
            self.classes.extend(incoming);
        }
    }

    /// Shorthand for `set(class, true)`.
    pub fn set_body_class(&mut self, class: impl Into<BodyClass>) {
        self.set(class, true);
    }

    /// Append classes. Empty class names are ignored; duplicates are kept.
    pub fn add(&mut self, class: impl Into<BodyClass>) {
        let incoming: Vec<String> = class
            .into()
            .into_vec()
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        if incoming.is_empty() {
            return;
        }
        log::trace!("add body class {:?}", incoming);
        self.classes.extend(incoming);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Drop repeated classes, keeping the first occurrence of each.
    pub fn clean_classes(&mut self) {
        let mut seen = HashSet::new();
        self.classes.retain(|class| seen.insert(class.clone()));
    }

    /// Render the classes space-separated, wrapped in `class="…"` when
    /// `include_attribute` is set.
    pub fn render(&self, include_attribute: bool) -> String {
        let joined = self.classes.join(" ");
        if include_attribute {
            format!("class=\"{}\"", joined)
        } else {
            joined
        }
    }

    /// Write the rendered fragment straight into an output buffer.
    pub fn render_into<W: fmt::Write>(&self, out: &mut W, include_attribute: bool) -> fmt::Result {
        out.write_str(&self.render(include_attribute))
    }

    /// View-side helper: always writes the full `class="…"` attribute.
    pub fn write_body_class<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.render_into(out, true)
    }

    /// Read default classes stored under `param_key`.
    ///
    /// A missing or empty value yields no classes; a single string yields one.
    pub fn default_classes(&self, param_key: &str) -> Result<Vec<String>, ConfigurationKeyError> {
        let value = self.store.param(param_key)?;
        let classes = value
            .map(|v| classes_from_value(param_key, v))
            .unwrap_or_default();
        log::debug!("{} default classes under {:?}", classes.len(), param_key);
        Ok(classes)
    }

    pub fn default_body_class(&self) -> Result<Vec<String>, ConfigurationKeyError> {
        self.default_classes(DEFAULT_PARAM_KEY)
    }

    /// Replace the classes with the defaults under `param_key`, or under
    /// [`DEFAULT_PARAM_KEY`] when none is given.
    pub fn init_defaults(&mut self, param_key: Option<&str>) -> Result<(), ConfigurationKeyError> {
        let key = param_key.unwrap_or(DEFAULT_PARAM_KEY);
        let defaults = self.default_classes(key)?;
        self.set(defaults, true);
        Ok(())
    }
}

impl Default for BodyClassManager<Params> {
    fn default() -> Self {
        Self::new(Params::new())
    }
}

impl<S: ParamStore> fmt::Display for BodyClassManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_body_class(f)
    }
}

/// Class name a boolean `true` config value renders as.
const TRUE_CLASS: &str = "1";

fn classes_from_value(key: &str, value: Value) -> Vec<String> {
    match value {
        Value::Null | Value::Bool(false) => vec![],
        Value::String(class) if class.is_empty() => vec![],
        Value::String(class) => vec![class],
        Value::Bool(true) => vec![TRUE_CLASS.to_string()],
        Value::Number(n) => vec![n.to_string()],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(class) => Some(class),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(true) => Some(TRUE_CLASS.to_string()),
                other => {
                    log::warn!("skipping non-string class {} in {:?}", other, key);
                    None
                }
            })
            .collect(),
        other => {
            log::warn!("ignoring unsupported value {} for {:?}", other, key);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager_with(key: &str, value: Value) -> BodyClassManager<Params> {
        let mut params = Params::new();
        params.insert(key, value);
        BodyClassManager::new(params)
    }

    #[test]
    fn test_set_then_add() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.set(["a", "b"], true);
        manager.add("c");
        assert_eq!(manager.classes(), ["a", "b", "c"]);
    }

    #[test]
    fn test_set_without_override_appends() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.set(["a", "b"], true);
        manager.set(["c"], false);
        manager.set("d", false);
        assert_eq!(manager.classes(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_set_single_string_replaces() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.set(["a", "b"], true);
        manager.set_body_class("only");
        assert_eq!(manager.classes(), ["only"]);
    }

    #[test]
    fn test_add_keeps_duplicates_until_cleaned() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.add(["a", "b"]);
        manager.add(vec!["a", "c", "b"]);
        assert_eq!(manager.classes(), ["a", "b", "a", "c", "b"]);

        manager.clean_classes();
        assert_eq!(manager.classes(), ["a", "b", "c"]);
    }

    #[test]
    fn test_render_empty() {
        let manager = BodyClassManager::<Params>::default();
        assert_eq!(manager.render(true), r#"class="""#);
        assert_eq!(manager.render(false), "");
    }

    #[test]
    fn test_render_into_appends_to_buffer() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.set(["a", "b"], true);

        let mut out = String::from("<body ");
        manager.write_body_class(&mut out).unwrap();
        out.push('>');
        assert_eq!(out, r#"<body class="a b">"#);
        assert_eq!(format!("{}", manager), r#"class="a b""#);
    }

    #[test]
    fn test_default_value_shapes() {
        assert!(manager_with("k", Value::Null).default_classes("k").unwrap().is_empty());
        assert!(manager_with("k", json!(false)).default_classes("k").unwrap().is_empty());
        assert!(manager_with("k", json!("")).default_classes("k").unwrap().is_empty());
        assert!(manager_with("k", json!([])).default_classes("k").unwrap().is_empty());
        assert_eq!(manager_with("k", json!(404)).default_classes("k").unwrap(), ["404"]);
        assert_eq!(
            manager_with("k", json!(["a", {"b": 1}, 2])).default_classes("k").unwrap(),
            ["a", "2"]
        );
        assert!(manager_with("k", json!({"a": "b"})).default_classes("k").unwrap().is_empty());
    }

    #[test]
    fn test_default_true_becomes_class() {
        assert_eq!(manager_with("k", json!(true)).default_classes("k").unwrap(), ["1"]);
        assert_eq!(
            manager_with("k", json!(["a", true, false])).default_classes("k").unwrap(),
            ["a", "1"]
        );
    }

    #[test]
    fn test_add_skips_empty_class_names() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.set(["a"], true);
        manager.add(vec![""]);
        manager.add(["", "b", ""]);
        assert_eq!(manager.classes(), ["a", "b"]);
        assert_eq!(manager.render(true), r#"class="a b""#);
    }

    #[test]
    fn test_default_body_class_key() {
        let manager = manager_with(DEFAULT_PARAM_KEY, json!("site"));
        assert_eq!(manager.default_body_class().unwrap(), ["site"]);
    }

    #[test]
    fn test_init_defaults_replaces_existing() {
        let mut manager = manager_with(DEFAULT_PARAM_KEY, json!(["x"]));
        manager.set(["stale"], true);
        manager.init_defaults(None).unwrap();
        assert_eq!(manager.classes(), ["x"]);
    }

    #[test]
    fn test_invalid_key_propagates() {
        let mut manager = BodyClassManager::<Params>::default();
        manager.add("kept");
        let err = manager.init_defaults(Some("")).unwrap_err();
        assert_eq!(err, ConfigurationKeyError::InvalidKey(String::new()));
        assert_eq!(manager.classes(), ["kept"]);
    }
}
