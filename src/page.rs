//! Page - a per-request rendering context that owns a body class manager

use crate::manager::BodyClassManager;
use crate::params::{ConfigurationKeyError, ParamStore};

/// Output buffer plus the body classes for one response.
#[derive(Debug)]
pub struct Page<S> {
    body_class: BodyClassManager<S>,
    output: String,
}

impl<S: ParamStore> Page<S> {
    pub fn new(store: S) -> Self {
        Self {
            body_class: BodyClassManager::new(store),
            output: String::new(),
        }
    }

    pub fn with_defaults(store: S, param_key: Option<&str>) -> Result<Self, ConfigurationKeyError> {
        Ok(Self {
            body_class: BodyClassManager::with_defaults(store, param_key)?,
            output: String::new(),
        })
    }

    pub fn body_class(&self) -> &BodyClassManager<S> {
        &self.body_class
    }

    pub fn body_class_mut(&mut self) -> &mut BodyClassManager<S> {
        &mut self.body_class
    }

    pub fn write(&mut self, fragment: &str) {
        self.output.push_str(fragment);
    }

    /// Emit `class="…"` at the current position of the output.
    pub fn echo_body_class(&mut self) {
        self.output.push_str(&self.body_class.render(true));
    }

    /// Emit the opening `<body>` tag, carrying the class attribute when any
    /// classes are set.
    pub fn open_body_tag(&mut self) {
        if self.body_class.classes().is_empty() {
            self.output.push_str("<body>");
        } else {
            let tag = format!("<body {}>", self.body_class.render(true));
            self.output.push_str(&tag);
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use serde_json::json;

    #[test]
    fn test_controller_then_view() {
        let mut params = Params::new();
        params.insert("defaultBodyClass", json!(["site"]));

        let mut page = Page::with_defaults(params, None).unwrap();
        page.body_class_mut().add("blog");

        page.write("<html>");
        page.open_body_tag();
        page.write("</body></html>");

        assert_eq!(
            page.into_output(),
            r#"<html><body class="site blog"></body></html>"#
        );
    }

    #[test]
    fn test_bare_body_tag_without_classes() {
        let mut page = Page::new(Params::new());
        page.open_body_tag();
        assert_eq!(page.output(), "<body>");
    }

    #[test]
    fn test_echo_inside_template() {
        let mut page = Page::new(Params::new());
        page.body_class_mut().set(["a", "b"], true);
        page.write("<body ");
        page.echo_body_class();
        page.write(">");
        assert_eq!(page.output(), r#"<body class="a b">"#);
    }
}
