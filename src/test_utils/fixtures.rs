//! Builders for script contents.

/// A script with a directive header followed by a body.
#[derive(Clone, Debug, Default)]
pub struct ScriptFixture {
    directives: Vec<(String, String)>,
    body: String,
}

impl ScriptFixture {
    /// A script with an empty header and a placeholder body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
            body: "var loaded = true;\n".to_string(),
        }
    }

    /// Add a `js` require.
    #[must_use]
    pub fn require(self, reference: &str) -> Self {
        self.directive("js", reference)
    }

    /// Add a `css` declaration.
    #[must_use]
    pub fn stylesheet(self, name: &str) -> Self {
        self.directive("css", name)
    }

    /// Add an arbitrary directive.
    #[must_use]
    pub fn directive(mut self, action: &str, parameter: &str) -> Self {
        self.directives.push((action.to_string(), parameter.to_string()));
        self
    }

    /// Replace the body that follows the header.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// The script text, one block comment per directive.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content: String = self
            .directives
            .iter()
            .map(|(action, parameter)| format!("/* {action} {parameter} */\n"))
            .collect();
        content.push_str(&self.body);
        content
    }
}
