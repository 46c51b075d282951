//! Renderable UI units produced by component loaders

use serde::Serialize;

/// A single control inside a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Editable text input
    Text {
        label: String,
        value: String,
        multiline: bool,
    },
    /// Choice among fixed options
    Select {
        label: String,
        options: Vec<String>,
        selected: String,
    },
    /// Color picker holding a `#rrggbbaa` value
    Color { label: String, value: String },
    /// Read-only result display
    Output { label: String, value: String },
    /// Action trigger
    Button { label: String },
}

impl Control {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            label: label.into(),
            value: value.into(),
            multiline: false,
        }
    }

    pub fn textarea(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            label: label.into(),
            value: value.into(),
            multiline: true,
        }
    }

    /// Build a select; `selected` falls back to the first option when not listed
    pub fn select<I, S>(label: impl Into<String>, options: I, selected: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let selected = selected.into();
        let selected = if options.contains(&selected) {
            selected
        } else {
            options.first().cloned().unwrap_or_default()
        };
        Self::Select {
            label: label.into(),
            options,
            selected,
        }
    }

    pub fn color(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Color {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn output(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Output {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::Button { label: label.into() }
    }

    /// Label shown next to the control
    pub fn label(&self) -> &str {
        match self {
            Self::Text { label, .. }
            | Self::Select { label, .. }
            | Self::Color { label, .. }
            | Self::Output { label, .. }
            | Self::Button { label } => label,
        }
    }

    fn render_line(&self) -> String {
        match self {
            Self::Text { label, value, multiline } => {
                if *multiline {
                    let body: Vec<String> = value.lines().map(|l| format!("    {}", l)).collect();
                    format!("{}:\n{}", label, body.join("\n"))
                } else {
                    format!("{}: [{}]", label, value)
                }
            }
            Self::Select {
                label,
                options,
                selected,
            } => {
                let opts: Vec<String> = options
                    .iter()
                    .map(|o| if o == selected { format!("({})", o) } else { o.clone() })
                    .collect();
                format!("{}: {}", label, opts.join(" | "))
            }
            Self::Color { label, value } => format!("{}: {}", label, value),
            Self::Output { label, value } => format!("{}: {}", label, value),
            Self::Button { label } => format!("<{}>", label),
        }
    }
}

/// A loaded tool UI: a title plus its controls in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub title: String,
    pub controls: Vec<Control>,
}

impl Component {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            controls: Vec::new(),
        }
    }

    /// Append a control
    pub fn with(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    /// Find a control by its label
    pub fn control(&self, label: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.label() == label)
    }

    /// Plain-text rendition for terminal shells
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push('\n');
        for control in &self.controls {
            out.push_str(&control.render_line());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_falls_back_to_first_option() {
        let control = Control::select("Level", ["low", "high"], "extreme");
        match control {
            Control::Select { selected, .. } => assert_eq!(selected, "low"),
            other => panic!("unexpected control: {:?}", other),
        }
    }

    #[test]
    fn test_render_marks_selected_option() {
        let component = Component::new("Demo").with(Control::select("Level", ["low", "medium"], "medium"));
        let rendered = component.render();
        assert!(rendered.starts_with("Demo\n====\n"));
        assert!(rendered.contains("Level: low | (medium)"));
    }

    #[test]
    fn test_render_multiline_text_is_indented() {
        let component = Component::new("T").with(Control::textarea("Body", "a\nb"));
        assert!(component.render().contains("Body:\n    a\n    b"));
    }

    #[test]
    fn test_control_lookup_by_label() {
        let component = Component::new("T")
            .with(Control::output("Port", "8080"))
            .with(Control::button("Copy"));
        assert_eq!(component.control("Port"), Some(&Control::output("Port", "8080")));
        assert!(component.control("Missing").is_none());
    }
}
