//! Contact form state.
//!
//! Each field owns an [`ErrorNode`] created with the field and kept for the
//! lifetime of the page; validation only toggles its text and visibility.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Messages;
use crate::validation::FieldKind;

/// The message element rendered directly after a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorNode {
    text: String,
    displayed: bool,
}

impl ErrorNode {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    fn show(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.displayed = true;
    }

    fn hide(&mut self) {
        self.displayed = false;
    }
}

/// One input or textarea of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    name: String,
    kind: FieldKind,
    value: String,
    invalid: bool,
    error_node: ErrorNode,
}

impl FieldState {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            invalid: false,
            error_node: ErrorNode::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field currently carries the error marker.
    pub fn is_marked_invalid(&self) -> bool {
        self.invalid
    }

    pub fn error_node(&self) -> &ErrorNode {
        &self.error_node
    }

    /// Run the field's rule and update its marker and message node.
    pub fn validate(&mut self, messages: &Messages) -> bool {
        let valid = self.kind.accepts(&self.value);
        if valid {
            self.clear_error();
        } else {
            self.invalid = true;
            self.error_node.show(self.kind.error_message(messages));
        }
        valid
    }

    fn clear_error(&mut self) {
        self.invalid = false;
        self.error_node.hide();
    }
}

/// Field values collected at submit time, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<String, String>);

impl FormRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The contact form: an ordered set of fields sharing one message table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    messages: Messages,
}

impl ContactForm {
    /// The form as it appears on the site: name, email, phone, message.
    pub fn new(messages: Messages) -> Self {
        Self::with_fields(
            [
                ("name", FieldKind::Name),
                ("email", FieldKind::Email),
                ("phone", FieldKind::Phone),
                ("message", FieldKind::Message),
            ],
            messages,
        )
    }

    pub fn with_fields<N: Into<String>>(
        fields: impl IntoIterator<Item = (N, FieldKind)>,
        messages: Messages,
    ) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, kind)| FieldState::new(name, kind))
                .collect(),
            messages,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Input event: store the new value and validate it.
    ///
    /// Returns `None` for an unknown field.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Option<bool> {
        let messages = &self.messages;
        let field = self.fields.iter_mut().find(|f| f.name == name)?;
        field.value = value.into();
        let valid = field.validate(messages);
        tracing::trace!(field = name, valid, "Field input");
        Some(valid)
    }

    /// Focus-loss event: validate the current value.
    pub fn blur(&mut self, name: &str) -> Option<bool> {
        let messages = &self.messages;
        let field = self.fields.iter_mut().find(|f| f.name == name)?;
        Some(field.validate(messages))
    }

    /// Validate every field, without stopping at the first failure, so
    /// each invalid field shows its own message.
    pub fn validate_all(&mut self) -> bool {
        let messages = &self.messages;
        self.fields
            .iter_mut()
            .fold(true, |all_valid, field| field.validate(messages) && all_valid)
    }

    pub fn record(&self) -> FormRecord {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Clear values and error markers. Message nodes stay attached.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.clear_error();
        }
    }

    /// Hide every error marker without touching values.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(Messages::default())
    }

    fn fill_valid(form: &mut ContactForm) {
        form.input("name", "Иван Петров");
        form.input("email", "ivan@example.ru");
        form.input("phone", "+7 (999) 123-45-67");
        form.input("message", "Хочу заказать чартер на субботу");
    }

    #[test]
    fn error_node_exists_before_any_validation() {
        let form = form();
        for field in form.fields() {
            assert!(!field.error_node().is_displayed());
            assert!(!field.is_marked_invalid());
        }
    }

    #[test]
    fn input_shows_and_clears_error() {
        let mut form = form();

        assert_eq!(form.input("name", "И"), Some(false));
        let name = form.field("name").unwrap();
        assert!(name.is_marked_invalid());
        assert!(name.error_node().is_displayed());
        assert_eq!(name.error_node().text(), Messages::default().invalid_name);

        assert_eq!(form.input("name", "Иван"), Some(true));
        let name = form.field("name").unwrap();
        assert!(!name.is_marked_invalid());
        assert!(!name.error_node().is_displayed());
    }

    #[test]
    fn blur_validates_untouched_field() {
        let mut form = form();
        assert_eq!(form.blur("email"), Some(false));
        assert!(form.field("email").unwrap().error_node().is_displayed());

        assert_eq!(form.blur("phone"), Some(true));
        assert!(!form.field("phone").unwrap().is_marked_invalid());
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut form = form();
        assert_eq!(form.input("company", "Acme"), None);
        assert_eq!(form.blur("company"), None);
    }

    #[test]
    fn validate_all_marks_every_invalid_field() {
        let mut form = form();
        form.input("email", "ivan@example.ru");

        assert!(!form.validate_all());
        assert!(form.field("name").unwrap().is_marked_invalid());
        assert!(form.field("message").unwrap().is_marked_invalid());
        assert!(!form.field("email").unwrap().is_marked_invalid());
        // empty phone is allowed
        assert!(!form.field("phone").unwrap().is_marked_invalid());
    }

    #[test]
    fn record_collects_values_by_name() {
        let mut form = form();
        fill_valid(&mut form);
        assert!(form.validate_all());

        let record = form.record();
        assert_eq!(record.len(), 4);
        assert_eq!(record.get("email"), Some("ivan@example.ru"));
        assert_eq!(
            serde_json::to_value(&record).unwrap()["name"],
            "Иван Петров"
        );
    }

    #[test]
    fn reset_clears_values_and_markers() {
        let mut form = form();
        fill_valid(&mut form);
        form.input("phone", "123");
        assert!(form.field("phone").unwrap().is_marked_invalid());

        form.reset();
        for field in form.fields() {
            assert_eq!(field.value(), "");
            assert!(!field.is_marked_invalid());
            assert!(!field.error_node().is_displayed());
        }
    }
}
