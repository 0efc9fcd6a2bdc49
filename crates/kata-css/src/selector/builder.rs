//! Fluent construction of a compound selector.

use std::fmt;

use super::{Category, SelectorError, SelectorFragment, SelectorState, Specificity};

/// Chainable builder for one compound selector.
///
/// Each call consumes the builder and hands it back on success, so a chain
/// reads `builder.element("a")?.class("nav")?`. Calls must follow the
/// canonical category order (element, id, class, attribute, pseudo-class,
/// pseudo-element), and element, id and pseudo-element may each be set once.
///
/// # Example
/// ```
/// use kata_css::selector::SelectorBuilder;
///
/// # fn main() -> Result<(), kata_css::selector::SelectorError> {
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attribute(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.serialize(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    state: SelectorState,
}

impl SelectorBuilder {
    /// Create an untouched builder. It serializes to `""`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding a single component.
    ///
    /// A fresh builder accepts any category, so this cannot fail.
    #[must_use]
    pub fn starting_with(category: Category, value: impl Into<String>) -> Self {
        let mut state = SelectorState::default();
        state.record(category, value.into());
        Self { state }
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element is already set.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::Element, name.into())
    }

    /// Set the ID selector (`#name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an id is already set,
    /// [`SelectorError::Order`] if anything after an id was added.
    pub fn id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::Id, name.into())
    }

    /// Append a class selector (`.name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element was already added.
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::Class, name.into())
    }

    /// Append an attribute selector. `expr` is wrapped in brackets as-is.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element was
    /// already added.
    pub fn attribute(self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::Attribute, expr.into())
    }

    /// Append a pseudo-class (`:name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element was already added.
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::PseudoClass, name.into())
    }

    /// Set the pseudo-element (`::name`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Category::PseudoElement, name.into())
    }

    /// The components collected so far.
    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Specificity of the compound selector built so far.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.state.specificity()
    }

    /// Render the selector. Pure; may be called any number of times.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.state.to_string()
    }

    fn push(mut self, category: Category, value: String) -> Result<Self, SelectorError> {
        self.state.check(category)?;
        self.state.record(category, value);
        Ok(self)
    }
}

/// Resume building from previously collected components, e.g. a state
/// decoded from JSON. Later calls are checked against the highest category
/// the state contains.
impl From<SelectorState> for SelectorBuilder {
    fn from(state: SelectorState) -> Self {
        Self { state }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

impl SelectorFragment for SelectorBuilder {
    fn serialize(&self) -> String {
        Self::serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_builder_is_empty() {
        let builder = SelectorBuilder::new();
        assert_eq!(builder.serialize(), "");
        assert!(builder.state().is_empty());
    }

    #[test]
    fn test_starting_with_records_component() {
        let builder = SelectorBuilder::starting_with(Category::PseudoElement, "before");
        assert_eq!(builder.serialize(), "::before");
        assert_eq!(builder.state().last(), Some(Category::PseudoElement));
    }

    #[test]
    fn test_push_advances_last_category() {
        let builder = SelectorBuilder::new().id("x").unwrap().class("y").unwrap();
        assert_eq!(builder.state().last(), Some(Category::Class));
    }

    #[test]
    fn test_display_matches_serialize() {
        let builder = SelectorBuilder::new()
            .element("li")
            .unwrap()
            .pseudo_class("first-child")
            .unwrap();
        assert_eq!(format!("{builder}"), builder.serialize());
    }
}
