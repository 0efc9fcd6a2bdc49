//! The accumulated components of one compound selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, SelectorError};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// (A, B, C) weight of a compound selector: id count, then class, attribute
/// and pseudo-class count, then element and pseudo-element count. Derived
/// `Ord` compares the components left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a specificity from its (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

/// Components collected by a [`SelectorBuilder`](super::SelectorBuilder).
///
/// Repeatable categories keep insertion order. The highest category present
/// is the one later calls are checked against, so any combination of fields
/// is a valid state; missing fields decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorState {
    /// Type selector, e.g. `div`.
    pub element: Option<String>,
    /// ID selector without the leading `#`.
    pub id: Option<String>,
    /// Class names without the leading `.`.
    pub classes: Vec<String>,
    /// Attribute expressions without brackets, stored verbatim.
    pub attributes: Vec<String>,
    /// Pseudo-class names without the leading `:`.
    pub pseudo_classes: Vec<String>,
    /// Pseudo-element name without the leading `::`.
    pub pseudo_element: Option<String>,
}

impl SelectorState {
    /// Whether no component has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last().is_none()
    }

    /// Whether at least one component of `category` is present.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Element => self.element.is_some(),
            Category::Id => self.id.is_some(),
            Category::Class => !self.classes.is_empty(),
            Category::Attribute => !self.attributes.is_empty(),
            Category::PseudoClass => !self.pseudo_classes.is_empty(),
            Category::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The highest category present; `None` for an empty state.
    #[must_use]
    pub fn last(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .rev()
            .find(|&category| self.contains(category))
    }

    /// Check that `category` may be added next.
    ///
    /// Uniqueness is checked before ordering, so setting an element twice
    /// reports [`SelectorError::Duplicate`] even after later categories.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Duplicate`] if `category` is unique and already set.
    /// - [`SelectorError::Order`] if a higher category is already present.
    pub fn check(&self, category: Category) -> Result<(), SelectorError> {
        if category.is_unique() && self.contains(category) {
            return Err(SelectorError::Duplicate { category });
        }
        match self.last() {
            Some(last) if category < last => Err(SelectorError::Order {
                attempted: category,
                last,
            }),
            _ => Ok(()),
        }
    }

    /// Store `value` under `category` without checking it.
    ///
    /// Callers are expected to have run [`check`](Self::check) first; on a
    /// fresh state every category is accepted.
    pub(crate) fn record(&mut self, category: Category, value: String) {
        match category {
            Category::Element => self.element = Some(value),
            Category::Id => self.id = Some(value),
            Category::Class => self.classes.push(value),
            Category::Attribute => self.attributes.push(value),
            Category::PseudoClass => self.pseudo_classes.push(value),
            Category::PseudoElement => self.pseudo_element = Some(value),
        }
    }

    /// Specificity of the components collected so far.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let a = u32::from(self.id.is_some());
        let b = self.classes.len() + self.attributes.len() + self.pseudo_classes.len();
        let c = u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some());
        Specificity::new(a, u32::try_from(b).unwrap_or(u32::MAX), c)
    }
}

/// Writes `element#id.class[attr]:pseudo-class::pseudo-element`, skipping
/// absent parts.
impl fmt::Display for SelectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
