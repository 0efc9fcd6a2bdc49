//! Fluent CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element components
//!   - Canonical component order and single-use element/id/pseudo-element
//!   - Specificity of the assembled compound
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling joins
//!   - Arbitrary nesting, flattened left to right
//!
//! # Not Implemented
//!
//! - Selector parsing or syntax validation
//! - Matching selectors against a document
//!
//! # Example
//!
//! ```
//! use kata_css::{combine, element, id};
//!
//! # fn main() -> Result<(), kata_css::selector::SelectorError> {
//! let editable = id("main").class("container")?.class("editable")?;
//! assert_eq!(editable.serialize(), "#main.container.editable");
//!
//! let pair = combine(element("div").id("main")?, "+", element("table").id("data")?)?;
//! assert_eq!(pair.serialize(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

pub mod selector;

pub use selector::{
    Category, Combinator, CombinedSelector, SelectorBuilder, SelectorError, SelectorFragment,
    combine, combine_lenient,
};

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Element, name)
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, name)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, name)
}

/// Start a selector with an attribute selector. `expr` goes between the
/// brackets unchanged, e.g. `href$=".png"`.
#[must_use]
pub fn attribute(expr: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, expr)
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, name)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, name)
}
