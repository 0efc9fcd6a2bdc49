//! Selector component categories and their canonical order.

use strum_macros::Display;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of simple selector a builder call contributes. Variants are
/// declared in the order they must appear inside a compound selector, so the
/// derived `Ord` is the ordering check.
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
///    1    2   3    4        5              6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    Element = 1,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id = 2,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.btn`
    Class = 3,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors),
    /// e.g. `[href$=".png"]`
    Attribute = 4,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:focus`
    PseudoClass = 5,
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements),
    /// e.g. `::before`
    PseudoElement = 6,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this category inside a compound selector (1-6).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a compound selector may contain this category at most once.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}
