//! Errors raised while assembling a selector.

use thiserror::Error;

use super::Category;

/// A builder call or combination that would produce an invalid selector.
///
/// Every variant is final for the chain that raised it: the builder is
/// consumed and a new one must be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A category that may appear only once (element, id, pseudo-element)
    /// was supplied a second time.
    #[error("{category} selector may only be set once")]
    Duplicate {
        /// The category that was already set.
        category: Category,
    },

    /// A component was supplied after a component that must follow it,
    /// e.g. an id after a class.
    #[error("{attempted} selector cannot follow {last} selector")]
    Order {
        /// The category of the rejected call.
        attempted: Category,
        /// The highest category accepted so far.
        last: Category,
    },

    /// The token passed to `combine` is not one of ` `, `+`, `~`, `>`.
    #[error("'{token}' is not a CSS combinator")]
    InvalidCombinator {
        /// The rejected token, as given.
        token: String,
    },
}
