//! CSS selector building
//!
//! Assembles compound selectors component by component and joins them with
//! combinators, following the component order of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Nothing here
//! parses or matches selectors; inputs are written out verbatim.

mod builder;
mod category;
mod combinator;
mod error;
mod state;

pub use builder::SelectorBuilder;
pub use category::Category;
pub use combinator::{Combinator, CombinedSelector, SelectorFragment, combine, combine_lenient};
pub use error::SelectorError;
pub use state::{SelectorState, Specificity};
