//! Joining compound selectors with combinators.

use std::fmt;
use std::str::FromStr;

use kata_common::warning::warn_once;

use super::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// Recognize a combinator token.
    ///
    /// Surrounding spaces are ignored; a non-empty token made only of spaces
    /// is the descendant combinator. Other whitespace is not a combinator.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`] for anything other than
    /// ` `, `+`, `~` or `>`.
    pub fn from_token(token: &str) -> Result<Self, SelectorError> {
        match token.trim_matches(' ') {
            "" if !token.is_empty() => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::InvalidCombinator {
                token: token.to_string(),
            }),
        }
    }

    /// The token character; a single space for the descendant combinator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can stand on either side of a combinator.
pub trait SelectorFragment {
    /// Render this fragment as selector text.
    fn serialize(&self) -> String;
}

impl<T: SelectorFragment + ?Sized> SelectorFragment for &T {
    fn serialize(&self) -> String {
        (**self).serialize()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// The rendered result of [`combine`]. It has no category state of its own
/// and can be combined again, flattening left to right:
///
/// ```text
/// combine(combine(A, "+", B), "~", combine(C, " ", D))  =>  "A + B ~ C D"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    /// The stored selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The stored selector text, unchanged.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.text.clone()
    }

    /// A token of only spaces (the descendant combinator) collapses into the
    /// single separating space.
    fn join(left: &str, token: &str, right: &str) -> Self {
        let token = token.trim_matches(' ');
        let text = if token.is_empty() {
            format!("{left} {right}")
        } else {
            format!("{left} {token} {right}")
        };
        Self { text }
    }
}

impl SelectorFragment for CombinedSelector {
    fn serialize(&self) -> String {
        Self::serialize(self)
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<CombinedSelector> for String {
    fn from(selector: CombinedSelector) -> Self {
        selector.text
    }
}

/// Join two fragments with a combinator token.
///
/// The token is written with exactly one space on each side, whatever
/// spacing it was given with; the descendant combinator becomes a single
/// space.
///
/// # Errors
///
/// [`SelectorError::InvalidCombinator`] if `token` is not ` `, `+`, `~` or `>`.
///
/// # Example
/// ```
/// use kata_css::{combine, element};
///
/// # fn main() -> Result<(), kata_css::selector::SelectorError> {
/// let selector = combine(element("div").id("main")?, "+", element("table").id("data")?)?;
/// assert_eq!(selector.serialize(), "div#main + table#data");
/// # Ok(())
/// # }
/// ```
pub fn combine(
    left: impl SelectorFragment,
    token: &str,
    right: impl SelectorFragment,
) -> Result<CombinedSelector, SelectorError> {
    let combinator = Combinator::from_token(token)?;
    Ok(CombinedSelector::join(
        &left.serialize(),
        combinator.as_str(),
        &right.serialize(),
    ))
}

/// Join two fragments, accepting any token verbatim.
///
/// Surrounding spaces are still trimmed. Tokens that are not CSS
/// combinators are kept but reported once through the warning sink.
pub fn combine_lenient(
    left: impl SelectorFragment,
    token: &str,
    right: impl SelectorFragment,
) -> CombinedSelector {
    let token = match Combinator::from_token(token) {
        Ok(combinator) => combinator.as_str(),
        Err(_) => {
            let trimmed = token.trim_matches(' ');
            warn_once(
                "Selector",
                &format!("'{trimmed}' is not a CSS combinator; inserted verbatim"),
            );
            trimmed
        }
    };
    CombinedSelector::join(&left.serialize(), token, &right.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(&'static str);

    impl SelectorFragment for Raw {
        fn serialize(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Combinator::from_token(" "), Ok(Combinator::Descendant));
        assert_eq!(Combinator::from_token("   "), Ok(Combinator::Descendant));
        assert_eq!(Combinator::from_token(">"), Ok(Combinator::Child));
        assert_eq!(Combinator::from_token(" + "), Ok(Combinator::NextSibling));
        assert_eq!("~".parse::<Combinator>(), Ok(Combinator::SubsequentSibling));
        assert_eq!(
            Combinator::from_token("||"),
            Err(SelectorError::InvalidCombinator {
                token: "||".to_string()
            })
        );
    }

    #[test]
    fn test_from_token_rejects_empty_and_other_whitespace() {
        for token in ["", "\t", "\n", " \t\n "] {
            assert_eq!(
                Combinator::from_token(token),
                Err(SelectorError::InvalidCombinator {
                    token: token.to_string()
                })
            );
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for combinator in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
        ] {
            assert_eq!(combinator.to_string(), combinator.as_str());
        }
        assert_eq!(Combinator::Descendant.as_str(), " ");
        assert_eq!(Combinator::Child.as_str(), ">");
    }

    #[test]
    fn test_join_spacing() {
        assert_eq!(combine(Raw("a"), ">", Raw("b")).unwrap().as_str(), "a > b");
        assert_eq!(combine(Raw("a"), "  ~", Raw("b")).unwrap().as_str(), "a ~ b");
        assert_eq!(combine(Raw("a"), " ", Raw("b")).unwrap().as_str(), "a b");
    }

    #[test]
    fn test_lenient_keeps_unknown_token() {
        let selector = combine_lenient(Raw("col"), " || ", Raw("td"));
        assert_eq!(selector.as_str(), "col || td");
    }

    #[test]
    fn test_lenient_matches_strict_for_known_tokens() {
        for token in [" ", "+", "~", ">"] {
            assert_eq!(
                combine_lenient(Raw("a"), token, Raw("b")),
                combine(Raw("a"), token, Raw("b")).unwrap()
            );
        }
    }

    #[test]
    fn test_into_string() {
        let text: String = combine(Raw("a"), "+", Raw("b")).unwrap().into();
        assert_eq!(text, "a + b");
    }
}
