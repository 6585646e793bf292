//! Variable-name handling for panel layouts.
//!
//! Wide-format datasets commonly label each period separately
//! ("income2001", "income2002", ...). After stacking, a variable has one
//! column and needs one label, so per-period labels are condensed by
//! dropping the digit suffix.

/// Name supplied for the dependent variable: either a single label or one
/// label per time period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarName {
    Single(String),
    List(Vec<String>),
}

impl VarName {
    /// Collapse to the single label used for long-format output.
    ///
    /// A list with several entries is assumed to carry one label per
    /// period; the period suffix is dropped from the first entry. An empty
    /// list carries no usable label.
    pub(crate) fn resolve(self) -> Option<String> {
        match self {
            VarName::Single(name) => Some(name),
            VarName::List(names) => match names.len() {
                0 => None,
                1 => names.into_iter().next(),
                _ => Some(strip_digits(&names[0])),
            },
        }
    }
}

impl From<&str> for VarName {
    fn from(name: &str) -> Self {
        VarName::Single(name.to_string())
    }
}

impl From<String> for VarName {
    fn from(name: String) -> Self {
        VarName::Single(name)
    }
}

impl From<Vec<String>> for VarName {
    fn from(names: Vec<String>) -> Self {
        VarName::List(names)
    }
}

/// Drop digit characters, turning a per-period label like "income2001"
/// into the bare variable name.
pub(crate) fn strip_digits(name: &str) -> String {
    name.chars().filter(|c| !c.is_ascii_digit()).collect()
}
