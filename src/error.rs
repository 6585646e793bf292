use std::error::Error;
use std::fmt;

/// Custom error type for panel layout and naming failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The unit count does not evenly divide the dependent variable's rows.
    UnbalancedPanel { rows: usize, units: usize },
    /// An X name list whose length matches neither k nor k*t.
    NameCountMismatch { given: usize, k: usize, t: usize },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanelError::UnbalancedPanel { rows, units } => write!(
                f,
                "y must be nt x 1 or n x t: {} rows cannot be split evenly across {} spatial units",
                rows, units
            ),
            PanelError::NameCountMismatch { given, k, t } => write!(
                f,
                "names of columns in x must have exactly k or k*t elements (got {}, expected {} or {})",
                given,
                k,
                k * t
            ),
        }
    }
}

impl Error for PanelError {}
