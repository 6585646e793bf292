//! spreg-panel: data-shaping utilities for panel regression preprocessing.
//!
//! This crate prepares variables observed across spatial units and time
//! periods for estimation: layout checking with wide-to-long conversion
//! (`layout::check_panel`) and the fixed-effects within transformation
//! (`demean::demean_panel`). Estimation itself lives in the calling
//! regression routines; this crate only validates and reshapes.
//!
//! Both operations are pure: inputs are read, new arrays are returned.
pub mod demean;
pub mod error;
pub mod layout;
pub mod names;
pub mod weights;
