// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for lang-publish.
//!
//! Two static tables live here:
//!
//! - [`names`]: display names for pack codes (`pt_BR` → "Brazilian
//!   Portuguese"), used in the language listing and the dialect prompt.
//! - [`catalog`]: the wizard's own messages, keyed by dotted names such as
//!   `"copy.added"`, in English, German, French and Spanish.
//!
//! Both are embedded at compile time and never mutated.

mod catalog;
mod names;

pub use catalog::{t, t_with, Lang};
pub use names::language_name;
