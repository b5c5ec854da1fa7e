// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator — country names in other languages.
//!
//! The crate has three parts:
//! 1. **Store**: an immutable lookup table of country names per language,
//!    loaded once from a JSON dataset.
//! 2. **I18n**: the fixed mapping between language names and ISO 639-1 codes.
//! 3. **Session**: the interactive prompt loop that asks for a country and a
//!    language and prints the translated name.

pub mod i18n;
pub mod session;
pub mod store;
