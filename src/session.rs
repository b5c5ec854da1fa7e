// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive country/language selection loop
//!
//! The session walks a small state machine:
//!
//! ```text
//! AwaitingCountry ──name──▶ AwaitingLanguage ──name──▶ result ──enter──▶ AwaitingCountry
//!        │                        │                      │
//!        └───────── quit ─────────┴──────── quit ────────┴──▶ Done
//! ```
//!
//! An unknown language sends the user back to the country prompt. End of
//! input counts as `quit` at every prompt.

use crate::i18n::LanguageCodeConverter;
use crate::store::{Translator, ENGLISH};
use anyhow::{anyhow, Result};
use colored::*;
use std::io::{BufRead, Write};

/// Input that ends the session at any prompt, compared ignoring case.
pub const QUIT: &str = "quit";

const COUNTRY_PROMPT: &str = "Select a country from above or type 'quit' to exit:";
const LANGUAGE_PROMPT: &str = "Select a language from above or type 'quit' to exit:";
const CONTINUE_PROMPT: &str = "Press enter to continue or type 'quit' to exit.";
const INVALID_COUNTRY: &str = "Invalid country selected.";
const INVALID_LANGUAGE: &str = "Invalid language selected.";
const NO_LANGUAGES: &str = "No available languages for this country.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingCountry,
    AwaitingLanguage { code: String, entered: String },
    Done,
}

/// English names of every country, sorted. Countries without an English
/// name are left out.
pub fn country_names<T: Translator + ?Sized>(translator: &T) -> Vec<String> {
    let mut names: Vec<String> = translator
        .countries()
        .iter()
        .filter_map(|code| translator.translate(code, ENGLISH))
        .collect();
    names.sort();
    names
}

/// Code of the first country whose English name matches `name` ignoring case.
pub fn resolve_country<T: Translator + ?Sized>(translator: &T, name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    translator.countries().into_iter().find(|code| {
        translator
            .translate(code, ENGLISH)
            .map(|english| english.to_lowercase() == name)
            .unwrap_or(false)
    })
}

/// Display names of the languages offered for a country, sorted. Codes the
/// converter does not know are dropped.
pub fn language_names<T: Translator + ?Sized>(
    translator: &T,
    converter: &LanguageCodeConverter,
    country: &str,
) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = translator
        .languages_for(country)
        .iter()
        .filter_map(|code| converter.name_for(code))
        .filter(|name| !name.is_empty())
        .collect();
    names.sort_unstable();
    names
}

/// Resolve a country and a language by English name and format the result
/// line the session prints. Fails when either name does not resolve or the
/// country has no name in that language.
pub fn translate_once<T: Translator + ?Sized>(
    translator: &T,
    country: &str,
    language: &str,
) -> Result<String> {
    let country = country.trim();
    let language = language.trim();
    let code = resolve_country(translator, country)
        .ok_or_else(|| anyhow!("unknown country: {}", country))?;
    let language_code = LanguageCodeConverter::new()
        .code_for(language)
        .ok_or_else(|| anyhow!("unknown language: {}", language))?;
    let translated = translator
        .translate(&code, language_code)
        .ok_or_else(|| anyhow!("no {} name for {}", language, country))?;
    Ok(format!("{} in {} is {}", country, language, translated))
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT)
}

/// One interactive run over a translator, reading lines from `input` and
/// writing prompts and results to `output`.
pub struct Session<'a, T: Translator + ?Sized, R, W> {
    translator: &'a T,
    converter: LanguageCodeConverter,
    input: R,
    output: W,
    color: bool,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: Translator + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(translator: &'a T, input: R, output: W) -> Self {
        Self {
            translator,
            converter: LanguageCodeConverter::new(),
            input,
            output,
            color: false,
        }
    }

    /// Style prompts and error lines with ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run until the user quits or input runs out.
    pub fn run(mut self) -> Result<()> {
        let mut state = State::AwaitingCountry;
        while state != State::Done {
            state = match state {
                State::AwaitingCountry => self.await_country()?,
                State::AwaitingLanguage { code, entered } => self.await_language(&code, &entered)?,
                State::Done => State::Done,
            };
        }
        self.output.flush()?;
        Ok(())
    }

    fn await_country(&mut self) -> Result<State> {
        for name in country_names(self.translator) {
            writeln!(self.output, "{}", name)?;
        }
        self.prompt(COUNTRY_PROMPT)?;

        let entered = match self.read_line()? {
            Some(line) if !is_quit(&line) => line,
            _ => return Ok(State::Done),
        };

        match resolve_country(self.translator, &entered) {
            Some(code) => Ok(State::AwaitingLanguage { code, entered }),
            None => {
                tracing::debug!(input = %entered, "no country matches selection");
                self.complain(INVALID_COUNTRY)?;
                Ok(State::AwaitingCountry)
            }
        }
    }

    fn await_language(&mut self, country: &str, country_entered: &str) -> Result<State> {
        let names = language_names(self.translator, &self.converter, country);
        if names.is_empty() {
            writeln!(self.output, "{}", NO_LANGUAGES)?;
            return Ok(State::Done);
        }
        for name in &names {
            writeln!(self.output, "{}", name)?;
        }
        self.prompt(LANGUAGE_PROMPT)?;

        let entered = match self.read_line()? {
            Some(line) if !is_quit(&line) => line,
            _ => return Ok(State::Done),
        };

        let translated = self
            .converter
            .code_for(&entered)
            .and_then(|code| self.translator.translate(country, code));
        let translated = match translated {
            Some(name) => name,
            None => {
                tracing::debug!(country, input = %entered, "no translation for selection");
                self.complain(INVALID_LANGUAGE)?;
                return Ok(State::AwaitingCountry);
            }
        };

        writeln!(
            self.output,
            "{} in {} is {}",
            country_entered, entered, translated
        )?;
        self.prompt(CONTINUE_PROMPT)?;

        match self.read_line()? {
            Some(line) if !is_quit(&line) => Ok(State::AwaitingCountry),
            _ => Ok(State::Done),
        }
    }

    /// Next input line without its line ending and surrounding whitespace,
    /// or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced, so such a line is simply an
    /// unknown selection.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.bold().cyan())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn complain(&mut self, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.red())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
