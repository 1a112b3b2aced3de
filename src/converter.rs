use crate::math::{Num, base::NumberBase, error::ConvertError, parsefmt};
use log::debug;
use std::fmt;

/// What a [`Converter::set_from`] call did with its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Parsed; every field now shows the new value.
    Accepted,
    /// Decimal text that does not parse yet. Mirrored in its field only.
    Pending,
    /// Invalid digits for the base. Nothing changed.
    Rejected,
    /// Empty input reset all four fields.
    Cleared,
    /// Same text the field already shows.
    Unchanged,
}

/// Four synchronized radix views of one non-negative integer.
///
/// Only the integer is stored, plus the verbatim text of the field the
/// user is typing into. Every other field is rendered from the integer on
/// demand, so all settled fields always decode to the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    value: Option<Num>,
    editing: Option<(NumberBase, String)>,
}

impl Converter {
    pub fn value(&self) -> Option<&Num> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.editing.is_none()
    }

    pub fn text(&self, base: NumberBase) -> String {
        match &self.editing {
            Some((editing, text)) if *editing == base => text.clone(),
            _ => self
                .value
                .as_ref()
                .map(|n| parsefmt::fmt(n, base))
                .unwrap_or_default(),
        }
    }

    pub fn binary(&self) -> String {
        self.text(NumberBase::Binary)
    }

    pub fn octal(&self) -> String {
        self.text(NumberBase::Octal)
    }

    pub fn decimal(&self) -> String {
        self.text(NumberBase::Decimal)
    }

    pub fn hex(&self) -> String {
        self.text(NumberBase::Hexadecimal)
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.editing = None;
    }

    pub fn set_from_binary(&mut self, text: &str) -> Edit {
        self.set_from(NumberBase::Binary, text)
    }

    pub fn set_from_octal(&mut self, text: &str) -> Edit {
        self.set_from(NumberBase::Octal, text)
    }

    pub fn set_from_decimal(&mut self, text: &str) -> Edit {
        self.set_from(NumberBase::Decimal, text)
    }

    pub fn set_from_hex(&mut self, text: &str) -> Edit {
        self.set_from(NumberBase::Hexadecimal, text)
    }

    pub fn set_from(&mut self, base: NumberBase, text: &str) -> Edit {
        if text.is_empty() {
            debug!("cleared all fields from {base}");
            self.clear();
            return Edit::Cleared;
        }
        if text == self.text(base) {
            return Edit::Unchanged;
        }
        match parsefmt::parse_strict(text, base) {
            Ok(n) => {
                self.value = Some(n);
                self.editing = Some((base, parsefmt::canonical_text(text, base)));
                Edit::Accepted
            },
            // the decimal field keeps whatever was typed until it parses
            Err(e) if base == NumberBase::Decimal => {
                debug!("holding decimal input {text:?}: {e}");
                self.editing = Some((base, text.to_owned()));
                Edit::Pending
            },
            Err(e) => {
                debug!("rejected {base} input {text:?}: {e}");
                Edit::Rejected
            },
        }
    }
}

/// One-shot conversion for non-interactive callers, where invalid input
/// is an error instead of a dropped keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    value: Num,
}

impl Conversion {
    pub fn parse(base: NumberBase, text: &str) -> Result<Self, ConvertError> {
        let value = parsefmt::parse_strict(text.trim(), base)?;
        Ok(Self { value })
    }

    /// Base comes from a `0b`/`0o`/`0x` prefix, decimal otherwise.
    pub fn detect(text: &str) -> Result<Self, ConvertError> {
        let (base, digits) = parsefmt::detect(text);
        Self::parse(base, digits)
    }

    pub fn value(&self) -> &Num {
        &self.value
    }

    pub fn text(&self, base: NumberBase) -> String {
        parsefmt::fmt(&self.value, base)
    }
}

impl From<Conversion> for Converter {
    fn from(c: Conversion) -> Self {
        Self { value: Some(c.value), editing: None }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in NumberBase::ALL {
            writeln!(f, "{:<12}{}", base.label(), self.text(base))?;
        }
        Ok(())
    }
}
