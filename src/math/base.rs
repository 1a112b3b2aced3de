use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::error::ConvertError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    // display order for frontends
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Binary,
        NumberBase::Octal,
        NumberBase::Decimal,
        NumberBase::Hexadecimal,
    ];

    pub fn place_value(&self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// Whether `c` is a digit of this base. Hex accepts both letter cases.
    pub fn accepts(&self, c: char) -> bool {
        c.to_digit(self.place_value()).is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumberBase::Binary => "Binary",
            NumberBase::Octal => "Octal",
            NumberBase::Decimal => "Decimal",
            NumberBase::Hexadecimal => "Hexadecimal",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            NumberBase::Binary => "0b",
            NumberBase::Octal => "0o",
            NumberBase::Decimal => "",
            NumberBase::Hexadecimal => "0x",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            NumberBase::Binary => NumberBase::Octal,
            NumberBase::Octal => NumberBase::Decimal,
            NumberBase::Decimal => NumberBase::Hexadecimal,
            NumberBase::Hexadecimal => NumberBase::Binary,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            NumberBase::Binary => NumberBase::Hexadecimal,
            NumberBase::Octal => NumberBase::Binary,
            NumberBase::Decimal => NumberBase::Octal,
            NumberBase::Hexadecimal => NumberBase::Decimal,
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NumberBase {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "bin" | "binary" | "b2" | "2" => Ok(NumberBase::Binary),
            "o" | "oct" | "octal" | "b8" | "8" => Ok(NumberBase::Octal),
            "d" | "dec" | "decimal" | "b10" | "10" => Ok(NumberBase::Decimal),
            "x" | "h" | "hex" | "hexadecimal" | "b16" | "16" => Ok(NumberBase::Hexadecimal),
            _ => Err(ConvertError::UnknownBase(s.to_owned())),
        }
    }
}

#[test]
fn accepts_test() {
    assert!(NumberBase::Binary.accepts('1'));
    assert!(!NumberBase::Binary.accepts('2'));
    assert!(NumberBase::Octal.accepts('7'));
    assert!(!NumberBase::Octal.accepts('8'));
    assert!(!NumberBase::Decimal.accepts('A'));
    assert!(NumberBase::Hexadecimal.accepts('f'));
    assert!(NumberBase::Hexadecimal.accepts('F'));
    assert!(!NumberBase::Hexadecimal.accepts('g'));
    assert!(!NumberBase::Decimal.accepts('-'));
}

#[test]
fn from_str_test() {
    assert_eq!("x".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
    assert_eq!("B16".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
    assert_eq!("binary".parse::<NumberBase>().unwrap(), NumberBase::Binary);
    assert_eq!("oct".parse::<NumberBase>().unwrap(), NumberBase::Octal);
    assert_eq!(" 10 ".parse::<NumberBase>().unwrap(), NumberBase::Decimal);
    assert_eq!(
        "base3".parse::<NumberBase>(),
        Err(ConvertError::UnknownBase("base3".to_owned()))
    );
}

#[test]
fn cycle_test() {
    for base in NumberBase::ALL {
        assert_eq!(base.next().prev(), base);
    }
    assert_eq!(NumberBase::Hexadecimal.next(), NumberBase::Binary);
}
