use super::base::NumberBase;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no digits to convert")]
    Empty,
    #[error("invalid {base} digit {digit:?} at position {position}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: NumberBase,
    },
    #[error("unknown base {0:?}, expected one of b, o, d, x")]
    UnknownBase(String),
}

#[test]
fn display_test() {
    let e = ConvertError::InvalidDigit { digit: '2', position: 3, base: NumberBase::Binary };
    assert_eq!(e.to_string(), "invalid Binary digit '2' at position 3");
    assert_eq!(ConvertError::Empty.to_string(), "no digits to convert");
}
