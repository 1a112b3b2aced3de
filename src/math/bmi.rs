use std::fmt;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiError {
    #[error("{field} must be a positive number")]
    NonPositive { field: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    ExtremelyObese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::ExtremelyObese => "extremely obese",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bmi(f64);

impl Bmi {
    pub fn from_metric(weight_kg: f64, height_cm: f64) -> Result<Self, BmiError> {
        if !(weight_kg.is_finite() && weight_kg > 0.) {
            return Err(BmiError::NonPositive { field: "weight" });
        }
        if !(height_cm.is_finite() && height_cm > 0.) {
            return Err(BmiError::NonPositive { field: "height" });
        }
        let height_m = height_cm / 100.;
        Ok(Self(weight_kg / (height_m * height_m)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn category(&self) -> BmiCategory {
        match self.0 {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25. => BmiCategory::Normal,
            b if b < 30. => BmiCategory::Overweight,
            b if b < 35. => BmiCategory::Obese,
            _ => BmiCategory::ExtremelyObese,
        }
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.0, self.category().label())
    }
}

#[test]
fn formula_test() {
    let bmi = Bmi::from_metric(70., 175.).unwrap();
    assert!((bmi.value() - 22.857).abs() < 0.001);
    assert_eq!(bmi.category(), BmiCategory::Normal);
    assert_eq!(bmi.to_string(), "22.9 (normal)");
}

#[test]
fn category_boundaries() {
    assert_eq!(Bmi(18.49).category(), BmiCategory::Underweight);
    assert_eq!(Bmi(18.5).category(), BmiCategory::Normal);
    assert_eq!(Bmi(24.99).category(), BmiCategory::Normal);
    assert_eq!(Bmi(25.).category(), BmiCategory::Overweight);
    assert_eq!(Bmi(30.).category(), BmiCategory::Obese);
    assert_eq!(Bmi(34.99).category(), BmiCategory::Obese);
    assert_eq!(Bmi(35.).category(), BmiCategory::ExtremelyObese);
}

#[test]
fn rejects_non_positive() {
    assert_eq!(Bmi::from_metric(0., 170.), Err(BmiError::NonPositive { field: "weight" }));
    assert_eq!(Bmi::from_metric(60., -1.), Err(BmiError::NonPositive { field: "height" }));
    assert_eq!(Bmi::from_metric(f64::NAN, 170.), Err(BmiError::NonPositive { field: "weight" }));
    assert_eq!(BmiError::NonPositive { field: "height" }.to_string(), "height must be a positive number");
}
