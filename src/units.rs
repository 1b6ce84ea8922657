//! Cooking unit conversion table
//!
//! Factors are the rounded kitchen approximations (1 cup = 240 ml, 1 g = 1 ml,
//! ...), so `a -> b -> a` comes back within about 1%, not exactly.

use crate::error::{KitchenError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Cup,
    Tablespoon,
    Teaspoon,
    Kg,
    G,
    Mg,
    L,
    Ml,
    Oz,
    Lb,
    Qt,
}

impl Unit {
    /// All units in table order.
    pub const ALL: [Unit; 11] = [
        Unit::Cup,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Kg,
        Unit::G,
        Unit::Mg,
        Unit::L,
        Unit::Ml,
        Unit::Oz,
        Unit::Lb,
        Unit::Qt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Cup => "cup",
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::Qt => "qt",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Multiplier taking a quantity in `self` to a quantity in `to`.
    pub fn factor_to(self, to: Unit) -> f64 {
        FACTORS[self.index()][to.index()]
    }

    pub fn convert(self, to: Unit, value: f64) -> f64 {
        value * self.factor_to(to)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| KitchenError::UnknownUnit(s.to_string()))
    }
}

/// `FACTORS[from][to]`, rows and columns in `Unit::ALL` order.
#[rustfmt::skip]
const FACTORS: [[f64; 11]; 11] = [
    //  cup          tablespoon    teaspoon    kg             g            mg          l             ml          oz            lb             qt
    [1.0,           16.0,          48.0,       0.24,          240.0,       240000.0,   0.24,         240.0,      8.0,          0.5,           0.25],
    [0.0625,        1.0,           3.0,        0.015,         15.0,        15000.0,    0.015,        15.0,       0.5,          0.03125,       0.015625],
    [0.0208333,     0.333333,      1.0,        0.005,         5.0,         5000.0,     0.005,        5.0,        0.166667,     0.0104167,     0.00520833],
    [4.16667,       66.6667,       200.0,      1.0,           1000.0,      1000000.0,  1.0,          1000.0,     35.274,       2.20462,       1.05669],
    [0.00416667,    0.0666667,     0.2,        0.001,         1.0,         1000.0,     0.001,        1.0,        0.035274,     0.00220462,    0.00105669],
    [0.00000416667, 0.0000666667,  0.0002,     0.000001,      0.001,       1.0,        0.000001,     0.001,      0.000035274,  0.00000220462, 0.00000105669],
    [4.16667,       66.6667,       200.0,      1.0,           1000.0,      1000000.0,  1.0,          1000.0,     33.814,       2.20462,       1.05669],
    [0.00416667,    0.0666667,     0.2,        0.001,         1.0,         1000.0,     0.001,        1.0,        0.033814,     0.00220462,    0.00105669],
    [0.125,         2.0,           6.0,        0.0283495,     28.3495,     28349.5,    0.0295735,    29.5735,    1.0,          0.0625,        0.03125],
    [2.0,           32.0,          96.0,       0.453592,      453.592,     453592.0,   0.453592,     453.592,    16.0,         1.0,           0.5],
    [4.0,           64.0,          192.0,      0.946353,      946.353,     946353.0,   0.946353,     946.353,    32.0,         2.0,           1.0],
];

/// Convert `value` between two units given by name. No rounding is applied.
pub fn convert(from: &str, to: &str, value: f64) -> Result<f64> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    Ok(from.convert(to, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-3;

    #[rstest]
    #[case("cup", "tablespoon", 1.0, 16.0)]
    #[case("kg", "g", 2.0, 2000.0)]
    #[case("lb", "oz", 3.0, 48.0)]
    #[case("qt", "cup", 0.5, 2.0)]
    #[case("teaspoon", "ml", 3.0, 15.0)]
    #[case("oz", "g", 10.0, 283.495)]
    #[case("l", "oz", 1.0, 33.814)]
    fn converts_known_pairs(
        #[case] from: &str,
        #[case] to: &str,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        let result = convert(from, to, value).unwrap();
        assert!((result - expected).abs() < TOLERANCE, "{from}->{to}: {result}");
    }

    #[test]
    fn self_conversion_is_identity() {
        for unit in Unit::ALL {
            assert_eq!(unit.factor_to(unit), 1.0);
            assert_eq!(convert(unit.as_str(), unit.as_str(), 12.5).unwrap(), 12.5);
        }
    }

    #[test]
    fn round_trip_within_one_percent() {
        let v = 7.0;
        for a in Unit::ALL {
            for b in Unit::ALL {
                let back = b.convert(a, a.convert(b, v));
                assert!(
                    ((back - v) / v).abs() < 0.01,
                    "{a} -> {b} -> {a} gave {back}"
                );
            }
        }
    }

    #[test]
    fn every_factor_is_positive() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                assert!(a.factor_to(b) > 0.0);
            }
        }
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert_eq!(
            convert("pinch", "g", 1.0),
            Err(KitchenError::UnknownUnit("pinch".to_string()))
        );
        assert_eq!(
            convert("g", "gallon", 1.0),
            Err(KitchenError::UnknownUnit("gallon".to_string()))
        );
    }

    #[test]
    fn names_parse_back_to_units() {
        for unit in Unit::ALL {
            assert_eq!(unit.as_str().parse::<Unit>(), Ok(unit));
            assert_eq!(unit.to_string(), unit.as_str());
        }
    }
}
