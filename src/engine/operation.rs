//! Closed operation sets for the calculator.
//!
//! Binary operators, unary functions, and insertable constants are all
//! tagged enums with exhaustive matching, so an unrecognized operation
//! cannot fall through silently. Evaluation is pure: `apply` takes
//! numbers in and returns a `Result`, with no state touched.

use serde::{Deserialize, Serialize};

use super::error::EvalError;
use super::state::AngleUnit;

/// A binary operator awaiting (or applied to) two operands.
///
/// # Example
///
/// ```rust
/// use reckon::BinaryOp;
///
/// assert_eq!(BinaryOp::Divide.apply(6.0, 3.0), Ok(2.0));
/// assert!(BinaryOp::Divide.apply(6.0, 0.0).is_err());
/// assert_eq!(BinaryOp::Divide.symbol(), "÷");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Display symbol used in rendered expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// The only failure is division by zero. Overflow to infinity is a
    /// valid (if unusual) result and passes through.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

/// A unary function applied to the current operand alone.
///
/// Trigonometric members respect the engine's angle unit; the rest
/// ignore it. Domain violations surface as `EvalError` and become the
/// `"Error"` sentinel at the engine boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log10,
    Pow10,
    Exp,
    Sqrt,
    Factorial,
    Abs,
}

impl UnaryOp {
    /// The function's name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Pow10 => "10^x",
            Self::Exp => "e^x",
            Self::Sqrt => "sqrt",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
        }
    }

    /// Render the operand substituted into this function's expression
    /// template, for history entries.
    ///
    /// ```rust
    /// use reckon::UnaryOp;
    ///
    /// assert_eq!(UnaryOp::Sqrt.expression("9"), "√(9)");
    /// assert_eq!(UnaryOp::Factorial.expression("5"), "5!");
    /// assert_eq!(UnaryOp::Pow10.expression("3"), "10^3");
    /// ```
    pub fn expression(&self, operand: &str) -> String {
        match self {
            Self::Sin => format!("sin({operand})"),
            Self::Cos => format!("cos({operand})"),
            Self::Tan => format!("tan({operand})"),
            Self::Asin => format!("asin({operand})"),
            Self::Acos => format!("acos({operand})"),
            Self::Atan => format!("atan({operand})"),
            Self::Ln => format!("ln({operand})"),
            Self::Log10 => format!("log({operand})"),
            Self::Pow10 => format!("10^{operand}"),
            Self::Exp => format!("e^{operand}"),
            Self::Sqrt => format!("√({operand})"),
            Self::Factorial => format!("{operand}!"),
            Self::Abs => format!("|{operand}|"),
        }
    }

    /// Evaluate the function on `x` under the given angle unit.
    ///
    /// Domain checks run before computing: `asin`/`acos` require an
    /// argument in `[-1, 1]`, `ln`/`log` a positive one, `sqrt` a
    /// non-negative one, and `factorial` a non-negative integer.
    pub fn apply(&self, x: f64, unit: AngleUnit) -> Result<f64, EvalError> {
        match self {
            Self::Sin => Ok(unit.to_radians(x).sin()),
            Self::Cos => Ok(unit.to_radians(x).cos()),
            Self::Tan => Ok(unit.to_radians(x).tan()),
            Self::Asin => {
                self.check_domain(x, (-1.0..=1.0).contains(&x))?;
                Ok(unit.from_radians(x.asin()))
            }
            Self::Acos => {
                self.check_domain(x, (-1.0..=1.0).contains(&x))?;
                Ok(unit.from_radians(x.acos()))
            }
            Self::Atan => Ok(unit.from_radians(x.atan())),
            Self::Ln => {
                self.check_domain(x, x > 0.0)?;
                Ok(x.ln())
            }
            Self::Log10 => {
                self.check_domain(x, x > 0.0)?;
                Ok(x.log10())
            }
            Self::Pow10 => Ok(10f64.powf(x)),
            Self::Exp => Ok(x.exp()),
            Self::Sqrt => {
                self.check_domain(x, x >= 0.0)?;
                Ok(x.sqrt())
            }
            Self::Factorial => {
                self.check_domain(x, x >= 0.0 && x.fract() == 0.0)?;
                Ok(factorial(x as u64))
            }
            Self::Abs => Ok(x.abs()),
        }
    }

    fn check_domain(&self, x: f64, in_domain: bool) -> Result<(), EvalError> {
        if in_domain {
            Ok(())
        } else {
            Err(EvalError::DomainViolation {
                function: self.name(),
                argument: x,
            })
        }
    }
}

/// Iterative product over `1..=n`, with `0! = 1`.
///
/// The accumulator saturates to infinity around `n = 171`; once there,
/// further factors cannot change it, so the loop stops early and stays
/// bounded for arbitrarily large `n`.
fn factorial(n: u64) -> f64 {
    let mut product = 1.0f64;
    for k in 2..=n {
        product *= k as f64;
        if product.is_infinite() {
            break;
        }
    }
    product
}

/// A constant insertable into the current operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// The constant's numeric value.
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn binary_operators_follow_arithmetic_laws() {
        assert_eq!(BinaryOp::Add.apply(7.0, 3.0), Ok(10.0));
        assert_eq!(BinaryOp::Subtract.apply(7.0, 3.0), Ok(4.0));
        assert_eq!(BinaryOp::Multiply.apply(7.0, 3.0), Ok(21.0));
        assert_eq!(BinaryOp::Divide.apply(6.0, 3.0), Ok(2.0));
        let result = BinaryOp::Power.apply(2.0, 10.0).unwrap();
        assert!((result - 1024.0).abs() < EPSILON);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            BinaryOp::Divide.apply(1.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            BinaryOp::Divide.apply(0.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn power_may_overflow_to_infinity() {
        let result = BinaryOp::Power.apply(10.0, 400.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn sin_converts_degrees_on_the_way_in() {
        let result = UnaryOp::Sin.apply(30.0, AngleUnit::Degrees).unwrap();
        assert!((result - 0.5).abs() < EPSILON);

        let radians = 30f64.to_radians();
        let result = UnaryOp::Sin.apply(radians, AngleUnit::Radians).unwrap();
        assert!((result - 0.5).abs() < EPSILON);
    }

    #[test]
    fn asin_converts_degrees_on_the_way_out() {
        let result = UnaryOp::Asin.apply(0.5, AngleUnit::Degrees).unwrap();
        assert!((result - 30.0).abs() < 1e-9);

        let result = UnaryOp::Asin.apply(0.5, AngleUnit::Radians).unwrap();
        assert!((result - 30f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn inverse_trig_rejects_out_of_range_arguments() {
        assert!(UnaryOp::Asin.apply(1.5, AngleUnit::Radians).is_err());
        assert!(UnaryOp::Acos.apply(-1.5, AngleUnit::Radians).is_err());
        assert!(UnaryOp::Asin.apply(1.0, AngleUnit::Radians).is_ok());
        assert!(UnaryOp::Acos.apply(-1.0, AngleUnit::Radians).is_ok());
    }

    #[test]
    fn logarithms_require_positive_arguments() {
        assert!(UnaryOp::Ln.apply(0.0, AngleUnit::Radians).is_err());
        assert!(UnaryOp::Ln.apply(-1.0, AngleUnit::Radians).is_err());
        assert_eq!(UnaryOp::Ln.apply(1.0, AngleUnit::Radians), Ok(0.0));
        assert!(UnaryOp::Log10.apply(0.0, AngleUnit::Radians).is_err());
        let result = UnaryOp::Log10.apply(1000.0, AngleUnit::Radians).unwrap();
        assert!((result - 3.0).abs() < EPSILON);
    }

    #[test]
    fn sqrt_requires_non_negative_argument() {
        assert!(UnaryOp::Sqrt.apply(-4.0, AngleUnit::Radians).is_err());
        assert_eq!(UnaryOp::Sqrt.apply(9.0, AngleUnit::Radians), Ok(3.0));
        assert_eq!(UnaryOp::Sqrt.apply(0.0, AngleUnit::Radians), Ok(0.0));
    }

    #[test]
    fn factorial_is_defined_on_non_negative_integers_only() {
        assert_eq!(UnaryOp::Factorial.apply(0.0, AngleUnit::Radians), Ok(1.0));
        assert_eq!(UnaryOp::Factorial.apply(5.0, AngleUnit::Radians), Ok(120.0));
        assert!(UnaryOp::Factorial.apply(-1.0, AngleUnit::Radians).is_err());
        assert!(UnaryOp::Factorial.apply(2.5, AngleUnit::Radians).is_err());
    }

    #[test]
    fn factorial_saturates_instead_of_looping_forever() {
        let result = UnaryOp::Factorial.apply(1e18, AngleUnit::Radians).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn exponent_family_uses_the_right_base() {
        let result = UnaryOp::Pow10.apply(3.0, AngleUnit::Radians).unwrap();
        assert!((result - 1000.0).abs() < EPSILON);
        let e = UnaryOp::Exp.apply(1.0, AngleUnit::Radians).unwrap();
        assert!((e - std::f64::consts::E).abs() < EPSILON);
    }

    #[test]
    fn abs_strips_the_sign() {
        assert_eq!(UnaryOp::Abs.apply(-7.5, AngleUnit::Radians), Ok(7.5));
        assert_eq!(UnaryOp::Abs.apply(7.5, AngleUnit::Radians), Ok(7.5));
    }

    #[test]
    fn expression_templates_render_the_operand() {
        assert_eq!(UnaryOp::Sin.expression("30"), "sin(30)");
        assert_eq!(UnaryOp::Sqrt.expression("9"), "√(9)");
        assert_eq!(UnaryOp::Factorial.expression("5"), "5!");
        assert_eq!(UnaryOp::Abs.expression("-3"), "|-3|");
        assert_eq!(UnaryOp::Pow10.expression("2"), "10^2");
        assert_eq!(UnaryOp::Exp.expression("1"), "e^1");
        assert_eq!(UnaryOp::Log10.expression("100"), "log(100)");
    }

    #[test]
    fn constants_match_std_values() {
        assert_eq!(Constant::Pi.value(), std::f64::consts::PI);
        assert_eq!(Constant::E.value(), std::f64::consts::E);
        assert_eq!(Constant::Pi.symbol(), "π");
        assert_eq!(Constant::E.symbol(), "e");
    }

    #[test]
    fn operations_serialize_correctly() {
        let json = serde_json::to_string(&BinaryOp::Divide).unwrap();
        let deserialized: BinaryOp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, BinaryOp::Divide);

        let json = serde_json::to_string(&UnaryOp::Factorial).unwrap();
        let deserialized: UnaryOp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, UnaryOp::Factorial);
    }
}
