//! Validation and evaluation of calculator operations.
//!
//! Every operation is a variant of [`Operation`], which carries its route
//! name and arity. Validation turns raw query text into a [`Calculation`],
//! an operation bound to operands of the right shape, so evaluation can
//! never see a missing operand. Routing, validation and evaluation all
//! dispatch off the same enums, so adding an operation is a compile-checked
//! change in one place.

/// Arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Sqrt,
}

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// A validated calculation: the operation together with operands of its
/// arity. [`Operation::validate`] is the only constructor on the request
/// path, so a binary variant always carries both numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Add(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    Power(f64, f64),
    Modulo(f64, f64),
    Sqrt(f64),
}

/// Raw operand text failed to parse as finite numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOperands {
    arity: Arity,
}

impl InvalidOperands {
    pub fn message(&self) -> &'static str {
        match self.arity {
            Arity::Binary => "Both num1 and num2 must be numbers.",
            Arity::Unary => "num1 must be a number.",
        }
    }
}

/// Domain errors checked before the arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero,
    ModuloByZero,
    NegativeRadicand,
}

impl EvalError {
    pub fn message(&self) -> &'static str {
        match self {
            EvalError::DivisionByZero => "Cannot divide by zero.",
            EvalError::ModuloByZero => "Cannot perform modulo by zero.",
            EvalError::NegativeRadicand => "Cannot get the square root of a negative number.",
        }
    }
}

impl Operation {
    /// Route segment and persisted name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
            Operation::Sqrt => "sqrt",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operation::Sqrt => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Parse the raw query operands this operation requires.
    ///
    /// Binary operations need both `num1` and `num2`; `sqrt` only `num1`.
    /// Missing values, unparseable text and non-finite numbers all fail the
    /// same way, with an arity-specific message.
    pub fn validate(
        &self,
        num1: Option<&str>,
        num2: Option<&str>,
    ) -> Result<Calculation, InvalidOperands> {
        let invalid = InvalidOperands {
            arity: self.arity(),
        };

        let num1 = parse_operand(num1).ok_or(invalid)?;

        if let Operation::Sqrt = self {
            return Ok(Calculation::Sqrt(num1));
        }
        let num2 = parse_operand(num2).ok_or(invalid)?;

        Ok(match self {
            Operation::Add => Calculation::Add(num1, num2),
            Operation::Subtract => Calculation::Subtract(num1, num2),
            Operation::Multiply => Calculation::Multiply(num1, num2),
            Operation::Divide => Calculation::Divide(num1, num2),
            Operation::Power => Calculation::Power(num1, num2),
            Operation::Modulo => Calculation::Modulo(num1, num2),
            Operation::Sqrt => Calculation::Sqrt(num1),
        })
    }
}

impl Calculation {
    pub fn operation(&self) -> Operation {
        match self {
            Calculation::Add(..) => Operation::Add,
            Calculation::Subtract(..) => Operation::Subtract,
            Calculation::Multiply(..) => Operation::Multiply,
            Calculation::Divide(..) => Operation::Divide,
            Calculation::Power(..) => Operation::Power,
            Calculation::Modulo(..) => Operation::Modulo,
            Calculation::Sqrt(..) => Operation::Sqrt,
        }
    }

    pub fn num1(&self) -> f64 {
        match *self {
            Calculation::Add(num1, _)
            | Calculation::Subtract(num1, _)
            | Calculation::Multiply(num1, _)
            | Calculation::Divide(num1, _)
            | Calculation::Power(num1, _)
            | Calculation::Modulo(num1, _)
            | Calculation::Sqrt(num1) => num1,
        }
    }

    /// None for unary calculations, mirroring the persisted record.
    pub fn num2(&self) -> Option<f64> {
        match *self {
            Calculation::Add(_, num2)
            | Calculation::Subtract(_, num2)
            | Calculation::Multiply(_, num2)
            | Calculation::Divide(_, num2)
            | Calculation::Power(_, num2)
            | Calculation::Modulo(_, num2) => Some(num2),
            Calculation::Sqrt(_) => None,
        }
    }

    /// Evaluate the calculation.
    ///
    /// Pure function of its inputs; the only failures are the explicit
    /// by-zero and negative-radicand checks, each tested before the
    /// arithmetic runs. `power` follows IEEE `powf` semantics, so a
    /// real-domain-invalid combination (negative base, fractional exponent)
    /// produces NaN rather than an error.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        match *self {
            Calculation::Add(num1, num2) => Ok(num1 + num2),
            Calculation::Subtract(num1, num2) => Ok(num1 - num2),
            Calculation::Multiply(num1, num2) => Ok(num1 * num2),
            Calculation::Divide(num1, num2) => {
                if num2 == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(num1 / num2)
            }
            Calculation::Power(num1, num2) => Ok(num1.powf(num2)),
            Calculation::Modulo(num1, num2) => {
                if num2 == 0.0 {
                    return Err(EvalError::ModuloByZero);
                }
                Ok(num1 % num2)
            }
            Calculation::Sqrt(num1) => {
                if num1 < 0.0 {
                    return Err(EvalError::NegativeRadicand);
                }
                Ok(num1.sqrt())
            }
        }
    }
}

fn parse_operand(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Calculation::Add(2.0, 3.0).evaluate(), Ok(5.0));
        assert_eq!(Calculation::Subtract(2.0, 3.0).evaluate(), Ok(-1.0));
        assert_eq!(Calculation::Multiply(4.0, 2.5).evaluate(), Ok(10.0));
        assert_eq!(Calculation::Divide(10.0, 4.0).evaluate(), Ok(2.5));
        assert_eq!(Calculation::Power(2.0, 10.0).evaluate(), Ok(1024.0));
        assert_eq!(Calculation::Modulo(7.0, 3.0).evaluate(), Ok(1.0));
        assert_eq!(Calculation::Sqrt(16.0).evaluate(), Ok(4.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Calculation::Divide(10.0, 0.0).evaluate(),
            Err(EvalError::DivisionByZero)
        );
        // Zero over zero is still rejected before any arithmetic
        assert_eq!(
            Calculation::Divide(0.0, 0.0).evaluate(),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Calculation::Divide(10.0, -0.0).evaluate(),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(
            Calculation::Modulo(7.0, 0.0).evaluate(),
            Err(EvalError::ModuloByZero)
        );
        assert_eq!(
            Calculation::Modulo(0.0, 0.0).evaluate(),
            Err(EvalError::ModuloByZero)
        );
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(
            Calculation::Sqrt(-4.0).evaluate(),
            Err(EvalError::NegativeRadicand)
        );
        assert_eq!(Calculation::Sqrt(0.0).evaluate(), Ok(0.0));
    }

    #[test]
    fn test_power_nan_passes_through() {
        // Negative base with fractional exponent has no real result; powf
        // yields NaN and the evaluator passes it along untrapped.
        let result = Calculation::Power(-8.0, 0.5).evaluate().unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let calculation = Calculation::Power(1.25, 9.5);
        assert_eq!(calculation.evaluate(), calculation.evaluate());
    }

    #[test]
    fn test_validate_binary_operands() {
        let calculation = Operation::Add.validate(Some("2"), Some("3")).unwrap();
        assert_eq!(calculation, Calculation::Add(2.0, 3.0));

        let err = Operation::Add.validate(Some("abc"), Some("3")).unwrap_err();
        assert_eq!(err.message(), "Both num1 and num2 must be numbers.");

        let err = Operation::Multiply.validate(Some("2"), None).unwrap_err();
        assert_eq!(err.message(), "Both num1 and num2 must be numbers.");
    }

    #[test]
    fn test_validate_unary_operands() {
        let calculation = Operation::Sqrt.validate(Some("16"), None).unwrap();
        assert_eq!(calculation, Calculation::Sqrt(16.0));

        // A stray num2 is irrelevant for sqrt
        let calculation = Operation::Sqrt.validate(Some("16"), Some("junk")).unwrap();
        assert_eq!(calculation, Calculation::Sqrt(16.0));

        let err = Operation::Sqrt.validate(None, None).unwrap_err();
        assert_eq!(err.message(), "num1 must be a number.");
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(Operation::Add.validate(Some("inf"), Some("1")).is_err());
        assert!(Operation::Add.validate(Some("1"), Some("NaN")).is_err());
        assert!(Operation::Sqrt.validate(Some("-inf"), None).is_err());
    }

    #[test]
    fn test_validate_accepts_floats_and_negatives() {
        let calculation = Operation::Divide
            .validate(Some("-10.5"), Some("0.25"))
            .unwrap();
        assert_eq!(calculation, Calculation::Divide(-10.5, 0.25));
    }

    #[test]
    fn test_calculation_record_fields() {
        let calculation = Operation::Add.validate(Some("2"), Some("3")).unwrap();
        assert_eq!(calculation.operation(), Operation::Add);
        assert_eq!(calculation.num1(), 2.0);
        assert_eq!(calculation.num2(), Some(3.0));

        let calculation = Operation::Sqrt.validate(Some("16"), None).unwrap();
        assert_eq!(calculation.operation(), Operation::Sqrt);
        assert_eq!(calculation.num1(), 16.0);
        assert_eq!(calculation.num2(), None);
    }
}
