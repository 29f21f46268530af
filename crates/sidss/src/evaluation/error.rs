/// Design parameter that the score formulas cannot evaluate to a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    ZeroDesignLife,
    ZeroInitialInvestment,
    DesignLifeTooLong { years: u32, max: u32 },
    /// Named quantity overflowed or became NaN.
    NonFinite(&'static str),
}

impl std::fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidParameter::ZeroDesignLife => {
                write!(f, "design life must be at least one year")
            }
            InvalidParameter::ZeroInitialInvestment => write!(
                f,
                "initial investment after subsidy is zero, NPV ratio is undefined"
            ),
            InvalidParameter::DesignLifeTooLong { years, max } => {
                write!(f, "design life of {years} years exceeds the {max} year limit")
            }
            InvalidParameter::NonFinite(quantity) => {
                write!(f, "{quantity} is not a finite number")
            }
        }
    }
}

/// Error raised by the evaluation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid design parameters: {0}")]
    InvalidDesignParameters(InvalidParameter),
}
