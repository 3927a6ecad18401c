/// A binary arithmetic operator.
///
/// The set of operators is fixed. Each variant knows its symbol, its
/// precedence and how to combine two operands, so no lookup table is needed.
/// All operators are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Every supported operator, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Looks up the operator written as `symbol`.
    ///
    /// Only an exact match counts: `"+"` is an operator, `"+1"` is not.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Binding strength of the operator. Higher binds tighter; equal values
    /// are resolved left to right.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Computes `left <op> right` in double precision.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or
    /// `NaN` rather than an error.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0), 6.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
