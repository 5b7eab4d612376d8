use std::fmt;

/// A rewrite rule applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2 + 3 = 5`
    FoldConstants,

    /// `6/4 = 3/2`
    ReduceRatio,

    /// `2*(3*a) = 6*a`
    FoldCoefficients,

    /// `1*a = a`
    MultiplyOne,

    /// `0*a = 0`
    MultiplyZero,

    /// `0+a = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a/1 = a`
    DivideOne,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `(a/b)*(c/d) = (a*c)/(b*d)`
    MultiplyRatios,

    /// `(a/b)+(c/d) = (a*d+c*b)/(b*d)`
    AddRatios,

    /// `(a/b)-(c/d) = (a*d-c*b)/(b*d)`
    SubtractRatios,

    /// `x^a*x^b = x^(a+b)`
    CombinePowers,

    /// `a+a = 2*a`
    CombineLikeTerms,

    /// `a*2 = 2*a`
    OrderLiterals,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::FoldConstants => "evaluate an operation between two numbers",
            Self::ReduceRatio => "reduce a fraction of two numbers",
            Self::FoldCoefficients => "multiply adjacent coefficients",
            Self::MultiplyOne => "remove a factor of one",
            Self::MultiplyZero => "multiply by zero",
            Self::AddZero => "remove a term of zero",
            Self::SubtractZero => "remove a subtracted zero",
            Self::DivideOne => "remove a division by one",
            Self::PowerOne => "remove an exponent of one",
            Self::PowerZero => "raise to the power of zero",
            Self::MultiplyRatios => "multiply two fractions",
            Self::AddRatios => "add two fractions",
            Self::SubtractRatios => "subtract two fractions",
            Self::CombinePowers => "combine powers of the same base",
            Self::CombineLikeTerms => "combine like terms",
            Self::OrderLiterals => "move a number to the front of a product",
        };
        f.write_str(description)
    }
}
