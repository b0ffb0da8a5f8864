use std::fmt::{self, Display};

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    GreaterThan,
    LessThan,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThan => "<",
        };
        write!(f, "{}", operator_name)
    }
}

impl ComparisonOperator {
    /// `value`是否满足`value <operator> threshold`；NaN 一律视为不满足
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            ComparisonOperator::GreaterOrEqual => value >= threshold,
            ComparisonOperator::GreaterThan => value > threshold,
            ComparisonOperator::LessThan => value < threshold,
        }
    }
}
