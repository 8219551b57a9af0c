use serde::{Deserialize, Serialize};

use crate::style::format_number;

/// Padding shorthand, in rem units
///
/// Padding can be specified in several shapes:
/// - Flag: `Padding::Flag(true)` → "1rem"
/// - Uniform: `Padding::Uniform(2.0)` → "2rem"
/// - Sides, vertical/horizontal: `Padding::Sides(vec![1.0, 2.0])` → "1rem 2rem"
/// - Sides, top/right/bottom/left: `Padding::Sides(vec![1.0, 2.0, 3.0, 4.0])`
///   → "1rem 2rem 3rem 4rem"
///
/// Any other number of sides produces no padding at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    /// `true` means 1rem on every side, `false` means no padding
    Flag(bool),
    /// Same padding on every side
    Uniform(f64),
    /// Two or four side values
    Sides(Vec<f64>),
}

impl Padding {
    /// Vertical/horizontal padding
    pub fn axes(vertical: f64, horizontal: f64) -> Self {
        Padding::Sides(vec![vertical, horizontal])
    }

    /// Top/right/bottom/left padding
    pub fn sides(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Padding::Sides(vec![top, right, bottom, left])
    }

    /// `false`, `0` and `NaN` request nothing; side lists always count as set
    pub fn is_set(&self) -> bool {
        match self {
            Padding::Flag(flag) => *flag,
            Padding::Uniform(n) => *n != 0.0 && !n.is_nan(),
            Padding::Sides(_) => true,
        }
    }

    /// CSS shorthand for this padding, or `None` when nothing is written
    pub fn to_css(&self) -> Option<String> {
        if !self.is_set() {
            return None;
        }

        match self {
            Padding::Sides(sides) => match sides.as_slice() {
                [v, h] => Some(format!("{}rem {}rem", format_number(*v), format_number(*h))),
                [t, r, b, l] => Some(format!(
                    "{}rem {}rem {}rem {}rem",
                    format_number(*t),
                    format_number(*r),
                    format_number(*b),
                    format_number(*l)
                )),
                other => {
                    tracing::debug!("ignoring padding with {} sides", other.len());
                    None
                }
            },
            Padding::Uniform(n) => Some(format!("{}rem", format_number(*n))),
            Padding::Flag(_) => Some("1rem".to_string()),
        }
    }
}

impl From<bool> for Padding {
    fn from(flag: bool) -> Self {
        Padding::Flag(flag)
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Padding::Uniform(value)
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::Uniform(value as f64)
    }
}

impl From<i32> for Padding {
    fn from(value: i32) -> Self {
        Padding::Uniform(value as f64)
    }
}

impl From<u32> for Padding {
    fn from(value: u32) -> Self {
        Padding::Uniform(value as f64)
    }
}

impl<T: Into<f64>> From<(T, T)> for Padding {
    fn from((vertical, horizontal): (T, T)) -> Self {
        Padding::axes(vertical.into(), horizontal.into())
    }
}

impl<T: Into<f64>> From<(T, T, T, T)> for Padding {
    fn from((top, right, bottom, left): (T, T, T, T)) -> Self {
        Padding::sides(top.into(), right.into(), bottom.into(), left.into())
    }
}

impl<T: Into<f64>, const N: usize> From<[T; N]> for Padding {
    fn from(values: [T; N]) -> Self {
        Padding::Sides(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<f64>> From<Vec<T>> for Padding {
    fn from(values: Vec<T>) -> Self {
        Padding::Sides(values.into_iter().map(Into::into).collect())
    }
}
