use std::str::FromStr;
use std::{error::Error, fmt};

/// One field of an explicit view entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldInput<T> {
    /// Left blank, keep the current value.
    #[default]
    Unchanged,
    Value(T),
    /// Text that did not parse as a number.
    Unparsable(String),
}

impl<T: FromStr> FieldInput<T> {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if text.is_empty() {
            return Self::Unchanged;
        }

        match text.parse() {
            Ok(value) => Self::Value(value),
            Err(_) => Self::Unparsable(text.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitField {
    X,
    Y,
    Scale,
    MaxIterations,
}

impl ExplicitField {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Scale => "scale",
            Self::MaxIterations => "max iterations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorReason {
    NotANumber(String),
    NonFinite,
    NotPositive,
    TooLarge,
}

/// Why a single explicit field was rejected. The other fields still apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ExplicitField,
    pub reason: FieldErrorReason,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.display_name();

        match &self.reason {
            FieldErrorReason::NotANumber(text) => {
                write!(f, "{}: '{}' is not a number", field, text)
            }
            FieldErrorReason::NonFinite => write!(f, "{} must be finite", field),
            FieldErrorReason::NotPositive => write!(f, "{} must be greater than zero", field),
            FieldErrorReason::TooLarge => write!(f, "{} is too large", field),
        }
    }
}

impl Error for FieldError {}

/// Accepted values from an [`ExplicitView`]; `None` means keep the current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedView {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub max_iterations: Option<u32>,
    pub rejected: Vec<FieldError>,
}

/// Focus, scale and iteration budget typed in by the user, each independently optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplicitView {
    pub x: FieldInput<f64>,
    pub y: FieldInput<f64>,
    pub scale: FieldInput<f64>,
    pub max_iterations: FieldInput<i64>,
}

impl ExplicitView {
    pub fn parse(x: &str, y: &str, scale: &str, max_iterations: &str) -> Self {
        Self {
            x: FieldInput::parse(x),
            y: FieldInput::parse(y),
            scale: FieldInput::parse(scale),
            max_iterations: FieldInput::parse(max_iterations),
        }
    }

    #[must_use]
    pub fn validate(&self) -> ValidatedView {
        let mut rejected = Vec::new();

        let x = accept(ExplicitField::X, &self.x, check_finite, &mut rejected);
        let y = accept(ExplicitField::Y, &self.y, check_finite, &mut rejected);
        let scale = accept(ExplicitField::Scale, &self.scale, check_scale, &mut rejected);
        let max_iterations = accept(
            ExplicitField::MaxIterations,
            &self.max_iterations,
            check_max_iterations,
            &mut rejected,
        );

        ValidatedView {
            x,
            y,
            scale,
            max_iterations,
            rejected,
        }
    }
}

fn accept<T: Copy, U>(
    field: ExplicitField,
    input: &FieldInput<T>,
    check: impl Fn(T) -> Result<U, FieldErrorReason>,
    rejected: &mut Vec<FieldError>,
) -> Option<U> {
    let reason = match input {
        FieldInput::Unchanged => return None,
        FieldInput::Value(value) => match check(*value) {
            Ok(accepted) => return Some(accepted),
            Err(reason) => reason,
        },
        FieldInput::Unparsable(text) => FieldErrorReason::NotANumber(text.clone()),
    };

    rejected.push(FieldError { field, reason });
    None
}

fn check_finite(value: f64) -> Result<f64, FieldErrorReason> {
    if !value.is_finite() {
        return Err(FieldErrorReason::NonFinite);
    }
    Ok(value)
}

fn check_scale(value: f64) -> Result<f64, FieldErrorReason> {
    let value = check_finite(value)?;
    if value <= 0.0 {
        return Err(FieldErrorReason::NotPositive);
    }
    Ok(value)
}

fn check_max_iterations(value: i64) -> Result<u32, FieldErrorReason> {
    if value <= 0 {
        return Err(FieldErrorReason::NotPositive);
    }
    u32::try_from(value).map_err(|_| FieldErrorReason::TooLarge)
}
