use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Inverted interval for {what}: min={min}, max={max}")]
    InvertedInterval {
        what: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Unknown ingredient: {key}")]
    UnknownIngredient { key: String },
}
