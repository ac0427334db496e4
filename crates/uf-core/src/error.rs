use thiserror::Error;

pub type UfResult<T> = Result<T, UfError>;

#[derive(Error, Debug)]
pub enum UfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
