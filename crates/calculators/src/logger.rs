use std::error::Error as StdError;

use log::warn;
use thiserror::Error;

use crate::{Answer, Method};

/// A summary of one successful calculation, as stored by a history sink.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationLog {
    /// The equation, expression, or system the calculation was run on.
    pub equation: String,
    pub method: Method,
    pub result: Answer,
}

/// A failure reported by a [`CalculationLogger`].
#[derive(Debug, Error)]
#[error("failed to record calculation")]
pub struct LogError(#[source] Box<dyn StdError + Send + Sync>);

impl LogError {
    /// Wraps the sink's own error.
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// A sink for calculation history, such as a database or remote service.
///
/// Recording is best-effort: calculators report each successful result once
/// and never fail because the sink did.
///
/// Closures implement `CalculationLogger`, and `()` is a logger that
/// discards every record.
pub trait CalculationLogger {
    /// Records a completed calculation.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink could not store the record.
    fn record(&self, log: &CalculationLog) -> Result<(), LogError>;
}

impl<F> CalculationLogger for F
where
    F: Fn(&CalculationLog) -> Result<(), LogError>,
{
    fn record(&self, log: &CalculationLog) -> Result<(), LogError> {
        self(log)
    }
}

impl CalculationLogger for () {
    fn record(&self, _log: &CalculationLog) -> Result<(), LogError> {
        Ok(())
    }
}

/// Sends `log` to `logger`, downgrading any failure to a warning.
pub(crate) fn report<L: CalculationLogger + ?Sized>(logger: &L, log: &CalculationLog) {
    if let Err(error) = logger.record(log) {
        warn!("{} calculation not recorded: {error}: {}", log.method, error.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    fn sample() -> CalculationLog {
        CalculationLog {
            equation: "x^2 - 2".to_owned(),
            method: Method::Bisection,
            result: Answer::Scalar(1.414_214),
        }
    }

    #[test]
    fn closure_logger_receives_record() {
        let seen = RefCell::new(Vec::new());
        let logger = |log: &CalculationLog| -> Result<(), LogError> {
            seen.borrow_mut().push(log.clone());
            Ok(())
        };

        report(&logger, &sample());

        assert_eq!(seen.into_inner(), vec![sample()]);
    }

    #[test]
    fn failing_logger_is_swallowed() {
        let logger = |_: &CalculationLog| -> Result<(), LogError> {
            Err(LogError::new("history store unavailable"))
        };

        report(&logger, &sample());
    }

    #[test]
    fn unit_logger_accepts_everything() {
        assert!(().record(&sample()).is_ok());
    }
}
