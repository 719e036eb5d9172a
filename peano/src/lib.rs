#[cfg(feature = "trace")]
use tracing_error::SpanTrace;
use thiserror::Error;

// note: every operator recurses (or loops) once per unit of magnitude, so keep values small

mod integer;
mod natural;


pub use integer::Integer;
pub use natural::Natural;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Natural Underflow: {minuend} - {subtrahend} is not a natural number")]
    Underflow {
        minuend: usize,
        subtrahend: usize,
        #[cfg(feature = "trace")]
        trace: SpanTrace,
    },
    #[error("Division By Zero: {dividend} / 0")]
    DivideByZero {
        dividend: usize,
        #[cfg(feature = "trace")]
        trace: SpanTrace,
    },
}
impl Error {
    pub(crate) fn underflow(minuend: &Natural, subtrahend: &Natural) -> Self {
        Error::Underflow {
            minuend: minuend.to_usize(),
            subtrahend: subtrahend.to_usize(),
            #[cfg(feature = "trace")]
            trace: SpanTrace::capture(),
        }
    }
    pub(crate) fn divide_by_zero(dividend: &Natural) -> Self {
        Error::DivideByZero {
            dividend: dividend.to_usize(),
            #[cfg(feature = "trace")]
            trace: SpanTrace::capture(),
        }
    }
    #[cfg(feature = "trace")]
    pub fn span_trace(&self) -> &SpanTrace {
        match self {
            Error::Underflow { trace, .. } => trace,
            Error::DivideByZero { trace, .. } => trace,
        }
    }
}
