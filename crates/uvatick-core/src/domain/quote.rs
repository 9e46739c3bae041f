use serde::{Deserialize, Serialize};

use crate::{IndexDate, ValidationError};

/// One published value of the daily index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireQuote", into = "WireQuote")]
pub struct IndexQuote {
    date: IndexDate,
    value: f64,
}

impl IndexQuote {
    pub fn new(date: IndexDate, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "valor" });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue { field: "valor" });
        }
        Ok(Self { date, value })
    }

    pub const fn date(&self) -> IndexDate {
        self.date
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Field names used by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireQuote {
    fecha: IndexDate,
    valor: f64,
}

impl TryFrom<WireQuote> for IndexQuote {
    type Error = ValidationError;

    fn try_from(wire: WireQuote) -> Result<Self, Self::Error> {
        Self::new(wire.fecha, wire.valor)
    }
}

impl From<IndexQuote> for WireQuote {
    fn from(quote: IndexQuote) -> Self {
        Self {
            fecha: quote.date,
            valor: quote.value,
        }
    }
}

/// Quote selected for display, with a flag telling whether it is today's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub quote: IndexQuote,
    pub is_fallback: bool,
}

impl ResolutionResult {
    pub const fn current(quote: IndexQuote) -> Self {
        Self {
            quote,
            is_fallback: false,
        }
    }

    pub const fn fallback(quote: IndexQuote) -> Self {
        Self {
            quote,
            is_fallback: true,
        }
    }
}
