//! `<data type>` (§4.6).

use crate::ast::{
    ApproximateNumericKind, BitStringKind, CharStringKind, DataTypeDescriptor, DatetimeKind,
    ExactNumericKind, IntervalUnit,
};
use crate::symbol::Symbol;

use super::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `( n )`, returning `None` (without consuming) if no `(` is present.
    fn parse_length(&mut self) -> PResult<Option<u64>> {
        if !self.eat(Symbol::Lparen) {
            return Ok(None);
        }
        let n = self.expect_unsigned_integer()?;
        self.expect(Symbol::Rparen)?;
        Ok(Some(n))
    }

    /// `( precision [, scale] )`, returning `(None, None)` if no `(` is
    /// present.
    fn parse_precision_scale(&mut self) -> PResult<(Option<u64>, Option<u64>)> {
        if !self.eat(Symbol::Lparen) {
            return Ok((None, None));
        }
        let precision = self.expect_unsigned_integer()?;
        let scale = if self.eat(Symbol::Comma) {
            Some(self.expect_unsigned_integer()?)
        } else {
            None
        };
        self.expect(Symbol::Rparen)?;
        Ok((Some(precision), Some(scale.unwrap_or_default())))
    }

    /// `CHARACTER SET <identifier>`, if present.
    fn parse_optional_charset_clause(&mut self) -> PResult<Option<crate::span::Span>> {
        if self.has_sequence(&[Symbol::Character, Symbol::Set]) {
            self.bump();
            self.bump();
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_char_string_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        let kind = match self.symbol() {
            Symbol::Varchar => {
                self.bump();
                CharStringKind::Varchar
            }
            Symbol::Nchar => {
                self.bump();
                if self.eat(Symbol::Varying) {
                    CharStringKind::Nvarchar
                } else {
                    CharStringKind::Nchar
                }
            }
            Symbol::National => {
                self.bump();
                self.expect(Symbol::Char)?;
                if self.eat(Symbol::Varying) {
                    CharStringKind::Nvarchar
                } else {
                    CharStringKind::Nchar
                }
            }
            // `CHAR VARYING` / `CHARACTER VARYING` collapse to VARCHAR (§4.6 tie-breaks).
            Symbol::Char | Symbol::Character => {
                self.bump();
                if self.eat(Symbol::Varying) {
                    CharStringKind::Varchar
                } else {
                    CharStringKind::Char
                }
            }
            _ => return Ok(None),
        };
        let size = self.parse_length()?;
        let charset = self.parse_optional_charset_clause()?;
        Ok(Some(DataTypeDescriptor::CharString {
            kind,
            size,
            charset,
        }))
    }

    fn parse_bit_string_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        if !self.eat(Symbol::Bit) {
            return Ok(None);
        }
        let kind = if self.eat(Symbol::Varying) {
            BitStringKind::Varbit
        } else {
            BitStringKind::Bit
        };
        let size = self.parse_length()?;
        Ok(Some(DataTypeDescriptor::BitString { kind, size }))
    }

    fn parse_exact_numeric_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        let kind = match self.symbol() {
            Symbol::Int | Symbol::Integer => {
                self.bump();
                return Ok(Some(DataTypeDescriptor::ExactNumeric {
                    kind: ExactNumericKind::Int,
                    precision: None,
                    scale: None,
                }));
            }
            Symbol::Smallint => {
                self.bump();
                return Ok(Some(DataTypeDescriptor::ExactNumeric {
                    kind: ExactNumericKind::Smallint,
                    precision: None,
                    scale: None,
                }));
            }
            Symbol::Numeric | Symbol::Dec | Symbol::Decimal => {
                self.bump();
                ExactNumericKind::Numeric
            }
            _ => return Ok(None),
        };
        let (precision, scale) = self.parse_precision_scale()?;
        Ok(Some(DataTypeDescriptor::ExactNumeric {
            kind,
            precision,
            scale,
        }))
    }

    fn parse_approximate_numeric_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        match self.symbol() {
            // REAL is FLOAT(24) (§4.6 tie-breaks).
            Symbol::Real => {
                self.bump();
                Ok(Some(DataTypeDescriptor::ApproximateNumeric {
                    kind: ApproximateNumericKind::Float,
                    precision: Some(24),
                }))
            }
            Symbol::Float => {
                self.bump();
                let precision = self.parse_length()?;
                Ok(Some(DataTypeDescriptor::ApproximateNumeric {
                    kind: ApproximateNumericKind::Float,
                    precision,
                }))
            }
            // DOUBLE must be followed by PRECISION (§4.6 tie-breaks).
            Symbol::Double => {
                self.bump();
                self.expect(Symbol::Precision)?;
                Ok(Some(DataTypeDescriptor::ApproximateNumeric {
                    kind: ApproximateNumericKind::Double,
                    precision: None,
                }))
            }
            _ => Ok(None),
        }
    }

    fn parse_datetime_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        let kind = match self.symbol() {
            Symbol::Date => {
                self.bump();
                return Ok(Some(DataTypeDescriptor::Datetime {
                    kind: DatetimeKind::Date,
                    precision: None,
                    with_tz: false,
                }));
            }
            Symbol::Time => {
                self.bump();
                DatetimeKind::Time
            }
            Symbol::Timestamp => {
                self.bump();
                DatetimeKind::Timestamp
            }
            _ => return Ok(None),
        };
        let precision = self.parse_length()?;
        let with_tz = self.has_sequence(&[Symbol::With, Symbol::Time, Symbol::Zone]);
        if with_tz {
            self.bump();
            self.bump();
            self.bump();
        }
        Ok(Some(DataTypeDescriptor::Datetime {
            kind,
            precision,
            with_tz,
        }))
    }

    fn parse_interval_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        if !self.eat(Symbol::Interval) {
            return Ok(None);
        }
        let unit = match self.symbol() {
            Symbol::Year => IntervalUnit::Year,
            Symbol::Month => IntervalUnit::Month,
            Symbol::Day => IntervalUnit::Day,
            Symbol::Hour => IntervalUnit::Hour,
            Symbol::Minute => IntervalUnit::Minute,
            Symbol::Second => IntervalUnit::Second,
            _ => {
                return Err(self.error_expected(
                    "an interval qualifier (YEAR, MONTH, DAY, HOUR, MINUTE, or SECOND)",
                ));
            }
        };
        self.bump();
        // Only SECOND admits a parenthesized precision (§4.6).
        let precision = if matches!(unit, IntervalUnit::Second) {
            self.parse_length()?
        } else {
            None
        };
        Ok(Some(DataTypeDescriptor::Interval { unit, precision }))
    }

    /// Tries each data-type family in turn (§4.6).
    pub(crate) fn parse_data_type(&mut self) -> PResult<Option<DataTypeDescriptor>> {
        if let Some(dt) = self.parse_char_string_type()? {
            return Ok(Some(dt));
        }
        if let Some(dt) = self.parse_bit_string_type()? {
            return Ok(Some(dt));
        }
        if let Some(dt) = self.parse_exact_numeric_type()? {
            return Ok(Some(dt));
        }
        if let Some(dt) = self.parse_approximate_numeric_type()? {
            return Ok(Some(dt));
        }
        if let Some(dt) = self.parse_datetime_type()? {
            return Ok(Some(dt));
        }
        self.parse_interval_type()
    }
}
