//! Filter conditions: `field=value` and `field[op]=value`

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::QueryError;
use crate::field::{FieldKind, MovieField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Equality; "contains" for list fields
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl FilterOp {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gte" => Some(Self::Gte),
            "gt" => Some(Self::Gt),
            "lte" => Some(Self::Lte),
            "lt" => Some(Self::Lt),
            _ => None,
        }
    }

    /// SQL comparison operator.
    pub fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gte => ">=",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Lt => "<",
        }
    }
}

/// Filter operand, already parsed to the field's type
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: MovieField,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl Filter {
    /// Parse one query-string pair into a filter.
    ///
    /// ```
    /// use moviectl_core::{Filter, FilterOp, FilterValue, MovieField};
    ///
    /// let f = Filter::parse("ratings[gte]", "7.5").unwrap();
    /// assert_eq!(f.field, MovieField::Ratings);
    /// assert_eq!(f.op, FilterOp::Gte);
    /// assert_eq!(f.value, FilterValue::Float(7.5));
    /// ```
    pub fn parse(key: &str, raw: &str) -> Result<Self, QueryError> {
        let (name, op) = split_key(key)?;
        let field: MovieField = name.parse()?;

        if field.kind() == FieldKind::TextList && op != FilterOp::Eq {
            return Err(QueryError::UnsupportedOperator {
                field: name.to_owned(),
                op: op_name(key).to_owned(),
            });
        }

        let value = parse_value(field, raw)?;
        Ok(Self { field, op, value })
    }
}

/// `ratings[gte]` -> ("ratings", Gte), `name` -> ("name", Eq)
fn split_key(key: &str) -> Result<(&str, FilterOp), QueryError> {
    let Some(open) = key.find('[') else {
        return Ok((key, FilterOp::Eq));
    };

    let name = &key[..open];
    let op = key[open + 1..]
        .strip_suffix(']')
        .filter(|op| !op.is_empty() && !name.is_empty())
        .ok_or_else(|| QueryError::MalformedKey(key.to_owned()))?;

    let parsed = FilterOp::parse(op).ok_or_else(|| QueryError::UnsupportedOperator {
        field: name.to_owned(),
        op: op.to_owned(),
    })?;
    Ok((name, parsed))
}

fn op_name(key: &str) -> &str {
    key.find('[')
        .map(|open| key[open + 1..].trim_end_matches(']'))
        .unwrap_or("eq")
}

fn parse_value(field: MovieField, raw: &str) -> Result<FilterValue, QueryError> {
    let invalid = || QueryError::InvalidValue {
        field: field.api_name().to_owned(),
        value: raw.to_owned(),
        expected: field.kind().expected(),
    };

    let value = match field.kind() {
        FieldKind::Text | FieldKind::TextList => FilterValue::Text(raw.to_owned()),
        FieldKind::Integer => FilterValue::Integer(raw.trim().parse().map_err(|_| invalid())?),
        FieldKind::Float => {
            let n: f64 = raw.trim().parse().map_err(|_| invalid())?;
            if !n.is_finite() {
                return Err(invalid());
            }
            FilterValue::Float(n)
        }
        FieldKind::Uuid => FilterValue::Uuid(Uuid::parse_str(raw.trim()).map_err(|_| invalid())?),
        FieldKind::Date => FilterValue::Date(
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| invalid())?,
        ),
        FieldKind::Timestamp => FilterValue::Timestamp(
            DateTime::parse_from_rfc3339(raw.trim())
                .map_err(|_| invalid())?
                .with_timezone(&Utc),
        ),
    };
    Ok(value)
}
