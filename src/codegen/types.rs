//! SQL type to Go type expression mapping.

use std::fmt;

/// Go base type a SQL column resolves to before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// `int64`
    Int64,
    /// `float64`
    Float64,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `time.Time`
    Time,
    /// `time.Duration`
    Duration,
    /// `[]byte`
    Bytes,
    /// `interface{}`, used for anything unrecognized.
    Dynamic,
}

impl BaseType {
    /// Returns the Go spelling of this type.
    #[must_use]
    pub fn go_name(self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Time => "time.Time",
            Self::Duration => "time.Duration",
            Self::Bytes => "[]byte",
            Self::Dynamic => "interface{}",
        }
    }

    /// Resolves the base type of a raw SQL type name.
    ///
    /// Rules are tried in order and the first one with a matching substring
    /// wins. The needles overlap (`interval` contains `int`), so the order is
    /// part of the contract.
    #[must_use]
    pub fn resolve(sql_type: &str) -> Self {
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| sql_type.contains(needle)))
            .map_or(Self::Dynamic, |(_, base)| *base)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_name())
    }
}

const RULES: &[(&[&str], BaseType)] = &[
    (&["int", "numeric"], BaseType::Int64),
    (&["float"], BaseType::Float64),
    (&["varchar", "text"], BaseType::String),
    (&["bool"], BaseType::Bool),
    (&["time", "date"], BaseType::Time),
    (&["interval"], BaseType::Duration),
    (&["bytea"], BaseType::Bytes),
];

/// Raw type name that is never wrapped in a pointer.
const BYTEA: &str = "bytea";

/// A Go type expression: a base type plus its composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeExpr {
    /// The base type as-is.
    Plain(BaseType),
    /// `*T`, for nullable columns.
    Optional(BaseType),
    /// `[]T`, for array columns.
    Slice(BaseType),
}

impl TypeExpr {
    /// Builds the type expression for a column.
    ///
    /// Array types (leading `_`) become slices whatever their nullability.
    /// Nullable scalars become pointers, except `bytea` and unrecognized types.
    #[must_use]
    pub fn for_column(sql_type: &str, is_nullable: bool) -> Self {
        let base = BaseType::resolve(sql_type);
        if sql_type.starts_with('_') && sql_type != BYTEA {
            Self::Slice(base)
        } else if is_nullable && base != BaseType::Dynamic && sql_type != BYTEA {
            Self::Optional(base)
        } else {
            Self::Plain(base)
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(base) => write!(f, "{base}"),
            Self::Optional(base) => write!(f, "*{base}"),
            Self::Slice(base) => write!(f, "[]{base}"),
        }
    }
}

/// Maps a SQL type name and nullability flag to a Go type expression.
#[must_use]
pub fn map_type(sql_type: &str, is_nullable: bool) -> String {
    TypeExpr::for_column(sql_type, is_nullable).to_string()
}
