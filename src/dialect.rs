//! Dialect registry module
//!
//! Maps dialect names to the immutable descriptors consumed by the lexer,
//! parser and unparser. The registry is a process-wide table populated once
//! at initialization and never mutated.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The SQL dialects the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
    Oracle,
    Ansi,
    MsSql,
}

impl Dialect {
    /// Canonical lowercase name of the dialect.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
            Dialect::Oracle => "oracle",
            Dialect::Ansi => "ansi",
            Dialect::MsSql => "mssql",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable record selecting the lexical and syntactic rules applied to an
/// input statement.
///
/// One descriptor exists per dialect; the flags mirror the compatibility
/// matrix: a `false` flag means the construct is rejected as a parse error
/// when it appears in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectDescriptor {
    pub dialect: Dialect,
    /// `"x"` is a string literal rather than a quoted identifier
    /// (MySQL/MariaDB under ANSI_QUOTES-off semantics).
    pub double_quote_is_string: bool,
    /// Backtick-quoted identifiers.
    pub backtick_identifiers: bool,
    /// `[x]`-bracketed identifiers (T-SQL).
    pub bracket_identifiers: bool,
    /// The Postgres `expr::type` cast operator.
    pub pg_cast_operator: bool,
    /// Case-insensitive `ILIKE`.
    pub ilike: bool,
    /// `SELECT DISTINCT ON (...)`.
    pub distinct_on: bool,
    /// `RETURNING` on INSERT/UPDATE/DELETE.
    pub returning: bool,
    /// `INSERT ... ON CONFLICT ...`.
    pub on_conflict: bool,
    /// `INSERT ... ON DUPLICATE KEY UPDATE ...`.
    pub on_duplicate_key: bool,
    /// `INSERT IGNORE INTO` and `REPLACE INTO`.
    pub insert_ignore: bool,
    /// The JSON `->` / `->>` operators.
    pub json_arrows: bool,
    /// The `JSON_EXTRACT` / `JSON_UNQUOTE` call names.
    pub json_extract: bool,
    /// `NULLS FIRST` / `NULLS LAST` in ORDER BY.
    pub nulls_order: bool,
    /// `OFFSET n ROWS FETCH FIRST m ROWS ONLY`.
    pub fetch_first: bool,
    /// The MySQL `LIMIT offset, count` form.
    pub limit_comma: bool,
    /// Row-value membership: `(a, b) IN ((1, 2), ...)`.
    pub row_value_in: bool,
    /// `= ANY(ARRAY[...])`.
    pub any_array: bool,
    /// `WITH RECURSIVE`.
    pub with_recursive: bool,
    /// Aggregate `FILTER (WHERE ...)`.
    pub aggregate_filter: bool,
    /// The `REGEXP` comparison operator.
    pub regexp_operator: bool,
}

impl DialectDescriptor {
    /// Canonical name of the underlying dialect.
    pub fn name(&self) -> &'static str {
        self.dialect.name()
    }
}

pub static POSTGRES: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Postgres,
    double_quote_is_string: false,
    backtick_identifiers: false,
    bracket_identifiers: false,
    pg_cast_operator: true,
    ilike: true,
    distinct_on: true,
    returning: true,
    on_conflict: true,
    on_duplicate_key: false,
    insert_ignore: false,
    json_arrows: true,
    json_extract: false,
    nulls_order: true,
    fetch_first: false,
    limit_comma: false,
    row_value_in: true,
    any_array: true,
    with_recursive: true,
    aggregate_filter: true,
    regexp_operator: false,
};

pub static MYSQL: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::MySql,
    double_quote_is_string: true,
    backtick_identifiers: true,
    bracket_identifiers: false,
    pg_cast_operator: false,
    ilike: false,
    distinct_on: false,
    returning: false,
    on_conflict: false,
    on_duplicate_key: true,
    insert_ignore: true,
    json_arrows: false,
    json_extract: true,
    nulls_order: false,
    fetch_first: false,
    limit_comma: true,
    row_value_in: true,
    any_array: false,
    with_recursive: true,
    aggregate_filter: false,
    regexp_operator: true,
};

pub static SQLITE: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Sqlite,
    double_quote_is_string: false,
    backtick_identifiers: false,
    bracket_identifiers: false,
    pg_cast_operator: false,
    ilike: false,
    distinct_on: false,
    returning: false,
    on_conflict: true,
    on_duplicate_key: false,
    insert_ignore: false,
    json_arrows: false,
    json_extract: false,
    nulls_order: false,
    fetch_first: false,
    limit_comma: true,
    row_value_in: true,
    any_array: false,
    with_recursive: true,
    aggregate_filter: true,
    regexp_operator: true,
};

pub static ORACLE: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Oracle,
    double_quote_is_string: false,
    backtick_identifiers: false,
    bracket_identifiers: false,
    pg_cast_operator: false,
    ilike: false,
    distinct_on: false,
    returning: false,
    on_conflict: false,
    on_duplicate_key: false,
    insert_ignore: false,
    json_arrows: false,
    json_extract: false,
    nulls_order: true,
    fetch_first: true,
    limit_comma: false,
    row_value_in: false,
    any_array: false,
    with_recursive: false,
    aggregate_filter: false,
    regexp_operator: false,
};

pub static ANSI: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Ansi,
    double_quote_is_string: false,
    backtick_identifiers: false,
    bracket_identifiers: false,
    pg_cast_operator: false,
    ilike: false,
    distinct_on: false,
    returning: false,
    on_conflict: false,
    on_duplicate_key: false,
    insert_ignore: false,
    json_arrows: false,
    json_extract: false,
    nulls_order: false,
    fetch_first: false,
    limit_comma: false,
    row_value_in: false,
    any_array: false,
    with_recursive: false,
    aggregate_filter: false,
    regexp_operator: false,
};

pub static MSSQL: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::MsSql,
    double_quote_is_string: false,
    backtick_identifiers: false,
    bracket_identifiers: true,
    pg_cast_operator: false,
    ilike: false,
    distinct_on: false,
    returning: false,
    on_conflict: false,
    on_duplicate_key: false,
    insert_ignore: false,
    json_arrows: false,
    json_extract: false,
    nulls_order: false,
    fetch_first: false,
    limit_comma: false,
    row_value_in: false,
    any_array: false,
    with_recursive: false,
    aggregate_filter: false,
    regexp_operator: false,
};

lazy_static! {
    /// The process-wide dialect registry, keyed by lowercase name.
    ///
    /// `postgresql` aliases `postgres` and `mariadb` aliases `mysql`.
    static ref REGISTRY: HashMap<&'static str, &'static DialectDescriptor> = {
        let mut m: HashMap<&'static str, &'static DialectDescriptor> = HashMap::new();
        m.insert("postgres", &POSTGRES);
        m.insert("postgresql", &POSTGRES);
        m.insert("mysql", &MYSQL);
        m.insert("mariadb", &MYSQL);
        m.insert("sqlite", &SQLITE);
        m.insert("oracle", &ORACLE);
        m.insert("ansi", &ANSI);
        m.insert("mssql", &MSSQL);
        m
    };
}

/// Resolves a dialect name to its descriptor.
///
/// Matching is ASCII case-insensitive; `None` means the name is unknown and
/// the caller must surface `NormalizeError::UnknownDialect`.
pub fn resolve(name: &str) -> Option<&'static DialectDescriptor> {
    REGISTRY.get(name.to_ascii_lowercase().as_str()).copied()
}
