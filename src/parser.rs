//! Parser module
//!
//! Converts the token stream into an AST (Abstract Syntax Tree). The parser
//! is a hand-written recursive-descent parser with precedence climbing for
//! expressions; dialect capability flags are enforced here, so a construct
//! the dialect does not recognize fails as a parse error.

use crate::dialect::DialectDescriptor;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenWithSpan, Word};

// Operator precedence, shared with the unparser so parentheses are
// re-inserted exactly where re-parsing would need them.
pub(crate) const PREC_OR: u8 = 5;
pub(crate) const PREC_AND: u8 = 10;
pub(crate) const PREC_NOT: u8 = 15;
pub(crate) const PREC_CMP: u8 = 20;
pub(crate) const PREC_CONCAT: u8 = 25;
pub(crate) const PREC_ADD: u8 = 30;
pub(crate) const PREC_MUL: u8 = 40;
pub(crate) const PREC_UNARY: u8 = 45;
pub(crate) const PREC_JSON: u8 = 50;
pub(crate) const PREC_CAST: u8 = 60;

/// An identifier, with its original quoting preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub value: String,
    /// `"`, `` ` `` or `[` when quoted in the source.
    pub quote: Option<char>,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote: None,
        }
    }

    fn from_word(word: Word) -> Self {
        Self {
            value: word.value,
            quote: word.quote,
        }
    }
}

/// A possibly schema-qualified name (`schema.table`, `db.schema.table`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName(pub Vec<Ident>);

/// A literal value as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Raw numeric text, e.g. `00010` or `123.45`.
    Number(String),
    /// Hex literal including the `0x` prefix.
    HexNumber(String),
    /// String literal interior (quotes stripped, interior verbatim).
    String { value: String, quote: char },
    Boolean(bool),
    Null,
}

impl Literal {
    /// The normalized textual value recorded in the parameter list.
    pub fn param_text(&self) -> String {
        match self {
            Literal::Number(raw) => strip_leading_zeros(raw),
            Literal::HexNumber(raw) => raw.clone(),
            Literal::String { value, .. } => value.clone(),
            Literal::Boolean(true) => "true".to_string(),
            Literal::Boolean(false) => "false".to_string(),
            Literal::Null => "null".to_string(),
        }
    }
}

/// Strips redundant leading zeros so `00010` and `10` collide.
fn strip_leading_zeros(raw: &str) -> String {
    let (int_part, rest) = match raw.find(['.', 'e', 'E']) {
        Some(idx) => raw.split_at(idx),
        None => (raw, ""),
    };
    let trimmed = int_part.trim_start_matches('0');
    let int_part = if trimmed.is_empty() && !int_part.is_empty() {
        "0"
    } else if trimmed.is_empty() {
        ""
    } else {
        trimmed
    };
    format!("{int_part}{rest}")
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Concat,
    /// JSON `->`
    Arrow,
    /// JSON `->>`
    LongArrow,
}

impl BinaryOperator {
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Or => PREC_OR,
            BinaryOperator::And => PREC_AND,
            BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq => PREC_CMP,
            BinaryOperator::Concat => PREC_CONCAT,
            BinaryOperator::Plus | BinaryOperator::Minus => PREC_ADD,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => PREC_MUL,
            BinaryOperator::Arrow | BinaryOperator::LongArrow => PREC_JSON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

/// `LIKE` family of pattern operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOperator {
    Like,
    ILike,
    Regexp,
}

/// A `CASE` branch: `WHEN condition THEN result`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub condition: Expr,
    pub result: Expr,
}

/// A type name in `CAST(x AS T)` or `x::T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub name: String,
    pub quoted: bool,
    /// Precision/scale arguments, e.g. `VARCHAR(255)`.
    pub args: Vec<String>,
}

/// A function call, with the aggregate modifiers that can follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Ident,
    pub args: Vec<Expr>,
    pub distinct: bool,
    /// `FILTER (WHERE ...)`
    pub filter: Option<Box<Expr>>,
    /// `OVER (...)`
    pub over: Option<WindowSpec>,
}

/// An `OVER (...)` window specification.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderItem>,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Ident),
    CompoundIdentifier(Vec<Ident>),
    /// `t.*` in a projection.
    QualifiedWildcard(Vec<Ident>),
    /// `*` in a projection or as the sole aggregate argument.
    Wildcard,
    Literal(Literal),
    /// A placeholder, either parsed back from canonical output (`?`) or
    /// produced by the normalizer.
    Placeholder(String),
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// A parenthesized expression; flattened away by the normalizer.
    Nested(Box<Expr>),
    IsNull {
        operand: Box<Expr>,
        negated: bool,
    },
    IsDistinctFrom {
        left: Box<Expr>,
        right: Box<Expr>,
        negated: bool,
    },
    InList {
        operand: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    InSubquery {
        operand: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },
    Between {
        operand: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },
    Like {
        operand: Box<Expr>,
        pattern: Box<Expr>,
        op: LikeOperator,
        negated: bool,
    },
    Exists {
        subquery: Box<Query>,
        negated: bool,
    },
    /// A scalar subquery `(SELECT ...)`.
    Subquery(Box<Query>),
    /// A row value `(a, b)`.
    Tuple(Vec<Expr>),
    /// Postgres `ARRAY[...]`.
    Array(Vec<Expr>),
    /// Postgres `ANY(expr)`.
    Any(Box<Expr>),
    Function(Function),
    Cast {
        operand: Box<Expr>,
        data_type: TypeName,
        /// `expr::type` rather than `CAST(expr AS type)`.
        pg_style: bool,
    },
    Case {
        operand: Option<Box<Expr>>,
        branches: Vec<CaseBranch>,
        else_result: Option<Box<Expr>>,
    },
}

/// One projection item: an expression with an optional column alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<Ident>,
}

/// `DISTINCT` handling in a `SELECT`.
#[derive(Debug, Clone, PartialEq)]
pub enum Distinct {
    /// Explicit `ALL`; dropped by the normalizer.
    All,
    Distinct,
    /// Postgres `DISTINCT ON (...)`.
    On(Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    pub relation: TableFactor,
    pub constraint: JoinConstraint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableFactor {
    Table {
        name: ObjectName,
        alias: Option<Ident>,
    },
    Derived {
        subquery: Box<Query>,
        alias: Option<Ident>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableWithJoins {
    pub relation: TableFactor,
    pub joins: Vec<Join>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// One `ORDER BY` element.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub expr: Expr,
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullsOrder>,
}

/// Row-limiting clauses, keeping the surface form the dialect used.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitClause {
    /// `LIMIT n [OFFSET m]`, or a bare `OFFSET m`. The MySQL
    /// `LIMIT offset, count` form is desugared into this at parse time.
    LimitOffset {
        limit: Option<Expr>,
        offset: Option<Expr>,
    },
    /// Oracle `[OFFSET n ROWS] FETCH FIRST m ROWS ONLY`.
    FetchFirst {
        offset: Option<Expr>,
        count: Option<Expr>,
    },
}

/// The core of a `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub distinct: Option<Distinct>,
    pub projection: Vec<SelectItem>,
    pub from: Vec<TableWithJoins>,
    pub selection: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

/// A query body: a plain `SELECT` or a set operation over two bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum SetExpr {
    Select(Box<Select>),
    SetOp {
        op: SetOperator,
        all: bool,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
}

/// One common table expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub recursive: bool,
    pub ctes: Vec<Cte>,
}

/// A full query: optional `WITH`, body, `ORDER BY` and row limits.
///
/// The span is lexical metadata only; equality is structural, so the same
/// statement written with different spacing compares equal.
#[derive(Debug, Clone)]
pub struct Query {
    pub with: Option<With>,
    pub body: SetExpr,
    pub order_by: Vec<OrderItem>,
    pub limit: Option<LimitClause>,
    pub span: Span,
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.with == other.with
            && self.body == other.body
            && self.order_by == other.order_by
            && self.limit == other.limit
    }
}

/// `INSERT` row sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    Values(Vec<Vec<Expr>>),
    DefaultValues,
    Query(Box<Query>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate(Vec<Assignment>),
}

/// Conflict clauses on `INSERT`.
#[derive(Debug, Clone, PartialEq)]
pub enum OnInsert {
    Conflict {
        targets: Vec<Ident>,
        action: OnConflictAction,
    },
    DuplicateKeyUpdate(Vec<Assignment>),
}

/// `target = value` in a `SET` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: ObjectName,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct Insert {
    /// `REPLACE INTO` (MySQL).
    pub replace: bool,
    /// `INSERT IGNORE` (MySQL).
    pub ignore: bool,
    pub table: ObjectName,
    pub columns: Vec<Ident>,
    pub source: InsertSource,
    pub on: Option<OnInsert>,
    pub returning: Vec<SelectItem>,
    pub span: Span,
}

impl PartialEq for Insert {
    fn eq(&self, other: &Self) -> bool {
        self.replace == other.replace
            && self.ignore == other.ignore
            && self.table == other.table
            && self.columns == other.columns
            && self.source == other.source
            && self.on == other.on
            && self.returning == other.returning
    }
}

#[derive(Debug, Clone)]
pub struct Update {
    pub table: ObjectName,
    pub alias: Option<Ident>,
    pub assignments: Vec<Assignment>,
    pub from: Option<TableWithJoins>,
    pub selection: Option<Expr>,
    pub returning: Vec<SelectItem>,
    pub span: Span,
}

impl PartialEq for Update {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
            && self.alias == other.alias
            && self.assignments == other.assignments
            && self.from == other.from
            && self.selection == other.selection
            && self.returning == other.returning
    }
}

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: ObjectName,
    pub alias: Option<Ident>,
    pub selection: Option<Expr>,
    pub returning: Vec<SelectItem>,
    pub span: Span,
}

impl PartialEq for Delete {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
            && self.alias == other.alias
            && self.selection == other.selection
            && self.returning == other.returning
    }
}

/// Top-level statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Box<Query>),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

/// Parser struct
///
/// Parses a token stream into a [`Statement`] under the rules of one
/// dialect descriptor.
pub struct Parser<'a> {
    tokens: Vec<TokenWithSpan>,
    index: usize,
    dialect: &'a DialectDescriptor,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a pre-lexed token stream.
    pub fn new(tokens: Vec<TokenWithSpan>, dialect: &'a DialectDescriptor) -> Self {
        Self {
            tokens,
            index: 0,
            dialect,
        }
    }

    /// Lexes and parses a single statement.
    ///
    /// A trailing semicolon is accepted and ignored; any further input is an
    /// error.
    pub fn parse_sql(sql: &str, dialect: &'a DialectDescriptor) -> ParseResult<Statement> {
        let tokens = Lexer::new(sql, dialect).tokenize()?;
        let mut parser = Parser::new(tokens, dialect);
        parser.parse()
    }

    /// Parses exactly one statement and requires end of input after it.
    pub fn parse(&mut self) -> ParseResult<Statement> {
        let statement = self.parse_statement()?;
        while self.consume_token(&Token::Semicolon) {}
        if self.index < self.tokens.len() {
            return self.expected("end of statement");
        }
        Ok(statement)
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek_keyword_any() {
            Some(Keyword::Select) | Some(Keyword::With) => {
                Ok(Statement::Query(Box::new(self.parse_query()?)))
            }
            Some(Keyword::Insert) | Some(Keyword::Replace) => {
                Ok(Statement::Insert(self.parse_insert()?))
            }
            Some(Keyword::Update) => Ok(Statement::Update(self.parse_update()?)),
            Some(Keyword::Delete) => Ok(Statement::Delete(self.parse_delete()?)),
            _ => self.expected("an SQL statement"),
        }
    }

    // ------------------------------------------------------------------
    // Token stream helpers
    // ------------------------------------------------------------------

    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|t| &t.token)
    }

    fn peek_nth_token(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.index + n).map(|t| &t.token)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Start position of the current token, or end of input.
    fn current_position(&self) -> usize {
        match self.tokens.get(self.index) {
            Some(t) => t.span.start,
            None => self.tokens.last().map(|t| t.span.end).unwrap_or(0),
        }
    }

    fn prev_token_end(&self) -> usize {
        if self.index == 0 {
            return 0;
        }
        self.tokens
            .get(self.index - 1)
            .map(|t| t.span.end)
            .unwrap_or(0)
    }

    /// Display form of the current token for error messages.
    fn current_token_display(&self) -> String {
        match self.peek_token() {
            Some(token) => token.to_string(),
            None => "EOF".to_string(),
        }
    }

    fn expected<T>(&self, what: &str) -> ParseResult<T> {
        Err(ParseError::UnexpectedToken {
            expected: what.to_string(),
            found: self.current_token_display(),
            position: self.current_position(),
        })
    }

    fn unsupported(&self, construct: &str) -> ParseError {
        ParseError::UnsupportedConstruct {
            construct: construct.to_string(),
            dialect: self.dialect.name().to_string(),
            position: self.current_position(),
        }
    }

    /// Consumes the token if it equals `expected`.
    fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_token(&mut self, expected: &Token) -> ParseResult<()> {
        if self.consume_token(expected) {
            Ok(())
        } else {
            self.expected(&expected.to_string())
        }
    }

    /// Keyword of the current token, if it is an unquoted keyword word.
    fn peek_keyword_any(&self) -> Option<Keyword> {
        match self.peek_token() {
            Some(Token::Word(w)) if w.quote.is_none() => w.keyword,
            _ => None,
        }
    }

    fn nth_keyword(&self, n: usize) -> Option<Keyword> {
        match self.peek_nth_token(n) {
            Some(Token::Word(w)) if w.quote.is_none() => w.keyword,
            _ => None,
        }
    }

    fn peek_keyword(&self, keyword: Keyword) -> bool {
        self.peek_keyword_any() == Some(keyword)
    }

    /// Consumes the keyword if it is next.
    fn parse_keyword(&mut self, keyword: Keyword) -> bool {
        if self.peek_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a whole keyword sequence, or nothing.
    fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        for (i, kw) in keywords.iter().enumerate() {
            if self.nth_keyword(i) != Some(*kw) {
                return false;
            }
        }
        self.index += keywords.len();
        true
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.parse_keyword(keyword) {
            Ok(())
        } else {
            self.expected(&format!("{keyword:?}").to_uppercase())
        }
    }

    fn parse_comma_separated<T>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut values = vec![f(self)?];
        while self.consume_token(&Token::Comma) {
            values.push(f(self)?);
        }
        Ok(values)
    }

    // ------------------------------------------------------------------
    // Identifiers and names
    // ------------------------------------------------------------------

    /// Parses one identifier; unquoted reserved keywords are rejected.
    fn parse_identifier(&mut self) -> ParseResult<Ident> {
        match self.peek_token() {
            Some(Token::Word(w)) if w.quote.is_some() || !w.is_reserved() => {
                let word = w.clone();
                self.advance();
                Ok(Ident::from_word(word))
            }
            _ => self.expected("an identifier"),
        }
    }

    /// Parses an identifier after `AS`, where any word is acceptable.
    fn parse_alias_identifier(&mut self) -> ParseResult<Ident> {
        match self.peek_token() {
            Some(Token::Word(w)) => {
                let word = w.clone();
                self.advance();
                Ok(Ident::from_word(word))
            }
            _ => self.expected("an identifier"),
        }
    }

    fn parse_object_name(&mut self) -> ParseResult<ObjectName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.consume_token(&Token::Period) {
            parts.push(self.parse_identifier()?);
        }
        Ok(ObjectName(parts))
    }

    /// Parses an optional alias: the `AS ident` form or a bare non-reserved
    /// word.
    fn parse_optional_alias(&mut self) -> ParseResult<Option<Ident>> {
        if self.parse_keyword(Keyword::As) {
            return Ok(Some(self.parse_alias_identifier()?));
        }
        match self.peek_token() {
            Some(Token::Word(w)) if w.quote.is_some() || !w.is_reserved() => {
                let word = w.clone();
                self.advance();
                Ok(Some(Ident::from_word(word)))
            }
            _ => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    fn parse_query(&mut self) -> ParseResult<Query> {
        let start = self.current_position();

        let with = if self.parse_keyword(Keyword::With) {
            let recursive = if self.peek_keyword(Keyword::Recursive) {
                if !self.dialect.with_recursive {
                    return Err(self.unsupported("WITH RECURSIVE"));
                }
                self.advance();
                true
            } else {
                false
            };
            let ctes = self.parse_comma_separated(Self::parse_cte)?;
            Some(With { recursive, ctes })
        } else {
            None
        };

        let body = self.parse_set_expr()?;

        let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
            self.parse_comma_separated(Self::parse_order_item)?
        } else {
            Vec::new()
        };

        let limit = self.parse_limit_clause()?;

        Ok(Query {
            with,
            body,
            order_by,
            limit,
            span: Span::new(start, self.prev_token_end()),
        })
    }

    fn parse_cte(&mut self) -> ParseResult<Cte> {
        let name = self.parse_identifier()?;
        let columns = if self.consume_token(&Token::LParen) {
            let cols = self.parse_comma_separated(Self::parse_identifier)?;
            self.expect_token(&Token::RParen)?;
            cols
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        self.expect_token(&Token::LParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(Cte {
            name,
            columns,
            query: Box::new(query),
        })
    }

    fn parse_set_expr(&mut self) -> ParseResult<SetExpr> {
        let mut left = SetExpr::Select(Box::new(self.parse_select_core()?));
        loop {
            let op = if self.parse_keyword(Keyword::Union) {
                SetOperator::Union
            } else if self.parse_keyword(Keyword::Intersect) {
                SetOperator::Intersect
            } else if self.parse_keyword(Keyword::Except) {
                SetOperator::Except
            } else {
                break;
            };
            let all = self.parse_keyword(Keyword::All);
            let right = SetExpr::Select(Box::new(self.parse_select_core()?));
            left = SetExpr::SetOp {
                op,
                all,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_select_core(&mut self) -> ParseResult<Select> {
        self.expect_keyword(Keyword::Select)?;

        let distinct = if self.parse_keyword(Keyword::Distinct) {
            if self.peek_keyword(Keyword::On) {
                if !self.dialect.distinct_on {
                    return Err(self.unsupported("DISTINCT ON"));
                }
                self.advance();
                self.expect_token(&Token::LParen)?;
                let exprs = self.parse_comma_separated(Self::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                Some(Distinct::On(exprs))
            } else {
                Some(Distinct::Distinct)
            }
        } else if self.parse_keyword(Keyword::All) {
            Some(Distinct::All)
        } else {
            None
        };

        let projection = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.parse_keyword(Keyword::From) {
            self.parse_comma_separated(Self::parse_table_with_joins)?
        } else {
            Vec::new()
        };

        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = if self.parse_keywords(&[Keyword::Group, Keyword::By]) {
            self.parse_comma_separated(Self::parse_expr)?
        } else {
            Vec::new()
        };

        let having = if self.parse_keyword(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Select {
            distinct,
            projection,
            from,
            selection,
            group_by,
            having,
        })
    }

    fn parse_select_item(&mut self) -> ParseResult<SelectItem> {
        if self.consume_token(&Token::Star) {
            return Ok(SelectItem {
                expr: Expr::Wildcard,
                alias: None,
            });
        }
        let expr = self.parse_expr()?;
        let alias = match expr {
            // `t.*` takes no alias
            Expr::QualifiedWildcard(_) => None,
            _ => self.parse_optional_alias()?,
        };
        Ok(SelectItem { expr, alias })
    }

    fn parse_table_with_joins(&mut self) -> ParseResult<TableWithJoins> {
        let relation = self.parse_table_factor()?;
        let mut joins = Vec::new();
        loop {
            let join_type = if self.parse_keyword(Keyword::Cross) {
                self.expect_keyword(Keyword::Join)?;
                JoinType::Cross
            } else if self.parse_keyword(Keyword::Join) {
                JoinType::Inner
            } else if self.parse_keyword(Keyword::Inner) {
                self.expect_keyword(Keyword::Join)?;
                JoinType::Inner
            } else if self.parse_keyword(Keyword::Left) {
                let _ = self.parse_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                JoinType::Left
            } else if self.parse_keyword(Keyword::Right) {
                let _ = self.parse_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                JoinType::Right
            } else if self.parse_keyword(Keyword::Full) {
                let _ = self.parse_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                JoinType::Full
            } else {
                break;
            };

            let relation = self.parse_table_factor()?;
            let constraint = if self.parse_keyword(Keyword::On) {
                JoinConstraint::On(self.parse_expr()?)
            } else if self.parse_keyword(Keyword::Using) {
                self.expect_token(&Token::LParen)?;
                let columns = self.parse_comma_separated(Self::parse_identifier)?;
                self.expect_token(&Token::RParen)?;
                JoinConstraint::Using(columns)
            } else {
                JoinConstraint::None
            };

            joins.push(Join {
                join_type,
                relation,
                constraint,
            });
        }
        Ok(TableWithJoins { relation, joins })
    }

    fn parse_table_factor(&mut self) -> ParseResult<TableFactor> {
        if self.consume_token(&Token::LParen) {
            if !matches!(
                self.peek_keyword_any(),
                Some(Keyword::Select) | Some(Keyword::With)
            ) {
                return self.expected("a subquery after (");
            }
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_alias()?;
            return Ok(TableFactor::Derived {
                subquery: Box::new(subquery),
                alias,
            });
        }

        let name = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableFactor::Table { name, alias })
    }

    fn parse_order_item(&mut self) -> ParseResult<OrderItem> {
        let expr = self.parse_expr()?;
        let direction = if self.parse_keyword(Keyword::Asc) {
            Some(OrderDirection::Asc)
        } else if self.parse_keyword(Keyword::Desc) {
            Some(OrderDirection::Desc)
        } else {
            None
        };
        let nulls = if self.peek_keyword(Keyword::Nulls) {
            if !self.dialect.nulls_order {
                return Err(self.unsupported("NULLS FIRST/LAST"));
            }
            self.advance();
            if self.parse_keyword(Keyword::First) {
                Some(NullsOrder::First)
            } else if self.parse_keyword(Keyword::Last) {
                Some(NullsOrder::Last)
            } else {
                return self.expected("FIRST or LAST");
            }
        } else {
            None
        };
        Ok(OrderItem {
            expr,
            direction,
            nulls,
        })
    }

    fn parse_limit_clause(&mut self) -> ParseResult<Option<LimitClause>> {
        if self.parse_keyword(Keyword::Limit) {
            let first = self.parse_expr()?;
            if self.peek_token() == Some(&Token::Comma) {
                if !self.dialect.limit_comma {
                    return Err(self.unsupported("LIMIT offset, count"));
                }
                self.advance();
                let count = self.parse_expr()?;
                // `LIMIT off, cnt` is `LIMIT cnt OFFSET off`.
                return Ok(Some(LimitClause::LimitOffset {
                    limit: Some(count),
                    offset: Some(first),
                }));
            }
            let offset = if self.parse_keyword(Keyword::Offset) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            return Ok(Some(LimitClause::LimitOffset {
                limit: Some(first),
                offset,
            }));
        }

        if self.parse_keyword(Keyword::Offset) {
            let offset = self.parse_expr()?;
            if self.peek_keyword(Keyword::Rows) || self.peek_keyword(Keyword::Row) {
                if !self.dialect.fetch_first {
                    return Err(self.unsupported("OFFSET ... ROWS"));
                }
                self.advance();
                let count = if self.parse_keyword(Keyword::Fetch) {
                    Some(self.parse_fetch_count()?)
                } else {
                    None
                };
                return Ok(Some(LimitClause::FetchFirst {
                    offset: Some(offset),
                    count,
                }));
            }
            return Ok(Some(LimitClause::LimitOffset {
                limit: None,
                offset: Some(offset),
            }));
        }

        if self.peek_keyword(Keyword::Fetch) {
            if !self.dialect.fetch_first {
                return Err(self.unsupported("FETCH FIRST ... ROWS ONLY"));
            }
            self.advance();
            let count = self.parse_fetch_count()?;
            return Ok(Some(LimitClause::FetchFirst {
                offset: None,
                count: Some(count),
            }));
        }

        Ok(None)
    }

    /// Parses `FIRST n ROWS ONLY` after `FETCH`.
    fn parse_fetch_count(&mut self) -> ParseResult<Expr> {
        if !self.parse_keyword(Keyword::First) && !self.parse_keyword(Keyword::Next) {
            return self.expected("FIRST or NEXT");
        }
        let count = self.parse_expr()?;
        if !self.parse_keyword(Keyword::Rows) && !self.parse_keyword(Keyword::Row) {
            return self.expected("ROWS");
        }
        self.expect_keyword(Keyword::Only)?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // INSERT / UPDATE / DELETE
    // ------------------------------------------------------------------

    fn parse_insert(&mut self) -> ParseResult<Insert> {
        let start = self.current_position();

        let replace = if self.peek_keyword(Keyword::Replace) {
            if !self.dialect.insert_ignore {
                return Err(self.unsupported("REPLACE INTO"));
            }
            self.advance();
            true
        } else {
            self.expect_keyword(Keyword::Insert)?;
            false
        };

        let ignore = if !replace && self.peek_keyword(Keyword::Ignore) {
            if !self.dialect.insert_ignore {
                return Err(self.unsupported("INSERT IGNORE"));
            }
            self.advance();
            true
        } else {
            false
        };

        self.expect_keyword(Keyword::Into)?;
        let table = self.parse_object_name()?;

        let columns = if self.consume_token(&Token::LParen) {
            let cols = self.parse_comma_separated(Self::parse_identifier)?;
            self.expect_token(&Token::RParen)?;
            cols
        } else {
            Vec::new()
        };

        let source = if self.parse_keyword(Keyword::Default) {
            self.expect_keyword(Keyword::Values)?;
            InsertSource::DefaultValues
        } else if self.parse_keyword(Keyword::Values) {
            let rows = self.parse_comma_separated(|parser| {
                parser.expect_token(&Token::LParen)?;
                let row = parser.parse_comma_separated(Self::parse_expr)?;
                parser.expect_token(&Token::RParen)?;
                Ok(row)
            })?;
            InsertSource::Values(rows)
        } else if matches!(
            self.peek_keyword_any(),
            Some(Keyword::Select) | Some(Keyword::With)
        ) {
            InsertSource::Query(Box::new(self.parse_query()?))
        } else {
            return self.expected("VALUES, DEFAULT VALUES or a query");
        };

        let on = if self.parse_keyword(Keyword::On) {
            if self.peek_keyword(Keyword::Conflict) {
                if !self.dialect.on_conflict {
                    return Err(self.unsupported("ON CONFLICT"));
                }
                self.advance();
                let targets = if self.consume_token(&Token::LParen) {
                    let cols = self.parse_comma_separated(Self::parse_identifier)?;
                    self.expect_token(&Token::RParen)?;
                    cols
                } else {
                    Vec::new()
                };
                self.expect_keyword(Keyword::Do)?;
                let action = if self.parse_keyword(Keyword::Nothing) {
                    OnConflictAction::DoNothing
                } else {
                    self.expect_keyword(Keyword::Update)?;
                    self.expect_keyword(Keyword::Set)?;
                    OnConflictAction::DoUpdate(self.parse_comma_separated(Self::parse_assignment)?)
                };
                Some(OnInsert::Conflict { targets, action })
            } else if self.peek_keyword(Keyword::Duplicate) {
                if !self.dialect.on_duplicate_key {
                    return Err(self.unsupported("ON DUPLICATE KEY"));
                }
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                self.expect_keyword(Keyword::Update)?;
                Some(OnInsert::DuplicateKeyUpdate(
                    self.parse_comma_separated(Self::parse_assignment)?,
                ))
            } else {
                return self.expected("CONFLICT or DUPLICATE KEY");
            }
        } else {
            None
        };

        let returning = self.parse_optional_returning()?;

        Ok(Insert {
            replace,
            ignore,
            table,
            columns,
            source,
            on,
            returning,
            span: Span::new(start, self.prev_token_end()),
        })
    }

    fn parse_update(&mut self) -> ParseResult<Update> {
        let start = self.current_position();
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_comma_separated(Self::parse_assignment)?;
        let from = if self.parse_keyword(Keyword::From) {
            Some(self.parse_table_with_joins()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = self.parse_optional_returning()?;
        Ok(Update {
            table,
            alias,
            assignments,
            from,
            selection,
            returning,
            span: Span::new(start, self.prev_token_end()),
        })
    }

    fn parse_delete(&mut self) -> ParseResult<Delete> {
        let start = self.current_position();
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;
        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = self.parse_optional_returning()?;
        Ok(Delete {
            table,
            alias,
            selection,
            returning,
            span: Span::new(start, self.prev_token_end()),
        })
    }

    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let target = self.parse_object_name()?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { target, value })
    }

    fn parse_optional_returning(&mut self) -> ParseResult<Vec<SelectItem>> {
        if self.peek_keyword(Keyword::Returning) {
            if !self.dialect.returning {
                return Err(self.unsupported("RETURNING"));
            }
            self.advance();
            return self.parse_comma_separated(Self::parse_select_item);
        }
        Ok(Vec::new())
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_subexpr(0)
    }

    fn parse_subexpr(&mut self, precedence: u8) -> ParseResult<Expr> {
        let mut expr = self.parse_prefix()?;
        loop {
            let next = self.next_precedence();
            if next <= precedence {
                break;
            }
            expr = self.parse_infix(expr, next)?;
        }
        Ok(expr)
    }

    /// Precedence of the upcoming infix construct, `0` when none applies.
    fn next_precedence(&self) -> u8 {
        match self.peek_token() {
            Some(Token::Word(w)) if w.quote.is_none() => match w.keyword {
                Some(Keyword::Or) => PREC_OR,
                Some(Keyword::And) => PREC_AND,
                Some(Keyword::Is) | Some(Keyword::In) | Some(Keyword::Between)
                | Some(Keyword::Like) => PREC_CMP,
                Some(Keyword::Ilike) if self.dialect.ilike => PREC_CMP,
                Some(Keyword::Regexp) if self.dialect.regexp_operator => PREC_CMP,
                Some(Keyword::Not) => match self.nth_keyword(1) {
                    Some(Keyword::In) | Some(Keyword::Between) | Some(Keyword::Like) => PREC_CMP,
                    Some(Keyword::Ilike) if self.dialect.ilike => PREC_CMP,
                    Some(Keyword::Regexp) if self.dialect.regexp_operator => PREC_CMP,
                    _ => 0,
                },
                _ => 0,
            },
            Some(Token::Eq)
            | Some(Token::Neq)
            | Some(Token::Lt)
            | Some(Token::LtEq)
            | Some(Token::Gt)
            | Some(Token::GtEq) => PREC_CMP,
            Some(Token::Concat) => PREC_CONCAT,
            Some(Token::Plus) | Some(Token::Minus) => PREC_ADD,
            Some(Token::Star) | Some(Token::Slash) | Some(Token::Percent) => PREC_MUL,
            Some(Token::Arrow) | Some(Token::LongArrow) if self.dialect.json_arrows => PREC_JSON,
            Some(Token::DoubleColon) if self.dialect.pg_cast_operator => PREC_CAST,
            _ => 0,
        }
    }

    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = match self.peek_token() {
            Some(token) => token.clone(),
            None => return Err(ParseError::UnexpectedEof(self.prev_token_end())),
        };

        match token {
            Token::Word(w) => self.parse_word_prefix(w),
            Token::Number(n) => {
                self.advance();
                Ok(Expr::Literal(Literal::Number(n)))
            }
            Token::HexNumber(n) => {
                self.advance();
                Ok(Expr::Literal(Literal::HexNumber(n)))
            }
            Token::SingleQuotedString(s) => {
                self.advance();
                Ok(Expr::Literal(Literal::String {
                    value: s,
                    quote: '\'',
                }))
            }
            Token::DoubleQuotedString(s) => {
                self.advance();
                Ok(Expr::Literal(Literal::String {
                    value: s,
                    quote: '"',
                }))
            }
            Token::Question => {
                self.advance();
                Ok(Expr::Placeholder("?".to_string()))
            }
            Token::Minus => {
                self.advance();
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Minus,
                    operand: Box::new(self.parse_subexpr(PREC_UNARY)?),
                })
            }
            Token::Plus => {
                self.advance();
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Plus,
                    operand: Box::new(self.parse_subexpr(PREC_UNARY)?),
                })
            }
            Token::LParen => {
                self.advance();
                if matches!(
                    self.peek_keyword_any(),
                    Some(Keyword::Select) | Some(Keyword::With)
                ) {
                    let query = self.parse_query()?;
                    self.expect_token(&Token::RParen)?;
                    return Ok(Expr::Subquery(Box::new(query)));
                }
                let first = self.parse_expr()?;
                if self.peek_token() == Some(&Token::Comma) {
                    let mut items = vec![first];
                    while self.consume_token(&Token::Comma) {
                        items.push(self.parse_expr()?);
                    }
                    self.expect_token(&Token::RParen)?;
                    return Ok(Expr::Tuple(items));
                }
                self.expect_token(&Token::RParen)?;
                Ok(Expr::Nested(Box::new(first)))
            }
            _ => self.expected("an expression"),
        }
    }

    fn parse_word_prefix(&mut self, word: Word) -> ParseResult<Expr> {
        match word.keyword {
            Some(Keyword::True) if word.quote.is_none() => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            Some(Keyword::False) if word.quote.is_none() => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            Some(Keyword::Null) if word.quote.is_none() => {
                self.advance();
                Ok(Expr::Literal(Literal::Null))
            }
            Some(Keyword::Case) if word.quote.is_none() => self.parse_case(),
            Some(Keyword::Cast) if word.quote.is_none() => {
                self.advance();
                self.expect_token(&Token::LParen)?;
                let operand = self.parse_expr()?;
                self.expect_keyword(Keyword::As)?;
                let data_type = self.parse_type_name()?;
                self.expect_token(&Token::RParen)?;
                Ok(Expr::Cast {
                    operand: Box::new(operand),
                    data_type,
                    pg_style: false,
                })
            }
            Some(Keyword::Exists) if word.quote.is_none() => {
                self.advance();
                self.parse_exists(false)
            }
            Some(Keyword::Not) if word.quote.is_none() => {
                self.advance();
                if self.parse_keyword(Keyword::Exists) {
                    return self.parse_exists(true);
                }
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Not,
                    operand: Box::new(self.parse_subexpr(PREC_NOT)?),
                })
            }
            Some(Keyword::Any)
                if word.quote.is_none() && self.peek_nth_token(1) == Some(&Token::LParen) =>
            {
                if !self.dialect.any_array {
                    return Err(self.unsupported("ANY(...)"));
                }
                self.advance();
                self.advance();
                let inner = self.parse_expr()?;
                self.expect_token(&Token::RParen)?;
                Ok(Expr::Any(Box::new(inner)))
            }
            Some(Keyword::Array)
                if word.quote.is_none() && self.peek_nth_token(1) == Some(&Token::LBracket) =>
            {
                if !self.dialect.any_array {
                    return Err(self.unsupported("ARRAY[...]"));
                }
                self.advance();
                self.advance();
                let mut items = Vec::new();
                if self.peek_token() != Some(&Token::RBracket) {
                    items = self.parse_comma_separated(Self::parse_expr)?;
                }
                self.expect_token(&Token::RBracket)?;
                Ok(Expr::Array(items))
            }
            // MySQL `VALUES(col)` inside ON DUPLICATE KEY UPDATE, and the
            // string function `REPLACE(...)`: reserved words that can still
            // head a call.
            Some(Keyword::Values) | Some(Keyword::Replace)
                if word.quote.is_none() && self.peek_nth_token(1) == Some(&Token::LParen) =>
            {
                self.advance();
                self.parse_function(word)
            }
            _ => {
                if word.quote.is_none() && word.is_reserved() {
                    return self.expected("an expression");
                }
                self.advance();
                if self.peek_token() == Some(&Token::LParen) {
                    return self.parse_function(word);
                }
                self.parse_compound_identifier(word)
            }
        }
    }

    fn parse_compound_identifier(&mut self, first: Word) -> ParseResult<Expr> {
        let mut parts = vec![Ident::from_word(first)];
        while self.consume_token(&Token::Period) {
            match self.peek_token() {
                Some(Token::Star) => {
                    self.advance();
                    return Ok(Expr::QualifiedWildcard(parts));
                }
                Some(Token::Word(w)) => {
                    let word = w.clone();
                    self.advance();
                    parts.push(Ident::from_word(word));
                }
                _ => return self.expected("an identifier after '.'"),
            }
        }
        if parts.len() == 1 {
            Ok(Expr::Identifier(parts.pop().unwrap_or(Ident::new(""))))
        } else {
            Ok(Expr::CompoundIdentifier(parts))
        }
    }

    fn parse_function(&mut self, name: Word) -> ParseResult<Expr> {
        let upper = name.value.to_ascii_uppercase();
        if name.quote.is_none()
            && (upper == "JSON_EXTRACT" || upper == "JSON_UNQUOTE")
            && !self.dialect.json_extract
        {
            return Err(self.unsupported(&upper));
        }

        self.expect_token(&Token::LParen)?;

        let mut distinct = false;
        let mut args = Vec::new();
        if !self.consume_token(&Token::RParen) {
            if self.peek_token() == Some(&Token::Star)
                && self.peek_nth_token(1) == Some(&Token::RParen)
            {
                self.advance();
                self.advance();
                args.push(Expr::Wildcard);
            } else {
                if self.parse_keyword(Keyword::Distinct) {
                    distinct = true;
                }
                args = self.parse_comma_separated(Self::parse_expr)?;
                self.expect_token(&Token::RParen)?;
            }
        }

        let filter = if self.peek_keyword(Keyword::Filter) {
            if !self.dialect.aggregate_filter {
                return Err(self.unsupported("FILTER (WHERE ...)"));
            }
            self.advance();
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::Where)?;
            let condition = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(Box::new(condition))
        } else {
            None
        };

        let over = if self.parse_keyword(Keyword::Over) {
            self.expect_token(&Token::LParen)?;
            let partition_by = if self.parse_keywords(&[Keyword::Partition, Keyword::By]) {
                self.parse_comma_separated(Self::parse_expr)?
            } else {
                Vec::new()
            };
            let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
                self.parse_comma_separated(Self::parse_order_item)?
            } else {
                Vec::new()
            };
            self.expect_token(&Token::RParen)?;
            Some(WindowSpec {
                partition_by,
                order_by,
            })
        } else {
            None
        };

        Ok(Expr::Function(Function {
            name: Ident::from_word(name),
            args,
            distinct,
            filter,
            over,
        }))
    }

    fn parse_case(&mut self) -> ParseResult<Expr> {
        self.advance(); // CASE
        let operand = if !self.peek_keyword(Keyword::When) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let mut branches = Vec::new();
        while self.parse_keyword(Keyword::When) {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expr()?;
            branches.push(CaseBranch { condition, result });
        }
        if branches.is_empty() {
            return self.expected("WHEN");
        }
        let else_result = if self.parse_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(Expr::Case {
            operand,
            branches,
            else_result,
        })
    }

    fn parse_exists(&mut self, negated: bool) -> ParseResult<Expr> {
        self.expect_token(&Token::LParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Exists {
            subquery: Box::new(query),
            negated,
        })
    }

    fn parse_type_name(&mut self) -> ParseResult<TypeName> {
        let word = match self.peek_token() {
            Some(Token::Word(w)) => w.clone(),
            _ => return self.expected("a type name"),
        };
        self.advance();
        let args = if self.consume_token(&Token::LParen) {
            let args = self.parse_comma_separated(|parser| match parser.peek_token() {
                Some(Token::Number(n)) => {
                    let n = n.clone();
                    parser.advance();
                    Ok(n)
                }
                _ => parser.expected("a numeric type argument"),
            })?;
            self.expect_token(&Token::RParen)?;
            args
        } else {
            Vec::new()
        };
        Ok(TypeName {
            name: word.value,
            quoted: word.quote.is_some(),
            args,
        })
    }

    fn parse_infix(&mut self, left: Expr, precedence: u8) -> ParseResult<Expr> {
        let token = match self.peek_token() {
            Some(token) => token.clone(),
            None => return Err(ParseError::UnexpectedEof(self.prev_token_end())),
        };
        self.advance();

        let plain_op = match &token {
            Token::Eq => Some(BinaryOperator::Eq),
            Token::Neq => Some(BinaryOperator::NotEq),
            Token::Lt => Some(BinaryOperator::Lt),
            Token::LtEq => Some(BinaryOperator::LtEq),
            Token::Gt => Some(BinaryOperator::Gt),
            Token::GtEq => Some(BinaryOperator::GtEq),
            Token::Plus => Some(BinaryOperator::Plus),
            Token::Minus => Some(BinaryOperator::Minus),
            Token::Star => Some(BinaryOperator::Multiply),
            Token::Slash => Some(BinaryOperator::Divide),
            Token::Percent => Some(BinaryOperator::Modulo),
            Token::Concat => Some(BinaryOperator::Concat),
            Token::Arrow => Some(BinaryOperator::Arrow),
            Token::LongArrow => Some(BinaryOperator::LongArrow),
            Token::Word(w) if w.quote.is_none() => match w.keyword {
                Some(Keyword::And) => Some(BinaryOperator::And),
                Some(Keyword::Or) => Some(BinaryOperator::Or),
                _ => None,
            },
            _ => None,
        };
        if let Some(op) = plain_op {
            let right = self.parse_subexpr(precedence)?;
            return Ok(Expr::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            });
        }

        match &token {
            Token::DoubleColon => {
                let data_type = self.parse_type_name()?;
                Ok(Expr::Cast {
                    operand: Box::new(left),
                    data_type,
                    pg_style: true,
                })
            }
            Token::Word(w) => match w.keyword {
                Some(Keyword::Is) => self.parse_is(left),
                Some(Keyword::In) => self.parse_in(left, false),
                Some(Keyword::Between) => self.parse_between(left, false),
                Some(Keyword::Like) => self.parse_like(left, LikeOperator::Like, false),
                Some(Keyword::Ilike) => self.parse_like(left, LikeOperator::ILike, false),
                Some(Keyword::Regexp) => self.parse_like(left, LikeOperator::Regexp, false),
                Some(Keyword::Not) => {
                    if self.parse_keyword(Keyword::In) {
                        self.parse_in(left, true)
                    } else if self.parse_keyword(Keyword::Between) {
                        self.parse_between(left, true)
                    } else if self.parse_keyword(Keyword::Like) {
                        self.parse_like(left, LikeOperator::Like, true)
                    } else if self.parse_keyword(Keyword::Ilike) {
                        self.parse_like(left, LikeOperator::ILike, true)
                    } else if self.parse_keyword(Keyword::Regexp) {
                        self.parse_like(left, LikeOperator::Regexp, true)
                    } else {
                        self.expected("IN, BETWEEN, LIKE or a pattern operator after NOT")
                    }
                }
                _ => self.expected("an operator"),
            },
            _ => self.expected("an operator"),
        }
    }

    fn parse_is(&mut self, left: Expr) -> ParseResult<Expr> {
        let negated = self.parse_keyword(Keyword::Not);
        if self.parse_keyword(Keyword::Null) {
            return Ok(Expr::IsNull {
                operand: Box::new(left),
                negated,
            });
        }
        if self.parse_keyword(Keyword::Distinct) {
            self.expect_keyword(Keyword::From)?;
            let right = self.parse_subexpr(PREC_CMP)?;
            return Ok(Expr::IsDistinctFrom {
                left: Box::new(left),
                right: Box::new(right),
                negated,
            });
        }
        self.expected("NULL or DISTINCT FROM after IS")
    }

    fn parse_in(&mut self, operand: Expr, negated: bool) -> ParseResult<Expr> {
        self.expect_token(&Token::LParen)?;
        if matches!(
            self.peek_keyword_any(),
            Some(Keyword::Select) | Some(Keyword::With)
        ) {
            let query = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::InSubquery {
                operand: Box::new(operand),
                subquery: Box::new(query),
                negated,
            });
        }
        let list = self.parse_comma_separated(Self::parse_expr)?;
        self.expect_token(&Token::RParen)?;
        let row_valued =
            matches!(operand, Expr::Tuple(_)) || list.iter().any(|e| matches!(e, Expr::Tuple(_)));
        if row_valued && !self.dialect.row_value_in {
            return Err(self.unsupported("row-value IN"));
        }
        Ok(Expr::InList {
            operand: Box::new(operand),
            list,
            negated,
        })
    }

    fn parse_between(&mut self, operand: Expr, negated: bool) -> ParseResult<Expr> {
        let low = self.parse_subexpr(PREC_CMP)?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_subexpr(PREC_CMP)?;
        Ok(Expr::Between {
            operand: Box::new(operand),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    fn parse_like(
        &mut self,
        operand: Expr,
        op: LikeOperator,
        negated: bool,
    ) -> ParseResult<Expr> {
        let pattern = self.parse_subexpr(PREC_CMP)?;
        Ok(Expr::Like {
            operand: Box::new(operand),
            pattern: Box::new(pattern),
            op,
            negated,
        })
    }
}
