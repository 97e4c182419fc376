//! Unparser module
//!
//! Emits an AST as a single-line SQL string under the canonical whitespace
//! and delimiter policy: uppercase keywords, one space between tokens,
//! `", "` between list elements, no trailing semicolon. Parentheses around
//! expressions are re-derived from operator precedence, so syntactic
//! parentheses in the input can never leak into the output.

use crate::dialect::DialectDescriptor;
use crate::parser::{
    Assignment, BinaryOperator, CaseBranch, Cte, Delete, Distinct, Expr, Function, Ident, Insert,
    InsertSource, Join, JoinConstraint, JoinType, LikeOperator, LimitClause, Literal, NullsOrder,
    ObjectName, OnConflictAction, OnInsert, OrderDirection, OrderItem, Query, Select, SelectItem,
    SetExpr, SetOperator, Statement, TableFactor, TableWithJoins, TypeName, UnaryOperator, Update,
    WindowSpec, PREC_CAST, PREC_CMP, PREC_NOT, PREC_UNARY,
};

/// Emits the canonical single-line form of a statement.
pub fn emit(statement: &Statement, dialect: &DialectDescriptor) -> String {
    let mut unparser = Unparser::new(dialect);
    unparser.write_statement(statement);
    unparser.sql
}

struct Unparser<'a> {
    #[allow(dead_code)]
    dialect: &'a DialectDescriptor,
    sql: String,
}

/// Precedence of an expression node when it appears as an operand; atoms
/// never need parentheses.
fn expr_precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::BinaryOp { op, .. } => op.precedence(),
        Expr::UnaryOp {
            op: UnaryOperator::Not,
            ..
        } => PREC_NOT,
        Expr::UnaryOp { .. } => PREC_UNARY,
        Expr::IsNull { .. }
        | Expr::IsDistinctFrom { .. }
        | Expr::InList { .. }
        | Expr::InSubquery { .. }
        | Expr::Between { .. }
        | Expr::Like { .. } => PREC_CMP,
        Expr::Cast { pg_style: true, .. } => PREC_CAST,
        _ => u8::MAX,
    }
}

impl<'a> Unparser<'a> {
    fn new(dialect: &'a DialectDescriptor) -> Self {
        Self {
            dialect,
            sql: String::new(),
        }
    }

    fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn write_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Query(query) => self.write_query(query),
            Statement::Insert(insert) => self.write_insert(insert),
            Statement::Update(update) => self.write_update(update),
            Statement::Delete(delete) => self.write_delete(delete),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    fn write_query(&mut self, query: &Query) {
        if let Some(with) = &query.with {
            self.push("WITH ");
            if with.recursive {
                self.push("RECURSIVE ");
            }
            for (i, cte) in with.ctes.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.write_cte(cte);
            }
            self.push(" ");
        }

        self.write_set_expr(&query.body);

        if !query.order_by.is_empty() {
            self.push(" ORDER BY ");
            self.write_order_items(&query.order_by);
        }

        if let Some(limit) = &query.limit {
            self.write_limit(limit);
        }
    }

    fn write_cte(&mut self, cte: &Cte) {
        self.write_ident(&cte.name);
        if !cte.columns.is_empty() {
            self.push(" (");
            for (i, col) in cte.columns.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.write_ident(col);
            }
            self.push(")");
        }
        self.push(" AS (");
        self.write_query(&cte.query);
        self.push(")");
    }

    fn write_set_expr(&mut self, body: &SetExpr) {
        match body {
            SetExpr::Select(select) => self.write_select(select),
            SetExpr::SetOp {
                op,
                all,
                left,
                right,
            } => {
                self.write_set_expr(left);
                self.push(match op {
                    SetOperator::Union => " UNION ",
                    SetOperator::Intersect => " INTERSECT ",
                    SetOperator::Except => " EXCEPT ",
                });
                if *all {
                    self.push("ALL ");
                }
                self.write_set_expr(right);
            }
        }
    }

    fn write_select(&mut self, select: &Select) {
        self.push("SELECT ");

        match &select.distinct {
            Some(Distinct::Distinct) => self.push("DISTINCT "),
            Some(Distinct::On(exprs)) => {
                self.push("DISTINCT ON (");
                self.write_exprs(exprs);
                self.push(") ");
            }
            // `SELECT ALL` is the default and the normalizer drops it, but a
            // raw tree is still emitted faithfully.
            Some(Distinct::All) => self.push("ALL "),
            None => {}
        }

        for (i, item) in select.projection.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.write_select_item(item);
        }

        if !select.from.is_empty() {
            self.push(" FROM ");
            for (i, table) in select.from.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.write_table_with_joins(table);
            }
        }

        if let Some(selection) = &select.selection {
            self.push(" WHERE ");
            self.write_expr(selection);
        }

        if !select.group_by.is_empty() {
            self.push(" GROUP BY ");
            self.write_exprs(&select.group_by);
        }

        if let Some(having) = &select.having {
            self.push(" HAVING ");
            self.write_expr(having);
        }
    }

    fn write_select_item(&mut self, item: &SelectItem) {
        self.write_expr(&item.expr);
        if let Some(alias) = &item.alias {
            self.push(" AS ");
            self.write_ident(alias);
        }
    }

    fn write_table_with_joins(&mut self, table: &TableWithJoins) {
        self.write_table_factor(&table.relation);
        for join in &table.joins {
            self.write_join(join);
        }
    }

    fn write_table_factor(&mut self, factor: &TableFactor) {
        match factor {
            TableFactor::Table { name, alias } => {
                self.write_object_name(name);
                if let Some(alias) = alias {
                    self.push(" ");
                    self.write_ident(alias);
                }
            }
            TableFactor::Derived { subquery, alias } => {
                self.push("(");
                self.write_query(subquery);
                self.push(")");
                if let Some(alias) = alias {
                    self.push(" ");
                    self.write_ident(alias);
                }
            }
        }
    }

    fn write_join(&mut self, join: &Join) {
        self.push(match join.join_type {
            JoinType::Inner => " JOIN ",
            JoinType::Left => " LEFT JOIN ",
            JoinType::Right => " RIGHT JOIN ",
            JoinType::Full => " FULL JOIN ",
            JoinType::Cross => " CROSS JOIN ",
        });
        self.write_table_factor(&join.relation);
        match &join.constraint {
            JoinConstraint::On(expr) => {
                self.push(" ON ");
                self.write_expr(expr);
            }
            JoinConstraint::Using(columns) => {
                self.push(" USING (");
                for (i, col) in columns.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.write_ident(col);
                }
                self.push(")");
            }
            JoinConstraint::None => {}
        }
    }

    fn write_order_items(&mut self, items: &[OrderItem]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.write_expr(&item.expr);
            match item.direction {
                Some(OrderDirection::Asc) => self.push(" ASC"),
                Some(OrderDirection::Desc) => self.push(" DESC"),
                None => {}
            }
            match item.nulls {
                Some(NullsOrder::First) => self.push(" NULLS FIRST"),
                Some(NullsOrder::Last) => self.push(" NULLS LAST"),
                None => {}
            }
        }
    }

    fn write_limit(&mut self, limit: &LimitClause) {
        match limit {
            LimitClause::LimitOffset { limit, offset } => {
                if let Some(limit) = limit {
                    self.push(" LIMIT ");
                    self.write_expr(limit);
                }
                if let Some(offset) = offset {
                    self.push(" OFFSET ");
                    self.write_expr(offset);
                }
            }
            LimitClause::FetchFirst { offset, count } => {
                if let Some(offset) = offset {
                    self.push(" OFFSET ");
                    self.write_expr(offset);
                    self.push(" ROWS");
                }
                if let Some(count) = count {
                    self.push(" FETCH FIRST ");
                    self.write_expr(count);
                    self.push(" ROWS ONLY");
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // INSERT / UPDATE / DELETE
    // ------------------------------------------------------------------

    fn write_insert(&mut self, insert: &Insert) {
        if insert.replace {
            self.push("REPLACE INTO ");
        } else if insert.ignore {
            self.push("INSERT IGNORE INTO ");
        } else {
            self.push("INSERT INTO ");
        }
        self.write_object_name(&insert.table);

        if !insert.columns.is_empty() {
            self.push(" (");
            for (i, col) in insert.columns.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.write_ident(col);
            }
            self.push(")");
        }

        match &insert.source {
            InsertSource::Values(rows) => {
                self.push(" VALUES ");
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.push("(");
                    self.write_exprs(row);
                    self.push(")");
                }
            }
            InsertSource::DefaultValues => self.push(" DEFAULT VALUES"),
            InsertSource::Query(query) => {
                self.push(" ");
                self.write_query(query);
            }
        }

        match &insert.on {
            Some(OnInsert::Conflict { targets, action }) => {
                self.push(" ON CONFLICT");
                if !targets.is_empty() {
                    self.push(" (");
                    for (i, col) in targets.iter().enumerate() {
                        if i > 0 {
                            self.push(", ");
                        }
                        self.write_ident(col);
                    }
                    self.push(")");
                }
                match action {
                    OnConflictAction::DoNothing => self.push(" DO NOTHING"),
                    OnConflictAction::DoUpdate(assignments) => {
                        self.push(" DO UPDATE SET ");
                        self.write_assignments(assignments);
                    }
                }
            }
            Some(OnInsert::DuplicateKeyUpdate(assignments)) => {
                self.push(" ON DUPLICATE KEY UPDATE ");
                self.write_assignments(assignments);
            }
            None => {}
        }

        self.write_returning(&insert.returning);
    }

    fn write_update(&mut self, update: &Update) {
        self.push("UPDATE ");
        self.write_object_name(&update.table);
        if let Some(alias) = &update.alias {
            self.push(" ");
            self.write_ident(alias);
        }
        self.push(" SET ");
        self.write_assignments(&update.assignments);
        if let Some(from) = &update.from {
            self.push(" FROM ");
            self.write_table_with_joins(from);
        }
        if let Some(selection) = &update.selection {
            self.push(" WHERE ");
            self.write_expr(selection);
        }
        self.write_returning(&update.returning);
    }

    fn write_delete(&mut self, delete: &Delete) {
        self.push("DELETE FROM ");
        self.write_object_name(&delete.table);
        if let Some(alias) = &delete.alias {
            self.push(" ");
            self.write_ident(alias);
        }
        if let Some(selection) = &delete.selection {
            self.push(" WHERE ");
            self.write_expr(selection);
        }
        self.write_returning(&delete.returning);
    }

    fn write_assignments(&mut self, assignments: &[Assignment]) {
        for (i, assignment) in assignments.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.write_object_name(&assignment.target);
            self.push(" = ");
            self.write_expr(&assignment.value);
        }
    }

    fn write_returning(&mut self, returning: &[SelectItem]) {
        if returning.is_empty() {
            return;
        }
        self.push(" RETURNING ");
        for (i, item) in returning.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.write_select_item(item);
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn write_exprs(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.write_expr(expr);
        }
    }

    /// Writes an operand of a composite with precedence `parent`, inserting
    /// parentheses when re-parsing would otherwise bind differently. All
    /// binary operators associate to the left, so a right operand at equal
    /// precedence needs parentheses while a left operand does not.
    fn write_operand(&mut self, expr: &Expr, parent: u8, is_right: bool) {
        let prec = expr_precedence(expr);
        let parens = prec < parent || (prec == parent && is_right);
        if parens {
            self.push("(");
        }
        self.write_expr(expr);
        if parens {
            self.push(")");
        }
    }

    fn write_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.write_ident(ident),
            Expr::CompoundIdentifier(parts) => self.write_ident_parts(parts),
            Expr::QualifiedWildcard(parts) => {
                self.write_ident_parts(parts);
                self.push(".*");
            }
            Expr::Wildcard => self.push("*"),
            Expr::Literal(literal) => self.write_literal(literal),
            Expr::Placeholder(text) => self.push(text),
            Expr::BinaryOp { left, op, right } => {
                let prec = op.precedence();
                self.write_operand(left, prec, false);
                self.push(" ");
                self.push(binary_operator_symbol(op));
                self.push(" ");
                self.write_operand(right, prec, true);
            }
            Expr::UnaryOp { op, operand } => match op {
                UnaryOperator::Not => {
                    self.push("NOT ");
                    self.write_operand(operand, PREC_NOT, false);
                }
                UnaryOperator::Minus => {
                    self.push("-");
                    self.write_operand(operand, PREC_UNARY, false);
                }
                UnaryOperator::Plus => {
                    self.push("+");
                    self.write_operand(operand, PREC_UNARY, false);
                }
            },
            Expr::Nested(inner) => {
                self.push("(");
                self.write_expr(inner);
                self.push(")");
            }
            Expr::IsNull { operand, negated } => {
                self.write_operand(operand, PREC_CMP, false);
                self.push(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::IsDistinctFrom {
                left,
                right,
                negated,
            } => {
                self.write_operand(left, PREC_CMP, false);
                self.push(if *negated {
                    " IS NOT DISTINCT FROM "
                } else {
                    " IS DISTINCT FROM "
                });
                self.write_operand(right, PREC_CMP, true);
            }
            Expr::InList {
                operand,
                list,
                negated,
            } => {
                self.write_operand(operand, PREC_CMP, false);
                self.push(if *negated { " NOT IN (" } else { " IN (" });
                self.write_exprs(list);
                self.push(")");
            }
            Expr::InSubquery {
                operand,
                subquery,
                negated,
            } => {
                self.write_operand(operand, PREC_CMP, false);
                self.push(if *negated { " NOT IN (" } else { " IN (" });
                self.write_query(subquery);
                self.push(")");
            }
            Expr::Between {
                operand,
                low,
                high,
                negated,
            } => {
                self.write_operand(operand, PREC_CMP, false);
                self.push(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                self.write_operand(low, PREC_CMP, true);
                self.push(" AND ");
                self.write_operand(high, PREC_CMP, true);
            }
            Expr::Like {
                operand,
                pattern,
                op,
                negated,
            } => {
                self.write_operand(operand, PREC_CMP, false);
                if *negated {
                    self.push(" NOT");
                }
                self.push(match op {
                    LikeOperator::Like => " LIKE ",
                    LikeOperator::ILike => " ILIKE ",
                    LikeOperator::Regexp => " REGEXP ",
                });
                self.write_operand(pattern, PREC_CMP, true);
            }
            Expr::Exists { subquery, negated } => {
                if *negated {
                    self.push("NOT ");
                }
                self.push("EXISTS (");
                self.write_query(subquery);
                self.push(")");
            }
            Expr::Subquery(query) => {
                self.push("(");
                self.write_query(query);
                self.push(")");
            }
            Expr::Tuple(items) => {
                self.push("(");
                self.write_exprs(items);
                self.push(")");
            }
            Expr::Array(items) => {
                self.push("ARRAY[");
                self.write_exprs(items);
                self.push("]");
            }
            Expr::Any(inner) => {
                self.push("ANY(");
                self.write_expr(inner);
                self.push(")");
            }
            Expr::Function(function) => self.write_function(function),
            Expr::Cast {
                operand,
                data_type,
                pg_style,
            } => {
                if *pg_style {
                    self.write_operand(operand, PREC_CAST, false);
                    self.push("::");
                    self.write_type_name(data_type);
                } else {
                    self.push("CAST(");
                    self.write_expr(operand);
                    self.push(" AS ");
                    self.write_type_name(data_type);
                    self.push(")");
                }
            }
            Expr::Case {
                operand,
                branches,
                else_result,
            } => {
                self.push("CASE");
                if let Some(operand) = operand {
                    self.push(" ");
                    self.write_expr(operand);
                }
                for CaseBranch { condition, result } in branches {
                    self.push(" WHEN ");
                    self.write_expr(condition);
                    self.push(" THEN ");
                    self.write_expr(result);
                }
                if let Some(else_result) = else_result {
                    self.push(" ELSE ");
                    self.write_expr(else_result);
                }
                self.push(" END");
            }
        }
    }

    fn write_function(&mut self, function: &Function) {
        match function.name.quote {
            None => {
                let upper = function.name.value.to_ascii_uppercase();
                self.push(&upper);
            }
            Some(_) => self.write_ident(&function.name),
        }
        self.push("(");
        if function.distinct {
            self.push("DISTINCT ");
        }
        self.write_exprs(&function.args);
        self.push(")");

        if let Some(filter) = &function.filter {
            self.push(" FILTER (WHERE ");
            self.write_expr(filter);
            self.push(")");
        }

        if let Some(over) = &function.over {
            self.push(" OVER (");
            self.write_window_spec(over);
            self.push(")");
        }
    }

    fn write_window_spec(&mut self, spec: &WindowSpec) {
        let mut need_space = false;
        if !spec.partition_by.is_empty() {
            self.push("PARTITION BY ");
            self.write_exprs(&spec.partition_by);
            need_space = true;
        }
        if !spec.order_by.is_empty() {
            if need_space {
                self.push(" ");
            }
            self.push("ORDER BY ");
            self.write_order_items(&spec.order_by);
        }
    }

    fn write_type_name(&mut self, data_type: &TypeName) {
        if data_type.quoted {
            self.push("\"");
            self.push(&data_type.name);
            self.push("\"");
        } else {
            let upper = data_type.name.to_ascii_uppercase();
            self.push(&upper);
        }
        if !data_type.args.is_empty() {
            self.push("(");
            for (i, arg) in data_type.args.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.push(arg);
            }
            self.push(")");
        }
    }

    fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Number(raw) => self.push(raw),
            Literal::HexNumber(raw) => self.push(raw),
            Literal::String { value, quote } => {
                self.sql.push(*quote);
                self.sql.push_str(value);
                self.sql.push(*quote);
            }
            Literal::Boolean(true) => self.push("TRUE"),
            Literal::Boolean(false) => self.push("FALSE"),
            Literal::Null => self.push("NULL"),
        }
    }

    // ------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------

    fn write_ident(&mut self, ident: &Ident) {
        match ident.quote {
            None => self.push(&ident.value),
            Some('"') => {
                self.push("\"");
                self.push(&ident.value);
                self.push("\"");
            }
            Some('`') => {
                self.push("`");
                self.push(&ident.value);
                self.push("`");
            }
            Some('[') => {
                self.push("[");
                self.push(&ident.value);
                self.push("]");
            }
            Some(other) => {
                // Unreachable by construction; emit raw rather than panic.
                self.sql.push(other);
                self.push(&ident.value);
                self.sql.push(other);
            }
        }
    }

    fn write_ident_parts(&mut self, parts: &[Ident]) {
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                self.push(".");
            }
            self.write_ident(part);
        }
    }

    fn write_object_name(&mut self, name: &ObjectName) {
        self.write_ident_parts(&name.0);
    }
}

fn binary_operator_symbol(op: &BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Plus => "+",
        BinaryOperator::Minus => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Modulo => "%",
        BinaryOperator::Eq => "=",
        BinaryOperator::NotEq => "!=",
        BinaryOperator::Lt => "<",
        BinaryOperator::LtEq => "<=",
        BinaryOperator::Gt => ">",
        BinaryOperator::GtEq => ">=",
        BinaryOperator::And => "AND",
        BinaryOperator::Or => "OR",
        BinaryOperator::Concat => "||",
        BinaryOperator::Arrow => "->",
        BinaryOperator::LongArrow => "->>",
    }
}
