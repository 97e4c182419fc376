//! Normalizer module
//!
//! A pure AST-to-AST rewrite that collapses superficial variation before
//! unparsing: every literal becomes a placeholder (its normalized text is
//! captured in the parameter list, in left-to-right depth-first input
//! order), syntactic parentheses are flattened, the default `ASC` direction
//! and `SELECT ALL` are dropped. Structural canonicalization happens on the
//! tree before literal replacement, so the placeholder never changes which
//! rules fire.
//!
//! The normalizer owns its input and returns a fresh tree; it touches no
//! global state and performs no I/O.

use crate::parser::{
    Assignment, CaseBranch, Cte, Delete, Distinct, Expr, Function, Insert, InsertSource, Join,
    JoinConstraint, LimitClause, OnConflictAction, OnInsert, OrderDirection, OrderItem, Query,
    Select, SelectItem, SetExpr, Statement, TableFactor, TableWithJoins, Update, WindowSpec, With,
};

/// Rewrites a statement into its canonical structure, returning the
/// rewritten tree and the extracted parameters.
pub fn normalize_statement(statement: Statement, placeholder: &str) -> (Statement, Vec<String>) {
    let mut normalizer = Normalizer {
        placeholder: placeholder.to_string(),
        params: Vec::new(),
    };
    let statement = normalizer.fold_statement(statement);
    (statement, normalizer.params)
}

struct Normalizer {
    placeholder: String,
    params: Vec<String>,
}

impl Normalizer {
    fn fold_statement(&mut self, statement: Statement) -> Statement {
        match statement {
            Statement::Query(query) => Statement::Query(Box::new(self.fold_query(*query))),
            Statement::Insert(insert) => Statement::Insert(self.fold_insert(insert)),
            Statement::Update(update) => Statement::Update(self.fold_update(update)),
            Statement::Delete(delete) => Statement::Delete(self.fold_delete(delete)),
        }
    }

    fn fold_query(&mut self, query: Query) -> Query {
        Query {
            with: query.with.map(|with| With {
                recursive: with.recursive,
                ctes: with
                    .ctes
                    .into_iter()
                    .map(|cte| Cte {
                        name: cte.name,
                        columns: cte.columns,
                        query: Box::new(self.fold_query(*cte.query)),
                    })
                    .collect(),
            }),
            body: self.fold_set_expr(query.body),
            order_by: self.fold_order_items(query.order_by),
            limit: query.limit.map(|limit| self.fold_limit(limit)),
            span: query.span,
        }
    }

    fn fold_set_expr(&mut self, body: SetExpr) -> SetExpr {
        match body {
            SetExpr::Select(select) => SetExpr::Select(Box::new(self.fold_select(*select))),
            SetExpr::SetOp {
                op,
                all,
                left,
                right,
            } => SetExpr::SetOp {
                op,
                all,
                left: Box::new(self.fold_set_expr(*left)),
                right: Box::new(self.fold_set_expr(*right)),
            },
        }
    }

    fn fold_select(&mut self, select: Select) -> Select {
        let distinct = match select.distinct {
            // `SELECT ALL` is the default; it does not survive.
            Some(Distinct::All) => None,
            Some(Distinct::Distinct) => Some(Distinct::Distinct),
            Some(Distinct::On(exprs)) => Some(Distinct::On(self.fold_exprs(exprs))),
            None => None,
        };
        Select {
            distinct,
            projection: select
                .projection
                .into_iter()
                .map(|item| self.fold_select_item(item))
                .collect(),
            from: select
                .from
                .into_iter()
                .map(|table| self.fold_table_with_joins(table))
                .collect(),
            selection: select.selection.map(|expr| self.fold_expr(expr)),
            group_by: self.fold_exprs(select.group_by),
            having: select.having.map(|expr| self.fold_expr(expr)),
        }
    }

    fn fold_select_item(&mut self, item: SelectItem) -> SelectItem {
        SelectItem {
            expr: self.fold_expr(item.expr),
            alias: item.alias,
        }
    }

    fn fold_table_with_joins(&mut self, table: TableWithJoins) -> TableWithJoins {
        TableWithJoins {
            relation: self.fold_table_factor(table.relation),
            joins: table
                .joins
                .into_iter()
                .map(|join| Join {
                    join_type: join.join_type,
                    relation: self.fold_table_factor(join.relation),
                    constraint: match join.constraint {
                        JoinConstraint::On(expr) => JoinConstraint::On(self.fold_expr(expr)),
                        other => other,
                    },
                })
                .collect(),
        }
    }

    fn fold_table_factor(&mut self, factor: TableFactor) -> TableFactor {
        match factor {
            TableFactor::Table { name, alias } => TableFactor::Table { name, alias },
            TableFactor::Derived { subquery, alias } => TableFactor::Derived {
                subquery: Box::new(self.fold_query(*subquery)),
                alias,
            },
        }
    }

    fn fold_order_items(&mut self, items: Vec<OrderItem>) -> Vec<OrderItem> {
        items
            .into_iter()
            .map(|item| OrderItem {
                expr: self.fold_expr(item.expr),
                // Ascending is the default; the keyword is dropped.
                direction: match item.direction {
                    Some(OrderDirection::Asc) => None,
                    other => other,
                },
                nulls: item.nulls,
            })
            .collect()
    }

    fn fold_limit(&mut self, limit: LimitClause) -> LimitClause {
        match limit {
            LimitClause::LimitOffset { limit, offset } => LimitClause::LimitOffset {
                limit: limit.map(|e| self.fold_expr(e)),
                offset: offset.map(|e| self.fold_expr(e)),
            },
            LimitClause::FetchFirst { offset, count } => LimitClause::FetchFirst {
                offset: offset.map(|e| self.fold_expr(e)),
                count: count.map(|e| self.fold_expr(e)),
            },
        }
    }

    fn fold_insert(&mut self, insert: Insert) -> Insert {
        Insert {
            replace: insert.replace,
            ignore: insert.ignore,
            table: insert.table,
            columns: insert.columns,
            source: match insert.source {
                InsertSource::Values(rows) => InsertSource::Values(
                    rows.into_iter().map(|row| self.fold_exprs(row)).collect(),
                ),
                InsertSource::DefaultValues => InsertSource::DefaultValues,
                InsertSource::Query(query) => {
                    InsertSource::Query(Box::new(self.fold_query(*query)))
                }
            },
            on: insert.on.map(|on| match on {
                OnInsert::Conflict { targets, action } => OnInsert::Conflict {
                    targets,
                    action: match action {
                        OnConflictAction::DoNothing => OnConflictAction::DoNothing,
                        OnConflictAction::DoUpdate(assignments) => {
                            OnConflictAction::DoUpdate(self.fold_assignments(assignments))
                        }
                    },
                },
                OnInsert::DuplicateKeyUpdate(assignments) => {
                    OnInsert::DuplicateKeyUpdate(self.fold_assignments(assignments))
                }
            }),
            returning: insert
                .returning
                .into_iter()
                .map(|item| self.fold_select_item(item))
                .collect(),
            span: insert.span,
        }
    }

    fn fold_update(&mut self, update: Update) -> Update {
        Update {
            table: update.table,
            alias: update.alias,
            assignments: self.fold_assignments(update.assignments),
            from: update.from.map(|from| self.fold_table_with_joins(from)),
            selection: update.selection.map(|expr| self.fold_expr(expr)),
            returning: update
                .returning
                .into_iter()
                .map(|item| self.fold_select_item(item))
                .collect(),
            span: update.span,
        }
    }

    fn fold_delete(&mut self, delete: Delete) -> Delete {
        Delete {
            table: delete.table,
            alias: delete.alias,
            selection: delete.selection.map(|expr| self.fold_expr(expr)),
            returning: delete
                .returning
                .into_iter()
                .map(|item| self.fold_select_item(item))
                .collect(),
            span: delete.span,
        }
    }

    fn fold_assignments(&mut self, assignments: Vec<Assignment>) -> Vec<Assignment> {
        assignments
            .into_iter()
            .map(|assignment| Assignment {
                target: assignment.target,
                value: self.fold_expr(assignment.value),
            })
            .collect()
    }

    fn fold_exprs(&mut self, exprs: Vec<Expr>) -> Vec<Expr> {
        exprs.into_iter().map(|e| self.fold_expr(e)).collect()
    }

    fn fold_expr(&mut self, expr: Expr) -> Expr {
        match expr {
            Expr::Literal(literal) => {
                self.params.push(literal.param_text());
                Expr::Placeholder(self.placeholder.clone())
            }
            // Parentheses that only group are flattened; the unparser
            // re-derives the ones precedence requires.
            Expr::Nested(inner) => self.fold_expr(*inner),
            Expr::BinaryOp { left, op, right } => Expr::BinaryOp {
                left: Box::new(self.fold_expr(*left)),
                op,
                right: Box::new(self.fold_expr(*right)),
            },
            Expr::UnaryOp { op, operand } => Expr::UnaryOp {
                op,
                operand: Box::new(self.fold_expr(*operand)),
            },
            Expr::IsNull { operand, negated } => Expr::IsNull {
                // The NULL keyword here is structural, not a literal.
                operand: Box::new(self.fold_expr(*operand)),
                negated,
            },
            Expr::IsDistinctFrom {
                left,
                right,
                negated,
            } => Expr::IsDistinctFrom {
                left: Box::new(self.fold_expr(*left)),
                right: Box::new(self.fold_expr(*right)),
                negated,
            },
            Expr::InList {
                operand,
                list,
                negated,
            } => Expr::InList {
                operand: Box::new(self.fold_expr(*operand)),
                list: self.fold_exprs(list),
                negated,
            },
            Expr::InSubquery {
                operand,
                subquery,
                negated,
            } => Expr::InSubquery {
                operand: Box::new(self.fold_expr(*operand)),
                subquery: Box::new(self.fold_query(*subquery)),
                negated,
            },
            Expr::Between {
                operand,
                low,
                high,
                negated,
            } => Expr::Between {
                operand: Box::new(self.fold_expr(*operand)),
                low: Box::new(self.fold_expr(*low)),
                high: Box::new(self.fold_expr(*high)),
                negated,
            },
            Expr::Like {
                operand,
                pattern,
                op,
                negated,
            } => Expr::Like {
                operand: Box::new(self.fold_expr(*operand)),
                pattern: Box::new(self.fold_expr(*pattern)),
                op,
                negated,
            },
            Expr::Exists { subquery, negated } => Expr::Exists {
                subquery: Box::new(self.fold_query(*subquery)),
                negated,
            },
            Expr::Subquery(query) => Expr::Subquery(Box::new(self.fold_query(*query))),
            Expr::Tuple(items) => Expr::Tuple(self.fold_exprs(items)),
            Expr::Array(items) => Expr::Array(self.fold_exprs(items)),
            Expr::Any(inner) => Expr::Any(Box::new(self.fold_expr(*inner))),
            Expr::Function(function) => Expr::Function(self.fold_function(function)),
            Expr::Cast {
                operand,
                data_type,
                pg_style,
            } => Expr::Cast {
                operand: Box::new(self.fold_expr(*operand)),
                data_type,
                pg_style,
            },
            Expr::Case {
                operand,
                branches,
                else_result,
            } => Expr::Case {
                operand: operand.map(|e| Box::new(self.fold_expr(*e))),
                branches: branches
                    .into_iter()
                    .map(|branch| CaseBranch {
                        condition: self.fold_expr(branch.condition),
                        result: self.fold_expr(branch.result),
                    })
                    .collect(),
                else_result: else_result.map(|e| Box::new(self.fold_expr(*e))),
            },
            // Identifiers, wildcards and pre-existing placeholders pass
            // through untouched.
            other @ (Expr::Identifier(_)
            | Expr::CompoundIdentifier(_)
            | Expr::QualifiedWildcard(_)
            | Expr::Wildcard
            | Expr::Placeholder(_)) => other,
        }
    }

    fn fold_function(&mut self, function: Function) -> Function {
        Function {
            name: function.name,
            args: self.fold_exprs(function.args),
            distinct: function.distinct,
            filter: function.filter.map(|e| Box::new(self.fold_expr(*e))),
            over: function.over.map(|spec| WindowSpec {
                partition_by: self.fold_exprs(spec.partition_by),
                order_by: self.fold_order_items(spec.order_by),
            }),
        }
    }
}
