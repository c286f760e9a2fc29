// ABOUTME: Typed filter predicates for todo queries
// ABOUTME: Builds parameterized WHERE clauses without splicing user input into SQL

/// A single filter condition over todo records.
///
/// Each variant pairs a fixed SQL fragment with the value bound to its
/// placeholder, so user input never enters the query text itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Substring match against the task text (`task LIKE ?`)
    TaskContains(String),
    /// Equality on the completion flag (`completed = ?`)
    CompletedEq(bool),
}

/// Parameter value bound to a predicate's placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Bool(bool),
}

impl Predicate {
    /// The SQL fragment for this predicate, placeholder included
    pub fn clause(&self) -> &'static str {
        match self {
            Predicate::TaskContains(_) => "task LIKE ?",
            Predicate::CompletedEq(_) => "completed = ?",
        }
    }

    /// The value to bind for this predicate's placeholder
    pub fn param(&self) -> Param {
        match self {
            Predicate::TaskContains(needle) => Param::Text(format!("%{}%", needle)),
            Predicate::CompletedEq(value) => Param::Bool(*value),
        }
    }
}

/// Ordered conjunction of predicates applied to count and scan queries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    predicates: Vec<Predicate>,
}

impl TodoFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substring match on the task text
    pub fn task_contains(mut self, needle: impl Into<String>) -> Self {
        self.predicates.push(Predicate::TaskContains(needle.into()));
        self
    }

    /// Add an equality check on the completion flag
    pub fn completed(mut self, value: bool) -> Self {
        self.predicates.push(Predicate::CompletedEq(value));
        self
    }

    /// Render the WHERE clause with a leading space, or an empty string
    /// when no predicates are set
    pub fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }

        let clauses: Vec<&str> = self.predicates.iter().map(Predicate::clause).collect();
        format!(" WHERE {}", clauses.join(" AND "))
    }

    /// The predicates in bind order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
