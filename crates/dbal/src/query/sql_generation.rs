//! Query Builder SQL generation

use crate::naming::AssetName;
use crate::platform::Platform;

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    /// Render the query for `platform`
    ///
    /// CTEs are rendered first, then the main SELECT. Table and CTE names go
    /// through the quoting resolver; select expressions and columns are
    /// emitted as written.
    pub fn to_sql<P: Platform + ?Sized>(&self, platform: &P) -> String {
        let mut sql = String::new();

        // WITH clause
        if !self.ctes.is_empty() {
            sql.push_str("WITH ");
            let ctes: Vec<String> = self
                .ctes
                .iter()
                .map(|cte| self.build_cte(cte, platform))
                .collect();
            sql.push_str(&ctes.join(", "));
            sql.push(' ');
        }

        // SELECT clause
        if self.distinct {
            sql.push_str("SELECT DISTINCT ");
        } else {
            sql.push_str("SELECT ");
        }

        if self.select_fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_fields.join(", "));
        }

        // FROM clause
        if !self.from_tables.is_empty() {
            sql.push_str(" FROM ");
            let tables: Vec<String> = self
                .from_tables
                .iter()
                .map(|reference| {
                    let table = self.render_name(&reference.table, platform);
                    match &reference.alias {
                        Some(alias) => format!("{} {}", table, alias),
                        None => table,
                    }
                })
                .collect();
            sql.push_str(&tables.join(", "));
        }

        // WHERE clause
        if !self.where_conditions.is_empty() {
            sql.push_str(" WHERE ");
            let conditions: Vec<String> = self
                .where_conditions
                .iter()
                .map(build_where_condition)
                .collect();
            sql.push_str(&conditions.join(" AND "));
        }

        // GROUP BY clause
        if !self.group_by.is_empty() {
            sql.push_str(&format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        // ORDER BY clause
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            let order_clauses: Vec<String> = self
                .order_by
                .iter()
                .map(|(column, direction)| format!("{} {}", column, direction))
                .collect();
            sql.push_str(&order_clauses.join(", "));
        }

        // LIMIT clause
        if let Some(limit) = self.limit_count {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        // OFFSET clause
        if let Some(offset) = self.offset_value {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }

    fn build_cte<P: Platform + ?Sized>(&self, cte: &CommonTableExpression, platform: &P) -> String {
        let mut sql = self.render_name(&cte.name, platform);
        if !cte.columns.is_empty() {
            let columns: Vec<String> = cte
                .columns
                .iter()
                .map(|column| self.render_name(&AssetName::from_raw(column), platform))
                .collect();
            sql.push_str(&format!("({})", columns.join(", ")));
        }
        sql.push_str(&format!(" AS ({})", cte.query.to_sql(platform)));
        sql
    }

    fn render_name<P: Platform + ?Sized>(&self, name: &AssetName, platform: &P) -> String {
        self.resolver.render_for(name, platform).into_sql()
    }
}

fn build_where_condition(condition: &WhereCondition) -> String {
    if let Some(raw) = &condition.raw {
        return raw.clone();
    }

    match (&condition.operator, &condition.placeholder) {
        (QueryOperator::IsNull | QueryOperator::IsNotNull, _) => {
            format!("{} {}", condition.column, condition.operator)
        }
        (operator, Some(placeholder)) => format!("{} {} {}", condition.column, operator, placeholder),
        (_, None) => format!("{} IS NULL", condition.column),
    }
}

#[cfg(test)]
mod tests {
    use crate::platform::SqlDialect;
    use crate::query::QueryBuilder;

    #[test]
    fn test_simple_select() {
        let sql = QueryBuilder::new()
            .select("id, name")
            .from("users")
            .where_eq("status", ":status")
            .where_not_null("email")
            .order_by_desc("created_at")
            .limit(10)
            .offset(20)
            .to_sql(&SqlDialect::PostgreSQL);

        assert_eq!(
            sql,
            "SELECT id, name FROM users WHERE status = :status AND email IS NOT NULL ORDER BY created_at DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_reserved_table_name_is_quoted_per_platform() {
        let query = QueryBuilder::new().from_as("order", "o");
        assert_eq!(query.to_sql(&SqlDialect::PostgreSQL), "SELECT * FROM \"order\" o");
        assert_eq!(query.to_sql(&SqlDialect::MySQL), "SELECT * FROM `order` o");
    }

    #[test]
    fn test_cte_rendering() {
        let active = QueryBuilder::new()
            .select("id")
            .from("users")
            .where_eq("status", ":status");

        let sql = QueryBuilder::new()
            .with_columns("active_users", &["user_id"], active)
            .select_count("*", Some("total"))
            .from("active_users")
            .group_by("user_id")
            .to_sql(&SqlDialect::PostgreSQL);

        assert_eq!(
            sql,
            "WITH active_users(user_id) AS (SELECT id FROM users WHERE status = :status) SELECT COUNT(*) AS total FROM active_users GROUP BY user_id"
        );
    }

    #[test]
    fn test_raw_and_distinct() {
        let sql = QueryBuilder::new()
            .select_distinct("city")
            .from("app.addresses")
            .where_raw("length(city) > 3")
            .where_like("city", "?")
            .to_sql(&SqlDialect::SQLite);

        assert_eq!(
            sql,
            "SELECT DISTINCT city FROM app.addresses WHERE length(city) > 3 AND city LIKE ?"
        );
    }
}
