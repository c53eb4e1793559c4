//! `QuestionStore` over a `SqlGateway`

use super::queries;
use async_trait::async_trait;
use questionnaire_application::ports::question_store::{QuestionStore, StoreError};
use questionnaire_application::ports::sql_gateway::{GatewayError, Row, SqlGateway, SqlStatement};
use questionnaire_domain::{
    AnswerOption, CategoryCount, FieldCompleteness, OptionCount, QUESTION_TYPE,
    QuestionDefinition, ScoreExampleSummary, ScoreInterpretation, TemplateId, TemplateListing,
    Tier, numbered_options,
};
use std::sync::Arc;
use tracing::debug;

/// Question store issuing one statement per gateway call
pub struct SqlQuestionStore<G: SqlGateway> {
    gateway: Arc<G>,
}

impl<G: SqlGateway> SqlQuestionStore<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    async fn query(&self, statement: SqlStatement) -> Result<Vec<Row>, StoreError> {
        Ok(self.gateway.execute(statement).await?.rows)
    }

    /// Decode every row, failing on the first malformed one
    fn decode<T>(
        rows: &[Row],
        decode: impl Fn(&Row) -> Result<T, GatewayError>,
    ) -> Result<Vec<T>, StoreError> {
        rows.iter()
            .map(|r| decode(r).map_err(StoreError::from))
            .collect()
    }
}

fn listing(row: &Row) -> Result<TemplateListing, GatewayError> {
    Ok(TemplateListing {
        question_number: row.text("question_number")?,
        sub_category: row.opt_text("sub_category")?.unwrap_or_default(),
        text_excerpt: row.opt_text("txt")?.unwrap_or_default(),
    })
}

/// `STRING_AGG` yields `NULL` when a template owns no score examples.
fn split_levels(levels: Option<String>) -> Vec<String> {
    levels
        .map(|l| {
            l.split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl<G: SqlGateway> QuestionStore for SqlQuestionStore<G> {
    async fn existing_question_numbers(&self) -> Result<Vec<String>, StoreError> {
        let rows = self
            .query(SqlStatement::new(queries::SELECT_QUESTION_NUMBERS))
            .await?;
        Self::decode(&rows, |r| r.text("question_number"))
    }

    async fn deactivate(&self, question_number: &str) -> Result<u64, StoreError> {
        let result = self
            .gateway
            .execute(SqlStatement::new(queries::DEACTIVATE_TEMPLATE).bind(question_number))
            .await?;
        Ok(result.rows_affected())
    }

    async fn upsert_template(
        &self,
        question: &QuestionDefinition,
    ) -> Result<TemplateId, StoreError> {
        let statement = SqlStatement::new(queries::UPSERT_TEMPLATE)
            .bind(question.category.as_str())
            .bind(question.sub_category.as_str())
            .bind(question.id.as_str())
            .bind(question.text.as_str())
            .bind(QUESTION_TYPE)
            .bind(Tier::all_as_json())
            .bind(question.weight)
            .bind(question.critical)
            .bind(question.comment.as_str())
            .bind(question.motivation.as_str());

        let rows = self.query(statement).await?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::MissingTemplateId(question.id.clone()))?;
        Ok(TemplateId::new(row.text("id")?))
    }

    async fn replace_answer_options(
        &self,
        template: &TemplateId,
        options: &[AnswerOption],
    ) -> Result<(), StoreError> {
        let deleted = self
            .gateway
            .execute(SqlStatement::new(queries::DELETE_ANSWER_OPTIONS).bind(template.as_str()))
            .await?;
        debug!(
            "Removed {} answer option(s) of template {}",
            deleted.rows_affected(),
            template
        );

        for (order, option) in numbered_options(options) {
            let statement = SqlStatement::new(queries::INSERT_ANSWER_OPTION)
                .bind(template.as_str())
                .bind(option.label.as_str())
                .bind(option.value)
                .bind(order);
            self.gateway.execute(statement).await?;
        }
        Ok(())
    }

    async fn upsert_score_example(
        &self,
        template: &TemplateId,
        score: &ScoreInterpretation,
    ) -> Result<(), StoreError> {
        let statement = SqlStatement::new(queries::UPSERT_SCORE_EXAMPLE)
            .bind(template.as_str())
            .bind(score.level.as_str())
            .bind(score.reason.as_str())
            .bind(score.action.as_str());
        self.gateway.execute(statement).await?;
        Ok(())
    }

    async fn count_templates(&self, active: bool) -> Result<u64, StoreError> {
        let result = self
            .gateway
            .execute(SqlStatement::new(queries::COUNT_TEMPLATES).bind(active))
            .await?;
        Ok(result.first()?.count("cnt")?)
    }

    async fn list_templates(&self, active: bool) -> Result<Vec<TemplateListing>, StoreError> {
        let rows = self
            .query(SqlStatement::new(queries::LIST_TEMPLATES).bind(active))
            .await?;
        Self::decode(&rows, listing)
    }

    async fn field_completeness(&self) -> Result<Vec<FieldCompleteness>, StoreError> {
        let rows = self
            .query(SqlStatement::new(queries::FIELD_COMPLETENESS))
            .await?;
        Self::decode(&rows, |r| {
            Ok(FieldCompleteness {
                question_number: r.text("question_number")?,
                category: r.text("category")?,
                sub_category: r.opt_text("sub_category")?.unwrap_or_default(),
                text_excerpt: r.opt_text("txt")?.unwrap_or_default(),
                is_critical: r.boolean("is_critical")?,
                weight: r.float("weight")?,
                has_comment: r.boolean("has_comment")?,
                has_motivation: r.boolean("has_motivation")?,
            })
        })
    }

    async fn option_counts(&self) -> Result<Vec<OptionCount>, StoreError> {
        let rows = self.query(SqlStatement::new(queries::OPTION_COUNTS)).await?;
        Self::decode(&rows, |r| {
            Ok(OptionCount {
                question_number: r.text("question_number")?,
                count: r.count("opt_count")?,
            })
        })
    }

    async fn score_example_summaries(&self) -> Result<Vec<ScoreExampleSummary>, StoreError> {
        let rows = self
            .query(SqlStatement::new(queries::SCORE_EXAMPLE_SUMMARIES))
            .await?;
        Self::decode(&rows, |r| {
            Ok(ScoreExampleSummary {
                question_number: r.text("question_number")?,
                count: r.count("se_count")?,
                levels: split_levels(r.opt_text("levels")?),
                with_action: r.count("has_action")?,
            })
        })
    }

    async fn category_distribution(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let rows = self
            .query(SqlStatement::new(queries::CATEGORY_DISTRIBUTION))
            .await?;
        Self::decode(&rows, |r| {
            Ok(CategoryCount {
                category: r.text("category")?,
                sub_category: r.opt_text("sub_category")?.unwrap_or_default(),
                count: r.count("cnt")?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_application::ports::sql_gateway::{QueryResult, SqlValue};
    use questionnaire_domain::ScoreLevel;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records statements and replays canned responses in order
    struct RecordingGateway {
        statements: Mutex<Vec<SqlStatement>>,
        responses: Mutex<VecDeque<Value>>,
    }

    impl RecordingGateway {
        fn new(responses: Vec<Value>) -> Arc<Self> {
            Arc::new(Self {
                statements: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            })
        }

        fn statements(&self) -> Vec<SqlStatement> {
            self.statements.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SqlGateway for RecordingGateway {
        async fn execute(&self, statement: SqlStatement) -> Result<QueryResult, GatewayError> {
            self.statements.lock().unwrap().push(statement);
            let body = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| json!({ "rows": [], "rowCount": 0 }));
            serde_json::from_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
        }
    }

    fn question() -> QuestionDefinition {
        QuestionDefinition {
            id: "1.1".to_string(),
            category: "Documentation".to_string(),
            sub_category: "Certificates".to_string(),
            text: "Do you hold certificates?".to_string(),
            critical: true,
            weight: 2.0,
            comment: "Comment".to_string(),
            motivation: "Motivation".to_string(),
            options: vec![
                AnswerOption::new("All", 10),
                AnswerOption::new("Some", 5),
                AnswerOption::new("None", 1),
            ],
            scores: vec![
                ScoreInterpretation::new(ScoreLevel::Low, "None", "Obtain them"),
                ScoreInterpretation::new(ScoreLevel::Medium, "Some", "Review"),
                ScoreInterpretation::new(ScoreLevel::High, "All", "Maintain"),
            ],
        }
    }

    #[tokio::test]
    async fn test_upsert_template_binds_in_column_order() {
        let gateway = RecordingGateway::new(vec![json!({ "rows": [{ "id": 17 }], "rowCount": 1 })]);
        let store = SqlQuestionStore::new(Arc::clone(&gateway));

        let id = store.upsert_template(&question()).await.unwrap();
        assert_eq!(id.as_str(), "17");

        let statements = gateway.statements();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].query.contains("ON CONFLICT (category, question_number)"));
        assert!(statements[0].query.contains("RETURNING id"));
        assert_eq!(
            statements[0].params,
            vec![
                SqlValue::from("Documentation"),
                SqlValue::from("Certificates"),
                SqlValue::from("1.1"),
                SqlValue::from("Do you hold certificates?"),
                SqlValue::from("multiple_choice"),
                SqlValue::from(r#"["tier_0","tier_1","tier_2","tier_3","tier_4"]"#),
                SqlValue::Float(2.0),
                SqlValue::Bool(true),
                SqlValue::from("Comment"),
                SqlValue::from("Motivation"),
            ]
        );
    }

    #[tokio::test]
    async fn test_upsert_without_returned_row_is_error() {
        let gateway = RecordingGateway::new(vec![json!({ "rows": [] })]);
        let store = SqlQuestionStore::new(gateway);

        let err = store.upsert_template(&question()).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingTemplateId(q) if q == "1.1"));
    }

    #[tokio::test]
    async fn test_replace_answer_options_deletes_then_inserts_in_order() {
        let gateway = RecordingGateway::new(vec![]);
        let store = SqlQuestionStore::new(Arc::clone(&gateway));
        let id = TemplateId::new("17");

        store
            .replace_answer_options(&id, &question().options)
            .await
            .unwrap();

        let statements = gateway.statements();
        assert_eq!(statements.len(), 4);
        assert!(statements[0].query.starts_with("DELETE FROM question_answer_options"));
        assert_eq!(statements[0].params, vec![SqlValue::from("17")]);
        let inserted: Vec<_> = statements[1..]
            .iter()
            .map(|s| (s.params[1].clone(), s.params[3].clone()))
            .collect();
        assert_eq!(
            inserted,
            vec![
                (SqlValue::from("All"), SqlValue::Int(1)),
                (SqlValue::from("Some"), SqlValue::Int(2)),
                (SqlValue::from("None"), SqlValue::Int(3)),
            ]
        );
    }

    #[tokio::test]
    async fn test_upsert_score_example_targets_level_key() {
        let gateway = RecordingGateway::new(vec![]);
        let store = SqlQuestionStore::new(Arc::clone(&gateway));

        store
            .upsert_score_example(&TemplateId::new("17"), &question().scores[1])
            .await
            .unwrap();

        let statements = gateway.statements();
        assert!(statements[0]
            .query
            .contains("ON CONFLICT (question_template_id, score_level)"));
        assert_eq!(
            statements[0].params,
            vec![
                SqlValue::from("17"),
                SqlValue::from("medium"),
                SqlValue::from("Some"),
                SqlValue::from("Review"),
            ]
        );
    }

    #[tokio::test]
    async fn test_deactivate_reports_row_count() {
        let gateway = RecordingGateway::new(vec![json!({ "rows": [], "rowCount": 2 })]);
        let store = SqlQuestionStore::new(Arc::clone(&gateway));

        assert_eq!(store.deactivate("9.9").await.unwrap(), 2);
        assert_eq!(gateway.statements()[0].params, vec![SqlValue::from("9.9")]);
    }

    #[tokio::test]
    async fn test_count_templates_parses_bigint_string() {
        let gateway = RecordingGateway::new(vec![json!({ "rows": [{ "cnt": "26" }] })]);
        let store = SqlQuestionStore::new(Arc::clone(&gateway));

        assert_eq!(store.count_templates(true).await.unwrap(), 26);
        assert_eq!(gateway.statements()[0].params, vec![SqlValue::Bool(true)]);
    }

    #[tokio::test]
    async fn test_score_example_summaries_split_levels() {
        let gateway = RecordingGateway::new(vec![json!({
            "rows": [
                { "question_number": "1.1", "se_count": "3", "levels": "high,low,medium", "has_action": "3" },
                { "question_number": "1.2", "se_count": "0", "levels": null, "has_action": "0" }
            ]
        })]);
        let store = SqlQuestionStore::new(gateway);

        let summaries = store.score_example_summaries().await.unwrap();
        assert_eq!(summaries[0].levels, vec!["high", "low", "medium"]);
        assert_eq!(summaries[0].with_action, 3);
        assert!(summaries[1].levels.is_empty());
        assert_eq!(summaries[1].count, 0);
    }

    #[tokio::test]
    async fn test_field_completeness_decoding() {
        let gateway = RecordingGateway::new(vec![json!({
            "rows": [{
                "question_number": "1.1", "sub_category": "Certificates", "category": "Documentation",
                "txt": "Do you hold", "is_critical": true, "weight": "2.0",
                "has_comment": true, "has_motivation": false
            }]
        })]);
        let store = SqlQuestionStore::new(gateway);

        let rows = store.field_completeness().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weight, 2.0);
        assert!(rows[0].has_comment);
        assert!(!rows[0].has_motivation);
    }

    #[tokio::test]
    async fn test_malformed_row_is_error() {
        let gateway = RecordingGateway::new(vec![json!({
            "rows": [{ "question_number": "1.1" }]
        })]);
        let store = SqlQuestionStore::new(gateway);

        let err = store.option_counts().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Gateway(GatewayError::MissingColumn(c)) if c == "opt_count"
        ));
    }

    #[test]
    fn test_split_levels() {
        assert_eq!(split_levels(Some("low".to_string())), vec!["low"]);
        assert!(split_levels(Some(String::new())).is_empty());
        assert!(split_levels(None).is_empty());
    }
}
