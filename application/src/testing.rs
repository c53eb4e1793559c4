//! In-memory question store for use case tests.
//!
//! Mirrors the three remote tables closely enough to check reconciliation
//! and verification properties without a database.

use crate::ports::question_store::{QuestionStore, StoreError};
use crate::ports::sql_gateway::GatewayError;
use async_trait::async_trait;
use questionnaire_domain::core::string::left;
use questionnaire_domain::{
    AnswerOption, Catalogue, CategoryCount, FieldCompleteness, LISTING_EXCERPT_CHARS,
    OptionCount, QUESTION_TYPE, QuestionDefinition, ScoreExampleSummary, ScoreInterpretation,
    ScoreLevel, TemplateId, TemplateListing, Tier, numbered_options,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

/// A well-formed question with three options and all three levels.
pub fn question(id: &str) -> QuestionDefinition {
    QuestionDefinition {
        id: id.to_string(),
        category: "Documentation".to_string(),
        sub_category: "Certificates".to_string(),
        text: format!("Do you hold evidence for item {id}?"),
        critical: false,
        weight: 1.0,
        comment: format!("Comment for {id}"),
        motivation: format!("Motivation for {id}"),
        options: vec![
            AnswerOption::new(format!("{id}: fully"), 10),
            AnswerOption::new(format!("{id}: partly"), 5),
            AnswerOption::new(format!("{id}: not at all"), 1),
        ],
        scores: vec![
            ScoreInterpretation::new(ScoreLevel::Low, "Not at all", "Start now"),
            ScoreInterpretation::new(ScoreLevel::Medium, "Partly", "Improve"),
            ScoreInterpretation::new(ScoreLevel::High, "Fully", "Maintain"),
        ],
    }
}

pub fn catalogue_of(ids: &[&str]) -> Catalogue {
    Catalogue::new(ids.iter().map(|id| question(id)).collect()).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRow {
    pub id: u64,
    pub category: String,
    pub sub_category: String,
    pub question_number: String,
    pub question_text: String,
    pub question_type: String,
    pub applicable_tiers: String,
    pub weight: f64,
    pub is_critical: bool,
    pub comment: Option<String>,
    pub motivation: Option<String>,
    pub is_active: bool,
    /// Logical clock standing in for `updated_at`
    pub updated_at: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub template_id: u64,
    pub option_text: String,
    pub score_value: i32,
    pub option_order: i32,
    pub is_example: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub template_id: u64,
    pub score_level: String,
    pub reason_text: String,
    pub report_action: Option<String>,
}

/// Table contents with timestamps cleared, for state comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub templates: Vec<TemplateRow>,
    pub options: Vec<OptionRow>,
    pub scores: Vec<ScoreRow>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    clock: u64,
    templates: Vec<TemplateRow>,
    options: Vec<OptionRow>,
    scores: Vec<ScoreRow>,
    fail_deactivation: HashSet<String>,
    fail_score_examples: HashSet<String>,
    fail_listing: bool,
}

impl State {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn template_id(&self, question_number: &str) -> Option<u64> {
        self.templates
            .iter()
            .find(|t| t.question_number == question_number)
            .map(|t| t.id)
    }

    fn question_number_of(&self, id: u64) -> Option<&str> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.question_number.as_str())
    }

    fn active_sorted(&self) -> Vec<&TemplateRow> {
        let mut rows: Vec<_> = self.templates.iter().filter(|t| t.is_active).collect();
        rows.sort_by(|a, b| a.question_number.cmp(&b.question_number));
        rows
    }
}

fn injected_failure(what: &str) -> StoreError {
    StoreError::Gateway(GatewayError::Status {
        status: 500,
        body: format!("injected failure: {what}"),
    })
}

fn parse_id(id: &TemplateId) -> u64 {
    id.as_str().parse().unwrap()
}

fn category_rank(category: &str) -> u8 {
    match category {
        "Documentation" => 1,
        "Landlord-Tenant Communication" => 2,
        "Evidence Gathering Systems and Procedures" => 3,
        _ => 4,
    }
}

pub struct InMemoryQuestionStore {
    state: Mutex<State>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Insert a bare template row directly (no options, no score examples)
    pub fn seed_template(&self, category: &str, question_number: &str, is_active: bool) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let updated_at = state.tick();
        state.templates.push(TemplateRow {
            id,
            category: category.to_string(),
            sub_category: "Legacy".to_string(),
            question_number: question_number.to_string(),
            question_text: "Legacy question".to_string(),
            question_type: QUESTION_TYPE.to_string(),
            applicable_tiers: Tier::all_as_json(),
            weight: 1.0,
            is_critical: false,
            comment: None,
            motivation: None,
            is_active,
            updated_at,
        });
    }

    pub fn fail_deactivation_for(&self, question_number: &str) {
        let mut state = self.state.lock().unwrap();
        state.fail_deactivation.insert(question_number.to_string());
    }

    pub fn fail_score_examples_for(&self, question_number: &str) {
        let mut state = self.state.lock().unwrap();
        state.fail_score_examples.insert(question_number.to_string());
    }

    pub fn fail_listing(&self) {
        self.state.lock().unwrap().fail_listing = true;
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.lock().unwrap();
        let templates = state
            .templates
            .iter()
            .cloned()
            .map(|mut t| {
                t.updated_at = 0;
                t
            })
            .collect();
        let mut options = state.options.clone();
        options.sort_by_key(|o| (o.template_id, o.option_order));
        let mut scores = state.scores.clone();
        scores.sort_by(|a, b| {
            (a.template_id, &a.score_level).cmp(&(b.template_id, &b.score_level))
        });
        StoreSnapshot {
            templates,
            options,
            scores,
        }
    }

    pub fn template_count(&self) -> usize {
        self.state.lock().unwrap().templates.len()
    }

    pub fn is_active(&self, question_number: &str) -> Option<bool> {
        let state = self.state.lock().unwrap();
        state
            .templates
            .iter()
            .find(|t| t.question_number == question_number)
            .map(|t| t.is_active)
    }

    /// Option labels ordered by `option_order`
    pub fn option_labels(&self, question_number: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let Some(id) = state.template_id(question_number) else {
            return Vec::new();
        };
        let mut options: Vec<_> = state.options.iter().filter(|o| o.template_id == id).collect();
        options.sort_by_key(|o| o.option_order);
        options.into_iter().map(|o| o.option_text.clone()).collect()
    }

    /// Score levels present, sorted
    pub fn score_levels(&self, question_number: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let Some(id) = state.template_id(question_number) else {
            return Vec::new();
        };
        let mut levels: Vec<_> = state
            .scores
            .iter()
            .filter(|s| s.template_id == id)
            .map(|s| s.score_level.clone())
            .collect();
        levels.sort();
        levels
    }

    pub fn score_action(&self, question_number: &str, level: ScoreLevel) -> Option<String> {
        let state = self.state.lock().unwrap();
        let id = state.template_id(question_number)?;
        state
            .scores
            .iter()
            .find(|s| s.template_id == id && s.score_level == level.as_str())
            .and_then(|s| s.report_action.clone())
    }

    pub fn set_score_action(&self, question_number: &str, level: ScoreLevel, action: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        let id = state.template_id(question_number).unwrap();
        for s in state.scores.iter_mut() {
            if s.template_id == id && s.score_level == level.as_str() {
                s.report_action = action.map(str::to_string);
            }
        }
    }

    pub fn clear_comment(&self, question_number: &str) {
        let mut state = self.state.lock().unwrap();
        for t in state.templates.iter_mut() {
            if t.question_number == question_number {
                t.comment = None;
            }
        }
    }

    /// Append an extra option without removing the existing ones
    pub fn add_option(&self, question_number: &str, label: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.template_id(question_number).unwrap();
        state.options.push(OptionRow {
            template_id: id,
            option_text: label.to_string(),
            score_value: 0,
            option_order: 4,
            is_example: false,
        });
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn existing_question_numbers(&self) -> Result<Vec<String>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut numbers: Vec<_> = state
            .templates
            .iter()
            .map(|t| t.question_number.clone())
            .collect();
        numbers.sort();
        Ok(numbers)
    }

    async fn deactivate(&self, question_number: &str) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_deactivation.contains(question_number) {
            return Err(injected_failure(question_number));
        }
        let now = state.tick();
        let mut affected = 0;
        for t in state.templates.iter_mut() {
            if t.question_number == question_number {
                t.is_active = false;
                t.updated_at = now;
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn upsert_template(
        &self,
        question: &QuestionDefinition,
    ) -> Result<TemplateId, StoreError> {
        let mut state = self.state.lock().unwrap();
        let now = state.tick();

        if let Some(existing) = state
            .templates
            .iter_mut()
            .find(|t| t.category == question.category && t.question_number == question.id)
        {
            existing.sub_category = question.sub_category.clone();
            existing.question_text = question.text.clone();
            existing.applicable_tiers = Tier::all_as_json();
            existing.weight = question.weight;
            existing.is_critical = question.critical;
            existing.comment = Some(question.comment.clone());
            existing.motivation = Some(question.motivation.clone());
            existing.is_active = true;
            existing.updated_at = now;
            return Ok(TemplateId::new(existing.id.to_string()));
        }

        let id = state.next_id;
        state.next_id += 1;
        state.templates.push(TemplateRow {
            id,
            category: question.category.clone(),
            sub_category: question.sub_category.clone(),
            question_number: question.id.clone(),
            question_text: question.text.clone(),
            question_type: QUESTION_TYPE.to_string(),
            applicable_tiers: Tier::all_as_json(),
            weight: question.weight,
            is_critical: question.critical,
            comment: Some(question.comment.clone()),
            motivation: Some(question.motivation.clone()),
            is_active: true,
            updated_at: now,
        });
        Ok(TemplateId::new(id.to_string()))
    }

    async fn replace_answer_options(
        &self,
        template: &TemplateId,
        options: &[AnswerOption],
    ) -> Result<(), StoreError> {
        let id = parse_id(template);
        let mut state = self.state.lock().unwrap();
        state.options.retain(|o| o.template_id != id);
        for (order, option) in numbered_options(options) {
            state.options.push(OptionRow {
                template_id: id,
                option_text: option.label.clone(),
                score_value: option.value,
                option_order: order,
                is_example: false,
            });
        }
        Ok(())
    }

    async fn upsert_score_example(
        &self,
        template: &TemplateId,
        score: &ScoreInterpretation,
    ) -> Result<(), StoreError> {
        let id = parse_id(template);
        let mut state = self.state.lock().unwrap();
        if let Some(number) = state.question_number_of(id)
            && state.fail_score_examples.contains(number)
        {
            return Err(injected_failure(number));
        }

        let level = score.level.as_str();
        if let Some(existing) = state
            .scores
            .iter_mut()
            .find(|s| s.template_id == id && s.score_level == level)
        {
            existing.reason_text = score.reason.clone();
            existing.report_action = Some(score.action.clone());
        } else {
            state.scores.push(ScoreRow {
                template_id: id,
                score_level: level.to_string(),
                reason_text: score.reason.clone(),
                report_action: Some(score.action.clone()),
            });
        }
        Ok(())
    }

    async fn count_templates(&self, active: bool) -> Result<u64, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.templates.iter().filter(|t| t.is_active == active).count() as u64)
    }

    async fn list_templates(&self, active: bool) -> Result<Vec<TemplateListing>, StoreError> {
        let state = self.state.lock().unwrap();
        if state.fail_listing {
            return Err(injected_failure("list_templates"));
        }
        let mut rows: Vec<_> = state
            .templates
            .iter()
            .filter(|t| t.is_active == active)
            .collect();
        rows.sort_by(|a, b| a.question_number.cmp(&b.question_number));
        Ok(rows
            .into_iter()
            .map(|t| TemplateListing {
                question_number: t.question_number.clone(),
                sub_category: t.sub_category.clone(),
                text_excerpt: left(&t.question_text, LISTING_EXCERPT_CHARS).to_string(),
            })
            .collect())
    }

    async fn field_completeness(&self) -> Result<Vec<FieldCompleteness>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<_> = state.templates.iter().filter(|t| t.is_active).collect();
        rows.sort_by(|a, b| {
            (category_rank(&a.category), &a.question_number)
                .cmp(&(category_rank(&b.category), &b.question_number))
        });
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        Ok(rows
            .into_iter()
            .map(|t| FieldCompleteness {
                question_number: t.question_number.clone(),
                category: t.category.clone(),
                sub_category: t.sub_category.clone(),
                text_excerpt: left(&t.question_text, LISTING_EXCERPT_CHARS).to_string(),
                is_critical: t.is_critical,
                weight: t.weight,
                has_comment: present(&t.comment),
                has_motivation: present(&t.motivation),
            })
            .collect())
    }

    async fn option_counts(&self) -> Result<Vec<OptionCount>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .active_sorted()
            .into_iter()
            .map(|t| OptionCount {
                question_number: t.question_number.clone(),
                count: state.options.iter().filter(|o| o.template_id == t.id).count() as u64,
            })
            .collect())
    }

    async fn score_example_summaries(&self) -> Result<Vec<ScoreExampleSummary>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .active_sorted()
            .into_iter()
            .map(|t| {
                let owned: Vec<_> = state.scores.iter().filter(|s| s.template_id == t.id).collect();
                let mut levels: Vec<String> = owned.iter().map(|s| s.score_level.clone()).collect();
                levels.sort();
                ScoreExampleSummary {
                    question_number: t.question_number.clone(),
                    count: owned.len() as u64,
                    levels,
                    with_action: owned
                        .iter()
                        .filter(|s| s.report_action.as_deref().is_some_and(|a| !a.is_empty()))
                        .count() as u64,
                }
            })
            .collect())
    }

    async fn category_distribution(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut groups: BTreeMap<(String, String), u64> = BTreeMap::new();
        for t in state.templates.iter().filter(|t| t.is_active) {
            *groups
                .entry((t.category.clone(), t.sub_category.clone()))
                .or_default() += 1;
        }
        Ok(groups
            .into_iter()
            .map(|((category, sub_category), count)| CategoryCount {
                category,
                sub_category,
                count,
            })
            .collect())
    }
}
