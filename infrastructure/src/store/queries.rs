//! SQL text for the question tables.
//!
//! Parameters are positional; see the binding order in `SqlQuestionStore`.

pub const SELECT_QUESTION_NUMBERS: &str =
    "SELECT question_number FROM question_templates ORDER BY question_number";

pub const DEACTIVATE_TEMPLATE: &str = "UPDATE question_templates \
     SET is_active = FALSE, updated_at = NOW() \
     WHERE question_number = $1";

/// $1 category, $2 sub_category, $3 question_number, $4 question_text,
/// $5 question_type, $6 applicable_tiers, $7 weight, $8 is_critical,
/// $9 comment, $10 motivation_learning_point
pub const UPSERT_TEMPLATE: &str = "INSERT INTO question_templates (
    category, sub_category, question_number, question_text, question_type,
    applicable_tiers, weight, is_critical, comment, motivation_learning_point, is_active
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE)
ON CONFLICT (category, question_number)
DO UPDATE SET
    sub_category = EXCLUDED.sub_category,
    question_text = EXCLUDED.question_text,
    applicable_tiers = EXCLUDED.applicable_tiers,
    weight = EXCLUDED.weight,
    is_critical = EXCLUDED.is_critical,
    comment = EXCLUDED.comment,
    motivation_learning_point = EXCLUDED.motivation_learning_point,
    is_active = TRUE,
    updated_at = NOW()
RETURNING id";

pub const DELETE_ANSWER_OPTIONS: &str =
    "DELETE FROM question_answer_options WHERE question_template_id = $1";

/// $1 template id, $2 option_text, $3 score_value, $4 option_order
pub const INSERT_ANSWER_OPTION: &str = "INSERT INTO question_answer_options \
     (question_template_id, option_text, score_value, option_order, is_example) \
     VALUES ($1, $2, $3, $4, FALSE)";

/// $1 template id, $2 score_level, $3 reason_text, $4 report_action
pub const UPSERT_SCORE_EXAMPLE: &str = "INSERT INTO question_score_examples \
     (question_template_id, score_level, reason_text, report_action)
VALUES ($1, $2, $3, $4)
ON CONFLICT (question_template_id, score_level)
DO UPDATE SET reason_text = EXCLUDED.reason_text, report_action = EXCLUDED.report_action";

pub const COUNT_TEMPLATES: &str =
    "SELECT COUNT(*) AS cnt FROM question_templates WHERE is_active = $1";

pub const LIST_TEMPLATES: &str =
    "SELECT question_number, sub_category, LEFT(question_text, 80) AS txt \
     FROM question_templates \
     WHERE is_active = $1 \
     ORDER BY question_number";

pub const FIELD_COMPLETENESS: &str = "SELECT question_number, sub_category, category,
       LEFT(question_text, 80) AS txt,
       is_critical, weight,
       comment IS NOT NULL AND comment != '' AS has_comment,
       motivation_learning_point IS NOT NULL AND motivation_learning_point != '' AS has_motivation
FROM question_templates
WHERE is_active = TRUE
ORDER BY
    CASE category
        WHEN 'Documentation' THEN 1
        WHEN 'Landlord-Tenant Communication' THEN 2
        WHEN 'Evidence Gathering Systems and Procedures' THEN 3
    END,
    question_number";

pub const OPTION_COUNTS: &str = "SELECT qt.question_number, COUNT(qao.id) AS opt_count
FROM question_templates qt
LEFT JOIN question_answer_options qao ON qt.id = qao.question_template_id
WHERE qt.is_active = TRUE
GROUP BY qt.question_number
ORDER BY qt.question_number";

pub const SCORE_EXAMPLE_SUMMARIES: &str = "SELECT qt.question_number,
       COUNT(qse.id) AS se_count,
       STRING_AGG(qse.score_level, ',' ORDER BY qse.score_level) AS levels,
       COUNT(CASE WHEN qse.report_action IS NOT NULL AND qse.report_action != '' THEN 1 END) AS has_action
FROM question_templates qt
LEFT JOIN question_score_examples qse ON qt.id = qse.question_template_id
WHERE qt.is_active = TRUE
GROUP BY qt.question_number
ORDER BY qt.question_number";

pub const CATEGORY_DISTRIBUTION: &str = "SELECT category, sub_category, COUNT(*) AS cnt
FROM question_templates
WHERE is_active = TRUE
GROUP BY category, sub_category
ORDER BY category, sub_category";
