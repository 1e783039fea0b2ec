//! Assessment aggregate - one branching questionnaire for one condition.
//!
//! An assessment owns an ordered question sequence and an ordered outcome
//! list. The first question is the entry point. The traversal engine only
//! ever reads assessments; authoring happens outside this core.
//!
//! # Invariants
//!
//! - question ids are unique within the assessment
//! - choice texts are unique within each question
//! - every `next_question_id` is either absent (terminal) or names a
//!   question in the same assessment
//! - the question sequence is non-empty

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AssessmentId, AssessmentType, OutcomeId, QuestionId, ValidationError,
};
use std::collections::HashSet;

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    /// Answer must match one of the offered choice texts.
    SingleChoice,
    /// Free-form text; the question is a terminal leaf.
    FreeText,
}

/// One selectable answer option, pointing at the next question or
/// terminating the branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    choice_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_question_id: Option<QuestionId>,
}

impl Choice {
    /// Creates a choice, returning error if the text is empty.
    pub fn new(
        choice_text: impl Into<String>,
        next_question_id: Option<QuestionId>,
    ) -> Result<Self, ValidationError> {
        let choice_text = choice_text.into();
        if choice_text.is_empty() {
            return Err(ValidationError::empty_field("choice_text"));
        }
        Ok(Self {
            choice_text,
            next_question_id,
        })
    }

    /// The literal text the applicant must submit to select this choice.
    pub fn choice_text(&self) -> &str {
        &self.choice_text
    }

    /// The next question, or `None` when this choice ends the branch.
    pub fn next_question_id(&self) -> Option<&QuestionId> {
        self.next_question_id.as_ref()
    }

    /// Whether selecting this choice terminates the traversal.
    pub fn is_terminal(&self) -> bool {
        self.next_question_id.is_none()
    }
}

/// One node of the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question_id: QuestionId,
    question_text: String,
    answer_type: AnswerType,
    #[serde(default)]
    choices: Vec<Choice>,
}

impl Question {
    /// Creates a question, enforcing non-empty text and unique choice texts.
    pub fn new(
        question_id: QuestionId,
        question_text: impl Into<String>,
        answer_type: AnswerType,
        choices: Vec<Choice>,
    ) -> Result<Self, ValidationError> {
        let question_text = question_text.into();
        if question_text.is_empty() {
            return Err(ValidationError::empty_field("question_text"));
        }
        let mut seen = HashSet::new();
        for choice in &choices {
            if !seen.insert(choice.choice_text()) {
                return Err(ValidationError::duplicate(
                    "choice_text",
                    choice.choice_text(),
                ));
            }
        }
        Ok(Self {
            question_id,
            question_text,
            answer_type,
            choices,
        })
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Finds the choice whose text equals the submitted answer exactly.
    pub fn find_choice(&self, answer: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.choice_text() == answer)
    }

    /// A free-text question with no choices is a leaf: any non-empty
    /// answer is accepted and the branch ends there.
    pub fn is_free_text_leaf(&self) -> bool {
        self.answer_type == AnswerType::FreeText && self.choices.is_empty()
    }
}

/// One condition over the answer trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    question_id: QuestionId,
    expected_answer: String,
}

impl Criterion {
    pub fn new(question_id: QuestionId, expected_answer: impl Into<String>) -> Self {
        Self {
            question_id,
            expected_answer: expected_answer.into(),
        }
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }
}

/// A terminal classification reachable when all criteria hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    outcome_id: OutcomeId,
    description: String,
    icd10_code: String,
    #[serde(default)]
    criteria: Vec<Criterion>,
}

impl Outcome {
    pub fn new(
        outcome_id: OutcomeId,
        description: impl Into<String>,
        icd10_code: impl Into<String>,
        criteria: Vec<Criterion>,
    ) -> Self {
        Self {
            outcome_id,
            description: description.into(),
            icd10_code: icd10_code.into(),
            criteria,
        }
    }

    pub fn outcome_id(&self) -> &OutcomeId {
        &self.outcome_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icd10_code(&self) -> &str {
        &self.icd10_code
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}

/// Non-fatal authoring hazards reported by [`Assessment::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    /// An outcome with no criteria matches every trail; with
    /// first-match-wins resolution it shadows everything after it.
    EmptyCriteria { outcome_id: OutcomeId },
    /// A criterion names a question that does not exist in this assessment.
    UnknownCriterionQuestion {
        outcome_id: OutcomeId,
        question_id: QuestionId,
    },
    /// A question that no choice reaches and that is not the entry point.
    UnreachableQuestion { question_id: QuestionId },
}

impl std::fmt::Display for LintFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintFinding::EmptyCriteria { outcome_id } => {
                write!(f, "outcome '{}' has no criteria and matches every trail", outcome_id)
            }
            LintFinding::UnknownCriterionQuestion {
                outcome_id,
                question_id,
            } => write!(
                f,
                "outcome '{}' references unknown question '{}'",
                outcome_id, question_id
            ),
            LintFinding::UnreachableQuestion { question_id } => {
                write!(f, "question '{}' is unreachable from the entry point", question_id)
            }
        }
    }
}

/// Assessment aggregate - the decision tree plus its outcome definitions.
///
/// Read-only to the traversal engine. Outcome order is significant:
/// resolution is first-match-wins over the definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    assessment_type: AssessmentType,
    assessment_id: AssessmentId,
    #[serde(default)]
    inactive: bool,
    questions: Vec<Question>,
    #[serde(default)]
    outcomes: Vec<Outcome>,
}

impl Assessment {
    /// Creates an assessment, running full invariant validation.
    pub fn new(
        assessment_type: AssessmentType,
        assessment_id: AssessmentId,
        questions: Vec<Question>,
        outcomes: Vec<Outcome>,
    ) -> Result<Self, ValidationError> {
        let assessment = Self {
            assessment_type,
            assessment_id,
            inactive: false,
            questions,
            outcomes,
        };
        assessment.validate()?;
        Ok(assessment)
    }

    pub fn assessment_type(&self) -> &AssessmentType {
        &self.assessment_type
    }

    pub fn assessment_id(&self) -> &AssessmentId {
        &self.assessment_id
    }

    /// Inactive assessments are excluded from the catalog listing.
    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// The designated entry point: the first question in the sequence.
    pub fn entry_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.question_id() == id)
    }

    /// Enforces the hard bank invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the question sequence is empty
    /// - `Duplicate` for repeated question ids or choice texts
    /// - `InvalidFormat` for a dangling `next_question_id`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.question_id()) {
                return Err(ValidationError::duplicate(
                    "question_id",
                    question.question_id().as_str(),
                ));
            }
            let mut texts = HashSet::new();
            for choice in question.choices() {
                if !texts.insert(choice.choice_text()) {
                    return Err(ValidationError::duplicate(
                        "choice_text",
                        choice.choice_text(),
                    ));
                }
            }
        }

        for question in &self.questions {
            for choice in question.choices() {
                if let Some(next) = choice.next_question_id() {
                    if !ids.contains(next) {
                        return Err(ValidationError::invalid_format(
                            "next_question_id",
                            format!(
                                "question '{}' choice '{}' references unknown question '{}'",
                                question.question_id(),
                                choice.choice_text(),
                                next
                            ),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Reports authoring hazards that do not invalidate the bank.
    pub fn lint(&self) -> Vec<LintFinding> {
        let mut findings = Vec::new();

        let ids: HashSet<&QuestionId> = self.questions.iter().map(|q| q.question_id()).collect();

        for outcome in &self.outcomes {
            if outcome.criteria().is_empty() {
                findings.push(LintFinding::EmptyCriteria {
                    outcome_id: outcome.outcome_id().clone(),
                });
            }
            for criterion in outcome.criteria() {
                if !ids.contains(criterion.question_id()) {
                    findings.push(LintFinding::UnknownCriterionQuestion {
                        outcome_id: outcome.outcome_id().clone(),
                        question_id: criterion.question_id().clone(),
                    });
                }
            }
        }

        let mut reachable = HashSet::new();
        if let Some(entry) = self.entry_question() {
            let mut stack = vec![entry.question_id().clone()];
            while let Some(id) = stack.pop() {
                if !reachable.insert(id.clone()) {
                    continue;
                }
                if let Some(question) = self.question(&id) {
                    for choice in question.choices() {
                        if let Some(next) = choice.next_question_id() {
                            stack.push(next.clone());
                        }
                    }
                }
            }
        }
        for question in &self.questions {
            if !reachable.contains(question.question_id()) {
                findings.push(LintFinding::UnreachableQuestion {
                    question_id: question.question_id().clone(),
                });
            }
        }

        findings
    }
}
