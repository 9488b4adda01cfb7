use std::fmt;

use crate::{
    errors::AssemblyError,
    models::{
        domain::{
            form_plan::ChoiceKind,
            question_set::{AnswerSpec, CorrectValue},
            FormMutationPlan, GradingSpec, QuestionPayload, QuestionSet, TypeTag,
        },
        dto::forms_api::{BatchUpdateFormRequest, FormRequest},
    },
    services::forms_service::FormsService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub shuffle: bool,
    pub is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    MissingType,
    /// A code the generator may request but forms cannot render.
    UnsupportedType(String),
    UnknownType(String),
    InvalidChoiceAnswer(String),
}

/// A question left out of the plan. `position` is its zero-based index in
/// the original question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub position: usize,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.position + 1;
        match &self.reason {
            SkipReason::MissingTitle => write!(f, "question {} skipped: no title given", number),
            SkipReason::MissingType => write!(f, "question {} skipped: no type given", number),
            SkipReason::UnsupportedType(code) => {
                write!(f, "question {} skipped: unsupported type '{}'", number, code)
            }
            SkipReason::UnknownType(code) => {
                write!(f, "question {} skipped: unknown type '{}'", number, code)
            }
            SkipReason::InvalidChoiceAnswer(detail) => {
                write!(f, "question {} skipped: invalid answer format ({})", number, detail)
            }
        }
    }
}

/// Non-fatal problems after the items were created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// Grading payloads were attached but quiz mode may be off.
    QuizModeNotEnabled(String),
    RequiredPassIncomplete {
        marked: usize,
        expected: usize,
        reason: String,
    },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::QuizModeNotEnabled(reason) => {
                write!(f, "quiz mode may not be enabled: {}", reason)
            }
            Degradation::RequiredPassIncomplete {
                marked,
                expected,
                reason,
            } => write!(
                f,
                "only {} of {} questions marked required: {}",
                marked, expected, reason
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBuild {
    pub plan: FormMutationPlan,
    pub skipped: Vec<SkippedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub form_id: String,
    pub item_count: usize,
    pub skipped: Vec<SkippedItem>,
    pub degradations: Vec<Degradation>,
}

impl AssemblyReport {
    /// True when quiz toggle and required pass both went through.
    pub fn is_complete(&self) -> bool {
        self.degradations.is_empty()
    }
}

pub struct FormAssemblyService {
    form_title: String,
}

impl FormAssemblyService {
    pub fn new(form_title: impl Into<String>) -> Self {
        Self {
            form_title: form_title.into(),
        }
    }

    pub fn form_title(&self) -> &str {
        &self.form_title
    }

    /// Translate a question set into index-assigned item requests.
    /// Pure; invalid or unsupported items are skipped, never fatal.
    pub fn build_plan(question_set: &QuestionSet, options: AssemblyOptions) -> PlanBuild {
        let mut plan = FormMutationPlan::new();
        let mut skipped = Vec::new();

        for (position, title) in question_set.questions.iter().enumerate() {
            if title.trim().is_empty() {
                skipped.push(SkippedItem {
                    position,
                    reason: SkipReason::MissingTitle,
                });
                continue;
            }
            let Some(type_tag) = question_set.type_at(position) else {
                skipped.push(SkippedItem {
                    position,
                    reason: SkipReason::MissingType,
                });
                continue;
            };
            let answer = question_set.answer_at(position);

            match Self::translate(type_tag, answer, options) {
                Ok((payload, grading)) => plan.push(title.clone(), payload, grading),
                Err(reason) => skipped.push(SkippedItem { position, reason }),
            }
        }

        for item in &skipped {
            log::warn!("{}", item);
        }

        PlanBuild { plan, skipped }
    }

    fn translate(
        type_tag: &TypeTag,
        answer: &AnswerSpec,
        options: AssemblyOptions,
    ) -> Result<(QuestionPayload, Option<GradingSpec>), SkipReason> {
        if type_tag.is_choice() {
            return Self::translate_choice(type_tag, answer, options);
        }

        match type_tag {
            TypeTag::ShortAnswer => {
                let grading = match answer {
                    AnswerSpec::PlainText(text) if options.is_quiz => {
                        Some(GradingSpec::for_short_answer(text.clone()))
                    }
                    _ => None,
                };
                Ok((QuestionPayload::Text { paragraph: false }, grading))
            }
            TypeTag::LongAnswer => Ok((QuestionPayload::Text { paragraph: true }, None)),
            other if other.is_recognized_unsupported() => {
                Err(SkipReason::UnsupportedType(other.code().to_string()))
            }
            other => Err(SkipReason::UnknownType(other.code().to_string())),
        }
    }

    fn translate_choice(
        type_tag: &TypeTag,
        answer: &AnswerSpec,
        options: AssemblyOptions,
    ) -> Result<(QuestionPayload, Option<GradingSpec>), SkipReason> {
        let AnswerSpec::ChoiceMapping { correct, choices } = answer else {
            return Err(SkipReason::InvalidChoiceAnswer(format!(
                "expected a choice mapping, got {}",
                answer.shape()
            )));
        };
        let choice_kind = match type_tag {
            TypeTag::SingleChoice => ChoiceKind::Radio,
            TypeTag::MultiChoice => ChoiceKind::Checkbox,
            _ => ChoiceKind::DropDown,
        };

        let grading = if options.is_quiz {
            let correct_values = Self::correct_values_in_choices(correct, choices);
            if correct_values.is_empty() {
                log::debug!("No correct value matches the offered choices; item left ungraded");
                None
            } else {
                Some(GradingSpec::for_choices(correct_values))
            }
        } else {
            None
        };

        Ok((
            QuestionPayload::Choice {
                choice_kind,
                options: choices.clone(),
                shuffle: options.shuffle,
            },
            grading,
        ))
    }

    /// Correct values that are also offered choices, de-duplicated in order.
    fn correct_values_in_choices(correct: &CorrectValue, choices: &[String]) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in correct.values() {
            if choices.contains(&value) && !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }

    /// Create the form, toggle quiz mode, add every planned item in one
    /// batch, then mark the created items required.
    ///
    /// The plan is built before any network call, so an empty plan reports
    /// `EmptyPlan` without creating a form, even when form creation would
    /// also have failed.
    pub async fn build_and_submit(
        &self,
        forms: &dyn FormsService,
        question_set: &QuestionSet,
        options: AssemblyOptions,
    ) -> Result<AssemblyReport, AssemblyError> {
        let PlanBuild { plan, skipped } = Self::build_plan(question_set, options);
        if plan.is_empty() {
            log::error!(
                "No questions to add ({} skipped), not creating a form",
                skipped.len()
            );
            return Err(AssemblyError::EmptyPlan {
                skipped: skipped.len(),
            });
        }

        let form_id = forms.create_form(&self.form_title).await.map_err(|e| {
            log::error!("Failed to create form: {}", e);
            AssemblyError::ShellCreation(e.to_string())
        })?;
        log::info!("Created form {}", form_id);

        let mut degradations = Vec::new();

        if options.is_quiz {
            let request = BatchUpdateFormRequest {
                requests: vec![FormRequest::enable_quiz()],
            };
            if let Err(e) = forms.batch_update(&form_id, request).await {
                log::warn!("Failed to enable quiz mode on form {}: {}", form_id, e);
                degradations.push(Degradation::QuizModeNotEnabled(e.to_string()));
            }
        }

        let item_count = plan.len();
        let request = BatchUpdateFormRequest {
            requests: plan.items().iter().map(FormRequest::from).collect(),
        };
        let response = forms.batch_update(&form_id, request).await.map_err(|e| {
            log::error!("Failed to add questions to form {}: {}", form_id, e);
            AssemblyError::BatchCreation {
                form_id: form_id.clone(),
                reason: e.to_string(),
            }
        })?;
        log::info!("Added {} question(s) to form {}", item_count, form_id);

        let created = response.created_item_ids();
        if let Some(degradation) = Self::mark_required(forms, &form_id, created, item_count).await {
            degradations.push(degradation);
        }

        Ok(AssemblyReport {
            form_id,
            item_count,
            skipped,
            degradations,
        })
    }

    async fn mark_required(
        forms: &dyn FormsService,
        form_id: &str,
        created: Vec<(usize, String)>,
        expected: usize,
    ) -> Option<Degradation> {
        let acknowledged = created.len();
        if acknowledged == 0 {
            log::warn!("Form {} acknowledged no created items; skipping required pass", form_id);
            return Some(Degradation::RequiredPassIncomplete {
                marked: 0,
                expected,
                reason: "no item ids acknowledged".to_string(),
            });
        }

        let request = BatchUpdateFormRequest {
            requests: created
                .into_iter()
                .map(|(index, item_id)| FormRequest::mark_required(item_id, index))
                .collect(),
        };

        match forms.batch_update(form_id, request).await {
            Ok(_) if acknowledged == expected => None,
            Ok(_) => {
                log::warn!(
                    "Form {} acknowledged {} of {} items; the rest stay optional",
                    form_id,
                    acknowledged,
                    expected
                );
                Some(Degradation::RequiredPassIncomplete {
                    marked: acknowledged,
                    expected,
                    reason: "some item ids were not acknowledged".to_string(),
                })
            }
            Err(e) => {
                log::warn!("Failed to update required status on form {}: {}", form_id, e);
                Some(Degradation::RequiredPassIncomplete {
                    marked: 0,
                    expected,
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        models::dto::forms_api::{BatchUpdateFormResponse, CreateItemResponse, Reply},
        services::forms_service::MockFormsService,
        test_utils::fixtures::*,
    };

    const QUIZ: AssemblyOptions = AssemblyOptions {
        shuffle: true,
        is_quiz: true,
    };
    const SURVEY: AssemblyOptions = AssemblyOptions {
        shuffle: false,
        is_quiz: false,
    };

    fn ack(ids: &[&str]) -> BatchUpdateFormResponse {
        BatchUpdateFormResponse {
            replies: ids
                .iter()
                .map(|id| Reply {
                    create_item: Some(CreateItemResponse {
                        item_id: Some(id.to_string()),
                        question_id: vec![],
                    }),
                })
                .collect(),
        }
    }

    fn count_requests(request: &BatchUpdateFormRequest, pred: fn(&FormRequest) -> bool) -> usize {
        request.requests.iter().filter(|r| pred(r)).count()
    }

    #[test]
    fn short_answer_quiz_item_is_graded_with_exact_text() {
        let build = FormAssemblyService::build_plan(&capital_short_answer(), QUIZ);

        assert_eq!(build.plan.len(), 1);
        let item = &build.plan.items()[0];
        assert_eq!(item.payload, QuestionPayload::Text { paragraph: false });
        let grading = item.grading.as_ref().expect("short answer should be graded");
        assert_eq!(grading.correct_answers, vec!["Paris"]);
    }

    #[test]
    fn single_choice_keeps_all_choices_and_grades_answer() {
        let build = FormAssemblyService::build_plan(&capital_single_choice(), QUIZ);

        assert_eq!(build.plan.len(), 1);
        let item = &build.plan.items()[0];
        assert_eq!(item.payload.options(), ["Paris", "Lyon", "Nice"]);
        assert_eq!(
            item.grading.as_ref().map(|g| g.correct_answers.clone()),
            Some(vec!["Paris".to_string()])
        );
    }

    #[test]
    fn choice_with_plain_text_answer_is_skipped() {
        let set = question_set(
            &["Capital of France?"],
            &["MC"],
            Some(vec![AnswerSpec::PlainText("Paris".into())]),
        );
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert!(build.plan.is_empty());
        assert!(matches!(
            build.skipped[0].reason,
            SkipReason::InvalidChoiceAnswer(_)
        ));
    }

    #[test]
    fn rating_type_is_skipped_as_unsupported() {
        let set = question_set(&["Rate Rust"], &["RT"], None);
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert!(build.plan.is_empty());
        assert_eq!(
            build.skipped,
            vec![SkippedItem {
                position: 0,
                reason: SkipReason::UnsupportedType("RT".into())
            }]
        );
    }

    #[test]
    fn multi_choice_delimited_answer_is_split_trimmed_and_filtered() {
        let set = question_set(
            &["French cities?"],
            &["CB"],
            Some(vec![choice_mapping("Paris,Lyon", &["Paris", "Lyon", "Nice"])]),
        );
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        let grading = build.plan.items()[0].grading.clone().unwrap();
        assert_eq!(grading.correct_answers, vec!["Paris", "Lyon"]);
    }

    #[test]
    fn hallucinated_correct_values_are_dropped() {
        let set = question_set(
            &["French cities?", "Capital?"],
            &["CB", "DD"],
            Some(vec![
                choice_mapping("Paris, Berlin, Paris", &["Paris", "Lyon"]),
                choice_mapping("Rome", &["Paris", "Lyon"]),
            ]),
        );
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert_eq!(build.plan.len(), 2);
        assert_eq!(
            build.plan.items()[0].grading.as_ref().unwrap().correct_answers,
            vec!["Paris"]
        );
        // No matching value: created, but ungraded.
        assert!(build.plan.items()[1].grading.is_none());
    }

    #[test]
    fn list_correct_value_is_used_as_is() {
        let set = question_set(
            &["Pick"],
            &["CB"],
            Some(vec![AnswerSpec::ChoiceMapping {
                correct: CorrectValue::List(vec!["a, b".into(), "c".into()]),
                choices: vec!["a, b".into(), "c".into(), "d".into()],
            }]),
        );
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert_eq!(
            build.plan.items()[0].grading.as_ref().unwrap().correct_answers,
            vec!["a, b", "c"]
        );
    }

    #[test]
    fn long_answer_is_never_graded() {
        let set = question_set(
            &["Explain ownership"],
            &["LA"],
            Some(vec![AnswerSpec::PlainText("It moves".into())]),
        );
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert_eq!(build.plan.items()[0].payload, QuestionPayload::Text { paragraph: true });
        assert!(build.plan.items()[0].grading.is_none());
    }

    #[test]
    fn survey_mode_attaches_no_grading() {
        let build = FormAssemblyService::build_plan(&mixed_quiz(), SURVEY);

        assert!(!build.plan.is_empty());
        assert!(build.plan.items().iter().all(|item| item.grading.is_none()));
        assert!(build.plan.items().iter().all(|item| match &item.payload {
            QuestionPayload::Choice { shuffle, .. } => !shuffle,
            QuestionPayload::Text { .. } => true,
        }));
    }

    #[test]
    fn indices_stay_contiguous_across_skips() {
        let set = mixed_quiz();
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        let indices: Vec<usize> = build.plan.items().iter().map(|item| item.index).collect();
        assert_eq!(indices, (0..build.plan.len()).collect::<Vec<_>>());
        assert_eq!(build.plan.len() + build.skipped.len(), set.len());
        assert!(build.plan.len() < set.len());
    }

    #[test]
    fn malformed_entries_skip_only_their_own_item() {
        let set: QuestionSet = serde_json::from_str(
            r#"{"questions": ["Q1", "Q2", null], "types": ["SA", null, "SA"], "answers": ["A1", null, "A3"]}"#,
        )
        .unwrap();
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert_eq!(build.plan.len(), 1);
        assert_eq!(build.plan.items()[0].title, "Q1");
        assert_eq!(
            build.skipped,
            vec![
                SkippedItem {
                    position: 1,
                    reason: SkipReason::UnknownType("null".into())
                },
                SkippedItem {
                    position: 2,
                    reason: SkipReason::MissingTitle
                },
            ]
        );
    }

    #[test]
    fn unknown_codes_are_told_apart_from_unsupported_ones() {
        let set = question_set(&["Rate it", "Write an essay"], &["LS", "essay"], None);
        let build = FormAssemblyService::build_plan(&set, SURVEY);

        let reasons: Vec<SkipReason> = build.skipped.into_iter().map(|s| s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::UnsupportedType("LS".into()),
                SkipReason::UnknownType("essay".into())
            ]
        );
    }

    #[test]
    fn missing_type_entry_skips_the_item() {
        let set = question_set(&["Q1", "Q2"], &["SA"], None);
        let build = FormAssemblyService::build_plan(&set, QUIZ);

        assert_eq!(build.plan.len(), 1);
        assert_eq!(build.skipped[0].reason, SkipReason::MissingType);
        assert_eq!(build.skipped[0].position, 1);
    }

    #[test]
    fn choice_grading_never_leaves_offered_choices() {
        let build = FormAssemblyService::build_plan(&mixed_quiz(), QUIZ);

        for item in build.plan.items() {
            if let Some(grading) = &item.grading {
                if let QuestionPayload::Choice { options, .. } = &item.payload {
                    assert!(grading.correct_answers.iter().all(|v| options.contains(v)));
                }
            }
        }
    }

    #[actix_rt::test]
    async fn empty_plan_fails_without_creating_a_form() {
        let mut forms = MockFormsService::new();
        forms.expect_create_form().never();
        forms.expect_batch_update().never();

        let service = FormAssemblyService::new("Form");
        let set = question_set(&["Rate Rust"], &["RT"], None);
        let result = service.build_and_submit(&forms, &set, QUIZ).await;

        assert_eq!(result, Err(AssemblyError::EmptyPlan { skipped: 1 }));
    }

    #[actix_rt::test]
    async fn shell_creation_failure_is_fatal() {
        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Err(AppError::Unauthorized("bad token".into())));
        forms.expect_batch_update().never();

        let service = FormAssemblyService::new("Form");
        let result = service
            .build_and_submit(&forms, &capital_short_answer(), QUIZ)
            .await;

        assert!(matches!(result, Err(AssemblyError::ShellCreation(_))));
    }

    #[actix_rt::test]
    async fn full_quiz_submission_runs_three_batches_in_order() {
        let mut forms = MockFormsService::new();
        let mut seq = mockall::Sequence::new();
        forms
            .expect_create_form()
            .withf(|title| title == "Quiz Title")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("form-1".to_string()));
        forms
            .expect_batch_update()
            .withf(|id, req| {
                id == "form-1"
                    && count_requests(req, |r| matches!(r, FormRequest::UpdateSettings(_))) == 1
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));
        forms
            .expect_batch_update()
            .withf(|_, req| count_requests(req, |r| matches!(r, FormRequest::CreateItem(_))) == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ack(&["i0", "i1"])));
        forms
            .expect_batch_update()
            .withf(|_, req| count_requests(req, |r| matches!(r, FormRequest::UpdateItem(_))) == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));

        let service = FormAssemblyService::new("Quiz Title");
        let set = question_set(
            &["Capital of France?", "Explain"],
            &["SA", "LA"],
            Some(vec![AnswerSpec::PlainText("Paris".into())]),
        );
        let report = service.build_and_submit(&forms, &set, QUIZ).await.unwrap();

        assert_eq!(report.form_id, "form-1");
        assert_eq!(report.item_count, 2);
        assert!(report.is_complete());
    }

    #[actix_rt::test]
    async fn survey_submission_skips_quiz_toggle() {
        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Ok("form-2".to_string()));
        forms
            .expect_batch_update()
            .withf(|_, req| req.requests.iter().any(|r| matches!(r, FormRequest::UpdateSettings(_))))
            .never();
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::CreateItem(_))))
            .times(1)
            .returning(|_, _| Ok(ack(&["i0"])));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::UpdateItem(_))))
            .times(1)
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));

        let service = FormAssemblyService::new("Survey");
        let report = service
            .build_and_submit(&forms, &capital_short_answer(), SURVEY)
            .await
            .unwrap();

        assert!(report.is_complete());
    }

    #[actix_rt::test]
    async fn batch_creation_failure_reports_orphaned_form() {
        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Ok("form-3".to_string()));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::UpdateSettings(_))))
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::CreateItem(_))))
            .returning(|_, _| Err(AppError::UpstreamError("500".into())));

        let service = FormAssemblyService::new("Form");
        let result = service
            .build_and_submit(&forms, &capital_short_answer(), QUIZ)
            .await;

        assert!(matches!(
            result,
            Err(AssemblyError::BatchCreation { ref form_id, .. }) if form_id == "form-3"
        ));
    }

    #[actix_rt::test]
    async fn quiz_toggle_and_required_failures_degrade_but_succeed() {
        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Ok("form-4".to_string()));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::UpdateSettings(_))))
            .returning(|_, _| Err(AppError::UpstreamError("settings".into())));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::CreateItem(_))))
            .returning(|_, _| Ok(ack(&["i0"])));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::UpdateItem(_))))
            .returning(|_, _| Err(AppError::UpstreamError("required".into())));

        let service = FormAssemblyService::new("Form");
        let report = service
            .build_and_submit(&forms, &capital_single_choice(), QUIZ)
            .await
            .unwrap();

        assert_eq!(report.form_id, "form-4");
        assert!(!report.is_complete());
        assert!(matches!(
            report.degradations[0],
            Degradation::QuizModeNotEnabled(_)
        ));
        assert!(matches!(
            report.degradations[1],
            Degradation::RequiredPassIncomplete { marked: 0, expected: 1, .. }
        ));
    }

    #[actix_rt::test]
    async fn missing_acknowledgements_skip_required_pass() {
        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Ok("form-5".to_string()));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::CreateItem(_))))
            .times(1)
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));
        forms
            .expect_batch_update()
            .withf(|_, req| matches!(req.requests.first(), Some(FormRequest::UpdateItem(_))))
            .never();

        let service = FormAssemblyService::new("Form");
        let report = service
            .build_and_submit(&forms, &capital_short_answer(), SURVEY)
            .await
            .unwrap();

        assert_eq!(
            report.degradations,
            vec![Degradation::RequiredPassIncomplete {
                marked: 0,
                expected: 1,
                reason: "no item ids acknowledged".to_string(),
            }]
        );
    }

    #[actix_rt::test]
    async fn partial_acknowledgement_marks_only_acknowledged_items() {
        let set = question_set(&["Name?", "Describe Paris"], &["SA", "LA"], None);

        let mut forms = MockFormsService::new();
        forms
            .expect_create_form()
            .returning(|_| Ok("form-6".to_string()));
        forms
            .expect_batch_update()
            .withf(|_, req| {
                matches!(req.requests.first(), Some(FormRequest::CreateItem(_)))
                    && req.requests.len() == 2
            })
            .times(1)
            .returning(|_, _| Ok(ack(&["item-a"])));
        forms
            .expect_batch_update()
            .withf(|id, req| {
                id == "form-6"
                    && req.requests == vec![FormRequest::mark_required("item-a".into(), 0)]
            })
            .times(1)
            .returning(|_, _| Ok(BatchUpdateFormResponse::default()));

        let service = FormAssemblyService::new("Form");
        let report = service.build_and_submit(&forms, &set, SURVEY).await.unwrap();

        assert_eq!(report.item_count, 2);
        assert!(!report.is_complete());
        assert_eq!(
            report.degradations,
            vec![Degradation::RequiredPassIncomplete {
                marked: 1,
                expected: 2,
                reason: "some item ids were not acknowledged".to_string(),
            }]
        );
    }
}
