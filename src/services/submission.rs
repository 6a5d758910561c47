use crate::{
    database::{RecordStore, StoreError, StoreResult},
    validation::{FieldErrors, Validate},
};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Where a form instance sits between submissions. A failed submission is
/// reported through [`SubmitOutcome::Failed`] and settles back on `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    Idle,
    Submitting,
    Success,
}

/// User-facing message: a confirmation after success or a dismissible
/// notice after a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Record store did not respond within {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug)]
pub enum SubmitOutcome<S> {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The form cannot accept a submission in its current state.
    Rejected { state: FormState },
    Submitted { record: S, confirmation: Notice },
    Failed { error: SubmissionError, notice: Notice },
}

impl<S> SubmitOutcome<S> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

/// Binds a form kind to its input, validated record and persistence call.
#[async_trait]
pub trait SubmissionForm: Send + Sync + 'static {
    type Input: Validate<Record = Self::Record> + Default + Clone + Send + Sync;
    type Record: Send + 'static;
    type Stored: Send + 'static;

    const NAME: &'static str;
    /// Whether a successful submission parks the form on a confirmation
    /// screen until the user explicitly resets it.
    const HOLDS_CONFIRMATION: bool;
    const CONFIRMATION: Notice;
    const FAILURE: Notice;

    async fn persist(store: &dyn RecordStore, record: Self::Record) -> StoreResult<Self::Stored>;
}

struct Session<I> {
    state: FormState,
    draft: I,
    notice: Option<Notice>,
}

/// Drives one form instance through Idle → Submitting → Success, falling
/// back to Idle with a notice when the store fails.
pub struct SubmissionHandler<F: SubmissionForm> {
    store: Arc<dyn RecordStore>,
    timeout: Duration,
    session: Mutex<Session<F::Input>>,
}

impl<F: SubmissionForm> SubmissionHandler<F> {
    pub fn new(store: Arc<dyn RecordStore>, timeout: Duration) -> Self {
        Self::with_draft(store, timeout, F::Input::default())
    }

    pub fn with_draft(store: Arc<dyn RecordStore>, timeout: Duration, draft: F::Input) -> Self {
        Self {
            store,
            timeout,
            session: Mutex::new(Session {
                state: FormState::Idle,
                draft,
                notice: None,
            }),
        }
    }

    pub async fn state(&self) -> FormState {
        self.session.lock().await.state
    }

    pub async fn draft(&self) -> F::Input {
        self.session.lock().await.draft.clone()
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.session.lock().await.notice
    }

    pub async fn edit(&self, change: impl FnOnce(&mut F::Input)) {
        change(&mut self.session.lock().await.draft);
    }

    /// Submits the current draft.
    pub async fn submit(&self) -> SubmitOutcome<F::Stored> {
        self.run(None).await
    }

    /// Replaces the draft with `input`, then submits it.
    ///
    /// The draft is left untouched when the form is busy.
    pub async fn submit_input(&self, input: F::Input) -> SubmitOutcome<F::Stored> {
        self.run(Some(input)).await
    }

    /// Leaves the confirmation screen ("make another donation").
    pub async fn reset(&self) -> bool {
        let mut session = self.session.lock().await;
        if session.state != FormState::Success {
            return false;
        }
        session.state = FormState::Idle;
        debug!("{} form reset after confirmation", F::NAME);
        true
    }

    pub async fn dismiss_notice(&self) {
        let mut session = self.session.lock().await;
        session.notice = None;
    }

    async fn begin(&self, input: Option<F::Input>) -> Result<F::Record, SubmitOutcome<F::Stored>> {
        let mut session = self.session.lock().await;

        match session.state {
            FormState::Submitting => {
                warn!("{} form already submitting, ignoring submit", F::NAME);
                return Err(SubmitOutcome::Rejected {
                    state: session.state,
                });
            }
            FormState::Success if F::HOLDS_CONFIRMATION => {
                debug!("{} form is showing its confirmation", F::NAME);
                return Err(SubmitOutcome::Rejected {
                    state: session.state,
                });
            }
            _ => {}
        }

        if let Some(input) = input {
            session.draft = input;
        }

        match session.draft.validate() {
            Ok(record) => {
                session.state = FormState::Submitting;
                session.notice = None;
                Ok(record)
            }
            Err(errors) => {
                debug!("{} form failed validation: {}", F::NAME, errors);
                Err(SubmitOutcome::Invalid(errors))
            }
        }
    }

    async fn run(&self, input: Option<F::Input>) -> SubmitOutcome<F::Stored> {
        let record = match self.begin(input).await {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        info!("Submitting {} form to {} store", F::NAME, self.store.name());

        let result = match tokio::time::timeout(self.timeout, F::persist(self.store.as_ref(), record)).await {
            Ok(Ok(stored)) => Ok(stored),
            Ok(Err(e)) => Err(SubmissionError::Store(e)),
            Err(_) => Err(SubmissionError::TimedOut(self.timeout)),
        };

        let mut session = self.session.lock().await;
        match result {
            Ok(stored) => {
                session.draft = F::Input::default();
                session.state = if F::HOLDS_CONFIRMATION {
                    FormState::Success
                } else {
                    FormState::Idle
                };
                info!("{} form submitted", F::NAME);
                SubmitOutcome::Submitted {
                    record: stored,
                    confirmation: F::CONFIRMATION,
                }
            }
            Err(error) => {
                error!("Error submitting {} form: {}", F::NAME, error);
                session.state = FormState::Idle;
                session.notice = Some(F::FAILURE);
                SubmitOutcome::Failed {
                    error,
                    notice: F::FAILURE,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            achievement::{Achievement, NewAchievement},
            donation::{Donation, NewDonation},
            volunteer::{NewVolunteer, Volunteer},
        },
        requests::{donation::DonationRequest, volunteer::VolunteerRequest},
        services::forms::{DonationForm, VolunteerForm},
    };
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use uuid::Uuid;

    #[derive(Default)]
    struct FakeStore {
        calls: AtomicUsize,
        fail: bool,
        delay: Option<Duration>,
        entered: Notify,
        release: Option<Notify>,
    }

    impl FakeStore {
        async fn hit(&self) -> StoreResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            if let Some(release) = &self.release {
                release.notified().await;
            }
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(StoreError::Unavailable("offline".to_string()));
            }
            Ok(())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation> {
            self.hit().await?;
            Ok(Donation::from_new(Uuid::new_v4(), Utc::now(), donation))
        }

        async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer> {
            self.hit().await?;
            Ok(Volunteer::from_new(Uuid::new_v4(), Utc::now(), application))
        }

        async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement> {
            self.hit().await?;
            Ok(Achievement::from_new(Uuid::new_v4(), Utc::now(), achievement))
        }

        async fn list_achievements(&self) -> StoreResult<Vec<Achievement>> {
            Ok(Vec::new())
        }
    }

    fn donation() -> DonationRequest {
        DonationRequest {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            amount: "25".to_string(),
            donation_type: "one-time".to_string(),
            message: None,
            anonymous: false,
            agree_terms: true,
        }
    }

    fn volunteer() -> VolunteerRequest {
        VolunteerRequest {
            name: "Sam".to_string(),
            email: "sam@example.org".to_string(),
            phone: "0123456789".to_string(),
            address: "1 Long Road, Town".to_string(),
            experience: "Ten years of tutoring.".to_string(),
            availability: "flexible".to_string(),
            motivation: "I love helping children learn.".to_string(),
            agree_terms: true,
        }
    }

    fn handler<F: SubmissionForm>(store: &Arc<FakeStore>) -> SubmissionHandler<F> {
        SubmissionHandler::new(store.clone(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_store() {
        let store = Arc::new(FakeStore::default());
        let form = handler::<DonationForm>(&store);

        let input = DonationRequest {
            amount: "0".to_string(),
            ..donation()
        };
        let outcome = form.submit_input(input.clone()).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert!(errors.contains("amount")),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.calls(), 0);
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.draft().await, input);
    }

    #[tokio::test]
    async fn success_clears_the_draft_and_shows_confirmation() {
        let store = Arc::new(FakeStore::default());
        let form = handler::<DonationForm>(&store);

        let outcome = form.submit_input(donation()).await;

        assert!(outcome.is_submitted());
        assert_eq!(store.calls(), 1);
        assert_eq!(form.state().await, FormState::Success);
        assert_eq!(form.draft().await, DonationRequest::default());
    }

    #[tokio::test]
    async fn confirmation_screen_blocks_submits_until_reset() {
        let store = Arc::new(FakeStore::default());
        let form = handler::<DonationForm>(&store);
        form.submit_input(donation()).await;

        let outcome = form.submit_input(donation()).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected {
                state: FormState::Success
            }
        ));

        assert!(form.reset().await);
        assert_eq!(form.state().await, FormState::Idle);
        assert!(form.submit_input(donation()).await.is_submitted());
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn volunteer_form_returns_to_idle_after_success() {
        let store = Arc::new(FakeStore::default());
        let form = handler::<VolunteerForm>(&store);

        assert!(form.submit_input(volunteer()).await.is_submitted());
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.draft().await, VolunteerRequest::default());
        assert!(!form.reset().await);
    }

    #[tokio::test]
    async fn failure_keeps_the_draft_and_raises_a_notice() {
        let store = Arc::new(FakeStore {
            fail: true,
            ..Default::default()
        });
        let form = handler::<VolunteerForm>(&store);

        let outcome = form.submit_input(volunteer()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.draft().await, volunteer());
        assert_eq!(form.notice().await, Some(VolunteerForm::FAILURE));

        form.dismiss_notice().await;
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.notice().await, None);
        assert_eq!(form.draft().await, volunteer());
    }

    #[tokio::test]
    async fn failed_form_can_be_resubmitted_by_hand() {
        let store = Arc::new(FakeStore {
            fail: true,
            ..Default::default()
        });
        let form = handler::<DonationForm>(&store);

        form.submit_input(donation()).await;
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.notice().await, Some(DonationForm::FAILURE));
        let retry = form.submit().await;

        assert!(matches!(retry, SubmitOutcome::Failed { .. }));
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let store = Arc::new(FakeStore {
            release: Some(Notify::new()),
            ..Default::default()
        });
        let form = Arc::new(handler::<DonationForm>(&store));

        let first = tokio::spawn({
            let form = form.clone();
            async move { form.submit_input(donation()).await }
        });
        store.entered.notified().await;

        assert_eq!(form.state().await, FormState::Submitting);
        let second = form.submit().await;
        assert!(matches!(
            second,
            SubmitOutcome::Rejected {
                state: FormState::Submitting
            }
        ));

        if let Some(release) = &store.release {
            release.notify_one();
        }
        assert!(first.await.unwrap().is_submitted());
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn hung_store_times_out_back_to_idle() {
        let store = Arc::new(FakeStore {
            delay: Some(Duration::from_secs(30)),
            ..Default::default()
        });
        let form: SubmissionHandler<DonationForm> =
            SubmissionHandler::new(store.clone(), Duration::from_millis(20));

        let outcome = form.submit_input(donation()).await;

        match outcome {
            SubmitOutcome::Failed {
                error: SubmissionError::TimedOut(limit),
                ..
            } => assert_eq!(limit, Duration::from_millis(20)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(form.state().await, FormState::Idle);
        assert_eq!(form.notice().await, Some(DonationForm::FAILURE));
        assert_eq!(form.draft().await, donation());
    }

    #[tokio::test]
    async fn edits_apply_to_the_draft() {
        let store = Arc::new(FakeStore::default());
        let form = handler::<DonationForm>(&store);

        form.edit(|draft| *draft = donation()).await;
        form.edit(|draft| draft.amount = "75".to_string()).await;

        match form.submit().await {
            SubmitOutcome::Submitted { record, .. } => {
                assert_eq!(record.amount, rust_decimal::Decimal::new(75, 0))
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
