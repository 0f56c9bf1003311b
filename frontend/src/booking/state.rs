use std::future::Future;
use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;

use crate::api::emailjs::{EmailGateway, EmailPayload, GatewayError};
use crate::booking::form::{BookingForm, FormField};

/// Outcome of the most recent submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub form: BookingForm,
    pub status: SubmissionStatus,
}

pub enum BookingAction {
    Edit(FormField, String),
    Submitting,
    Resolved(Result<(), GatewayError>),
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingAction::Edit(field, value) => {
                if let Err(e) = next.form.set_field(field, &value) {
                    warn!("Ignoring edit of {:?}: {}", field, e);
                    return self;
                }
            }
            BookingAction::Submitting => {
                next.status = SubmissionStatus::None;
            }
            BookingAction::Resolved(Ok(())) => {
                info!("Booking request sent");
                next.status = SubmissionStatus::Success;
                next.form = BookingForm::default();
            }
            BookingAction::Resolved(Err(e)) => {
                // form stays as typed so the visitor can retry
                error!("Booking request failed: {}", e);
                next.status = SubmissionStatus::Error;
            }
        }
        next.into()
    }
}

/// Resets the status right away and returns the send that reports back
/// through `dispatch` once the gateway resolves. Nothing is validated and
/// nothing guards against overlapping sends.
pub fn submit<D>(
    gateway: Rc<dyn EmailGateway>,
    form: &BookingForm,
    dispatch: D,
) -> impl Future<Output = ()> + 'static
where
    D: Fn(BookingAction) + 'static,
{
    dispatch(BookingAction::Submitting);
    let payload = EmailPayload::from(form);
    info!("Sending booking request for {:?}", payload.company);

    async move {
        let result = gateway.send(payload).await;
        dispatch(BookingAction::Resolved(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::emailjs::MockEmailGateway;
    use crate::booking::form::TalentType;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    type Store = Rc<RefCell<Rc<BookingState>>>;

    fn store_with(form: BookingForm) -> Store {
        Rc::new(RefCell::new(Rc::new(BookingState {
            form,
            status: SubmissionStatus::None,
        })))
    }

    fn dispatcher(store: &Store) -> impl Fn(BookingAction) + 'static {
        let store = store.clone();
        move |action| {
            let current = store.borrow().clone();
            *store.borrow_mut() = current.reduce(action);
        }
    }

    fn filled() -> BookingForm {
        BookingForm {
            full_name: "Linus".into(),
            work_email: "linus@example.org".into(),
            company: "Acme".into(),
            talent_type: Some(TalentType::Cloud),
        }
    }

    fn gateway_resolving(result: Result<(), GatewayError>) -> Rc<dyn EmailGateway> {
        let mut mock = MockEmailGateway::new();
        mock.expect_send().times(1).returning(move |_| result.clone());
        Rc::new(mock)
    }

    #[test]
    fn success_clears_form() {
        let store = store_with(filled());
        let form = store.borrow().form.clone();

        block_on(submit(gateway_resolving(Ok(())), &form, dispatcher(&store)));

        let state = store.borrow();
        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(state.form.is_empty());
    }

    #[test]
    fn failure_keeps_form_for_retry() {
        let store = store_with(filled());
        let form = store.borrow().form.clone();
        let failure = Err(GatewayError::Transport("offline".into()));

        block_on(submit(gateway_resolving(failure), &form, dispatcher(&store)));

        let state = store.borrow();
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.form, filled());
    }

    #[test]
    fn sends_mapped_payload() {
        let mut mock = MockEmailGateway::new();
        mock.expect_send()
            .withf(|payload| {
                payload.from_name == "Linus"
                    && payload.from_email == "linus@example.org"
                    && payload.company == "Acme"
                    && payload.talent_type == "cloud"
            })
            .times(1)
            .returning(|_| Ok(()));
        let store = store_with(filled());

        block_on(submit(Rc::new(mock), &filled(), dispatcher(&store)));
    }

    #[test]
    fn empty_talent_type_is_not_rejected() {
        let mut form = filled();
        form.talent_type = None;
        let mut mock = MockEmailGateway::new();
        mock.expect_send()
            .withf(|payload| payload.talent_type.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        let store = store_with(form.clone());

        block_on(submit(Rc::new(mock), &form, dispatcher(&store)));
        assert_eq!(store.borrow().status, SubmissionStatus::Success);
    }

    #[test]
    fn new_attempt_resets_previous_outcome() {
        let store = store_with(filled());
        dispatcher(&store)(BookingAction::Resolved(Err(GatewayError::NotConfigured)));
        assert_eq!(store.borrow().status, SubmissionStatus::Error);

        // gateway never resolves; only the synchronous reset is observed
        let (_tx, rx) = oneshot::channel::<Result<(), GatewayError>>();
        let pending = submit(Rc::new(QueuedGateway::new(vec![rx])), &filled(), dispatcher(&store));

        assert_eq!(store.borrow().status, SubmissionStatus::None);
        drop(pending);
    }

    #[test]
    fn edits_go_through_reducer() {
        let store = store_with(filled());
        let dispatch = dispatcher(&store);

        dispatch(BookingAction::Edit(FormField::Company, "Initech".into()));
        dispatch(BookingAction::Edit(FormField::TalentType, "astronaut".into()));

        let state = store.borrow();
        assert_eq!(state.form.company, "Initech");
        assert_eq!(state.form.talent_type, Some(TalentType::Cloud));
        assert_eq!(state.form.full_name, "Linus");
    }

    #[test]
    fn edit_while_pending_is_cleared_by_success() {
        let (tx, rx) = oneshot::channel();
        let gateway: Rc<dyn EmailGateway> = Rc::new(QueuedGateway::new(vec![rx]));
        let store = store_with(filled());
        let mut pool = LocalPool::new();

        let send = submit(gateway, &filled(), dispatcher(&store));
        pool.spawner().spawn_local(send).unwrap();
        pool.run_until_stalled();

        dispatcher(&store)(BookingAction::Edit(FormField::FullName, "Someone else".into()));
        tx.send(Ok(())).unwrap();
        pool.run_until_stalled();

        assert!(store.borrow().form.is_empty());
    }

    /// Hands out pre-made receivers so a test decides when each send resolves.
    struct QueuedGateway {
        pending: RefCell<VecDeque<oneshot::Receiver<Result<(), GatewayError>>>>,
    }

    impl QueuedGateway {
        fn new(receivers: Vec<oneshot::Receiver<Result<(), GatewayError>>>) -> Self {
            Self {
                pending: RefCell::new(receivers.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailGateway for QueuedGateway {
        async fn send(&self, _payload: EmailPayload) -> Result<(), GatewayError> {
            let rx = self.pending.borrow_mut().pop_front();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(GatewayError::Transport("dropped".into()))),
                None => Err(GatewayError::Transport("no response queued".into())),
            }
        }
    }

    // Overlapping submits race; the last one to resolve decides the status.
    #[test]
    fn overlapping_submits_last_resolution_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let gateway: Rc<dyn EmailGateway> = Rc::new(QueuedGateway::new(vec![first_rx, second_rx]));
        let store = store_with(filled());
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let first = submit(gateway.clone(), &filled(), dispatcher(&store));
        spawner.spawn_local(first).unwrap();
        pool.run_until_stalled();
        let second = submit(gateway, &filled(), dispatcher(&store));
        spawner.spawn_local(second).unwrap();
        pool.run_until_stalled();

        second_tx.send(Ok(())).unwrap();
        pool.run_until_stalled();
        assert_eq!(store.borrow().status, SubmissionStatus::Success);
        assert!(store.borrow().form.is_empty());

        first_tx.send(Err(GatewayError::Rejected { status: 429, body: "slow down".into() })).unwrap();
        pool.run_until_stalled();
        let state = store.borrow();
        assert_eq!(state.status, SubmissionStatus::Error);
        // the earlier success already cleared the form; the late failure does not restore it
        assert!(state.form.is_empty());
    }
}
