use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use pollster::block_on;
use pretty_assertions::assert_eq;

use fluent_landing::analytics::NoAnalytics;
use fluent_landing::config::Config;
use fluent_landing::error::StoreError;
use fluent_landing::store::{field_matches, DocumentStore, QuerySnapshot};
use fluent_landing::types::{Housing, NewSignup, Severity, SignupForm, SignupRecord};
use fluent_landing::waitlist::{counter_text, SubmitOutcome, Waitlist};

/// Store that keeps rows in memory and remembers every call.
#[derive(Default)]
struct FakeStore {
    rows: RefCell<Vec<SignupRecord>>,
    calls: RefCell<Vec<String>>,
    offline: RefCell<bool>,
    /// `count` never resolves, like a request the network swallowed.
    stalled_count: RefCell<bool>,
}

impl FakeStore {
    fn check_online(&self) -> Result<(), StoreError> {
        if *self.offline.borrow() {
            Err(StoreError::Transport("network down".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FakeStore {
    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<QuerySnapshot, StoreError> {
        self.calls.borrow_mut().push(format!("query {collection} {field}={value}"));
        self.check_online()?;
        let size = self
            .rows
            .borrow()
            .iter()
            .filter(|r| field_matches(r, field, value))
            .count();
        Ok(QuerySnapshot::new(size))
    }

    async fn insert(&self, collection: &str, record: &NewSignup) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(format!("insert {collection} {}", record.email));
        self.check_online()?;
        self.rows.borrow_mut().push(SignupRecord::from_new(record, chrono::Utc::now()));
        Ok(())
    }

    async fn count(&self, _collection: &str) -> Result<usize, StoreError> {
        self.calls.borrow_mut().push("count".to_string());
        if *self.stalled_count.borrow() {
            std::future::pending::<()>().await;
        }
        self.check_online()?;
        Ok(self.rows.borrow().len())
    }
}

fn setup() -> (Rc<FakeStore>, Waitlist) {
    let store = Rc::new(FakeStore::default());
    let waitlist = Waitlist::new(&Config::default(), store.clone(), Rc::new(NoAnalytics));
    (store, waitlist)
}

fn jane() -> SignupForm {
    SignupForm {
        name: "Jane".into(),
        email: "JANE@BERKELEY.EDU".into(),
        housing: "dorm".into(),
    }
}

#[test]
fn jane_joins_then_is_told_she_already_has() {
    let (store, waitlist) = setup();
    let before = block_on(waitlist.total()).unwrap();
    assert_eq!(counter_text(before), "500+");

    let first = block_on(waitlist.submit(&jane(), |_| {}));
    assert_eq!(first.notice().1, Severity::Success);
    assert!(matches!(first, SubmitOutcome::Joined), "{:?}", first);
    assert_eq!(block_on(waitlist.total()).unwrap(), before + 1);

    let second = block_on(waitlist.submit(&jane(), |_| {}));
    assert!(matches!(second, SubmitOutcome::AlreadyJoined));

    let rows = store.rows.borrow();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "jane@berkeley.edu");
    assert_eq!(rows[0].housing, Housing::Dorm);

    assert_eq!(
        *store.calls.borrow(),
        vec![
            "count".to_string(),
            "query waitlist email=jane@berkeley.edu".to_string(),
            "insert waitlist jane@berkeley.edu".to_string(),
            "count".to_string(),
            "query waitlist email=jane@berkeley.edu".to_string(),
        ]
    );
}

#[test]
fn rejected_forms_make_no_calls() {
    let (store, waitlist) = setup();
    let forms = [
        SignupForm { name: "  ".into(), ..jane() },
        SignupForm { email: "jane".into(), ..jane() },
        SignupForm { email: "jane@gmail.com".into(), ..jane() },
        SignupForm { housing: String::new(), ..jane() },
    ];
    for form in &forms {
        let outcome = block_on(waitlist.submit(form, |_| panic!("button must stay enabled")));
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(outcome.notice().1, Severity::Error);
    }
    assert!(store.calls.borrow().is_empty());
}

#[test]
fn outage_reports_retry_and_button_comes_back() {
    let (store, waitlist) = setup();
    *store.offline.borrow_mut() = true;

    let states = RefCell::new(Vec::new());
    let outcome = block_on(waitlist.submit(&jane(), |busy| states.borrow_mut().push(busy)));

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(outcome.notice().0, "Oops! Something went wrong. Please try again.");
    assert_eq!(*states.borrow(), vec![true, false]);
    assert!(store.rows.borrow().is_empty());
}

#[test]
fn welcome_does_not_wait_for_a_hung_recount() {
    let (store, waitlist) = setup();
    *store.stalled_count.borrow_mut() = true;

    let states = RefCell::new(Vec::new());
    let outcome = block_on(waitlist.submit(&jane(), |busy| states.borrow_mut().push(busy)));

    assert!(matches!(outcome, SubmitOutcome::Joined));
    assert!(outcome.clears_form());
    assert_eq!(*states.borrow(), vec![true, false]);
    assert_eq!(store.rows.borrow().len(), 1);
    assert!(!store.calls.borrow().contains(&"count".to_string()));
}
