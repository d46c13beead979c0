//! In-memory host and delay that record what the pipelines do.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::delay::Delay;
use crate::host::{FormKind, Host};
use crate::notice::Notice;
use crate::state::SessionState;
use crate::view::{Page, Phase, ViewState};

/// One observable effect, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Registration(Phase),
    Search(Phase),
    Notice(String),
    Reset(FormKind),
    Sleep(Duration),
    Page(Option<Page>),
    Scroll,
}

pub type Timeline = Rc<RefCell<Vec<Step>>>;

pub struct RecordingHost {
    pub now: i64,
    pub session: SessionState,
    pub view: ViewState,
    pub notices: Vec<Notice>,
    pub view_writes: usize,
    pub confirm_answer: bool,
    pub prompts: Vec<String>,
    pub opened: Vec<String>,
    pub timeline: Timeline,
}

impl RecordingHost {
    pub fn new(now: i64) -> Self {
        Self {
            now,
            session: SessionState::new(),
            view: ViewState::new(),
            notices: Vec::new(),
            view_writes: 0,
            confirm_answer: false,
            prompts: Vec::new(),
            opened: Vec::new(),
            timeline: Timeline::default(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            timeline: self.timeline.clone(),
        }
    }

    pub fn steps(&self) -> Vec<Step> {
        self.timeline.borrow().clone()
    }

    fn record(&self, step: Step) {
        self.timeline.borrow_mut().push(step);
    }
}

impl Host for RecordingHost {
    fn now_ms(&self) -> i64 {
        self.now
    }

    fn read_session<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.session)
    }

    fn update_session<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.session)
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view)
    }

    fn update_view<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        self.view_writes += 1;
        let before = self.view.clone();
        let out = f(&mut self.view);
        if before.registration != self.view.registration {
            self.record(Step::Registration(self.view.registration));
        }
        if before.search != self.view.search {
            self.record(Step::Search(self.view.search));
        }
        if before.active_page() != self.view.active_page() {
            self.record(Step::Page(self.view.active_page()));
        }
        out
    }

    fn notify(&mut self, notice: Notice) {
        self.record(Step::Notice(notice.message.clone()));
        self.notices.push(notice);
    }

    fn reset_form(&mut self, form: FormKind) {
        self.record(Step::Reset(form));
    }

    fn scroll_to_top(&mut self) {
        self.record(Step::Scroll);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answer
    }

    fn open_uri(&mut self, uri: &str) {
        self.opened.push(uri.to_string());
    }
}

/// Completes immediately but logs the requested duration on the host timeline.
pub struct RecordingDelay {
    timeline: Timeline,
}

impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.timeline.borrow_mut().push(Step::Sleep(duration));
    }
}
