use crate::notes_feed::{FeedSource, NotesFeed};
use crate::payment::PaymentCard;
use crate::remote::{AuthApi, NotesApi};
use crate::session::Session;

use super::input::Input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Screen {
    Login,
    Notes,
    Payment,
}

impl Screen {
    pub(super) fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Notes => "Notes",
            Screen::Payment => "Payment",
        }
    }

    fn field_count(self) -> usize {
        match self {
            Screen::Login | Screen::Payment => 2,
            Screen::Notes => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Status {
    pub(super) text: String,
    pub(super) is_error: bool,
}

pub(super) struct App<A> {
    api: A,
    pub(super) session: Session,
    pub(super) feed: NotesFeed,
    pub(super) saved_card: Option<PaymentCard>,

    pub(super) screen: Screen,
    pub(super) field: usize,

    pub(super) username: Input,
    pub(super) password: Input,
    pub(super) new_note: Input,
    pub(super) card_number: Input,
    pub(super) cvv: Input,

    pub(super) status: Option<Status>,
    pub(super) quit: bool,
}

impl<A: AuthApi + NotesApi> App<A> {
    /// `session` should already have been restored from the credential cache.
    pub(super) fn new(api: A, session: Session) -> Self {
        let mut app = Self {
            api,
            session,
            feed: NotesFeed::new(),
            saved_card: None,
            screen: Screen::Login,
            field: 0,
            username: Input::default(),
            password: Input::masked(),
            new_note: Input::default(),
            card_number: Input::default(),
            cvv: Input::masked(),
            status: None,
            quit: false,
        };
        if app.session.is_logged_in() {
            app.enter_logged_in();
        }
        app
    }

    fn enter_logged_in(&mut self) {
        self.screen = Screen::Notes;
        self.field = 0;
        self.feed.refresh(&self.api, self.session.token());
        self.saved_card = self.session.payments().load();
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: false,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: true,
        });
    }

    pub(super) fn switch_to(&mut self, screen: Screen) {
        if screen != Screen::Login && !self.session.is_logged_in() {
            self.error("Log in first");
            return;
        }
        self.screen = screen;
        self.field = 0;
        self.status = None;
    }

    pub(super) fn next_field(&mut self) {
        self.field = (self.field + 1) % self.screen.field_count();
    }

    pub(super) fn prev_field(&mut self) {
        let n = self.screen.field_count();
        self.field = (self.field + n - 1) % n;
    }

    pub(super) fn focused_input(&mut self) -> &mut Input {
        match (self.screen, self.field) {
            (Screen::Login, 0) => &mut self.username,
            (Screen::Login, _) => &mut self.password,
            (Screen::Notes, _) => &mut self.new_note,
            (Screen::Payment, 0) => &mut self.card_number,
            (Screen::Payment, _) => &mut self.cvv,
        }
    }

    pub(super) fn submit(&mut self) {
        match self.screen {
            Screen::Login => self.submit_login(),
            Screen::Notes => self.submit_note(),
            Screen::Payment => self.submit_card(),
        }
    }

    fn submit_login(&mut self) {
        if self.session.is_logged_in() {
            self.info("Already logged in; Ctrl-L to log out");
            return;
        }

        let username = self.username.buf.trim().to_string();
        let password = self.password.take();
        match self.session.login(&self.api, &username, &password) {
            Ok(claims) => {
                self.enter_logged_in();
                self.info(format!("Welcome, {}", claims.name));
            }
            Err(err) => {
                self.field = 1;
                self.error(err.to_string());
            }
        }
    }

    fn submit_note(&mut self) {
        let text = self.new_note.buf.clone();
        match self.feed.add(&self.api, self.session.token(), &text) {
            Ok(note) => {
                self.new_note.clear();
                match self.feed.source() {
                    FeedSource::Live => self.info(format!("Note {} added", note.id)),
                    FeedSource::Offline => {
                        self.info(format!("Note {} kept locally (offline)", note.id))
                    }
                }
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn submit_card(&mut self) {
        let number = self.card_number.buf.clone();
        let cvv = self.cvv.buf.clone();
        match self.session.payments().save(&number, &cvv) {
            Ok(card) => {
                self.card_number.clear();
                self.cvv.clear();
                self.field = 0;
                self.saved_card = Some(card);
                self.info("Payment info saved securely");
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    /// Drop every trace of the session: cached token, card data, fetched notes
    /// and anything typed into the form fields.
    pub(super) fn logout(&mut self) {
        if !self.session.is_logged_in() {
            return;
        }
        self.session.logout();
        self.feed.clear();
        self.saved_card = None;
        for input in [
            &mut self.username,
            &mut self.password,
            &mut self.new_note,
            &mut self.card_number,
            &mut self.cvv,
        ] {
            input.clear();
        }
        self.screen = Screen::Login;
        self.field = 0;
        self.info("Logged out");
    }
}
