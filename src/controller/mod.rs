pub mod dispatch;
pub mod events;

use crate::catalog::{Entry, FilterOutcome, Query, TagFilter};
use crate::detail::{DetailView, SkinGallery};
use crate::session::{ChartSurface, RequestKind, Session};
use tracing::warn;

pub use dispatch::{Completion, Dispatcher, FetchJob, ThreadDispatcher};
pub use events::{EventHub, Subscription, UiEvent};

/// Output side of the controller. The controller never touches a terminal directly.
pub trait Renderer {
    fn cards(&mut self, entries: &[&Entry], query: &Query);
    fn empty_state(&mut self, query: &Query);
    fn detail_loading(&mut self, entry: &Entry);
    fn detail(&mut self, view: &DetailView);
    fn skins_loading(&mut self, entry: &Entry);
    fn skins(&mut self, gallery: &SkinGallery);
    fn view_closed(&mut self);
    fn notice(&mut self, message: &str);
}

pub struct Controller<R: Renderer> {
    session: Session,
    renderer: R,
    chart: Box<dyn ChartSurface>,
    dispatcher: Box<dyn Dispatcher>,
}

impl<R: Renderer> Controller<R> {
    pub fn new(
        session: Session,
        renderer: R,
        chart: Box<dyn ChartSurface>,
        dispatcher: Box<dyn Dispatcher>,
    ) -> Self {
        Controller {
            session,
            renderer,
            chart,
            dispatcher,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draws the grid for the current query.
    pub fn refresh(&mut self) {
        let query = self.session.query();
        match self.session.visible() {
            FilterOutcome::Matches(entries) => self.renderer.cards(&entries, query),
            FilterOutcome::NoMatches => self.renderer.empty_state(query),
        }
    }

    /// Replaces both filters at once and draws the result.
    pub fn show(&mut self, term: &str, tag: TagFilter) {
        self.session.set_term(term);
        self.session.set_tag(tag);
        self.refresh();
    }

    pub fn notify(&mut self, message: &str) {
        self.renderer.notice(message);
    }

    pub fn handle(&mut self, event: &UiEvent) {
        match event {
            UiEvent::Search(term) => {
                self.session.set_term(term);
                self.refresh();
            }
            UiEvent::ClearSearch => {
                self.session.clear_term();
                self.refresh();
            }
            UiEvent::SelectTag(tag) => {
                self.session.set_tag(*tag);
                self.refresh();
            }
            UiEvent::OpenDetail(id) => self.open(RequestKind::Detail, id),
            UiEvent::OpenSkins(id) => self.open(RequestKind::Skins, id),
            UiEvent::CloseView => {
                self.session.close_view();
                self.renderer.view_closed();
            }
        }
    }

    fn open(&mut self, kind: RequestKind, id: &str) {
        self.session.close_view();
        let token = match self.session.begin(kind, id) {
            Ok(token) => token,
            Err(e) => {
                warn!(champion = id, error = %e, "cannot open view");
                self.renderer.notice(&e.to_string());
                return;
            }
        };

        if let Some(entry) = self.session.entry_for(&token) {
            match kind {
                RequestKind::Detail => self.renderer.detail_loading(entry),
                RequestKind::Skins => self.renderer.skins_loading(entry),
            }
        }
        if kind == RequestKind::Detail {
            self.session.show_chart(self.chart.as_mut(), &token.champion_id);
        }
        self.dispatcher.dispatch(FetchJob { token });
    }

    /// Applies a finished fetch. Returns false when it was stale and ignored.
    pub fn complete(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Detail { token, result } => {
                match self.session.finish_detail(&token, result) {
                    Some(view) => {
                        self.renderer.detail(&view);
                        true
                    }
                    None => false,
                }
            }
            Completion::Skins { token, result } => match self.session.finish_skins(&token, result) {
                Some(gallery) => {
                    self.renderer.skins(&gallery);
                    true
                }
                None => false,
            },
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.session.has_pending()
    }

    /// Ends the session and hands back the renderer.
    pub fn teardown(self) -> R {
        self.session.teardown();
        self.renderer
    }
}
