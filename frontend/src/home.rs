use futures::future::{abortable, AbortHandle};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info, warn};
use yew::prelude::*;
use shared::{LandingState, QuestionKey, SubmissionTicket};
use crate::{
    config::CONFIG,
    footer::Footer,
    header::Header,
    hero::Hero,
    how_it_works::HowItWorks,
    preorder_form::PreorderSection,
    products::Products,
    quiz_modal::QuizModal,
    styles::*,
};

pub enum Msg {
    OpenQuiz,
    CloseQuiz,
    Answer(QuestionKey, String),
    RetakeQuiz,
    PreorderFromQuiz,
    UpdateEmail(String),
    SubmitPreorder,
    SubmissionResolved(SubmissionTicket),
}

/// Owns every piece of page state and hands slices of it to the sections.
pub struct Home {
    state: LandingState,
    in_flight: Vec<(SubmissionTicket, AbortHandle)>,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LandingState::new(),
            in_flight: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenQuiz => {
                self.state.open_quiz();
                true
            },
            Msg::CloseQuiz => {
                self.state.close_quiz();
                true
            },
            Msg::Answer(key, value) => match self.state.answer(key, value) {
                Ok(_) => true,
                Err(error) => {
                    warn!("Quiz answer ignored: {}", error);
                    false
                }
            },
            Msg::RetakeQuiz => {
                self.state.retake_quiz();
                true
            },
            Msg::PreorderFromQuiz => {
                if let Err(error) = self.state.preorder_from_quiz() {
                    debug!("Quiz pre-order rejected: {}", error);
                }
                true
            },
            Msg::UpdateEmail(value) => {
                self.state.set_email(value);
                true
            },
            Msg::SubmitPreorder => {
                match self.state.submit_preorder() {
                    Ok(ticket) => self.schedule(ctx, ticket),
                    Err(error) => debug!("Pre-order form rejected: {}", error),
                }
                true
            },
            Msg::SubmissionResolved(ticket) => {
                self.forget(ticket);
                if self.state.resolve_submission(ticket) {
                    info!("Pre-order {} confirmed", ticket);
                }
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let preorder = self.state.preorder();
        let email = AttrValue::from(preorder.email().to_string());
        let error = preorder.error().map(|e| AttrValue::from(e.to_string()));
        let reference = preorder.preorder().map(|p| AttrValue::from(p.short_reference()));

        html! {
            <div class={PAGE}>
                <Header on_take_quiz={link.callback(|_| Msg::OpenQuiz)} />
                <main class={CONTAINER}>
                    <Hero on_take_quiz={link.callback(|_| Msg::OpenQuiz)} />
                    <Products />
                    <HowItWorks />
                    <PreorderSection
                        email={email.clone()}
                        error={error.clone()}
                        success={preorder.is_success()}
                        pending={preorder.pending() > 0}
                        {reference}
                        on_email={link.callback(Msg::UpdateEmail)}
                        on_submit={link.callback(|_| Msg::SubmitPreorder)}
                    />
                    <Footer />
                </main>
                <QuizModal
                    view={self.state.quiz_view()}
                    {email}
                    {error}
                    on_answer={link.callback(|(key, value): (QuestionKey, String)| Msg::Answer(key, value))}
                    on_close={link.callback(|_| Msg::CloseQuiz)}
                    on_retake={link.callback(|_| Msg::RetakeQuiz)}
                    on_preorder={link.callback(|_| Msg::PreorderFromQuiz)}
                    on_email={link.callback(Msg::UpdateEmail)}
                />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        for (ticket, handle) in self.in_flight.drain(..) {
            handle.abort();
            self.state.cancel_submission(ticket);
        }
    }
}

impl Home {
    /// Stands in for the POST: resolves the ticket after a fixed delay unless
    /// the page is torn down first.
    fn schedule(&mut self, ctx: &Context<Self>, ticket: SubmissionTicket) {
        let (delay, handle) = abortable(TimeoutFuture::new(CONFIG.submission_delay_ms));
        self.in_flight.push((ticket, handle));
        debug!("Pre-order {} in flight", ticket);

        // Aborting only happens in `destroy`, after which nothing is delivered.
        ctx.link().send_future_batch(async move {
            match delay.await {
                Ok(()) => vec![Msg::SubmissionResolved(ticket)],
                Err(_) => Vec::new(),
            }
        });
    }

    fn forget(&mut self, ticket: SubmissionTicket) {
        self.in_flight.retain(|(pending, _)| *pending != ticket);
    }
}
