use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::emailjs::{GatewayHandle, UnconfiguredGateway};
use crate::booking::form::FormField;
use crate::booking::state::{submit, BookingAction, BookingState, SubmissionStatus};
use crate::components::back_button::BackButton;
use crate::components::talent_select::TalentSelect;

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub on_back: Callback<()>,
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let state = use_reducer(BookingState::default);
    let gateway = use_context::<GatewayHandle>().unwrap_or_else(|| {
        error!("No email gateway provided, booking requests will fail");
        GatewayHandle::new(UnconfiguredGateway)
    });

    let on_text = |field: FormField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BookingAction::Edit(field, input.value()));
        })
    };

    let on_talent = {
        let dispatcher = state.dispatcher();
        Callback::from(move |key: String| {
            dispatcher.dispatch(BookingAction::Edit(FormField::TalentType, key));
        })
    };

    // Fire and forget: inputs and the button stay live while the send is pending.
    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = state.dispatcher();
            spawn_local(submit(gateway.0.clone(), &state.form, move |action| {
                dispatcher.dispatch(action)
            }));
        })
    };

    let form = &state.form;

    html! {
        <div class="booking-page">
            <BackButton on_click={props.on_back.clone()} />
            <div class="booking-grid">
                <div class="booking-intro fade-up">
                    <div class="pill">
                        <span class="pill-dot"></span>
                        <span>{"SOLVE YOUR IT CHALLENGES"}</span>
                    </div>
                    <h1>{"Transform Your IT Workforce Today"}</h1>
                    <p class="booking-lead">
                        {"Schedule a consultation to discover how IQBean can help you build a high-performing IT team that drives innovation and growth."}
                    </p>
                    <div class="booking-perks">
                        <div class="booking-perk">
                            <div class="booking-perk-title"><span>{"◷"}</span>{"30-Minute Session"}</div>
                            <p>{"Quick, focused discussion of your IT staffing needs"}</p>
                        </div>
                        <div class="booking-perk">
                            <div class="booking-perk-title"><span>{"✓"}</span>{"No Obligation"}</div>
                            <p>{"Free consultation with our IT staffing experts"}</p>
                        </div>
                    </div>
                </div>

                <div class="booking-card fade-up delayed">
                    <h3>{"Schedule Your Consultation"}</h3>
                    <form {onsubmit}>
                        <div class="booking-field">
                            <label for="from_name">{"Full Name"}</label>
                            <input
                                id="from_name"
                                type="text"
                                name="from_name"
                                value={form.full_name.clone()}
                                oninput={on_text(FormField::FullName)}
                                placeholder="Enter your full name"
                            />
                        </div>
                        <div class="booking-field">
                            <label for="from_email">{"Work Email"}</label>
                            <input
                                id="from_email"
                                type="email"
                                name="from_email"
                                value={form.work_email.clone()}
                                oninput={on_text(FormField::WorkEmail)}
                                placeholder="work@company.com"
                            />
                        </div>
                        <div class="booking-field">
                            <label for="company">{"Company"}</label>
                            <input
                                id="company"
                                type="text"
                                name="company"
                                value={form.company.clone()}
                                oninput={on_text(FormField::Company)}
                                placeholder="Your company name"
                            />
                        </div>
                        <div class="booking-field">
                            <label>{"Type of IT Talent Needed"}</label>
                            <TalentSelect value={form.talent_type} on_change={on_talent} />
                        </div>
                        <button type="submit" class="booking-submit">
                            {"Book Consultation"}<span>{"→"}</span>
                        </button>
                    </form>

                    {
                        match state.status {
                            SubmissionStatus::Success => html! {
                                <div class="booking-feedback success">
                                    <strong>{"Thank you!"}</strong>{" Your request was sent successfully."}
                                </div>
                            },
                            SubmissionStatus::Error => html! {
                                <div class="booking-feedback error">
                                    {"Oops! Something went wrong. Please try again later."}
                                </div>
                            },
                            SubmissionStatus::None => html! {},
                        }
                    }
                </div>
            </div>

            <style>
                {r#"
                .booking-page {
                    min-height: 100vh;
                    background: #001430;
                    color: #ffffff;
                    padding: 5rem 1.5rem 4rem;
                }
                .booking-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .booking-intro .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.2);
                    color: #BFDBFE;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .booking-intro .pill-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #60A5FA;
                }
                .booking-intro h1 { font-size: 3rem; line-height: 1.15; margin: 0 0 1.5rem; }
                .booking-lead { font-size: 1.2rem; color: #E5E7EB; line-height: 1.7; margin-bottom: 2.5rem; }
                .booking-perks { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .booking-perk, .booking-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .booking-perk-title { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; margin-bottom: 0.5rem; }
                .booking-perk-title span { color: #60A5FA; }
                .booking-perk p { margin: 0; font-size: 0.875rem; color: #BFDBFE; }
                .booking-card { padding: 2rem; border-radius: 1rem; }
                .booking-card h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
                .booking-field { margin-bottom: 1.25rem; }
                .booking-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #BFDBFE;
                    margin-bottom: 0.5rem;
                }
                .booking-field input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background-color: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    font-size: 0.9rem;
                }
                .booking-field input::placeholder { color: rgba(255, 255, 255, 0.5); }
                .booking-submit {
                    width: 100%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    margin-top: 0.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #ffffff;
                    color: #001430;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .booking-submit:hover { opacity: 0.9; }
                .booking-feedback {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.9rem;
                    animation: feedbackIn 0.3s ease both;
                }
                .booking-feedback.success {
                    background: rgba(16, 185, 129, 0.15);
                    border: 1px solid rgba(16, 185, 129, 0.4);
                    color: #A7F3D0;
                }
                .booking-feedback.error {
                    background: rgba(239, 68, 68, 0.15);
                    border: 1px solid rgba(239, 68, 68, 0.4);
                    color: #FECACA;
                }
                .fade-up { animation: fadeUp 0.8s ease both; }
                .fade-up.delayed { animation-delay: 0.2s; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes feedbackIn {
                    from { opacity: 0; transform: translateY(-5px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 900px) {
                    .booking-grid { grid-template-columns: 1fr; }
                    .booking-intro h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}
