use yew::prelude::*;

use super::utils::debounce;
use crate::session::Phase;
use crate::{Model, Msg};

pub fn render_result_card(model: &Model, ctx: &Context<Model>) -> Html {
    if model.session.phase() == &Phase::Idle {
        return html! {};
    }

    html! {
        <section id="result-card" class="result-card">
            { render_result_body(model) }
            { render_result_actions(model, ctx) }
        </section>
    }
}

fn render_result_body(model: &Model) -> Html {
    match model.session.phase() {
        Phase::Idle => html! {},
        Phase::Submitting => html! {
            <div id="result-loader" class="result-loader">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Generating your look..."}</p>
            </div>
        },
        Phase::Succeeded { image_url } => html! {
            <img id="result-image" class="result-image" src={image_url.clone()} alt="Generated look" />
        },
        Phase::Failed { message } => html! {
            <p id="result-error" class="result-error">{ message }</p>
        },
    }
}

fn render_result_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let download_enabled = model.session.result_url().is_some() && !model.downloading;

    html! {
        <div class="result-actions">
            <button
                type="button"
                id="try-again-button"
                class="result-btn"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::TryAgain)
                })}
            >
                {"Try again"}
            </button>
            <button
                type="button"
                id="download-button"
                class="result-btn"
                disabled={!download_enabled}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Download)
                })}
            >
                {
                    if model.downloading {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Downloading..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-download"></i>{" Download"}</> }
                    }
                }
            </button>
        </div>
    }
}
