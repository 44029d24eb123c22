use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_nav(ctx: &Context<Model>) -> Html {
    html! {
        <nav class="top-nav">
            <span class="brand"><i class="fa-solid fa-shirt"></i>{" Fash AI"}</span>
            <button
                id="nav-cta"
                class="cta-btn"
                onclick={ctx.link().callback(|_| Msg::ScrollToApp)}
            >
                {"Try it now"}
            </button>
        </nav>
    }
}

pub fn render_hero(ctx: &Context<Model>) -> Html {
    html! {
        <header class="hero">
            <h1>{"Your AI stylist"}</h1>
            <p class="subtitle">{"Upload a photo, pick an occasion, get a styled look back."}</p>
            <button
                id="hero-cta"
                class="cta-btn"
                onclick={ctx.link().callback(|_| Msg::ScrollToApp)}
            >
                {"Style my photo"}
            </button>
        </header>
    }
}
