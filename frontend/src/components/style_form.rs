use shared::{occasions_for, Gender};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::session::FormField;
use crate::{Model, Msg};

pub fn render_style_form(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="style-form">
            { render_gender_buttons(model, ctx) }
            { render_occasion_tags(model, ctx) }

            <div class="field-grid">
                { render_text_field(ctx, FormField::Outfit, "outfit", "Outfit", "e.g. Modern outfit", &model.form.outfit) }
                { render_text_field(ctx, FormField::Fit, "fit", "Fit", "e.g. Slim, Oversized, Tailored", &model.form.fit) }
                { render_text_field(ctx, FormField::Color, "color", "Color", "e.g. Navy", &model.form.color) }
                { render_text_field(ctx, FormField::Accessories, "accessories", "Accessories", "comma separated, e.g. watch, sunglasses", &model.form.accessories) }
                { render_text_field(ctx, FormField::Vibe, "vibe", "Vibe", "e.g. Streetwear", &model.form.vibe) }
                { render_text_field(ctx, FormField::Aesthetic, "aesthetic", "Aesthetic", "e.g. Minimal", &model.form.aesthetic) }
            </div>

            <label class="variation-toggle">
                <input
                    type="checkbox"
                    id="variation"
                    checked={model.form.variation}
                    onchange={ctx.link().callback(|_| Msg::ToggleVariation)}
                />
                {" Create a slight variation"}
            </label>

            { render_generate_button(model) }
        </div>
    }
}

fn render_gender_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let button = |gender: Gender, label: &str| {
        let selected = model.session.gender() == Some(gender);
        html! {
            <button
                type="button"
                id={format!("gender-{}", gender)}
                class={classes!("gender-btn", selected.then_some("selected"))}
                onclick={ctx.link().callback(move |_| Msg::SetGender(gender))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="gender-buttons">
            { button(Gender::Male, "Male") }
            { button(Gender::Female, "Female") }
        </div>
    }
}

fn render_occasion_tags(model: &Model, ctx: &Context<Model>) -> Html {
    let occasions: &[&str] = match model.session.gender() {
        Some(gender) => occasions_for(gender),
        None => &[],
    };

    html! {
        <>
            <div id="occasion-tags" class="occasion-tags">
                { for occasions.iter().map(|occasion| {
                    let selected = model.session.occasion() == Some(*occasion);
                    let occasion_owned = occasion.to_string();
                    html! {
                        <button
                            type="button"
                            class={classes!("occasion-tag", selected.then_some("selected"))}
                            key={occasion_owned.clone()}
                            onclick={ctx.link().callback(move |_| Msg::ToggleOccasion(occasion_owned.clone()))}
                        >
                            { *occasion }
                        </button>
                    }
                })}
            </div>
            // Mirrors the tag selection for the submission path.
            <input
                type="hidden"
                id="occasion"
                name="occasion"
                value={model.session.occasion().unwrap_or_default().to_string()}
            />
        </>
    }
}

fn render_text_field(
    ctx: &Context<Model>,
    field: FormField,
    id: &'static str,
    label: &str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });

    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input
                type="text"
                id={id}
                name={id}
                placeholder={placeholder}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}

fn render_generate_button(model: &Model) -> Html {
    html! {
        <button
            id="generate-button"
            type="submit"
            class="generate-btn"
            disabled={model.session.is_submitting()}
        >
            {
                if model.session.is_submitting() {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Generating..."}</> }
                } else {
                    html! { {"Generate My Look"} }
                }
            }
        </button>
    }
}
