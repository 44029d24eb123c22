use gloo_file::File as GlooFile;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use super::utils::debounce;
use crate::error::AppError;
use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|list| list.item(0));
        input.set_value("");

        match file {
            Some(file) if file.type_().starts_with("image/") => {
                Some(Msg::ImageChosen(GlooFile::from(file)))
            }
            Some(_) => Some(Msg::SetError(Some(AppError::InvalidFileType.to_string()))),
            None => None,
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_enter = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="dropzone"
                class={classes!("dropzone", model.is_dragging.then_some("dragover"))}
                ondragenter={handle_drag_enter}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop your photo here, paste, or click"}</p>
                    <p class="file-types">{"Supported formats: JPG, PNG, WEBP"}</p>
                </div>
            </div>

            <button
                type="button"
                id="browse-button"
                class="browse-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i>{" Browse files"}
            </button>

            { render_thumbnail(model) }
        </div>
    }
}

fn render_thumbnail(model: &Model) -> Html {
    if let Some(data_url) = model.session.image() {
        html! {
            <figure id="thumbnail" class="thumbnail">
                <img id="thumbnail-img" src={data_url.to_string()} alt="Uploaded photo" />
            </figure>
        }
    } else {
        html! {}
    }
}
