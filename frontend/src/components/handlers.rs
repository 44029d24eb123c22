use gloo_console::error;
use gloo_file::callbacks::read_as_data_url;
use gloo_file::File as GlooFile;
use shared::{FashAiRequest, Gender};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList, SubmitEvent};
use yew::prelude::*;

use crate::components::utils::scroll_to_app;
use crate::error::AppError;
use crate::{api, Model, Msg};

pub fn handle_image_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    model.error = None;

    let link = ctx.link().clone();
    let reader = read_as_data_url(&file, move |result| match result {
        Ok(data_url) => link.send_message(Msg::ImageLoaded(data_url)),
        Err(err) => {
            error!(format!("File read failed: {:?}", err));
            link.send_message(Msg::ImageReadFailed);
        }
    });

    // Keep the reader alive until its completion message lands.
    model.reader = Some(reader);
    true
}

pub fn handle_image_loaded(model: &mut Model, data_url: String) -> bool {
    model.reader = None;
    model.session.set_image(data_url);
    true
}

pub fn handle_image_read_failed(model: &mut Model) -> bool {
    model.reader = None;
    model.error = Some(AppError::FileRead.to_string());
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            intake_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                intake_file_list(ctx, file_list);
                return true;
            }
        }
    }
    false
}

/// Single-image intake shared by drop and paste: take the first file,
/// reject anything that is not `image/*` without touching the session.
pub fn intake_file_list(ctx: &Context<Model>, file_list: FileList) {
    let Some(file) = file_list.item(0) else {
        return;
    };

    if !file.type_().starts_with("image/") {
        log::warn!("Rejected non-image file: {}", file.name());
        ctx.link()
            .send_message(Msg::SetError(Some(AppError::InvalidFileType.to_string())));
        return;
    }

    ctx.link().send_message(Msg::ImageChosen(GlooFile::from(file)));
}

pub fn handle_set_gender(model: &mut Model, gender: Gender) -> bool {
    model.session.select_gender(gender);
    true
}

pub fn handle_toggle_occasion(model: &mut Model, occasion: String) -> bool {
    model.session.toggle_occasion(&occasion);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, event: SubmitEvent) -> bool {
    event.prevent_default();

    match model.session.begin_submission(&model.form) {
        Ok(request) => {
            model.error = None;
            send_generation_request(ctx, request);
        }
        Err(err) => {
            model.error = Some(err.to_string());
        }
    }
    true
}

fn send_generation_request(ctx: &Context<Model>, request: FashAiRequest) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::generate_look(&request).await;
            link.send_message(Msg::GenerationFinished(outcome));
        }
    });
}

/// Terminal step of every submission, success or not. `Session::finish`
/// always leaves `Submitting`, which restores the loader and the generate
/// button unconditionally.
pub fn handle_generation_finished(
    model: &mut Model,
    outcome: Result<String, AppError>,
) -> bool {
    if let Err(err) = &outcome {
        log::warn!("Generation failed: {}", err);
    }
    model.session.finish(outcome);
    true
}

pub fn handle_try_again(model: &mut Model) -> bool {
    reset_result(model);
    scroll_to_app();
    true
}

/// Clears the result state and the inline banner; the uploaded image and
/// the selections survive.
pub fn reset_result(model: &mut Model) {
    model.error = None;
    model.session.reset();
}

pub fn handle_download(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(url) = model.session.result_url().map(str::to_string) else {
        return false;
    };

    model.downloading = true;
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::download_look(&url).await;
            link.send_message(Msg::DownloadFinished(outcome));
        }
    });
    true
}

pub fn handle_download_finished(model: &mut Model, outcome: Result<(), AppError>) -> bool {
    model.downloading = false;
    if let Err(err) = outcome {
        model.error = Some(err.to_string());
    }
    true
}
