use gloo_events::EventListener;
use gloo_file::callbacks::FileReader;
use gloo_file::File as GlooFile;
use shared::Gender;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, SubmitEvent};
use yew::prelude::*;

mod api;
mod components;
mod error;
mod session;

use components::{handlers, header, results, style_form, upload_section, utils};
use error::AppError;
use session::{FormField, Session, StyleForm};

// Yew msg components
pub enum Msg {
    // Image intake
    ImageChosen(GlooFile),
    ImageLoaded(String),
    ImageReadFailed,
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Option selection
    SetGender(Gender),
    ToggleOccasion(String),

    // Form fields
    SetField(FormField, String),
    ToggleVariation,

    // Submission lifecycle
    Submit(SubmitEvent),
    GenerationFinished(Result<String, AppError>),
    TryAgain,

    // Download
    Download,
    DownloadFinished(Result<(), AppError>),

    // UI states
    SetError(Option<String>),
    ScrollToApp,
}

// Main component
pub struct Model {
    pub session: Session,
    pub form: StyleForm,
    pub error: Option<String>,
    pub is_dragging: bool,
    pub downloading: bool,
    pub reader: Option<FileReader>,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: Session::default(),
            form: StyleForm::default(),
            error: None,
            is_dragging: false,
            downloading: false,
            reader: None,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image intake
            Msg::ImageChosen(file) => handlers::handle_image_chosen(self, ctx, file),
            Msg::ImageLoaded(data_url) => handlers::handle_image_loaded(self, data_url),
            Msg::ImageReadFailed => handlers::handle_image_read_failed(self),
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),

            // Option selection
            Msg::SetGender(gender) => handlers::handle_set_gender(self, gender),
            Msg::ToggleOccasion(occasion) => handlers::handle_toggle_occasion(self, occasion),

            // Form fields
            Msg::SetField(field, value) => {
                self.form.set(field, value);
                false
            }
            Msg::ToggleVariation => {
                self.form.variation = !self.form.variation;
                true
            }

            // Submission lifecycle
            Msg::Submit(event) => handlers::handle_submit(self, ctx, event),
            Msg::GenerationFinished(outcome) => {
                handlers::handle_generation_finished(self, outcome)
            }
            Msg::TryAgain => handlers::handle_try_again(self),

            // Download
            Msg::Download => handlers::handle_download(self, ctx),
            Msg::DownloadFinished(outcome) => handlers::handle_download_finished(self, outcome),

            // UI states
            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::ScrollToApp => {
                utils::scroll_to_app();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_nav(ctx) }
                { header::render_hero(ctx) }

                <main id={utils::APP_SECTION_ID} class="main-content">
                    <form id="style-form" onsubmit={ctx.link().callback(Msg::Submit)}>
                        { upload_section::render_upload_section(self, ctx) }
                        { style_form::render_style_form(self, ctx) }
                    </form>
                    { utils::render_error_message(self) }
                    { results::render_result_card(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Fash AI | Virtual Fashion Try-On"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
