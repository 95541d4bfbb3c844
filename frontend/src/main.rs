use acquirer_report::{config, App};
use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(config::DOCUMENT_TITLE);
    }

    info!("Starting report");
    yew::Renderer::<App>::new().render();
}
