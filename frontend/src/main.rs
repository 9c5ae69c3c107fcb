use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod preferences;

fn main() {
    logging::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
