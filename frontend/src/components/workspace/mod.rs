//! Document workspace page: upload, list, reorder and book generation.
//!
//! The component is a thin shell around [`controller::update`]: browser
//! events become [`controller::Action`]s, and the returned effects are run
//! here against the network, timers and window APIs.

use controller::{Action, WorkspaceState};
use log::info;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WorkspaceProps;
pub use state::WorkspaceComponent;

impl Component for WorkspaceComponent {
    type Message = Msg;
    type Properties = WorkspaceProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        let language = crate::preferences::load_language(&config.language_storage_key)
            .unwrap_or(config.default_language);
        info!("workspace starting in {}", language.code());
        WorkspaceComponent::new(WorkspaceState::new(config, language))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Workspace(Action::PageLoaded));
        }
    }
}
