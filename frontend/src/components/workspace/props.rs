use controller::UiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WorkspaceProps {
    /// Tuning values and endpoint paths, read once from the host page.
    #[prop_or_default]
    pub config: UiConfig,
}
