use controller::{BarTone, ProgressView};
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Overlay sheet showing one operation's progress bar, message and controls.
pub struct ProgressSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: &'static str,
    pub view: ProgressView,
    pub on_dismiss: Callback<()>,
    pub on_toggle_details: Callback<()>,
}

impl Component for ProgressSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let view = &props.view;
        let bar_style = format!("width: {:.1}%;", view.percent.clamp(0.0, 100.0));
        let bar_class = classes!(
            "progress-bar",
            (view.tone == BarTone::Error).then_some("progress-error")
        );

        html! {
            <div
                class={classes!("top-sheet", "upload-progress", view.visible.then_some("show"))}
                id={props.id}
                hidden={!view.visible}
            >
                <div class="upload-progress-content">
                    <h3>{ view.title }</h3>
                    <div class="progress-container">
                        <div class={bar_class} style={bar_style}></div>
                    </div>
                    <div class="progress-text">
                        if let Some(headline) = view.headline {
                            <strong>{ headline }</strong>
                            <br />
                        }
                        { for view.body.lines().enumerate().map(|(index, line)| html! {
                            <>
                                if index > 0 { <br /> }
                                { line }
                            </>
                        }) }
                        if let Some(details) = &view.details {
                            <div class="error-details">
                                <button
                                    class="btn details-toggle"
                                    onclick={props.on_toggle_details.reform(|_| ())}
                                >
                                    { details.toggle_label }
                                </button>
                                if details.expanded {
                                    <div class="details-content">
                                        <pre>{ details.lines.join("\n") }</pre>
                                    </div>
                                }
                            </div>
                        }
                    </div>
                    if let Some(label) = view.dismiss_label {
                        <button class="btn close-btn" onclick={props.on_dismiss.reform(|_| ())}>
                            { label }
                        </button>
                    }
                </div>
            </div>
        }
    }
}
