use calendar_domain::Banner;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub banner: Option<Banner>,
    pub on_dismiss: Callback<()>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let Some(banner) = &props.banner else {
        return html! { <div id="success-message" class="success-message"></div> };
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div id="success-message" class={banner.css_class()} {onclick}>
            <i id="message-icon" class={banner.icon_class()}></i>
            <span id="success-text">{&banner.message}</span>
        </div>
    }
}
