use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
  pub message:    Option<String>,
  pub on_dismiss: Callback<MouseEvent>
}

/// Non-fatal problems (unreadable saved data, failed writes).
#[function_component(NoticeBanner)]
pub fn notice_banner(
  props: &NoticeBannerProps
) -> Html {
  let Some(message) = &props.message
  else {
    return html! {};
  };

  html! {
      <div class="notice" role="alert">
          <span>{ message.clone() }</span>
          <button class="icon-btn" aria-label="Dismiss" onclick={props.on_dismiss.clone()}>
              { "x" }
          </button>
      </div>
  }
}
