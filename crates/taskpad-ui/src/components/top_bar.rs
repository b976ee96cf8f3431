use taskpad_core::ThemePreference;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
  pub heading:         String,
  pub theme:           ThemePreference,
  pub hotkey_hint:     Option<String>,
  pub on_toggle_theme:
    Callback<MouseEvent>
}

#[function_component(TopBar)]
pub fn top_bar(
  props: &TopBarProps
) -> Html {
  let toggle_title = match &props
    .hotkey_hint
  {
    | Some(hint) => format!(
      "{} ({hint})",
      props.theme.toggle_title()
    ),
    | None => {
      props.theme.toggle_title().to_string()
    }
  };

  html! {
      <div class="topbar">
          <h1 class="brand">{ props.heading.clone() }</h1>
          <button
              class="icon-btn theme-toggle"
              title={toggle_title.clone()}
              aria-label={toggle_title}
              onclick={props.on_toggle_theme.clone()}
          >
              { props.theme.toggle_icon() }
          </button>
      </div>
  }
}
