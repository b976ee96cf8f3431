use gloo::console::log;
use gloo::events::EventListener;
use taskpad_core::hotkey::{
  KeyChord,
  is_text_entry_tag
};
use taskpad_core::store::backup_key;
use taskpad_core::theme::{
  load_theme,
  toggle_theme
};
use taskpad_core::view::ListView;
use taskpad_core::{
  AppConfig,
  LoadOutcome,
  ModalState,
  TaskId,
  TaskStore,
  ThemePreference
};
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_state
};

use crate::components::{
  NoticeBanner,
  TaskListView,
  TaskModal,
  TopBar
};
use crate::storage::BrowserStorage;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/taskpad.toml");

struct Boot {
  config: AppConfig,
  store:  TaskStore<BrowserStorage>,
  theme:  ThemePreference,
  notice: Option<String>
}

fn boot_app() -> Boot {
  let config = load_app_config();
  let storage = BrowserStorage::open();
  let volatile = storage.is_volatile();

  let (store, outcome) = TaskStore::open(
    storage,
    &config.storage.tasks_key
  );
  let notice = match outcome {
    | LoadOutcome::Discarded(error) => {
      Some(format!(
        "Saved tasks could not be \
         loaded and were reset; a copy \
         was kept under '{}'. ({error})",
        backup_key(&config.storage.tasks_key)
      ))
    }
    | _ if volatile => Some(
      "Browser storage is unavailable; \
       changes will be lost on reload."
        .to_string()
    ),
    | LoadOutcome::Restored(count) => {
      tracing::info!(
        count,
        "restored saved tasks"
      );
      None
    }
    | LoadOutcome::Missing => None
  };

  let theme = load_theme(
    &BrowserStorage::open(),
    &config.storage.theme_key,
    config.theme.default
  );

  Boot {
    config,
    store,
    theme,
    notice
  }
}

fn load_app_config() -> AppConfig {
  match AppConfig::from_toml_str(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "bundled config is invalid; \
         using defaults"
      );
      AppConfig::default()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let boot = use_memo((), |_| boot_app());
  let config = boot.config.clone();

  let store = {
    let boot = boot.clone();
    use_state(move || boot.store.clone())
  };
  let theme = {
    let boot = boot.clone();
    use_state(move || boot.theme)
  };
  let notice = {
    let boot = boot.clone();
    use_state(move || boot.notice.clone())
  };
  let modal_state =
    use_state(|| None::<ModalState>);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  let on_toggle_theme = {
    let theme = theme.clone();
    let notice = notice.clone();
    let theme_key =
      config.storage.theme_key.clone();
    Callback::from(move |_: ()| {
      let (next, error) = toggle_theme(
        &mut BrowserStorage::open(),
        &theme_key,
        *theme
      );
      if let Some(error) = error {
        tracing::error!(
          %error,
          "failed to persist theme"
        );
        notice.set(Some(format!(
          "Theme preference was not \
           saved. ({error})"
        )));
      }
      theme.set(next);
    })
  };

  {
    let on_toggle_theme =
      on_toggle_theme.clone();
    let hotkey = config.theme_hotkey();
    use_effect_with(*theme, move |_| {
      let listener = match (
        hotkey,
        web_sys::window()
      ) {
        | (Ok(hotkey), Some(window)) => {
          Some(EventListener::new(
            &window,
            "keydown",
            move |event| {
              let Some(event) = event
                .dyn_ref::<web_sys::KeyboardEvent>()
              else {
                return;
              };
              let typing = event
                .target()
                .and_then(|target| {
                  target
                    .dyn_into::<web_sys::Element>()
                    .ok()
                })
                .is_some_and(|element| {
                  is_text_entry_tag(
                    &element.tag_name()
                  )
                });
              if typing {
                return;
              }
              let chord = KeyChord {
                key:   event.key(),
                ctrl:  event.ctrl_key(),
                meta:  event.meta_key(),
                alt:   event.alt_key(),
                shift: event.shift_key()
              };
              if hotkey.matches(&chord) {
                event.prevent_default();
                ui_debug(
                  "hotkey.theme",
                  "theme shortcut pressed"
                );
                on_toggle_theme.emit(());
              }
            }
          ))
        }
        | (Err(error), _) => {
          tracing::warn!(
            error = %error,
            "theme hotkey disabled"
          );
          None
        }
        | (_, None) => None
      };
      move || drop(listener)
    });
  }

  let on_add_click = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_: MouseEvent| {
      modal_state
        .set(Some(ModalState::create()));
      ui_debug(
        "action.add_modal.open",
        "clicked New Task"
      );
    })
  };

  let on_edit = {
    let modal_state =
      modal_state.clone();
    let store = store.clone();
    Callback::from(move |id: TaskId| {
      match store.find(id) {
        | Some(task) => {
          modal_state.set(Some(
            ModalState::edit(task)
          ));
          ui_debug(
            "action.edit_modal.open",
            &id.to_string()
          );
        }
        | None => {
          tracing::warn!(
            %id,
            "edit requested for missing \
             task"
          );
        }
      }
    })
  };

  let on_delete = {
    let store = store.clone();
    let notice = notice.clone();
    Callback::from(move |id: TaskId| {
      let mut next = (*store).clone();
      match next.delete(id) {
        | Ok(removed) => {
          ui_debug(
            "action.delete",
            &removed.title
          );
          store.set(next);
        }
        | Err(error) => {
          tracing::error!(
            %error,
            %id,
            "delete failed"
          );
          notice.set(Some(format!(
            "Could not delete task. \
             ({error})"
          )));
        }
      }
    })
  };

  let on_modal_change = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |next: ModalState| {
        modal_state.set(Some(next));
      }
    )
  };

  let on_modal_cancel = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_: ()| {
      modal_state.set(None);
      ui_debug(
        "action.modal.cancel",
        "closed modal without saving"
      );
    })
  };

  let on_modal_submit = {
    let modal_state =
      modal_state.clone();
    let store = store.clone();
    let notice = notice.clone();
    Callback::from(
      move |state: ModalState| {
        let mut next = (*store).clone();
        match state.submit(&mut next) {
          | Ok(id) => {
            tracing::info!(
              %id,
              mode = ?state.mode,
              "saved task"
            );
            store.set(next);
            modal_state.set(None);
          }
          | Err(error) => {
            if !error.is_validation() {
              tracing::error!(
                %error,
                "task save failed"
              );
              notice.set(Some(format!(
                "Task was not saved. \
                 ({error})"
              )));
            }
            modal_state.set(Some(
              state.with_error(&error)
            ));
          }
        }
      }
    )
  };

  let on_dismiss_notice = {
    let notice = notice.clone();
    Callback::from(move |_: MouseEvent| {
      notice.set(None)
    })
  };

  let list_view =
    ListView::build(store.tasks());
  let hotkey_hint = config
    .theme_hotkey()
    .map(|hotkey| hotkey.to_string())
    .ok();

  html! {
      <div class={classes!("app", (*theme).as_class())}>
          <div class="container">
              <TopBar
                  heading={config.ui.heading.clone()}
                  theme={*theme}
                  hotkey_hint={hotkey_hint}
                  on_toggle_theme={on_toggle_theme.reform(|_: MouseEvent| ())}
              />
              <NoticeBanner
                  message={(*notice).clone()}
                  on_dismiss={on_dismiss_notice}
              />
              <TaskListView
                  view={list_view}
                  on_edit={on_edit}
                  on_delete={on_delete}
              />
              <button class="btn primary full-width" onclick={on_add_click}>
                  { "New Task" }
              </button>
          </div>
          {
              if let Some(state) = (*modal_state).clone() {
                  html! {
                      <TaskModal
                          state={state}
                          on_change={on_modal_change}
                          on_cancel={on_modal_cancel}
                          on_submit={on_modal_submit}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_config_is_used_as_is() {
    let config = load_app_config();
    assert_eq!(
      config.storage.tasks_key,
      "tasks"
    );
    assert_eq!(
      config.storage.theme_key,
      "mantine-color-scheme"
    );
    assert_eq!(
      config
        .theme_hotkey()
        .expect("bundled hotkey parses")
        .to_string(),
      "mod+J"
    );
  }
}
