use taskpad_core::{
  ModalState,
  TaskState
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub state:     ModalState,
  pub on_change: Callback<ModalState>,
  pub on_cancel: Callback<()>,
  pub on_submit: Callback<ModalState>
}

/// Create and edit dialog over the same four fields.
#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let state = props.state.clone();

  let on_title_input = {
    let state = state.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: web_sys::InputEvent| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      on_change.emit(state.clone().update(|form| form.with_title(input.value())));
    })
  };
  let on_summary_input = {
    let state = state.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: web_sys::InputEvent| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      on_change.emit(state.clone().update(|form| form.with_summary(input.value())));
    })
  };
  let on_state_change = {
    let state = state.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
      match TaskState::from_label(&select.value()) {
        | Some(next) => {
          on_change.emit(state.clone().update(|form| form.with_state(next)));
        }
        | None => {
          tracing::warn!(value = %select.value(), "unknown task state option");
        }
      }
    })
  };
  let on_deadline_input = {
    let state = state.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      on_change.emit(state.clone().update(|form| form.with_deadline(input.value())));
    })
  };
  let on_cancel_click = props.on_cancel.reform(|_: MouseEvent| ());
  let on_save_click = {
    let state = state.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |_: MouseEvent| on_submit.emit(state.clone()))
  };

  html! {
      <div class="modal-backdrop" onclick={on_cancel_click.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ state.title() }</div>
              <div class="content">
                  <div class="field">
                      <label>{ "Title" }<span class="required">{ " *" }</span></label>
                      <input
                          id="task-title"
                          value={state.form.title.clone()}
                          placeholder="Task Title"
                          required={true}
                          oninput={on_title_input}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Summary" }</label>
                      <input
                          id="task-summary"
                          value={state.form.summary.clone()}
                          placeholder="Task Summary"
                          oninput={on_summary_input}
                      />
                  </div>
                  <div class="field">
                      <label>{ "State" }</label>
                      <select id="task-state" onchange={on_state_change}>
                          {
                              for TaskState::ALL.iter().map(|option| html! {
                                  <option
                                      value={option.label()}
                                      selected={*option == state.form.state}
                                  >
                                      { option.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="field">
                      <label>{ "Deadline" }</label>
                      <input
                          id="task-deadline"
                          type="date"
                          value={state.form.deadline.clone()}
                          placeholder="YYYY-MM-DD"
                          onchange={on_deadline_input}
                      />
                  </div>
                  {
                      if let Some(error) = &state.error {
                          html! { <div class="field-error">{ error.clone() }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="footer">
                      <button type="button" class="btn subtle" onclick={on_cancel_click}>
                          { "Cancel" }
                      </button>
                      <button type="button" class="btn primary" onclick={on_save_click}>
                          { state.submit_label() }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
