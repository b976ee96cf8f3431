use taskpad_core::TaskId;
use taskpad_core::view::TaskCard;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub card:      TaskCard,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskCardView)]
pub fn task_card_view(
  props: &TaskCardProps
) -> Html {
  let card = &props.card;
  let id = card.id;

  html! {
      <div class="card">
          <div class="card-head">
              <div class="card-title">{ card.title.clone() }</div>
              <div class="card-actions">
                  <button
                      class="icon-btn edit"
                      title="Edit task"
                      onclick={{
                          let on_edit = props.on_edit.clone();
                          Callback::from(move |_| on_edit.emit(id))
                      }}
                  >
                      { "\u{270E}" }
                  </button>
                  <button
                      class="icon-btn danger"
                      title="Delete task"
                      onclick={{
                          let on_delete = props.on_delete.clone();
                          Callback::from(move |_| on_delete.emit(id))
                      }}
                  >
                      { "\u{1F5D1}" }
                  </button>
              </div>
          </div>
          <div class={classes!("card-summary", card.summary_missing.then_some("dimmed"))}>
              { card.summary.clone() }
          </div>
          <div class="card-meta">{ card.state_line() }</div>
          <div class="card-meta">{ card.deadline_line() }</div>
      </div>
  }
}
