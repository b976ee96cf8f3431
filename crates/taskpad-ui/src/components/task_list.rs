use taskpad_core::TaskId;
use taskpad_core::view::{
  EMPTY_LIST_TEXT,
  ListView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCardView;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub view:      ListView,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListView)]
pub fn task_list_view(
  props: &TaskListProps
) -> Html {
  match &props.view {
    | ListView::Empty => html! {
        <div class="empty">{ EMPTY_LIST_TEXT }</div>
    },
    | ListView::Cards(cards) => html! {
        <div class="task-list">
            {
                for cards.iter().map(|card| html! {
                    <TaskCardView
                        key={card.id.to_string()}
                        card={card.clone()}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })
            }
        </div>
    }
  }
}
