use crate::api::api_client;
use crate::app::Route;
use crate::components::{BackLink, Loading, Pagination};
use showcase_client::error::FetchOutcome;
use showcase_client::models::Todo;
use showcase_client::{TodoFilter, TodoList};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum Msg {
    Loaded(FetchOutcome<Vec<Todo>>),
    SetFilter(TodoFilter),
    GoToPage(usize),
}

pub struct TodosPage {
    list: TodoList,
}

impl Component for TodosPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut list = TodoList::new();
        list.start_loading();

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api_client().todos().await));
        });

        Self { list }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(outcome) => {
                self.list.finish_loading(outcome);
                true
            }
            Msg::SetFilter(filter) => {
                self.list.set_filter(filter);
                true
            }
            Msg::GoToPage(page) => {
                let before = self.list.current_page();
                self.list.go_to_page(page);
                before != self.list.current_page()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_select = ctx.link().callback(Msg::GoToPage);
        let filter = self.list.filter();

        html! {
            <div class="container todos-page">
                <BackLink to={Route::Home} label="Back to Home" />
                <h1>{ "Todos" }</h1>

                <div class="filters">
                    { for TodoFilter::ALL.iter().map(|f| self.view_filter_button(*f, ctx)) }
                </div>

                if filter != TodoFilter::All && !self.list.is_loading() {
                    <p class="filter-count">
                        { format!("Showing {} todos: {}", filter, self.list.filtered_count()) }
                    </p>
                }

                if self.list.is_loading() {
                    <Loading />
                } else if self.list.filtered_count() == 0 {
                    <p class="empty">{ "No todos found matching your filter." }</p>
                } else {
                    <div class="todo-list">
                        { for self.list.visible().into_iter().map(view_todo_card) }
                    </div>
                    <Pagination
                        current={self.list.current_page()}
                        total={self.list.total_pages()}
                        {on_select}
                    />
                }
            </div>
        }
    }
}

impl TodosPage {
    fn view_filter_button(&self, filter: TodoFilter, ctx: &Context<Self>) -> Html {
        let active = self.list.filter() == filter;
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::SetFilter(filter));

        html! {
            <button class={classes!("filter-button", active.then_some("active"))} {onclick}>
                { filter.label() }
            </button>
        }
    }
}

fn view_todo_card(todo: &Todo) -> Html {
    let status = if todo.completed { "completed" } else { "pending" };

    html! {
        <div class={classes!("card", "todo-card", status)} key={todo.id}>
            <h3 class={classes!(todo.completed.then_some("done"))}>{ &todo.title }</h3>
            <div class="todo-meta">
                <span>{ format!("User ID: {}", todo.user_id) }</span>
                <Link<Route> to={Route::TodoDetail { id: todo.id }} classes="card-action">
                    { "View details" }
                </Link<Route>>
            </div>
        </div>
    }
}
