use crate::api::api_client;
use crate::app::Route;
use crate::components::{BackLink, Loading, UserCard};
use showcase_client::models::Todo;
use showcase_client::view::TodoDetail;
use showcase_client::LoadState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

pub enum Msg {
    Loaded(i64, TodoDetail),
}

pub struct TodoDetailPage {
    detail: TodoDetail,
}

impl TodoDetailPage {
    fn load(ctx: &Context<Self>) -> TodoDetail {
        let id = ctx.props().id;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(id, api_client().todo_detail(id).await));
        });
        TodoDetail::loading()
    }
}

impl Component for TodoDetailPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            detail: Self::load(ctx),
        }
    }

    // Related todos link to sibling ids on the same route.
    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.detail = Self::load(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(id, detail) if id == ctx.props().id => {
                self.detail = detail;
                true
            }
            Msg::Loaded(id, _) => {
                log::debug!("Discarding todo #{}, page moved on", id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container todo-detail">
                <BackLink to={Route::Todos} label="Back to Todos" />

                if self.detail.is_loading() {
                    <Loading />
                } else {
                    { self.view_body(ctx.props().id) }
                }
            </div>
        }
    }
}

impl TodoDetailPage {
    fn view_body(&self, id: i64) -> Html {
        let Some(todo) = self.detail.todo.value() else {
            return html! {
                <div class="not-found">
                    <h1>{ "Todo not found" }</h1>
                    <p>{ format!("Todo #{} could not be loaded.", id) }</p>
                </div>
            };
        };

        let status = if todo.completed { "Completed" } else { "Pending" };
        let related = self.detail.related.items();

        html! {
            <>
                <article class={classes!("card", "todo", todo.completed.then_some("completed"))}>
                    <span class="badge">{ format!("Todo #{}", todo.id) }</span>
                    <h1>{ &todo.title }</h1>
                    <p class="status">{ format!("Status: {}", status) }</p>
                </article>

                {
                    match &self.detail.owner {
                        LoadState::Loaded(owner) => html! {
                            <UserCard title="Assigned to" user={owner.clone()} />
                        },
                        LoadState::NotFound | LoadState::Failed(_) => html! {
                            <p class="muted">{ "User information is unavailable." }</p>
                        },
                        LoadState::Idle | LoadState::Loading => html! {},
                    }
                }

                if !related.is_empty() {
                    <section class="related-todos">
                        <h2>{ "Other todos by this user" }</h2>
                        { for related.iter().map(view_related) }
                    </section>
                }
            </>
        }
    }
}

fn view_related(todo: &Todo) -> Html {
    let marker = if todo.completed { "✔" } else { "○" };

    html! {
        <Link<Route> to={Route::TodoDetail { id: todo.id }} classes="related-todo">
            <span class="marker">{ marker }</span>
            { &todo.title }
        </Link<Route>>
    }
}
