use crate::pages::{
    albums::AlbumsPage, home::Home, post_detail::PostDetailPage, posts::PostsPage,
    todo_detail::TodoDetailPage, todos::TodosPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/posts")]
    Posts,
    #[at("/posts/:id")]
    PostDetail { id: i64 },
    #[at("/albums")]
    Albums,
    #[at("/todos")]
    Todos,
    #[at("/todos/:id")]
    TodoDetail { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Posts => html! { <PostsPage /> },
        Route::PostDetail { id } => html! { <PostDetailPage {id} /> },
        Route::Albums => html! { <AlbumsPage /> },
        Route::Todos => html! { <TodosPage /> },
        Route::TodoDetail { id } => html! { <TodoDetailPage {id} /> },
        Route::NotFound => html! {
            <div class="container not-found">
                <h1>{ "Page not found" }</h1>
                <Link<Route> to={Route::Home}>{ "Back to Home" }</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
