use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct NavCardProps {
    to: Route,
    title: AttrValue,
    description: AttrValue,
}

#[function_component(NavCard)]
fn nav_card(props: &NavCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes="nav-card">
            <h2>{ props.title.clone() }</h2>
            <p>{ props.description.clone() }</p>
        </Link<Route>>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="container home">
            <h1>{ "Showcase" }</h1>
            <p class="subtitle">{ "Posts, albums and todos from the JSONPlaceholder API" }</p>

            <div class="nav-cards">
                <NavCard
                    to={Route::Posts}
                    title="Posts"
                    description="Browse posts with their authors and comments."
                />
                <NavCard
                    to={Route::Albums}
                    title="Albums"
                    description="Pick an album to preview its photos."
                />
                <NavCard
                    to={Route::Todos}
                    title="Todos"
                    description="Filter todos by status and page through them."
                />
            </div>
        </div>
    }
}
