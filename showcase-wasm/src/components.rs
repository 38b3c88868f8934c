use crate::app::Route;
use showcase_client::models::User;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading"> { "Loading..." } </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackLinkProps {
    pub to: Route,
    pub label: AttrValue,
}

#[function_component(BackLink)]
pub fn back_link(props: &BackLinkProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes="back-link">
            { format!("← {}", props.label) }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current: usize,
    pub total: usize,
    pub on_select: Callback<usize>,
}

/// Numbered page buttons with prev/next, disabled at the bounds.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current;
    let total = props.total;

    if total <= 1 {
        return html! {};
    }

    let prev = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(current.saturating_sub(1).max(1)))
    };
    let next = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit((current + 1).min(total)))
    };

    html! {
        <nav class="pagination">
            <button class="page-prev" disabled={current <= 1} onclick={prev}>
                { "Previous" }
            </button>
            { for (1..=total).map(|number| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(number));
                html! {
                    <button
                        key={number}
                        class={classes!("page-number", (number == current).then_some("active"))}
                        {onclick}
                    >
                        { number.to_string() }
                    </button>
                }
            }) }
            <button class="page-next" disabled={current >= total} onclick={next}>
                { "Next" }
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub title: AttrValue,
    pub user: User,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;
    html! {
        <div class="user-card">
            <h3>{ props.title.clone() }</h3>
            <p class="user-name">{ format!("{} (@{})", user.name, user.username) }</p>
            <p>{ format!("Email: {}", user.email) }</p>
            <p>{ format!("Phone: {}", user.phone) }</p>
            <p>{ format!("Website: {}", user.website) }</p>
            <p>{ format!("City: {}", user.address.city) }</p>
            <div class="company">
                <p class="company-name">{ &user.company.name }</p>
                <p class="catch-phrase">{ format!("\"{}\"", user.company.catch_phrase) }</p>
                <p class="bs">{ &user.company.bs }</p>
            </div>
        </div>
    }
}
