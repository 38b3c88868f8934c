use crate::api::api_client;
use crate::app::Route;
use crate::components::{BackLink, Loading, Pagination};
use showcase_client::error::FetchOutcome;
use showcase_client::models::Post;
use showcase_client::PostList;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum Msg {
    Loaded(FetchOutcome<Vec<Post>>),
    GoToPage(usize),
}

pub struct PostsPage {
    list: PostList,
}

impl Component for PostsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut list = PostList::new();
        list.start_loading();

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api_client().posts().await));
        });

        Self { list }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(outcome) => {
                self.list.finish_loading(outcome);
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

        html! {
            <div class="container posts-page">
                <BackLink to={Route::Home} label="Back to Home" />
                <h1>{ "Posts" }</h1>

                if self.list.is_loading() {
                    <Loading />
                } else if self.list.is_empty() {
                    <p class="empty">{ "No posts found." }</p>
                } else {
                    <div class="card-grid">
                        { for self.list.visible().iter().map(view_post_card) }
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

fn view_post_card(post: &Post) -> Html {
    html! {
        <div class="card post-card" key={post.id}>
            <span class="badge">{ format!("Post #{}", post.id) }</span>
            <h3>{ &post.title }</h3>
            <p>{ &post.body }</p>
            <Link<Route> to={Route::PostDetail { id: post.id }} classes="card-action">
                { "Read more" }
            </Link<Route>>
        </div>
    }
}
