use crate::api::api_client;
use crate::app::Route;
use crate::components::{BackLink, Loading, UserCard};
use showcase_client::models::Comment;
use showcase_client::view::PostDetail;
use showcase_client::LoadState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

pub enum Msg {
    Loaded(i64, PostDetail),
}

pub struct PostDetailPage {
    detail: PostDetail,
}

impl PostDetailPage {
    fn load(ctx: &Context<Self>) -> PostDetail {
        let id = ctx.props().id;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(id, api_client().post_detail(id).await));
        });
        PostDetail::loading()
    }
}

impl Component for PostDetailPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            detail: Self::load(ctx),
        }
    }

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
                log::debug!("Discarding post #{}, page moved on", id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container post-detail">
                <BackLink to={Route::Posts} label="Back to Posts" />

                if self.detail.is_loading() {
                    <Loading />
                } else {
                    { self.view_body(ctx.props().id) }
                }
            </div>
        }
    }
}

impl PostDetailPage {
    fn view_body(&self, id: i64) -> Html {
        let Some(post) = self.detail.post.value() else {
            return html! {
                <div class="not-found">
                    <h1>{ "Post not found" }</h1>
                    <p>{ format!("Post #{} could not be loaded.", id) }</p>
                </div>
            };
        };

        let comments = self.detail.comments.items();

        html! {
            <>
                <article class="card post">
                    <span class="badge">{ format!("Post #{}", post.id) }</span>
                    <h1>{ &post.title }</h1>
                    <p>{ &post.body }</p>
                </article>

                { self.view_author() }

                <section class="comments">
                    <h2>{ format!("Comments ({})", comments.len()) }</h2>
                    { for comments.iter().map(view_comment) }
                </section>
            </>
        }
    }

    fn view_author(&self) -> Html {
        match (&self.detail.author, self.detail.author()) {
            (_, Some(author)) => html! {
                <UserCard title="About the author" user={author.clone()} />
            },
            (LoadState::NotFound, None) | (LoadState::Failed(_), None) => html! {
                <p class="muted">{ "Author information is unavailable." }</p>
            },
            _ => html! {},
        }
    }
}

fn view_comment(comment: &Comment) -> Html {
    html! {
        <div class="comment" key={comment.id}>
            <h4>{ &comment.name }</h4>
            <span class="comment-email">{ &comment.email }</span>
            <p>{ &comment.body }</p>
        </div>
    }
}
