use crate::api::{api_client, ApiClient};
use crate::app::Route;
use crate::components::{BackLink, Loading};
use showcase_client::error::FetchOutcome;
use showcase_client::models::{Album, Photo};
use showcase_client::AlbumBrowser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum Msg {
    AlbumsLoaded(FetchOutcome<Vec<Album>>),
    SelectAlbum(i64),
    PhotosLoaded(i64, FetchOutcome<Vec<Photo>>),
}

pub struct AlbumsPage {
    browser: AlbumBrowser,
    api: ApiClient,
}

impl Component for AlbumsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = api_client();
        let mut browser = AlbumBrowser::new();
        browser.start_loading();

        let link = ctx.link().clone();
        let fetch_api = api.clone();
        spawn_local(async move {
            link.send_message(Msg::AlbumsLoaded(fetch_api.albums().await));
        });

        Self { browser, api }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AlbumsLoaded(outcome) => {
                self.browser.finish_loading(outcome);
                true
            }
            Msg::SelectAlbum(album_id) => {
                self.browser.select(album_id);

                let api = self.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let photos = api.album_photos(album_id).await;
                    link.send_message(Msg::PhotosLoaded(album_id, photos));
                });

                true
            }
            Msg::PhotosLoaded(album_id, outcome) => self.browser.finish_photos(album_id, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container albums-page">
                <BackLink to={Route::Home} label="Back to Home" />
                <h1>{ "Albums" }</h1>

                if self.browser.is_loading() {
                    <Loading />
                } else if self.browser.albums.items().is_empty() {
                    <p class="empty">{ "No albums found." }</p>
                } else {
                    <div class="album-list">
                        { for self.browser.albums.items().iter().map(|album| self.view_album(album, ctx)) }
                    </div>
                }

                { self.view_photos() }
            </div>
        }
    }
}

impl AlbumsPage {
    fn view_album(&self, album: &Album, ctx: &Context<Self>) -> Html {
        let album_id = album.id;
        let selected = self.browser.selected() == Some(album_id);
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::SelectAlbum(album_id));

        html! {
            <button
                key={album_id}
                class={classes!("album-card", selected.then_some("selected"))}
                {onclick}
            >
                <span class="badge">{ format!("Album #{}", album_id) }</span>
                <h3>{ &album.title }</h3>
            </button>
        }
    }

    fn view_photos(&self) -> Html {
        if self.browser.selected().is_none() {
            return html! {};
        }

        let title = self
            .browser
            .selected_album()
            .map(|album| album.title.clone())
            .unwrap_or_default();

        html! {
            <div class="photos-section">
                <h2>{ format!("Photos: {}", title) }</h2>

                if self.browser.photos.is_loading() {
                    <Loading />
                } else if self.browser.photos.items().is_empty() {
                    <p class="empty">{ "No photos in this album." }</p>
                } else {
                    <div class="photo-grid">
                        { for self.browser.photos.items().iter().map(view_photo) }
                    </div>
                }
            </div>
        }
    }
}

fn view_photo(photo: &Photo) -> Html {
    html! {
        <figure class="photo-card" key={photo.id}>
            <img src={photo.thumbnail_url.clone()} alt={photo.title.clone()} loading="lazy" />
            <figcaption>{ &photo.title }</figcaption>
        </figure>
    }
}
