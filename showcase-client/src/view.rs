//! Per-view state: load status of every fetched resource plus the list
//! controllers that derive what is on screen.

use crate::error::FetchOutcome;
use crate::models::{Album, Comment, Photo, Post, Todo, User};
use crate::pagination::{
    Pager, TodoFilter, ALBUM_LIMIT, PHOTO_LIMIT, POSTS_PER_PAGE, RELATED_TODO_LIMIT,
    TODOS_PER_PAGE,
};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn start(&mut self) {
        *self = LoadState::Loading;
    }

    pub fn finish(&mut self, outcome: FetchOutcome<T>) {
        *self = outcome.into();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadState::NotFound)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded items; every other state reads as an empty collection.
    pub fn items(&self) -> &[T] {
        self.value().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T> From<FetchOutcome<T>> for LoadState<T> {
    fn from(outcome: FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Loaded(value) => LoadState::Loaded(value),
            FetchOutcome::NotFound => LoadState::NotFound,
            FetchOutcome::Failed(reason) => LoadState::Failed(reason),
        }
    }
}

fn truncated<T>(outcome: FetchOutcome<Vec<T>>, limit: usize) -> FetchOutcome<Vec<T>> {
    outcome.map(|mut items| {
        items.truncate(limit);
        items
    })
}

// ==================== Списки ====================

#[derive(Debug, Clone, PartialEq)]
pub struct PostList {
    pub posts: LoadState<Vec<Post>>,
    pager: Pager,
}

impl Default for PostList {
    fn default() -> Self {
        Self::new()
    }
}

impl PostList {
    pub fn new() -> Self {
        Self {
            posts: LoadState::Idle,
            pager: Pager::new(POSTS_PER_PAGE),
        }
    }

    pub fn start_loading(&mut self) {
        self.posts.start();
    }

    pub fn finish_loading(&mut self, outcome: FetchOutcome<Vec<Post>>) {
        self.posts.finish(outcome);
        self.pager.reset();
    }

    pub fn is_loading(&self) -> bool {
        self.posts.is_loading()
    }

    pub fn visible(&self) -> &[Post] {
        self.pager.window(self.posts.items())
    }

    pub fn len(&self) -> usize {
        self.posts.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_page(&self) -> usize {
        self.pager.effective_page(self.len())
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.len())
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.pager.page_numbers(self.len())
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next(self.len())
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let len = self.len();
        self.pager.go_to(page, len);
    }

    pub fn next_page(&mut self) {
        let len = self.len();
        self.pager.next(len);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub todos: LoadState<Vec<Todo>>,
    filter: TodoFilter,
    pager: Pager,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            todos: LoadState::Idle,
            filter: TodoFilter::All,
            pager: Pager::new(TODOS_PER_PAGE),
        }
    }

    pub fn start_loading(&mut self) {
        self.todos.start();
    }

    pub fn finish_loading(&mut self, outcome: FetchOutcome<Vec<Todo>>) {
        self.todos.finish(outcome);
        self.pager.reset();
    }

    pub fn is_loading(&self) -> bool {
        self.todos.is_loading()
    }

    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    /// Changing the filter always returns to the first page.
    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
        self.pager.reset();
    }

    pub fn filtered(&self) -> Vec<&Todo> {
        self.filter.apply(self.todos.items())
    }

    pub fn filtered_count(&self) -> usize {
        self.todos
            .items()
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .count()
    }

    pub fn visible(&self) -> Vec<&Todo> {
        let filtered = self.filtered();
        self.pager.window(&filtered).to_vec()
    }

    pub fn current_page(&self) -> usize {
        self.pager.effective_page(self.filtered_count())
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered_count())
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.pager.page_numbers(self.filtered_count())
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next(self.filtered_count())
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let len = self.filtered_count();
        self.pager.go_to(page, len);
    }

    pub fn next_page(&mut self) {
        let len = self.filtered_count();
        self.pager.next(len);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }
}

// ==================== Альбомы ====================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumBrowser {
    pub albums: LoadState<Vec<Album>>,
    pub photos: LoadState<Vec<Photo>>,
    selected: Option<i64>,
}

impl AlbumBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.albums.start();
    }

    pub fn finish_loading(&mut self, outcome: FetchOutcome<Vec<Album>>) {
        self.albums.finish(truncated(outcome, ALBUM_LIMIT));
    }

    pub fn is_loading(&self) -> bool {
        self.albums.is_loading()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_album(&self) -> Option<&Album> {
        let id = self.selected?;
        self.albums.items().iter().find(|album| album.id == id)
    }

    /// Marks `album_id` as selected and its photos as loading. The album
    /// list itself is left untouched.
    pub fn select(&mut self, album_id: i64) {
        self.selected = Some(album_id);
        self.photos.start();
    }

    /// Stores photos for `album_id`, capped at [`PHOTO_LIMIT`]. Returns
    /// `false` and drops the result if another album was selected since.
    pub fn finish_photos(&mut self, album_id: i64, outcome: FetchOutcome<Vec<Photo>>) -> bool {
        if self.selected != Some(album_id) {
            tracing::debug!("Discarding photos for album {}, no longer selected", album_id);
            return false;
        }
        self.photos.finish(truncated(outcome, PHOTO_LIMIT));
        true
    }
}

// ==================== Детальные страницы ====================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDetail {
    pub post: LoadState<Post>,
    pub comments: LoadState<Vec<Comment>>,
    pub author: LoadState<User>,
}

impl PostDetail {
    pub fn loading() -> Self {
        Self {
            post: LoadState::Loading,
            comments: LoadState::Loading,
            author: LoadState::Loading,
        }
    }

    /// Stores the post and returns the author id to fetch next, if any.
    pub fn apply_post(&mut self, outcome: FetchOutcome<Post>) -> Option<i64> {
        self.post.finish(outcome);
        match self.post.value() {
            Some(post) => Some(post.user_id),
            None => {
                self.author = LoadState::Idle;
                None
            }
        }
    }

    pub fn apply_comments(&mut self, outcome: FetchOutcome<Vec<Comment>>) {
        self.comments.finish(outcome);
    }

    pub fn apply_author(&mut self, outcome: FetchOutcome<User>) {
        self.author.finish(outcome);
    }

    /// The author, once resolved and only if it belongs to the loaded post.
    pub fn author(&self) -> Option<&User> {
        let post = self.post.value()?;
        self.author.value().filter(|user| user.id == post.user_id)
    }

    pub fn is_loading(&self) -> bool {
        self.post.is_loading() || self.comments.is_loading() || self.author.is_loading()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDetail {
    pub todo: LoadState<Todo>,
    pub owner: LoadState<User>,
    pub related: LoadState<Vec<Todo>>,
}

impl TodoDetail {
    pub fn loading() -> Self {
        Self {
            todo: LoadState::Loading,
            owner: LoadState::Loading,
            related: LoadState::Loading,
        }
    }

    /// Stores the todo and returns its owner id to fetch next, if any.
    pub fn apply_todo(&mut self, outcome: FetchOutcome<Todo>) -> Option<i64> {
        self.todo.finish(outcome);
        match self.todo.value() {
            Some(todo) => Some(todo.user_id),
            None => {
                self.owner = LoadState::Idle;
                self.related = LoadState::Idle;
                None
            }
        }
    }

    pub fn apply_owner(&mut self, outcome: FetchOutcome<User>) {
        self.owner.finish(outcome);
    }

    /// Keeps the owner's other todos: the current one excluded, first
    /// [`RELATED_TODO_LIMIT`] in API order.
    pub fn apply_related(&mut self, outcome: FetchOutcome<Vec<Todo>>) {
        let current = self.todo.value().map(|todo| todo.id);
        self.related.finish(outcome.map(|todos| {
            todos
                .into_iter()
                .filter(|todo| Some(todo.id) != current)
                .take(RELATED_TODO_LIMIT)
                .collect()
        }));
    }

    pub fn is_loading(&self) -> bool {
        self.todo.is_loading() || self.owner.is_loading() || self.related.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Company};

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("todo {}", id),
            completed,
        }
    }

    fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            user_id,
            title: format!("post {}", id),
            body: "body".into(),
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            name: "Ervin Howell".into(),
            username: "Antonette".into(),
            email: "Shanna@melissa.tv".into(),
            phone: "010-692-6593 x09125".into(),
            website: "anastasia.net".into(),
            company: Company {
                name: "Deckow-Crist".into(),
                catch_phrase: "Proactive didactic contingency".into(),
                bs: "synergize scalable supply-chains".into(),
            },
            address: Address {
                city: "Wisokyburgh".into(),
                ..Address::default()
            },
        }
    }

    fn photo(id: i64, album_id: i64) -> Photo {
        Photo {
            id,
            album_id,
            title: format!("photo {}", id),
            url: format!("https://via.placeholder.com/600/{}", id),
            thumbnail_url: format!("https://via.placeholder.com/150/{}", id),
        }
    }

    /// 23 todos, 13 of them pending.
    fn mixed_todos() -> Vec<Todo> {
        (1..=23).map(|id| todo(id, id % 2 == 0 && id <= 20)).collect()
    }

    #[test]
    fn failed_fetch_reads_as_empty_and_not_loading() {
        let mut list = PostList::new();
        list.start_loading();
        assert!(list.is_loading());

        list.finish_loading(FetchOutcome::Failed("connection refused".into()));
        assert!(!list.is_loading());
        assert!(list.visible().is_empty());
        assert_eq!(list.total_pages(), 0);
        assert_eq!(list.posts.error(), Some("connection refused"));
    }

    #[test]
    fn post_list_pages_by_six() {
        let mut list = PostList::new();
        list.finish_loading(FetchOutcome::Loaded((1..=100).map(|id| post(id, 1)).collect()));

        assert_eq!(list.total_pages(), 17);
        assert_eq!(list.visible().iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);

        list.go_to_page(17);
        assert_eq!(list.visible().iter().map(|p| p.id).collect::<Vec<_>>(), vec![97, 98, 99, 100]);
        assert!(!list.has_next());

        list.next_page();
        assert_eq!(list.current_page(), 17);
        list.prev_page();
        assert_eq!(list.current_page(), 16);
    }

    #[test]
    fn pending_filter_example() {
        let mut list = TodoList::new();
        list.finish_loading(FetchOutcome::Loaded(mixed_todos()));
        assert_eq!(list.total_pages(), 3);

        list.set_filter(TodoFilter::Pending);
        assert_eq!(list.filtered_count(), 13);
        assert_eq!(list.total_pages(), 2);

        let pending: Vec<i64> = list.filtered().iter().map(|t| t.id).collect();
        assert_eq!(list.visible().iter().map(|t| t.id).collect::<Vec<_>>(), pending[..10]);

        list.next_page();
        assert_eq!(list.visible().iter().map(|t| t.id).collect::<Vec<_>>(), pending[10..]);
        assert_eq!(list.visible().len(), 3);
    }

    #[test]
    fn changing_filter_resets_page() {
        let mut list = TodoList::new();
        list.finish_loading(FetchOutcome::Loaded(mixed_todos()));
        list.go_to_page(3);
        assert_eq!(list.current_page(), 3);

        list.set_filter(TodoFilter::Completed);
        assert_eq!(list.current_page(), 1);

        list.go_to_page(2);
        list.set_filter(TodoFilter::Completed);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn switching_back_to_all_restores_source_order() {
        let mut list = TodoList::new();
        list.finish_loading(FetchOutcome::Loaded(mixed_todos()));
        let before: Vec<i64> = list.filtered().iter().map(|t| t.id).collect();

        list.set_filter(TodoFilter::Completed);
        list.set_filter(TodoFilter::Completed);
        assert!(list.filtered().iter().all(|t| t.completed));
        list.set_filter(TodoFilter::All);

        let after: Vec<i64> = list.filtered().iter().map(|t| t.id).collect();
        assert_eq!(before, after);
        assert_eq!(list.todos.items().len(), 23);
    }

    #[test]
    fn album_list_and_photos_are_capped() {
        let mut browser = AlbumBrowser::new();
        browser.start_loading();
        browser.finish_loading(FetchOutcome::Loaded(
            (1..=100)
                .map(|id| Album {
                    id,
                    user_id: 1,
                    title: format!("album {}", id),
                })
                .collect(),
        ));
        assert_eq!(browser.albums.items().len(), ALBUM_LIMIT);

        browser.select(3);
        assert!(browser.photos.is_loading());
        assert!(!browser.is_loading());
        assert_eq!(browser.selected_album().map(|a| a.id), Some(3));

        let photos = (101..=150).map(|id| photo(id, 3)).collect();
        assert!(browser.finish_photos(3, FetchOutcome::Loaded(photos)));
        assert_eq!(browser.photos.items().len(), PHOTO_LIMIT);
        assert_eq!(browser.albums.items().len(), ALBUM_LIMIT);
    }

    #[test]
    fn stale_photos_are_discarded() {
        let mut browser = AlbumBrowser::new();
        browser.select(1);
        browser.select(2);

        assert!(!browser.finish_photos(1, FetchOutcome::Loaded(vec![photo(1, 1)])));
        assert!(browser.photos.is_loading());

        assert!(browser.finish_photos(2, FetchOutcome::Loaded(vec![photo(51, 2)])));
        assert_eq!(browser.photos.items()[0].album_id, 2);
    }

    #[test]
    fn author_hidden_until_resolved() {
        let mut detail = PostDetail::loading();
        let next = detail.apply_post(FetchOutcome::Loaded(post(1, 2)));
        assert_eq!(next, Some(2));
        assert!(detail.author().is_none());
        assert!(detail.is_loading());

        detail.apply_comments(FetchOutcome::Loaded(Vec::new()));
        detail.apply_author(FetchOutcome::Loaded(user(2)));

        let author = detail.author().unwrap();
        assert_eq!(author, &user(2));
        assert_eq!(author.company.name, "Deckow-Crist");
        assert!(!detail.is_loading());
    }

    #[test]
    fn mismatched_author_is_not_shown() {
        let mut detail = PostDetail::loading();
        detail.apply_post(FetchOutcome::Loaded(post(1, 2)));
        detail.apply_author(FetchOutcome::Loaded(user(9)));
        assert!(detail.author().is_none());
    }

    #[test]
    fn missing_post_skips_author() {
        let mut detail = PostDetail::loading();
        assert_eq!(detail.apply_post(FetchOutcome::NotFound), None);
        detail.apply_comments(FetchOutcome::Loaded(Vec::new()));
        assert!(detail.post.is_not_found());
        assert_eq!(detail.author, LoadState::Idle);
        assert!(!detail.is_loading());
    }

    #[test]
    fn related_todos_exclude_current_and_are_capped() {
        let mut detail = TodoDetail::loading();
        assert_eq!(detail.apply_todo(FetchOutcome::Loaded(todo(3, false))), Some(1));

        detail.apply_owner(FetchOutcome::Loaded(user(1)));
        detail.apply_related(FetchOutcome::Loaded((1..=20).map(|id| todo(id, false)).collect()));

        let related: Vec<i64> = detail.related.items().iter().map(|t| t.id).collect();
        assert_eq!(related, vec![1, 2, 4, 5, 6]);
        assert!(!detail.is_loading());
    }

    #[test]
    fn failed_todo_clears_dependent_loading() {
        let mut detail = TodoDetail::loading();
        assert_eq!(detail.apply_todo(FetchOutcome::Failed("timeout".into())), None);
        assert!(!detail.is_loading());
        assert!(detail.related.items().is_empty());
    }
}
