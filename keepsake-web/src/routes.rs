use keepsake_core::ViewId;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/letter")]
    Letter,
    #[at("/music")]
    Music,
    #[at("/gallery")]
    Gallery,
    #[at("/surprise")]
    Surprise,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: ViewId) -> Self {
        match view {
            ViewId::Login => Route::Home,
            ViewId::Letter => Route::Letter,
            ViewId::Music => Route::Music,
            ViewId::Gallery => Route::Gallery,
            ViewId::Surprise => Route::Surprise,
        }
    }

    #[must_use]
    pub const fn to_view(&self) -> ViewId {
        match self {
            Route::Home => ViewId::Login,
            Route::Letter => ViewId::Letter,
            Route::Music => ViewId::Music,
            Route::Gallery => ViewId::Gallery,
            Route::Surprise => ViewId::Surprise,
        }
    }
}
