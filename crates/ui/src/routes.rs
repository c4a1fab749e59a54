use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{NumbersView, RegisterView, WaitingView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", NumbersView)] Numbers {},
        #[route("/register", RegisterView)] Register {},
        #[route("/waiting", WaitingView)] Waiting {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            NavBar {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "nav-bar",
            ul {
                li { Link { to: Route::Numbers {}, "Numbers" } }
                li { Link { to: Route::Register {}, "Register" } }
                li { Link { to: Route::Waiting {}, "Waiting time" } }
            }
        }
    }
}
