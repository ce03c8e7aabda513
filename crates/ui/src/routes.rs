use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{StudentView, TeacherView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TeacherView)] Teacher {},
        #[route("/student", StudentView)] Student {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Cybersecurity Quiz Platform" }
                Tabs {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Tabs() -> Element {
    rsx! {
        nav { class: "tabs",
            Link { to: Route::Teacher {}, active_class: "active", "Teacher" }
            Link { to: Route::Student {}, active_class: "active", "Student" }
        }
    }
}
