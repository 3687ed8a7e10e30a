use dioxus::prelude::*;

use crate::client::{
    component::{ErrorToast, Header},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        ErrorToast {  }
        Outlet::<Route> {}
    })
}
