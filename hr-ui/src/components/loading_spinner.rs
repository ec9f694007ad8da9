//! Loading indicator.

use dioxus::prelude::*;

/// Shown over a chart card until its first response has been applied.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
            "Loading chart..."
        }
    }
}
