//! Résumé dialog with an embedded PDF viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Modal, css};
use crate::components::icons as ic;
use crate::config::{RESUME_FILE_NAME, RESUME_PATH, RESUME_VIEWER_PARAMS};
use crate::utils::asset_url;

#[component]
pub fn ResumeModal(#[prop(into)] owner: String, on_close: Callback<()>) -> impl IntoView {
    let href = asset_url(RESUME_PATH);
    let src = format!("{}{}", href, RESUME_VIEWER_PARAMS);
    let title = format!("Resume - {}", owner);

    let actions = {
        let href = href.clone();
        move || {
            view! {
                <a
                    href=href.clone()
                    download=RESUME_FILE_NAME
                    class=css::actionButton
                    aria-label="Download resume"
                >
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </a>
                <a
                    href=href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=css::actionButton
                    aria-label="Open resume in new tab"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    "Open"
                </a>
            }
        }
    };

    view! {
        <Modal title=title.clone() on_close=on_close wide=true actions=actions>
            {leptos::html::iframe()
                .class(css::document)
                .src(src)
                .title(title)
                .attr("loading", "lazy")}
        </Modal>
    }
}
