use yew::prelude::*;
use shared_data::{BASE_STYLE, MODAL_STYLE, PAGE_STYLE};

// The modal is always mounted under the page, so its rules ride along with everything else
#[function_component(SiteStyle)]
pub fn site_style() -> Html {
	html! { <style>{ [BASE_STYLE, PAGE_STYLE, MODAL_STYLE].concat() }</style> }
}
