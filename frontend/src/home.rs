use yew::prelude::*;
use shared_data::content::{
	self,
	CLUB_NAME,
	FEATURES,
	MILESTONES,
	SOCIAL_LINKS
};
use crate::{donate::DonationModal, style::SiteStyle};

#[function_component(Home)]
pub fn home() -> Html {
	// The modal only gets told whether it's open; it asks us to close it through `on_close`
	let donate_open = use_state(|| false);

	let open_clone = donate_open.clone();
	let open_donation = Callback::from(move |_: MouseEvent| open_clone.set(true));

	let close_clone = donate_open.clone();
	let close_donation = Callback::from(move |()| close_clone.set(false));

	let features = FEATURES.iter().map(|feature| html! {
		<div class="feature">
			<div class="feature-icon">{ feature.icon }</div>
			<h3>{ feature.title }</h3>
			<p>{ feature.description }</p>
		</div>
	}).collect::<Html>();

	let milestones = MILESTONES.iter().map(|milestone| html! {
		<div class="milestone">
			<div class="milestone-when">{ milestone.when.to_string() }</div>
			<div class="milestone-dot"></div>
			<div class="milestone-label">{ milestone.label }</div>
		</div>
	}).collect::<Html>();

	let socials = SOCIAL_LINKS.iter().map(|link| html! {
		<a href={ link.href }>{ link.name }</a>
	}).collect::<Html>();

	html! {
		<>
			<SiteStyle />
			<div id="page">
				<header id="hero">
					<div id="hero-shade"></div>
					<div id="hero-content">
						<h1>{ CLUB_NAME }</h1>
						<p>{ content::TAGLINE }</p>
						<div>
							// Nothing to join yet, so this one doesn't do anything
							<button class="pill primary">{ content::WAITLIST_LABEL }</button>
							<button class="pill secondary" onclick={ open_donation }>
								{ content::DONATE_LABEL }
							</button>
						</div>
					</div>
				</header>

				<section id="features">
					<h2 class="section-title">{ "What to Expect" }</h2>
					<div id="feature-grid">
						{ features }
					</div>
				</section>

				<section id="timeline">
					<h2 class="section-title">{ "Road to 2025" }</h2>
					<div id="milestones">
						{ milestones }
					</div>
				</section>

				<footer>
					<p>{ content::footer_text() }</p>
					<div id="socials">
						{ socials }
					</div>
				</footer>

				<DonationModal open={ *donate_open } on_close={ close_donation } />
			</div>
		</>
	}
}
